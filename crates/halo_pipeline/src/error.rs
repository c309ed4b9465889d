//! Pipeline error types.

use thiserror::Error;

/// Errors surfaced by the render/persist pipeline.
///
/// Encode and write failures are fatal to a run; there is no retry and no
/// per-frame recovery.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("frame encode failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("render worker panicked")]
    RenderWorkerPanic,

    #[error("sink worker panicked")]
    SinkWorkerPanic,
}
