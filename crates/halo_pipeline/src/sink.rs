//! Frame sinks: encoding and persisting rendered frames.

use std::path::PathBuf;

use halo_renderer::Frame;
use image::{ColorType, ImageFormat};
use log::debug;

use crate::PipelineError;

/// Output encoding for persisted frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Png,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Png => "png",
        }
    }

    fn image_format(&self) -> ImageFormat {
        match self {
            OutputFormat::Jpeg => ImageFormat::Jpeg,
            OutputFormat::Png => ImageFormat::Png,
        }
    }
}

/// Consumer of finished frames.
///
/// Implementations are shared across the sink worker pool; a write error
/// is fatal to the run.
pub trait FrameSink: Send + Sync {
    fn write_frame(&self, frame: &Frame) -> Result<(), PipelineError>;
}

/// Encodes frames as RGBA8 images and writes them into a directory, one
/// file per frame index.
///
/// The directory must already exist; a missing or unwritable directory
/// fails the write.
pub struct DiskSink {
    dir: PathBuf,
    format: OutputFormat,
}

impl DiskSink {
    pub fn new(dir: impl Into<PathBuf>, format: OutputFormat) -> Self {
        Self {
            dir: dir.into(),
            format,
        }
    }

    fn frame_path(&self, frame_index: u32) -> PathBuf {
        self.dir
            .join(format!("frame{}.{}", frame_index, self.format.extension()))
    }
}

impl FrameSink for DiskSink {
    fn write_frame(&self, frame: &Frame) -> Result<(), PipelineError> {
        let path = self.frame_path(frame.frame_index);
        image::save_buffer_with_format(
            &path,
            &frame.to_rgba(),
            frame.width,
            frame.height,
            ColorType::Rgba8,
            self.format.image_format(),
        )?;
        debug!("wrote {}", path.display());
        Ok(())
    }
}
