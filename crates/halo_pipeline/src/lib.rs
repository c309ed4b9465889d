//! Concurrent frame production.
//!
//! A bounded job queue fans render work across a fixed pool of render
//! workers; a bounded frame queue fans completed frames across a fixed
//! pool of sink workers that encode and persist them. Queue capacities
//! match the pool sizes, so a slow sink throttles rendering instead of
//! buffering frames without bound.

mod error;
mod pipeline;
mod sink;

pub use error::PipelineError;
pub use pipeline::{Pipeline, PoolConfig, RenderJob};
pub use sink::{DiskSink, FrameSink, OutputFormat};
