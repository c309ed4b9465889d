//! Command-line driver: renders the animated demo scene and streams the
//! frames to disk through the worker pipeline.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use halo_core::premade;
use halo_pipeline::{DiskSink, OutputFormat, Pipeline, PoolConfig, RenderJob};
use halo_renderer::{Camera, RenderConfig};

/// Render an animated sphere scene and stream the frames to disk.
#[derive(Parser, Debug)]
#[command(name = "halo", version, about)]
struct Args {
    /// Number of animation frames to render
    #[arg(long, default_value_t = 1000)]
    frames: u32,

    /// Render worker threads
    #[arg(long, default_value_t = 31)]
    render_workers: usize,

    /// Encode/persist worker threads
    #[arg(long, default_value_t = 10)]
    sink_workers: usize,

    /// Output directory for rendered frames
    #[arg(long, default_value = "pics")]
    out_dir: PathBuf,

    /// Output image format
    #[arg(long, value_enum, default_value_t = Format::Jpeg)]
    format: Format,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Jpeg,
    Png,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Jpeg => OutputFormat::Jpeg,
            Format::Png => OutputFormat::Png,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    fs::create_dir_all(&args.out_dir)?;

    let pipeline = Pipeline::new(
        Camera::default(),
        RenderConfig::default(),
        PoolConfig {
            render_workers: args.render_workers,
            sink_workers: args.sink_workers,
        },
    );
    let sink = Arc::new(DiskSink::new(&args.out_dir, args.format.into()));

    let frame_count = args.frames;
    let jobs = (0..frame_count).map(move |i| RenderJob::new(premade::sweep_scene(i, frame_count), i));

    log::info!(
        "rendering {} frames to {}",
        args.frames,
        args.out_dir.display()
    );
    let start = Instant::now();
    pipeline.run(jobs, sink)?;
    log::info!("finished in {:.2?}", start.elapsed());

    Ok(())
}
