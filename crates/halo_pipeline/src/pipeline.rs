//! The frame production pipeline: a bounded job queue fanned across render
//! workers, and a bounded frame queue fanned across sink workers.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, Receiver, Sender};
use halo_core::Scene;
use halo_renderer::{render_frame, Camera, Frame, RenderConfig};
use log::{debug, info};

use crate::{FrameSink, PipelineError};

/// One frame's worth of work: a scene snapshot plus the index to render it
/// under.
///
/// Created once per animation frame by the driver and consumed exactly
/// once by one render worker. Each job owns its scene, so workers never
/// contend on scene data.
#[derive(Debug, Clone)]
pub struct RenderJob {
    pub scene: Scene,
    pub frame_index: u32,
}

impl RenderJob {
    pub fn new(scene: Scene, frame_index: u32) -> Self {
        Self { scene, frame_index }
    }
}

/// Worker pool sizes. Queue capacities match the pool sizes, so a full
/// frame queue throttles rendering to sink throughput.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub render_workers: usize,
    pub sink_workers: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            render_workers: 31,
            sink_workers: 10,
        }
    }
}

/// Drives render jobs through the render and sink worker pools.
pub struct Pipeline {
    camera: Arc<Camera>,
    render_config: RenderConfig,
    pool: PoolConfig,
}

impl Pipeline {
    pub fn new(camera: Camera, render_config: RenderConfig, pool: PoolConfig) -> Self {
        Self {
            camera: Arc::new(camera),
            render_config,
            pool,
        }
    }

    /// Run all jobs to completion.
    ///
    /// Blocks until every submitted job has been rendered and every
    /// rendered frame handed to the sink, then returns the first worker
    /// error, if any. Frames may complete and persist out of index order;
    /// the guarantee is unique-and-complete, not FIFO.
    pub fn run(
        &self,
        jobs: impl IntoIterator<Item = RenderJob>,
        sink: Arc<dyn FrameSink>,
    ) -> Result<(), PipelineError> {
        let (job_tx, job_rx) = bounded::<RenderJob>(self.pool.render_workers);
        let (frame_tx, frame_rx) = bounded::<Frame>(self.pool.sink_workers);

        let render_handles: Vec<JoinHandle<()>> = (0..self.pool.render_workers)
            .map(|worker| {
                let jobs = job_rx.clone();
                let frames = frame_tx.clone();
                let camera = Arc::clone(&self.camera);
                let config = self.render_config.clone();
                thread::Builder::new()
                    .name(format!("halo-render-{worker}"))
                    .spawn(move || render_worker(&camera, &config, &jobs, &frames))
            })
            .collect::<Result<_, _>>()?;
        drop(job_rx);
        // The workers now hold the only frame senders; the frame queue
        // closes when the last of them exits.
        drop(frame_tx);

        let sink_handles: Vec<JoinHandle<Result<(), PipelineError>>> = (0..self.pool.sink_workers)
            .map(|worker| {
                let frames = frame_rx.clone();
                let sink = Arc::clone(&sink);
                thread::Builder::new()
                    .name(format!("halo-sink-{worker}"))
                    .spawn(move || sink_worker(&frames, sink.as_ref()))
            })
            .collect::<Result<_, _>>()?;
        drop(frame_rx);

        let mut submitted = 0u64;
        for job in jobs {
            debug!("submitting frame {}", job.frame_index);
            if job_tx.send(job).is_err() {
                // Every render worker is gone; nothing left to submit to.
                break;
            }
            submitted += 1;
        }
        drop(job_tx);
        info!("submitted {submitted} render jobs");

        // Completion barrier: one join per launched render worker, never
        // per job.
        let mut result = Ok(());
        for handle in render_handles {
            if handle.join().is_err() && result.is_ok() {
                result = Err(PipelineError::RenderWorkerPanic);
            }
        }
        for handle in sink_handles {
            match handle.join() {
                Ok(Ok(())) => {}
                Ok(Err(err)) => {
                    if result.is_ok() {
                        result = Err(err);
                    }
                }
                Err(_) => {
                    if result.is_ok() {
                        result = Err(PipelineError::SinkWorkerPanic);
                    }
                }
            }
        }
        result
    }
}

/// Render worker loop: drain the job queue until it is closed and empty.
fn render_worker(
    camera: &Camera,
    config: &RenderConfig,
    jobs: &Receiver<RenderJob>,
    frames: &Sender<Frame>,
) {
    for job in jobs {
        let frame = render_frame(camera, &job.scene, config, job.frame_index);
        // Blocks while the frame queue is full; this is the backpressure
        // point between rendering and persistence.
        if frames.send(frame).is_err() {
            break;
        }
    }
}

/// Sink worker loop: persist frames until the queue is closed and empty,
/// stopping at the first write error.
fn sink_worker(frames: &Receiver<Frame>, sink: &dyn FrameSink) -> Result<(), PipelineError> {
    for frame in frames {
        sink.write_frame(&frame)?;
    }
    Ok(())
}
