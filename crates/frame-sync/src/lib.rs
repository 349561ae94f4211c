//! Frame-Boundary Parameter Dispatch
//!
//! Ties the pipeline together: a submission front-end validates and
//! queues parameter buffers, and a dispatcher applies at most one queued
//! buffer per vertical-sync interrupt, completing it back to the external
//! buffer subsystem with a sequence number and timestamp. Stream-stop
//! drains everything still pending into error completions.
//!
//! The interrupt-context path performs no validation and no fallible
//! work: buffers are fully checked at submission time.

mod completion;
mod dispatcher;
mod reactor;
mod submit;

pub use completion::{BufferStatus, CompletedBuffer};
pub use dispatcher::Dispatcher;
pub use reactor::{PipelineEvent, VsyncReactor};
pub use submit::{ParamsSubmitter, SubmitError};

use std::sync::Arc;

use isp_config::{DeviceCaps, FrameGeometry};
use isp_regs::RegisterIo;
use param_queue::PendingQueue;
use tokio::sync::mpsc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// State shared between the submission path and the dispatcher.
///
/// The pending queue is the only state the interrupt-context path
/// touches; the geometry cell is read by submitters and written on
/// stream transitions, both in ordinary context.
pub(crate) struct PipelineShared {
    pub(crate) caps: DeviceCaps,
    pub(crate) queue: PendingQueue,
    pub(crate) geometry: spin::RwLock<Option<FrameGeometry>>,
}

/// Build a parameter pipeline around a register transport.
///
/// Returns the cloneable submission handle, the dispatcher (to be driven
/// by the vsync event source, typically through [`VsyncReactor`]), and
/// the completion stream consumed by the external buffer subsystem.
pub fn pipeline<R: RegisterIo>(
    caps: DeviceCaps,
    regs: R,
) -> (
    ParamsSubmitter,
    Dispatcher<R>,
    mpsc::UnboundedReceiver<CompletedBuffer>,
) {
    let shared = Arc::new(PipelineShared {
        caps,
        queue: PendingQueue::new(),
        geometry: spin::RwLock::new(None),
    });
    let (done_tx, done_rx) = mpsc::unbounded_channel();

    info!("parameter pipeline created");

    (
        ParamsSubmitter::new(Arc::clone(&shared)),
        Dispatcher::new(shared, regs, done_tx),
        done_rx,
    )
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}
