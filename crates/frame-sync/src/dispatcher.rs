//! Frame-boundary dispatcher state machine

use std::sync::Arc;

use isp_config::FrameGeometry;
use isp_regs::{apply_all, map, RegisterIo};
use param_queue::ParamBuffer;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::completion::{BufferStatus, CompletedBuffer};
use crate::PipelineShared;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Streaming,
}

/// Applies queued parameter buffers at vertical-sync boundaries.
///
/// [`Dispatcher::handle_irq`] is the interrupt-context entry point: it
/// runs to completion, never blocks, and never fails. All fallible work
/// happened at submission time.
pub struct Dispatcher<R: RegisterIo> {
    shared: Arc<PipelineShared>,
    regs: R,
    phase: Phase,
    sequence: u32,
    done_tx: mpsc::UnboundedSender<CompletedBuffer>,
}

impl<R: RegisterIo> Dispatcher<R> {
    pub(crate) fn new(
        shared: Arc<PipelineShared>,
        regs: R,
        done_tx: mpsc::UnboundedSender<CompletedBuffer>,
    ) -> Self {
        Self {
            shared,
            regs,
            phase: Phase::Idle,
            sequence: 0,
            done_tx,
        }
    }

    /// Enter the streaming state, capturing the geometry negotiated for
    /// this session. Resets the frame sequence counter.
    pub fn start_streaming(&mut self, geometry: FrameGeometry) {
        *self.shared.geometry.write() = Some(geometry);
        self.phase = Phase::Streaming;
        self.sequence = 0;
        info!(
            width = geometry.width,
            height = geometry.height,
            "stream started"
        );
    }

    /// Leave the streaming state. Every buffer still queued is completed
    /// with an error status before this returns; none is silently lost.
    pub fn stop_streaming(&mut self) {
        self.phase = Phase::Idle;
        *self.shared.geometry.write() = None;

        let dropped = self.shared.queue.drain_pending();
        if !dropped.is_empty() {
            warn!(count = dropped.len(), "stream stopped with buffers pending");
        }
        for buffer in dropped {
            self.complete(buffer, BufferStatus::Error, None);
        }
        info!("stream stopped");
    }

    pub fn is_streaming(&self) -> bool {
        self.phase == Phase::Streaming
    }

    /// Interrupt-context entry point.
    ///
    /// Ignores interrupts that do not carry a vsync flag. At a vsync
    /// boundary, applies at most one pending buffer and completes it.
    pub fn handle_irq(&mut self, status: u32) {
        if status & map::IRQ_VSYNC_ANY == 0 {
            return;
        }
        self.on_vsync();
    }

    fn on_vsync(&mut self) {
        if self.phase != Phase::Streaming {
            return;
        }

        // Hardware keeps the previous configuration on an empty queue
        let Some(buffer) = self.shared.queue.dequeue_one() else {
            return;
        };

        apply_all(&mut self.regs, &buffer.config);

        let sequence = self.sequence;
        self.sequence = self.sequence.wrapping_add(1);
        debug!(id = buffer.id, sequence, "applied parameter buffer");
        self.complete(buffer, BufferStatus::Done, Some(sequence));
    }

    fn complete(&self, buffer: ParamBuffer, status: BufferStatus, sequence: Option<u32>) {
        // A closed receiver means the owning subsystem is gone; there is
        // nobody left to hand the buffer to.
        let _ = self.done_tx.send(CompletedBuffer {
            buffer,
            status,
            sequence,
            timestamp_ns: timestamp_ns(),
        });
    }

    /// The register transport, for inspection after streaming
    pub fn regs(&self) -> &R {
        &self.regs
    }
}

fn timestamp_ns() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
