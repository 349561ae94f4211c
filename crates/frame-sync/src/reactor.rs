//! Vsync event reactor
//!
//! Single-threaded, run-to-completion loop between the hardware event
//! source and the dispatcher. Every event is handled by a synchronous
//! method with no await point, so a handler can never suspend while a
//! buffer is in flight.

use isp_config::FrameGeometry;
use isp_regs::RegisterIo;
use tokio::sync::mpsc;
use tracing::info;

use crate::dispatcher::Dispatcher;

/// Events delivered to the reactor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineEvent {
    /// Stream session starts with the negotiated geometry
    StreamOn(FrameGeometry),
    /// Stream session ends; pending buffers are error-completed
    StreamOff,
    /// Interrupt status word from the pipe; only vsync flags matter
    Irq(u32),
}

/// Drives a [`Dispatcher`] from a pipeline event stream
pub struct VsyncReactor<R: RegisterIo> {
    dispatcher: Dispatcher<R>,
    events: mpsc::UnboundedReceiver<PipelineEvent>,
}

impl<R: RegisterIo> VsyncReactor<R> {
    pub fn new(
        dispatcher: Dispatcher<R>,
        events: mpsc::UnboundedReceiver<PipelineEvent>,
    ) -> Self {
        Self { dispatcher, events }
    }

    /// Run until the event source closes, then hand the dispatcher back.
    pub async fn run(mut self) -> Dispatcher<R> {
        info!("pipeline event loop started");
        while let Some(event) = self.events.recv().await {
            match event {
                PipelineEvent::StreamOn(geometry) => self.dispatcher.start_streaming(geometry),
                PipelineEvent::StreamOff => self.dispatcher.stop_streaming(),
                PipelineEvent::Irq(status) => self.dispatcher.handle_irq(status),
            }
        }
        info!("pipeline event loop stopped");
        self.dispatcher
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{pipeline, BufferStatus};
    use isp_config::{update, BprConfig, DeviceCaps, ParamsConfig};
    use isp_regs::{map, MemRegs};

    #[tokio::test]
    async fn test_reactor_dispatches_events_in_order() {
        let (submitter, mut dispatcher, mut done_rx) =
            pipeline(DeviceCaps::default(), MemRegs::new());
        dispatcher.start_streaming(FrameGeometry::new(640, 480));

        let cfg = ParamsConfig {
            update_mask: update::BPR,
            bpr: BprConfig { en: 1, strength: 3 },
            ..Default::default()
        };
        submitter.submit(10, cfg.as_bytes()).unwrap();
        submitter.submit(11, cfg.as_bytes()).unwrap();

        let (events_tx, events_rx) = mpsc::unbounded_channel();
        events_tx.send(PipelineEvent::Irq(map::IRQ_MAIN_VSYNC)).unwrap();
        events_tx.send(PipelineEvent::StreamOff).unwrap();
        drop(events_tx);

        let dispatcher = VsyncReactor::new(dispatcher, events_rx).run().await;
        assert!(!dispatcher.is_streaming());

        // One applied at the vsync, the other failed by stream-off
        let applied = done_rx.recv().await.unwrap();
        assert_eq!(applied.buffer.id, 10);
        assert_eq!(applied.status, BufferStatus::Done);
        assert_eq!(applied.sequence, Some(0));

        let dropped = done_rx.recv().await.unwrap();
        assert_eq!(dropped.buffer.id, 11);
        assert_eq!(dropped.status, BufferStatus::Error);
    }

    #[tokio::test]
    async fn test_reactor_stream_on_enables_submission() {
        let (submitter, dispatcher, _done_rx) =
            pipeline(DeviceCaps::default(), MemRegs::new());

        let (events_tx, events_rx) = mpsc::unbounded_channel();
        events_tx
            .send(PipelineEvent::StreamOn(FrameGeometry::new(1920, 1080)))
            .unwrap();
        drop(events_tx);

        let dispatcher = VsyncReactor::new(dispatcher, events_rx).run().await;
        assert!(dispatcher.is_streaming());

        let cfg = ParamsConfig {
            update_mask: update::BPR,
            bpr: BprConfig { en: 1, strength: 1 },
            ..Default::default()
        };
        submitter.submit(0, cfg.as_bytes()).unwrap();
        assert_eq!(submitter.pending(), 1);
    }
}
