//! FIFO implementation

use std::collections::VecDeque;

use crate::ParamBuffer;

/// FIFO of validated, not-yet-applied parameter buffers.
///
/// Producer is the submission path; consumer is the vsync interrupt
/// handler. Every operation completes in bounded time.
#[derive(Debug, Default)]
pub struct PendingQueue {
    inner: spin::Mutex<VecDeque<ParamBuffer>>,
}

impl PendingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a validated buffer (submission context)
    pub fn enqueue(&self, buffer: ParamBuffer) {
        self.inner.lock().push_back(buffer);
    }

    /// Take the oldest pending buffer, if any (interrupt context,
    /// non-blocking)
    pub fn dequeue_one(&self) -> Option<ParamBuffer> {
        self.inner.lock().pop_front()
    }

    /// Empty the queue, returning every still-pending buffer in FIFO
    /// order so the caller can error-complete them (stream-stop path)
    pub fn drain_pending(&self) -> Vec<ParamBuffer> {
        self.inner.lock().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isp_config::ParamsConfig;

    fn buffer(id: u32) -> ParamBuffer {
        ParamBuffer {
            id,
            config: ParamsConfig::default(),
        }
    }

    #[test]
    fn test_fifo_order() {
        let queue = PendingQueue::new();
        queue.enqueue(buffer(1));
        queue.enqueue(buffer(2));
        queue.enqueue(buffer(3));

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.dequeue_one().map(|b| b.id), Some(1));
        assert_eq!(queue.dequeue_one().map(|b| b.id), Some(2));
        assert_eq!(queue.dequeue_one().map(|b| b.id), Some(3));
        assert_eq!(queue.dequeue_one(), None);
    }

    #[test]
    fn test_dequeue_empty_is_none() {
        let queue = PendingQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue_one(), None);
    }

    #[test]
    fn test_drain_returns_all_in_order() {
        let queue = PendingQueue::new();
        for id in 0..5 {
            queue.enqueue(buffer(id));
        }

        let drained = queue.drain_pending();
        assert_eq!(drained.iter().map(|b| b.id).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_shared_across_threads() {
        use std::sync::Arc;

        let queue = Arc::new(PendingQueue::new());
        let producer = {
            let queue = Arc::clone(&queue);
            std::thread::spawn(move || {
                for id in 0..100 {
                    queue.enqueue(buffer(id));
                }
            })
        };

        producer.join().unwrap();
        let mut seen = 0;
        while queue.dequeue_one().is_some() {
            seen += 1;
        }
        assert_eq!(seen, 100);
    }
}
