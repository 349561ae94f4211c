//! Submission front-end
//!
//! All fallible work happens here, synchronously, before a buffer enters
//! the pending queue: payload decode, stream-state check, and full
//! validation. The interrupt path downstream never observes an invalid
//! buffer.

use std::sync::Arc;

use isp_config::{ParamsConfig, PayloadError};
use param_queue::ParamBuffer;
use param_validator::{validate_params, ValidationError};
use thiserror::Error;
use tracing::{debug, warn};

use crate::PipelineShared;

/// Errors reported to the submitter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// No active stream session; there is no negotiated geometry to
    /// validate against. The buffer is not held.
    #[error("pipeline is not streaming")]
    StreamNotActive,

    /// Payload size does not match the declared configuration struct
    #[error("bad payload: {0}")]
    Payload(#[from] PayloadError),

    /// The configuration failed validation
    #[error("invalid parameters: {0}")]
    Validation(#[from] ValidationError),
}

/// Cloneable handle for queueing parameter buffers from ordinary context
#[derive(Clone)]
pub struct ParamsSubmitter {
    shared: Arc<PipelineShared>,
}

impl ParamsSubmitter {
    pub(crate) fn new(shared: Arc<PipelineShared>) -> Self {
        Self { shared }
    }

    /// Validate and queue one parameter buffer.
    ///
    /// `payload` must be exactly [`ParamsConfig::PAYLOAD_SIZE`] bytes. On
    /// success the buffer will be applied at an upcoming frame boundary
    /// and completed through the pipeline's completion stream; on error
    /// the buffer never enters the queue.
    pub fn submit(&self, id: u32, payload: &[u8]) -> Result<(), SubmitError> {
        let config = ParamsConfig::from_payload(payload)?;

        let geometry =
            (*self.shared.geometry.read()).ok_or(SubmitError::StreamNotActive)?;

        if let Err(err) = validate_params(&self.shared.caps, geometry, &config) {
            warn!(id, %err, "rejected parameter buffer");
            return Err(err.into());
        }

        self.shared.queue.enqueue(ParamBuffer { id, config });
        debug!(id, pending = self.shared.queue.len(), "queued parameter buffer");
        Ok(())
    }

    /// Number of buffers waiting to be applied
    pub fn pending(&self) -> usize {
        self.shared.queue.len()
    }
}
