//! Parameter Buffer Validation
//!
//! Pure validators for ISP parameter buffers: per-module bit-width checks
//! against the declared register field widths, the histogram window
//! geometry checker, and the whole-buffer validator invoked at submission
//! time. Nothing here touches hardware; the frame-boundary apply path
//! only ever sees buffers that passed these checks.

mod buffer;
mod error;
mod histogram;
mod modules;

pub use buffer::validate_params;
pub use error::ValidationError;
pub use histogram::validate_histogram;
pub use modules::{
    validate_blc, validate_bpr, validate_cc, validate_ce, validate_dm, validate_ex,
};
