//! Negotiated frame geometry

use serde::{Deserialize, Serialize};

/// Largest frame width the pixel pipe can address
pub const MAX_FRAME_WIDTH: u32 = 4094;

/// Largest frame height the pixel pipe can address
pub const MAX_FRAME_HEIGHT: u32 = 4094;

/// Active frame geometry, negotiated by the media graph and captured at
/// stream-start. Read-only to the parameter pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameGeometry {
    pub width: u32,
    pub height: u32,
}

impl FrameGeometry {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}
