//! Histogram encoding constants
//!
//! Raw register encodings for the histogram window fields, plus the fixed
//! hardware budgets the geometry checker enforces.

use serde::{Deserialize, Serialize};

/// Hardware ceiling on accumulated bins per line
pub const MAX_BINS_PER_LINE: u32 = 320;

/// Maximum region count per axis (the hardware stores `count - 1` in a
/// 4-bit field)
pub const MAX_REGIONS_PER_AXIS: u32 = 16;

/// Maximum decimation exponent (factor `1 << 4` = 16)
pub const MAX_DECIMATION_EXP: u32 = 4;

/// Histogram bucket count selector
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoBin {
    Bin4 = 0,
    Bin16 = 1,
    Bin64 = 2,
    Bin256 = 3,
}

impl HistoBin {
    /// Decode the raw register encoding
    pub const fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(HistoBin::Bin4),
            1 => Some(HistoBin::Bin16),
            2 => Some(HistoBin::Bin64),
            3 => Some(HistoBin::Bin256),
            _ => None,
        }
    }

    /// Number of accumulation buckets this selector produces
    pub const fn bucket_count(self) -> u32 {
        match self {
            HistoBin::Bin4 => 4,
            HistoBin::Bin16 => 16,
            HistoBin::Bin64 => 64,
            HistoBin::Bin256 => 256,
        }
    }
}

/// Statistics tap point along the pixel pipe
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoSource {
    /// Raw sensor data before any correction
    Raw = 0,
    /// After exposure correction
    PostExposure = 1,
    /// After contrast enhancement
    PostContrast = 2,
}

/// Accumulation dynamic range selector
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoDynRange {
    Full = 0,
    Bright = 1,
    Dark = 2,
}

/// Component selection
///
/// [`HistoComponent::All`] accumulates R, G, B and luminance at once and
/// quadruples the bins-per-line cost.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoComponent {
    Red = 0,
    Green = 1,
    Blue = 2,
    Luminance = 3,
    All = 4,
}
