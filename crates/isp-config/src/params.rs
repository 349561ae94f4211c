//! Parameter buffer payload layout
//!
//! Every field is a raw `u32` so the structs have no padding and a stable
//! `repr(C)` binary image. Values are range-checked by the validator crate
//! before they reach any register programming; enum-like fields carry the
//! raw encodings defined in [`crate::histogram`].

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::mem;
use thiserror::Error;

/// Module-update mask bits.
///
/// A parameter buffer only reprograms the modules whose bit is set in
/// [`ParamsConfig::update_mask`]; any bit outside [`update::ALL`] rejects
/// the whole buffer.
pub mod update {
    /// Bad pixel removal
    pub const BPR: u32 = 1 << 0;
    /// Black level correction
    pub const BLC: u32 = 1 << 1;
    /// Exposure correction
    pub const EXPOSURE: u32 = 1 << 2;
    /// Demosaicing filters
    pub const DEMOSAIC: u32 = 1 << 3;
    /// Color conversion matrix
    pub const COLOR_CONV: u32 = 1 << 4;
    /// Contrast enhancement
    pub const CONTRAST: u32 = 1 << 5;
    /// Histogram statistics window
    pub const HISTOGRAM: u32 = 1 << 6;

    /// All modules the pipeline knows about
    pub const ALL: u32 = BPR | BLC | EXPOSURE | DEMOSAIC | COLOR_CONV | CONTRAST | HISTOGRAM;
}

/// Bad pixel removal configuration
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Pod, Zeroable)]
pub struct BprConfig {
    /// Enable the block (0 = off)
    pub en: u32,
    /// Detection strength, 3-bit
    pub strength: u32,
}

/// Black level correction configuration
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Pod, Zeroable)]
pub struct BlcConfig {
    pub en: u32,
    /// Red offset, 8-bit
    pub blc_r: u32,
    /// Green offset, 8-bit
    pub blc_g: u32,
    /// Blue offset, 8-bit
    pub blc_b: u32,
}

/// Exposure correction configuration
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Pod, Zeroable)]
pub struct ExposureConfig {
    pub en: u32,
    /// Channel multipliers, 8-bit each
    pub mult_r: u32,
    pub mult_g: u32,
    pub mult_b: u32,
    /// Channel shifts, 3-bit each
    pub shift_r: u32,
    pub shift_g: u32,
    pub shift_b: u32,
}

/// Demosaicing filter configuration, all coefficients 3-bit
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Pod, Zeroable)]
pub struct DemosaicConfig {
    pub en: u32,
    /// Edge detection strength
    pub edge: u32,
    /// Horizontal line detection strength
    pub lineh: u32,
    /// Vertical line detection strength
    pub linev: u32,
    /// Peak detection strength
    pub peak: u32,
}

/// Output clamp disabled
pub const CLAMP_DISABLED: u32 = 0;
/// Clamp luminance/chroma to the 235 broadcast range
pub const CLAMP_YUV_235: u32 = 1;
/// Clamp RGB components to the 235 broadcast range
pub const CLAMP_RGB_235: u32 = 2;

/// Color conversion matrix configuration
///
/// Nine 11-bit matrix coefficients plus one 10-bit additive offset per
/// output row.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Pod, Zeroable)]
pub struct ColorConvConfig {
    pub en: u32,
    /// One of [`CLAMP_DISABLED`], [`CLAMP_YUV_235`], [`CLAMP_RGB_235`]
    pub clamp: u32,
    pub rr: u32,
    pub rg: u32,
    pub rb: u32,
    /// Red row offset, 10-bit
    pub ra: u32,
    pub gr: u32,
    pub gg: u32,
    pub gb: u32,
    /// Green row offset, 10-bit
    pub ga: u32,
    pub br: u32,
    pub bg: u32,
    pub bb: u32,
    /// Blue row offset, 10-bit
    pub ba: u32,
}

/// Contrast enhancement configuration
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Pod, Zeroable)]
pub struct ContrastConfig {
    pub en: u32,
    /// Luminance amplification coefficients, 6-bit each
    pub lum: [u32; 9],
}

/// Histogram statistics window configuration
///
/// Raw encodings for `src`, `bin`, `dyn_range` and `comp` are defined in
/// [`crate::histogram`]. Decimation fields hold the exponent of the
/// decimation factor; region counts are 1-based.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Pod, Zeroable)]
pub struct HistogramConfig {
    pub en: u32,
    /// Statistics tap point, see [`crate::HistoSource`]
    pub src: u32,
    /// Bucket count selector, see [`crate::HistoBin`]
    pub bin: u32,
    /// Dynamic range selector, see [`crate::HistoDynRange`]
    pub dyn_range: u32,
    /// Component selection, see [`crate::HistoComponent`]
    pub comp: u32,
    /// Horizontal decimation exponent (factor `1 << hdec`)
    pub hdec: u32,
    /// Vertical decimation exponent (factor `1 << vdec`)
    pub vdec: u32,
    /// Horizontal region count, 1-based
    pub hreg: u32,
    /// Vertical region count, 1-based
    pub vreg: u32,
    /// Window origin and per-region size in pixels
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

/// Complete parameter buffer payload
///
/// This struct is the wire format: a submitted payload must be exactly
/// `size_of::<ParamsConfig>()` bytes and is reinterpreted in place.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Pod, Zeroable)]
pub struct ParamsConfig {
    /// Which modules this buffer reprograms, see [`update`]
    pub update_mask: u32,
    pub bpr: BprConfig,
    pub blc: BlcConfig,
    pub exposure: ExposureConfig,
    pub demosaic: DemosaicConfig,
    pub color_conv: ColorConvConfig,
    pub contrast: ContrastConfig,
    pub histogram: HistogramConfig,
}

/// Submitted payload does not match the declared struct size
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parameter payload is {got} bytes, expected exactly {expected}")]
pub struct PayloadError {
    pub expected: usize,
    pub got: usize,
}

impl ParamsConfig {
    /// Size of the binary payload in bytes
    pub const PAYLOAD_SIZE: usize = mem::size_of::<ParamsConfig>();

    /// Decode a submitted payload.
    ///
    /// The payload must be exactly [`Self::PAYLOAD_SIZE`] bytes; partial or
    /// oversized payloads are rejected. The source buffer may be unaligned.
    pub fn from_payload(payload: &[u8]) -> Result<Self, PayloadError> {
        if payload.len() != Self::PAYLOAD_SIZE {
            return Err(PayloadError {
                expected: Self::PAYLOAD_SIZE,
                got: payload.len(),
            });
        }
        Ok(bytemuck::pod_read_unaligned(payload))
    }

    /// Binary image of this configuration, suitable for submission
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
