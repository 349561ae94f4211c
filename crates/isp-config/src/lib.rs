//! ISP Parameter Data Model
//!
//! Defines the per-module configuration structs carried in a parameter
//! buffer, the module-update mask, the negotiated frame geometry, and the
//! platform capability descriptor. The wire format of a parameter buffer
//! is the raw binary image of [`ParamsConfig`].

mod caps;
mod geometry;
mod histogram;
mod params;

pub use caps::DeviceCaps;
pub use geometry::{FrameGeometry, MAX_FRAME_HEIGHT, MAX_FRAME_WIDTH};
pub use histogram::{
    HistoBin, HistoComponent, HistoDynRange, HistoSource, MAX_BINS_PER_LINE, MAX_DECIMATION_EXP,
    MAX_REGIONS_PER_AXIS,
};
pub use params::{
    update, BprConfig, BlcConfig, ColorConvConfig, ContrastConfig, DemosaicConfig, ExposureConfig,
    HistogramConfig, ParamsConfig, PayloadError, CLAMP_DISABLED, CLAMP_RGB_235, CLAMP_YUV_235,
};
