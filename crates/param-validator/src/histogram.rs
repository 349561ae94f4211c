//! Histogram window geometry checker
//!
//! The statistics window is constrained three ways: every selector must
//! fit its register field, the region grid must fit inside the active
//! frame and align to the decimation factors, and the accumulated
//! bins-per-line cost must stay within the hardware budget.

use isp_config::{
    FrameGeometry, HistoBin, HistoComponent, HistoDynRange, HistoSource, HistogramConfig,
    MAX_BINS_PER_LINE, MAX_DECIMATION_EXP, MAX_FRAME_HEIGHT, MAX_FRAME_WIDTH,
    MAX_REGIONS_PER_AXIS,
};
use isp_regs::map;
use tracing::warn;

use crate::error::ValidationError;

fn check_max(
    field: &'static str,
    value: u32,
    max: u32,
) -> Result<(), ValidationError> {
    if value > max {
        return Err(ValidationError::InvalidField {
            field,
            value,
            min: 0,
            max,
        });
    }
    Ok(())
}

fn check_region_count(field: &'static str, value: u32) -> Result<(), ValidationError> {
    if value < 1 || value > MAX_REGIONS_PER_AXIS {
        return Err(ValidationError::InvalidField {
            field,
            value,
            min: 1,
            max: MAX_REGIONS_PER_AXIS,
        });
    }
    Ok(())
}

pub fn validate_histogram(
    cfg: &HistogramConfig,
    frame: FrameGeometry,
) -> Result<(), ValidationError> {
    let bin = HistoBin::from_raw(cfg.bin).ok_or(ValidationError::InvalidField {
        field: "histogram.bin",
        value: cfg.bin,
        min: 0,
        max: map::HISTO_BIN.max(),
    })?;

    check_max("histogram.src", cfg.src, HistoSource::PostContrast as u32)?;
    check_max(
        "histogram.dyn_range",
        cfg.dyn_range,
        HistoDynRange::Dark as u32,
    )?;
    check_max("histogram.comp", cfg.comp, HistoComponent::All as u32)?;
    check_max("histogram.hdec", cfg.hdec, MAX_DECIMATION_EXP)?;
    check_max("histogram.vdec", cfg.vdec, MAX_DECIMATION_EXP)?;
    check_region_count("histogram.hreg", cfg.hreg)?;
    check_region_count("histogram.vreg", cfg.vreg)?;
    check_max("histogram.left", cfg.left, MAX_FRAME_WIDTH)?;
    check_max("histogram.top", cfg.top, MAX_FRAME_HEIGHT)?;
    check_max("histogram.width", cfg.width, MAX_FRAME_WIDTH)?;
    check_max("histogram.height", cfg.height, MAX_FRAME_HEIGHT)?;

    // The decimators drop pixels; a region that is not a whole multiple of
    // the decimation factor would accumulate a ragged edge.
    let hfactor = 1u32 << cfg.hdec;
    if cfg.width % hfactor != 0 {
        let reason = format!(
            "region width {} is not a multiple of the horizontal decimation factor {}",
            cfg.width, hfactor
        );
        warn!(%reason, "rejecting histogram window");
        return Err(ValidationError::GeometryViolation(reason));
    }
    let vfactor = 1u32 << cfg.vdec;
    if cfg.height % vfactor != 0 {
        let reason = format!(
            "region height {} is not a multiple of the vertical decimation factor {}",
            cfg.height, vfactor
        );
        warn!(%reason, "rejecting histogram window");
        return Err(ValidationError::GeometryViolation(reason));
    }

    // The whole region grid has to fit the negotiated frame
    if cfg.left + cfg.width * cfg.hreg > frame.width
        || cfg.top + cfg.height * cfg.vreg > frame.height
    {
        let reason = format!(
            "region grid {}x{} regions of {}x{} at ({}, {}) exceeds the {}x{} frame",
            cfg.hreg, cfg.vreg, cfg.width, cfg.height, cfg.left, cfg.top, frame.width, frame.height
        );
        warn!(%reason, "rejecting histogram window");
        return Err(ValidationError::GeometryViolation(reason));
    }

    // Per-line accumulation budget: each horizontal region contributes one
    // set of buckets, times four when all components are selected
    let mut bins_per_line = bin.bucket_count() * cfg.hreg;
    if cfg.comp == HistoComponent::All as u32 {
        bins_per_line *= 4;
    }
    if bins_per_line > MAX_BINS_PER_LINE {
        let reason = format!(
            "{} bins per line exceed the hardware budget of {}",
            bins_per_line, MAX_BINS_PER_LINE
        );
        warn!(%reason, "rejecting histogram window");
        return Err(ValidationError::GeometryViolation(reason));
    }

    Ok(())
}
