//! Per-module bit-width validators
//!
//! Each check is a mask-complement test against the field width declared
//! in the register map: a value with any bit outside the field rejects
//! the module, and with it the whole buffer.

use isp_config::{
    BlcConfig, BprConfig, ColorConvConfig, ContrastConfig, DemosaicConfig, ExposureConfig,
    CLAMP_RGB_235,
};
use isp_regs::map;

use crate::error::ValidationError;

fn check_field(
    field: &'static str,
    value: u32,
    layout: map::Field,
) -> Result<(), ValidationError> {
    if !layout.fits(value) {
        return Err(ValidationError::InvalidField {
            field,
            value,
            min: 0,
            max: layout.max(),
        });
    }
    Ok(())
}

pub fn validate_bpr(cfg: &BprConfig) -> Result<(), ValidationError> {
    check_field("bpr.strength", cfg.strength, map::BPR_STRENGTH)
}

pub fn validate_blc(cfg: &BlcConfig) -> Result<(), ValidationError> {
    check_field("blc.blc_r", cfg.blc_r, map::BLC_R)?;
    check_field("blc.blc_g", cfg.blc_g, map::BLC_G)?;
    check_field("blc.blc_b", cfg.blc_b, map::BLC_B)
}

pub fn validate_ex(cfg: &ExposureConfig) -> Result<(), ValidationError> {
    check_field("exposure.mult_r", cfg.mult_r, map::EX_MULT_R)?;
    check_field("exposure.mult_g", cfg.mult_g, map::EX_MULT_G)?;
    check_field("exposure.mult_b", cfg.mult_b, map::EX_MULT_B)?;
    check_field("exposure.shift_r", cfg.shift_r, map::EX_SHIFT_R)?;
    check_field("exposure.shift_g", cfg.shift_g, map::EX_SHIFT_G)?;
    check_field("exposure.shift_b", cfg.shift_b, map::EX_SHIFT_B)
}

pub fn validate_dm(cfg: &DemosaicConfig) -> Result<(), ValidationError> {
    check_field("demosaic.edge", cfg.edge, map::DM_EDGE)?;
    check_field("demosaic.lineh", cfg.lineh, map::DM_LINEH)?;
    check_field("demosaic.linev", cfg.linev, map::DM_LINEV)?;
    check_field("demosaic.peak", cfg.peak, map::DM_PEAK)
}

pub fn validate_cc(cfg: &ColorConvConfig) -> Result<(), ValidationError> {
    check_field("color_conv.rr", cfg.rr, map::CC_COEF_LO)?;
    check_field("color_conv.rg", cfg.rg, map::CC_COEF_HI)?;
    check_field("color_conv.rb", cfg.rb, map::CC_COEF_LO)?;
    check_field("color_conv.gr", cfg.gr, map::CC_COEF_LO)?;
    check_field("color_conv.gg", cfg.gg, map::CC_COEF_HI)?;
    check_field("color_conv.gb", cfg.gb, map::CC_COEF_LO)?;
    check_field("color_conv.br", cfg.br, map::CC_COEF_LO)?;
    check_field("color_conv.bg", cfg.bg, map::CC_COEF_HI)?;
    check_field("color_conv.bb", cfg.bb, map::CC_COEF_LO)?;
    check_field("color_conv.ra", cfg.ra, map::CC_OFFSET)?;
    check_field("color_conv.ga", cfg.ga, map::CC_OFFSET)?;
    check_field("color_conv.ba", cfg.ba, map::CC_OFFSET)?;
    if cfg.clamp > CLAMP_RGB_235 {
        return Err(ValidationError::InvalidField {
            field: "color_conv.clamp",
            value: cfg.clamp,
            min: 0,
            max: CLAMP_RGB_235,
        });
    }
    Ok(())
}

pub fn validate_ce(cfg: &ContrastConfig) -> Result<(), ValidationError> {
    for &lum in cfg.lum.iter() {
        check_field("contrast.lum", lum, map::CE_LUM0)?;
    }
    Ok(())
}
