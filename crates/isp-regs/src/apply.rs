//! Per-module register programming
//!
//! Appliers assume an already-validated configuration: they run on the
//! frame-boundary interrupt path and must not fail. Each is a pure
//! function of its config, except where a register is shared and must be
//! read-modify-written.

use isp_config::{
    update, BlcConfig, BprConfig, ColorConvConfig, ContrastConfig, DemosaicConfig, ExposureConfig,
    HistogramConfig, ParamsConfig, CLAMP_DISABLED, CLAMP_RGB_235,
};

use crate::io::RegisterIo;
use crate::map;

const fn en_bit(field: map::Field, en: u32) -> u32 {
    field.place((en != 0) as u32)
}

pub fn apply_bpr<R: RegisterIo>(regs: &mut R, cfg: &BprConfig) {
    regs.write(
        map::BPR_CR,
        en_bit(map::BPR_ENABLE, cfg.en) | map::BPR_STRENGTH.place(cfg.strength),
    );
}

pub fn apply_blc<R: RegisterIo>(regs: &mut R, cfg: &BlcConfig) {
    regs.write(
        map::BLC_CR,
        en_bit(map::BLC_ENABLE, cfg.en)
            | map::BLC_R.place(cfg.blc_r)
            | map::BLC_G.place(cfg.blc_g)
            | map::BLC_B.place(cfg.blc_b),
    );
}

pub fn apply_ex<R: RegisterIo>(regs: &mut R, cfg: &ExposureConfig) {
    regs.write(
        map::EX_CR1,
        en_bit(map::EX_ENABLE, cfg.en)
            | map::EX_MULT_R.place(cfg.mult_r)
            | map::EX_SHIFT_R.place(cfg.shift_r),
    );
    regs.write(
        map::EX_CR2,
        map::EX_MULT_B.place(cfg.mult_b)
            | map::EX_SHIFT_B.place(cfg.shift_b)
            | map::EX_MULT_G.place(cfg.mult_g)
            | map::EX_SHIFT_G.place(cfg.shift_g),
    );
}

/// The demosaic control register multiplexes fields owned by other blocks;
/// only the enable bit and the four filter strengths belong to this module.
pub fn apply_dm<R: RegisterIo>(regs: &mut R, cfg: &DemosaicConfig) {
    let owned = map::DM_ENABLE.bits()
        | map::DM_PEAK.bits()
        | map::DM_LINEV.bits()
        | map::DM_LINEH.bits()
        | map::DM_EDGE.bits();

    let kept = regs.read(map::DM_CR) & !owned;
    regs.write(
        map::DM_CR,
        kept | en_bit(map::DM_ENABLE, cfg.en)
            | map::DM_PEAK.place(cfg.peak)
            | map::DM_LINEV.place(cfg.linev)
            | map::DM_LINEH.place(cfg.lineh)
            | map::DM_EDGE.place(cfg.edge),
    );
}

pub fn apply_cc<R: RegisterIo>(regs: &mut R, cfg: &ColorConvConfig) {
    let mut cr = en_bit(map::CC_ENABLE, cfg.en);
    if cfg.clamp != CLAMP_DISABLED {
        cr |= map::CC_CLAMP.place(1);
        if cfg.clamp == CLAMP_RGB_235 {
            cr |= map::CC_TYPE.place(1);
        }
    }

    regs.write(map::CC_CR, cr);
    regs.write(
        map::CC_RED1,
        map::CC_COEF_LO.place(cfg.rr) | map::CC_COEF_HI.place(cfg.rg),
    );
    regs.write(
        map::CC_RED2,
        map::CC_COEF_LO.place(cfg.rb) | map::CC_OFFSET.place(cfg.ra),
    );
    regs.write(
        map::CC_GREEN1,
        map::CC_COEF_LO.place(cfg.gr) | map::CC_COEF_HI.place(cfg.gg),
    );
    regs.write(
        map::CC_GREEN2,
        map::CC_COEF_LO.place(cfg.gb) | map::CC_OFFSET.place(cfg.ga),
    );
    regs.write(
        map::CC_BLUE1,
        map::CC_COEF_LO.place(cfg.br) | map::CC_COEF_HI.place(cfg.bg),
    );
    regs.write(
        map::CC_BLUE2,
        map::CC_COEF_LO.place(cfg.bb) | map::CC_OFFSET.place(cfg.ba),
    );
}

pub fn apply_ce<R: RegisterIo>(regs: &mut R, cfg: &ContrastConfig) {
    regs.write(
        map::CE_CR1,
        en_bit(map::CE_ENABLE, cfg.en) | map::CE_LUM0.place(cfg.lum[0]),
    );
    regs.write(
        map::CE_CR2,
        map::CE_LUM1.place(cfg.lum[1])
            | map::CE_LUM2.place(cfg.lum[2])
            | map::CE_LUM3.place(cfg.lum[3])
            | map::CE_LUM4.place(cfg.lum[4]),
    );
    regs.write(
        map::CE_CR3,
        map::CE_LUM5.place(cfg.lum[5])
            | map::CE_LUM6.place(cfg.lum[6])
            | map::CE_LUM7.place(cfg.lum[7])
            | map::CE_LUM8.place(cfg.lum[8]),
    );
}

/// The histogram block may already have been enabled by the statistics
/// capture side; an update must not disable it. The enable bit is the OR
/// of the current hardware state and the config.
pub fn apply_histo<R: RegisterIo>(regs: &mut R, cfg: &HistogramConfig) {
    let was_enabled = map::HISTO_ENABLE.get(regs.read(map::HISTO_CR)) != 0;

    regs.write(
        map::HISTO_START,
        map::HISTO_HSTART.place(cfg.left) | map::HISTO_VSTART.place(cfg.top),
    );
    regs.write(
        map::HISTO_SIZE,
        map::HISTO_HSIZE.place(cfg.width) | map::HISTO_VSIZE.place(cfg.height),
    );

    let en = (was_enabled || cfg.en != 0) as u32;
    regs.write(
        map::HISTO_CR,
        map::HISTO_BIN.place(cfg.bin)
            | map::HISTO_DYN.place(cfg.dyn_range)
            | map::HISTO_COMP.place(cfg.comp)
            | map::HISTO_VDEC.place(cfg.vdec)
            | map::HISTO_HDEC.place(cfg.hdec)
            | map::HISTO_VREG.place(cfg.vreg - 1)
            | map::HISTO_HREG.place(cfg.hreg - 1)
            | map::HISTO_SRC.place(cfg.src)
            | map::HISTO_ENABLE.place(en),
    );
}

/// Apply every module selected in the update mask.
///
/// The order is fixed regardless of mask bit positions so that modules
/// always reprogram in the same relative sequence along the pixel pipe.
pub fn apply_all<R: RegisterIo>(regs: &mut R, cfg: &ParamsConfig) {
    if cfg.update_mask & update::BPR != 0 {
        apply_bpr(regs, &cfg.bpr);
    }
    if cfg.update_mask & update::BLC != 0 {
        apply_blc(regs, &cfg.blc);
    }
    if cfg.update_mask & update::EXPOSURE != 0 {
        apply_ex(regs, &cfg.exposure);
    }
    if cfg.update_mask & update::DEMOSAIC != 0 {
        apply_dm(regs, &cfg.demosaic);
    }
    if cfg.update_mask & update::COLOR_CONV != 0 {
        apply_cc(regs, &cfg.color_conv);
    }
    if cfg.update_mask & update::CONTRAST != 0 {
        apply_ce(regs, &cfg.contrast);
    }
    if cfg.update_mask & update::HISTOGRAM != 0 {
        apply_histo(regs, &cfg.histogram);
    }
}
