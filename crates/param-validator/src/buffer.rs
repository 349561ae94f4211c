//! Whole-buffer validation
//!
//! Invoked at submission time, before a buffer enters the pending queue.
//! Dispatches to the per-module validators for every module selected in
//! the update mask and short-circuits on the first failure, so a buffer
//! is accepted or rejected as a whole.

use isp_config::{update, DeviceCaps, FrameGeometry, ParamsConfig};
use tracing::warn;

use crate::error::ValidationError;
use crate::histogram::validate_histogram;
use crate::modules::{validate_blc, validate_bpr, validate_cc, validate_ce, validate_dm, validate_ex};

pub fn validate_params(
    caps: &DeviceCaps,
    frame: FrameGeometry,
    cfg: &ParamsConfig,
) -> Result<(), ValidationError> {
    if cfg.update_mask & !update::ALL != 0 {
        warn!(mask = cfg.update_mask, "unknown module bits in update mask");
        return Err(ValidationError::InvalidField {
            field: "update_mask",
            value: cfg.update_mask,
            min: 0,
            max: update::ALL,
        });
    }

    if cfg.update_mask & update::BPR != 0 {
        validate_bpr(&cfg.bpr)?;
    }
    if cfg.update_mask & update::BLC != 0 {
        validate_blc(&cfg.blc)?;
    }
    if cfg.update_mask & update::EXPOSURE != 0 {
        validate_ex(&cfg.exposure)?;
    }
    if cfg.update_mask & update::DEMOSAIC != 0 {
        validate_dm(&cfg.demosaic)?;
    }
    if cfg.update_mask & update::COLOR_CONV != 0 {
        validate_cc(&cfg.color_conv)?;
    }
    if cfg.update_mask & update::CONTRAST != 0 {
        validate_ce(&cfg.contrast)?;
    }
    if cfg.update_mask & update::HISTOGRAM != 0 {
        if !caps.has_histogram {
            warn!("histogram update requested on hardware without the block");
            return Err(ValidationError::UnsupportedCapability);
        }
        validate_histogram(&cfg.histogram, frame)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use isp_config::{BprConfig, ContrastConfig, HistogramConfig};

    fn frame() -> FrameGeometry {
        FrameGeometry::new(640, 480)
    }

    fn histo_cfg() -> HistogramConfig {
        HistogramConfig {
            en: 1,
            bin: 1,
            hreg: 1,
            vreg: 1,
            width: 64,
            height: 64,
            ..Default::default()
        }
    }

    #[test]
    fn test_unknown_mask_bits_reject_buffer() {
        let cfg = ParamsConfig {
            update_mask: update::ALL | (1 << 7),
            ..Default::default()
        };
        assert_eq!(
            validate_params(&DeviceCaps::default(), frame(), &cfg),
            Err(ValidationError::InvalidField {
                field: "update_mask",
                value: update::ALL | (1 << 7),
                min: 0,
                max: update::ALL,
            })
        );
    }

    #[test]
    fn test_empty_mask_is_valid() {
        let cfg = ParamsConfig::default();
        assert!(validate_params(&DeviceCaps::default(), frame(), &cfg).is_ok());
    }

    #[test]
    fn test_unselected_modules_are_not_checked() {
        // Invalid contrast values, but the contrast bit is clear
        let cfg = ParamsConfig {
            update_mask: update::BPR,
            bpr: BprConfig { en: 1, strength: 5 },
            contrast: ContrastConfig { en: 1, lum: [99; 9] },
            ..Default::default()
        };
        assert!(validate_params(&DeviceCaps::default(), frame(), &cfg).is_ok());
    }

    #[test]
    fn test_first_failure_rejects_whole_buffer() {
        let cfg = ParamsConfig {
            update_mask: update::BPR | update::CONTRAST,
            bpr: BprConfig { en: 1, strength: 8 },
            contrast: ContrastConfig { en: 1, lum: [0; 9] },
            ..Default::default()
        };
        assert_eq!(
            validate_params(&DeviceCaps::default(), frame(), &cfg),
            Err(ValidationError::InvalidField {
                field: "bpr.strength",
                value: 8,
                min: 0,
                max: 7,
            })
        );
    }

    #[test]
    fn test_histogram_requires_capability() {
        let cfg = ParamsConfig {
            update_mask: update::HISTOGRAM,
            histogram: histo_cfg(),
            ..Default::default()
        };

        let without = DeviceCaps {
            has_histogram: false,
        };
        assert_eq!(
            validate_params(&without, frame(), &cfg),
            Err(ValidationError::UnsupportedCapability)
        );

        assert!(validate_params(&DeviceCaps::default(), frame(), &cfg).is_ok());
    }

    #[test]
    fn test_histogram_checked_against_frame() {
        let mut histogram = histo_cfg();
        histogram.width = 640;
        histogram.hreg = 2;
        let cfg = ParamsConfig {
            update_mask: update::HISTOGRAM,
            histogram,
            ..Default::default()
        };
        assert!(matches!(
            validate_params(&DeviceCaps::default(), frame(), &cfg),
            Err(ValidationError::GeometryViolation(_))
        ));
    }
}
