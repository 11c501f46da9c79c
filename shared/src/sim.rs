//! Stress-test arithmetic and the fitted SDM coefficient table.
//!
//! The slider works in FAR (floor area ratio) units; the renderer and the
//! readouts work in a normalized intensity. The mapping is a closed-form
//! interpolation between the district's observed baseline and the zoning
//! ceiling explored in the study.

use serde::{Deserialize, Serialize};

/// Observed mean FAR of the district; the slider's resting point.
pub const FAR_BASELINE: f64 = 0.69;
/// Upper bound of the densification scenario.
pub const FAR_CEILING: f64 = 4.0;

/// Normalized stress intensity for a FAR value. 0 at the baseline, 1 at the
/// ceiling. Not clamped here; the render policy clamps before any alpha use.
pub fn stress_intensity(far: f64) -> f64 {
    (far - FAR_BASELINE) / (FAR_CEILING - FAR_BASELINE)
}

/// Headline numbers shown next to the stress-test map.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VitalityReadout {
    /// Vitality gain of the densified grid itself, percent.
    pub subject_gain_pct: f64,
    /// Vitality drained from neighboring grids, percent.
    pub neighbor_loss_pct: f64,
}

pub fn readout(far: f64) -> VitalityReadout {
    let intensity = stress_intensity(far);
    VitalityReadout {
        subject_gain_pct: intensity * 168.0,
        neighbor_loss_pct: intensity * 13.5,
    }
}

/// One fitted predictor of the Spatial Durbin Model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Predictor {
    pub label: &'static str,
    /// Direct (own-grid) effect.
    pub direct: f64,
    /// Spillover effect on neighboring grids.
    pub spillover: f64,
}

/// Fitted coefficients, ordered as presented in the findings section.
pub const PREDICTORS: &[Predictor] = &[
    Predictor {
        label: "Built Density (FAR)",
        direct: 0.298,
        spillover: -0.145,
    },
    Predictor {
        label: "Functional Mix",
        direct: 0.162,
        spillover: 0.110,
    },
    Predictor {
        label: "Network Integration",
        direct: 0.455,
        spillover: 0.850,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn intensity_endpoints() {
        assert_close(stress_intensity(FAR_BASELINE), 0.0);
        assert_close(stress_intensity(FAR_CEILING), 1.0);
    }

    #[test]
    fn readout_scales_linearly() {
        let rest = readout(FAR_BASELINE);
        assert_close(rest.subject_gain_pct, 0.0);
        assert_close(rest.neighbor_loss_pct, 0.0);

        let max = readout(FAR_CEILING);
        assert_close(max.subject_gain_pct, 168.0);
        assert_close(max.neighbor_loss_pct, 13.5);

        let mid = readout((FAR_BASELINE + FAR_CEILING) / 2.0);
        assert_close(mid.subject_gain_pct, 84.0);
    }

    #[test]
    fn only_density_spills_negatively() {
        let negative: Vec<_> = PREDICTORS.iter().filter(|p| p.spillover < 0.0).collect();
        assert_eq!(negative.len(), 1);
        assert_eq!(negative[0].label, "Built Density (FAR)");
    }
}
