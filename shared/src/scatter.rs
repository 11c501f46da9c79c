//! Policy verdict scatter: synthetic grid-cell samples in density vs.
//! network-integration space, classified into zoning outcomes.
//!
//! Draws are hash-seeded instead of wall-clock random so the chart is
//! identical on every load and the classification thresholds are testable.

use serde::{Deserialize, Serialize};

use crate::colors::{self, Rgb};

/// Number of sampled grid cells, matching the study's sensor count.
pub const SAMPLE_COUNT: usize = 412;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyZone {
    Neutral,
    /// High density, poorly integrated: drains its surroundings.
    SiphonRisk,
    /// High density matched by high integration.
    Sustainable,
    /// Highly integrated regardless of density.
    NetworkHub,
}

impl PolicyZone {
    /// Classify a cell. Order matters: the siphon and sustainable tests win
    /// over the hub test for high-density cells.
    pub fn classify(density: f64, integration: f64) -> Self {
        if density > 60.0 && integration < 40.0 {
            PolicyZone::SiphonRisk
        } else if density > 60.0 && integration > 60.0 {
            PolicyZone::Sustainable
        } else if integration > 70.0 {
            PolicyZone::NetworkHub
        } else {
            PolicyZone::Neutral
        }
    }

    pub fn color(self) -> Rgb {
        match self {
            PolicyZone::Neutral => colors::FOG,
            PolicyZone::SiphonRisk => colors::EMBER,
            PolicyZone::Sustainable => colors::VERDANT,
            PolicyZone::NetworkHub => colors::ACCENT,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PolicyZone::Neutral => "Neutral",
            PolicyZone::SiphonRisk => "Siphon Risk",
            PolicyZone::Sustainable => "Sustainable",
            PolicyZone::NetworkHub => "Network Hub",
        }
    }
}

/// One sampled grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    /// FAR-like density, 0..100.
    pub density: f64,
    /// Network integration score; correlated with density plus noise.
    pub integration: f64,
    pub zone: PolicyZone,
}

/// Unit draw in [0, 1) from a seed, sample index and lane.
fn unit_draw(seed: u32, index: usize, lane: u32) -> f64 {
    let mut key = [0u8; 12];
    key[..4].copy_from_slice(&seed.to_le_bytes());
    key[4..8].copy_from_slice(&(index as u32).to_le_bytes());
    key[8..].copy_from_slice(&lane.to_le_bytes());
    crc32fast::hash(&key) as f64 / (u32::MAX as f64 + 1.0)
}

/// Deterministically sample `count` grid cells.
pub fn sample_cells(seed: u32, count: usize) -> Vec<SamplePoint> {
    (0..count)
        .map(|i| {
            let density = unit_draw(seed, i, 0) * 100.0;
            let integration =
                unit_draw(seed, i, 1) * 60.0 + density * 0.4 + (unit_draw(seed, i, 2) * 20.0 - 10.0);
            SamplePoint {
                density,
                integration,
                zone: PolicyZone::classify(density, integration),
            }
        })
        .collect()
}

/// Largest integration value the sampling formula can produce; used to scale
/// the chart's y axis.
pub const INTEGRATION_CEILING: f64 = 110.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_thresholds() {
        assert_eq!(PolicyZone::classify(80.0, 30.0), PolicyZone::SiphonRisk);
        assert_eq!(PolicyZone::classify(80.0, 75.0), PolicyZone::Sustainable);
        assert_eq!(PolicyZone::classify(30.0, 80.0), PolicyZone::NetworkHub);
        assert_eq!(PolicyZone::classify(30.0, 30.0), PolicyZone::Neutral);
        // Dense but mid-integration is neither siphon nor sustainable, and
        // the hub test still applies above 70.
        assert_eq!(PolicyZone::classify(80.0, 50.0), PolicyZone::Neutral);
        assert_eq!(PolicyZone::classify(65.0, 60.0), PolicyZone::Neutral);
    }

    #[test]
    fn sampling_is_deterministic() {
        let a = sample_cells(9, SAMPLE_COUNT);
        let b = sample_cells(9, SAMPLE_COUNT);
        assert_eq!(a.len(), SAMPLE_COUNT);
        assert_eq!(a, b);
        assert_ne!(a, sample_cells(10, SAMPLE_COUNT));
    }

    #[test]
    fn samples_stay_in_chart_domain() {
        for point in sample_cells(9, SAMPLE_COUNT) {
            assert!((0.0..100.0).contains(&point.density));
            assert!(point.integration > -10.0 - 1e-9);
            assert!(point.integration < INTEGRATION_CEILING + 1e-9);
            assert_eq!(point.zone, PolicyZone::classify(point.density, point.integration));
        }
    }
}
