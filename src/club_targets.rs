use serde::Serialize;
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::shot::ClubType;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricRange {
    pub min: f64,
    pub max: f64,
    pub optimal: f64,
}

impl MetricRange {
    pub const fn new(min: f64, max: f64, optimal: f64) -> Self {
        Self { min, max, optimal }
    }

    #[cfg(test)]
    pub fn is_ordered(&self) -> bool {
        self.min <= self.optimal && self.optimal <= self.max
    }

    /// Field-wise linear interpolation towards `other`.
    pub fn lerp(&self, other: &MetricRange, ratio: f64) -> MetricRange {
        MetricRange {
            min: self.min + (other.min - self.min) * ratio,
            max: self.max + (other.max - self.max) * ratio,
            optimal: self.optimal + (other.optimal - self.optimal) * ratio,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubTargetProfile {
    pub smash: MetricRange,
    pub aoa: MetricRange,
    pub launch_angle: MetricRange,
    pub spin_rate: MetricRange,
    pub speed_ratio: MetricRange,
}

impl ClubTargetProfile {
    pub fn interpolate(a: &ClubTargetProfile, b: &ClubTargetProfile, ratio: f64) -> Self {
        Self {
            smash: a.smash.lerp(&b.smash, ratio),
            aoa: a.aoa.lerp(&b.aoa, ratio),
            launch_angle: a.launch_angle.lerp(&b.launch_angle, ratio),
            spin_rate: a.spin_rate.lerp(&b.spin_rate, ratio),
            speed_ratio: a.speed_ratio.lerp(&b.speed_ratio, ratio),
        }
    }
}

// Hand-authored profiles; every other club sits between two of these.
const DRIVER: ClubTargetProfile = ClubTargetProfile {
    smash: MetricRange::new(1.48, 1.52, 1.50),
    aoa: MetricRange::new(-1.0, 5.0, 3.0),
    launch_angle: MetricRange::new(10.0, 14.0, 12.0),
    spin_rate: MetricRange::new(2000.0, 2700.0, 2400.0),
    speed_ratio: MetricRange::new(1.48, 1.52, 1.50),
};

const IRON_7: ClubTargetProfile = ClubTargetProfile {
    smash: MetricRange::new(1.36, 1.42, 1.39),
    aoa: MetricRange::new(-5.0, -2.0, -3.5),
    launch_angle: MetricRange::new(15.0, 19.0, 17.0),
    spin_rate: MetricRange::new(6500.0, 7500.0, 7000.0),
    speed_ratio: MetricRange::new(1.36, 1.42, 1.39),
};

const PITCHING_WEDGE: ClubTargetProfile = ClubTargetProfile {
    smash: MetricRange::new(1.20, 1.28, 1.24),
    aoa: MetricRange::new(-6.0, -3.0, -4.5),
    launch_angle: MetricRange::new(22.0, 26.0, 24.0),
    spin_rate: MetricRange::new(8500.0, 10000.0, 9200.0),
    speed_ratio: MetricRange::new(1.20, 1.28, 1.24),
};

const GAP_WEDGE: ClubTargetProfile = ClubTargetProfile {
    smash: MetricRange::new(1.18, 1.26, 1.22),
    aoa: MetricRange::new(-6.0, -3.0, -4.5),
    launch_angle: MetricRange::new(24.0, 28.0, 26.0),
    spin_rate: MetricRange::new(9000.0, 10500.0, 9750.0),
    speed_ratio: MetricRange::new(1.18, 1.26, 1.22),
};

const SAND_WEDGE: ClubTargetProfile = ClubTargetProfile {
    smash: MetricRange::new(1.16, 1.24, 1.20),
    aoa: MetricRange::new(-6.0, -3.0, -4.5),
    launch_angle: MetricRange::new(26.0, 30.0, 28.0),
    spin_rate: MetricRange::new(9500.0, 11000.0, 10250.0),
    speed_ratio: MetricRange::new(1.16, 1.24, 1.20),
};

const LOB_WEDGE: ClubTargetProfile = ClubTargetProfile {
    smash: MetricRange::new(1.14, 1.22, 1.18),
    aoa: MetricRange::new(-6.0, -3.0, -4.5),
    launch_angle: MetricRange::new(28.0, 32.0, 30.0),
    spin_rate: MetricRange::new(10000.0, 11500.0, 10750.0),
    speed_ratio: MetricRange::new(1.14, 1.22, 1.18),
};

/// Derived clubs: (club, from, to, ratio).
const DERIVED: &[(ClubType, ClubType, ClubType, f64)] = &[
    (ClubType::Wood3, ClubType::Driver, ClubType::Iron7, 0.3),
    (ClubType::Wood5, ClubType::Driver, ClubType::Iron7, 0.4),
    (ClubType::Iron3, ClubType::Driver, ClubType::Iron7, 0.5),
    (ClubType::Iron4, ClubType::Driver, ClubType::Iron7, 0.6),
    (ClubType::Iron5, ClubType::Driver, ClubType::Iron7, 0.7),
    (ClubType::Iron6, ClubType::Driver, ClubType::Iron7, 0.85),
    (ClubType::Iron8, ClubType::Iron7, ClubType::Pw, 0.33),
    (ClubType::Iron9, ClubType::Iron7, ClubType::Pw, 0.66),
];

/// Baseline target ranges for every club, built once and never mutated.
#[derive(Debug, Clone)]
pub struct ClubTable {
    profiles: HashMap<ClubType, ClubTargetProfile>,
}

impl ClubTable {
    pub fn build() -> Self {
        let mut profiles = HashMap::with_capacity(ClubType::ALL.len());
        profiles.insert(ClubType::Driver, DRIVER);
        profiles.insert(ClubType::Iron7, IRON_7);
        profiles.insert(ClubType::Pw, PITCHING_WEDGE);
        profiles.insert(ClubType::Gw, GAP_WEDGE);
        profiles.insert(ClubType::Sw, SAND_WEDGE);
        profiles.insert(ClubType::Lw, LOB_WEDGE);

        for &(club, from, to, ratio) in DERIVED {
            let derived = ClubTargetProfile::interpolate(&profiles[&from], &profiles[&to], ratio);
            profiles.insert(club, derived);
        }

        log::debug!("[TARGETS] Built club table with {} profiles", profiles.len());
        Self { profiles }
    }

    /// Process-wide table, built on first use.
    pub fn global() -> &'static ClubTable {
        static TABLE: OnceLock<ClubTable> = OnceLock::new();
        TABLE.get_or_init(ClubTable::build)
    }

    pub fn profile(&self, club: ClubType) -> &ClubTargetProfile {
        // build() covers every ClubType variant
        &self.profiles[&club]
    }
}
