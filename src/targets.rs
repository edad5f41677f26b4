use serde::Serialize;

use crate::club_targets::{ClubTable, MetricRange};
use crate::profile::{handicap_band, PlayerProfile};
use crate::shot::ClubType;

/// Face-to-path tolerance. Symmetric around a square (0°) face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FaceToPathLimit {
    pub max: f64,
}

/// Target ranges personalised for one club and player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustedTargets {
    pub smash: MetricRange,
    pub aoa: MetricRange,
    pub launch_angle: MetricRange,
    pub spin_rate: MetricRange,
    pub speed_ratio: MetricRange,
    pub face_to_path: FaceToPathLimit,
}

#[derive(Debug, Clone, Copy)]
struct DriverBand {
    launch_angle: MetricRange,
    spin_rate: MetricRange,
    aoa: MetricRange,
}

const fn band(launch: (f64, f64, f64), spin: (f64, f64, f64), aoa: (f64, f64, f64)) -> DriverBand {
    DriverBand {
        launch_angle: MetricRange::new(launch.0, launch.1, launch.2),
        spin_rate: MetricRange::new(spin.0, spin.1, spin.2),
        aoa: MetricRange::new(aoa.0, aoa.1, aoa.2),
    }
}

// Driver launch/spin/attack windows from published launch monitor
// benchmarks, as (min, max, optimal).
const DRIVER_PROFESSIONAL: DriverBand =
    band((9.0, 13.0, 11.0), (2000.0, 2800.0, 2400.0), (-2.0, 5.0, 1.0));

const DRIVER_BANDS: &[(f64, DriverBand)] = &[
    (0.0, band((9.5, 13.0, 11.2), (2100.0, 3000.0, 2500.0), (-1.5, 5.0, 1.5))),
    (4.0, band((10.0, 13.0, 11.2), (2200.0, 3100.0, 2650.0), (-1.0, 5.0, 2.0))),
    (8.0, band((10.0, 13.5, 11.5), (2300.0, 3300.0, 2800.0), (0.0, 5.0, 2.5))),
    (12.0, band((10.5, 14.0, 11.9), (2400.0, 3500.0, 2900.0), (0.0, 5.0, 3.0))),
    (16.0, band((11.0, 14.5, 12.3), (2500.0, 3600.0, 3000.0), (0.0, 5.0, 3.0))),
    (20.0, band((11.5, 15.0, 12.6), (2500.0, 3700.0, 3100.0), (0.0, 5.0, 3.5))),
];

const DRIVER_HIGH_HANDICAP: DriverBand =
    band((11.0, 15.0, 12.5), (2600.0, 3800.0, 3200.0), (0.0, 5.0, 4.0));

fn driver_band(profile: &PlayerProfile) -> DriverBand {
    if profile.player_type.is_professional() {
        DRIVER_PROFESSIONAL
    } else {
        handicap_band(profile.handicap, DRIVER_BANDS, DRIVER_HIGH_HANDICAP)
    }
}

impl AdjustedTargets {
    /// Personalise the club's baseline for this player.
    ///
    /// Smash factor relaxes downwards with the skill factor (the max stays at
    /// the club baseline), face-to-path tolerance widens, and for the driver
    /// launch, spin and attack angle come from the handicap tables instead of
    /// the club baseline.
    pub fn for_player(table: &ClubTable, club: ClubType, profile: &PlayerProfile) -> Self {
        let base = table.profile(club);
        let factor = profile.skill_factor();
        let slack = 1.0 - factor;

        let smash_range = base.smash.max - base.smash.min;
        let smash = MetricRange {
            min: base.smash.min - slack * smash_range * 0.8,
            max: base.smash.max,
            optimal: base.smash.optimal - slack * smash_range * 0.5,
        };

        let (launch_angle, spin_rate, aoa) = if club.is_driver() {
            let band = driver_band(profile);
            (band.launch_angle, band.spin_rate, band.aoa)
        } else {
            (base.launch_angle, base.spin_rate, base.aoa)
        };

        let face_to_path = FaceToPathLimit {
            max: 3.0 + slack * 12.0,
        };

        log::debug!(
            "[ANALYSIS] {} targets: skill factor {:.2}, smash min {:.3}, face-to-path ±{:.1}",
            club,
            factor,
            smash.min,
            face_to_path.max
        );

        Self {
            smash,
            aoa,
            launch_angle,
            spin_rate,
            speed_ratio: base.speed_ratio,
            face_to_path,
        }
    }
}
