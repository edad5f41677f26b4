use serde::Serialize;

use crate::profile::{handicap_band, PlayerProfile};
use crate::shot::ClubType;

/// What golfers at a given level typically hit. Shown alongside the targets,
/// never used for diagnosis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypicalAverages {
    pub launch_angle: Option<f64>,
    pub spin_rate: Option<f64>,
    pub aoa: Option<f64>,
}

impl TypicalAverages {
    pub fn is_empty(&self) -> bool {
        self.launch_angle.is_none() && self.spin_rate.is_none() && self.aoa.is_none()
    }
}

// (launch angle, spin rate, attack angle)
const DRIVER_PROFESSIONAL: (f64, f64, f64) = (11.0, 2400.0, -0.9);

const DRIVER_AVERAGES: &[(f64, (f64, f64, f64))] = &[
    (0.0, (11.2, 2896.0, -0.9)),
    (4.0, (11.2, 2900.0, -1.0)),
    (8.0, (11.5, 2987.0, -1.1)),
    (12.0, (11.9, 3192.0, -1.2)),
    (16.0, (12.3, 3250.0, -1.5)),
    (20.0, (12.6, 3275.0, -1.8)),
    (24.0, (12.5, 3200.0, -2.0)),
];

const DRIVER_HIGH_HANDICAP: (f64, f64, f64) = (12.1, 3127.0, -2.1);

/// Driver-only lookup; every other club returns an empty record.
pub fn typical_averages(club: ClubType, profile: &PlayerProfile) -> TypicalAverages {
    if !club.is_driver() {
        return TypicalAverages::default();
    }

    let (launch_angle, spin_rate, aoa) = if profile.player_type.is_professional() {
        DRIVER_PROFESSIONAL
    } else {
        handicap_band(profile.handicap, DRIVER_AVERAGES, DRIVER_HIGH_HANDICAP)
    };

    TypicalAverages {
        launch_angle: Some(launch_angle),
        spin_rate: Some(spin_rate),
        aoa: Some(aoa),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::PlayerType;

    #[test]
    fn only_driver_has_averages() {
        let profile = PlayerProfile::new(10.0, PlayerType::Amateur);
        assert!(typical_averages(ClubType::Iron7, &profile).is_empty());
        assert!(typical_averages(ClubType::Lw, &profile).is_empty());
        assert!(!typical_averages(ClubType::Driver, &profile).is_empty());
    }

    #[test]
    fn twenty_four_band_is_separate_from_high_handicap() {
        let mid = typical_averages(ClubType::Driver, &PlayerProfile::new(22.0, PlayerType::Amateur));
        assert_eq!(mid.spin_rate, Some(3200.0));
        assert_eq!(mid.aoa, Some(-2.0));

        let high = typical_averages(ClubType::Driver, &PlayerProfile::new(24.5, PlayerType::Amateur));
        assert_eq!(high.spin_rate, Some(3127.0));
        assert_eq!(high.launch_angle, Some(12.1));
    }

    #[test]
    fn professionals_ignore_handicap() {
        let teaching = typical_averages(ClubType::Driver, &PlayerProfile::new(18.0, PlayerType::Teaching));
        assert_eq!(teaching.spin_rate, Some(2400.0));
        assert_eq!(teaching.launch_angle, Some(11.0));
    }

    #[test]
    fn boundaries_are_inclusive() {
        let at_twelve = typical_averages(ClubType::Driver, &PlayerProfile::new(12.0, PlayerType::Competitive));
        assert_eq!(at_twelve.spin_rate, Some(3192.0));
    }
}
