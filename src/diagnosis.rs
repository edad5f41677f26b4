//! Compares observed launch monitor numbers against adjusted targets.
//!
//! `find_issues` decides what is wrong and returns the numeric facts;
//! `advice::render` turns those facts into coaching text.

use serde::{Deserialize, Serialize};

use crate::advice;
use crate::club_targets::MetricRange;
use crate::profile::PlayerProfile;
use crate::shot::{ClubType, ObservedMetrics};
use crate::targets::AdjustedTargets;

/// Launch angle the delivered loft and attack angle should produce.
const LAUNCH_FROM_LOFT_AOA_WEIGHT: f64 = 0.5;
/// Gap (degrees) between expected and actual launch that points at strike location.
const STRIKE_LOCATION_GAP: f64 = 3.0;
const DELOFT_MARGIN: f64 = 5.0;
const ADDED_LOFT_MARGIN: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deviation {
    Low,
    High,
}

impl Deviation {
    fn outside(value: f64, range: &MetricRange) -> Option<Self> {
        if value < range.min {
            Some(Deviation::Low)
        } else if value > range.max {
            Some(Deviation::High)
        } else {
            None
        }
    }
}

/// Positive face-to-path is open to the path (fade/slice), negative closed (draw/hook).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceDirection {
    Open,
    Closed,
}

/// Secondary explanation for a launch angle outside the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LaunchCause {
    StrikeLocation { expected_launch: f64 },
    Delofting { dynamic_loft: f64 },
    AddingLoft { dynamic_loft: f64 },
    NegativeAttackAngle { aoa: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Finding {
    LowSmash {
        observed: f64,
        target: MetricRange,
    },
    FaceToPath {
        observed: f64,
        max: f64,
        direction: FaceDirection,
    },
    LaunchAngle {
        observed: f64,
        target: MetricRange,
        deviation: Deviation,
        cause: Option<LaunchCause>,
    },
    SpinRate {
        observed: f64,
        target: MetricRange,
        deviation: Deviation,
    },
    NegativeAttackAngle {
        observed: f64,
        target: MetricRange,
    },
}

impl Finding {
    /// 1 is most severe: contact and curvature before launch conditions.
    pub fn priority(&self) -> u8 {
        match self {
            Finding::LowSmash { .. } | Finding::FaceToPath { .. } => 1,
            Finding::LaunchAngle { .. }
            | Finding::SpinRate { .. }
            | Finding::NegativeAttackAngle { .. } => 2,
        }
    }
}

/// A coaching issue ready for display or storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub priority: u8,
    pub title: String,
    pub problem: String,
    pub fix: String,
}

/// Run every check and return the findings, most severe first.
///
/// Checks never short-circuit each other; equal priorities keep check order
/// (smash, face-to-path, launch, spin, attack angle).
pub fn find_issues(data: &ObservedMetrics, targets: &AdjustedTargets, club: ClubType) -> Vec<Finding> {
    let mut findings = Vec::new();

    if data.smash < targets.smash.min {
        findings.push(Finding::LowSmash {
            observed: data.smash,
            target: targets.smash,
        });
    }

    if let Some(face_to_path) = data.face_to_path {
        if face_to_path.abs() > targets.face_to_path.max {
            findings.push(Finding::FaceToPath {
                observed: face_to_path,
                max: targets.face_to_path.max,
                direction: if face_to_path > 0.0 {
                    FaceDirection::Open
                } else {
                    FaceDirection::Closed
                },
            });
        }
    }

    if let Some(deviation) = Deviation::outside(data.launch_angle, &targets.launch_angle) {
        findings.push(Finding::LaunchAngle {
            observed: data.launch_angle,
            target: targets.launch_angle,
            deviation,
            cause: launch_cause(data, &targets.launch_angle, deviation, club),
        });
    }

    if let Some(deviation) = Deviation::outside(data.spin_rate, &targets.spin_rate) {
        findings.push(Finding::SpinRate {
            observed: data.spin_rate,
            target: targets.spin_rate,
            deviation,
        });
    }

    // Only a too-negative attack angle is flagged; a steep upward strike is left alone.
    if let Some(aoa) = data.aoa {
        if club.is_driver() && aoa < targets.aoa.min {
            findings.push(Finding::NegativeAttackAngle {
                observed: aoa,
                target: targets.aoa,
            });
        }
    }

    findings.sort_by_key(Finding::priority);
    log::debug!("[ANALYSIS] {} finding(s) for {}", findings.len(), club);
    findings
}

fn launch_cause(
    data: &ObservedMetrics,
    target: &MetricRange,
    deviation: Deviation,
    club: ClubType,
) -> Option<LaunchCause> {
    if let (Some(dynamic_loft), Some(aoa)) = (data.dynamic_loft, data.aoa) {
        let expected_launch = dynamic_loft + aoa * LAUNCH_FROM_LOFT_AOA_WEIGHT;
        if (expected_launch - data.launch_angle).abs() > STRIKE_LOCATION_GAP {
            return Some(LaunchCause::StrikeLocation { expected_launch });
        }
    }

    match (data.dynamic_loft, data.aoa) {
        (Some(dynamic_loft), _) => match deviation {
            Deviation::Low if dynamic_loft < target.optimal - DELOFT_MARGIN => {
                Some(LaunchCause::Delofting { dynamic_loft })
            }
            Deviation::High if dynamic_loft > target.optimal + ADDED_LOFT_MARGIN => {
                Some(LaunchCause::AddingLoft { dynamic_loft })
            }
            _ => None,
        },
        (None, Some(aoa)) if club.is_driver() && deviation == Deviation::Low && aoa < 0.0 => {
            Some(LaunchCause::NegativeAttackAngle { aoa })
        }
        _ => None,
    }
}

/// Full diagnosis: every issue, ordered by priority. Callers pick the top N.
pub fn diagnose(
    data: &ObservedMetrics,
    targets: &AdjustedTargets,
    club: ClubType,
    profile: &PlayerProfile,
) -> Vec<Issue> {
    let tier = profile.skill_tier();
    find_issues(data, targets, club)
        .iter()
        .map(|finding| advice::render(finding, club, tier))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club_targets::ClubTable;
    use crate::profile::PlayerType;

    fn driver_targets(handicap: f64) -> AdjustedTargets {
        AdjustedTargets::for_player(
            &ClubTable::build(),
            ClubType::Driver,
            &PlayerProfile::new(handicap, PlayerType::Amateur),
        )
    }

    fn clean_driver() -> ObservedMetrics {
        ObservedMetrics::new(1.49, 12.5, 3000.0)
    }

    #[test]
    fn clean_numbers_produce_no_issues() {
        let profile = PlayerProfile::new(15.0, PlayerType::Amateur);
        let issues = diagnose(&clean_driver(), &driver_targets(15.0), ClubType::Driver, &profile);
        assert!(issues.is_empty());
    }

    #[test]
    fn low_smash_is_single_priority_one_issue() {
        let targets = driver_targets(15.0);
        let profile = PlayerProfile::new(15.0, PlayerType::Amateur);

        let mut data = clean_driver();
        data.smash = 1.40;
        let issues = diagnose(&data, &targets, ClubType::Driver, &profile);
        let smash: Vec<_> = issues
            .iter()
            .filter(|i| i.title.starts_with("Low Smash Factor"))
            .collect();
        assert_eq!(smash.len(), 1);
        assert_eq!(smash[0].priority, 1);

        data.smash = targets.smash.min;
        let issues = diagnose(&data, &targets, ClubType::Driver, &profile);
        assert!(issues.iter().all(|i| !i.title.starts_with("Low Smash Factor")));
    }

    #[test]
    fn face_to_path_sign_selects_remedy() {
        let mut targets = driver_targets(0.0);
        targets.face_to_path.max = 3.0;
        let profile = PlayerProfile::new(0.0, PlayerType::Amateur);

        let mut data = clean_driver();
        data.face_to_path = Some(5.0);
        let issues = diagnose(&data, &targets, ClubType::Driver, &profile);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].fix.contains("too open"));

        data.face_to_path = Some(-5.0);
        let issues = diagnose(&data, &targets, ClubType::Driver, &profile);
        assert!(issues[0].fix.contains("too closed"));

        data.face_to_path = Some(3.0);
        assert!(find_issues(&data, &targets, ClubType::Driver).is_empty());
    }

    #[test]
    fn missing_face_to_path_is_not_checked() {
        let mut targets = driver_targets(0.0);
        targets.face_to_path.max = 0.0;
        assert!(find_issues(&clean_driver(), &targets, ClubType::Driver).is_empty());
    }

    #[test]
    fn strike_location_when_loft_and_aoa_disagree_with_launch() {
        let targets = driver_targets(15.0);
        let mut data = clean_driver();
        data.dynamic_loft = Some(8.0);
        data.aoa = Some(-4.0);

        // expected launch 6.0, actual 10.0
        data.launch_angle = 10.0;
        let findings = find_issues(&data, &targets, ClubType::Driver);
        let cause = findings.iter().find_map(|f| match f {
            Finding::LaunchAngle { cause, .. } => Some(*cause),
            _ => None,
        });
        assert_eq!(cause, Some(Some(LaunchCause::StrikeLocation { expected_launch: 6.0 })));
    }

    #[test]
    fn consistent_loft_and_aoa_fall_back_to_loft_check() {
        let targets = driver_targets(15.0);
        let mut data = clean_driver();
        data.dynamic_loft = Some(6.0);
        data.aoa = Some(-4.0);
        // within 3° of the expected 4.0, loft 6 < optimal 12.3 - 5
        data.launch_angle = 7.0;

        let findings = find_issues(&data, &targets, ClubType::Driver);
        assert!(findings.iter().any(|f| matches!(
            f,
            Finding::LaunchAngle {
                cause: Some(LaunchCause::Delofting { .. }),
                deviation: Deviation::Low,
                ..
            }
        )));
    }

    #[test]
    fn low_loft_alone_explains_low_launch() {
        let targets = driver_targets(15.0);
        let mut data = clean_driver();
        data.launch_angle = 9.0;
        data.dynamic_loft = Some(6.5);

        let findings = find_issues(&data, &targets, ClubType::Driver);
        assert_eq!(
            findings,
            vec![Finding::LaunchAngle {
                observed: 9.0,
                target: targets.launch_angle,
                deviation: Deviation::Low,
                cause: Some(LaunchCause::Delofting { dynamic_loft: 6.5 }),
            }]
        );

        // 7.5 is within 5° of the 12.3° optimum
        data.dynamic_loft = Some(7.5);
        let findings = find_issues(&data, &targets, ClubType::Driver);
        assert!(matches!(findings[0], Finding::LaunchAngle { cause: None, .. }));
    }

    #[test]
    fn high_launch_with_high_loft_is_adding_loft() {
        let table = ClubTable::build();
        let profile = PlayerProfile::new(10.0, PlayerType::Amateur);
        let targets = AdjustedTargets::for_player(&table, ClubType::Iron7, &profile);
        let mut data = ObservedMetrics::new(1.40, 22.0, 7000.0);
        data.dynamic_loft = Some(24.0);

        let findings = find_issues(&data, &targets, ClubType::Iron7);
        assert_eq!(
            findings,
            vec![Finding::LaunchAngle {
                observed: 22.0,
                target: targets.launch_angle,
                deviation: Deviation::High,
                cause: Some(LaunchCause::AddingLoft { dynamic_loft: 24.0 }),
            }]
        );
    }

    #[test]
    fn aoa_only_cause_is_driver_only() {
        let table = ClubTable::build();
        let profile = PlayerProfile::new(10.0, PlayerType::Amateur);
        let targets = AdjustedTargets::for_player(&table, ClubType::Iron7, &profile);
        let mut data = ObservedMetrics::new(1.40, 12.0, 7000.0);
        data.aoa = Some(-4.0);

        let findings = find_issues(&data, &targets, ClubType::Iron7);
        assert!(matches!(findings[0], Finding::LaunchAngle { cause: None, .. }));
    }

    #[test]
    fn positive_attack_angle_is_never_flagged() {
        let targets = driver_targets(15.0);
        let mut data = clean_driver();
        data.aoa = Some(9.0);
        assert!(find_issues(&data, &targets, ClubType::Driver).is_empty());
    }

    #[test]
    fn attack_angle_ignored_for_irons() {
        let table = ClubTable::build();
        let profile = PlayerProfile::new(10.0, PlayerType::Amateur);
        let targets = AdjustedTargets::for_player(&table, ClubType::Iron7, &profile);
        let mut data = ObservedMetrics::new(1.40, 17.0, 7000.0);
        data.aoa = Some(-9.0);
        assert!(find_issues(&data, &targets, ClubType::Iron7).is_empty());
    }

    #[test]
    fn spin_direction_is_reported() {
        let targets = driver_targets(15.0);
        let mut data = clean_driver();
        data.spin_rate = 4200.0;
        let findings = find_issues(&data, &targets, ClubType::Driver);
        assert!(matches!(
            findings[0],
            Finding::SpinRate {
                deviation: Deviation::High,
                ..
            }
        ));
    }

    #[test]
    fn fifteen_handicap_driver_scenario() {
        let profile = PlayerProfile::new(15.0, PlayerType::Amateur);
        let targets = AdjustedTargets::for_player(ClubTable::global(), ClubType::Driver, &profile);
        let mut data = ObservedMetrics::new(1.35, 9.0, 3200.0);
        data.aoa = Some(-2.0);

        let findings = find_issues(&data, &targets, ClubType::Driver);
        assert_eq!(findings.len(), 3);
        assert!(matches!(findings[0], Finding::LowSmash { .. }));
        assert!(matches!(
            findings[1],
            Finding::LaunchAngle {
                deviation: Deviation::Low,
                cause: Some(LaunchCause::NegativeAttackAngle { .. }),
                ..
            }
        ));
        assert!(matches!(findings[2], Finding::NegativeAttackAngle { .. }));

        let issues = diagnose(&data, &targets, ClubType::Driver, &profile);
        let priorities: Vec<u8> = issues.iter().map(|i| i.priority).collect();
        assert_eq!(priorities, vec![1, 2, 2]);
        assert_eq!(issues[1].title, "Low Launch Angle");
        assert_eq!(issues[2].title, "Negative Attack Angle with Driver");
    }

    #[test]
    fn priority_one_issues_sort_ahead_of_launch() {
        let targets = driver_targets(15.0);
        let mut data = clean_driver();
        data.launch_angle = 17.0;
        data.face_to_path = Some(-12.0);
        let findings = find_issues(&data, &targets, ClubType::Driver);
        assert!(matches!(findings[0], Finding::FaceToPath { direction: FaceDirection::Closed, .. }));
        assert!(matches!(findings[1], Finding::LaunchAngle { deviation: Deviation::High, .. }));
    }

    #[test]
    fn diagnosis_is_repeatable() {
        let profile = PlayerProfile::new(15.0, PlayerType::Amateur);
        let mut data = ObservedMetrics::new(1.35, 9.0, 3200.0);
        data.aoa = Some(-2.0);
        let run = || {
            let targets = AdjustedTargets::for_player(ClubTable::global(), ClubType::Driver, &profile);
            serde_json::to_string(&diagnose(&data, &targets, ClubType::Driver, &profile)).unwrap()
        };
        assert_eq!(run(), run());
    }
}
