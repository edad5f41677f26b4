use crate::diagnosis::{Deviation, FaceDirection, Finding, Issue, LaunchCause};
use crate::profile::SkillTier;
use crate::shot::ClubType;

const CONTACT_FIX: &str = "Focus on hitting the center of the clubface. Try impact tape or foot powder spray to see your strike pattern. Work on consistent contact before worrying about swing mechanics. Even a 0.02 improvement in smash factor can add 4-6 yards.";

const OPEN_FACE_FIX: &str = "Your face is too open relative to path. Try: (1) Stronger grip - rotate both hands more to the right (for right-handers), (2) Focus on rotating the clubface closed through impact, (3) Check your wrist angles at the top.";

const CLOSED_FACE_FIX: &str = "Your face is too closed relative to path. Try: (1) Weaker grip - rotate hands more to the left (for right-handers), (2) Feel like you're \"holding off\" the release through impact, (3) Keep the clubface more square to the arc.";

const LOW_LAUNCH_DRIVER_FIX: &str = "Driver fixes: (1) Tee it higher - half the ball above the crown, (2) Move the ball forward, off your lead heel, (3) Widen your stance and tilt your spine away from the target at address, (4) Feel like you're hitting \"up\" on the ball.";

const LOW_LAUNCH_IRON_FIX: &str = "Iron fixes: (1) Check ball position - center to slightly forward, (2) Reduce forward shaft lean at impact, (3) Make sure you're not trapping it too much, (4) Swing more around your body rather than down.";

const HIGH_LAUNCH_DRIVER_FIX: &str = "Driver fixes: (1) Lower the tee slightly, (2) Move the ball back 1-2 inches, (3) Reduce upper body tilt away from the target, (4) Feel more \"through\" the ball rather than \"up\" at it. You may also be flipping at impact.";

const HIGH_LAUNCH_IRON_FIX: &str = "Iron fixes: (1) Ball position may be too far forward, (2) Add slight forward shaft lean, (3) Compress the ball rather than scooping it, (4) Lead with your hands through impact.";

const LOW_SPIN_DRIVER_FIX: &str = "Driver fixes: (1) Check whether you're delofting excessively - you may need more loft on your driver, (2) Hit slightly more up on it (positive attack angle), (3) Your shaft may be too stiff, (4) Clean your clubface and check for worn grooves.";

const LOW_SPIN_IRON_FIX: &str = "Iron fixes: (1) Ensure clean, crisp contact - not thin strikes, (2) Check your grooves aren't worn, (3) You may be catching it thin or low on the face, (4) Maintain dynamic loft through impact.";

const HIGH_SPIN_DRIVER_FIX: &str = "Driver fixes: (1) Tee it higher and swing more up on it, (2) You're likely hitting down (negative attack angle) - fix this first, (3) You may be striking high on the face, (4) You could need less loft on your driver head.";

const HIGH_SPIN_IRON_FIX: &str = "Iron fixes: (1) Reduce your angle of attack - you're coming in too steep, (2) Less forward shaft lean at impact, (3) Shallow out your downswing, (4) Feel like you're releasing the club earlier through impact.";

const ATTACK_ANGLE_FIX: &str = "Driver attack angle fixes: (1) Tee it HIGH - half the ball above the crown, (2) Ball position forward - off your lead heel or toe, (3) Widen your stance and tilt your spine away from the target, (4) Keep your head behind the ball through impact, (5) Practice the \"up at it\" drill - feel like you're swinging up at the ball.";

fn signed(value: f64) -> String {
    if value > 0.0 {
        format!("+{:.1}", value)
    } else {
        format!("{:.1}", value)
    }
}

fn launch_note(cause: &LaunchCause) -> String {
    match *cause {
        LaunchCause::StrikeLocation { expected_launch } => format!(
            " Your dynamic loft and attack angle should launch it around {:.1}°, so something else is affecting launch (possibly strike location on the face).",
            expected_launch
        ),
        LaunchCause::Delofting { dynamic_loft } => format!(
            " Your dynamic loft ({:.1}°) is also low, indicating you may be delofting at impact with excessive forward shaft lean.",
            dynamic_loft
        ),
        LaunchCause::AddingLoft { dynamic_loft } => format!(
            " Your dynamic loft ({:.1}°) is high, indicating you may be adding loft (flipping/scooping) at impact.",
            dynamic_loft
        ),
        LaunchCause::NegativeAttackAngle { aoa } => format!(
            " Your negative attack angle ({}°) is contributing to the low launch.",
            signed(aoa)
        ),
    }
}

fn by_club(club: ClubType, driver: &str, iron: &str) -> String {
    if club.is_driver() {
        driver.to_string()
    } else {
        iron.to_string()
    }
}

fn direction_word(deviation: Deviation) -> &'static str {
    match deviation {
        Deviation::Low => "Low",
        Deviation::High => "High",
    }
}

/// Turn a diagnosis finding into display text for a player in `tier`.
pub fn render(finding: &Finding, club: ClubType, tier: SkillTier) -> Issue {
    let priority = finding.priority();
    let group = tier.label();

    let (title, problem, fix) = match *finding {
        Finding::LowSmash { observed, target } => (
            "Low Smash Factor - Poor Contact".to_string(),
            format!(
                "Your smash factor is {:.2}, but {} should be around {:.2} (range: {:.2}-{:.2}). You're losing distance due to off-center hits.",
                observed, group, target.optimal, target.min, target.max
            ),
            CONTACT_FIX.to_string(),
        ),
        Finding::FaceToPath {
            observed,
            max,
            direction,
        } => {
            let (curve, fix) = match direction {
                FaceDirection::Open => ("slice/fade", OPEN_FACE_FIX),
                FaceDirection::Closed => ("hook/draw", CLOSED_FACE_FIX),
            };
            (
                "Face to Path Issue - Excessive Curve".to_string(),
                format!(
                    "Your face to path is {}°. For {}, you want this closer to 0° (within ±{:.1}°). This creates excessive curve on your shots ({}).",
                    signed(observed), group, max, curve
                ),
                fix.to_string(),
            )
        }
        Finding::LaunchAngle {
            observed,
            target,
            deviation,
            cause,
        } => {
            let fix = match deviation {
                Deviation::Low => by_club(club, LOW_LAUNCH_DRIVER_FIX, LOW_LAUNCH_IRON_FIX),
                Deviation::High => by_club(club, HIGH_LAUNCH_DRIVER_FIX, HIGH_LAUNCH_IRON_FIX),
            };
            (
                format!("{} Launch Angle", direction_word(deviation)),
                format!(
                    "Your launch angle is {:.1}°. For {}, optimal is {:.1}-{:.1}° with the {}.{}",
                    observed,
                    group,
                    target.min,
                    target.max,
                    club.name(),
                    cause.as_ref().map(launch_note).unwrap_or_default()
                ),
                fix,
            )
        }
        Finding::SpinRate {
            observed,
            target,
            deviation,
        } => {
            let (consequence, fix) = match deviation {
                Deviation::Low => (
                    "Too little spin can make the ball drop out of the sky and reduces control, especially into greens.",
                    by_club(club, LOW_SPIN_DRIVER_FIX, LOW_SPIN_IRON_FIX),
                ),
                Deviation::High => (
                    "Too much spin costs you significant distance - the extra backspin fights forward momentum.",
                    by_club(club, HIGH_SPIN_DRIVER_FIX, HIGH_SPIN_IRON_FIX),
                ),
            };
            (
                format!("{} Spin Rate", direction_word(deviation)),
                format!(
                    "Your spin is {:.0} rpm. For {} with the {}, optimal is {:.0}-{:.0} rpm. {}",
                    observed,
                    group,
                    club.name(),
                    target.min,
                    target.max,
                    consequence
                ),
                fix,
            )
        }
        Finding::NegativeAttackAngle { observed, target } => (
            "Negative Attack Angle with Driver".to_string(),
            format!(
                "You're hitting down on your driver ({:.1}°). For {}, you should be between {:.1}° and {:.1}°. This costs you distance and creates excessive spin.",
                observed, group, target.min, target.optimal
            ),
            ATTACK_ANGLE_FIX.to_string(),
        ),
    };

    Issue {
        priority,
        title,
        problem,
        fix,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club_targets::MetricRange;

    #[test]
    fn smash_problem_quotes_numbers() {
        let finding = Finding::LowSmash {
            observed: 1.35,
            target: MetricRange::new(1.464, 1.52, 1.49),
        };
        let issue = render(&finding, ClubType::Driver, SkillTier::TenToFifteen);
        assert_eq!(issue.priority, 1);
        assert_eq!(
            issue.problem,
            "Your smash factor is 1.35, but 10-15 Handicappers should be around 1.49 (range: 1.46-1.52). You're losing distance due to off-center hits."
        );
    }

    #[test]
    fn face_to_path_shows_sign_and_curve() {
        let finding = Finding::FaceToPath {
            observed: 5.0,
            max: 3.0,
            direction: FaceDirection::Open,
        };
        let issue = render(&finding, ClubType::Iron7, SkillTier::Scratch);
        assert!(issue.problem.starts_with("Your face to path is +5.0°."));
        assert!(issue.problem.contains("slice/fade"));
        assert!(issue.fix.contains("too open"));
    }

    #[test]
    fn launch_fix_branches_on_club_and_direction() {
        let target = MetricRange::new(10.0, 14.0, 12.0);
        let low = |club| {
            render(
                &Finding::LaunchAngle {
                    observed: 8.0,
                    target,
                    deviation: Deviation::Low,
                    cause: None,
                },
                club,
                SkillTier::Scratch,
            )
        };
        let high = |club| {
            render(
                &Finding::LaunchAngle {
                    observed: 16.0,
                    target,
                    deviation: Deviation::High,
                    cause: None,
                },
                club,
                SkillTier::Scratch,
            )
        };

        let fixes = [
            low(ClubType::Driver).fix,
            low(ClubType::Iron5).fix,
            high(ClubType::Driver).fix,
            high(ClubType::Iron5).fix,
        ];
        assert_eq!(fixes[0], LOW_LAUNCH_DRIVER_FIX);
        assert_eq!(fixes[1], LOW_LAUNCH_IRON_FIX);
        assert_eq!(fixes[2], HIGH_LAUNCH_DRIVER_FIX);
        assert_eq!(fixes[3], HIGH_LAUNCH_IRON_FIX);
        assert_eq!(low(ClubType::Driver).title, "Low Launch Angle");
        assert_eq!(high(ClubType::Iron5).title, "High Launch Angle");
    }

    #[test]
    fn launch_cause_is_appended_to_problem() {
        let finding = Finding::LaunchAngle {
            observed: 10.0,
            target: MetricRange::new(11.0, 14.5, 12.3),
            deviation: Deviation::Low,
            cause: Some(LaunchCause::StrikeLocation {
                expected_launch: 6.0,
            }),
        };
        let issue = render(&finding, ClubType::Driver, SkillTier::TenToFifteen);
        assert!(issue.problem.contains("with the Driver."));
        assert!(issue.problem.contains("launch it around 6.0°"));
        assert!(issue.problem.ends_with("(possibly strike location on the face)."));
    }

    #[test]
    fn launch_notes_quote_loft_and_attack_angle() {
        let note = |cause| {
            render(
                &Finding::LaunchAngle {
                    observed: 8.0,
                    target: MetricRange::new(11.0, 14.5, 12.3),
                    deviation: Deviation::Low,
                    cause: Some(cause),
                },
                ClubType::Driver,
                SkillTier::FifteenToTwenty,
            )
            .problem
        };
        assert!(note(LaunchCause::Delofting { dynamic_loft: 6.0 })
            .ends_with(" Your dynamic loft (6.0°) is also low, indicating you may be delofting at impact with excessive forward shaft lean."));
        assert!(note(LaunchCause::AddingLoft { dynamic_loft: 19.5 }).contains("Your dynamic loft (19.5°) is high"));
        assert!(note(LaunchCause::NegativeAttackAngle { aoa: -2.0 })
            .ends_with(" Your negative attack angle (-2.0°) is contributing to the low launch."));
    }

    #[test]
    fn spin_text_uses_whole_rpm() {
        let finding = Finding::SpinRate {
            observed: 7920.0,
            target: MetricRange::new(6500.0, 7500.0, 7000.0),
            deviation: Deviation::High,
        };
        let issue = render(&finding, ClubType::Iron7, SkillTier::FiveToTen);
        assert_eq!(issue.title, "High Spin Rate");
        assert!(issue.problem.starts_with("Your spin is 7920 rpm."));
        assert!(issue.problem.contains("optimal is 6500-7500 rpm"));
        assert_eq!(issue.fix, HIGH_SPIN_IRON_FIX);
    }

    #[test]
    fn spin_fix_branches_on_club_and_direction() {
        let spin = |club, observed, deviation| {
            render(
                &Finding::SpinRate {
                    observed,
                    target: MetricRange::new(2500.0, 3600.0, 3000.0),
                    deviation,
                },
                club,
                SkillTier::FifteenToTwenty,
            )
        };

        let low_driver = spin(ClubType::Driver, 1900.0, Deviation::Low);
        let low_iron = spin(ClubType::Iron9, 1900.0, Deviation::Low);
        let high_driver = spin(ClubType::Driver, 4100.0, Deviation::High);
        let high_iron = spin(ClubType::Iron9, 4100.0, Deviation::High);

        assert_eq!(low_driver.fix, LOW_SPIN_DRIVER_FIX);
        assert_eq!(low_iron.fix, LOW_SPIN_IRON_FIX);
        assert_eq!(high_driver.fix, HIGH_SPIN_DRIVER_FIX);
        assert_eq!(high_iron.fix, HIGH_SPIN_IRON_FIX);

        assert_eq!(low_driver.title, "Low Spin Rate");
        assert_eq!(high_driver.title, "High Spin Rate");
        assert_eq!(low_driver.priority, 2);
        assert!(low_iron.problem.contains("with the 9 Iron, optimal is 2500-3600 rpm."));
        assert!(low_iron.problem.ends_with("especially into greens."));
        assert!(high_driver.problem.ends_with("fights forward momentum."));
    }
}
