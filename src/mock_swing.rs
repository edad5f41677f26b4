use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::club_targets::ClubTable;
use crate::shot::{ClubType, ObservedMetrics};

/// Simulated launch monitor that produces plausible swings for a club.
///
/// Numbers scatter around the club's baseline optimum. Every 5th swing is a
/// mishit and every 3rd comes in steep, so the analyzer has something to find.
pub struct MockSwing<R: Rng> {
    rng: R,
    table: &'static ClubTable,
    swing_number: u32,
}

impl MockSwing<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MockSwing<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            table: ClubTable::global(),
            swing_number: 0,
        }
    }

    pub fn swing(&mut self, club: ClubType) -> ObservedMetrics {
        self.swing_number += 1;
        let base = self.table.profile(club);
        let rng = &mut self.rng;

        let mishit = self.swing_number % 5 == 0;
        let steep = self.swing_number % 3 == 0;

        let smash = if mishit {
            base.smash.optimal - rng.gen_range(0.08..0.15)
        } else {
            base.smash.optimal - rng.gen_range(-0.01..0.06)
        };

        let aoa = if steep {
            base.aoa.min - rng.gen_range(1.0..4.0)
        } else {
            base.aoa.optimal + rng.gen_range(-2.5..2.0)
        };

        // Launch follows delivered loft and attack angle, plus strike scatter
        let dynamic_loft = base.launch_angle.optimal + rng.gen_range(-2.0..3.0);
        let strike_scatter = if mishit { rng.gen_range(-4.5..4.5) } else { rng.gen_range(-1.0..1.0) };
        let launch_angle = (dynamic_loft + aoa * 0.5 + strike_scatter).max(1.0);

        let spin_rate = (base.spin_rate.optimal * rng.gen_range(0.8..1.3)).round();

        let club_speed = nominal_club_speed(club) * rng.gen_range(0.85..1.1);
        let ball_speed = club_speed * smash;

        let path = rng.gen_range(-5.0..5.0);
        let face = path + rng.gen_range(-7.0..7.0);

        // Older monitors don't report club delivery on every swing
        let club_data = rng.gen_bool(0.7);

        log::debug!(
            "[MOCK] Swing #{} with {}: smash {:.2}, launch {:.1}°, spin {:.0}",
            self.swing_number,
            club,
            smash,
            launch_angle,
            spin_rate
        );

        ObservedMetrics {
            smash: round_to(smash, 2),
            launch_angle: round_to(launch_angle, 1),
            spin_rate,
            face_to_path: club_data.then(|| round_to(face - path, 1)),
            dynamic_loft: club_data.then(|| round_to(dynamic_loft, 1)),
            aoa: club_data.then(|| round_to(aoa, 1)),
            club_speed: Some(round_to(club_speed, 1)),
            ball_speed: Some(round_to(ball_speed, 1)),
            path: club_data.then(|| round_to(path, 1)),
            face: club_data.then(|| round_to(face, 1)),
        }
    }
}

/// Typical amateur club head speed (mph) for each club.
fn nominal_club_speed(club: ClubType) -> f64 {
    match club {
        ClubType::Driver => 93.0,
        ClubType::Wood3 => 88.0,
        ClubType::Wood5 => 85.0,
        ClubType::Iron3 => 82.0,
        ClubType::Iron4 => 80.0,
        ClubType::Iron5 => 78.0,
        ClubType::Iron6 => 76.0,
        ClubType::Iron7 => 74.0,
        ClubType::Iron8 => 72.0,
        ClubType::Iron9 => 70.0,
        ClubType::Pw => 68.0,
        ClubType::Gw => 66.0,
        ClubType::Sw => 64.0,
        ClubType::Lw => 62.0,
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
