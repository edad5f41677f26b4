use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerType {
    Professional,
    Teaching,
    Competitive,
    #[default]
    Amateur,
}

impl PlayerType {
    /// Tour and teaching pros share the professional driver tables.
    pub fn is_professional(&self) -> bool {
        matches!(self, PlayerType::Professional | PlayerType::Teaching)
    }
}

impl FromStr for PlayerType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "professional" | "pro" => Ok(PlayerType::Professional),
            "teaching" => Ok(PlayerType::Teaching),
            "competitive" => Ok(PlayerType::Competitive),
            "amateur" => Ok(PlayerType::Amateur),
            other => Err(format!(
                "unknown player type '{}' (expected professional, teaching, competitive or amateur)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub handicap: f64,
    pub rounds: Option<u32>,
    #[serde(default)]
    pub player_type: PlayerType,
}

impl PlayerProfile {
    pub fn new(handicap: f64, player_type: PlayerType) -> Self {
        Self {
            name: None,
            age: None,
            handicap,
            rounds: None,
            player_type,
        }
    }

    pub fn skill_tier(&self) -> SkillTier {
        SkillTier::classify(self)
    }

    /// How close the player is to tour level, in (0, 1].
    ///
    /// Falls with handicap and is floored (0.7 competitive, 0.5 amateur) so
    /// high handicaps never collapse the target ranges. Plus handicaps cap at 1.0.
    pub fn skill_factor(&self) -> f64 {
        match self.player_type {
            PlayerType::Professional => 1.0,
            PlayerType::Teaching => 0.95,
            PlayerType::Competitive => (1.0 - self.handicap / 20.0).clamp(0.7, 1.0),
            PlayerType::Amateur => (1.0 - self.handicap / 25.0).clamp(0.5, 1.0),
        }
    }
}

/// Ordered handicap bands: the first entry whose limit is `>= handicap` wins,
/// anything past the last limit gets `fallback`.
pub fn handicap_band<T: Copy>(handicap: f64, bands: &[(f64, T)], fallback: T) -> T {
    bands
        .iter()
        .find(|(limit, _)| handicap <= *limit)
        .map(|(_, value)| *value)
        .unwrap_or(fallback)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillTier {
    TourProfessional,
    TeachingProfessional,
    CompetitiveAmateur,
    Scratch,
    SingleDigit,
    FiveToTen,
    TenToFifteen,
    FifteenToTwenty,
    TwentyPlus,
}

const HANDICAP_TIERS: &[(f64, SkillTier)] = &[
    (0.0, SkillTier::Scratch),
    (5.0, SkillTier::SingleDigit),
    (10.0, SkillTier::FiveToTen),
    (15.0, SkillTier::TenToFifteen),
    (20.0, SkillTier::FifteenToTwenty),
];

impl SkillTier {
    pub fn classify(profile: &PlayerProfile) -> Self {
        match profile.player_type {
            PlayerType::Professional => SkillTier::TourProfessional,
            PlayerType::Teaching => SkillTier::TeachingProfessional,
            PlayerType::Competitive => SkillTier::CompetitiveAmateur,
            PlayerType::Amateur => {
                handicap_band(profile.handicap, HANDICAP_TIERS, SkillTier::TwentyPlus)
            }
        }
    }

    /// Group name as it reads in coaching text ("For 15-20 Handicappers, ...").
    pub fn label(&self) -> &'static str {
        match self {
            SkillTier::TourProfessional => "Tour Professionals",
            SkillTier::TeachingProfessional => "Teaching Professionals",
            SkillTier::CompetitiveAmateur => "Competitive Amateurs",
            SkillTier::Scratch => "Scratch Golfers",
            SkillTier::SingleDigit => "Single-Digit Handicappers",
            SkillTier::FiveToTen => "5-10 Handicappers",
            SkillTier::TenToFifteen => "10-15 Handicappers",
            SkillTier::FifteenToTwenty => "15-20 Handicappers",
            SkillTier::TwentyPlus => "20+ Handicappers",
        }
    }
}

impl fmt::Display for SkillTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
