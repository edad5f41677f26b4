use serde::Serialize;

use crate::benchmarks::{typical_averages, TypicalAverages};
use crate::club_targets::ClubTable;
use crate::diagnosis::{diagnose, Issue};
use crate::profile::{PlayerProfile, SkillTier};
use crate::shot::{ClubType, ObservedMetrics};
use crate::targets::AdjustedTargets;

pub const DEFAULT_TOP_ISSUES: usize = 2;

/// Everything produced for one swing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub club: ClubType,
    pub wedge_loft: Option<f64>,
    pub profile: PlayerProfile,
    pub tier: SkillTier,
    pub targets: AdjustedTargets,
    pub typical_averages: TypicalAverages,
    pub data: ObservedMetrics,
    pub issues: Vec<Issue>,
}

impl Analysis {
    pub fn top_issues(&self, n: usize) -> &[Issue] {
        &self.issues[..self.issues.len().min(n)]
    }
}

pub struct SwingAnalyzer<'a> {
    table: &'a ClubTable,
}

impl SwingAnalyzer<'static> {
    pub fn new() -> Self {
        Self::with_table(ClubTable::global())
    }
}

impl<'a> SwingAnalyzer<'a> {
    pub fn with_table(table: &'a ClubTable) -> Self {
        Self { table }
    }

    pub fn targets(&self, club: ClubType, profile: &PlayerProfile) -> AdjustedTargets {
        AdjustedTargets::for_player(self.table, club, profile)
    }

    pub fn analyze(
        &self,
        club: ClubType,
        wedge_loft: Option<f64>,
        profile: &PlayerProfile,
        data: &ObservedMetrics,
    ) -> Analysis {
        let tier = profile.skill_tier();
        let targets = self.targets(club, profile);
        let issues = diagnose(data, &targets, club, profile);

        log::info!(
            "[ANALYSIS] {} for {}: smash {:.2}, launch {:.1}°, spin {:.0} rpm -> {} issue(s)",
            club.display_name(wedge_loft),
            tier,
            data.smash,
            data.launch_angle,
            data.spin_rate,
            issues.len()
        );

        Analysis {
            club,
            wedge_loft: wedge_loft.filter(|_| club.is_wedge()),
            profile: profile.clone(),
            tier,
            targets,
            typical_averages: typical_averages(club, profile),
            data: data.clone(),
            issues,
        }
    }
}

impl Default for SwingAnalyzer<'static> {
    fn default() -> Self {
        Self::new()
    }
}
