use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClubType {
    #[serde(rename = "driver")]
    Driver,
    #[serde(rename = "3wood")]
    Wood3,
    #[serde(rename = "5wood")]
    Wood5,
    #[serde(rename = "3iron")]
    Iron3,
    #[serde(rename = "4iron")]
    Iron4,
    #[serde(rename = "5iron")]
    Iron5,
    #[serde(rename = "6iron")]
    Iron6,
    #[serde(rename = "7iron")]
    Iron7,
    #[serde(rename = "8iron")]
    Iron8,
    #[serde(rename = "9iron")]
    Iron9,
    #[serde(rename = "pw")]
    Pw,
    #[serde(rename = "gw")]
    Gw,
    #[serde(rename = "sw")]
    Sw,
    #[serde(rename = "lw")]
    Lw,
}

impl ClubType {
    pub const ALL: [ClubType; 14] = [
        ClubType::Driver,
        ClubType::Wood3,
        ClubType::Wood5,
        ClubType::Iron3,
        ClubType::Iron4,
        ClubType::Iron5,
        ClubType::Iron6,
        ClubType::Iron7,
        ClubType::Iron8,
        ClubType::Iron9,
        ClubType::Pw,
        ClubType::Gw,
        ClubType::Sw,
        ClubType::Lw,
    ];

    /// Short identifier used on the command line and in stored sessions.
    pub fn id(&self) -> &'static str {
        match self {
            ClubType::Driver => "driver",
            ClubType::Wood3 => "3wood",
            ClubType::Wood5 => "5wood",
            ClubType::Iron3 => "3iron",
            ClubType::Iron4 => "4iron",
            ClubType::Iron5 => "5iron",
            ClubType::Iron6 => "6iron",
            ClubType::Iron7 => "7iron",
            ClubType::Iron8 => "8iron",
            ClubType::Iron9 => "9iron",
            ClubType::Pw => "pw",
            ClubType::Gw => "gw",
            ClubType::Sw => "sw",
            ClubType::Lw => "lw",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ClubType::Driver => "Driver",
            ClubType::Wood3 => "3 Wood",
            ClubType::Wood5 => "5 Wood",
            ClubType::Iron3 => "3 Iron",
            ClubType::Iron4 => "4 Iron",
            ClubType::Iron5 => "5 Iron",
            ClubType::Iron6 => "6 Iron",
            ClubType::Iron7 => "7 Iron",
            ClubType::Iron8 => "8 Iron",
            ClubType::Iron9 => "9 Iron",
            ClubType::Pw => "Pitching Wedge",
            ClubType::Gw => "Gap Wedge",
            ClubType::Sw => "Sand Wedge",
            ClubType::Lw => "Lob Wedge",
        }
    }

    pub fn is_driver(&self) -> bool {
        *self == ClubType::Driver
    }

    /// Gap, sand and lob wedges come in several lofts, so sessions record it.
    pub fn is_wedge(&self) -> bool {
        matches!(self, ClubType::Gw | ClubType::Sw | ClubType::Lw)
    }

    /// Display name including the wedge loft when one applies.
    pub fn display_name(&self, wedge_loft: Option<f64>) -> String {
        match wedge_loft {
            Some(loft) if self.is_wedge() => format!("{} ({}°)", self.name(), loft),
            _ => self.name().to_string(),
        }
    }
}

impl fmt::Display for ClubType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ClubType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ClubType::ALL
            .iter()
            .copied()
            .find(|club| club.id() == wanted)
            .ok_or_else(|| {
                let ids: Vec<&str> = ClubType::ALL.iter().map(|c| c.id()).collect();
                format!("unknown club '{}' (expected one of: {})", s, ids.join(", "))
            })
    }
}

/// Launch monitor numbers for a single swing.
///
/// Smash factor, launch angle and spin rate are always present. Everything
/// else is `None` when the monitor did not measure it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservedMetrics {
    pub smash: f64,
    pub launch_angle: f64, // degrees
    pub spin_rate: f64,    // rpm
    pub face_to_path: Option<f64>,
    pub dynamic_loft: Option<f64>,
    pub aoa: Option<f64>,
    pub club_speed: Option<f64>, // mph
    pub ball_speed: Option<f64>, // mph
    pub path: Option<f64>,
    pub face: Option<f64>,
}

impl ObservedMetrics {
    pub fn new(smash: f64, launch_angle: f64, spin_rate: f64) -> Self {
        Self {
            smash,
            launch_angle,
            spin_rate,
            face_to_path: None,
            dynamic_loft: None,
            aoa: None,
            club_speed: None,
            ball_speed: None,
            path: None,
            face: None,
        }
    }

    pub fn smash_from_speeds(club_speed: Option<f64>, ball_speed: Option<f64>) -> Option<f64> {
        match (club_speed, ball_speed) {
            (Some(club), Some(ball)) if club > 0.0 => Some(ball / club),
            _ => None,
        }
    }

    /// Fill face-to-path from face and path angles when it was not reported directly.
    pub fn with_derived_face_to_path(mut self) -> Self {
        if self.face_to_path.is_none() {
            if let (Some(face), Some(path)) = (self.face, self.path) {
                self.face_to_path = Some(face - path);
            }
        }
        self
    }
}
