use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::analyzer::Analysis;
use crate::diagnosis::Issue;
use crate::profile::PlayerProfile;
use crate::shot::{ClubType, ObservedMetrics};

/// Local history keeps only the most recent sessions.
pub const MAX_LOCAL_SESSIONS: usize = 50;

const HISTORY_FILE: &str = "history.json";
const PROFILE_FILE: &str = "profile.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status} for {url}")]
    Status { status: u16, url: String },
    #[error("timeout talking to {0}")]
    Timeout(String),
}

/// A saved analysis, as written to history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: i64,
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub remote_id: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub club: ClubType,
    pub wedge_loft: Option<f64>,
    pub profile: PlayerProfile,
    pub data: ObservedMetrics,
    pub issues: Vec<Issue>,
    #[serde(default)]
    pub notes: String,
}

impl Session {
    /// Snapshot an analysis, keeping only its `top_n` issues.
    pub fn from_analysis(analysis: &Analysis, top_n: usize, notes: &str) -> Self {
        let timestamp = Utc::now();
        Self {
            id: timestamp.timestamp_millis(),
            remote_id: None,
            timestamp,
            club: analysis.club,
            wedge_loft: analysis.wedge_loft,
            profile: analysis.profile.clone(),
            data: analysis.data.clone(),
            issues: analysis.top_issues(top_n).to_vec(),
            notes: notes.trim().to_string(),
        }
    }

    pub fn top_issue(&self) -> Option<&Issue> {
        self.issues.first()
    }
}

/// Keep sessions for `club`, or all of them when no club is given.
pub fn filter_by_club(sessions: Vec<Session>, club: Option<ClubType>) -> Vec<Session> {
    match club {
        Some(club) => sessions.into_iter().filter(|s| s.club == club).collect(),
        None => sessions,
    }
}

// Trait for session persistence (local file or remote document store)
pub trait SessionStore {
    /// All saved sessions, newest first.
    fn load_sessions(&mut self) -> Result<Vec<Session>, StoreError>;
    fn save_session(&mut self, session: &Session) -> Result<(), StoreError>;
    /// Returns false when no session had this id.
    fn delete_session(&mut self, id: i64) -> Result<bool, StoreError>;
    fn clear(&mut self) -> Result<(), StoreError>;
    fn save_profile(&mut self, profile: &PlayerProfile) -> Result<(), StoreError>;
    fn load_profile(&mut self) -> Result<Option<PlayerProfile>, StoreError>;
}

/// JSON files in a data directory.
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn history_path(&self) -> PathBuf {
        self.dir.join(HISTORY_FILE)
    }

    fn profile_path(&self) -> PathBuf {
        self.dir.join(PROFILE_FILE)
    }

    fn write_json<T: Serialize + ?Sized>(&self, path: &Path, value: &T) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(value)?;
        fs::write(path, json)?;
        Ok(())
    }

    fn write_history(&self, sessions: &[Session]) -> Result<(), StoreError> {
        self.write_json(&self.history_path(), sessions)
    }
}

impl SessionStore for LocalStore {
    fn load_sessions(&mut self) -> Result<Vec<Session>, StoreError> {
        let path = self.history_path();
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&raw) {
            Ok(sessions) => Ok(sessions),
            Err(e) => {
                log::warn!("[STORE] Ignoring unreadable history at {}: {}", path.display(), e);
                Ok(Vec::new())
            }
        }
    }

    fn save_session(&mut self, session: &Session) -> Result<(), StoreError> {
        let mut sessions = self.load_sessions()?;
        sessions.insert(0, session.clone());
        sessions.truncate(MAX_LOCAL_SESSIONS);
        self.write_history(&sessions)?;
        log::info!(
            "[STORE] Saved session {} ({} kept locally)",
            session.id,
            sessions.len()
        );
        Ok(())
    }

    fn delete_session(&mut self, id: i64) -> Result<bool, StoreError> {
        let mut sessions = self.load_sessions()?;
        let before = sessions.len();
        sessions.retain(|s| s.id != id);
        if sessions.len() == before {
            log::debug!("[STORE] No session with id {}", id);
            return Ok(false);
        }
        self.write_history(&sessions)?;
        log::info!("[STORE] Deleted session {}", id);
        Ok(true)
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        match fs::remove_file(self.history_path()) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        log::info!("[STORE] Cleared session history");
        Ok(())
    }

    fn save_profile(&mut self, profile: &PlayerProfile) -> Result<(), StoreError> {
        self.write_json(&self.profile_path(), profile)
    }

    fn load_profile(&mut self) -> Result<Option<PlayerProfile>, StoreError> {
        let raw = match fs::read_to_string(self.profile_path()) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str(&raw) {
            Ok(profile) => Ok(Some(profile)),
            Err(e) => {
                log::warn!("[STORE] Ignoring corrupted profile: {}", e);
                Ok(None)
            }
        }
    }
}
