use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tokio::runtime::Runtime;
use tokio::time::timeout;

use crate::profile::PlayerProfile;
use crate::session::{Session, SessionStore, StoreError};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Deserialize)]
struct CreatedDocument {
    id: String,
}

/// Session store backed by a JSON document service.
///
/// Layout:
/// - `GET/POST {base}/sessions`, `DELETE {base}/sessions` (clear all)
/// - `DELETE {base}/sessions/{remote_id}`
/// - `GET/PUT {base}/profile` (404 means no profile yet)
///
/// Listed documents carry their id as `remoteId` or `_id`. Ids handed back by
/// `POST` are also remembered, for stores that list documents as posted.
///
/// Requests run on a private tokio runtime so callers stay synchronous.
pub struct RemoteStore {
    base_url: String,
    client: reqwest::Client,
    runtime: Runtime,
    request_timeout: Duration,
    created_ids: HashMap<i64, String>,
}

impl RemoteStore {
    pub fn new(base_url: impl Into<String>) -> Result<Self, StoreError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        log::info!("[REMOTE] Using document store at {}", base_url);
        Ok(Self {
            base_url,
            client: reqwest::Client::new(),
            runtime,
            request_timeout: REQUEST_TIMEOUT,
            created_ids: HashMap::new(),
        })
    }

    #[cfg(test)]
    fn with_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Send a request with the standard timeout, mapping non-2xx replies to errors.
    fn send(&self, request: reqwest::RequestBuilder, url: &str) -> Result<reqwest::Response, StoreError> {
        self.runtime.block_on(async {
            match timeout(self.request_timeout, request.send()).await {
                Ok(Ok(response)) if response.status().is_success() => Ok(response),
                Ok(Ok(response)) => {
                    log::debug!("[REMOTE] {} returned status: {}", url, response.status());
                    Err(StoreError::Status {
                        status: response.status().as_u16(),
                        url: url.to_string(),
                    })
                }
                Ok(Err(e)) => {
                    log::debug!("[REMOTE] {} error: {}", url, e);
                    Err(StoreError::Http(e))
                }
                Err(_) => {
                    log::debug!("[REMOTE] {} timeout", url);
                    Err(StoreError::Timeout(url.to_string()))
                }
            }
        })
    }

    fn read_json<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
        url: &str,
    ) -> Result<T, StoreError> {
        let body = self
            .runtime
            .block_on(async { timeout(self.request_timeout, response.text()).await })
            .map_err(|_| {
                log::debug!("[REMOTE] {} timeout reading body", url);
                StoreError::Timeout(url.to_string())
            })??;
        Ok(serde_json::from_str(&body)?)
    }
}

impl SessionStore for RemoteStore {
    fn load_sessions(&mut self) -> Result<Vec<Session>, StoreError> {
        let url = self.url("sessions");
        let response = self.send(self.client.get(&url), &url)?;
        let mut sessions: Vec<Session> = self.read_json(response, &url)?;
        for session in sessions.iter_mut().filter(|s| s.remote_id.is_none()) {
            session.remote_id = self.created_ids.get(&session.id).cloned();
        }
        sessions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        log::debug!("[REMOTE] Loaded {} session(s)", sessions.len());
        Ok(sessions)
    }

    fn save_session(&mut self, session: &Session) -> Result<(), StoreError> {
        let url = self.url("sessions");
        let response = self.send(self.client.post(&url).json(session), &url)?;
        match self.read_json::<CreatedDocument>(response, &url) {
            Ok(created) => {
                log::info!("[REMOTE] Saved session {} as {}", session.id, created.id);
                self.created_ids.insert(session.id, created.id);
            }
            Err(e) => log::debug!("[REMOTE] Saved session {} (no document id: {})", session.id, e),
        }
        Ok(())
    }

    fn delete_session(&mut self, id: i64) -> Result<bool, StoreError> {
        let sessions = self.load_sessions()?;
        let Some(remote_id) = sessions
            .into_iter()
            .find(|s| s.id == id)
            .and_then(|s| s.remote_id)
        else {
            log::debug!("[REMOTE] No stored document for session {}", id);
            return Ok(false);
        };

        let url = self.url(&format!("sessions/{}", remote_id));
        self.send(self.client.delete(&url), &url)?;
        self.created_ids.remove(&id);
        log::info!("[REMOTE] Deleted session {}", id);
        Ok(true)
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        let url = self.url("sessions");
        self.send(self.client.delete(&url), &url)?;
        self.created_ids.clear();
        log::info!("[REMOTE] Cleared session history");
        Ok(())
    }

    fn save_profile(&mut self, profile: &PlayerProfile) -> Result<(), StoreError> {
        let url = self.url("profile");
        self.send(self.client.put(&url).json(profile), &url)?;
        Ok(())
    }

    fn load_profile(&mut self) -> Result<Option<PlayerProfile>, StoreError> {
        let url = self.url("profile");
        match self.send(self.client.get(&url), &url) {
            Ok(response) => Ok(Some(self.read_json(response, &url)?)),
            Err(StoreError::Status { status: 404, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
