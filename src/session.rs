use std::io::Result;

use async_std::sync::RwLock;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::constants::SESSION_STORAGE_KEY;
use crate::errors;
use crate::storage::Storage;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
  pub email: String,
  pub token: String,
  pub is_admin: bool,
}

impl Session {
  pub fn bearer(&self) -> String {
    format!("Bearer {}", self.token)
  }
}

pub fn is_admin(session: Option<&Session>) -> bool {
  session.map(|s| s.is_admin).unwrap_or(false)
}

// Holds the page-lifetime session record. The persisted copy is always written before the
// in-memory copy so the two never disagree after a failed write.
pub struct SessionStore<S> {
  _storage: S,
  _current: RwLock<Option<Session>>,
}

impl<S> std::fmt::Debug for SessionStore<S> {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(formatter, "SessionStore")
  }
}

fn restore<S: Storage>(storage: &S) -> Option<Session> {
  let stored = match storage.get(SESSION_STORAGE_KEY) {
    Ok(Some(value)) => value,
    Ok(None) => return None,
    Err(e) => {
      warn!("unable to read persisted session - {}", e);
      return None;
    }
  };

  match serde_json::from_str::<Option<Session>>(&stored) {
    Ok(session) => session,
    Err(e) => {
      warn!("ignoring unparseable persisted session - {}", e);
      None
    }
  }
}

impl<S> SessionStore<S>
where
  S: Storage,
{
  pub fn open(storage: S) -> Self {
    let current = restore(&storage);

    if let Some(session) = &current {
      info!("restored session for '{}'", session.email);
    }

    SessionStore {
      _storage: storage,
      _current: RwLock::new(current),
    }
  }

  pub fn storage(&self) -> &S {
    &self._storage
  }

  pub async fn current(&self) -> Option<Session> {
    self._current.read().await.clone()
  }

  pub async fn set(&self, session: Session) -> Result<()> {
    let serialized = serde_json::to_string(&session).map_err(errors::humanize_error)?;
    self._storage.set(SESSION_STORAGE_KEY, &serialized)?;
    let mut current = self._current.write().await;
    info!("session stored for '{}'", session.email);
    *current = Some(session);
    Ok(())
  }

  // The in-memory session is dropped even when the storage removal fails.
  pub async fn clear(&self) -> Result<()> {
    let mut current = self._current.write().await;
    *current = None;
    self._storage.remove(SESSION_STORAGE_KEY)
  }
}
