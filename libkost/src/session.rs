//! Durable session storage
//!
//! The only state that survives a restart is the current user, stored as a
//! single serialized record. `SessionStore` keeps that contract behind a
//! save/load/clear seam so the backend is substitutable; the file backend is
//! the production one, the memory backend serves tests and ephemeral runs.

use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::{Result, SessionError};
use crate::types::User;

pub trait SessionStore: Send + Sync {
    /// Persist the current user, replacing any previous session
    fn save(&self, user: &User) -> Result<()>;

    /// Read the saved session; `None` means logged out
    fn load(&self) -> Result<Option<User>>;

    /// Remove the saved session; clearing an absent session is not an error
    fn clear(&self) -> Result<()>;
}

/// File-backed session store: one JSON file holding one User record
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, user: &User) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(SessionError::Io)?;
        }
        let json = serde_json::to_string_pretty(user).map_err(SessionError::Corrupt)?;
        std::fs::write(&self.path, json).map_err(SessionError::Io)?;
        tracing::debug!(path = %self.path.display(), "session saved");
        Ok(())
    }

    fn load(&self) -> Result<Option<User>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SessionError::Io(e).into()),
        };
        let user: User = serde_json::from_str(&content).map_err(SessionError::Corrupt)?;
        Ok(Some(user))
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::Io(e).into()),
        }
    }
}

/// In-process session store for tests and ephemeral runs
#[derive(Default)]
pub struct MemorySessionStore {
    user: Mutex<Option<User>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, user: &User) -> Result<()> {
        *self.user.lock().unwrap() = Some(user.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<User>> {
        Ok(self.user.lock().unwrap().clone())
    }

    fn clear(&self) -> Result<()> {
        *self.user.lock().unwrap() = None;
        Ok(())
    }
}
