use crate::gtpu::end_marker::{append_end_marker, EndMarker};
use crate::types::far::Far;
use crate::types::identifiers::{FARID, SEID};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("duplicate {0}")]
    DuplicateRule(&'static str),
}

/// One PFCP session's forwarding state. The session exclusively owns its
/// FAR list; callers must serialize concurrent access per session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub seid: SEID,
    pub fars: Vec<Far>,
}

impl Session {
    pub fn new(seid: SEID) -> Self {
        Self {
            seid,
            fars: Vec::new(),
        }
    }

    /// Appends a new FAR to the session. A FAR with the same id must not
    /// already exist; the FAR lookup invariant is one matching rule.
    pub fn create_far(&mut self, far: Far) -> Result<(), SessionError> {
        if self.fars.iter().any(|v| v.id == far.id) {
            return Err(SessionError::DuplicateRule("FAR"));
        }

        self.fars.push(far);
        Ok(())
    }

    /// Replaces the FAR with `far.id` in place. If the rule being
    /// replaced has `send_end_marker` set, a marker describing the
    /// retiring tunnel is appended to `end_markers` before the overwrite
    /// takes effect.
    pub fn update_far(
        &mut self,
        far: Far,
        end_markers: &mut Vec<EndMarker>,
    ) -> Result<(), SessionError> {
        for v in self.fars.iter_mut() {
            if v.id == far.id {
                if v.send_end_marker {
                    append_end_marker(v, end_markers);
                }

                *v = far;

                return Ok(());
            }
        }

        Err(SessionError::NotFound("FAR"))
    }

    /// Removes the FAR with the given id, preserving the order of the
    /// remaining rules, and returns the removed value.
    pub fn remove_far(&mut self, id: FARID) -> Result<Far, SessionError> {
        for (idx, v) in self.fars.iter().enumerate() {
            if v.id == id {
                return Ok(self.fars.remove(idx));
            }
        }

        Err(SessionError::NotFound("FAR"))
    }

    pub fn far_count(&self) -> usize {
        self.fars.len()
    }
}
