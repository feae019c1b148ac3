//! Per-session FAR (Forwarding Action Rule) management and GTP-U end
//! marker generation for a 5G User Plane Function.
//!
//! When a FAR is rewritten because a UE's radio path moved, the peer on
//! the retiring tunnel gets an end marker so it can flush its reordering
//! buffers before traffic arrives on the new path. This crate owns the
//! FAR list inside one session and the construction of those end markers,
//! both as structured descriptors and as ready-to-send frames. PFCP
//! message handling, the session store, and packet transmission belong to
//! the callers.

pub mod config;
pub mod gtpu;
pub mod packet;
pub mod types;

pub use config::EndMarkerConfig;
pub use gtpu::end_marker::{append_end_marker, EndMarker, EndMarkerEncoder};
pub use types::{Far, Session, SessionError, FARID, SEID, TEID};
