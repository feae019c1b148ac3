use serde::{Deserialize, Serialize};

/// Forwarding Action Rule identifier, unique within one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FARID(pub u32);

/// Tunnel Endpoint Identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TEID(pub u32);

/// PFCP Session Endpoint Identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SEID(pub u64);
