use crate::types::identifiers::{FARID, TEID};
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// Forwarding Action Rule: where a flow's packets go, and whether the
/// previous tunnel must be closed out with an end marker when this rule
/// replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Far {
    pub id: FARID,
    pub tunnel_teid: TEID,
    pub tunnel_ip4_src: Ipv4Addr,
    pub tunnel_ip4_dst: Ipv4Addr,
    pub tunnel_port: u16,
    /// GTP protocol-type bit carried into the outer GTP-U header
    /// (1 for GTP-U, 0 for GTP').
    pub tunnel_type: u8,
    pub send_end_marker: bool,
}
