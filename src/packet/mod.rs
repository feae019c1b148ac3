pub mod builder;
pub(crate) mod checksum;
pub mod ethernet;
pub mod ipv4;
pub mod udp;

pub use builder::{serialize_frame, PacketError};
pub use ethernet::{EthernetHeader, MacAddr, ETHERTYPE_IPV4};
pub use ipv4::{Ipv4Header, DEFAULT_TTL, IP_PROTOCOL_UDP};
pub use udp::UdpHeader;
