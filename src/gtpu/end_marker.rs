use crate::config::EndMarkerConfig;
use crate::gtpu::header::GtpuHeader;
use crate::gtpu::types::MessageType;
use crate::packet::builder::{serialize_frame, PacketError};
use crate::packet::ethernet::{EthernetHeader, ETHERTYPE_IPV4};
use crate::packet::ipv4::Ipv4Header;
use crate::packet::udp::UdpHeader;
use crate::types::far::Far;
use crate::types::identifiers::TEID;
use bytes::{Bytes, BytesMut};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// Descriptor of a retiring tunnel, handed to a datapath that builds and
/// sends the end marker itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndMarker {
    pub teid: TEID,
    pub peer_ip: Ipv4Addr,
    pub peer_port: u16,
}

/// Appends a descriptor for `far`'s tunnel to `end_markers`. The FAR
/// passed here is the one being retired, so its fields name the old
/// path's endpoint.
pub fn append_end_marker(far: &Far, end_markers: &mut Vec<EndMarker>) {
    end_markers.push(EndMarker {
        teid: far.tunnel_teid,
        peer_ip: far.tunnel_ip4_dst,
        peer_port: far.tunnel_port,
    });
}

/// Builds ready-to-send end marker frames for datapaths that inject raw
/// bytes.
#[derive(Debug, Clone, Default)]
pub struct EndMarkerEncoder {
    config: EndMarkerConfig,
}

impl EndMarkerEncoder {
    pub fn new(config: EndMarkerConfig) -> Self {
        Self { config }
    }

    /// Serializes the full Ethernet/IPv4/UDP/GTP-U end marker frame for
    /// the tunnel `far` describes.
    pub fn build_packet(&self, far: &Far) -> Result<Bytes, PacketError> {
        let mut header = GtpuHeader::new(MessageType::EndMarker, far.tunnel_teid.0);
        header.protocol_type = far.tunnel_type != 0;

        let mut payload = BytesMut::with_capacity(header.header_len());
        header.encode(&mut payload);

        let ethernet = EthernetHeader {
            dst: self.config.dst_mac,
            src: self.config.src_mac,
            ethertype: ETHERTYPE_IPV4,
        };
        let ip = Ipv4Header::udp(far.tunnel_ip4_src, far.tunnel_ip4_dst);
        let udp = UdpHeader {
            src_port: self.config.gtpu_port,
            dst_port: self.config.gtpu_port,
        };

        serialize_frame(&ethernet, &ip, &udp, &payload)
    }

    /// Appends the serialized frame for `far`'s tunnel to `packets`. A
    /// frame that fails to serialize is logged and skipped; a partial
    /// packet is never appended.
    pub fn append_packet(&self, far: &Far, packets: &mut Vec<Bytes>) {
        info!("adding end marker for FAR {}", far.id.0);

        match self.build_packet(far) {
            Ok(frame) => packets.push(frame),
            Err(e) => warn!("end marker frame for FAR {} dropped: {}", far.id.0, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gtpu::types::GTPU_PORT;
    use crate::packet::checksum;
    use crate::types::identifiers::FARID;

    fn far() -> Far {
        Far {
            id: FARID(7),
            tunnel_teid: TEID(0x12345678),
            tunnel_ip4_src: Ipv4Addr::new(10, 0, 0, 1),
            tunnel_ip4_dst: Ipv4Addr::new(10, 0, 0, 2),
            tunnel_port: GTPU_PORT,
            tunnel_type: 1,
            send_end_marker: true,
        }
    }

    #[test]
    fn test_append_end_marker_describes_retiring_tunnel() {
        let mut markers = Vec::new();
        append_end_marker(&far(), &mut markers);
        append_end_marker(&far(), &mut markers);

        assert_eq!(markers.len(), 2);
        assert_eq!(
            markers[0],
            EndMarker {
                teid: TEID(0x12345678),
                peer_ip: Ipv4Addr::new(10, 0, 0, 2),
                peer_port: GTPU_PORT,
            }
        );
    }

    #[test]
    fn test_build_packet_well_formed() {
        let encoder = EndMarkerEncoder::default();
        let frame = encoder.build_packet(&far()).unwrap();

        assert_eq!(frame.len(), 50);

        // Ethernet
        assert_eq!(&frame[0..6], &[0xbd; 6]);
        assert_eq!(&frame[6..12], &[0xff, 0xaa, 0xfa, 0xaa, 0xff, 0xaa]);
        assert_eq!(&frame[12..14], &[0x08, 0x00]);

        // IPv4
        assert_eq!(frame[14], 0x45);
        assert_eq!(&frame[16..18], &36_u16.to_be_bytes());
        assert_eq!(frame[22], 64); // TTL
        assert_eq!(frame[23], 17); // UDP
        assert_eq!(&frame[26..30], &[10, 0, 0, 1]);
        assert_eq!(&frame[30..34], &[10, 0, 0, 2]);
        assert_eq!(checksum::finish(checksum::sum_words(0, &frame[14..34])), 0);

        // UDP
        assert_eq!(&frame[34..36], &GTPU_PORT.to_be_bytes());
        assert_eq!(&frame[36..38], &GTPU_PORT.to_be_bytes());
        assert_eq!(&frame[38..40], &16_u16.to_be_bytes());
        let ip = Ipv4Header::udp(Ipv4Addr::new(10, 0, 0, 1), Ipv4Addr::new(10, 0, 0, 2));
        let sum = checksum::sum_words(ip.pseudo_header_sum(16), &frame[34..]);
        assert_eq!(checksum::finish(sum), 0);

        // GTP-U end marker
        assert_eq!(frame[42], 0x30); // version 1, PT 1
        assert_eq!(frame[43], 254);
        assert_eq!(&frame[44..46], &[0, 0]);
        assert_eq!(&frame[46..50], &0x12345678_u32.to_be_bytes());
    }

    #[test]
    fn test_build_packet_parses_back_as_end_marker() {
        let encoder = EndMarkerEncoder::default();
        let frame = encoder.build_packet(&far()).unwrap();

        let mut gtp = frame.slice(42..);
        let header = GtpuHeader::parse(&mut gtp).unwrap();

        assert_eq!(header.message_type, MessageType::EndMarker);
        assert_eq!(header.teid, 0x12345678);
        assert_eq!(header.length, 0);
        assert_eq!(header.sequence_number, None);
    }

    #[test]
    fn test_build_packet_copies_protocol_type_bit() {
        let encoder = EndMarkerEncoder::default();
        let mut gtp_prime = far();
        gtp_prime.tunnel_type = 0;

        let frame = encoder.build_packet(&gtp_prime).unwrap();
        assert_eq!(frame[42], 0x20); // version 1, PT 0
    }

    #[test]
    fn test_build_packet_uses_configured_frame_parameters() {
        let config = EndMarkerConfig {
            src_mac: "02:00:00:00:00:01".parse().unwrap(),
            dst_mac: "02:00:00:00:00:02".parse().unwrap(),
            gtpu_port: 9875,
        };
        let encoder = EndMarkerEncoder::new(config);

        let frame = encoder.build_packet(&far()).unwrap();

        assert_eq!(&frame[0..6], &[0x02, 0, 0, 0, 0, 0x02]);
        assert_eq!(&frame[6..12], &[0x02, 0, 0, 0, 0, 0x01]);
        assert_eq!(&frame[34..36], &9875_u16.to_be_bytes());
        assert_eq!(&frame[36..38], &9875_u16.to_be_bytes());
    }

    #[test]
    fn test_append_packet_appends_one_frame() {
        let encoder = EndMarkerEncoder::default();
        let mut packets = Vec::new();

        encoder.append_packet(&far(), &mut packets);

        assert_eq!(packets.len(), 1);
        assert_eq!(packets[0].len(), 50);
    }
}
