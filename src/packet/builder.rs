use crate::packet::checksum;
use crate::packet::ethernet::EthernetHeader;
use crate::packet::ipv4::Ipv4Header;
use crate::packet::udp::UdpHeader;
use bytes::{Bytes, BytesMut};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PacketError {
    #[error("Payload of {len} bytes overflows the IPv4/UDP length fields")]
    PayloadTooLarge { len: usize },
}

/// Composes Ethernet, IPv4, UDP and the payload outer-to-inner into one
/// contiguous frame, fixing the length fields and computing both
/// checksums.
pub fn serialize_frame(
    ethernet: &EthernetHeader,
    ip: &Ipv4Header,
    udp: &UdpHeader,
    payload: &[u8],
) -> Result<Bytes, PacketError> {
    let udp_length = UdpHeader::LEN + payload.len();
    let ip_total_length = Ipv4Header::LEN + udp_length;

    if ip_total_length > usize::from(u16::MAX) {
        return Err(PacketError::PayloadTooLarge { len: payload.len() });
    }

    let mut buf = BytesMut::with_capacity(EthernetHeader::LEN + ip_total_length);

    ethernet.encode(&mut buf);

    let ip_start = buf.len();
    ip.encode(ip_total_length as u16, &mut buf);
    let ip_csum = checksum::finish(checksum::sum_words(
        0,
        &buf[ip_start..ip_start + Ipv4Header::LEN],
    ));
    buf[ip_start + 10..ip_start + 12].copy_from_slice(&ip_csum.to_be_bytes());

    let udp_start = buf.len();
    udp.encode(udp_length as u16, &mut buf);
    buf.extend_from_slice(payload);

    let mut sum = ip.pseudo_header_sum(udp_length as u16);
    sum = checksum::sum_words(sum, &buf[udp_start..]);
    let mut udp_csum = checksum::finish(sum);
    if udp_csum == 0 {
        udp_csum = 0xFFFF; // RFC 768: a transmitted zero means "no checksum"
    }
    buf[udp_start + 6..udp_start + 8].copy_from_slice(&udp_csum.to_be_bytes());

    Ok(buf.freeze())
}
