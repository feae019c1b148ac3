use bytes::{BufMut, BytesMut};

#[derive(Debug, Clone)]
pub struct UdpHeader {
    pub src_port: u16,
    pub dst_port: u16,
}

impl UdpHeader {
    pub const LEN: usize = 8;

    /// Writes the 8-byte header with the checksum field zeroed; the
    /// serializer patches it after the payload is in place.
    pub fn encode(&self, length: u16, buf: &mut BytesMut) {
        buf.put_u16(self.src_port);
        buf.put_u16(self.dst_port);
        buf.put_u16(length);
        buf.put_u16(0); // checksum
    }
}
