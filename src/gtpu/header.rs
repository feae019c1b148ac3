use super::types::{MessageType, GTPU_VERSION};
use bytes::{Buf, BufMut, Bytes, BytesMut};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GtpuError {
    #[error("Invalid GTP-U version: {0}")]
    InvalidVersion(u8),

    #[error("Invalid protocol type flag")]
    InvalidProtocolType,

    #[error("Buffer too short: need {need}, have {have}")]
    BufferTooShort { need: usize, have: usize },
}

pub type Result<T> = std::result::Result<T, GtpuError>;

/// Mandatory GTP-U header plus the optional sequence number. The length
/// field counts everything after the first 8 bytes, so a header-only
/// message carries 0 (or 4 when the optional fields are present).
#[derive(Debug, Clone)]
pub struct GtpuHeader {
    pub version: u8,
    pub protocol_type: bool,
    pub message_type: MessageType,
    pub length: u16,
    pub teid: u32,
    pub sequence_number: Option<u16>,
}

impl GtpuHeader {
    pub fn new(message_type: MessageType, teid: u32) -> Self {
        Self {
            version: GTPU_VERSION,
            protocol_type: true,
            message_type,
            length: 0,
            teid,
            sequence_number: None,
        }
    }

    pub fn with_sequence_number(mut self, seq: u16) -> Self {
        self.sequence_number = Some(seq);
        self
    }

    pub fn has_optional_fields(&self) -> bool {
        self.sequence_number.is_some()
    }

    pub fn header_len(&self) -> usize {
        if self.has_optional_fields() {
            12
        } else {
            8
        }
    }

    pub fn parse(buf: &mut Bytes) -> Result<Self> {
        if buf.len() < 8 {
            return Err(GtpuError::BufferTooShort {
                need: 8,
                have: buf.len(),
            });
        }

        let flags = buf.get_u8();
        let version = (flags >> 5) & 0x07;
        let protocol_type = (flags & 0x10) != 0;
        let sequence_number_flag = (flags & 0x02) != 0;
        let has_optional = (flags & 0x07) != 0;

        if version != GTPU_VERSION {
            return Err(GtpuError::InvalidVersion(version));
        }

        if !protocol_type {
            return Err(GtpuError::InvalidProtocolType);
        }

        let message_type = MessageType::from(buf.get_u8());
        let length = buf.get_u16();
        let teid = buf.get_u32();

        let sequence_number = if has_optional {
            if buf.len() < 4 {
                return Err(GtpuError::BufferTooShort {
                    need: 4,
                    have: buf.len(),
                });
            }

            let seq = buf.get_u16();
            buf.advance(2); // N-PDU number and next extension type

            sequence_number_flag.then_some(seq)
        } else {
            None
        };

        Ok(Self {
            version,
            protocol_type,
            message_type,
            length,
            teid,
            sequence_number,
        })
    }

    pub fn encode(&self, buf: &mut BytesMut) {
        let flags = (self.version << 5)
            | (if self.protocol_type { 0x10 } else { 0x00 })
            | (if self.sequence_number.is_some() { 0x02 } else { 0x00 });

        buf.put_u8(flags);
        buf.put_u8(self.message_type.into());
        buf.put_u16(self.length);
        buf.put_u32(self.teid);

        if let Some(seq) = self.sequence_number {
            buf.put_u16(seq);
            buf.put_u8(0); // N-PDU number, unused
            buf.put_u8(0); // no next extension header
        }
    }
}
