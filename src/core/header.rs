//! Model file header codec
//!
//! Every Jubatus model file starts with a fixed 48-byte big-endian header:
//!
//! | Offset | Size | Field                |
//! |--------|------|----------------------|
//! | 0      | 8    | magic                |
//! | 8      | 8    | format_version       |
//! | 16     | 4    | producer major       |
//! | 20     | 4    | producer minor       |
//! | 24     | 4    | producer maintenance |
//! | 28     | 4    | checksum (CRC32)     |
//! | 32     | 8    | system_section_size  |
//! | 40     | 8    | user_section_size    |
//!
//! The checksum covers `[0, 28)`, `[32, 48)` and every byte after the header.

use crate::core::version::ProducerVersion;
use crate::error::{Error, Result};
use std::ops::Range;

/// Size of the encoded header in bytes
pub const HEADER_SIZE: usize = 48;

/// On-disk form of a [`Header`]
pub type RawHeaderBytes = [u8; HEADER_SIZE];

pub const MAGIC_RANGE: Range<usize> = 0..8;
pub const FORMAT_VERSION_RANGE: Range<usize> = 8..16;
pub const MAJOR_RANGE: Range<usize> = 16..20;
pub const MINOR_RANGE: Range<usize> = 20..24;
pub const MAINTENANCE_RANGE: Range<usize> = 24..28;
pub const CHECKSUM_RANGE: Range<usize> = 28..32;
pub const SYSTEM_SECTION_SIZE_RANGE: Range<usize> = 32..40;
pub const USER_SECTION_SIZE_RANGE: Range<usize> = 40..48;

/// Decoded model header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub magic: [u8; 8],
    pub format_version: u64,
    pub producer_version: ProducerVersion,
    pub checksum: u32,
    pub system_section_size: u64,
    pub user_section_size: u64,
}

impl Header {
    /// Magic written by the Jubatus server
    pub const MAGIC: [u8; 8] = *b"jubatus\0";

    /// Decode the first [`HEADER_SIZE`] bytes of `data`.
    ///
    /// The magic is taken verbatim; use [`Header::has_known_magic`] to check it.
    pub fn decode(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_SIZE {
            return Err(Error::TooShort {
                len: data.len(),
                required: HEADER_SIZE,
            });
        }

        let mut magic = [0u8; 8];
        magic.copy_from_slice(&data[MAGIC_RANGE]);

        Ok(Self {
            magic,
            format_version: read_u64(data, FORMAT_VERSION_RANGE),
            producer_version: ProducerVersion {
                major: read_u32(data, MAJOR_RANGE),
                minor: read_u32(data, MINOR_RANGE),
                maintenance: read_u32(data, MAINTENANCE_RANGE),
            },
            checksum: read_u32(data, CHECKSUM_RANGE),
            system_section_size: read_u64(data, SYSTEM_SECTION_SIZE_RANGE),
            user_section_size: read_u64(data, USER_SECTION_SIZE_RANGE),
        })
    }

    pub fn encode(&self) -> RawHeaderBytes {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[MAGIC_RANGE].copy_from_slice(&self.magic);
        bytes[FORMAT_VERSION_RANGE].copy_from_slice(&self.format_version.to_be_bytes());
        bytes[MAJOR_RANGE].copy_from_slice(&self.producer_version.major.to_be_bytes());
        bytes[MINOR_RANGE].copy_from_slice(&self.producer_version.minor.to_be_bytes());
        bytes[MAINTENANCE_RANGE].copy_from_slice(&self.producer_version.maintenance.to_be_bytes());
        bytes[CHECKSUM_RANGE].copy_from_slice(&self.checksum.to_be_bytes());
        bytes[SYSTEM_SECTION_SIZE_RANGE].copy_from_slice(&self.system_section_size.to_be_bytes());
        bytes[USER_SECTION_SIZE_RANGE].copy_from_slice(&self.user_section_size.to_be_bytes());
        bytes
    }

    pub fn has_known_magic(&self) -> bool {
        self.magic == Self::MAGIC
    }

    /// Magic as text, NUL bytes included
    pub fn magic_text(&self) -> String {
        String::from_utf8_lossy(&self.magic).into_owned()
    }

    /// Header bytes covered by the checksum, in order.
    ///
    /// The checksum field itself is never covered.
    pub fn checksum_coverage(raw: &RawHeaderBytes) -> (&[u8], &[u8]) {
        (&raw[..CHECKSUM_RANGE.start], &raw[CHECKSUM_RANGE.end..])
    }
}

fn read_u32(data: &[u8], range: Range<usize>) -> u32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(&data[range]);
    u32::from_be_bytes(buf)
}

fn read_u64(data: &[u8], range: Range<usize>) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&data[range]);
    u64::from_be_bytes(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Header {
        Header {
            magic: Header::MAGIC,
            format_version: 1,
            producer_version: ProducerVersion::new(0, 5, 7),
            checksum: 0xDEAD_BEEF,
            system_section_size: 0x0102_0304_0506_0708,
            user_section_size: 42,
        }
    }

    #[test]
    fn test_encode_layout_is_big_endian() {
        let raw = sample().encode();

        assert_eq!(&raw[0..8], b"jubatus\0");
        assert_eq!(&raw[8..16], &[0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(&raw[16..20], &[0, 0, 0, 0]);
        assert_eq!(&raw[20..24], &[0, 0, 0, 5]);
        assert_eq!(&raw[24..28], &[0, 0, 0, 7]);
        assert_eq!(&raw[28..32], &[0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(&raw[32..40], &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(&raw[40..48], &[0, 0, 0, 0, 0, 0, 0, 42]);
    }

    #[test]
    fn test_decode_inverts_encode() {
        let header = sample();
        assert_eq!(Header::decode(&header.encode()).unwrap(), header);
    }

    #[test]
    fn test_decode_rejects_short_input() {
        let raw = sample().encode();
        match Header::decode(&raw[..47]) {
            Err(Error::TooShort { len, required }) => {
                assert_eq!(len, 47);
                assert_eq!(required, HEADER_SIZE);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_decode_ignores_bytes_past_header() {
        let mut data = sample().encode().to_vec();
        data.extend_from_slice(&[0xFF; 16]);
        assert_eq!(Header::decode(&data).unwrap(), sample());
    }

    #[test]
    fn test_unknown_magic_still_decodes() {
        let mut header = sample();
        header.magic = *b"JUBA2.0\0";
        let decoded = Header::decode(&header.encode()).unwrap();

        assert!(!decoded.has_known_magic());
        assert_eq!(decoded.magic_text(), "JUBA2.0\0");
    }

    #[test]
    fn test_checksum_coverage_skips_checksum_field() {
        let raw = sample().encode();
        let (head, tail) = Header::checksum_coverage(&raw);

        assert_eq!(head.len(), 28);
        assert_eq!(tail.len(), 16);
        assert_eq!(head, &raw[..28]);
        assert_eq!(tail, &raw[32..]);
    }
}
