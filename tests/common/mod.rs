#![allow(dead_code)]

use jubamodel::{Header, ProducerVersion, HEADER_SIZE};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// CRC32 over `[0,28) ++ [32,48) ++ file[48..]`, computed in one shot
pub fn reference_checksum(file_bytes: &[u8]) -> u32 {
    let mut covered = Vec::with_capacity(file_bytes.len());
    covered.extend_from_slice(&file_bytes[..28]);
    covered.extend_from_slice(&file_bytes[32..HEADER_SIZE]);
    covered.extend_from_slice(&file_bytes[HEADER_SIZE..]);
    crc32fast::hash(&covered)
}

pub struct ModelFixture {
    pub magic: [u8; 8],
    pub format_version: u64,
    pub version: ProducerVersion,
    pub system_section: Vec<u8>,
    pub user_section: Vec<u8>,
}

impl Default for ModelFixture {
    fn default() -> Self {
        Self {
            magic: Header::MAGIC,
            format_version: 1,
            version: ProducerVersion::new(0, 5, 7),
            system_section: b"system-section".to_vec(),
            user_section: b"user-section".to_vec(),
        }
    }
}

impl ModelFixture {
    pub fn header(&self) -> Header {
        Header {
            magic: self.magic,
            format_version: self.format_version,
            producer_version: self.version,
            checksum: 0,
            system_section_size: self.system_section.len() as u64,
            user_section_size: self.user_section.len() as u64,
        }
    }

    /// Full file contents with a valid checksum
    pub fn bytes(&self) -> Vec<u8> {
        let mut bytes = self.header().encode().to_vec();
        bytes.extend_from_slice(&self.system_section);
        bytes.extend_from_slice(&self.user_section);

        let crc = reference_checksum(&bytes);
        bytes[28..32].copy_from_slice(&crc.to_be_bytes());
        bytes
    }

    pub fn write_to(&self, path: &Path) -> Vec<u8> {
        let bytes = self.bytes();
        fs::write(path, &bytes).expect("write fixture");
        bytes
    }
}

pub struct TestModel {
    pub path: PathBuf,
    pub original: Vec<u8>,
    _dir: TempDir,
}

impl TestModel {
    pub fn create(fixture: &ModelFixture) -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("test.model");
        let original = fixture.write_to(&path);
        Self {
            path,
            original,
            _dir: dir,
        }
    }

    pub fn current(&self) -> Vec<u8> {
        fs::read(&self.path).expect("read model")
    }
}
