//! In-place producer version rewrite with checksum recomputation

use crate::config::RewriteConfig;
use crate::core::header::{Header, RawHeaderBytes, HEADER_SIZE};
use crate::core::version::ProducerVersion;
use crate::error::{Error, Result};
use crate::integrity::checksum::compute_checksum;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

/// Stored and recomputed checksum of one model file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verification {
    pub stored: u32,
    pub computed: u32,
}

impl Verification {
    pub fn is_valid(&self) -> bool {
        self.stored == self.computed
    }
}

/// Reads, verifies and rewrites model file headers.
///
/// Each call opens its own handle and its own CRC accumulator, so one
/// rewriter can serve any number of files, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct IntegrityRewriter {
    config: RewriteConfig,
}

impl IntegrityRewriter {
    pub fn new(config: RewriteConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Decode the header of `path` without touching the file
    pub fn inspect<P: AsRef<Path>>(&self, path: P) -> Result<Header> {
        let path = path.as_ref();
        let mut file = File::open(path)?;
        let raw = read_header_span(&mut file, path)?;
        let header = Header::decode(&raw)?;

        tracing::debug!(
            path = %path.display(),
            version = %header.producer_version,
            crc32 = header.checksum,
            "header inspected"
        );
        Ok(header)
    }

    /// Recompute the checksum of `path` and compare it with the stored one
    pub fn verify<P: AsRef<Path>>(&self, path: P) -> Result<Verification> {
        let path = path.as_ref();
        let mut file = File::open(path)?;
        let raw = read_header_span(&mut file, path)?;
        let header = Header::decode(&raw)?;

        let computed = compute_checksum(&raw, &mut file, self.config.chunk_size)?;
        let verification = Verification {
            stored: header.checksum,
            computed,
        };

        tracing::debug!(
            path = %path.display(),
            stored = verification.stored,
            computed = verification.computed,
            valid = verification.is_valid(),
            "checksum verified"
        );
        Ok(verification)
    }

    /// Parse `version` and rewrite; the file is not opened when parsing fails
    pub fn rewrite_str<P: AsRef<Path>>(&self, path: P, version: &str) -> Result<Header> {
        let version = ProducerVersion::parse(version)?;
        self.rewrite(path, version)
    }

    /// Replace the producer version of `path` and store a matching checksum.
    ///
    /// Only the first [`HEADER_SIZE`] bytes are written. Returns the header
    /// now on disk.
    pub fn rewrite<P: AsRef<Path>>(&self, path: P, version: ProducerVersion) -> Result<Header> {
        let path = path.as_ref();
        let mut file = OpenOptions::new().read(true).write(true).open(path)?;

        let raw = read_header_span(&mut file, path)?;
        let mut header = Header::decode(&raw)?;
        let previous = header.producer_version;

        header.producer_version = version;
        let candidate = header.encode();

        file.seek(SeekFrom::Start(HEADER_SIZE as u64))?;
        header.checksum = compute_checksum(&candidate, &mut file, self.config.chunk_size)?;

        let finalized = header.encode();
        file.seek(SeekFrom::Start(0))?;
        file.write_all(&finalized)?;
        file.flush()?;
        file.sync_data()?;

        tracing::debug!(
            path = %path.display(),
            from = %previous,
            to = %version,
            crc32 = header.checksum,
            "producer version rewritten"
        );
        Ok(header)
    }
}

/// Read exactly [`HEADER_SIZE`] bytes from the start of `file`.
///
/// Short reads are retried; EOF before the span is full is `FileTooSmall`.
fn read_header_span(file: &mut File, path: &Path) -> Result<RawHeaderBytes> {
    let mut raw = [0u8; HEADER_SIZE];
    let mut filled = 0;

    while filled < HEADER_SIZE {
        match file.read(&mut raw[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }

    if filled < HEADER_SIZE {
        return Err(Error::FileTooSmall {
            path: path.to_path_buf(),
            actual: filled,
            required: HEADER_SIZE,
        });
    }
    Ok(raw)
}
