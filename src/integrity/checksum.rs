//! CRC32 over a model file, excluding the stored checksum field

use crate::core::header::{Header, RawHeaderBytes};
use crc32fast::Hasher;
use std::io::{self, Read};

/// Checksum of `raw` followed by everything `trailing` yields.
///
/// `trailing` is consumed in `chunk_size` reads, so memory use does not
/// depend on the file size. Covers `raw[0..28]`, `raw[32..48]` and then the
/// trailing bytes, all through one accumulator.
pub fn compute_checksum<R: Read>(
    raw: &RawHeaderBytes,
    mut trailing: R,
    chunk_size: usize,
) -> io::Result<u32> {
    let (head, tail) = Header::checksum_coverage(raw);
    let mut hasher = Hasher::new();
    hasher.update(head);
    hasher.update(tail);

    let streamed = stream_into(&mut hasher, &mut trailing, chunk_size)?;
    let crc = hasher.finalize();

    tracing::trace!(streamed_bytes = streamed, crc32 = crc, "checksum computed");
    Ok(crc)
}

fn stream_into<R: Read>(hasher: &mut Hasher, reader: &mut R, chunk_size: usize) -> io::Result<u64> {
    let mut buffer = vec![0u8; chunk_size.max(1)];
    let mut total = 0u64;

    loop {
        let bytes_read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buffer[..bytes_read]);
        total += bytes_read as u64;
    }

    Ok(total)
}
