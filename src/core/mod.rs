pub mod header;
pub mod version;

pub use self::header::{Header, RawHeaderBytes, CHECKSUM_RANGE, HEADER_SIZE};
pub use self::version::ProducerVersion;
