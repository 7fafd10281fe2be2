//! Inspection records for model files
//!
//! JSON key names match what the Jubatus `jubamodel` tool has always
//! printed, including the capitalised `Magic`.

use crate::core::Header;
use crate::error::Result;
use crate::integrity::IntegrityRewriter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderInfo {
    #[serde(rename = "Magic")]
    pub magic: String,
    pub format_version: u64,
    pub jubatus_version: String,
    pub crc32: u32,
    pub system_data_size: u64,
    pub user_data_size: u64,
}

impl From<&Header> for HeaderInfo {
    fn from(header: &Header) -> Self {
        Self {
            magic: header.magic_text(),
            format_version: header.format_version,
            jubatus_version: header.producer_version.to_string(),
            crc32: header.checksum,
            system_data_size: header.system_section_size,
            user_data_size: header.user_section_size,
        }
    }
}

impl HeaderInfo {
    pub fn has_known_magic(&self) -> bool {
        self.magic.as_bytes() == Header::MAGIC
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub path: PathBuf,
    pub header: HeaderInfo,
}

impl ModelInfo {
    pub fn new(path: PathBuf, header: &Header) -> Self {
        Self {
            path,
            header: HeaderInfo::from(header),
        }
    }

    /// Inspect `path` and record it under its absolute path
    pub fn load<P: AsRef<Path>>(rewriter: &IntegrityRewriter, path: P) -> Result<Self> {
        let path = path.as_ref();
        let header = rewriter.inspect(path)?;
        let absolute = std::path::absolute(path)?;
        Ok(Self::new(absolute, &header))
    }
}

/// One object for a single record, an array otherwise (including none)
pub fn render_json<T: Serialize>(records: &[T], pretty: bool) -> Result<String> {
    let json = match (records, pretty) {
        ([single], false) => serde_json::to_string(single)?,
        ([single], true) => serde_json::to_string_pretty(single)?,
        (all, false) => serde_json::to_string(all)?,
        (all, true) => serde_json::to_string_pretty(all)?,
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ProducerVersion;

    fn info(path: &str) -> ModelInfo {
        let header = Header {
            magic: Header::MAGIC,
            format_version: 1,
            producer_version: ProducerVersion::new(0, 5, 7),
            checksum: 1234,
            system_section_size: 10,
            user_section_size: 20,
        };
        ModelInfo::new(PathBuf::from(path), &header)
    }

    #[test]
    fn test_single_record_is_object() {
        let json = render_json(&[info("/m/a.model")], false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["path"], "/m/a.model");
        assert_eq!(value["header"]["Magic"], "jubatus\u{0}");
        assert_eq!(value["header"]["format_version"], 1);
        assert_eq!(value["header"]["jubatus_version"], "0.5.7");
        assert_eq!(value["header"]["crc32"], 1234);
        assert_eq!(value["header"]["system_data_size"], 10);
        assert_eq!(value["header"]["user_data_size"], 20);
    }

    #[test]
    fn test_known_magic_survives_text_form() {
        let mut model = info("/m/a.model");
        assert!(model.header.has_known_magic());

        model.header.magic = "JUBA2.0\u{0}".to_string();
        assert!(!model.header.has_known_magic());
    }

    #[test]
    fn test_many_records_are_array_in_order() {
        let json = render_json(&[info("/m/a.model"), info("/m/b.model")], false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["path"], "/m/a.model");
        assert_eq!(items[1]["path"], "/m/b.model");
    }

    #[test]
    fn test_no_records_is_empty_array() {
        assert_eq!(render_json::<ModelInfo>(&[], false).unwrap(), "[]");
    }
}
