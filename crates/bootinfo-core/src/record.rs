//! Classified bootinfo record produced by one decode step.

use crate::dictionary::TagSpace;
use crate::SemanticType;

/// One fully classified TLV unit.
///
/// The payload excludes the 4-byte unit header. Payloads larger than the
/// resolved type needs are kept as-is; renderers only look at the leading
/// bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Record {
    /// Raw tag value.
    pub tag: u16,
    /// Payload bytes.
    pub payload: Vec<u8>,
    /// Resolved payload type, [`SemanticType::Unknown`] when unresolved.
    pub semantic_type: SemanticType,
    /// Display name, possibly machine-prefixed or a hex fallback.
    pub name: String,
    /// Label from a lookup table, or the detected machine name.
    pub description: Option<&'static str>,
}

impl Record {
    /// Namespace of this record's tag.
    #[must_use]
    pub const fn tag_space(&self) -> TagSpace {
        TagSpace::of(self.tag)
    }

    /// Total on-disk size of the unit including its header.
    #[must_use]
    pub const fn raw_size(&self) -> usize {
        self.payload.len() + crate::decoder::HEADER_BYTES
    }

    /// Payload up to (not including) the first zero byte.
    #[must_use]
    pub fn payload_str_bytes(&self) -> &[u8] {
        let end = self
            .payload
            .iter()
            .position(|byte| *byte == 0)
            .unwrap_or(self.payload.len());
        &self.payload[..end]
    }
}
