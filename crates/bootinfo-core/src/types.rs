//! Semantic payload types and their fixed on-disk widths.

/// Semantic interpretation of a record payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SemanticType {
    /// Unresolved or payload-less record; rendered by name only.
    #[default]
    Unknown,
    /// Single unsigned byte.
    U8,
    /// 16-bit big-endian unsigned integer.
    Be16,
    /// 32-bit big-endian unsigned integer, optionally labelled.
    Be32,
    /// Zero-terminated string.
    String,
    /// `struct mem_info`: 32-bit address followed by 32-bit size.
    MemoryRange,
    /// Amiga `struct ConfigDev` autoconfig descriptor.
    ConfigDescriptor,
    /// VME board information blob.
    BoardInfo,
}

impl SemanticType {
    /// Returns the minimum payload width in bytes, or `None` for the
    /// variable-length [`SemanticType::String`].
    #[must_use]
    pub const fn width(self) -> Option<usize> {
        match self {
            Self::Unknown => Some(0),
            Self::U8 => Some(1),
            Self::Be16 => Some(2),
            Self::Be32 => Some(4),
            Self::String => None,
            Self::MemoryRange => Some(8),
            Self::ConfigDescriptor => Some(68),
            Self::BoardInfo => Some(32),
        }
    }

    /// Short lowercase name used in traces and diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::U8 => "u8",
            Self::Be16 => "be16",
            Self::Be32 => "be32",
            Self::String => "string",
            Self::MemoryRange => "mem_info",
            Self::ConfigDescriptor => "config_dev",
            Self::BoardInfo => "boardinfo",
        }
    }

    /// Returns true when a payload of `len` bytes is wide enough for this
    /// type. Strings are checked for termination separately.
    #[must_use]
    pub const fn accepts_len(self, len: usize) -> bool {
        match self.width() {
            Some(width) => len >= width,
            None => true,
        }
    }
}
