//! Fatal decode conditions.
//!
//! Every error aborts the whole decode. There is no resynchronisation after
//! a malformed unit.

use std::io;

use thiserror::Error;

/// Error classes used by callers to report and classify failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ErrorClass {
    /// Read failure or premature end of file inside a unit.
    Io,
    /// Unit size violates the framing rules.
    Framing,
    /// Payload does not fit its resolved type.
    Content,
    /// Record buffer could not be allocated.
    Resource,
}

/// Fatal decode error.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Reading the tag of the next unit failed.
    #[error("Cannot read bootinfo: {0}")]
    ReadTag(#[source] io::Error),
    /// Reading the size or payload of a unit failed.
    #[error("Cannot read bootinfo record 0x{tag:04x}: {source}")]
    Read {
        /// Tag of the unit being read.
        tag: u16,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The stream ended inside a tag.
    #[error("Unexpected end of file")]
    TruncatedTag,
    /// The stream ended inside the size field or payload of a unit.
    #[error("Unexpected end of file in record 0x{tag:04x}")]
    UnexpectedEof {
        /// Tag of the truncated unit.
        tag: u16,
    },
    /// Total unit size is below the header size or not 4-byte aligned.
    #[error("Invalid size {raw_size} for tag 0x{tag:04x}")]
    InvalidSize {
        /// Tag of the offending unit.
        tag: u16,
        /// Total size as declared on disk.
        raw_size: u16,
    },
    /// A string payload has no zero terminator.
    #[error("Unterminated string for tag {name}")]
    UnterminatedString {
        /// Tag of the offending unit.
        tag: u16,
        /// Resolved display name.
        name: String,
    },
    /// Payload is smaller than the resolved type requires.
    #[error("Unexpected size {raw_size} for tag {name}")]
    UnexpectedSize {
        /// Tag of the offending unit.
        tag: u16,
        /// Resolved display name.
        name: String,
        /// Total size as declared on disk.
        raw_size: u16,
    },
    /// The payload buffer could not be allocated.
    #[error("No memory for record 0x{tag:04x} ({size} bytes)")]
    OutOfMemory {
        /// Tag of the unit being read.
        tag: u16,
        /// Payload bytes requested.
        size: usize,
    },
}

impl DecodeError {
    /// Returns the error class for this error.
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::ReadTag(_)
            | Self::Read { .. }
            | Self::TruncatedTag
            | Self::UnexpectedEof { .. } => ErrorClass::Io,
            Self::InvalidSize { .. } => ErrorClass::Framing,
            Self::UnterminatedString { .. } | Self::UnexpectedSize { .. } => ErrorClass::Content,
            Self::OutOfMemory { .. } => ErrorClass::Resource,
        }
    }

    /// Tag of the offending unit, when one was read.
    #[must_use]
    pub const fn tag(&self) -> Option<u16> {
        match self {
            Self::ReadTag(_) | Self::TruncatedTag => None,
            Self::Read { tag, .. }
            | Self::UnexpectedEof { tag }
            | Self::InvalidSize { tag, .. }
            | Self::UnterminatedString { tag, .. }
            | Self::UnexpectedSize { tag, .. }
            | Self::OutOfMemory { tag, .. } => Some(*tag),
        }
    }

    /// Maps a size or payload read failure, folding short reads into
    /// [`DecodeError::UnexpectedEof`].
    pub(crate) fn from_read(tag: u16, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::UnexpectedEof {
            Self::UnexpectedEof { tag }
        } else {
            Self::Read { tag, source }
        }
    }
}
