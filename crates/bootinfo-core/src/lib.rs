//! Decoder for the Linux/m68k boot information stream.
//!
//! The boot loader hands the kernel a list of tagged records describing the
//! machine. This crate walks that list, resolves every tag against the
//! generic or machine-specific record dictionary and renders each record as
//! a single line of text.

/// Default location of the bootinfo stream exported by the kernel.
pub const DEFAULT_BOOTINFO_PATH: &str = "/proc/bootinfo";

/// Big-endian field readers.
pub mod value;
pub use value::{read_be16, read_be32, read_be32_at};

/// Semantic payload types and their widths.
pub mod types;
pub use types::SemanticType;

/// Code-to-label lookup tables per machine family.
pub mod tables;
pub use tables::{lookup, LookupEntry, LookupTable};

/// Record dictionaries and tag-namespace resolution.
pub mod dictionary;
pub use dictionary::{
    resolve_tag, RecordDefinition, RecordDictionary, TagSpace, BI_COMMAND_LINE, BI_CPUTYPE,
    BI_FPUTYPE, BI_LAST, BI_MACHTYPE, BI_MEMCHUNK, BI_MMUTYPE, BI_RAMDISK, GENERIC_RECORDS,
    MACHINE_TAG_BIT,
};

/// Machine families and their `MACH_*` codes.
pub mod machine;
pub use machine::{find_machine, MachineDescriptor, MACHINE_TABLE};

/// Fatal decode errors.
pub mod error;
pub use error::{DecodeError, ErrorClass};

/// Classified record type.
pub mod record;
pub use record::Record;

/// Decode trace hooks.
pub mod trace;
pub use trace::{DecodeEvent, NullTrace, TraceSink};

/// Stream decoder state machine.
pub mod decoder;
pub use decoder::{
    decode_all, validate_record, DecodePhase, DecoderState, StreamDecoder, FALLBACK_MACHINE_NAME,
    HEADER_BYTES,
};

/// Text rendering of records.
pub mod render;
pub use render::{render_record, write_record};

#[cfg(test)]
use proptest as _;
#[cfg(test)]
use serde_json as _;
