//! Record dictionaries and tag-namespace resolution.
//!
//! A dictionary is an ordered list of [`RecordDefinition`]s closed by a
//! [`BI_LAST`] sentinel entry. Resolution scans in order up to the sentinel
//! and returns the first definition whose tag matches.

use crate::tables::{LookupTable, CPU_TYPES, FPU_TYPES, MMU_TYPES};
use crate::SemanticType;

/// Sentinel tag: ends both the stream and every dictionary.
pub const BI_LAST: u16 = 0x0000;
/// Machine type (`MACH_*` code, big-endian 32-bit).
pub const BI_MACHTYPE: u16 = 0x0001;
/// CPU type flag.
pub const BI_CPUTYPE: u16 = 0x0002;
/// FPU type flag.
pub const BI_FPUTYPE: u16 = 0x0003;
/// MMU type flag.
pub const BI_MMUTYPE: u16 = 0x0004;
/// Memory chunk descriptor (`struct mem_info`).
pub const BI_MEMCHUNK: u16 = 0x0005;
/// Ramdisk location (`struct mem_info`).
pub const BI_RAMDISK: u16 = 0x0006;
/// Kernel command line string.
pub const BI_COMMAND_LINE: u16 = 0x0007;

/// Tag bit selecting the machine-specific namespace.
pub const MACHINE_TAG_BIT: u16 = 0x8000;

/// Namespace a tag belongs to, selected by [`MACHINE_TAG_BIT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TagSpace {
    /// Tags meaningful for every machine family.
    Generic,
    /// Tags meaningful only within the detected machine family.
    Machine,
}

impl TagSpace {
    /// Classifies a raw tag by its namespace bit.
    #[must_use]
    pub const fn of(tag: u16) -> Self {
        if tag & MACHINE_TAG_BIT == 0 {
            Self::Generic
        } else {
            Self::Machine
        }
    }
}

/// One typed record known to a dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordDefinition {
    /// Raw tag value.
    pub tag: u16,
    /// Display name.
    pub name: &'static str,
    /// Payload interpretation.
    pub semantic_type: SemanticType,
    /// Optional code-to-label table applied to the first 32-bit word.
    pub lookup: Option<&'static LookupTable>,
}

impl RecordDefinition {
    /// Creates a definition without a lookup table.
    #[must_use]
    pub const fn new(tag: u16, name: &'static str, semantic_type: SemanticType) -> Self {
        Self {
            tag,
            name,
            semantic_type,
            lookup: None,
        }
    }

    /// Creates a definition whose value is labelled through `lookup`.
    #[must_use]
    pub const fn labelled(
        tag: u16,
        name: &'static str,
        semantic_type: SemanticType,
        lookup: &'static LookupTable,
    ) -> Self {
        Self {
            tag,
            name,
            semantic_type,
            lookup: Some(lookup),
        }
    }

    /// The closing entry every dictionary carries.
    #[must_use]
    pub const fn sentinel() -> Self {
        Self::new(BI_LAST, "last", SemanticType::Unknown)
    }
}

/// Immutable, sentinel-terminated list of record definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordDictionary {
    definitions: &'static [RecordDefinition],
}

impl RecordDictionary {
    /// Wraps a static definition list. The list must end with
    /// [`RecordDefinition::sentinel`].
    #[must_use]
    pub const fn new(definitions: &'static [RecordDefinition]) -> Self {
        Self { definitions }
    }

    /// Definitions in order, stopping before the sentinel.
    pub fn definitions(&self) -> impl Iterator<Item = &'static RecordDefinition> {
        let definitions: &'static [RecordDefinition] = self.definitions;
        definitions
            .iter()
            .take_while(|definition| definition.tag != BI_LAST)
    }

    /// Returns true when the raw list is closed by the sentinel entry.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.definitions
            .last()
            .is_some_and(|definition| definition.tag == BI_LAST)
    }

    /// First definition matching `tag`, if any.
    #[must_use]
    pub fn resolve(&self, tag: u16) -> Option<&'static RecordDefinition> {
        self.definitions().find(|definition| definition.tag == tag)
    }
}

const GENERIC_DEFINITIONS: &[RecordDefinition] = &[
    RecordDefinition::new(BI_MACHTYPE, "machtype", SemanticType::Be32),
    RecordDefinition::labelled(BI_CPUTYPE, "cputype", SemanticType::Be32, CPU_TYPES),
    RecordDefinition::labelled(BI_FPUTYPE, "fputype", SemanticType::Be32, FPU_TYPES),
    RecordDefinition::labelled(BI_MMUTYPE, "mmutype", SemanticType::Be32, MMU_TYPES),
    RecordDefinition::new(BI_MEMCHUNK, "memchunk", SemanticType::MemoryRange),
    RecordDefinition::new(BI_RAMDISK, "ramdisk", SemanticType::MemoryRange),
    RecordDefinition::new(BI_COMMAND_LINE, "command_line", SemanticType::String),
    RecordDefinition::sentinel(),
];

/// Records shared by every m68k machine.
pub static GENERIC_RECORDS: RecordDictionary = RecordDictionary::new(GENERIC_DEFINITIONS);

/// Resolves `tag` against the dictionary its namespace selects.
///
/// Generic tags always use [`GENERIC_RECORDS`]; machine tags use `machine`,
/// and stay unresolved when no machine dictionary is available.
#[must_use]
pub fn resolve_tag(
    tag: u16,
    machine: Option<&RecordDictionary>,
) -> Option<&'static RecordDefinition> {
    match TagSpace::of(tag) {
        TagSpace::Generic => GENERIC_RECORDS.resolve(tag),
        TagSpace::Machine => machine.and_then(|dictionary| dictionary.resolve(tag)),
    }
}
