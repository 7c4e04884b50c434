//! Apollo Domain bootinfo records.

use super::{LookupEntry, LookupTable};
use crate::dictionary::{RecordDefinition, RecordDictionary};
use crate::SemanticType;

/// Apollo model (`APOLLO_*`).
pub const BI_APOLLO_MODEL: u16 = 0x8000;

/// Apollo model labels.
pub const APOLLO_MODELS: &LookupTable = &[
    LookupEntry::new(0, "UNKNOWN"),
    LookupEntry::new(1, "DN3000"),
    LookupEntry::new(2, "DN3010"),
    LookupEntry::new(3, "DN3500"),
    LookupEntry::new(4, "DN4000"),
    LookupEntry::new(5, "DN4500"),
];

const APOLLO_DEFINITIONS: &[RecordDefinition] = &[
    RecordDefinition::labelled(BI_APOLLO_MODEL, "model", SemanticType::Be32, APOLLO_MODELS),
    RecordDefinition::sentinel(),
];

/// Apollo machine-specific records.
pub static APOLLO_RECORDS: RecordDictionary = RecordDictionary::new(APOLLO_DEFINITIONS);
