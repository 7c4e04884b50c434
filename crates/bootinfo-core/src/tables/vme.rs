//! VME board bootinfo records, shared by the MVME and BVME families.

use super::{LookupEntry, LookupTable};
use crate::dictionary::{RecordDefinition, RecordDictionary};
use crate::SemanticType;

/// VME board type (`VME_TYPE_*`).
pub const BI_VME_TYPE: u16 = 0x8000;
/// VME board information blob.
pub const BI_VME_BRDINFO: u16 = 0x8001;

/// VME board type labels.
pub const VME_TYPES: &LookupTable = &[
    LookupEntry::new(0x0034, "TP34V"),
    LookupEntry::new(0x0147, "MVME147"),
    LookupEntry::new(0x0162, "MVME162"),
    LookupEntry::new(0x0166, "MVME166"),
    LookupEntry::new(0x0167, "MVME167"),
    LookupEntry::new(0x0172, "MVME172"),
    LookupEntry::new(0x0177, "MVME177"),
    LookupEntry::new(0x4000, "BVME4000"),
    LookupEntry::new(0x6000, "BVME6000"),
];

const VME_DEFINITIONS: &[RecordDefinition] = &[
    RecordDefinition::labelled(BI_VME_TYPE, "type", SemanticType::Be32, VME_TYPES),
    RecordDefinition::new(BI_VME_BRDINFO, "brdinfo", SemanticType::BoardInfo),
    RecordDefinition::sentinel(),
];

/// VME machine-specific records.
pub static VME_RECORDS: RecordDictionary = RecordDictionary::new(VME_DEFINITIONS);
