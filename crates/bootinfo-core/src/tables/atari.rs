//! Atari bootinfo records.
//!
//! The `_MCH` cookie keeps the machine family in its upper 16 bits, so the
//! cookie table is keyed on the shifted value.

use super::{LookupEntry, LookupTable};
use crate::dictionary::{RecordDefinition, RecordDictionary};
use crate::SemanticType;

/// `_MCH` cookie from TOS.
pub const BI_ATARI_MCH_COOKIE: u16 = 0x8000;
/// Special machine type (`ATARI_MACH_*`).
pub const BI_ATARI_MCH_TYPE: u16 = 0x8001;

/// `_MCH` cookie labels.
pub const ATARI_MCH_COOKIES: &LookupTable = &[
    LookupEntry::new(0x0000_0000, "ST"),
    LookupEntry::new(0x0001_0000, "STE"),
    LookupEntry::new(0x0002_0000, "TT"),
    LookupEntry::new(0x0003_0000, "FALCON"),
];

/// Special machine type labels.
pub const ATARI_MCH_TYPES: &LookupTable = &[
    LookupEntry::new(0, "NORMAL"),
    LookupEntry::new(1, "MEDUSA"),
    LookupEntry::new(2, "HADES"),
    LookupEntry::new(3, "AB40"),
];

const ATARI_DEFINITIONS: &[RecordDefinition] = &[
    RecordDefinition::labelled(
        BI_ATARI_MCH_COOKIE,
        "mch_cookie",
        SemanticType::Be32,
        ATARI_MCH_COOKIES,
    ),
    RecordDefinition::labelled(
        BI_ATARI_MCH_TYPE,
        "mch_type",
        SemanticType::Be32,
        ATARI_MCH_TYPES,
    ),
    RecordDefinition::sentinel(),
];

/// Atari machine-specific records.
pub static ATARI_RECORDS: RecordDictionary = RecordDictionary::new(ATARI_DEFINITIONS);

#[cfg(test)]
mod tests {
    use super::{ATARI_MCH_COOKIES, ATARI_MCH_TYPES};
    use crate::tables::lookup;

    #[test]
    fn cookie_family_lives_in_upper_half() {
        assert_eq!(lookup(ATARI_MCH_COOKIES, 0x0003_0000), Some("FALCON"));
        assert_eq!(lookup(ATARI_MCH_COOKIES, 0x0000_0003), None);
        assert_eq!(lookup(ATARI_MCH_COOKIES, 0), Some("ST"));
    }

    #[test]
    fn clone_machine_types() {
        assert_eq!(lookup(ATARI_MCH_TYPES, 1), Some("MEDUSA"));
        assert_eq!(lookup(ATARI_MCH_TYPES, 4), None);
    }
}
