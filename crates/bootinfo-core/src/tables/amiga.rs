//! Amiga bootinfo records.

use super::{LookupEntry, LookupTable};
use crate::dictionary::{RecordDefinition, RecordDictionary};
use crate::SemanticType;

/// Amiga model (`AMI_*`).
pub const BI_AMIGA_MODEL: u16 = 0x8000;
/// Autoconfig device (`struct ConfigDev`).
pub const BI_AMIGA_AUTOCON: u16 = 0x8001;
/// Size of Chip RAM.
pub const BI_AMIGA_CHIP_SIZE: u16 = 0x8002;
/// VBLANK frequency.
pub const BI_AMIGA_VBLANK: u16 = 0x8003;
/// Power supply frequency.
pub const BI_AMIGA_PSFREQ: u16 = 0x8004;
/// `EClock` frequency.
pub const BI_AMIGA_ECLOCK: u16 = 0x8005;
/// Native chipset present (`CS_*`).
pub const BI_AMIGA_CHIPSET: u16 = 0x8006;
/// Serial port period.
pub const BI_AMIGA_SERPER: u16 = 0x8007;

/// Amiga model labels.
pub const AMIGA_MODELS: &LookupTable = &[
    LookupEntry::new(0, "UNKNOWN"),
    LookupEntry::new(1, "A500"),
    LookupEntry::new(2, "A500+"),
    LookupEntry::new(3, "A600"),
    LookupEntry::new(4, "A1000"),
    LookupEntry::new(5, "A1200"),
    LookupEntry::new(6, "A2000"),
    LookupEntry::new(7, "A2500"),
    LookupEntry::new(8, "A3000"),
    LookupEntry::new(9, "A3000T"),
    LookupEntry::new(10, "A3000+"),
    LookupEntry::new(11, "A4000"),
    LookupEntry::new(12, "A4000T"),
    LookupEntry::new(13, "CDTV"),
    LookupEntry::new(14, "CD32"),
    LookupEntry::new(15, "DRACO"),
];

/// Amiga chipset labels.
pub const AMIGA_CHIPSETS: &LookupTable = &[
    LookupEntry::new(0, "STONEAGE"),
    LookupEntry::new(1, "OCS"),
    LookupEntry::new(2, "ECS"),
    LookupEntry::new(3, "AGA"),
];

const AMIGA_DEFINITIONS: &[RecordDefinition] = &[
    RecordDefinition::labelled(BI_AMIGA_MODEL, "model", SemanticType::Be32, AMIGA_MODELS),
    RecordDefinition::new(BI_AMIGA_AUTOCON, "autocon", SemanticType::ConfigDescriptor),
    RecordDefinition::new(BI_AMIGA_CHIP_SIZE, "chip_size", SemanticType::Be32),
    RecordDefinition::new(BI_AMIGA_VBLANK, "vblank", SemanticType::U8),
    RecordDefinition::new(BI_AMIGA_PSFREQ, "psfreq", SemanticType::U8),
    RecordDefinition::new(BI_AMIGA_ECLOCK, "eclock", SemanticType::Be32),
    RecordDefinition::labelled(
        BI_AMIGA_CHIPSET,
        "chipset",
        SemanticType::Be32,
        AMIGA_CHIPSETS,
    ),
    RecordDefinition::new(BI_AMIGA_SERPER, "serper", SemanticType::Be16),
    RecordDefinition::sentinel(),
];

/// Amiga machine-specific records.
pub static AMIGA_RECORDS: RecordDictionary = RecordDictionary::new(AMIGA_DEFINITIONS);
