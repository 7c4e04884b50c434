//! HP9000/300 and /400 bootinfo records.

use super::{LookupEntry, LookupTable};
use crate::dictionary::{RecordDefinition, RecordDictionary};
use crate::SemanticType;

/// Model (`HP_*`).
pub const BI_HP300_MODEL: u16 = 0x8000;
/// Select code of the console UART.
pub const BI_HP300_UART_SCODE: u16 = 0x8001;
/// Physical address of the console UART.
pub const BI_HP300_UART_ADDR: u16 = 0x8002;

/// HP9000 model labels.
pub const HP300_MODELS: &LookupTable = &[
    LookupEntry::new(0, "HP9000/320"),
    LookupEntry::new(1, "HP9000/330"),
    LookupEntry::new(2, "HP9000/340"),
    LookupEntry::new(3, "HP9000/345"),
    LookupEntry::new(4, "HP9000/350"),
    LookupEntry::new(5, "HP9000/360"),
    LookupEntry::new(6, "HP9000/370"),
    LookupEntry::new(7, "HP9000/375"),
    LookupEntry::new(8, "HP9000/380"),
    LookupEntry::new(9, "HP9000/385"),
    LookupEntry::new(10, "HP9000/400"),
    LookupEntry::new(11, "HP9000/425T"),
    LookupEntry::new(12, "HP9000/425S"),
    LookupEntry::new(13, "HP9000/425E"),
    LookupEntry::new(14, "HP9000/433T"),
    LookupEntry::new(15, "HP9000/433S"),
];

const HP300_DEFINITIONS: &[RecordDefinition] = &[
    RecordDefinition::labelled(BI_HP300_MODEL, "model", SemanticType::Be32, HP300_MODELS),
    RecordDefinition::new(BI_HP300_UART_SCODE, "uart_scode", SemanticType::Be32),
    RecordDefinition::new(BI_HP300_UART_ADDR, "uart_addr", SemanticType::Be32),
    RecordDefinition::sentinel(),
];

/// HP9000/300 machine-specific records.
pub static HP300_RECORDS: RecordDictionary = RecordDictionary::new(HP300_DEFINITIONS);
