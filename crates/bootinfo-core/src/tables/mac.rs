//! Macintosh bootinfo records.
//!
//! Most records are hardware base addresses handed over by the Penguin
//! booter; only the model carries a label table.

use super::{LookupEntry, LookupTable};
use crate::dictionary::{RecordDefinition, RecordDictionary};
use crate::SemanticType;

/// Mac model (Gestalt number).
pub const BI_MAC_MODEL: u16 = 0x8000;
/// Frame buffer base address.
pub const BI_MAC_VADDR: u16 = 0x8001;
/// Frame buffer depth.
pub const BI_MAC_VDEPTH: u16 = 0x8002;
/// Frame buffer bytes per row.
pub const BI_MAC_VROW: u16 = 0x8003;
/// Frame buffer dimensions.
pub const BI_MAC_VDIM: u16 = 0x8004;
/// Frame buffer logical base address.
pub const BI_MAC_VLOGICAL: u16 = 0x8005;
/// SCC base address.
pub const BI_MAC_SCCBASE: u16 = 0x8006;
/// Boot time.
pub const BI_MAC_BTIME: u16 = 0x8007;
/// GMT timezone offset.
pub const BI_MAC_GMTBIAS: u16 = 0x8008;
/// Physical RAM size in MiB.
pub const BI_MAC_MEMSIZE: u16 = 0x8009;
/// CPU type from the boot loader.
pub const BI_MAC_CPUID: u16 = 0x800a;
/// ROM base address.
pub const BI_MAC_ROMBASE: u16 = 0x800b;
/// VIA1 base address.
pub const BI_MAC_VIA1BASE: u16 = 0x8010;
/// VIA2 base address.
pub const BI_MAC_VIA2BASE: u16 = 0x8011;
/// VIA2 type.
pub const BI_MAC_VIA2TYPE: u16 = 0x8012;
/// ADB interface type.
pub const BI_MAC_ADBTYPE: u16 = 0x8013;
/// Apple Sound Chip base address.
pub const BI_MAC_ASCBASE: u16 = 0x8014;
/// NCR 5380 SCSI base address.
pub const BI_MAC_SCSI5380: u16 = 0x8015;
/// SCSI DMA base address.
pub const BI_MAC_SCSIDMA: u16 = 0x8016;
/// NCR 53C96 SCSI base address.
pub const BI_MAC_SCSI5396: u16 = 0x8017;
/// IDE interface type.
pub const BI_MAC_IDETYPE: u16 = 0x8018;
/// IDE base address.
pub const BI_MAC_IDEBASE: u16 = 0x8019;
/// `NuBus` presence.
pub const BI_MAC_NUBUS: u16 = 0x801a;
/// Populated `NuBus` slot mask.
pub const BI_MAC_SLOTMASK: u16 = 0x801b;
/// SCC serial type.
pub const BI_MAC_SCCTYPE: u16 = 0x801c;
/// Builtin ethernet type.
pub const BI_MAC_ETHTYPE: u16 = 0x801d;
/// Builtin ethernet base address.
pub const BI_MAC_ETHBASE: u16 = 0x801e;
/// Power management type.
pub const BI_MAC_PMU: u16 = 0x801f;
/// SWIM floppy IOP.
pub const BI_MAC_IOP_SWIM: u16 = 0x8020;
/// ADB IOP.
pub const BI_MAC_IOP_ADB: u16 = 0x8021;

/// Macintosh Gestalt model labels.
pub const MAC_MODELS: &LookupTable = &[
    LookupEntry::new(6, "Mac II"),
    LookupEntry::new(7, "Mac IIX"),
    LookupEntry::new(8, "Mac IICX"),
    LookupEntry::new(9, "Mac SE30"),
    LookupEntry::new(11, "Mac IICI"),
    LookupEntry::new(13, "Mac IIFX"),
    LookupEntry::new(18, "Mac IISI"),
    LookupEntry::new(19, "Mac LC"),
    LookupEntry::new(20, "Mac Q900"),
    LookupEntry::new(21, "Mac PB170"),
    LookupEntry::new(22, "Mac Q700"),
    LookupEntry::new(23, "Mac CLII"),
    LookupEntry::new(25, "Mac PB140"),
    LookupEntry::new(26, "Mac Q950"),
    LookupEntry::new(27, "Mac LCIII"),
    LookupEntry::new(29, "Mac PB210"),
    LookupEntry::new(30, "Mac C650"),
    LookupEntry::new(32, "Mac PB230"),
    LookupEntry::new(33, "Mac PB180"),
    LookupEntry::new(34, "Mac PB160"),
    LookupEntry::new(35, "Mac Q800"),
    LookupEntry::new(36, "Mac Q650"),
    LookupEntry::new(37, "Mac LCII"),
    LookupEntry::new(38, "Mac PB250"),
    LookupEntry::new(44, "Mac IIVI"),
    LookupEntry::new(45, "Mac P600"),
    LookupEntry::new(48, "Mac IIVX"),
    LookupEntry::new(49, "Mac CCL"),
    LookupEntry::new(50, "Mac PB165C"),
    LookupEntry::new(52, "Mac C610"),
    LookupEntry::new(53, "Mac Q610"),
    LookupEntry::new(54, "Mac PB145"),
    LookupEntry::new(56, "Mac P520"),
    LookupEntry::new(60, "Mac C660"),
    LookupEntry::new(62, "Mac P460"),
    LookupEntry::new(71, "Mac PB180C"),
    LookupEntry::new(72, "Mac PB520"),
    LookupEntry::new(77, "Mac PB270C"),
    LookupEntry::new(78, "Mac Q840"),
    LookupEntry::new(80, "Mac P550"),
    LookupEntry::new(83, "Mac CCLII"),
    LookupEntry::new(84, "Mac PB165"),
    LookupEntry::new(85, "Mac PB190"),
    LookupEntry::new(88, "Mac TV"),
    LookupEntry::new(89, "Mac P475"),
    LookupEntry::new(90, "Mac P475F"),
    LookupEntry::new(92, "Mac P575"),
    LookupEntry::new(94, "Mac Q605"),
    LookupEntry::new(95, "Mac Q605_ACC"),
    LookupEntry::new(98, "Mac Q630"),
    LookupEntry::new(99, "Mac P588"),
    LookupEntry::new(102, "Mac PB280"),
    LookupEntry::new(103, "Mac PB280C"),
    LookupEntry::new(115, "Mac PB150"),
];

const MAC_DEFINITIONS: &[RecordDefinition] = &[
    RecordDefinition::labelled(BI_MAC_MODEL, "model", SemanticType::Be32, MAC_MODELS),
    RecordDefinition::new(BI_MAC_VADDR, "vaddr", SemanticType::Be32),
    RecordDefinition::new(BI_MAC_VDEPTH, "vdepth", SemanticType::Be32),
    RecordDefinition::new(BI_MAC_VROW, "vrow", SemanticType::Be32),
    RecordDefinition::new(BI_MAC_VDIM, "vdim", SemanticType::Be32),
    RecordDefinition::new(BI_MAC_VLOGICAL, "vlogical", SemanticType::Be32),
    RecordDefinition::new(BI_MAC_SCCBASE, "sccbase", SemanticType::Be32),
    RecordDefinition::new(BI_MAC_BTIME, "btime", SemanticType::Be32),
    RecordDefinition::new(BI_MAC_GMTBIAS, "gmtbias", SemanticType::Be32),
    RecordDefinition::new(BI_MAC_MEMSIZE, "memsize", SemanticType::Be32),
    RecordDefinition::new(BI_MAC_CPUID, "cpuid", SemanticType::Be32),
    RecordDefinition::new(BI_MAC_ROMBASE, "rombase", SemanticType::Be32),
    RecordDefinition::new(BI_MAC_VIA1BASE, "via1base", SemanticType::Be32),
    RecordDefinition::new(BI_MAC_VIA2BASE, "via2base", SemanticType::Be32),
    RecordDefinition::new(BI_MAC_VIA2TYPE, "via2type", SemanticType::Be32),
    RecordDefinition::new(BI_MAC_ADBTYPE, "adbtype", SemanticType::Be32),
    RecordDefinition::new(BI_MAC_ASCBASE, "ascbase", SemanticType::Be32),
    RecordDefinition::new(BI_MAC_SCSI5380, "scsi5380", SemanticType::Be32),
    RecordDefinition::new(BI_MAC_SCSIDMA, "scsidma", SemanticType::Be32),
    RecordDefinition::new(BI_MAC_SCSI5396, "scsi5396", SemanticType::Be32),
    RecordDefinition::new(BI_MAC_IDETYPE, "idetype", SemanticType::Be32),
    RecordDefinition::new(BI_MAC_IDEBASE, "idebase", SemanticType::Be32),
    RecordDefinition::new(BI_MAC_NUBUS, "nubus", SemanticType::Be32),
    RecordDefinition::new(BI_MAC_SLOTMASK, "slotmask", SemanticType::Be32),
    RecordDefinition::new(BI_MAC_SCCTYPE, "scctype", SemanticType::Be32),
    RecordDefinition::new(BI_MAC_ETHTYPE, "ethtype", SemanticType::Be32),
    RecordDefinition::new(BI_MAC_ETHBASE, "ethbase", SemanticType::Be32),
    RecordDefinition::new(BI_MAC_PMU, "pmu", SemanticType::Be32),
    RecordDefinition::new(BI_MAC_IOP_SWIM, "iop_swim", SemanticType::Be32),
    RecordDefinition::new(BI_MAC_IOP_ADB, "iop_adb", SemanticType::Be32),
    RecordDefinition::sentinel(),
];

/// Macintosh machine-specific records.
pub static MAC_RECORDS: RecordDictionary = RecordDictionary::new(MAC_DEFINITIONS);
