//! Code-to-name lookup tables, grouped per machine family.
//!
//! Every table is an ordered slice searched first-match-wins. A missing key
//! simply leaves the value unlabelled so the renderer falls back to hex.

/// Amiga models, chipsets and record tags.
pub mod amiga;
/// Apollo Domain models and record tags.
pub mod apollo;
/// Atari machine cookies, machine types and record tags.
pub mod atari;
/// HP9000/300 models and record tags.
pub mod hp300;
/// Macintosh Gestalt model numbers and record tags.
pub mod mac;
/// VME board types and record tags.
pub mod vme;

/// A single raw code and its descriptive label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LookupEntry {
    /// Raw value as found in the big-endian payload.
    pub key: u32,
    /// Human-readable label.
    pub label: &'static str,
}

impl LookupEntry {
    /// Creates a lookup entry.
    #[must_use]
    pub const fn new(key: u32, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// Ordered code-to-label table.
pub type LookupTable = [LookupEntry];

/// Returns the label of the first entry whose key matches `key`.
#[must_use]
pub fn lookup(table: &LookupTable, key: u32) -> Option<&'static str> {
    table
        .iter()
        .find_map(|entry| (entry.key == key).then_some(entry.label))
}

/// 68020 CPU flag.
pub const CPU_68020: u32 = 1 << 0;
/// 68030 CPU flag.
pub const CPU_68030: u32 = 1 << 1;
/// 68040 CPU flag.
pub const CPU_68040: u32 = 1 << 2;
/// 68060 CPU flag.
pub const CPU_68060: u32 = 1 << 3;
/// `ColdFire` CPU flag.
pub const CPU_COLDFIRE: u32 = 1 << 4;

/// 68881 FPU flag.
pub const FPU_68881: u32 = 1 << 0;
/// 68882 FPU flag.
pub const FPU_68882: u32 = 1 << 1;
/// Internal 68040 FPU flag.
pub const FPU_68040: u32 = 1 << 2;
/// Internal 68060 FPU flag.
pub const FPU_68060: u32 = 1 << 3;
/// Sun FPA flag.
pub const FPU_SUNFPA: u32 = 1 << 4;
/// `ColdFire` FPU flag.
pub const FPU_COLDFIRE: u32 = 1 << 5;

/// 68851 MMU flag.
pub const MMU_68851: u32 = 1 << 0;
/// Internal 68030 MMU flag.
pub const MMU_68030: u32 = 1 << 1;
/// Internal 68040 MMU flag.
pub const MMU_68040: u32 = 1 << 2;
/// Internal 68060 MMU flag.
pub const MMU_68060: u32 = 1 << 3;
/// Apollo MMU flag.
pub const MMU_APOLLO: u32 = 1 << 4;
/// Sun-3 MMU flag.
pub const MMU_SUN3: u32 = 1 << 5;
/// `ColdFire` MMU flag.
pub const MMU_COLDFIRE: u32 = 1 << 6;

// 68000 and 68010 have no published CPU flag yet.
/// CPU type labels.
pub const CPU_TYPES: &LookupTable = &[
    LookupEntry::new(CPU_68020, "68020"),
    LookupEntry::new(CPU_68030, "68030"),
    LookupEntry::new(CPU_68040, "68040"),
    LookupEntry::new(CPU_68060, "68060"),
    LookupEntry::new(CPU_COLDFIRE, "COLDFIRE"),
];

/// FPU type labels.
pub const FPU_TYPES: &LookupTable = &[
    LookupEntry::new(0, "NONE"),
    LookupEntry::new(FPU_68881, "68881"),
    LookupEntry::new(FPU_68882, "68882"),
    LookupEntry::new(FPU_68040, "68040"),
    LookupEntry::new(FPU_68060, "68060"),
    LookupEntry::new(FPU_SUNFPA, "SUNFPA"),
    LookupEntry::new(FPU_COLDFIRE, "COLDFIRE"),
];

/// MMU type labels.
pub const MMU_TYPES: &LookupTable = &[
    LookupEntry::new(0, "NONE"),
    LookupEntry::new(MMU_68851, "68851"),
    LookupEntry::new(MMU_68030, "68030"),
    LookupEntry::new(MMU_68040, "68040"),
    LookupEntry::new(MMU_68060, "68060"),
    LookupEntry::new(MMU_SUN3, "SUN3"),
    LookupEntry::new(MMU_APOLLO, "APOLLO"),
    LookupEntry::new(MMU_COLDFIRE, "COLDFIRE"),
];
