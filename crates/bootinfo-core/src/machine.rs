//! Machine table: `MACH_*` codes, family names and their record dictionaries.

use crate::dictionary::RecordDictionary;
use crate::tables::amiga::AMIGA_RECORDS;
use crate::tables::apollo::APOLLO_RECORDS;
use crate::tables::atari::ATARI_RECORDS;
use crate::tables::hp300::HP300_RECORDS;
use crate::tables::mac::MAC_RECORDS;
use crate::tables::vme::VME_RECORDS;

/// Commodore Amiga.
pub const MACH_AMIGA: u32 = 1;
/// Atari ST/TT/Falcon.
pub const MACH_ATARI: u32 = 2;
/// 68k Macintosh.
pub const MACH_MAC: u32 = 3;
/// Apollo Domain.
pub const MACH_APOLLO: u32 = 4;
/// Sun 3.
pub const MACH_SUN3: u32 = 5;
/// Motorola MVME147.
pub const MACH_MVME147: u32 = 6;
/// Motorola MVME162/166/167/172/177.
pub const MACH_MVME16X: u32 = 7;
/// BVM BVME4000/6000.
pub const MACH_BVME6000: u32 = 8;
/// HP9000/300 and /400.
pub const MACH_HP300: u32 = 9;
/// Q40/Q60.
pub const MACH_Q40: u32 = 10;
/// Sun 3x.
pub const MACH_SUN3X: u32 = 11;
/// Freescale `ColdFire` M54xx.
pub const MACH_M54XX: u32 = 12;

/// One supported machine family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MachineDescriptor {
    /// `MACH_*` code carried by the machtype record.
    pub code: u32,
    /// Family name, also used as the prefix of machine-specific tags.
    pub name: &'static str,
    /// Machine-specific records, when the family defines any.
    pub records: Option<&'static RecordDictionary>,
}

impl MachineDescriptor {
    const fn new(
        code: u32,
        name: &'static str,
        records: Option<&'static RecordDictionary>,
    ) -> Self {
        Self {
            code,
            name,
            records,
        }
    }
}

/// Every known machine family, searched first-match-wins.
pub static MACHINE_TABLE: [MachineDescriptor; 12] = [
    MachineDescriptor::new(MACH_AMIGA, "amiga", Some(&AMIGA_RECORDS)),
    MachineDescriptor::new(MACH_ATARI, "atari", Some(&ATARI_RECORDS)),
    MachineDescriptor::new(MACH_MAC, "mac", Some(&MAC_RECORDS)),
    MachineDescriptor::new(MACH_APOLLO, "apollo", Some(&APOLLO_RECORDS)),
    MachineDescriptor::new(MACH_SUN3, "sun3", None),
    MachineDescriptor::new(MACH_MVME147, "mvme147", Some(&VME_RECORDS)),
    MachineDescriptor::new(MACH_MVME16X, "mvme16X", Some(&VME_RECORDS)),
    MachineDescriptor::new(MACH_BVME6000, "bvme6000", Some(&VME_RECORDS)),
    MachineDescriptor::new(MACH_HP300, "hp300", Some(&HP300_RECORDS)),
    MachineDescriptor::new(MACH_Q40, "q40", None),
    MachineDescriptor::new(MACH_SUN3X, "sun3x", None),
    MachineDescriptor::new(MACH_M54XX, "m54xx", None),
];

/// Looks up a machine family by its `MACH_*` code.
#[must_use]
pub fn find_machine(code: u32) -> Option<&'static MachineDescriptor> {
    MACHINE_TABLE.iter().find(|machine| machine.code == code)
}
