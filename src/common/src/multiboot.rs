//! Multiboot (version 1) data layout.
//!
//! These are the records a multiboot-compliant boot loader hands to the
//! kernel. Only the layout lives here; walking the memory map and module
//! list is left to the memory manager.
//!
//! Nothing in this workspace reads these records yet: the kernel is started
//! by `bootloader`, which hands over its own `BootInfo`. The types are kept
//! for a multiboot entry path.

use bitflags::bitflags;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Value left in `eax` by the boot loader.
pub const KERNEL_MAGIC: u32 = 0x2BAD_B002;

/// Value the kernel image places in its own multiboot header.
pub const HEADER_MAGIC: u32 = 0x1BAD_B002;

/// Number of module slots the kernel reserves.
pub const MAX_MODULES: usize = 10;

bitflags! {
    /// Which fields of [`MultibootInfo`] the boot loader filled in.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct InfoFlags: u32 {
        const MEMORY           = 1 << 0;
        const BOOT_DEVICE      = 1 << 1;
        const CMDLINE          = 1 << 2;
        const MODULES          = 1 << 3;
        const AOUT_SYMBOLS     = 1 << 4;
        const ELF_SECTIONS     = 1 << 5;
        const MEMORY_MAP       = 1 << 6;
        const DRIVES           = 1 << 7;
        const CONFIG_TABLE     = 1 << 8;
        const BOOT_LOADER_NAME = 1 << 9;
        const APM_TABLE        = 1 << 10;
        const VBE              = 1 << 11;
    }
}

/// Boot information structure.
///
/// Addresses are 32-bit physical addresses.
#[derive(Debug, Clone, Copy)]
#[repr(C, packed)]
pub struct MultibootInfo {
    pub flags: u32,
    pub mem_lower: u32,
    pub mem_upper: u32,
    pub boot_device: u32,
    pub cmdline: u32,
    pub mods_count: u32,
    pub mods_addr: u32,
    pub num: u32,
    pub size: u32,
    pub addr: u32,
    pub shndx: u32,
    pub mmap_length: u32,
    pub mmap_addr: u32,
    pub drives_length: u32,
    pub drives_addr: u32,
    pub config_table: u32,
    pub boot_loader_name: u32,
    pub apm_table: u32,
    pub vbe_control_info: u32,
    pub vbe_mode_info: u32,
    pub vbe_mode: u32,
    pub vbe_interface_seg: u32,
    pub vbe_interface_off: u32,
    pub vbe_interface_len: u32,
}

impl MultibootInfo {
    /// Known flag bits; unknown bits are dropped.
    pub fn flags(&self) -> InfoFlags {
        InfoFlags::from_bits_truncate(self.flags)
    }
}

/// A boot module loaded alongside the kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct ModuleDescriptor {
    pub mod_start: u32,
    pub mod_end: u32,
    /// Physical address of a NUL-terminated name.
    pub string: u32,
    pub reserved: u32,
}

impl ModuleDescriptor {
    /// Length of the module image in bytes.
    pub fn len(&self) -> u32 {
        self.mod_end.saturating_sub(self.mod_start)
    }

    /// Returns true if the module image is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One entry of the boot loader's memory map.
///
/// `size` counts the bytes that follow it, so the next entry starts
/// `size + 4` bytes after this one.
#[derive(Debug, Clone, Copy)]
#[repr(C, packed)]
pub struct MemoryMapEntry {
    pub size: u32,
    pub base_addr_low: u32,
    pub base_addr_high: u32,
    pub length: u64,
    pub kind: u32,
}

impl MemoryMapEntry {
    /// Full 64-bit base address.
    pub fn base_addr(&self) -> u64 {
        (u64::from(self.base_addr_high) << 32) | u64::from(self.base_addr_low)
    }

    /// Region type, if the boot loader used a known code.
    pub fn region_kind(&self) -> Option<MemoryRegionKind> {
        MemoryRegionKind::from_raw(self.kind)
    }
}

/// Memory map region types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u32)]
pub enum MemoryRegionKind {
    /// Usable RAM.
    Free = 1,
    /// Reserved by firmware or hardware.
    Reserved = 2,
    /// ACPI tables, reclaimable after they are read.
    Acpi = 3,
    /// Must be preserved across hibernation.
    Hibernation = 4,
    /// Defective RAM.
    BadCell = 5,
}

impl MemoryRegionKind {
    /// Converts a raw type code.
    pub const fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            1 => Some(MemoryRegionKind::Free),
            2 => Some(MemoryRegionKind::Reserved),
            3 => Some(MemoryRegionKind::Acpi),
            4 => Some(MemoryRegionKind::Hibernation),
            5 => Some(MemoryRegionKind::BadCell),
            _ => None,
        }
    }

    /// Human-readable name for memory map listings.
    pub const fn name(self) -> &'static str {
        match self {
            MemoryRegionKind::Free => "Free Memory",
            MemoryRegionKind::Reserved => "Reserved",
            MemoryRegionKind::Acpi => "ACPI Reclaimable",
            MemoryRegionKind::Hibernation => "Hibernation",
            MemoryRegionKind::BadCell => "Bad Cell",
        }
    }
}

impl fmt::Display for MemoryRegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
