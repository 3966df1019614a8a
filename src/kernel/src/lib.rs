//! Ember OS Kernel
//!
//! A small x86_64 kernel whose early boot output goes through a VGA text
//! console.
//!
//! # Architecture
//!
//! The kernel is structured into the following modules:
//! - `arch`: Platform-specific code (VGA console, serial, halting)
//! - `boot`: Boot banner and status log lines
//!
//! The console driver itself lives in `ember-console`; this crate only binds
//! it to real hardware.
//!
//! # Safety
//!
//! This is a `#![no_std]` kernel. All unsafe code is documented with safety
//! invariants explaining why the usage is correct.

#![no_std]
#![warn(missing_docs)]

pub mod arch;
pub mod boot;
pub mod tests;
pub mod testutil;

/// Initializes core kernel subsystems.
///
/// Called early in the boot process to set up essential services.
pub fn init() {
    #[cfg(target_arch = "x86_64")]
    {
        arch::x86_64::serial::init_logger();
        arch::x86_64::vga::init();
    }
    log::info!("serial log and VGA console ready");
}
