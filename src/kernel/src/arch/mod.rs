//! Architecture-specific bindings.
//!
//! Hooks the hardware-independent console up to real ports and memory, and
//! provides the serial log and the halt path. Only x86_64 is supported; the
//! VGA text buffer and CRTC ports do not exist elsewhere.

#[cfg(target_arch = "x86_64")]
pub mod x86_64;

#[cfg(target_arch = "x86_64")]
pub use x86_64::*;
