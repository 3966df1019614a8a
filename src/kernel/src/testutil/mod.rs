//! Test infrastructure for the Ember OS kernel.
//!
//! Provides utilities for bare-metal testing with QEMU. Test names and
//! results go to the serial log; the screen is left to the tests themselves.
//!
//! # Usage
//!
//! Create a test binary in `tests/` that uses these utilities:
//!
//! ```rust,ignore
//! use ember_kernel::testutil::{QemuExitCode, exit_qemu, test_runner, Testable};
//! ```

use crate::serial_println;

/// QEMU exit codes for signaling test results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum QemuExitCode {
    /// All tests passed.
    Success = 0x10,
    /// One or more tests failed.
    Failed = 0x11,
}

/// isa-debug-exit device port, as configured in `test-args`.
const DEBUG_EXIT_PORT: u16 = 0xf4;

/// Exit QEMU with the given exit code.
///
/// QEMU reports `(value << 1) | 1`, so `Success` becomes 33, the
/// `test-success-exit-code` bootimage expects.
pub fn exit_qemu(exit_code: QemuExitCode) {
    #[cfg(target_arch = "x86_64")]
    {
        use x86_64::instructions::port::Port;

        // SAFETY: Writing to the isa-debug-exit device port is safe when QEMU
        // is configured with this device. It triggers a QEMU exit.
        unsafe {
            let mut port = Port::new(DEBUG_EXIT_PORT);
            port.write(exit_code as u32);
        }
    }
}

/// Trait for types that can be run as tests.
pub trait Testable {
    /// Run the test and report results.
    fn run(&self);
}

impl<T: Fn()> Testable for T {
    fn run(&self) {
        let name = core::any::type_name::<T>();
        log::info!("test {}", name);
        serial_println!("test {} ... ", name);
        self();
        serial_println!("[ok]");
    }
}

/// Custom test runner for bare-metal tests.
///
/// Sets up the serial log and console, runs all tests and exits QEMU with
/// success if all pass.
///
/// ```rust,ignore
/// #![feature(custom_test_frameworks)]
/// #![test_runner(ember_kernel::testutil::test_runner)]
/// ```
pub fn test_runner(tests: &[&dyn Testable]) {
    crate::init();
    serial_println!("Running {} tests", tests.len());
    for test in tests {
        test.run();
    }
    exit_qemu(QemuExitCode::Success);
}

/// Panic handler for test binaries.
///
/// Reports test failure and exits QEMU with failure code.
///
/// ```rust,ignore
/// #[panic_handler]
/// fn panic(info: &PanicInfo) -> ! {
///     ember_kernel::testutil::test_panic_handler(info)
/// }
/// ```
pub fn test_panic_handler(info: &core::panic::PanicInfo) -> ! {
    // SAFETY: The failing test never resumes.
    unsafe { crate::arch::x86_64::serial::force_unlock() };
    serial_println!("[failed]");
    serial_println!("Error: {}", info);
    exit_qemu(QemuExitCode::Failed);
    crate::arch::x86_64::halt_loop()
}
