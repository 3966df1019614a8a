//! VGA text mode console for x86_64.
//!
//! Binds the [`ember_console::Console`] driver to the text buffer at 0xB8000,
//! the CRT controller ports and the serial kernel log, and exposes it as a
//! kernel-wide singleton.

use super::serial::SerialLog;
use core::fmt::{self, Write};
use core::ptr;
use ember_console::{Attribute, Console, Target, BUFFER_SIZE};
use ember_hal::{PortIo, TextBuffer};
use spin::Mutex;
use x86_64::instructions::port::Port;

/// VGA text buffer memory-mapped I/O address.
const VGA_BUFFER_ADDR: usize = 0xB8000;

/// The memory-mapped VGA text buffer.
pub struct VgaMemory {
    /// SAFETY: This pointer is valid for the lifetime of the kernel.
    /// The VGA buffer at 0xB8000 is always mapped in x86 real/protected mode.
    base: *mut [u8; BUFFER_SIZE],
}

// SAFETY: VgaMemory only accesses the VGA buffer through volatile operations.
// The buffer is memory-mapped hardware that exists for the kernel's lifetime.
// Access is synchronized through the CONSOLE spinlock.
unsafe impl Send for VgaMemory {}

impl VgaMemory {
    /// Creates a handle to the VGA text buffer.
    ///
    /// # Safety
    ///
    /// 0xB8000 must be identity-mapped and no other handle may write to it.
    pub unsafe fn new() -> Self {
        VgaMemory {
            base: VGA_BUFFER_ADDR as *mut [u8; BUFFER_SIZE],
        }
    }
}

impl TextBuffer for VgaMemory {
    fn len(&self) -> usize {
        BUFFER_SIZE
    }

    fn read(&self, offset: usize) -> u8 {
        // SAFETY: The array index is bounds-checked, so only bytes inside the
        // 4000-byte window are read. Using volatile read because the VGA buffer
        // is memory-mapped I/O.
        unsafe { ptr::read_volatile(&(*self.base)[offset]) }
    }

    fn write(&mut self, offset: usize, value: u8) {
        // SAFETY: As in `read`, the index is bounds-checked against the
        // buffer size before the volatile write.
        unsafe { ptr::write_volatile(&mut (*self.base)[offset], value) }
    }
}

/// Port I/O through the `in`/`out` instructions.
pub struct CpuPorts;

impl PortIo for CpuPorts {
    fn read_u8(&mut self, port: u16) -> u8 {
        // SAFETY: The console only addresses the CRTC index and data ports,
        // which have no side effects beyond the selected register.
        unsafe { Port::<u8>::new(port).read() }
    }

    fn write_u8(&mut self, port: u16, value: u8) {
        // SAFETY: See `read_u8`.
        unsafe { Port::<u8>::new(port).write(value) }
    }
}

/// The console type the kernel runs on.
pub type VgaConsole = Console<VgaMemory, CpuPorts, SerialLog>;

/// Global VGA console instance.
///
/// The driver itself does no locking; this spinlock is what keeps the
/// cursor port protocol from interleaving.
pub static CONSOLE: spin::Once<Mutex<VgaConsole>> = spin::Once::new();

/// Initializes the global VGA console.
///
/// Idempotent - safe to call multiple times.
pub fn init() {
    CONSOLE.call_once(|| {
        // SAFETY: This is the only place a VgaMemory is created for the
        // kernel, and the bootloader identity-maps the first megabyte.
        let memory = unsafe { VgaMemory::new() };
        Mutex::new(Console::new(memory, CpuPorts, SerialLog))
    });
}

/// Returns a reference to the VGA console, initializing if necessary.
fn get_console() -> &'static Mutex<VgaConsole> {
    init();
    CONSOLE.get().expect("VGA console not initialized")
}

/// Prints to the VGA buffer without a newline.
#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => {
        $crate::arch::x86_64::vga::_print(format_args!($($arg)*))
    };
}

/// Prints to the VGA buffer with a newline.
#[macro_export]
macro_rules! println {
    () => ($crate::print!("\n"));
    ($($arg:tt)*) => ($crate::print!("{}\n", format_args!($($arg)*)))
}

/// Internal print function used by macros.
#[doc(hidden)]
pub fn _print(args: fmt::Arguments) {
    let console = get_console();
    console.lock().write_fmt(args).expect("vga write failed");
}

/// Prints formatted text at the cursor in the given attribute.
pub fn print_colored(attr: Attribute, args: fmt::Arguments) {
    let _ = get_console().lock().colored(attr).write_fmt(args);
}

/// Prints a message at the cursor.
pub fn kprint(message: &str) {
    get_console().lock().print(message);
}

/// Prints a message starting at a fixed cell.
pub fn kprint_at(message: &str, col: usize, row: usize) {
    get_console().lock().print_at(message, Target::At { col, row });
}

/// Prints a message starting at a fixed cell in the given attribute.
pub fn kprint_at_color(message: &str, col: usize, row: usize, attr: Attribute) {
    get_console()
        .lock()
        .print_at_color(message, Target::At { col, row }, attr);
}

/// Erases the character before the cursor.
pub fn kprint_backspace() {
    get_console().lock().backspace();
}

/// Prints `n` in hexadecimal at the cursor.
pub fn khex(n: u32) {
    get_console().lock().hex(n);
}

/// Prints `n` in decimal at the cursor.
pub fn kdec(n: u32) {
    get_console().lock().dec(n);
}

/// Writes `n` in hexadecimal to the kernel log.
pub fn klhex(n: u32) {
    get_console().lock().log_hex(n);
}

/// Writes `n` in decimal to the kernel log.
pub fn kldec(n: u32) {
    get_console().lock().log_dec(n);
}

/// Clears the VGA screen.
pub fn clear_screen() {
    get_console().lock().clear_screen();
}

/// Logs `message`, shows it in red at the cursor and halts the CPU for good.
pub fn kpanic(message: impl fmt::Display) -> ! {
    // SAFETY: Nothing runs after this call, so whoever held the locks will
    // never touch the console or the serial port again.
    let mut console = unsafe {
        super::serial::force_unlock();
        force_console()
    };
    console.panic(message, super::halt_loop)
}

/// Runs `f` with the console locked.
pub fn with_console<R>(f: impl FnOnce(&mut VgaConsole) -> R) -> R {
    f(&mut get_console().lock())
}

/// Forces the console lock open and returns the console.
///
/// # Safety
///
/// Only for the panic path: the previous holder must never run again.
unsafe fn force_console() -> spin::MutexGuard<'static, VgaConsole> {
    let console = get_console();
    console.force_unlock();
    console.lock()
}
