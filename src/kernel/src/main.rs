//! Ember OS Kernel Entry Point
//!
//! This is the main entry point for the Ember OS kernel.

#![no_std]
#![no_main]

use bootloader::bootinfo::MemoryRegionType;
use bootloader::{entry_point, BootInfo};
use core::panic::PanicInfo;
use ember_kernel::arch::x86_64::{self, vga};
use ember_kernel::boot::{self, Status};
use ember_kernel::println;

entry_point!(kernel_main);

/// Kernel entry point.
///
/// Called by the bootloader after setting up the initial environment.
fn kernel_main(boot_info: &'static BootInfo) -> ! {
    // ========================================================================
    // Phase 1: Core Initialization
    // ========================================================================
    ember_kernel::init();

    vga::clear_screen();
    boot::banner::print_banner();

    boot::log(Status::Ok, "Serial log initialized");
    boot::log(Status::Ok, "VGA text console initialized");

    // ========================================================================
    // Phase 2: Self checks
    // ========================================================================
    ember_kernel::tests::run_all();
    boot::log(Status::Ok, "Console self checks passed");

    // ========================================================================
    // Phase 3: Memory map
    // ========================================================================
    boot::log_section("Memory map");
    let mut usable_kib: u64 = 0;
    for region in boot_info.memory_map.iter() {
        let start = region.range.start_addr();
        let end = region.range.end_addr();
        if region.region_type == MemoryRegionType::Usable {
            usable_kib += (end - start) / 1024;
        }
    }
    let regions = boot_info.memory_map.iter().count() as u32;
    let usable_kib = u32::try_from(usable_kib).unwrap_or(u32::MAX);

    vga::kprint("       regions: ");
    vga::kdec(regions);
    vga::kprint("\n       usable KiB: ");
    vga::kdec(usable_kib);
    vga::kprint(" (0x");
    vga::khex(usable_kib);
    vga::kprint(")\n");

    // same figures on the serial log
    ember_kernel::serial_print!("memory map: ");
    vga::kldec(regions);
    ember_kernel::serial_print!(" regions, 0x");
    vga::klhex(usable_kib);
    ember_kernel::serial_println!(" KiB usable");

    if usable_kib == 0 {
        boot::log(Status::Warn, "Bootloader reported no usable memory");
    } else {
        boot::log(Status::Info, "Memory map read");
    }

    // ========================================================================
    // Boot Complete
    // ========================================================================
    println!();
    boot::log(Status::Ok, "Boot complete!");
    log::info!("entering idle loop");

    loop {
        x86_64::hlt();
    }
}

/// Panic handler.
///
/// Called when the kernel encounters an unrecoverable error.
#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    // SAFETY: Nothing resumes after a panic, so the previous lock holder
    // is gone for good.
    unsafe { x86_64::serial::force_unlock() };
    log::error!("KERNEL PANIC at {:?}", info.location());

    vga::kpanic(format_args!("\n\n!!! KERNEL PANIC !!!\n{}\n", info))
}
