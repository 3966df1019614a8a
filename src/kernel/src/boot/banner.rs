//! Boot banner.

use crate::arch::x86_64::vga;
use crate::println;
use ember_common::{Attribute, Color};

const BANNER: &str = concat!(
    "  _____           _                 \n",
    " | ____|_ __ ___ | |__   ___ _ __   \n",
    " |  _| | '_ ` _ \\| '_ \\ / _ \\ '__|  \n",
    " | |___| | | | | | |_) |  __/ |     \n",
    " |_____|_| |_| |_|_.__/ \\___|_|     \n",
);

/// Print the Ember OS boot banner.
pub fn print_banner() {
    vga::print_colored(Attribute::new(Color::Brown, Color::Black), format_args!("{}\n", BANNER));
    println!(" Ember OS v{}", env!("CARGO_PKG_VERSION"));
    println!();
}
