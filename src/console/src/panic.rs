//! The terminal failure path.

use crate::writer::Console;
use core::fmt::{self, Write};
use ember_common::Attribute;
use ember_hal::{KernelLog, PortIo, TextBuffer};

/// Feeds formatted pieces to a [`KernelLog`].
struct LogWriter<'a, L>(&'a mut L);

impl<L: KernelLog> fmt::Write for LogWriter<'_, L> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.log_str(s);
        Ok(())
    }
}

impl<B, P, L> Console<B, P, L>
where
    B: TextBuffer,
    P: PortIo,
    L: KernelLog,
{
    /// Logs `message`, shows it at the cursor in [`Attribute::ALERT`] and
    /// hands control to `halt`, which must never return.
    pub fn panic(&mut self, message: impl fmt::Display, halt: fn() -> !) -> ! {
        let _ = write!(LogWriter(self.log_sink()), "{}", message);
        let _ = write!(self.colored(Attribute::ALERT), "{}", message);
        halt()
    }
}

#[cfg(test)]
mod tests {
    use crate::addressing;
    use crate::testutil::{console, row_text};
    use ember_common::Attribute;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    fn halt() -> ! {
        panic!("halted")
    }

    #[test]
    fn test_panic_logs_prints_and_halts() {
        let mut console = console();
        console.clear_screen();
        console.print("boot: ");

        let halted = catch_unwind(AssertUnwindSafe(|| {
            console.panic("out of frames", halt);
        }));

        assert!(halted.is_err());
        assert_eq!(console.log_sink().messages, ["out of frames"]);
        assert_eq!(row_text(&console, 0), "boot: out of frames");
        assert_eq!(console.cell(addressing::offset(6, 0)).attr, Attribute::ALERT);
        assert_eq!(console.cell(0).attr, Attribute::DEFAULT);
    }

    #[test]
    fn test_panic_formats_message() {
        let mut console = console();
        console.clear_screen();

        let halted = catch_unwind(AssertUnwindSafe(|| {
            console.panic(format_args!("frame {} lost", 7), halt);
        }));

        assert!(halted.is_err());
        assert_eq!(console.log_sink().messages.concat(), "frame 7 lost");
        assert_eq!(row_text(&console, 0), "frame 7 lost");
        assert_eq!(console.cell(0).attr, Attribute::ALERT);
    }
}
