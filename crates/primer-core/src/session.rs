//! The scripted tutorial session.
//!
//! A [`Session`] owns the console streams and walks the fixed step sequence:
//! banner, greeting, addition, parity scan, optional multiplication table,
//! array demo, closing banner. There is no state machine beyond this linear
//! order and no step is ever revisited. All user-facing text goes to the
//! output stream; logging stays on the `log` facade so stdout carries only
//! the tutorial transcript.

use std::io::{BufRead, Write};

use crate::errors::PrimerError;
use crate::input::Scanner;
use crate::ops;

const BANNER_RULE: &str = "======================================";

/// Session behavior knobs supplied by the binary.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Wait for a final Enter before returning, as the classic console
    /// tutorial does. Off by default so piped runs terminate cleanly.
    pub pause_on_exit: bool,
}

pub struct Session<R, W> {
    input: Scanner<R>,
    output: W,
    options: SessionOptions,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, options: SessionOptions) -> Self {
        Self {
            input: Scanner::new(input),
            output,
            options,
        }
    }

    /// Run the full session. Returns an error only when the console stream
    /// fails or a required integer cannot be parsed; an out-of-range table
    /// size is handled inline and does not fail the run.
    pub fn run(&mut self) -> Result<(), PrimerError> {
        log::debug!("tutorial session started");

        self.print_welcome_banner()?;
        self.greet_user()?;

        let (num1, num2) = self.read_operands()?;
        let sum = ops::add_numbers(num1, num2);
        writeln!(self.output, "{} + {} = {}", num1, num2, sum)?;

        self.parity_scan(num1, num2)?;
        self.table_step()?;
        self.array_demo()?;
        self.print_closing_banner()?;

        if self.options.pause_on_exit {
            self.pause()?;
        }

        log::debug!("tutorial session finished");
        Ok(())
    }

    fn print_welcome_banner(&mut self) -> Result<(), PrimerError> {
        writeln!(self.output, "{}", BANNER_RULE)?;
        writeln!(self.output, "     Welcome to the primer tutorial")?;
        writeln!(self.output, "{}", BANNER_RULE)?;
        Ok(())
    }

    fn greet_user(&mut self) -> Result<(), PrimerError> {
        self.prompt("\nEnter your name: ")?;
        let name = self.input.read_line()?;
        writeln!(self.output, "Hello, {}!", name)?;
        Ok(())
    }

    fn read_operands(&mut self) -> Result<(i64, i64), PrimerError> {
        self.prompt("\nEnter two integers separated by a space: ")?;
        let num1 = self.input.next_int()?;
        let num2 = self.input.next_int()?;
        log::debug!("operands read: {} and {}", num1, num2);
        Ok((num1, num2))
    }

    /// Classify every integer in `[from, to]` ascending. An empty range
    /// (`to < from`) prints the heading and nothing else.
    fn parity_scan(&mut self, from: i64, to: i64) -> Result<(), PrimerError> {
        writeln!(self.output, "\nParity check:")?;
        for i in from..=to {
            if ops::is_even(i) {
                writeln!(self.output, "{} is even", i)?;
            } else {
                writeln!(self.output, "{} is odd", i)?;
            }
        }
        Ok(())
    }

    fn table_step(&mut self) -> Result<(), PrimerError> {
        self.prompt("\nEnter the multiplication table size (1-10): ")?;
        let size = self.input.next_int()?;
        if ops::table_size_in_range(size) {
            writeln!(self.output, "\n{}x{} multiplication table:", size, size)?;
            write!(self.output, "{}", ops::multiplication_table(size))?;
        } else {
            log::debug!("table size {} out of range, skipping table", size);
            writeln!(
                self.output,
                "Invalid input, enter a number between {} and {}",
                ops::TABLE_MIN,
                ops::TABLE_MAX
            )?;
        }
        Ok(())
    }

    fn array_demo(&mut self) -> Result<(), PrimerError> {
        writeln!(self.output, "\nArray demo:")?;
        write!(self.output, "Array elements: ")?;
        for value in ops::DEMO_NUMBERS {
            write!(self.output, "{} ", value)?;
        }
        writeln!(self.output)?;
        writeln!(
            self.output,
            "Sum of array elements: {}",
            ops::array_sum(&ops::DEMO_NUMBERS)
        )?;
        Ok(())
    }

    fn print_closing_banner(&mut self) -> Result<(), PrimerError> {
        writeln!(self.output, "\n{}", BANNER_RULE)?;
        writeln!(self.output, "     Program finished, thank you!")?;
        writeln!(self.output, "{}", BANNER_RULE)?;
        Ok(())
    }

    fn pause(&mut self) -> Result<(), PrimerError> {
        self.prompt("\nPress Enter to exit...")?;
        self.input.discard_line()?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<(), PrimerError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }
}
