//! Interactive prompt loop
//!
//! Reads one measurement per line, blank lines count as "not supplied".
//! Generic over the reader and writer so sessions can be scripted.

use std::io::{BufRead, Write};

use crate::calculator::Calculator;
use crate::error::{FrameError, Result};
use crate::formatter::{REPORT_HEADING, RULE, report_lines};
use crate::frontend::{RETRY_MESSAGE, USAGE_HINT};
use crate::parser::parse_optional_measurement;
use crate::types::{FieldName, FrameDimensions, MeasurementFields};

pub const TITLE: &str = "Frame Measurement Calculator";
pub const AGAIN_PROMPT: &str = "Calculate another frame? (y/n): ";
pub const FAREWELL: &str = "Thank you for using the Frame Calculator!";

/// What happened in a single round of prompts
#[derive(Debug)]
pub enum RoundOutcome {
    Calculated(FrameDimensions),
    /// Input was rejected, the user should re-enter everything
    Retry(FrameError),
    /// Input ran out before the round finished
    EndOfInput,
}

pub struct ConsoleSession<R, W> {
    input: R,
    output: W,
    calculator: Calculator,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    pub fn new(input: R, output: W, calculator: Calculator) -> Self {
        Self {
            input,
            output,
            calculator,
        }
    }

    /// Run rounds until the user declines another or input ends
    ///
    /// Returns the number of frames successfully calculated.
    pub fn run(&mut self) -> Result<usize> {
        let mut calculated = 0;

        loop {
            match self.run_round()? {
                RoundOutcome::Calculated(_) => calculated += 1,
                RoundOutcome::Retry(_) => writeln!(self.output, "{RETRY_MESSAGE}")?,
                RoundOutcome::EndOfInput => {
                    writeln!(self.output)?;
                    break;
                }
            }

            writeln!(self.output)?;
            let again = self.prompt(AGAIN_PROMPT)?;
            if !again.is_some_and(|answer| answer.trim().eq_ignore_ascii_case("y")) {
                break;
            }
        }

        writeln!(self.output, "{FAREWELL}")?;
        self.output.flush()?;
        tracing::info!(calculated, "console session finished");
        Ok(calculated)
    }

    /// Prompt for the four fields once and show the result
    pub fn run_round(&mut self) -> Result<RoundOutcome> {
        writeln!(self.output)?;
        writeln!(self.output, "{TITLE}")?;
        writeln!(self.output, "{RULE}")?;
        writeln!(self.output, "{USAGE_HINT}")?;

        let mut fields = MeasurementFields::default();
        for field in FieldName::ALL {
            let Some(line) = self.prompt(field.prompt())? else {
                return Ok(RoundOutcome::EndOfInput);
            };

            match parse_optional_measurement(&line) {
                Ok(value) => fields.set(field, value),
                Err(source) => {
                    tracing::warn!(%field, input = %line, "rejected measurement");
                    writeln!(self.output, "Error: {source}")?;
                    return Ok(RoundOutcome::Retry(FrameError::Parse { field, source }));
                }
            }
        }

        match self.calculator.calculate_fields(&fields) {
            Ok(dimensions) => {
                writeln!(self.output)?;
                writeln!(self.output, "{REPORT_HEADING}")?;
                writeln!(self.output, "{RULE}")?;
                for line in report_lines(&dimensions) {
                    writeln!(self.output, "{line}")?;
                }
                Ok(RoundOutcome::Calculated(dimensions))
            }
            Err(e @ (FrameError::MissingFields(_) | FrameError::NonPositiveOutside { .. })) => {
                tracing::warn!(error = %e, "calculation skipped");
                writeln!(self.output, "Error: {e}")?;
                Ok(RoundOutcome::Retry(e))
            }
            Err(e) => Err(e),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    // None once the reader is exhausted. Undecodable bytes become U+FFFD,
    // which no measurement grammar accepts.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&raw);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
