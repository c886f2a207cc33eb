//! Gap-free buffer of the lines currently materialized for one log.

use crate::model::LineNumber;
use thiserror::Error;

/// Rejected append.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum WindowError {
    /// The incoming lines do not abut the buffered extent.
    #[error("Lines starting at {actual} do not continue the window (expected {expected})")]
    Discontiguous {
        /// Line number that would continue the window.
        expected: LineNumber,
        /// Line number the rejected lines start at.
        actual: LineNumber,
    },
    /// The window would extend past the largest representable line number.
    #[error("{count} lines starting at {start} run past the last addressable line")]
    Overflow { start: LineNumber, count: usize },
}

/// Ordered lines plus the absolute number of the first one.
///
/// `lines[i]` is line `first_line_number + i`. The only mutations are
/// [`append`](Self::append) at the end and [`reset`](Self::reset) to a new start.
/// `first_line_number + len` always fits in a `u64`, so the line after the
/// window is addressable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowBuffer {
    lines: Vec<String>,
    first_line_number: LineNumber,
}

impl Default for WindowBuffer {
    fn default() -> Self {
        Self::new(LineNumber::FIRST)
    }
}

impl WindowBuffer {
    pub fn new(first_line_number: LineNumber) -> Self {
        Self {
            lines: Vec::new(),
            first_line_number,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn first_line_number(&self) -> LineNumber {
        self.first_line_number
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Absolute number of the last buffered line, if any.
    pub fn last_line_number(&self) -> Option<LineNumber> {
        let len = self.lines.len() as u64;
        if len == 0 {
            return None;
        }
        let last = self.first_line_number.get().checked_add(len - 1)?;
        LineNumber::new(last).ok()
    }

    /// Line number an append must start at to keep the window gap-free.
    pub fn next_line_number(&self) -> LineNumber {
        self.first_line_number
            .get()
            .checked_add(self.lines.len() as u64)
            .and_then(|next| LineNumber::new(next).ok())
            .unwrap_or(self.first_line_number)
    }

    /// Absolute line number and text at buffer offset `index`.
    pub fn get(&self, index: usize) -> Option<(LineNumber, &str)> {
        let text = self.lines.get(index)?;
        let number = self.first_line_number.get().checked_add(index as u64)?;
        let number = LineNumber::new(number).ok()?;
        Some((number, text.as_str()))
    }

    /// Extend the window with lines starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns `WindowError::Discontiguous` unless `start` is exactly
    /// [`next_line_number`](Self::next_line_number), and `WindowError::Overflow`
    /// when the line after the new end would exceed `u64::MAX`. The buffer is
    /// unchanged on error.
    pub fn append(&mut self, start: LineNumber, lines: Vec<String>) -> Result<(), WindowError> {
        let expected = self.next_line_number();
        if start != expected {
            return Err(WindowError::Discontiguous {
                expected,
                actual: start,
            });
        }
        let fits = u64::try_from(lines.len())
            .ok()
            .and_then(|count| start.get().checked_add(count))
            .is_some();
        if !fits {
            return Err(WindowError::Overflow {
                start,
                count: lines.len(),
            });
        }
        self.lines.extend(lines);
        Ok(())
    }

    /// Discard every line and restart the window at `start`.
    pub fn reset(&mut self, start: LineNumber) {
        self.lines.clear();
        self.first_line_number = start;
    }
}
