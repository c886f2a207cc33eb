//! Core identifier and line-number newtypes with smart constructors.
//!
//! Raw constructors are never exported - use smart constructors only.

use crate::model::error::InvalidJumpTarget;
use std::fmt;

/// Opaque identifier of a log file, as understood by the content service.
///
/// For the HTTP service this is the on-disk filename (`build_2024.log`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LogId(String);

impl LogId {
    /// Smart constructor: validates non-empty identifier
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidLogId> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(InvalidLogId::Empty);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A 1-based absolute line number.
///
/// Zero is unrepresentable; every constructor rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineNumber(u64);

impl LineNumber {
    /// The first line of every log.
    pub const FIRST: LineNumber = LineNumber(1);

    /// Smart constructor: validates `n >= 1`.
    pub fn new(n: u64) -> Result<Self, InvalidJumpTarget> {
        if n == 0 {
            return Err(InvalidJumpTarget::NotPositive);
        }
        Ok(Self(n))
    }

    /// Parse user-typed text ("250", " 42 ") into a line number.
    ///
    /// Rejects empty, non-numeric, zero and negative input.
    pub fn parse(text: &str) -> Result<Self, InvalidJumpTarget> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(InvalidJumpTarget::Empty);
        }
        if let Some(rest) = trimmed.strip_prefix('-') {
            if !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()) {
                return Err(InvalidJumpTarget::NotPositive);
            }
        }
        let n: u64 = trimmed
            .parse()
            .map_err(|_| InvalidJumpTarget::NotANumber(trimmed.to_string()))?;
        Self::new(n)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for LineNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of lines requested per fetch.
///
/// Resolved once at startup and never changed for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(u64);

impl PageSize {
    /// Default lines per page.
    pub const DEFAULT: PageSize = PageSize(100);

    /// Smart constructor: validates a non-zero page size.
    pub fn new(lines: u64) -> Result<Self, InvalidPageSize> {
        if lines == 0 {
            return Err(InvalidPageSize::Zero);
        }
        Ok(Self(lines))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ===== Error Types =====

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidLogId {
    #[error("Log ID cannot be empty")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPageSize {
    #[error("Page size must be at least 1 line")]
    Zero,
}

// ===== Tests =====
