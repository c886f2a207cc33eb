//! Page-boundary arithmetic for go-to-line.

use crate::model::{LineNumber, PageSize};

/// Map a requested line to the first line of the page containing it.
///
/// The result is always `≡ 1 (mod page_size)` and satisfies
/// `start <= n < start + page_size`.
///
/// ```
/// use rlv::model::{LineNumber, PageSize};
/// use rlv::state::page::resolve_jump;
///
/// let start = resolve_jump(LineNumber::new(250).unwrap(), PageSize::DEFAULT);
/// assert_eq!(start.get(), 201);
/// ```
pub fn resolve_jump(n: LineNumber, page_size: PageSize) -> LineNumber {
    let size = page_size.get();
    let start = (n.get() - 1) / size * size + 1;
    // start >= 1 by construction
    LineNumber::new(start).unwrap_or(LineNumber::FIRST)
}
