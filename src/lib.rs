//! Remote Log Viewer (rlv)
//!
//! TUI application for paging through large log files served by a log service
//! (or read from a local directory) without loading them whole.
//!
//! The library follows a Pure Core / Impure Shell split: `model` and `state`
//! are pure and fully testable, while `source` and `view` do I/O.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
