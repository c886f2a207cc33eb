//! Scroll sentinel: turns "the last line became visible" into `load_more`.
//!
//! The sentinel observes exactly one anchor, the last buffered line of the current
//! window. It is re-attached after every append and detached whenever the window
//! is reset, so a visibility signal for a line that is no longer last (or that
//! belongs to a previous log) never triggers a fetch.

use crate::model::{FetchRequest, Generation, LineNumber};
use crate::state::pagination::{PaginationController, Phase};
use tracing::trace;

/// The line the sentinel is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub generation: Generation,
    pub line: LineNumber,
}

#[derive(Debug, Clone, Default)]
pub struct ScrollSentinel {
    anchor: Option<Anchor>,
}

impl ScrollSentinel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn anchor(&self) -> Option<Anchor> {
        self.anchor
    }

    /// Re-attach to the controller's current last line, or detach if there is none.
    ///
    /// Call after every controller transition.
    pub fn sync(&mut self, controller: &PaginationController) {
        let anchor = match controller.phase() {
            Phase::Idle => None,
            _ => controller.window().last_line_number().map(|line| Anchor {
                generation: controller.generation(),
                line,
            }),
        };
        if anchor != self.anchor {
            trace!(?anchor, "Sentinel re-attached");
        }
        self.anchor = anchor;
    }

    /// Release the current anchor.
    pub fn detach(&mut self) {
        self.anchor = None;
    }

    /// Handle a visibility signal for `line`.
    ///
    /// Calls `load_more` only when `line` is the attached anchor of the current
    /// generation and the controller is `Ready`; every other signal is dropped.
    pub fn on_visible(
        &mut self,
        line: LineNumber,
        controller: &mut PaginationController,
    ) -> Option<FetchRequest> {
        let anchor = self.anchor?;
        if anchor.line != line || anchor.generation != controller.generation() {
            trace!(?anchor, %line, "Dropping signal for detached anchor");
            return None;
        }
        if controller.phase() != Phase::Ready {
            trace!(phase = ?controller.phase(), "Dropping signal while not ready");
            return None;
        }
        controller.load_more()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FetchCompletion, LinePage, LogFile, LogId, PageSize};
    use chrono::Utc;

    fn line(n: u64) -> LineNumber {
        LineNumber::new(n).unwrap()
    }

    fn log_file(id: &str) -> LogFile {
        LogFile::new(id, LogId::new(id).unwrap(), 0, Utc::now())
    }

    fn complete(c: &mut PaginationController, request: FetchRequest, n: u64) {
        let start = request.start_line.get();
        let lines = (start..start + n).map(|i| i.to_string()).collect();
        let count = request.count;
        c.on_fetch_complete(FetchCompletion {
            request,
            result: Ok(LinePage::new(lines, count)),
        });
    }

    /// Controller holding a ready first page, with the sentinel synced.
    fn ready_pair() -> (PaginationController, ScrollSentinel) {
        let mut c = PaginationController::new(PageSize::DEFAULT);
        let mut s = ScrollSentinel::new();
        let request = c.select_log(log_file("fileX"));
        s.sync(&c);
        complete(&mut c, request, 100);
        s.sync(&c);
        (c, s)
    }

    #[test]
    fn detached_when_idle() {
        let c = PaginationController::new(PageSize::DEFAULT);
        let mut s = ScrollSentinel::new();
        s.sync(&c);
        assert_eq!(s.anchor(), None);
    }

    #[test]
    fn attaches_to_last_line_after_append() {
        let (c, s) = ready_pair();
        assert_eq!(
            s.anchor(),
            Some(Anchor {
                generation: c.generation(),
                line: line(100)
            })
        );
    }

    #[test]
    fn visible_anchor_triggers_load_more() {
        let (mut c, mut s) = ready_pair();
        let request = s.on_visible(line(100), &mut c).expect("should load more");
        assert_eq!(request.start_line, line(101));
        assert_eq!(c.phase(), Phase::Loading);
    }

    #[test]
    fn non_anchor_line_is_ignored() {
        let (mut c, mut s) = ready_pair();
        assert_eq!(s.on_visible(line(99), &mut c), None);
        assert_eq!(c.phase(), Phase::Ready);
    }

    #[test]
    fn signal_while_loading_does_not_double_trigger() {
        let (mut c, mut s) = ready_pair();
        assert!(s.on_visible(line(100), &mut c).is_some());
        assert_eq!(s.on_visible(line(100), &mut c), None);
    }

    #[test]
    fn reattaches_to_new_last_line() {
        let (mut c, mut s) = ready_pair();
        let request = s.on_visible(line(100), &mut c).unwrap();
        complete(&mut c, request, 100);
        s.sync(&c);

        assert_eq!(s.anchor().map(|a| a.line), Some(line(200)));
        assert_eq!(s.on_visible(line(100), &mut c), None, "old anchor released");
        assert!(s.on_visible(line(200), &mut c).is_some());
    }

    #[test]
    fn detaches_when_log_changes() {
        let (mut c, mut s) = ready_pair();
        c.select_log(log_file("fileY"));
        s.sync(&c);
        assert_eq!(s.anchor(), None);
    }

    #[test]
    fn unsynced_anchor_from_old_generation_is_ignored() {
        let (mut c, mut s) = ready_pair();
        let request = c.select_log(log_file("fileY"));
        complete(&mut c, request, 100);
        // No sync: the sentinel still holds fileX's anchor
        assert_eq!(s.on_visible(line(100), &mut c), None);
    }

    #[test]
    fn exhausted_window_stays_attached_but_never_fetches() {
        let mut c = PaginationController::new(PageSize::DEFAULT);
        let mut s = ScrollSentinel::new();
        let request = c.select_log(log_file("fileX"));
        complete(&mut c, request, 37);
        s.sync(&c);

        assert_eq!(s.anchor().map(|a| a.line), Some(line(37)));
        assert_eq!(s.on_visible(line(37), &mut c), None);
    }

    #[test]
    fn explicit_detach_drops_signals() {
        let (mut c, mut s) = ready_pair();
        s.detach();
        assert_eq!(s.on_visible(line(100), &mut c), None);
    }
}
