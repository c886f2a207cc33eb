//! Vertical scrolling keyboard action handler.
//!
//! Pure function that updates AppState in response to scroll actions.
//! The offset is clamped so the last buffered line can sit at the bottom of the
//! viewport but never higher.

use crate::model::KeyAction;
use crate::state::AppState;

/// Handle a scroll keyboard action.
///
/// # Arguments
/// * `state` - Application state to update
/// * `action` - The scroll action to handle
/// * `viewport_height` - Height of the visible content area (for page scrolling)
///
/// Non-scroll actions are ignored.
pub fn handle_scroll_action(state: &mut AppState, action: KeyAction, viewport_height: usize) {
    let max_offset = state
        .pagination
        .window()
        .len()
        .saturating_sub(viewport_height);
    let page = viewport_height.max(1);
    let offset = state.scroll_offset;

    let new_offset = match action {
        KeyAction::ScrollUp => offset.saturating_sub(1),
        KeyAction::ScrollDown => offset.saturating_add(1),
        KeyAction::PageUp => offset.saturating_sub(page),
        KeyAction::PageDown => offset.saturating_add(page),
        KeyAction::ScrollToTop => 0,
        KeyAction::ScrollToBottom => max_offset,
        _ => return,
    };

    state.scroll_offset = new_offset.min(max_offset);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FetchCompletion, LinePage, LogFile, LogId, PageSize};
    use chrono::Utc;

    fn state_with_lines(n: u64) -> AppState {
        let mut state = AppState::new(PageSize::DEFAULT, "test");
        state.apply_catalog(Ok(vec![LogFile::new(
            "a",
            LogId::new("a.log").unwrap(),
            0,
            Utc::now(),
        )]));
        let request = state.select_highlighted().unwrap();
        let count = request.count;
        let lines = (1..=n).map(|i| i.to_string()).collect();
        state.apply_completion(FetchCompletion {
            request,
            result: Ok(LinePage::new(lines, count)),
        });
        state
    }

    #[test]
    fn scroll_down_increments_offset() {
        let mut state = state_with_lines(100);
        handle_scroll_action(&mut state, KeyAction::ScrollDown, 20);
        assert_eq!(state.scroll_offset, 1);
    }

    #[test]
    fn scroll_up_at_top_stays_at_top() {
        let mut state = state_with_lines(100);
        handle_scroll_action(&mut state, KeyAction::ScrollUp, 20);
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn page_down_moves_by_viewport_height() {
        let mut state = state_with_lines(100);
        handle_scroll_action(&mut state, KeyAction::PageDown, 20);
        assert_eq!(state.scroll_offset, 20);
    }

    #[test]
    fn scrolling_clamps_to_last_full_viewport() {
        let mut state = state_with_lines(100);
        for _ in 0..10 {
            handle_scroll_action(&mut state, KeyAction::PageDown, 20);
        }
        assert_eq!(state.scroll_offset, 80);
    }

    #[test]
    fn scroll_to_bottom_and_top() {
        let mut state = state_with_lines(100);
        handle_scroll_action(&mut state, KeyAction::ScrollToBottom, 30);
        assert_eq!(state.scroll_offset, 70);
        handle_scroll_action(&mut state, KeyAction::ScrollToTop, 30);
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn short_window_cannot_scroll() {
        let mut state = state_with_lines(5);
        handle_scroll_action(&mut state, KeyAction::PageDown, 20);
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn non_scroll_action_is_ignored() {
        let mut state = state_with_lines(100);
        state.scroll_offset = 7;
        handle_scroll_action(&mut state, KeyAction::Retry, 20);
        assert_eq!(state.scroll_offset, 7);
    }
}
