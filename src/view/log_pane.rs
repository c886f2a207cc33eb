//! Content pane: the buffered window of the selected log with a line-number gutter.

use crate::state::{AppState, FocusPane, Phase, WindowBuffer};
use crate::view::constants::{GUTTER_SEPARATOR, NO_CONTENT_PLACEHOLDER, SELECT_LOG_PLACEHOLDER};
use crate::view::styles::ViewStyles;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

/// Digits needed for the largest line number in the window.
pub fn gutter_width(window: &WindowBuffer) -> usize {
    window
        .last_line_number()
        .map(|n| n.get().to_string().len())
        .unwrap_or(1)
}

/// Build the visible rows, `height` lines starting at window index `offset`.
pub fn visible_lines<'a>(
    window: &'a WindowBuffer,
    offset: usize,
    height: usize,
    styles: &ViewStyles,
) -> Vec<Line<'a>> {
    let width = gutter_width(window);
    (offset..offset.saturating_add(height))
        .map_while(|index| window.get(index))
        .map(|(number, text)| {
            Line::from(vec![
                Span::styled(format!("{:>width$}", number.get()), styles.gutter),
                Span::styled(GUTTER_SEPARATOR, styles.gutter),
                Span::raw(text),
            ])
        })
        .collect()
}

/// Message for a window with nothing to show, or `None` when lines are buffered.
pub fn placeholder(state: &AppState) -> Option<String> {
    let pagination = &state.pagination;
    if !pagination.window().is_empty() {
        return None;
    }
    let text = match pagination.phase() {
        Phase::Idle => SELECT_LOG_PLACEHOLDER.to_string(),
        Phase::Loading => "Loading…".to_string(),
        Phase::Failed => match pagination.last_error() {
            Some(err) => err.to_string(),
            None => NO_CONTENT_PLACEHOLDER.to_string(),
        },
        Phase::Ready | Phase::Exhausted => NO_CONTENT_PLACEHOLDER.to_string(),
    };
    Some(text)
}

pub fn render_log_pane(frame: &mut Frame, area: Rect, state: &AppState, styles: &ViewStyles) {
    let title = match state.pagination.selected_log() {
        Some(log) => format!(" {} ", log.name()),
        None => " Content ".to_string(),
    };
    let block = Block::bordered()
        .title(title)
        .border_style(styles.border(state.focus == FocusPane::Content));
    let inner_height = block.inner(area).height as usize;

    let paragraph = match placeholder(state) {
        Some(text) => {
            let style = match state.pagination.phase() {
                Phase::Failed => styles.error,
                Phase::Loading => styles.loading,
                _ => styles.hint,
            };
            Paragraph::new(Span::styled(text, style))
        }
        None => {
            let mut lines = visible_lines(
                state.pagination.window(),
                state.scroll_offset,
                inner_height,
                styles,
            );
            // Trailing marker makes a load in progress visible at the bottom of the buffer
            if state.pagination.is_loading() && lines.len() < inner_height {
                lines.push(Line::from(Span::styled("Loading more…", styles.loading)));
            }
            Paragraph::new(lines)
        }
    };

    frame.render_widget(paragraph.block(block), area);
}
