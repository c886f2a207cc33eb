//! Screen layout: header, catalog and content panes, status bar.

use crate::state::AppState;
use crate::view::catalog_list::render_catalog;
use crate::view::constants::{BORDER_SIZE, CATALOG_WIDTH_PERCENT, HEADER_HEIGHT, STATUS_BAR_HEIGHT};
use crate::view::log_pane::render_log_pane;
use crate::view::status_bar::render_status_bar;
use crate::view::styles::ViewStyles;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub header: Rect,
    pub catalog: Rect,
    pub content: Rect,
    pub status: Rect,
}

/// Split the frame into its panes.
pub fn screen_areas(frame_area: Rect) -> ScreenAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame_area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(CATALOG_WIDTH_PERCENT),
            Constraint::Min(0),
        ])
        .split(rows[1]);

    ScreenAreas {
        header: rows[0],
        catalog: columns[0],
        content: columns[1],
        status: rows[2],
    }
}

/// Number of log lines that fit in the content pane.
pub fn content_viewport_height(frame_area: Rect) -> usize {
    screen_areas(frame_area)
        .content
        .height
        .saturating_sub(BORDER_SIZE) as usize
}

pub fn render_layout(frame: &mut Frame, state: &AppState, styles: &ViewStyles) {
    let areas = screen_areas(frame.area());

    render_header(frame, areas.header, state, styles);
    render_catalog(frame, areas.catalog, state, styles);
    render_log_pane(frame, areas.content, state, styles);
    render_status_bar(frame, areas.status, state, styles);
}

/// Header spans: source, selected log, and the go-to-line editor when open.
pub fn header_line<'a>(state: &'a AppState, styles: &ViewStyles) -> Line<'a> {
    let mut spans = vec![
        Span::styled(" rlv ", styles.header),
        Span::styled(state.source_label.as_str(), styles.hint),
    ];

    if let Some(log) = state.pagination.selected_log() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(log.name(), styles.header));
    }

    if state.jump.is_active() {
        spans.push(Span::raw(" │ Go to line: "));
        spans.push(Span::raw(state.jump.text()));
        spans.push(Span::styled("▏", styles.hint));
        if let Some(err) = state.jump.error() {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(err.to_string(), styles.error));
        }
    }

    Line::from(spans)
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState, styles: &ViewStyles) {
    frame.render_widget(Paragraph::new(header_line(state, styles)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PageSize;
    use crate::state::JumpInput;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn areas_stack_header_body_status() {
        let areas = screen_areas(Rect::new(0, 0, 100, 30));
        assert_eq!(areas.header.height, 1);
        assert_eq!(areas.status.height, 1);
        assert_eq!(areas.status.y, 29);
        assert_eq!(areas.catalog.height, 28);
        assert_eq!(areas.catalog.width + areas.content.width, 100);
        assert_eq!(areas.content.x, areas.catalog.width);
    }

    #[test]
    fn viewport_excludes_borders() {
        assert_eq!(content_viewport_height(Rect::new(0, 0, 100, 30)), 26);
    }

    #[test]
    fn tiny_terminal_has_zero_viewport() {
        assert_eq!(content_viewport_height(Rect::new(0, 0, 10, 2)), 0);
    }

    #[test]
    fn header_shows_jump_editor_and_error() {
        let mut state = AppState::new(PageSize::DEFAULT, "http://logs/");
        state.jump = JumpInput::open().push_char('x');
        let (jump, _) = std::mem::take(&mut state.jump).submit();
        state.jump = jump;

        let text = line_text(&header_line(&state, &ViewStyles::default()));
        insta::assert_snapshot!(text.trim_start(), @r#"rlv http://logs/ │ Go to line: x▏  Not a line number: "x""#);
    }
}
