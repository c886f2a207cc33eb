//! Status bar: window range, fetch state and key hints.

use crate::state::{AppState, FocusPane, PaginationController, Phase, WindowBuffer};
use crate::view::styles::ViewStyles;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// `lines A–B` for a non-empty window, `no lines` otherwise.
pub fn range_label(window: &WindowBuffer) -> String {
    match window.last_line_number() {
        Some(last) => format!("lines {}–{}", window.first_line_number(), last),
        None => "no lines".to_string(),
    }
}

/// Fetch state text for the current controller phase.
pub fn status_text(pagination: &PaginationController) -> String {
    let range = range_label(pagination.window());
    match pagination.phase() {
        Phase::Idle => "No log selected".to_string(),
        Phase::Loading => format!("{} · loading…", range),
        Phase::Ready => format!("{} · scroll for more", range),
        Phase::Exhausted => format!("{} · end of file", range),
        Phase::Failed => match pagination.last_error() {
            Some(err) => format!("{} · {} · press r to retry", range, err),
            None => format!("{} · fetch failed · press r to retry", range),
        },
    }
}

/// Key hints for the focused pane and current fetch phase.
///
/// `:` and `r` work from either pane, so they are listed whenever the
/// controller would act on them.
pub fn key_hints(state: &AppState) -> String {
    if state.jump.is_active() {
        return "Enter go · Esc cancel".to_string();
    }
    let mut hints = match state.focus {
        FocusPane::Catalog => vec!["j/k move", "Enter open", "R reload"],
        FocusPane::Content => vec!["j/k scroll", "g/G top/bottom"],
    };
    let phase = state.pagination.phase();
    if phase != Phase::Idle {
        hints.push(": go to line");
    }
    if phase == Phase::Failed {
        hints.push("r retry");
    }
    hints.push(match state.focus {
        FocusPane::Catalog => "Tab content",
        FocusPane::Content => "Tab logs",
    });
    hints.push("q quit");
    hints.join(" · ")
}

pub fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, styles: &ViewStyles) {
    let line = Line::from(vec![
        Span::styled(
            status_text(&state.pagination),
            styles.for_phase(state.pagination.phase()),
        ),
        Span::raw("  "),
        Span::styled(key_hints(state), styles.hint),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
