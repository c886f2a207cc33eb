//! Catalog pane: the list of logs on offer.

use crate::model::LogFile;
use crate::state::{AppState, CatalogState, FocusPane};
use crate::view::styles::ViewStyles;
use chrono::{Local, TimeZone};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use std::fmt::Display;

/// Modification time as shown in the catalog, in the given time zone.
pub fn format_modified<Tz>(file: &LogFile, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    file.modified_at()
        .with_timezone(tz)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

/// Second line of a catalog entry: modification time and size.
pub fn catalog_detail<Tz>(file: &LogFile, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("{} · {}", format_modified(file, tz), file.size_label())
}

pub fn render_catalog(frame: &mut Frame, area: Rect, state: &AppState, styles: &ViewStyles) {
    let block = Block::bordered()
        .title(" Logs ")
        .border_style(styles.border(state.focus == FocusPane::Catalog));

    match &state.catalog {
        CatalogState::Loading => {
            let text = Paragraph::new(Span::styled("Loading logs…", styles.loading)).block(block);
            frame.render_widget(text, area);
        }
        CatalogState::Failed(err) => {
            let text = Paragraph::new(vec![
                Line::from(Span::styled(err.to_string(), styles.error)),
                Line::from(Span::styled("Press R to reload", styles.hint)),
            ])
            .wrap(Wrap { trim: true })
            .block(block);
            frame.render_widget(text, area);
        }
        CatalogState::Loaded { files, .. } if files.is_empty() => {
            let text = Paragraph::new(Span::styled("No log files found", styles.hint)).block(block);
            frame.render_widget(text, area);
        }
        CatalogState::Loaded { files, cursor } => {
            let items: Vec<ListItem> = files
                .iter()
                .map(|file| {
                    ListItem::new(vec![
                        Line::from(file.name().to_string()),
                        Line::from(Span::styled(catalog_detail(file, &Local), styles.hint)),
                    ])
                })
                .collect();

            let list = List::new(items)
                .block(block)
                .highlight_style(styles.highlight)
                .highlight_symbol("▶ ");

            let mut list_state = ListState::default().with_selected(Some(*cursor));
            frame.render_stateful_widget(list, area, &mut list_state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LogId;
    use chrono::{DateTime, FixedOffset, Utc};

    fn file() -> LogFile {
        LogFile::new(
            "Build Log 2024",
            LogId::new("build_log_2024.log").unwrap(),
            12_800,
            DateTime::from_timestamp(1_710_936_000, 0).unwrap(),
        )
    }

    #[test]
    fn detail_shows_time_and_size() {
        insta::assert_snapshot!(catalog_detail(&file(), &Utc), @"2024-03-20 12:00 · 12.50 KB");
    }

    #[test]
    fn modified_time_is_converted_to_zone() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(format_modified(&file(), &tz), "2024-03-20 14:00");
    }
}
