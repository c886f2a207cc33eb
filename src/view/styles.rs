//! Color and emphasis for the log browser panes.

use crate::state::Phase;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    pub fn enabled(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

// ===== ViewStyles =====

/// Styles shared by every pane.
///
/// With colors disabled only modifiers (bold, reversed, dim) remain, so the
/// highlighted row and focused pane are still distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewStyles {
    pub gutter: Style,
    pub highlight: Style,
    pub focused_border: Style,
    pub unfocused_border: Style,
    pub error: Style,
    pub hint: Style,
    pub header: Style,
    pub loading: Style,
}

impl ViewStyles {
    pub fn new(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                gutter: Style::default().fg(Color::DarkGray),
                highlight: Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                focused_border: Style::default().fg(Color::Cyan),
                unfocused_border: Style::default().fg(Color::DarkGray),
                error: Style::default().fg(Color::Red),
                hint: Style::default().fg(Color::DarkGray),
                header: Style::default().add_modifier(Modifier::BOLD),
                loading: Style::default().fg(Color::Yellow),
            }
        } else {
            Self {
                gutter: Style::default().add_modifier(Modifier::DIM),
                highlight: Style::default().add_modifier(Modifier::REVERSED),
                focused_border: Style::default().add_modifier(Modifier::BOLD),
                unfocused_border: Style::default(),
                error: Style::default().add_modifier(Modifier::BOLD),
                hint: Style::default().add_modifier(Modifier::DIM),
                header: Style::default().add_modifier(Modifier::BOLD),
                loading: Style::default(),
            }
        }
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            self.focused_border
        } else {
            self.unfocused_border
        }
    }

    /// Style for the status bar text in a given controller phase.
    pub fn for_phase(&self, phase: Phase) -> Style {
        match phase {
            Phase::Failed => self.error,
            Phase::Loading => self.loading,
            Phase::Idle | Phase::Ready | Phase::Exhausted => self.hint,
        }
    }
}

impl Default for ViewStyles {
    fn default() -> Self {
        Self::new(ColorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_config_respects_no_color_flag() {
        let config = ColorConfig::from_env_and_args(true);
        assert!(!config.colors_enabled(), "--no-color flag should disable colors");
    }

    #[test]
    fn disabled_colors_use_no_foreground() {
        let styles = ViewStyles::new(ColorConfig::enabled(false));
        assert_eq!(styles.error.fg, None);
        assert_eq!(styles.gutter.fg, None);
    }

    #[test]
    fn failed_phase_uses_error_style() {
        let styles = ViewStyles::default();
        assert_eq!(styles.for_phase(Phase::Failed), styles.error);
        assert_eq!(styles.for_phase(Phase::Ready), styles.hint);
    }

    #[test]
    fn border_follows_focus() {
        let styles = ViewStyles::default();
        assert_eq!(styles.border(true), styles.focused_border);
        assert_eq!(styles.border(false), styles.unfocused_border);
    }
}
