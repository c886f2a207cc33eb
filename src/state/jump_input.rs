//! Go-to-line input state.
//!
//! Input is validated on submit. Rejected input stays in the editor with an
//! error message and never reaches the pagination controller.

use crate::model::{InvalidJumpTarget, LineNumber};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum JumpInput {
    /// Input closed.
    #[default]
    Inactive,
    /// User is typing a line number.
    Editing {
        text: String,
        /// Why the last submit was rejected, cleared on the next edit.
        error: Option<InvalidJumpTarget>,
    },
}

impl JumpInput {
    /// Open an empty editor.
    pub fn open() -> Self {
        JumpInput::Editing {
            text: String::new(),
            error: None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, JumpInput::Editing { .. })
    }

    /// Current text, empty when inactive.
    pub fn text(&self) -> &str {
        match self {
            JumpInput::Inactive => "",
            JumpInput::Editing { text, .. } => text,
        }
    }

    pub fn error(&self) -> Option<&InvalidJumpTarget> {
        match self {
            JumpInput::Inactive => None,
            JumpInput::Editing { error, .. } => error.as_ref(),
        }
    }

    pub fn push_char(self, ch: char) -> Self {
        match self {
            JumpInput::Inactive => JumpInput::Inactive,
            JumpInput::Editing { mut text, .. } => {
                text.push(ch);
                JumpInput::Editing { text, error: None }
            }
        }
    }

    pub fn backspace(self) -> Self {
        match self {
            JumpInput::Inactive => JumpInput::Inactive,
            JumpInput::Editing { mut text, .. } => {
                text.pop();
                JumpInput::Editing { text, error: None }
            }
        }
    }

    /// Validate the typed text.
    ///
    /// On success the editor closes and the line number is returned.
    /// On failure the editor stays open with the error recorded.
    pub fn submit(self) -> (Self, Option<LineNumber>) {
        match self {
            JumpInput::Inactive => (JumpInput::Inactive, None),
            JumpInput::Editing { text, .. } => match LineNumber::parse(&text) {
                Ok(line) => (JumpInput::Inactive, Some(line)),
                Err(error) => (
                    JumpInput::Editing {
                        text,
                        error: Some(error),
                    },
                    None,
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> JumpInput {
        s.chars().fold(JumpInput::open(), JumpInput::push_char)
    }

    #[test]
    fn inactive_ignores_typing() {
        let input = JumpInput::Inactive.push_char('4');
        assert_eq!(input, JumpInput::Inactive);
        assert_eq!(input.text(), "");
    }

    #[test]
    fn typing_accumulates_text() {
        assert_eq!(typed("250").text(), "250");
    }

    #[test]
    fn backspace_removes_last_char() {
        assert_eq!(typed("250").backspace().text(), "25");
        assert_eq!(JumpInput::open().backspace().text(), "");
    }

    #[test]
    fn valid_submit_closes_editor() {
        let (input, line) = typed("250").submit();
        assert_eq!(input, JumpInput::Inactive);
        assert_eq!(line.map(LineNumber::get), Some(250));
    }

    #[test]
    fn invalid_submit_keeps_editor_with_error() {
        let (input, line) = typed("abc").submit();
        assert_eq!(line, None);
        assert!(input.is_active());
        assert_eq!(input.text(), "abc");
        assert_eq!(
            input.error(),
            Some(&InvalidJumpTarget::NotANumber("abc".to_string()))
        );
    }

    #[test]
    fn zero_is_rejected() {
        let (input, line) = typed("0").submit();
        assert_eq!(line, None);
        assert_eq!(input.error(), Some(&InvalidJumpTarget::NotPositive));
    }

    #[test]
    fn empty_submit_is_rejected() {
        let (input, line) = JumpInput::open().submit();
        assert_eq!(line, None);
        assert_eq!(input.error(), Some(&InvalidJumpTarget::Empty));
    }

    #[test]
    fn editing_clears_previous_error() {
        let (input, _) = typed("x").submit();
        let input = input.backspace().push_char('7');
        assert_eq!(input.error(), None);
        assert_eq!(input.text(), "7");
    }
}
