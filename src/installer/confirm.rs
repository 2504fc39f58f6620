use crate::error::Result;

/// Yes/no question asked before destructive operations.
pub trait ConfirmPrompt {
    fn confirm(&mut self, question: &str) -> Result<bool>;
}

/// Only a literal `y` (any case, surrounding whitespace ignored) confirms.
pub fn is_confirmation(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Answers every question the same way. Used for `--yes` and in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl ConfirmPrompt for FixedAnswer {
    fn confirm(&mut self, _question: &str) -> Result<bool> {
        Ok(self.0)
    }
}
