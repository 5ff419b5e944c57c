//! Yes/no confirmation before destructive local actions.

use std::io::{self, BufRead, Write};

/// Asks the operator to confirm an action.
pub trait Confirm {
    /// Returns `true` if the operator agreed.
    ///
    /// # Errors
    /// Returns an error if the answer could not be read.
    fn confirm(&self, prompt: &str) -> io::Result<bool>;
}

impl<C: Confirm + ?Sized> Confirm for &C {
    fn confirm(&self, prompt: &str) -> io::Result<bool> {
        (**self).confirm(prompt)
    }
}

impl<C: Confirm + ?Sized> Confirm for Box<C> {
    fn confirm(&self, prompt: &str) -> io::Result<bool> {
        (**self).confirm(prompt)
    }
}

/// Interactive prompt on stderr, answered on stdin. Anything but `y`/`yes`
/// declines.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> io::Result<bool> {
        let mut stderr = io::stderr().lock();
        write!(stderr, "? {prompt} [y/N] ")?;
        stderr.flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;

        Ok(is_yes(&answer))
    }
}

/// Non-interactive answer, used for `--yes` and in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl Confirm for FixedAnswer {
    fn confirm(&self, _prompt: &str) -> io::Result<bool> {
        Ok(self.0)
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
