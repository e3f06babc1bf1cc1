//! Terminal rendering of the page's dialog, toast and navigation.

use coblos_core::{ClientError, Confirm, Messages, Navigate, Notify};
use colored::Colorize;
use url::Url;

use crate::prompt::Prompter;

pub struct TerminalUi<'a> {
    prompter: &'a dyn Prompter,
    messages: &'a Messages,
    base: &'a Url,
    assume_yes: bool,
}

impl<'a> TerminalUi<'a> {
    pub fn new(
        prompter: &'a dyn Prompter,
        messages: &'a Messages,
        base: &'a Url,
        assume_yes: bool,
    ) -> Self {
        Self {
            prompter,
            messages,
            base,
            assume_yes,
        }
    }
}

impl Confirm for TerminalUi<'_> {
    async fn confirm(&self, title: &str, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        println!("{}", title.bold());
        match self.prompter.confirm(
            message,
            &self.messages.confirm_label,
            &self.messages.cancel_label,
        ) {
            Ok(answer) => answer,
            Err(err) => {
                // A prompt that cannot be answered counts as cancel
                tracing::warn!(error = %err, "confirmation prompt failed");
                false
            }
        }
    }
}

impl Notify for TerminalUi<'_> {
    fn toast(&self, message: &str) {
        println!("{} {}", "»".cyan().bold(), message);
    }
}

impl Navigate for TerminalUi<'_> {
    fn navigate(&self, target: &str) -> coblos_core::Result<()> {
        let url = self
            .base
            .join(target)
            .map_err(|e| ClientError::Navigation(format!("{}: {}", target, e)))?;
        println!("{} {}", "→".green().bold(), url);
        Ok(())
    }
}
