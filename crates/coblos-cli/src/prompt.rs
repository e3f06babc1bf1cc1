use anyhow::{Context, Result};
use console::style;
use dialoguer::{Confirm, Input, Password, theme::ColorfulTheme};
use std::env;
use std::sync::Mutex;

/// Switches the CLI to scripted prompt answers
pub const TEST_MODE_ENV: &str = "COBLOS_TEST_MODE";
/// Comma-separated yes/no answers, e.g. `y,n`
pub const MOCK_CONFIRM_ENV: &str = "COBLOS_MOCK_CONFIRM";
/// Comma-separated text answers for input and password prompts
pub const MOCK_INPUT_ENV: &str = "COBLOS_MOCK_INPUT";

pub trait Prompter {
    fn confirm(&self, prompt: &str, yes_label: &str, no_label: &str) -> Result<bool>;
    fn input(&self, prompt: &str) -> Result<String>;
    fn password(&self, prompt: &str) -> Result<String>;
}

pub struct RealPrompter;

impl Prompter for RealPrompter {
    fn confirm(&self, prompt: &str, yes_label: &str, no_label: &str) -> Result<bool> {
        Confirm::with_theme(&prompt_theme())
            .with_prompt(format!("{} [{} / {}]", prompt, yes_label, no_label))
            .default(false)
            .interact()
            .context("Failed to interact with confirm prompt")
    }

    fn input(&self, prompt: &str) -> Result<String> {
        Input::<String>::with_theme(&prompt_theme())
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .context("Failed to read from terminal")
    }

    fn password(&self, prompt: &str) -> Result<String> {
        Password::with_theme(&prompt_theme())
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
            .context("Failed to read password")
    }
}

pub struct TestPrompter {
    confirm_responses: Mutex<Vec<bool>>,
    input_responses: Mutex<Vec<String>>,
}

impl TestPrompter {
    pub fn new(confirm_csv: &str, input_csv: &str) -> Self {
        let confirm_responses = confirm_csv
            .split(',')
            .filter_map(|s| match s.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" | "1" | "true" => Some(true),
                "n" | "no" | "0" | "false" => Some(false),
                _ => None,
            })
            .collect::<Vec<_>>();

        let input_responses = input_csv
            .split(',')
            .filter_map(|s| {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            })
            .collect::<Vec<_>>();

        Self {
            confirm_responses: Mutex::new(confirm_responses),
            input_responses: Mutex::new(input_responses),
        }
    }

    pub fn from_env() -> Self {
        Self::new(
            &env::var(MOCK_CONFIRM_ENV).unwrap_or_default(),
            &env::var(MOCK_INPUT_ENV).unwrap_or_default(),
        )
    }

    fn next_input(&self, prompt: &str) -> Result<String> {
        let mut responses = self
            .input_responses
            .lock()
            .map_err(|_| anyhow::anyhow!("Mock input responses poisoned"))?;
        if responses.is_empty() {
            anyhow::bail!("No more mock input responses for prompt: {}", prompt);
        }
        Ok(responses.remove(0))
    }
}

impl Prompter for TestPrompter {
    fn confirm(&self, prompt: &str, _yes_label: &str, _no_label: &str) -> Result<bool> {
        let mut responses = self
            .confirm_responses
            .lock()
            .map_err(|_| anyhow::anyhow!("Mock confirm responses poisoned"))?;
        if responses.is_empty() {
            anyhow::bail!("No more mock confirm responses for prompt: {}", prompt);
        }
        Ok(responses.remove(0))
    }

    fn input(&self, prompt: &str) -> Result<String> {
        self.next_input(prompt)
    }

    fn password(&self, prompt: &str) -> Result<String> {
        self.next_input(prompt)
    }
}

/// Pick the prompter for this process: scripted under test mode,
/// interactive otherwise.
pub fn prompter() -> Box<dyn Prompter> {
    if env::var_os(TEST_MODE_ENV).is_some() {
        Box::new(TestPrompter::from_env())
    } else {
        Box::new(RealPrompter)
    }
}

fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("?".to_string()).cyan().bold(),
        success_prefix: style("✔".to_string()).green(),
        ..ColorfulTheme::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_confirms_in_order() {
        let prompter = TestPrompter::new("y, n ,yes", "");
        assert!(prompter.confirm("a", "Yakin", "Batal").unwrap());
        assert!(!prompter.confirm("b", "Yakin", "Batal").unwrap());
        assert!(prompter.confirm("c", "Yakin", "Batal").unwrap());
        assert!(prompter.confirm("d", "Yakin", "Batal").is_err());
    }

    #[test]
    fn test_scripted_inputs_shared_with_password() {
        let prompter = TestPrompter::new("", "Rian,rian@kampus.id,rahasia");
        assert_eq!(prompter.input("Name").unwrap(), "Rian");
        assert_eq!(prompter.input("Email").unwrap(), "rian@kampus.id");
        assert_eq!(prompter.password("Password").unwrap(), "rahasia");
        assert!(prompter.input("More").is_err());
    }
}
