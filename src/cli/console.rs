use colored::*;
use std::io::{self, Write};

use crate::dispatcher::Dispatch;
use crate::permissions::PermissionPrompt;

/// Console handles terminal I/O for the simulator with colored formatting
pub struct Console {
    prompt_color: Color,
    outcome_color: Color,
}

impl Console {
    /// Create a new Console with default colors
    pub fn new() -> Self {
        Self {
            prompt_color: Color::Cyan,
            outcome_color: Color::Green,
        }
    }

    /// Create a new Console with custom colors
    pub fn with_colors(prompt_color: Color, outcome_color: Color) -> Self {
        Self {
            prompt_color,
            outcome_color,
        }
    }

    /// Print the outcome of dispatching a method
    pub fn print_dispatch(&self, method: &str, outcome: &Dispatch) {
        println!(
            "{} {}",
            format!("{}:", method).color(self.outcome_color).bold(),
            describe_dispatch(outcome)
        );
    }

    /// Print that an action actually ran
    pub fn print_executed(&self, action: &str) {
        println!(
            "{} {}",
            "Executed:".color(self.outcome_color).bold(),
            action.color(self.outcome_color)
        );
    }

    /// Print the permissions the user denied
    pub fn print_denied(&self, permissions: &[String]) {
        println!("{} {}", "Denied:".red().bold(), permissions.join(", "));
    }

    /// Print a system message (errors, info, etc.)
    pub fn print_system(&self, message: &str) {
        println!("{} {}", "System:".yellow().bold(), message);
    }

    /// Print an error message
    pub fn print_error(&self, error: &str) {
        eprintln!("{} {}", "Error:".red().bold(), error);
    }

    /// Show a permission prompt and read a yes/no answer
    pub fn ask_permission(&self, prompt: &PermissionPrompt) -> io::Result<bool> {
        print!(
            "{} allow {}? [y/N] ",
            "Permission:".color(self.prompt_color).bold(),
            prompt.permission
        );
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        Ok(parse_answer(&input))
    }

    /// Print a welcome banner
    pub fn print_banner(&self) {
        println!("{}", "=".repeat(60).bright_blue());
        println!("{}", "  SMS permission gate simulator".bright_blue().bold());
        println!("{}", "=".repeat(60).bright_blue());
        println!();
    }

    /// Print a separator line
    pub fn print_separator(&self) {
        println!("{}", "-".repeat(60).bright_black());
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

fn describe_dispatch(outcome: &Dispatch) -> String {
    match outcome {
        Dispatch::Executed => "executed".to_string(),
        Dispatch::Deferred { token } => format!("waiting for permission (token {})", token),
        Dispatch::Ignored => "unknown method, ignored".to_string(),
        Dispatch::Unavailable => "no permission host attached".to_string(),
        Dispatch::Rejected { pending } => format!("rejected, {} still pending", pending),
    }
}

fn parse_answer(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::SmsAction;

    #[test]
    fn test_parse_answer() {
        assert!(parse_answer("y\n"));
        assert!(parse_answer(" YES "));
        assert!(!parse_answer(""));
        assert!(!parse_answer("n"));
    }

    #[test]
    fn test_describe_dispatch() {
        assert_eq!(
            describe_dispatch(&Dispatch::Deferred { token: 2 }),
            "waiting for permission (token 2)"
        );
        assert_eq!(
            describe_dispatch(&Dispatch::Rejected {
                pending: SmsAction::GetInbox
            }),
            "rejected, getInbox still pending"
        );
    }
}
