//! Shell completions generation.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::ChronoError;

const BIN_NAME: &str = "chronowavel";

/// Generate the completion script for `shell`.
///
/// # Errors
///
/// Returns `ChronoError::InvalidInput` if the generated script is not UTF-8.
pub fn completions(shell: Shell) -> Result<String, ChronoError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, BIN_NAME, &mut buf);
    String::from_utf8(buf).map_err(|e| ChronoError::InvalidInput(format!("UTF-8 error: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_bash_completions() {
        let script = completions(Shell::Bash).unwrap();
        assert!(script.contains("chronowavel"));
        assert!(script.contains("complete"));
    }

    #[test]
    fn test_generate_zsh_completions() {
        let script = completions(Shell::Zsh).unwrap();
        assert!(script.contains("#compdef chronowavel"));
    }

    #[test]
    fn test_generate_fish_completions() {
        let script = completions(Shell::Fish).unwrap();
        assert!(script.contains("complete -c chronowavel"));
    }
}
