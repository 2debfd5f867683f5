//! `pwseal completions` — print a shell completion script to stdout.
//!
//!   pwseal completions bash > ~/.local/share/bash-completion/completions/pwseal
//!   pwseal completions zsh > "${fpath[1]}/_pwseal"

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::errors::{PwSealError, Result};

/// Accepted spellings, lowercase.
const SHELLS: &[(&str, Shell)] = &[
    ("bash", Shell::Bash),
    ("zsh", Shell::Zsh),
    ("fish", Shell::Fish),
    ("powershell", Shell::PowerShell),
    ("pwsh", Shell::PowerShell),
    ("elvish", Shell::Elvish),
];

/// Execute the `completions` command.
pub fn execute(shell: &str) -> Result<()> {
    let shell = shell_by_name(shell)?;
    let mut cmd = Cli::command();
    let bin = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin, &mut std::io::stdout());
    Ok(())
}

fn shell_by_name(name: &str) -> Result<Shell> {
    let wanted = name.to_ascii_lowercase();
    SHELLS
        .iter()
        .find(|(alias, _)| *alias == wanted)
        .map(|(_, shell)| *shell)
        .ok_or_else(|| {
            PwSealError::CommandFailed(format!(
                "unknown shell '{name}' — supported: bash, zsh, fish, powershell, elvish"
            ))
        })
}
