// Dweve Blesstest - Declarative Snapshot Test Cases
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Shell completion generation

use crate::error::CliError;
use clap::Command;
use clap_complete::{generate, Shell};

/// Render the completion script of `cmd` for `shell`.
///
/// # Examples
///
/// ```
/// use clap::Command;
/// use clap_complete::Shell;
/// use blesstest_cli::commands::generate_completion_for_command;
///
/// let mut cmd = Command::new("blesstest").subcommand(Command::new("run"));
/// let script = generate_completion_for_command(Shell::Bash, &mut cmd).unwrap();
/// assert!(script.contains("blesstest"));
/// ```
pub fn generate_completion_for_command(shell: Shell, cmd: &mut Command) -> Result<String, CliError> {
    let name = cmd.get_name().to_string();
    let mut buf = Vec::new();
    generate(shell, cmd, name, &mut buf);
    String::from_utf8(buf)
        .map_err(|e| CliError::invalid_input(format!("completion script is not UTF-8: {}", e)))
}

/// Installation instructions for the completion script of `bin`.
pub fn print_installation_instructions(shell: Shell, bin: &str) -> String {
    match shell {
        Shell::Bash => format!(
            "# Bash completion installation:\n\
             \n\
             # For current session only:\n\
             eval \"$({bin} completion bash)\"\n\
             \n\
             # Or save to completions directory:\n\
             {bin} completion bash > ~/.local/share/bash-completion/completions/{bin}\n"
        ),
        Shell::Zsh => format!(
            "# Zsh completion installation:\n\
             \n\
             # Save to a directory in $fpath:\n\
             {bin} completion zsh > ~/.zsh/completions/_{bin}\n"
        ),
        Shell::Fish => format!(
            "# Fish completion installation:\n\
             \n\
             {bin} completion fish > ~/.config/fish/completions/{bin}.fish\n"
        ),
        Shell::PowerShell => format!(
            "# PowerShell completion installation:\n\
             \n\
             # Add this line to $PROFILE:\n\
             {bin} completion powershell | Out-String | Invoke-Expression\n"
        ),
        Shell::Elvish => format!(
            "# Elvish completion installation:\n\
             \n\
             # Add this line to ~/.elvish/rc.elv:\n\
             eval ({bin} completion elvish)\n"
        ),
        _ => format!("# No installation instructions for {}\n", shell),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_installation_instructions_name_the_binary() {
        for shell in [
            Shell::Bash,
            Shell::Zsh,
            Shell::Fish,
            Shell::PowerShell,
            Shell::Elvish,
        ] {
            let text = print_installation_instructions(shell, "blesstest");
            assert!(
                text.contains("blesstest completion"),
                "{:?}: {}",
                shell,
                text
            );
        }
    }

    #[test]
    fn test_zsh_file_name() {
        let text = print_installation_instructions(Shell::Zsh, "blesstest");
        assert!(text.contains("_blesstest"));
    }

    #[test]
    fn test_generate_fish_script() {
        let mut cmd = Command::new("blesstest").subcommand(Command::new("resolve"));
        let script = generate_completion_for_command(Shell::Fish, &mut cmd).unwrap();
        assert!(script.contains("resolve"));
    }
}
