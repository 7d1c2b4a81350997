// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fs::File, io, path::PathBuf};

use clap::{ArgMatches, Command, ValueEnum, arg, value_parser};
use clap_complete::generate;

use crate::Cli;

/// Prints the completion script of `mcal` for a shell.
#[derive(Debug, Clone)]
pub struct CmdGenerateCompletion {
    pub shell: Shell,
    pub output: Option<PathBuf>,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Generate shell completion for the specified shell")
            .hide(true)
            .arg(arg!(shell: <SHELL> "The shell to generate for").value_parser(value_parser!(Shell)))
            .arg(
                arg!(-o --output <FILE> "Write the script to a file instead of stdout")
                    .value_parser(value_parser!(PathBuf)),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            shell: matches
                .get_one::<Shell>("shell")
                .copied()
                .unwrap_or(Shell::Bash),
            output: matches.get_one::<PathBuf>("output").cloned(),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating shell completion");
        match &self.output {
            Some(path) => self.shell.generate(&mut File::create(path)?),
            None => self.shell.generate(&mut io::stdout()),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Nushell,
    #[clap(name = "powershell")]
    #[allow(clippy::enum_variant_names)]
    PowerShell,
    Zsh,
}

impl Shell {
    pub fn generate(self, buf: &mut impl io::Write) {
        use clap_complete::Shell as ClapShell;

        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        let shell = match self {
            Shell::Bash => ClapShell::Bash,
            Shell::Elvish => ClapShell::Elvish,
            Shell::Fish => ClapShell::Fish,
            Shell::PowerShell => ClapShell::PowerShell,
            Shell::Zsh => ClapShell::Zsh,
            Shell::Nushell => {
                return generate(clap_complete_nushell::Nushell, &mut cmd, name, buf);
            }
        };
        generate(shell, &mut cmd, name, buf);
    }
}
