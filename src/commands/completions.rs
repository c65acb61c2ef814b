use std::fs::File;
use std::io::Write;
use std::path::Path;

use clap::{Args, CommandFactory, ValueEnum};

use crate::commands::{Executable, GTesterTools, APP_NAME, SUCCESS_STATUS_CODE};
use crate::report::errors::Error;
use crate::report::Result;
use crate::utils::reader::Reader;
use crate::utils::writer::Writer;

const ABOUT: &str = "Generate a completions script for the given shell";
const LOCATION_HELP: &str = "the location where the completions script will be, if no value is present the script will be written to stdout";
const SHELL_HELP: &str = "the shell you are currently running";

#[derive(Copy, Clone, ValueEnum, Debug, Eq, PartialEq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

#[derive(Debug, Clone, Eq, PartialEq, Args)]
#[clap(about=ABOUT)]
pub struct Completions {
    #[arg(long, short, help = LOCATION_HELP)]
    location: Option<String>,
    #[arg(long, short, required = true, help = SHELL_HELP)]
    shell: Shell,
}

impl Executable for Completions {
    fn execute(&self, _: &mut Writer, _: &mut Reader) -> Result<i32> {
        let mut app = GTesterTools::command();

        let mut writer = match &self.location {
            Some(location) => {
                let path = Path::new(location);
                if !path.exists() || !path.is_dir() {
                    return Err(Error::InvalidCompletionsPath(String::from(
                        "incompatible path",
                    )));
                }

                Box::new(File::create(path.join("gtester-tools.sh"))?) as Box<dyn Write>
            }
            None => Box::new(std::io::stdout()) as Box<dyn Write>,
        };

        match self.shell {
            Shell::Bash => clap_complete::generate(
                clap_complete::shells::Bash,
                &mut app,
                APP_NAME,
                &mut writer,
            ),
            Shell::Zsh => {
                clap_complete::generate(clap_complete::shells::Zsh, &mut app, APP_NAME, &mut writer)
            }
            Shell::Fish => clap_complete::generate(
                clap_complete::shells::Fish,
                &mut app,
                APP_NAME,
                &mut writer,
            ),
            Shell::PowerShell => clap_complete::generate(
                clap_complete::shells::PowerShell,
                &mut app,
                APP_NAME,
                &mut writer,
            ),
        }

        Ok(SUCCESS_STATUS_CODE)
    }
}
