use std::fs::File;
use std::process::exit;

mod commands;
mod report;
mod utils;

use clap::Parser;

use crate::commands::{Commands, Executable, GTesterTools, ERROR_STATUS_CODE};
use crate::report::errors::Error;
use crate::utils::reader::Reader;
use crate::utils::writer::WriteBuffer::{File as WBFile, Stderr, Stdout};
use crate::utils::writer::Writer;

fn main() -> Result<(), Error> {
    let app = GTesterTools::parse();

    let mut writer = match &app.command {
        Commands::MarshalList(cmd) => match &cmd.output {
            Some(file) => Writer::new(WBFile(File::create(file)?), Stderr(std::io::stderr())),
            None => Writer::new(Stdout(std::io::stdout()), Stderr(std::io::stderr())),
        },
        _ => Writer::new(Stdout(std::io::stdout()), Stderr(std::io::stderr())),
    };
    let mut reader = Reader::default();

    match app.command.execute(&mut writer, &mut reader) {
        Err(e) => {
            writer
                .write_err(format!("Error occurred {e}"))
                .expect("failed to write to stderr");

            exit(ERROR_STATUS_CODE);
        }
        Ok(code) => exit(code),
    }
}
