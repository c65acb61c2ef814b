pub(crate) mod files;
pub mod completions;
pub mod marshal_list;
pub mod summarize;

use clap::{Parser, Subcommand};

use crate::report::Result;
use crate::utils::reader::Reader;
use crate::utils::writer::Writer;

//
// Constants
//
// Application metadata
pub const APP_NAME: &str = "gtester-tools";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

const ABOUT: &str = r#"
  Developer utilities for projects using the GLib test harness. Summarizes
  gtester XML test reports into per-binary pass/fail counts, and generates
  glib-genmarshal marshaller prototype lists from references found in C
  sources."#;

// Status codes
pub const FAILURE_STATUS_CODE: i32 = 1;
pub const SUCCESS_STATUS_CODE: i32 = 0;
pub const ERROR_STATUS_CODE: i32 = 5;

pub(crate) const SOURCE_FILE_SUPPORTED_EXTENSIONS: [&str; 2] = [".c", ".h"];

pub trait Executable {
    fn execute(&self, writer: &mut Writer, reader: &mut Reader) -> Result<i32>;
}

#[derive(Debug, Parser)]
#[command(name = APP_NAME, version = APP_VERSION, about = ABOUT, arg_required_else_help = true)]
pub struct GTesterTools {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Summarize(summarize::Summarize),
    MarshalList(marshal_list::MarshalList),
    Completions(completions::Completions),
}

impl Executable for Commands {
    fn execute(&self, writer: &mut Writer, reader: &mut Reader) -> Result<i32> {
        match self {
            Commands::Summarize(cmd) => cmd.execute(writer, reader),
            Commands::MarshalList(cmd) => cmd.execute(writer, reader),
            Commands::Completions(cmd) => cmd.execute(writer, reader),
        }
    }
}
