use std::collections::BTreeSet;
use std::fs::File;
use std::io::Write;

use clap::Args;
use fancy_regex::Regex;
use lazy_static::lazy_static;
use string_builder::Builder;

use crate::commands::files::{alphabetical, get_files_with_filter, read_file_content, validate_path};
use crate::commands::{Executable, SOURCE_FILE_SUPPORTED_EXTENSIONS, SUCCESS_STATUS_CODE};
use crate::report::Result;
use crate::utils::reader::Reader;
use crate::utils::writer::Writer;

const ABOUT: &str = "Generate a glib-genmarshal prototype list from the signal marshaller references found in C sources";
const SOURCES_HELP: &str = "Provide C source files, or directories scanned for files with following extensions: .c, .h";
const OUTPUT_HELP: &str = "Write to output file";

lazy_static! {
    // matches e.g. _foo_signals_marshal_VOID__INT_STRING, capturing the
    // NAME__ARGS tail whatever the project prefix is
    static ref MARSHAL_REFERENCE: Regex =
        Regex::new(r"_signals_marshal_([A-Z0-9]*__[A-Z0-9_]*)").unwrap();
}

#[derive(Debug, Clone, Eq, PartialEq, Args)]
#[clap(arg_required_else_help = true)]
#[clap(about=ABOUT)]
pub struct MarshalList {
    /// the C source files or directories scanned for marshaller references
    #[arg(help=SOURCES_HELP, required=true)]
    pub(crate) sources: Vec<String>,
    /// the path the generated list is written to, stdout when absent
    #[arg(short, long, help=OUTPUT_HELP)]
    pub(crate) output: Option<String>,
}

impl Executable for MarshalList {
    /// .
    /// collect marshaller prototypes referenced by the given sources and
    /// print them as a glib-genmarshal input list
    ///
    /// This function will return an error if
    /// - any of the specified paths do not exist
    /// - a selected file cannot be read
    fn execute(&self, writer: &mut Writer, _: &mut Reader) -> Result<i32> {
        let mut prototypes = BTreeSet::new();

        for source in &self.sources {
            validate_path(source)?;
            let files = get_files_with_filter(source, alphabetical, |entry| {
                entry.file_name().to_str().map_or(false, |name| {
                    SOURCE_FILE_SUPPORTED_EXTENSIONS
                        .iter()
                        .any(|extension| name.ends_with(extension))
                })
            })?;

            for file in files {
                let content = read_file_content(File::open(file.as_path())?)?;
                scan_for_prototypes(&content, &mut prototypes)?;
            }
        }

        print_prototypes(&prototypes, writer)?;

        Ok(SUCCESS_STATUS_CODE)
    }
}

/// Adds the raw `NAME__ARGS` tail of every marshaller reference in `content`
/// to `prototypes`. Duplicates collapse through the set.
pub fn scan_for_prototypes(content: &str, prototypes: &mut BTreeSet<String>) -> Result<()> {
    for captures in MARSHAL_REFERENCE.captures_iter(content) {
        let captures = captures?;
        if let Some(name) = captures.get(1) {
            prototypes.insert(name.as_str().to_string());
        }
    }

    Ok(())
}

// Rewrites each raw tail into glib-genmarshal syntax, VOID__INT_STRING
// becoming VOID:INT,STRING, one prototype per line in sorted order.
fn print_prototypes(prototypes: &BTreeSet<String>, writer: &mut Writer) -> Result<()> {
    let mut list = Builder::default();

    for prototype in prototypes {
        list.append(format!(
            "{}\n",
            prototype.replace("__", ":").replace('_', ",")
        ));
    }

    write!(writer, "{}", list.string().unwrap())?;

    Ok(())
}

#[cfg(test)]
#[path = "marshal_list_tests.rs"]
mod marshal_list_tests;
