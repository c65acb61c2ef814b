use std::fs;
use std::io::Write;

use clap::Args;
use colored::*;
use indexmap::IndexMap;

use crate::commands::files::validate_path;
use crate::commands::{Executable, FAILURE_STATUS_CODE, SUCCESS_STATUS_CODE};
use crate::report::aggregate::{aggregate_report, AggregateResult};
use crate::report::parser::parse_report;
use crate::report::Result;
use crate::utils::reader::Reader;
use crate::utils::writer::Writer;

const ABOUT: &str = "Summarize a gtester XML test report into per-binary pass/fail counts";
const REPORT_HELP: &str = "Provide the path to a gtester XML report file";

#[derive(Debug, Clone, Eq, PartialEq, Args)]
#[clap(arg_required_else_help = true)]
#[clap(about=ABOUT)]
pub struct Summarize {
    /// the gtester XML report to summarize
    #[arg(help=REPORT_HELP)]
    pub(crate) report: String,
}

impl Executable for Summarize {
    /// .
    /// summarize a gtester XML report, one line per test binary
    ///
    /// This function will return an error if
    /// - the report path does not exist
    /// - the report is not well-formed XML or misses expected elements/attributes
    fn execute(&self, writer: &mut Writer, _: &mut Reader) -> Result<i32> {
        validate_path(&self.report)?;
        let content = fs::read_to_string(&self.report)?;

        let report = parse_report(&content)?;
        let results = aggregate_report(&report);

        render(&results, writer)
    }
}

/// Renders one line per binary in mapping order, an indented `Failure:` line
/// per failing case, and the closing banner when anything failed. Returns the
/// process exit code.
pub fn render(results: &IndexMap<String, AggregateResult>, writer: &mut Writer) -> Result<i32> {
    let mut okay = true;

    for (path, result) in results {
        let label = if result.has_failures() {
            okay = false;
            "FAIL".red()
        } else {
            "PASS".green()
        };

        writeln!(
            writer,
            "{}: {}: {}/{} tests passed",
            label,
            path,
            result.passed(),
            result.total_cases
        )?;

        for failure in &result.failure_paths {
            writeln!(writer, "\tFailure: {}", failure)?;
        }
    }

    if !okay {
        writeln!(writer, "{}", "Disaster! Calamity!".red())?;
        return Ok(FAILURE_STATUS_CODE);
    }

    Ok(SUCCESS_STATUS_CODE)
}

#[cfg(test)]
#[path = "summarize_tests.rs"]
mod summarize_tests;
