// Copyright The gtester-tools developers.
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::PathBuf;

use clap::Parser;

use gtester_tools::commands::{Executable, GTesterTools, APP_NAME, ERROR_STATUS_CODE};
use gtester_tools::utils::reader::Reader;
use gtester_tools::utils::writer::Writer;

#[non_exhaustive]
pub struct StatusCode;

#[allow(dead_code)]
impl StatusCode {
    pub const SUCCESS: i32 = 0;
    pub const TEST_FAILURES: i32 = 1;
    pub const INTERNAL_FAILURE: i32 = 5;
}

#[allow(dead_code)]
pub enum Command {
    Summarize,
    MarshalList,
    Completions,
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Command::Summarize => "summarize",
            Command::MarshalList => "marshal-list",
            Command::Completions => "completions",
        };

        f.write_str(name)
    }
}

pub fn read_from_resource_file(path: &str) -> String {
    let mut resource = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    resource.push("tests");
    resource.push(path);
    let mut content = String::new();
    let mut reader = BufReader::new(File::open(resource.as_path()).unwrap());
    reader.read_to_string(&mut content).unwrap();

    content
}

pub fn get_full_path_for_resource_file(path: &str) -> String {
    let mut resource = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    resource.push("tests");
    resource.push(path);
    resource.display().to_string()
}

pub fn compare_write_buffer_with_file(
    expected_output_relative_file_path: &str,
    actual_output_writer: Writer,
) {
    let expected_output = read_from_resource_file(expected_output_relative_file_path);
    let actual_output = actual_output_writer.stripped().unwrap();
    assert_eq!(expected_output, actual_output)
}

#[allow(dead_code)]
pub fn compare_write_buffer_with_string(expected_output: &str, actual_output_writer: Writer) {
    let actual_output = actual_output_writer.stripped().unwrap();
    assert_eq!(expected_output, actual_output)
}

pub trait CommandTestRunner {
    fn build_args(&self) -> Vec<String>;

    fn run(&self, writer: &mut Writer, reader: &mut Reader) -> i32 {
        let command_options = self
            .build_args()
            .into_iter()
            .fold(vec![String::from(APP_NAME)], |mut res, arg| {
                res.push(arg);
                res
            });

        let app = GTesterTools::parse_from(command_options);

        match app.command.execute(writer, reader) {
            Err(e) => {
                writer
                    .write_err(format!("Error occurred {e}"))
                    .expect("failed to write to stderr");

                ERROR_STATUS_CODE
            }
            Ok(code) => code,
        }
    }
}

#[macro_export]
macro_rules! assert_output_from_file_eq {
    ($expected_output_relative_file_path: expr, $actual_output_writer: expr) => {
        $crate::utils::compare_write_buffer_with_file(
            $expected_output_relative_file_path,
            $actual_output_writer,
        )
    };
}

#[macro_export]
macro_rules! assert_output_from_str_eq {
    ($expected_output: expr, $actual_output_writer: expr) => {
        $crate::utils::compare_write_buffer_with_string($expected_output, $actual_output_writer)
    };
}
