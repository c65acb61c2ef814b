use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::report::errors::Error;
use crate::report::{CaseStatus, Result, TestBinary, TestCase, TestReport};

/// Parses a gtester XML report into typed records, validating the expected
/// shape as it goes. Elements other than `testbinary`, `testcase` and
/// `status` (gtester also emits `info`, `binary`, `random-seed`, `duration`,
/// `message`) are skipped at every level.
pub fn parse_report(content: &str) -> Result<TestReport> {
    let mut reader = Reader::from_str(content);
    reader.trim_text(true);

    let mut binaries = Vec::new();
    let mut root_seen = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if !root_seen {
                    root_seen = true;
                } else if e.local_name().as_ref() == b"testbinary" {
                    binaries.push(parse_binary(&mut reader, &e)?);
                } else {
                    reader.read_to_end(e.name())?;
                }
            }
            Event::Empty(e) => {
                if !root_seen {
                    // self-closing root, nothing to collect
                    break;
                }
                if e.local_name().as_ref() == b"testbinary" {
                    binaries.push(TestBinary {
                        path: required_attr(&e, "path")?,
                        cases: vec![],
                    });
                }
            }
            Event::End(_) => break,
            Event::Eof => {
                let reason = if root_seen {
                    "document ended before the root element closed"
                } else {
                    "document has no root element"
                };
                return Err(Error::MalformedReport(String::from(reason)));
            }
            _ => {}
        }
    }

    Ok(TestReport { binaries })
}

fn parse_binary(reader: &mut Reader<&[u8]>, start: &BytesStart<'_>) -> Result<TestBinary> {
    let path = required_attr(start, "path")?;
    let mut cases = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if e.local_name().as_ref() == b"testcase" {
                    cases.push(parse_case(reader, &e)?);
                } else {
                    reader.read_to_end(e.name())?;
                }
            }
            Event::Empty(e) => {
                if e.local_name().as_ref() == b"testcase" {
                    cases.push(case_without_children(&e)?);
                }
            }
            Event::End(_) => break,
            Event::Eof => {
                return Err(Error::MalformedReport(format!(
                    "document ended inside testbinary `{}`",
                    path
                )))
            }
            _ => {}
        }
    }

    Ok(TestBinary { path, cases })
}

fn parse_case(reader: &mut Reader<&[u8]>, start: &BytesStart<'_>) -> Result<TestCase> {
    let path = required_attr(start, "path")?;
    let skipped = attr(start, "skipped")?.is_some();
    let mut result: Option<String> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                // first status element wins
                if e.local_name().as_ref() == b"status" && !skipped && result.is_none() {
                    result = Some(required_attr(&e, "result")?);
                }
                reader.read_to_end(e.name())?;
            }
            Event::Empty(e) => {
                if e.local_name().as_ref() == b"status" && !skipped && result.is_none() {
                    result = Some(required_attr(&e, "result")?);
                }
            }
            Event::End(_) => break,
            Event::Eof => {
                return Err(Error::MalformedReport(format!(
                    "document ended inside testcase `{}`",
                    path
                )))
            }
            _ => {}
        }
    }

    case_status(path, skipped, result)
}

fn case_without_children(start: &BytesStart<'_>) -> Result<TestCase> {
    let path = required_attr(start, "path")?;
    let skipped = attr(start, "skipped")?.is_some();

    case_status(path, skipped, None)
}

fn case_status(path: String, skipped: bool, result: Option<String>) -> Result<TestCase> {
    let status = if skipped {
        CaseStatus::Skipped
    } else {
        match result {
            Some(result) => {
                if result == "success" {
                    CaseStatus::Success
                } else {
                    CaseStatus::Failure(result)
                }
            }
            None => {
                return Err(Error::MalformedReport(format!(
                    "testcase `{}` has no status element",
                    path
                )))
            }
        }
    };

    Ok(TestCase { path, status })
}

fn attr(start: &BytesStart<'_>, name: &str) -> Result<Option<String>> {
    for attribute in start.attributes() {
        let attribute = attribute?;
        if attribute.key.local_name().as_ref() == name.as_bytes() {
            return Ok(Some(attribute.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

fn required_attr(start: &BytesStart<'_>, name: &str) -> Result<String> {
    attr(start, name)?.ok_or_else(|| {
        let element = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
        Error::MalformedReport(format!(
            "`{}` element is missing the `{}` attribute",
            element, name
        ))
    })
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod parser_tests;
