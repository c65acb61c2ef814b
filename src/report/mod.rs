pub mod aggregate;
pub mod errors;
pub mod parser;

pub type Result<R> = std::result::Result<R, errors::Error>;

/// A parsed gtester report: the test binaries in document order. Binary
/// paths are not guaranteed unique; aggregation merges duplicates.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TestReport {
    pub binaries: Vec<TestBinary>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TestBinary {
    pub path: String,
    pub cases: Vec<TestCase>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TestCase {
    pub path: String,
    pub status: CaseStatus,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum CaseStatus {
    /// The case carried a `skipped` attribute. Takes precedence over any
    /// status element the case may also have.
    Skipped,
    /// The status element reported exactly `success`.
    Success,
    /// Any other result string, preserved verbatim.
    Failure(String),
}
