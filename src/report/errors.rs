use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Error parsing XML test report {0}")]
    XmlError(#[from] quick_xml::Error),
    #[error("Error parsing attributes in XML test report {0}")]
    AttrError(#[from] quick_xml::events::attributes::AttrError),
    #[error("Malformed test report, {0}")]
    MalformedReport(String),
    #[error("I/O error when reading {0}")]
    IoError(#[from] std::io::Error),
    #[error("Regex expression parse error for marshaller scan {0}")]
    RegexError(#[from] fancy_regex::Error),
    #[error("The path `{0}` does not exist")]
    FileNotFoundError(String),
    #[error("{0}")]
    InvalidCompletionsPath(String),
}
