//! Serialize combined rooms to an output file.
//!
//! Exporters are selected by [`OutputFormat`]; each writes the full document
//! in one pass, overwriting any existing file at the destination.
//!
//! - [`json`] – JSON array with 2-space indentation
//! - [`xml`] – pretty-printed `<rooms>` document

pub mod json;
pub mod xml;

pub use json::JsonExporter;
pub use xml::XmlExporter;

use std::str::FromStr;

use camino::Utf8Path;

use crate::error::{Error, Result};
use crate::model::CombinedRoom;

/// Strategy for serializing combined documents to a target text format.
pub trait Exporter {
    /// Write `rooms` to `path`, replacing any existing file.
    fn export(&self, rooms: &[CombinedRoom], path: &Utf8Path) -> Result<()>;
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Xml,
}

impl OutputFormat {
    /// File extension for this format, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Xml => "xml",
        }
    }

    /// The exporter bound to this format.
    pub fn exporter(self) -> Box<dyn Exporter> {
        match self {
            OutputFormat::Json => Box::new(JsonExporter),
            OutputFormat::Xml => Box::new(XmlExporter),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    /// Case-insensitive match against the supported format names.
    fn from_str(token: &str) -> Result<Self> {
        match token.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "xml" => Ok(OutputFormat::Xml),
            _ => Err(Error::UnsupportedFormat(token.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing_is_case_insensitive() {
        for token in ["json", "JSON", "Json"] {
            assert_eq!(token.parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        }
        for token in ["xml", "XML", "Xml"] {
            assert_eq!(token.parse::<OutputFormat>().unwrap(), OutputFormat::Xml);
        }
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let err = "yaml".parse::<OutputFormat>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(token) if token == "yaml"));
    }
}
