//! Output formats and visitor construction by name

use crate::error::SerializeError;
use crate::visitors::{FormatVisitor, HtmlVisitor, JsonVisitor, XmlVisitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output format of a visitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SerializationFormat {
    Html,
    Xml,
    Json,
}

impl SerializationFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            SerializationFormat::Html => "html",
            SerializationFormat::Xml => "xml",
            SerializationFormat::Json => "json",
        }
    }

    /// Build the visitor for this format.
    ///
    /// `escape` only affects markup formats; JSON is always escaped.
    pub fn visitor(&self, escape: bool) -> Box<dyn FormatVisitor> {
        tracing::debug!(format = %self, escape, "Building visitor");
        match (self, escape) {
            (SerializationFormat::Html, false) => Box::new(HtmlVisitor::new()),
            (SerializationFormat::Html, true) => Box::new(HtmlVisitor::new().escaped()),
            (SerializationFormat::Xml, false) => Box::new(XmlVisitor::new()),
            (SerializationFormat::Xml, true) => Box::new(XmlVisitor::new().escaped()),
            (SerializationFormat::Json, _) => Box::new(JsonVisitor::new()),
        }
    }

    /// Formats applied by the default demo run, in order
    pub fn defaults() -> Vec<SerializationFormat> {
        vec![SerializationFormat::Html, SerializationFormat::Xml]
    }
}

impl fmt::Display for SerializationFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SerializationFormat {
    type Err = SerializeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "html" => Ok(SerializationFormat::Html),
            "xml" => Ok(SerializationFormat::Xml),
            "json" => Ok(SerializationFormat::Json),
            other => Err(SerializeError::UnknownFormat(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use patterns_core::Person;

    #[test]
    fn test_parse_format() {
        assert_eq!("HTML".parse::<SerializationFormat>(), Ok(SerializationFormat::Html));
        assert_eq!(" xml ".parse::<SerializationFormat>(), Ok(SerializationFormat::Xml));
        assert_eq!(
            "yaml".parse::<SerializationFormat>(),
            Err(SerializeError::UnknownFormat("yaml".to_string()))
        );
    }

    #[test]
    fn test_visitor_matches_format() {
        for format in [
            SerializationFormat::Html,
            SerializationFormat::Xml,
            SerializationFormat::Json,
        ] {
            assert_eq!(format.visitor(false).format(), format);
            assert_eq!(format.visitor(true).format(), format);
        }
    }

    #[test]
    fn test_escape_flag_reaches_visitor() {
        let person = Person::new("A&B", "1");
        let plain = person.accept(&*SerializationFormat::Xml.visitor(false));
        let escaped = person.accept(&*SerializationFormat::Xml.visitor(true));

        assert!(plain.contains("<Name>A&B</Name>"));
        assert!(escaped.contains("<Name>A&amp;B</Name>"));
    }

    #[test]
    fn test_display_parses_back() {
        for format in [
            SerializationFormat::Html,
            SerializationFormat::Xml,
            SerializationFormat::Json,
        ] {
            assert_eq!(format.to_string().parse::<SerializationFormat>(), Ok(format));
        }
    }
}
