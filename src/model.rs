//! Data structures describing the logical content of a report.
//!
//! The types mirror what the questionnaire front end hands over for a download:
//! a title and an ordered list of headed sections. They carry no layout
//! information and derive `serde` traits so a request can be read from JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A heading followed by its bullet items.
///
/// Rendered as the heading line and then one `- item` line per entry, in
/// insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    heading: String,
    #[serde(default)]
    items: Vec<String>,
}

impl Section {
    /// Creates an empty section with the provided heading.
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            items: Vec::new(),
        }
    }

    /// Returns the heading line.
    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// Returns the items in rendering order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Appends an item and returns the updated section.
    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Extends the section with additional items and returns the updated instance.
    pub fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items.extend(items.into_iter().map(Into::into));
        self
    }
}

/// Title plus ordered sections, the full input of one synthesized document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRequest {
    pub title: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl DocumentRequest {
    /// Creates a request without sections.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
        }
    }

    /// Appends a section and returns the updated request.
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Parses a request from its JSON representation.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON request file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::{DocumentRequest, Section};

    #[test]
    fn section_keeps_item_order() {
        let section = Section::new("Resumo")
            .with_item("primeiro")
            .with_items(["segundo", "terceiro"]);

        assert_eq!(section.heading(), "Resumo");
        assert_eq!(section.items(), ["primeiro", "segundo", "terceiro"]);
    }

    #[test]
    fn request_parses_from_json() {
        let request = DocumentRequest::from_json_str(
            r#"{
                "title": "Relatório",
                "sections": [
                    { "heading": "Resumo", "items": ["Pontuação: 5"] },
                    { "heading": "Vazio" }
                ]
            }"#,
        )
        .expect("valid request");

        assert_eq!(request.title, "Relatório");
        assert_eq!(request.sections.len(), 2);
        assert_eq!(request.sections[0].items(), ["Pontuação: 5"]);
        assert!(request.sections[1].items().is_empty());
    }

    #[test]
    fn request_without_sections_is_accepted() {
        let request = DocumentRequest::from_json_str(r#"{ "title": "" }"#).expect("valid request");
        assert_eq!(request, DocumentRequest::new(""));
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(DocumentRequest::from_json_str("{ \"sections\": [] }").is_err());
    }
}
