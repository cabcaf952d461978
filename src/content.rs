//! Text preparation and page content-stream construction.

use std::borrow::Cow;

use crate::encoding;
use crate::model::Section;

/// Line shown directly under the title of every document.
pub const DEFAULT_SUBTITLE: &str = "Documento demonstrativo gerado para apresentação.";

/// Resource name the page uses to refer to its single font.
pub const FONT_RESOURCE_NAME: &str = "F1";

/// Text placement parameters, in PDF user-space units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextLayout {
    pub font_size: u32,
    pub origin_x: u32,
    pub origin_y: u32,
    /// Vertical distance between consecutive baselines.
    pub leading: u32,
}

impl Default for TextLayout {
    fn default() -> Self {
        Self {
            font_size: 16,
            origin_x: 72,
            origin_y: 770,
            leading: 24,
        }
    }
}

/// Flattens the title, subtitle and sections into the lines shown on the page.
///
/// The layout is: title, subtitle, a blank line, then per section its heading,
/// one `- item` line per item and a blank separator. A blank final line is
/// dropped.
pub fn flatten_lines(title: &str, subtitle: &str, sections: &[Section]) -> Vec<String> {
    let item_count: usize = sections.iter().map(|s| s.items().len() + 2).sum();
    let mut lines = Vec::with_capacity(3 + item_count);
    lines.push(title.to_string());
    lines.push(subtitle.to_string());
    lines.push(String::new());

    for section in sections {
        lines.push(section.heading().to_string());
        lines.extend(section.items().iter().map(|item| format!("- {item}")));
        lines.push(String::new());
    }

    if lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines
}

/// Escapes the characters that delimit PDF literal strings.
///
/// `\`, `(` and `)` each gain one leading backslash; everything else is left
/// untouched.
pub fn escape_text(text: &str) -> Cow<'_, str> {
    if !text.contains(['\\', '(', ')']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        if matches!(ch, '\\' | '(' | ')') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    Cow::Owned(escaped)
}

/// Encoded page content together with encoding diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentStream {
    bytes: Vec<u8>,
    replaced: usize,
}

impl ContentStream {
    /// Builds the text-showing operators for `lines`.
    ///
    /// The first line is shown at the layout origin; every later line is
    /// preceded by a `0 -leading Td` move.
    pub fn build(lines: &[String], layout: &TextLayout) -> Self {
        let mut bytes = Vec::new();
        let preamble = format!(
            "BT\n/{FONT_RESOURCE_NAME} {} Tf\n{} {} Td\n",
            layout.font_size, layout.origin_x, layout.origin_y
        );
        bytes.extend_from_slice(preamble.as_bytes());

        let line_advance = format!("0 -{} Td\n", layout.leading);
        let mut replaced = 0;
        for (index, line) in lines.iter().enumerate() {
            if index > 0 {
                bytes.extend_from_slice(line_advance.as_bytes());
            }
            bytes.push(b'(');
            replaced += encoding::encode_into(&escape_text(line), &mut bytes);
            bytes.extend_from_slice(b") Tj\n");
        }
        bytes.extend_from_slice(b"ET");

        Self { bytes, replaced }
    }

    /// Returns the encoded operators.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the stream length in bytes, the value declared as `/Length`.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns whether the stream is empty. Built streams never are.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns how many characters had no WinAnsi slot and were written as `?`.
    pub fn replaced_characters(&self) -> usize {
        self.replaced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn empty_sections_yield_title_and_subtitle_only() {
        let flattened = flatten_lines("Título", DEFAULT_SUBTITLE, &[]);
        assert_eq!(flattened, lines(&["Título", DEFAULT_SUBTITLE]));
    }

    #[test]
    fn sections_are_flattened_with_separators() {
        let sections = [
            Section::new("Resumo").with_items(["a", "b"]),
            Section::new("Vazio"),
        ];
        let flattened = flatten_lines("T", "S", &sections);
        assert_eq!(
            flattened,
            lines(&["T", "S", "", "Resumo", "- a", "- b", "", "Vazio"])
        );
    }

    #[test]
    fn only_the_final_blank_line_is_dropped() {
        let sections = [Section::new("").with_item("")];
        let flattened = flatten_lines("T", "S", &sections);
        assert_eq!(flattened, lines(&["T", "S", "", "", "- "]));
    }

    #[test]
    fn escape_prefixes_delimiters_once() {
        assert_eq!(escape_text(r"a(b)c\d"), r"a\(b\)c\\d");
        assert_eq!(escape_text(r"\\"), r"\\\\");
        assert!(matches!(escape_text("plain ã"), Cow::Borrowed("plain ã")));
    }

    #[test]
    fn content_stream_moves_before_every_line_but_the_first() {
        let stream = ContentStream::build(&lines(&["A", "B (x)"]), &TextLayout::default());
        assert_eq!(
            stream.as_bytes(),
            b"BT\n/F1 16 Tf\n72 770 Td\n(A) Tj\n0 -24 Td\n(B \\(x\\)) Tj\nET"
        );
        assert_eq!(stream.len(), stream.as_bytes().len());
    }

    #[test]
    fn content_stream_counts_replacements() {
        let stream = ContentStream::build(&lines(&["ok ✓", "ação"]), &TextLayout::default());
        assert_eq!(stream.replaced_characters(), 1);
        assert!(stream
            .as_bytes()
            .windows(6)
            .any(|window| window == b"(a\xE7\xE3o)"));
    }

    #[test]
    fn custom_layout_is_honoured() {
        let layout = TextLayout {
            font_size: 11,
            origin_x: 50,
            origin_y: 800,
            leading: 14,
        };
        let stream = ContentStream::build(&lines(&["x", "y"]), &layout);
        assert_eq!(
            stream.as_bytes(),
            b"BT\n/F1 11 Tf\n50 800 Td\n(x) Tj\n0 -14 Td\n(y) Tj\nET"
        );
    }
}
