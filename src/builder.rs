//! Document construction for the triage_pdf crate.

use log::{debug, warn};

use crate::content::{self, ContentStream, TextLayout};
use crate::fonts::{self, StandardFont};
use crate::model::{DocumentRequest, Section};
use crate::writer::ObjectTable;

/// MIME type of every rendered document.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Page dimensions written as the `/MediaBox`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaperSize {
    /// US Letter, 612 × 792 points.
    #[default]
    Letter,
    /// ISO A4, 595 × 842 points.
    A4,
    /// Arbitrary width and height in points.
    Custom { width: u32, height: u32 },
}

impl PaperSize {
    /// Returns `(width, height)` in points.
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            Self::Letter => (612, 792),
            Self::A4 => (595, 842),
            Self::Custom { width, height } => (width, height),
        }
    }
}

/// A rendered document ready to be handed to a [`Delivery`](crate::delivery::Delivery).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PdfBlob {
    pub bytes: Vec<u8>,
}

impl PdfBlob {
    /// Always `application/pdf`.
    pub fn mime_type(&self) -> &'static str {
        PDF_MIME_TYPE
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for PdfBlob {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Builder for single-page text documents.
///
/// Defaults produce the stock triage layout: Helvetica 16pt, first baseline at
/// (72, 770), 24pt between lines, on a US Letter page.
#[derive(Clone, Debug)]
pub struct PdfBuilder {
    title: String,
    subtitle: String,
    sections: Vec<Section>,
    paper_size: PaperSize,
    font: StandardFont,
    layout: TextLayout,
}

impl Default for PdfBuilder {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: content::DEFAULT_SUBTITLE.to_string(),
            sections: Vec::new(),
            paper_size: PaperSize::default(),
            font: fonts::DEFAULT_FONT,
            layout: TextLayout::default(),
        }
    }
}

impl PdfBuilder {
    /// Creates a new builder instance with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-populated from a request.
    pub fn from_request(request: DocumentRequest) -> Self {
        Self::new()
            .with_title(request.title)
            .with_sections(request.sections)
    }

    /// Sets the first line of the page.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Replaces the line shown under the title.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Appends a section.
    pub fn add_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Appends several sections, keeping their order.
    pub fn with_sections<I>(mut self, sections: I) -> Self
    where
        I: IntoIterator<Item = Section>,
    {
        self.sections.extend(sections);
        self
    }

    pub fn with_paper_size(mut self, paper_size: PaperSize) -> Self {
        self.paper_size = paper_size;
        self
    }

    pub fn with_font(mut self, font: StandardFont) -> Self {
        self.font = font;
        self
    }

    pub fn with_font_size(mut self, font_size: u32) -> Self {
        self.layout.font_size = font_size;
        self
    }

    /// Sets the distance between consecutive baselines.
    pub fn with_leading(mut self, leading: u32) -> Self {
        self.layout.leading = leading;
        self
    }

    /// Sets the baseline position of the first line.
    pub fn with_origin(mut self, x: u32, y: u32) -> Self {
        self.layout.origin_x = x;
        self.layout.origin_y = y;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Returns the lines shown on the page, before escaping.
    pub fn lines(&self) -> Vec<String> {
        content::flatten_lines(&self.title, &self.subtitle, &self.sections)
    }

    /// Serializes the document.
    ///
    /// Objects are written in id order: Catalog, Pages, Page, content stream,
    /// Font. The ids are fixed because the page dictionary refers forward to
    /// the stream and the font.
    pub fn render(&self) -> PdfBlob {
        let lines = self.lines();
        let stream = ContentStream::build(&lines, &self.layout);
        if stream.replaced_characters() > 0 {
            warn!(
                "{} character(s) outside WinAnsiEncoding were replaced with '?' in \"{}\"",
                stream.replaced_characters(),
                self.title
            );
        }

        let (width, height) = self.paper_size.dimensions();
        let mut table = ObjectTable::new();
        let catalog = table.push_object(b"<< /Type /Catalog /Pages 2 0 R >>");
        table.push_object(b"<< /Type /Pages /Kids [3 0 R] /Count 1 >>");
        table.push_object(
            format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {width} {height}] /Contents 4 0 R /Resources << /Font << /{} 5 0 R >> >> >>",
                content::FONT_RESOURCE_NAME
            )
            .as_bytes(),
        );
        table.push_stream(stream.as_bytes());
        table.push_object(self.font.dictionary().as_bytes());

        let bytes = table.finish(catalog);
        debug!(
            "rendered \"{}\": {} line(s), {} stream byte(s), {} byte(s) total",
            self.title,
            lines.len(),
            stream.len(),
            bytes.len()
        );
        PdfBlob { bytes }
    }
}

/// Renders `title` and `sections` with the default layout.
pub fn synthesize(title: &str, sections: &[Section]) -> PdfBlob {
    PdfBuilder::new()
        .with_title(title)
        .with_sections(sections.iter().cloned())
        .render()
}
