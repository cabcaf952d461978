//! Standard Type1 font selection.
//!
//! Documents reference one of the fourteen base fonts every conforming reader
//! ships with, so no font program is ever embedded.

use std::fmt;

/// Font used when a builder does not pick one explicitly.
pub const DEFAULT_FONT: StandardFont = StandardFont::Helvetica;

/// Name of the text encoding declared for Latin fonts.
pub const TEXT_ENCODING_NAME: &str = "WinAnsiEncoding";

/// The fourteen standard Type1 fonts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StandardFont {
    #[default]
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    TimesRoman,
    TimesBold,
    TimesItalic,
    TimesBoldItalic,
    Courier,
    CourierBold,
    CourierOblique,
    CourierBoldOblique,
    Symbol,
    ZapfDingbats,
}

impl StandardFont {
    /// All standard fonts, in declaration order.
    pub const ALL: [StandardFont; 14] = [
        Self::Helvetica,
        Self::HelveticaBold,
        Self::HelveticaOblique,
        Self::HelveticaBoldOblique,
        Self::TimesRoman,
        Self::TimesBold,
        Self::TimesItalic,
        Self::TimesBoldItalic,
        Self::Courier,
        Self::CourierBold,
        Self::CourierOblique,
        Self::CourierBoldOblique,
        Self::Symbol,
        Self::ZapfDingbats,
    ];

    /// Returns the PostScript name written as `/BaseFont`.
    pub fn base_font_name(self) -> &'static str {
        match self {
            Self::Helvetica => "Helvetica",
            Self::HelveticaBold => "Helvetica-Bold",
            Self::HelveticaOblique => "Helvetica-Oblique",
            Self::HelveticaBoldOblique => "Helvetica-BoldOblique",
            Self::TimesRoman => "Times-Roman",
            Self::TimesBold => "Times-Bold",
            Self::TimesItalic => "Times-Italic",
            Self::TimesBoldItalic => "Times-BoldItalic",
            Self::Courier => "Courier",
            Self::CourierBold => "Courier-Bold",
            Self::CourierOblique => "Courier-Oblique",
            Self::CourierBoldOblique => "Courier-BoldOblique",
            Self::Symbol => "Symbol",
            Self::ZapfDingbats => "ZapfDingbats",
        }
    }

    /// Whether the font accepts the WinAnsi text encoding.
    ///
    /// Symbol and ZapfDingbats only work with their built-in encodings.
    pub fn uses_text_encoding(self) -> bool {
        !matches!(self, Self::Symbol | Self::ZapfDingbats)
    }

    /// Looks a font up by its PostScript name.
    pub fn from_base_font_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|font| font.base_font_name() == name)
    }

    /// Serializes the font dictionary body.
    pub fn dictionary(self) -> String {
        if self.uses_text_encoding() {
            format!(
                "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /{} >>",
                self.base_font_name(),
                TEXT_ENCODING_NAME
            )
        } else {
            format!(
                "<< /Type /Font /Subtype /Type1 /BaseFont /{} >>",
                self.base_font_name()
            )
        }
    }
}

impl fmt::Display for StandardFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base_font_name())
    }
}
