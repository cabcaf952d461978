//! Core entry point for the triage_pdf crate.
//!
//! [`synthesize`] turns a title and ordered sections into a complete
//! single-page PDF 1.4 file, written byte by byte without a PDF library.

pub mod builder;
pub mod content;
pub mod delivery;
pub mod demos;
pub mod encoding;
pub mod error;
pub mod fonts;
pub mod model;
pub mod reports;
pub mod writer;

#[cfg(feature = "verify")]
pub mod verify;

pub use builder::{synthesize, PaperSize, PdfBlob, PdfBuilder};
pub use error::{Error, Result};
pub use model::{DocumentRequest, Section};
