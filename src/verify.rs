//! Reloading rendered documents with `lopdf`.
//!
//! Serves as an independent check of the hand-written output: the bytes are
//! parsed by a full PDF reader, the page content is decoded into operations and
//! the operands of every `Tj` are turned back into text.

use lopdf::content::Content;
use lopdf::{Document, Object};

use crate::encoding;
use crate::error::{Error, Result};

/// Returns the text shown on the first page, one entry per `Tj` operator.
///
/// String operands are decoded as WinAnsi, so for any line made of encodable
/// characters the result equals the line that was rendered.
pub fn extract_lines(pdf_bytes: &[u8]) -> Result<Vec<String>> {
    let document = Document::load_mem(pdf_bytes)?;
    let page_id = document
        .get_pages()
        .values()
        .next()
        .copied()
        .ok_or(Error::MissingPage)?;

    let raw = document.get_page_content(page_id)?;
    let content = Content::decode(&raw)?;

    let lines = content
        .operations
        .iter()
        .filter(|operation| operation.operator == "Tj")
        .filter_map(|operation| match operation.operands.first() {
            Some(Object::String(bytes, _)) => Some(encoding::decode(bytes)),
            _ => None,
        })
        .collect();
    Ok(lines)
}

/// Number of pages a full reader finds in the document.
pub fn page_count(pdf_bytes: &[u8]) -> Result<usize> {
    let document = Document::load_mem(pdf_bytes)?;
    Ok(document.get_pages().len())
}
