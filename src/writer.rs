//! Sequential object serialization with byte-offset bookkeeping.
//!
//! [`ObjectTable`] owns the output buffer. Objects are appended in ascending id
//! order and the buffer length at the moment of each append is recorded as that
//! object's offset, so the cross-reference table written by
//! [`ObjectTable::finish`] always points at the first byte of `"<id> 0 obj"`.

use std::fmt;

/// File header written before the first object.
pub const PDF_HEADER: &[u8] = b"%PDF-1.4\n";

/// Indirect object number. Generation numbers are always zero.
pub type ObjectId = u32;

/// One row of the cross-reference table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct XrefEntry {
    pub offset: usize,
    pub generation: u16,
    pub in_use: bool,
}

impl XrefEntry {
    /// The head of the free list, always the entry for object 0.
    pub const FREE_HEAD: XrefEntry = XrefEntry {
        offset: 0,
        generation: 65535,
        in_use: false,
    };

    fn in_use(offset: usize) -> Self {
        Self {
            offset,
            generation: 0,
            in_use: true,
        }
    }
}

impl fmt::Display for XrefEntry {
    /// Writes the fixed 20-byte form, trailing space and newline included.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = if self.in_use { 'n' } else { 'f' };
        writeln!(f, "{:010} {:05} {} ", self.offset, self.generation, flag)
    }
}

/// Output buffer plus the offset of every object appended to it.
#[derive(Debug)]
pub struct ObjectTable {
    buffer: Vec<u8>,
    offsets: Vec<usize>,
}

impl ObjectTable {
    /// Starts a document with the `%PDF-1.4` header.
    pub fn new() -> Self {
        Self::with_header(PDF_HEADER)
    }

    /// Starts a document with a custom header line.
    pub fn with_header(header: &[u8]) -> Self {
        Self {
            buffer: header.to_vec(),
            offsets: Vec::new(),
        }
    }

    /// Number of bytes written so far.
    pub fn position(&self) -> usize {
        self.buffer.len()
    }

    /// Id the next appended object will receive.
    pub fn next_id(&self) -> ObjectId {
        self.offsets.len() as ObjectId + 1
    }

    /// Offsets of objects `1..=n`, indexed from zero.
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Appends a dictionary object and returns its id.
    pub fn push_object(&mut self, body: &[u8]) -> ObjectId {
        let id = self.begin_object();
        self.buffer.extend_from_slice(body);
        self.end_object();
        id
    }

    /// Appends a stream object whose `/Length` is the byte length of `data`.
    pub fn push_stream(&mut self, data: &[u8]) -> ObjectId {
        let id = self.begin_object();
        let dictionary = format!("<< /Length {} >>\nstream\n", data.len());
        self.buffer.extend_from_slice(dictionary.as_bytes());
        self.buffer.extend_from_slice(data);
        self.buffer.extend_from_slice(b"\nendstream");
        self.end_object();
        id
    }

    fn begin_object(&mut self) -> ObjectId {
        let id = self.next_id();
        self.offsets.push(self.buffer.len());
        self.buffer.extend_from_slice(format!("{id} 0 obj\n").as_bytes());
        id
    }

    fn end_object(&mut self) {
        self.buffer.extend_from_slice(b"\nendobj\n");
    }

    /// Cross-reference rows, the free-list head included.
    pub fn xref_entries(&self) -> Vec<XrefEntry> {
        std::iter::once(XrefEntry::FREE_HEAD)
            .chain(self.offsets.iter().copied().map(XrefEntry::in_use))
            .collect()
    }

    /// Writes the cross-reference table and trailer and returns the finished file.
    pub fn finish(mut self, root: ObjectId) -> Vec<u8> {
        let xref_offset = self.buffer.len();
        let entries = self.xref_entries();

        let mut tail = format!("xref\n0 {}\n", entries.len());
        for entry in &entries {
            tail.push_str(&entry.to_string());
        }
        tail.push_str(&format!(
            "trailer\n<< /Size {} /Root {root} 0 R >>\nstartxref\n{xref_offset}\n%%EOF",
            entries.len()
        ));

        self.buffer.extend_from_slice(tail.as_bytes());
        self.buffer
    }
}

impl Default for ObjectTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_point_at_object_headers() {
        let mut table = ObjectTable::new();
        let first = table.push_object(b"<< /A 1 >>");
        let second = table.push_stream(b"BT ET");
        let offsets = table.offsets().to_vec();
        let bytes = table.finish(first);

        assert_eq!((first, second), (1, 2));
        assert_eq!(offsets[0], PDF_HEADER.len());
        assert!(bytes[offsets[0]..].starts_with(b"1 0 obj\n<< /A 1 >>\nendobj\n"));
        assert!(bytes[offsets[1]..]
            .starts_with(b"2 0 obj\n<< /Length 5 >>\nstream\nBT ET\nendstream\nendobj\n"));
    }

    #[test]
    fn stream_length_counts_bytes_not_characters() {
        let mut table = ObjectTable::new();
        table.push_stream(b"\xE3\xE7");
        let bytes = table.finish(1);
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("<< /Length 2 >>"));
    }

    #[test]
    fn xref_entries_are_twenty_bytes() {
        assert_eq!(XrefEntry::FREE_HEAD.to_string(), "0000000000 65535 f \n");
        assert_eq!(XrefEntry::in_use(1234).to_string(), "0000001234 00000 n \n");
        assert_eq!(XrefEntry::in_use(9).to_string().len(), 20);
    }

    #[test]
    fn trailer_points_at_xref_table() {
        let mut table = ObjectTable::new();
        let root = table.push_object(b"<< /Type /Catalog >>");
        let xref_offset = table.position();
        let bytes = table.finish(root);
        let text = String::from_utf8(bytes.clone()).expect("ascii output");

        assert!(bytes[xref_offset..].starts_with(b"xref\n0 2\n0000000000 65535 f \n"));
        assert!(text.ends_with(&format!(
            "trailer\n<< /Size 2 /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF"
        )));
    }

    #[test]
    fn empty_table_still_has_free_head() {
        let table = ObjectTable::default();
        assert_eq!(table.xref_entries(), vec![XrefEntry::FREE_HEAD]);
        assert_eq!(table.next_id(), 1);
        assert_eq!(table.position(), PDF_HEADER.len());
    }
}
