//! The two kinds of hidden content, shared by the writer and the scanner.

use enum_dispatch::enum_dispatch;

use crate::framing::{file_end_marker, file_start_marker, TEXT_END, TEXT_START};

/// Everything that can be framed by start and end marker
#[enum_dispatch]
pub trait Framed {
    fn start_marker(&self) -> Vec<u8>;

    fn end_marker(&self) -> Vec<u8>;

    /// The payload bytes between the markers
    fn content(&self) -> &[u8];

    /// Number of bytes the segment occupies including both markers
    fn framed_len(&self) -> usize {
        self.start_marker().len() + self.content().len() + self.end_marker().len()
    }

    fn write_framed(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.start_marker());
        out.extend_from_slice(self.content());
        out.extend_from_slice(&self.end_marker());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSegment {
    pub text: String,
}

impl TextSegment {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self { text: text.into() }
    }
}

impl Framed for TextSegment {
    fn start_marker(&self) -> Vec<u8> {
        TEXT_START.to_vec()
    }

    fn end_marker(&self) -> Vec<u8> {
        TEXT_END.to_vec()
    }

    fn content(&self) -> &[u8] {
        self.text.as_bytes()
    }
}

/// A named binary blob, `name` is a base name without any directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSegment {
    pub name: String,
    pub data: Vec<u8>,
}

impl FileSegment {
    pub fn new<S: Into<String>>(name: S, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

impl Framed for FileSegment {
    fn start_marker(&self) -> Vec<u8> {
        file_start_marker(self.name.as_bytes())
    }

    fn end_marker(&self) -> Vec<u8> {
        file_end_marker(self.name.as_bytes())
    }

    fn content(&self) -> &[u8] {
        &self.data
    }
}

#[enum_dispatch(Framed)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(TextSegment),
    File(FileSegment),
}

impl Segment {
    pub fn is_text(&self) -> bool {
        matches!(self, Segment::Text(_))
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Segment::File(_))
    }
}
