use log::{debug, trace};

use super::{file_end_marker, read_until, FILE_START, NAME_TERMINATOR, TEXT_END, TEXT_START};
use crate::error::SimstegError;
use crate::media::ImageKind;
use crate::result::Result;
use crate::segment::{FileSegment, Segment, TextSegment};

/// Walks the bytes behind the end-of-data marker and yields every hidden
/// segment in buffer order.
///
/// Bytes that do not start a segment are skipped one at a time. After the
/// first error the scanner yields nothing anymore.
#[derive(Debug)]
pub struct FrameScanner<'a> {
    buf: &'a [u8],
    kind: ImageKind,
    end_of_data: usize,
    offset: usize,
}

impl<'a> FrameScanner<'a> {
    /// Fails with [`SimstegError::MissingEndOfData`] if `buf` has no end-of-data marker for `kind`.
    pub fn new(buf: &'a [u8], kind: ImageKind) -> Result<Self> {
        debug!("Scanning {} bytes of {kind} image", buf.len());
        let end_of_data = kind.end_of_data(buf)?;

        Ok(Self {
            buf,
            kind,
            end_of_data,
            offset: end_of_data,
        })
    }

    pub fn kind(&self) -> ImageKind {
        self.kind
    }

    pub fn end_of_data(&self) -> usize {
        self.end_of_data
    }

    /// All bytes behind the end-of-data marker, uninterpreted
    pub fn trailer(&self) -> &'a [u8] {
        &self.buf[self.end_of_data..]
    }

    /// Scans the whole buffer, either all segments are returned or the first error.
    pub fn scan(self) -> Result<ScanReport> {
        let segments = self.collect::<Result<Vec<_>>>()?;
        let report = ScanReport { segments };
        debug!(
            "Done scanning, {} text(s) and {} file(s) found",
            report.found_texts(),
            report.found_files()
        );

        Ok(report)
    }

    fn next_segment(&mut self) -> Result<Option<Segment>> {
        while self.offset < self.buf.len() {
            let rest = &self.buf[self.offset..];
            if rest.starts_with(TEXT_START) {
                return self.read_text().map(Some);
            }
            if rest.starts_with(FILE_START) {
                return self.read_file().map(Some);
            }
            self.offset += 1;
        }

        Ok(None)
    }

    fn read_text(&mut self) -> Result<Segment> {
        trace!("Found text start marker at offset {:#x}", self.offset);
        let (content, end) = read_until(self.buf, self.offset + TEXT_START.len(), TEXT_END)?;
        let text = String::from_utf8(content.to_vec())?;
        self.offset = end + TEXT_END.len();

        Ok(TextSegment::new(text).into())
    }

    fn read_file(&mut self) -> Result<Segment> {
        trace!("Found file start marker at offset {:#x}", self.offset);
        let (name, name_end) =
            read_until(self.buf, self.offset + FILE_START.len(), NAME_TERMINATOR)?;
        let end_marker = file_end_marker(name);
        let (data, end) = read_until(self.buf, name_end + NAME_TERMINATOR.len(), &end_marker)?;
        let name = std::str::from_utf8(name).map_err(|_| SimstegError::InvalidFileName)?;
        trace!(
            "File {name:?} spans {} bytes, end marker at offset {end:#x}",
            data.len()
        );
        self.offset = end + end_marker.len();

        Ok(FileSegment::new(name, data.to_vec()).into())
    }
}

impl Iterator for FrameScanner<'_> {
    type Item = Result<Segment>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.next_segment();
        if next.is_err() {
            self.offset = self.buf.len();
        }

        next.transpose()
    }
}

/// All segments found in one image, in buffer order
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanReport {
    pub segments: Vec<Segment>,
}

impl ScanReport {
    pub fn texts(&self) -> impl Iterator<Item = &TextSegment> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Text(text) => Some(text),
            Segment::File(_) => None,
        })
    }

    pub fn files(&self) -> impl Iterator<Item = &FileSegment> {
        self.segments.iter().filter_map(|s| match s {
            Segment::File(file) => Some(file),
            Segment::Text(_) => None,
        })
    }

    pub fn found_texts(&self) -> usize {
        self.texts().count()
    }

    pub fn found_files(&self) -> usize {
        self.files().count()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
