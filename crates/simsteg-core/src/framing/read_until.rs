use crate::error::SimstegError;
use crate::result::Result;

/// Reads forward from `start` one byte at a time until `terminator` matches.
///
/// Returns the bytes in front of the terminator and the offset of the
/// terminator's first byte. Fails with [`SimstegError::UnterminatedSegment`]
/// when the buffer ends before the terminator shows up.
pub fn read_until<'a>(buf: &'a [u8], start: usize, terminator: &[u8]) -> Result<(&'a [u8], usize)> {
    let mut offset = start;
    while offset < buf.len() {
        if buf[offset..].starts_with(terminator) {
            return Ok((&buf[start..offset], offset));
        }
        offset += 1;
    }

    Err(SimstegError::UnterminatedSegment {
        offset: start,
        terminator: String::from_utf8_lossy(terminator).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_read_until_the_terminator() {
        let buf = b"hello|text_end|rest";
        let (content, at) = read_until(buf, 0, b"|text_end|").unwrap();

        assert_eq!(content, b"hello");
        assert_eq!(at, 5);
    }

    #[test]
    fn should_start_reading_at_the_given_offset() {
        let buf = b"|a|b|c";
        let (content, at) = read_until(buf, 2, b"|").unwrap();

        assert_eq!(content, b"");
        assert_eq!(at, 2);

        let (content, at) = read_until(buf, 3, b"|").unwrap();
        assert_eq!(content, b"b");
        assert_eq!(at, 4);
    }

    #[test]
    fn should_fail_on_a_terminator_cut_by_the_buffer_end() {
        let buf = b"hello|text_en";

        match read_until(buf, 0, b"|text_end|") {
            Err(SimstegError::UnterminatedSegment { offset, terminator }) => {
                assert_eq!(offset, 0);
                assert_eq!(terminator, "|text_end|");
            }
            other => panic!("expected unterminated segment, got {other:?}"),
        }
    }

    #[test]
    fn should_fail_when_starting_at_or_behind_the_end() {
        assert!(read_until(b"abc", 3, b"c").is_err());
        assert!(read_until(b"abc", 10, b"c").is_err());
    }
}
