use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

use crate::media::ImageKind;

#[derive(Error, Debug)]
pub enum SimstegError {
    /// Represents an image kind other than PNG or JPEG, derived from the file extension
    #[error("Image kind is not supported: `{0}`")]
    UnsupportedImageKind(String),

    /// Represents a malformed image, the end-of-data marker (`IEND` or `FF D9`) was not found
    #[error("Malformed image: no {kind} end-of-data marker found")]
    MissingEndOfData { kind: ImageKind },

    /// Represents a start marker without its matching end marker before the end of the buffer
    #[error("Unterminated segment: `{terminator}` not found after offset {offset:#x}")]
    UnterminatedSegment { offset: usize, terminator: String },

    /// Represents the error of invalid UTF-8 text data found inside of a text segment
    #[error("Invalid text data found inside a text segment")]
    InvalidTextEncoding(#[from] FromUtf8Error),

    /// Represents an error caused by an invalid filename, for example invalid UTF-8 or a name without a base name
    #[error("A file with an invalid file name was provided")]
    InvalidFileName,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// Represents a target file that exists and must not be overwritten
    #[error("Target file {0:?} already exists")]
    TargetExists(PathBuf),

    #[error("No carrier image set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing text message or file to hide")]
    MissingPayload,

    #[error("API Error: Only one of text message or file can be hidden at once")]
    AmbiguousPayload,
}
