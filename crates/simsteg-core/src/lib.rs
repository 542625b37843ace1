//! # Simsteg Core API
//!
//! Hides a text message or a file behind the end-of-data marker of a PNG
//! (`IEND`) or JPEG (`FF D9`) image. The image stays valid, viewers stop
//! reading at the marker. Nothing is concealed in pixel data, encrypted or
//! compressed, the payload sits in plain sight for anybody looking at the
//! bytes.
//!
//! The in-memory core is [`framing::embed`] for writing and
//! [`framing::FrameScanner`] for reading. The [`api`] builders add reading
//! and writing files around it.
//!
//! # Usage Examples
//!
//! ## Hide and find a message in memory
//!
//! ```rust
//! use simsteg_core::framing::{embed, FrameScanner};
//! use simsteg_core::{ImageKind, Segment, TextSegment};
//!
//! let image = b"\x89PNG...IEND\xAE\x42\x60\x82";
//! let encoded = embed(image, &TextSegment::new("hello").into());
//!
//! let report = FrameScanner::new(&encoded.bytes, ImageKind::Png)?.scan()?;
//! assert_eq!(report.segments, vec![Segment::from(TextSegment::new("hello"))]);
//! # Ok::<(), simsteg_core::SimstegError>(())
//! ```
//!
//! ## Hide a file inside an image
//!
//! ```rust,no_run
//! simsteg_core::api::hide::prepare()
//!     .with_file("Cargo.toml")
//!     .with_image("carrier-image.png")
//!     .with_output("image-with-a-file-inside.png")
//!     .execute()
//!     .expect("Failed to hide file in image");
//! ```
//!
//! ## Unveil data from an image
//!
//! ```rust,no_run
//! let report = simsteg_core::api::unveil::prepare()
//!     .from_secret_file("image-with-a-file-inside.png")
//!     .into_output_folder("/tmp")
//!     .execute()
//!     .expect("Failed to unveil data from image");
//!
//! for text in report.texts() {
//!     println!("{text}");
//! }
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod commands;
pub mod error;
pub mod framing;
pub mod media;
pub mod result;
pub mod segment;

pub use crate::api::{Overwrite, OverwritePolicy};
pub use crate::error::SimstegError;
pub use crate::media::ImageKind;
pub use crate::result::Result;
pub use crate::segment::{FileSegment, Framed, Segment, TextSegment};
