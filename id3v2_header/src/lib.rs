//! Decoding of ID3v2 tag headers
//!
//! An ID3v2 tag starts with a fixed 10 byte header describing its version, flags, and the size of
//! the tag body that follows. This crate validates and decodes that header, and optionally walks the
//! body to list its frame headers without touching frame contents.
//!
//! # Examples
//!
//! ## Reading a tag header
//!
//! ```rust
//! use id3v2_header::error::HeaderError;
//!
//! # fn main() -> Result<(), HeaderError> {
//! let bytes = [b'I', b'D', b'3', 4, 0, 0x00, 0x00, 0x00, 0x02, 0x01];
//! let header = id3v2_header::parse(&mut &bytes[..])?;
//!
//! assert!(header.valid);
//! assert_eq!(header.version.major, 4);
//! assert_eq!(header.size, 257);
//! # Ok(()) }
//! ```
//!
//! ## Files without a tag
//!
//! A missing tag is not corruption, it is reported as [`HeaderError::NotId3`](error::HeaderError::NotId3):
//!
//! ```rust
//! use id3v2_header::error::HeaderError;
//!
//! let bytes = *b"\xFF\xFB\x90\x64\x00\x00\x00\x00\x00\x00";
//! let result = id3v2_header::parse(&mut &bytes[..]);
//!
//! assert!(matches!(result, Err(HeaderError::NotId3)));
//! ```
//!
//! ## Listing frame headers
//!
//! ```rust
//! use id3v2_header::config::ParseOptions;
//! use id3v2_header::tag::Tag;
//!
//! # fn main() -> Result<(), id3v2_header::error::TagError> {
//! let mut bytes = vec![b'I', b'D', b'3', 3, 0, 0x00, 0x00, 0x00, 0x00, 0x10];
//! // A single "TIT2" frame with a 6 byte body
//! bytes.extend(b"TIT2\x00\x00\x00\x06\x00\x00\x00Title");
//!
//! let tag = Tag::read_from(&mut &bytes[..], ParseOptions::new())?;
//!
//! assert_eq!(tag.frame_headers().len(), 1);
//! assert_eq!(tag.frame_headers()[0].id.as_str(), "TIT2");
//! # Ok(()) }
//! ```

pub mod config;
pub mod error;
pub mod frame;
pub mod header;
pub(crate) mod macros;
pub mod tag;
pub mod util;

pub use header::{Header, Version, parse};
pub use util::synchsafe::synchsafe_to_u32;
