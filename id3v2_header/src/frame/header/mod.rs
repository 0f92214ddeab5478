//! ID3v2 frame header decoding
//!
//! ```rust
//! use id3v2_header::Version;
//! use id3v2_header::config::ParseOptions;
//! use id3v2_header::frame::header::FrameHeader;
//!
//! let version = Version {
//! 	major: 2,
//! 	revision: 0,
//! };
//!
//! assert_eq!(FrameHeader::header_size(version), Some(6));
//!
//! // Padding
//! let header = FrameHeader::parse(&mut &[0; 6][..], version, ParseOptions::new());
//! assert!(matches!(header, Ok(None)));
//! ```

mod parse;

use super::FrameFlags;
use crate::config::ParseOptions;
use crate::error::FrameHeaderError;
use crate::header::Version;

use std::fmt::{Display, Formatter};
use std::io::Read;

/// An ID3v2 frame header
///
/// The layout depends on the tag version:
///
/// | Version | ID      | Size                          | Flags   |
/// |---------|---------|-------------------------------|---------|
/// | 2.2     | 3 bytes | 3 bytes                       | -       |
/// | 2.3     | 4 bytes | 4 bytes                       | 2 bytes |
/// | 2.4     | 4 bytes | 4 bytes, synchsafe            | 2 bytes |
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameHeader {
	/// The frame ID
	pub id: FrameId,
	/// The size of the frame content (**DOES NOT INCLUDE THE FRAME HEADER**)
	pub size: u32,
	/// The frame flags
	pub flags: FrameFlags,
}

impl FrameHeader {
	/// Read a single frame header from `reader`
	///
	/// `version` is the version of the tag the frame belongs to, see [`Header::version`](crate::Header::version).
	///
	/// This returns `Ok(None)` when the header starts with a null byte, which means that the
	/// tag padding has been reached.
	///
	/// # Errors
	///
	/// * [`FrameHeaderError::UnsupportedVersion`] - `version.major` is not 2, 3, or 4. Nothing is read.
	/// * [`FrameHeaderError::Io`] - `reader` doesn't have enough bytes for a frame header
	/// * [`FrameHeaderError::BadFrameId`] - The ID contains invalid characters
	/// * [`FrameHeaderError::InvalidSize`] - The frame has no content, or, in ID3v2.4, its size
	///   isn't synchsafe. Depends on the [`ParsingMode`](crate::config::ParsingMode).
	/// * [`FrameHeaderError::UnknownFlag`] - The flags contain undefined bits, with
	///   [`ParsingMode::Strict`](crate::config::ParsingMode::Strict)
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_header::Version;
	/// use id3v2_header::config::ParseOptions;
	/// use id3v2_header::frame::FrameHeader;
	///
	/// # fn main() -> Result<(), id3v2_header::error::FrameHeaderError> {
	/// let bytes = *b"TALB\x00\x00\x00\x0A\x00\x00";
	/// let version = Version {
	/// 	major: 3,
	/// 	revision: 0,
	/// };
	///
	/// let header = FrameHeader::parse(&mut &bytes[..], version, ParseOptions::new())?
	/// 	.expect("not padding");
	///
	/// assert_eq!(header.id.as_str(), "TALB");
	/// assert_eq!(header.size, 10);
	/// # Ok(()) }
	/// ```
	pub fn parse<R>(
		reader: &mut R,
		version: Version,
		parse_options: ParseOptions,
	) -> Result<Option<Self>, FrameHeaderError>
	where
		R: Read,
	{
		match version.major {
			2 => parse::parse_v2_header(reader, parse_options),
			3 => parse::parse_header(reader, false, parse_options),
			4 => parse::parse_header(reader, true, parse_options),
			major => Err(FrameHeaderError::UnsupportedVersion(major)),
		}
	}

	/// The size of a frame header in a tag of the given version
	///
	/// This is `None` for unsupported versions.
	pub fn header_size(version: Version) -> Option<u32> {
		match version.major {
			2 => Some(6),
			3 | 4 => Some(10),
			_ => None,
		}
	}
}

/// An ID3v2 frame ID
///
/// This is 4 characters for ID3v2.3/4 frames, and 3 characters for ID3v2.2 frames. Every character
/// is within `'A'..='Z'` or `'0'..='9'`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameId(String);

impl FrameId {
	/// Attempts to create a `FrameId` from an ID string
	///
	/// # Errors
	///
	/// * `id` contains invalid characters (must be 'A'..='Z' and '0'..='9')
	/// * `id` is an invalid length (must be 3 or 4)
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_header::frame::FrameId;
	///
	/// # fn main() -> Result<(), id3v2_header::error::FrameHeaderError> {
	/// let id = FrameId::new("TPE1")?;
	/// assert_eq!(id.as_str(), "TPE1");
	///
	/// assert!(FrameId::new("tpe1").is_err());
	/// # Ok(()) }
	/// ```
	pub fn new<I>(id: I) -> Result<Self, FrameHeaderError>
	where
		I: Into<String>,
	{
		let id = id.into();
		Self::verify_id(id.as_bytes())?;
		Ok(Self(id))
	}

	pub(super) fn from_bytes(id: &[u8]) -> Result<Self, FrameHeaderError> {
		Self::verify_id(id)?;

		// Verified to be ASCII
		Ok(Self(id.iter().map(|b| char::from(*b)).collect()))
	}

	fn verify_id(id: &[u8]) -> Result<(), FrameHeaderError> {
		let valid_len = matches!(id.len(), 3 | 4);
		if !valid_len
			|| !id
				.iter()
				.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
		{
			return Err(FrameHeaderError::BadFrameId(id.to_vec()));
		}

		Ok(())
	}

	/// Whether this is an ID3v2.2 (3 character) ID
	pub fn is_outdated(&self) -> bool {
		self.0.len() == 3
	}

	/// Extracts the string from the ID
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Display for FrameId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
