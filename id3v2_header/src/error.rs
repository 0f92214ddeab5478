//! Contains the errors that can arise while decoding headers
//!
//! Each layer has its own error type:
//!
//! * [`HeaderError`] - Decoding the 10 byte tag header
//! * [`FrameHeaderError`] - Decoding a single frame header
//! * [`TagError`] - Walking an entire tag, wrapping both of the above

use std::fmt::{Display, Formatter};

/// Alias for `Result<T, HeaderError>`
pub type Result<T> = std::result::Result<T, HeaderError>;

/// The errors that can occur while decoding an ID3v2 tag header
///
/// No variant is ever retried internally. [`HeaderError::NotId3`] simply means that no tag is present,
/// whereas [`HeaderError::InvalidSize`] indicates a corrupted tag.
#[derive(Debug)]
pub enum HeaderError {
	/// The header could not be read, see [`HeaderError::io_cause`]
	///
	/// This includes streams with fewer than 10 bytes available.
	Io(std::io::Error),
	/// The stream does not start with the `"ID3"` identifier
	NotId3,
	/// A byte of the size field has its high bit set, so the size is not synchsafe
	InvalidSize,
}

impl HeaderError {
	/// A short description of the error
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_header::error::HeaderError;
	///
	/// assert_eq!(HeaderError::NotId3.description(), "not an ID3 header");
	/// ```
	pub fn description(&self) -> &str {
		match self {
			Self::Io(_) => "I/O error while reading the header",
			Self::NotId3 => "not an ID3 header",
			Self::InvalidSize => "tag size is not a valid synchsafe integer",
		}
	}

	/// The underlying I/O error, only present for [`HeaderError::Io`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_header::error::HeaderError;
	///
	/// let short = [b'I', b'D', b'3'];
	/// let err = id3v2_header::parse(&mut &short[..]).unwrap_err();
	///
	/// let cause = err.io_cause().expect("should be an I/O error");
	/// assert_eq!(cause.kind(), std::io::ErrorKind::UnexpectedEof);
	/// ```
	pub fn io_cause(&self) -> Option<&std::io::Error> {
		match self {
			Self::Io(err) => Some(err),
			Self::NotId3 | Self::InvalidSize => None,
		}
	}
}

impl Display for HeaderError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Io(err) => write!(f, "ID3v2 header: {err}"),
			_ => write!(f, "ID3v2 header: {}", self.description()),
		}
	}
}

impl std::error::Error for HeaderError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Io(err) => Some(err),
			_ => None,
		}
	}
}

impl From<std::io::Error> for HeaderError {
	fn from(input: std::io::Error) -> Self {
		Self::Io(input)
	}
}

/// The errors that can occur while decoding an ID3v2 frame header
#[derive(Debug)]
#[non_exhaustive]
pub enum FrameHeaderError {
	/// The frame header could not be read
	Io(std::io::Error),
	/// The frame size is either zero, or not synchsafe in an ID3v2.4 tag
	InvalidSize,
	/// The frame flags contain bits that are not defined for the tag version
	///
	/// This holds only the undefined bits.
	UnknownFlag(u16),
	/// The frame ID contains characters outside of `'A'..='Z'` and `'0'..='9'`
	BadFrameId(Vec<u8>),
	/// Frame headers are only defined for major versions 2, 3, and 4
	UnsupportedVersion(u8),
}

impl FrameHeaderError {
	/// A short description of the error
	pub fn description(&self) -> &str {
		match self {
			Self::Io(_) => "I/O error while reading a frame header",
			Self::InvalidSize => "frame size is invalid",
			Self::UnknownFlag(_) => "unknown frame flag found",
			Self::BadFrameId(_) => "frame ID contains invalid characters",
			Self::UnsupportedVersion(_) => "unsupported ID3v2 major version",
		}
	}

	/// The underlying I/O error, only present for [`FrameHeaderError::Io`]
	pub fn io_cause(&self) -> Option<&std::io::Error> {
		match self {
			Self::Io(err) => Some(err),
			_ => None,
		}
	}
}

impl Display for FrameHeaderError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Io(err) => write!(f, "ID3v2 frame header: {err}"),
			Self::UnknownFlag(flags) => write!(f, "ID3v2 frame header: unknown flags: {flags:#06x}"),
			Self::BadFrameId(frame_id) => {
				write!(f, "ID3v2 frame header: failed to parse a frame ID: 0x{frame_id:x?}")
			},
			Self::UnsupportedVersion(major) => write!(
				f,
				"ID3v2 frame header: found major version {major}, expected any of: (2, 3, 4)"
			),
			Self::InvalidSize => write!(f, "ID3v2 frame header: {}", self.description()),
		}
	}
}

impl std::error::Error for FrameHeaderError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Io(err) => Some(err),
			_ => None,
		}
	}
}

impl From<std::io::Error> for FrameHeaderError {
	fn from(input: std::io::Error) -> Self {
		Self::Io(input)
	}
}

/// The errors that can occur while walking an entire ID3v2 tag
#[derive(Debug)]
#[non_exhaustive]
pub enum TagError {
	/// The tag header is invalid
	Header(HeaderError),
	/// A frame header is invalid
	FrameHeader(FrameHeaderError),
	/// The tag body could not be read, or ended early
	Io(std::io::Error),
	/// A compressed ID3v2.2 tag was encountered
	///
	/// ID3v2.2 never defined a compression scheme, so these tags are ignored entirely.
	V2Compression,
	/// The extended header has an invalid size (must be >= 6 bytes and less than the tag size)
	BadExtendedHeaderSize,
	/// A frame claims more bytes than are left in the tag
	BadFrameLength,
}

impl TagError {
	/// A short description of the error
	pub fn description(&self) -> &str {
		match self {
			Self::Header(err) => err.description(),
			Self::FrameHeader(err) => err.description(),
			Self::Io(_) => "I/O error while reading the tag body",
			Self::V2Compression => "encountered a compressed ID3v2.2 tag",
			Self::BadExtendedHeaderSize => "found an extended header with an invalid size",
			Self::BadFrameLength => "frame is larger than the remaining tag",
		}
	}

	/// The underlying I/O error, at any layer
	pub fn io_cause(&self) -> Option<&std::io::Error> {
		match self {
			Self::Header(err) => err.io_cause(),
			Self::FrameHeader(err) => err.io_cause(),
			Self::Io(err) => Some(err),
			_ => None,
		}
	}
}

impl Display for TagError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			// Conversions
			Self::Header(err) => write!(f, "{err}"),
			Self::FrameHeader(err) => write!(f, "{err}"),
			Self::Io(err) => write!(f, "ID3v2 tag: {err}"),

			_ => write!(f, "ID3v2 tag: {}", self.description()),
		}
	}
}

impl std::error::Error for TagError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Header(err) => Some(err),
			Self::FrameHeader(err) => Some(err),
			Self::Io(err) => Some(err),
			_ => None,
		}
	}
}

impl From<HeaderError> for TagError {
	fn from(input: HeaderError) -> Self {
		Self::Header(input)
	}
}

impl From<FrameHeaderError> for TagError {
	fn from(input: FrameHeaderError) -> Self {
		Self::FrameHeader(input)
	}
}

impl From<std::io::Error> for TagError {
	fn from(input: std::io::Error) -> Self {
		Self::Io(input)
	}
}
