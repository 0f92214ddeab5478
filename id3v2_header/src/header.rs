//! The ID3v2 tag header
//!
//! Every ID3v2 tag starts with the following 10 bytes:
//!
//! | Offset | Field         | Size    |
//! |--------|---------------|---------|
//! | 0-2    | `"ID3"`       | 3 bytes |
//! | 3      | Major version | 1 byte  |
//! | 4      | Revision      | 1 byte  |
//! | 5      | Flags         | 1 byte  |
//! | 6-9    | Size          | 4 bytes, synchsafe |

use crate::config::{ParseOptions, ParsingMode};
use crate::error::{HeaderError, Result};
use crate::util::synchsafe::{is_synchsafe, synchsafe_to_u32};

use std::fmt::{Display, Formatter};
use std::io::Read;

/// The identifier every ID3v2 tag starts with
pub const ID3V2_TAG_MARKER: [u8; 3] = *b"ID3";

/// The size of the tag header, as well as the optional ID3v2.4 footer
pub const HEADER_SIZE: u32 = 10;

const FLAG_UNSYNCHRONISATION: u8 = 0x80;
const FLAG_EXTENDED: u8 = 0x40;
const FLAG_EXPERIMENTAL: u8 = 0x20;
const FLAG_FOOTER: u8 = 0x10;

/// The version of an ID3v2 tag
///
/// The "2" in ID3v2 is implied, so an ID3v2.4.0 tag has a `major` of 4 and a `revision` of 0.
/// Any value is accepted, there is no check against known versions.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Version {
	/// The major version
	pub major: u8,
	/// The revision, revisions are backwards compatible
	pub revision: u8,
}

impl Display for Version {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "ID3v2.{}.{}", self.major, self.revision)
	}
}

/// A decoded ID3v2 tag header
///
/// This is only ever handed out by a successful parse, so `valid` is always `true` for
/// a header obtained from [`Header::parse`].
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub struct Header {
	/// Whether the header was successfully parsed
	pub valid: bool,
	/// The tag version
	pub version: Version,
	/// Whether unsynchronisation is applied to the entire tag
	pub unsynchronisation: bool,
	/// Whether the header is followed by an extended header
	pub extended: bool,
	/// Whether the tag is in an experimental stage
	pub experimental: bool,
	/// Whether the tag is followed by a footer
	///
	/// Footers were introduced in ID3v2.4, so this is always `false` for earlier versions.
	/// The footer itself is never read.
	pub footer: bool,
	/// The size of the tag body (**DOES NOT INCLUDE THE HEADER/FOOTER**)
	///
	/// This never exceeds 2^28 - 1.
	pub size: u32,
}

impl Header {
	/// Read a tag header from `reader`
	///
	/// This is [`Header::parse_with_options`] using the default [`ParseOptions`].
	///
	/// # Errors
	///
	/// See [`Header::parse_with_options`]
	pub fn parse<R>(reader: &mut R) -> Result<Self>
	where
		R: Read,
	{
		Self::parse_with_options(reader, ParseOptions::new())
	}

	/// Read a tag header from `reader`
	///
	/// Exactly 10 bytes are consumed, regardless of the outcome. There is no seeking back on failure.
	///
	/// # Errors
	///
	/// * [`HeaderError::Io`] - Fewer than 10 bytes are available, or `reader` fails
	/// * [`HeaderError::NotId3`] - The data doesn't start with `"ID3"`
	/// * [`HeaderError::InvalidSize`] - A size byte has its high bit set, unless
	///   [`ParsingMode::Relaxed`] is used
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_header::config::ParseOptions;
	/// use id3v2_header::header::Header;
	///
	/// # fn main() -> Result<(), id3v2_header::error::HeaderError> {
	/// let bytes = [b'I', b'D', b'3', 3, 0, 0xA0, 0x00, 0x00, 0x02, 0x01];
	/// let header = Header::parse_with_options(&mut &bytes[..], ParseOptions::new())?;
	///
	/// assert!(header.unsynchronisation);
	/// assert!(!header.extended);
	/// assert!(header.experimental);
	/// # Ok(()) }
	/// ```
	pub fn parse_with_options<R>(reader: &mut R, parse_options: ParseOptions) -> Result<Self>
	where
		R: Read,
	{
		log::debug!("Parsing ID3v2 header");

		let mut header = [0; 10];
		reader.read_exact(&mut header)?;

		if header[..3] != ID3V2_TAG_MARKER {
			return Err(HeaderError::NotId3);
		}

		let version = Version {
			major: header[3],
			revision: header[4],
		};

		let flags = header[5];

		let size_bytes = [header[6], header[7], header[8], header[9]];
		if !is_synchsafe(&size_bytes) {
			if parse_options.parsing_mode != ParsingMode::Relaxed {
				log::debug!("Tag size is not synchsafe: {:02X?}", size_bytes);
				return Err(HeaderError::InvalidSize);
			}

			log::warn!(
				"Tag size is not synchsafe ({:02X?}), discarding the high bits",
				size_bytes
			);
		}

		let size = synchsafe_to_u32(size_bytes);

		log::trace!("Found an {} header, flags: {:#04x}, size: {}", version, flags, size);

		Ok(Header {
			valid: true,
			version,
			unsynchronisation: flags & FLAG_UNSYNCHRONISATION == FLAG_UNSYNCHRONISATION,
			extended: flags & FLAG_EXTENDED == FLAG_EXTENDED,
			experimental: flags & FLAG_EXPERIMENTAL == FLAG_EXPERIMENTAL,
			footer: version.major >= 4 && flags & FLAG_FOOTER == FLAG_FOOTER,
			size,
		})
	}

	/// The total size of the tag, including the header and footer
	///
	/// # Examples
	///
	/// ```rust
	/// # fn main() -> Result<(), id3v2_header::error::HeaderError> {
	/// // ID3v2.4 tag with a footer
	/// let bytes = [b'I', b'D', b'3', 4, 0, 0x10, 0x00, 0x00, 0x00, 0x64];
	/// let header = id3v2_header::parse(&mut &bytes[..])?;
	///
	/// assert_eq!(header.full_tag_size(), 100 + 10 + 10);
	/// # Ok(()) }
	/// ```
	pub fn full_tag_size(&self) -> u32 {
		self.size + HEADER_SIZE + if self.footer { HEADER_SIZE } else { 0 }
	}
}

/// Read a tag header from `reader` with the default [`ParseOptions`]
///
/// See [`Header::parse_with_options`].
///
/// # Errors
///
/// See [`Header::parse_with_options`]
pub fn parse<R>(reader: &mut R) -> Result<Header>
where
	R: Read,
{
	Header::parse(reader)
}
