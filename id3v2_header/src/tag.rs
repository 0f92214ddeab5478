//! Walking an entire ID3v2 tag
//!
//! [`Tag::read_from`] decodes the tag header, then every frame header in the tag body. Frame
//! contents are skipped without being inspected.

use crate::config::ParseOptions;
use crate::error::{FrameHeaderError, TagError};
use crate::frame::FrameHeader;
use crate::header::Header;
use crate::util::synchsafe::{UnsynchronizedStream, is_synchsafe, synchsafe_to_u32};

use std::io::{ErrorKind, Read};

use byteorder::{BigEndian, ReadBytesExt};

type Result<T> = std::result::Result<T, TagError>;

/// The frame layout of an ID3v2 tag
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tag {
	header: Header,
	frames: Vec<FrameHeader>,
}

impl Tag {
	/// Read a tag header and all of its frame headers from `reader`
	///
	/// On success, `reader` is positioned directly after the tag body (including any padding).
	/// A footer, if [`Header::footer`] is set, is **not** consumed.
	///
	/// # Errors
	///
	/// * [`TagError::Header`] - See [`Header::parse_with_options`]
	/// * [`TagError::FrameHeader`] - See [`FrameHeader::parse`]
	/// * [`TagError::V2Compression`] - The tag is a compressed ID3v2.2 tag
	/// * [`TagError::BadExtendedHeaderSize`] - The extended header size is invalid
	/// * [`TagError::BadFrameLength`] - A frame is larger than the rest of the tag
	/// * [`TagError::Io`] - `reader` ended before the end of the tag
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_header::config::ParseOptions;
	/// use id3v2_header::tag::Tag;
	///
	/// # fn main() -> Result<(), id3v2_header::error::TagError> {
	/// let mut bytes = vec![b'I', b'D', b'3', 4, 0, 0x00, 0x00, 0x00, 0x00, 0x1C];
	/// bytes.extend(b"TPE1\x00\x00\x00\x04\x00\x00\x00Foo");
	/// bytes.extend(b"TALB\x00\x00\x00\x04\x00\x00\x00Bar");
	///
	/// let tag = Tag::read_from(&mut &bytes[..], ParseOptions::new())?;
	///
	/// let ids: Vec<&str> = tag.frame_headers().iter().map(|f| f.id.as_str()).collect();
	/// assert_eq!(ids, ["TPE1", "TALB"]);
	/// # Ok(()) }
	/// ```
	pub fn read_from<R>(reader: &mut R, parse_options: ParseOptions) -> Result<Self>
	where
		R: Read,
	{
		let header = Header::parse_with_options(reader, parse_options)?;

		log::debug!(
			"Reading ID3v2 tag, size: {}, version: {}",
			header.size,
			header.version
		);

		if FrameHeader::header_size(header.version).is_none() {
			return Err(FrameHeaderError::UnsupportedVersion(header.version.major).into());
		}

		// Compression was a flag only used in ID3v2.2 (bit 6).
		// No compression scheme was ever defined for ID3v2.2, so the tag can't be read
		if header.version.major == 2 && header.extended {
			return Err(TagError::V2Compression);
		}

		let mut extended_size = 0;
		if header.extended {
			extended_size = skip_extended_header(reader, &header)?;
		}

		let mut tag_bytes = reader.take(u64::from(header.size - extended_size));

		// ID3v2.4 applies unsynchronisation per frame, with the sizes covering the raw data
		let frames = if header.unsynchronisation && header.version.major < 4 {
			let mut unsynchronized_reader = UnsynchronizedStream::new(&mut tag_bytes);
			read_all_frame_headers(&mut unsynchronized_reader, &header, parse_options)?
		} else {
			read_all_frame_headers(&mut tag_bytes, &header, parse_options)?
		};

		// Throw away the rest of the tag (padding, bad frames)
		std::io::copy(&mut tag_bytes, &mut std::io::sink())?;
		if tag_bytes.limit() > 0 {
			log::debug!("Tag body is missing {} bytes", tag_bytes.limit());
			return Err(std::io::Error::new(ErrorKind::UnexpectedEof, "tag body ended early").into());
		}

		Ok(Tag { header, frames })
	}

	/// The tag header
	pub fn header(&self) -> &Header {
		&self.header
	}

	/// All frame headers, in the order they appear in the tag
	pub fn frame_headers(&self) -> &[FrameHeader] {
		&self.frames
	}

	/// Get the first frame header with the given ID
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_header::config::ParseOptions;
	/// use id3v2_header::tag::Tag;
	///
	/// # fn main() -> Result<(), id3v2_header::error::TagError> {
	/// let mut bytes = vec![b'I', b'D', b'3', 3, 0, 0x00, 0x00, 0x00, 0x00, 0x0D];
	/// bytes.extend(b"TRCK\x00\x00\x00\x03\x00\x00\x0012");
	///
	/// let tag = Tag::read_from(&mut &bytes[..], ParseOptions::new())?;
	///
	/// assert_eq!(tag.get("TRCK").map(|f| f.size), Some(3));
	/// assert!(tag.get("TIT2").is_none());
	/// # Ok(()) }
	/// ```
	pub fn get(&self, id: &str) -> Option<&FrameHeader> {
		self.frames.iter().find(|frame| frame.id.as_str() == id)
	}

	/// Consume the tag, returning its frame headers
	pub fn into_frame_headers(self) -> Vec<FrameHeader> {
		self.frames
	}
}

// Returns the number of bytes of the tag body taken up by the extended header
fn skip_extended_header<R>(reader: &mut R, header: &Header) -> Result<u32>
where
	R: Read,
{
	// Not even room for the size field, don't read past the tag
	if header.size < 4 {
		return Err(TagError::BadExtendedHeaderSize);
	}

	let size = if header.version.major == 4 {
		// The size is synchsafe, and includes itself
		let mut size_bytes = [0; 4];
		reader.read_exact(&mut size_bytes)?;

		if !is_synchsafe(&size_bytes) {
			return Err(TagError::BadExtendedHeaderSize);
		}

		let size = synchsafe_to_u32(size_bytes);
		if size < 6 {
			return Err(TagError::BadExtendedHeaderSize);
		}

		size
	} else {
		// The size excludes itself
		reader.read_u32::<BigEndian>()?.saturating_add(4)
	};

	if size >= header.size {
		return Err(TagError::BadExtendedHeaderSize);
	}

	log::trace!("Skipping extended header of size {}", size);

	let remaining = u64::from(size - 4);
	let skipped = std::io::copy(&mut reader.take(remaining), &mut std::io::sink())?;
	if skipped != remaining {
		return Err(std::io::Error::from(ErrorKind::UnexpectedEof).into());
	}

	Ok(size)
}

fn read_all_frame_headers<R>(
	reader: &mut R,
	header: &Header,
	parse_options: ParseOptions,
) -> Result<Vec<FrameHeader>>
where
	R: Read,
{
	let mut frames = Vec::new();

	loop {
		let frame_header = match FrameHeader::parse(reader, header.version, parse_options) {
			Ok(Some(frame_header)) => frame_header,
			Ok(None) => {
				log::trace!("Reached padding after {} frames", frames.len());
				break;
			},
			// The tag body is exhausted
			Err(FrameHeaderError::Io(err)) if err.kind() == ErrorKind::UnexpectedEof => break,
			Err(err) => return Err(err.into()),
		};

		skip_frame(reader, frame_header.size)?;
		frames.push(frame_header);
	}

	Ok(frames)
}

fn skip_frame(reader: &mut impl Read, size: u32) -> Result<()> {
	log::trace!("Skipping frame of size {}", size);

	let size = u64::from(size);
	let mut reader = reader.take(size);
	let skipped = std::io::copy(&mut reader, &mut std::io::sink())?;
	debug_assert!(skipped <= size);
	if skipped != size {
		return Err(TagError::BadFrameLength);
	}

	Ok(())
}
