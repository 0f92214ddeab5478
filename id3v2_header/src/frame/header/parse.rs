use super::{FrameHeader, FrameId};
use crate::config::ParseOptions;
use crate::error::FrameHeaderError;
use crate::frame::FrameFlags;
use crate::macros::parse_mode_choice;
use crate::util::synchsafe::{is_synchsafe, synchsafe_to_u32};

use std::io::Read;

use byteorder::{BigEndian, ByteOrder};

type Result<T> = std::result::Result<T, FrameHeaderError>;

pub(super) fn parse_v2_header<R>(
	reader: &mut R,
	parse_options: ParseOptions,
) -> Result<Option<FrameHeader>>
where
	R: Read,
{
	let mut header = [0; 6];
	reader.read_exact(&mut header)?;

	// Assume we just started reading padding
	if header[0] == 0 {
		return Ok(None);
	}

	let id = FrameId::from_bytes(&header[..3])?;
	let size = BigEndian::read_u24(&header[3..]);
	verify_size(&id, size, parse_options)?;

	log::trace!("Found frame \"{}\", size: {}", id, size);

	// V2 doesn't store flags
	Ok(Some(FrameHeader {
		id,
		size,
		flags: FrameFlags::default(),
	}))
}

pub(super) fn parse_header<R>(
	reader: &mut R,
	synchsafe: bool,
	parse_options: ParseOptions,
) -> Result<Option<FrameHeader>>
where
	R: Read,
{
	let parsing_mode = parse_options.parsing_mode;

	let mut header = [0; 10];
	reader.read_exact(&mut header)?;

	// Assume we just started reading padding
	if header[0] == 0 {
		return Ok(None);
	}

	// For some reason, some apps make v3 tags with v2 frame IDs.
	// The actual frame header is v3 though
	let mut id_end = 4;
	if header[3] == 0 && !synchsafe {
		log::warn!("Found a v2 frame ID in a v3 tag");
		id_end = 3;
	}

	let id = FrameId::from_bytes(&header[..id_end])?;

	let size_bytes = [header[4], header[5], header[6], header[7]];
	let size = if synchsafe {
		if !is_synchsafe(&size_bytes) {
			parse_mode_choice!(
				parsing_mode,
				RELAXED: log::warn!(
					"Size of frame \"{}\" is not synchsafe ({:02X?}), discarding the high bits",
					id,
					size_bytes
				),
				DEFAULT: return Err(FrameHeaderError::InvalidSize)
			);
		}

		synchsafe_to_u32(size_bytes)
	} else {
		BigEndian::read_u32(&size_bytes)
	};

	let flags = BigEndian::read_u16(&header[8..]);
	let known_bits = if synchsafe {
		FrameFlags::ID3V24_KNOWN_BITS
	} else {
		FrameFlags::ID3V23_KNOWN_BITS
	};

	if flags & !known_bits != 0 {
		parse_mode_choice!(
			parsing_mode,
			STRICT: return Err(FrameHeaderError::UnknownFlag(flags & !known_bits)),
			BESTATTEMPT: log::warn!(
				"Frame \"{}\" has undefined flags set ({:#06x}), ignoring them",
				id,
				flags & !known_bits
			),
		);
	}

	let flags = if synchsafe {
		FrameFlags::parse_id3v24(flags)
	} else {
		FrameFlags::parse_id3v23(flags)
	};

	verify_size(&id, size, parse_options)?;

	log::trace!("Found frame \"{}\", size: {}, flags: {:?}", id, size, flags);

	Ok(Some(FrameHeader { id, size, flags }))
}

fn verify_size(id: &FrameId, size: u32, parse_options: ParseOptions) -> Result<()> {
	if size == 0 {
		let parsing_mode = parse_options.parsing_mode;
		parse_mode_choice!(
			parsing_mode,
			STRICT: return Err(FrameHeaderError::InvalidSize),
			BESTATTEMPT: log::warn!("Frame \"{}\" is empty", id),
		);
	}

	Ok(())
}
