//! ID3v2 frame headers
//!
//! Only the headers are decoded here. Frame contents are left to the caller.

pub mod header;

pub use header::{FrameHeader, FrameId};

/// Various flags to describe the content of a frame
///
/// ID3v2.2 frames have no flags, so they always use the default (all `false`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct FrameFlags {
	/// Preserve frame on tag edit
	pub tag_alter_preservation: bool,
	/// Preserve frame on file edit
	pub file_alter_preservation: bool,
	/// Frame contents are intended to be read only
	pub read_only: bool,
	/// The frame belongs to a group of frames, identified by an extra byte after the header
	pub grouping_identity: bool,
	/// Frame is zlib compressed
	pub compression: bool,
	/// Frame is encrypted, the method is identified by an extra byte after the header
	pub encryption: bool,
	/// Frame content is unsynchronised
	///
	/// Only exists in ID3v2.4, where unsynchronisation is applied per frame.
	pub unsynchronisation: bool,
	/// Frame has a data length indicator
	///
	/// Only exists in ID3v2.4.
	pub data_length_indicator: bool,
}

impl FrameFlags {
	/// Every flag bit defined by ID3v2.4
	pub const ID3V24_KNOWN_BITS: u16 = 0x7000 | 0x004F;
	/// Every flag bit defined by ID3v2.3
	pub const ID3V23_KNOWN_BITS: u16 = 0xE000 | 0x00E0;

	/// Parse the flags from an ID3v2.4 frame
	///
	/// Undefined bits are ignored, see [`FrameFlags::ID3V24_KNOWN_BITS`].
	pub fn parse_id3v24(flags: u16) -> Self {
		FrameFlags {
			tag_alter_preservation: flags & 0x4000 == 0x4000,
			file_alter_preservation: flags & 0x2000 == 0x2000,
			read_only: flags & 0x1000 == 0x1000,
			grouping_identity: flags & 0x0040 == 0x0040,
			compression: flags & 0x0008 == 0x0008,
			encryption: flags & 0x0004 == 0x0004,
			unsynchronisation: flags & 0x0002 == 0x0002,
			data_length_indicator: flags & 0x0001 == 0x0001,
		}
	}

	/// Parse the flags from an ID3v2.3 frame
	///
	/// Undefined bits are ignored, see [`FrameFlags::ID3V23_KNOWN_BITS`].
	pub fn parse_id3v23(flags: u16) -> Self {
		FrameFlags {
			tag_alter_preservation: flags & 0x8000 == 0x8000,
			file_alter_preservation: flags & 0x4000 == 0x4000,
			read_only: flags & 0x2000 == 0x2000,
			grouping_identity: flags & 0x0020 == 0x0020,
			compression: flags & 0x0080 == 0x0080,
			encryption: flags & 0x0040 == 0x0040,
			unsynchronisation: false,
			data_length_indicator: false,
		}
	}
}
