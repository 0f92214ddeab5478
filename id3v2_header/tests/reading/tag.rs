use crate::util;

use id3v2_header::config::{ParseOptions, ParsingMode};
use id3v2_header::error::{FrameHeaderError, TagError};
use id3v2_header::frame::FrameFlags;
use id3v2_header::tag::Tag;

use std::io::{ErrorKind, Read};

fn read(bytes: Vec<u8>) -> Result<Tag, TagError> {
	Tag::read_from(&mut util::buffered(bytes), ParseOptions::new())
}

fn ids(tag: &Tag) -> Vec<&str> {
	tag.frame_headers().iter().map(|f| f.id.as_str()).collect()
}

#[test_log::test]
fn v23_frames() {
	let mut body = util::v3_frame(b"TIT2", 0x0000, b"\x00Title");
	body.extend(util::v3_frame(b"TPE1", 0x0000, b"\x00Artist"));
	body.extend(util::v3_frame(b"APIC", 0x8000, &[0xFF; 300]));
	body.extend([0; 100]);

	let tag = read(util::tag(3, 0x00, &body)).unwrap();

	assert_eq!(ids(&tag), ["TIT2", "TPE1", "APIC"]);
	assert_eq!(tag.get("TPE1").unwrap().size, 7);

	let apic = tag.get("APIC").unwrap();
	assert_eq!(apic.size, 300);
	assert!(apic.flags.tag_alter_preservation);
}

#[test_log::test]
fn v24_frames() {
	// Large enough that the synchsafe and plain encodings differ
	let mut body = util::v4_frame(b"PRIV", 0x0001, &[0xAB; 200]);
	body.extend(util::v4_frame(b"TALB", 0x0000, b"\x03Album"));

	let tag = read(util::tag(4, 0x00, &body)).unwrap();

	assert_eq!(ids(&tag), ["PRIV", "TALB"]);
	assert_eq!(tag.frame_headers()[0].size, 200);
	assert!(tag.frame_headers()[0].flags.data_length_indicator);
	assert_eq!(tag.frame_headers()[1].flags, FrameFlags::default());
}

#[test_log::test]
fn v22_frames() {
	let mut body = util::v2_frame(b"TT2", b"\x00Title");
	body.extend(util::v2_frame(b"TP1", b"\x00Artist"));

	let tag = read(util::tag(2, 0x00, &body)).unwrap();

	assert_eq!(ids(&tag), ["TT2", "TP1"]);
	assert!(tag.frame_headers().iter().all(|f| f.id.is_outdated()));
}

#[test_log::test]
fn v23_extended_header() {
	// Size excludes itself, 2 flag bytes + 4 bytes of padding size
	let mut body = vec![0x00, 0x00, 0x00, 0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
	body.extend(util::v3_frame(b"TIT2", 0x0000, b"\x00Title"));

	let tag = read(util::tag(3, 0x40, &body)).unwrap();

	assert!(tag.header().extended);
	assert_eq!(ids(&tag), ["TIT2"]);
}

#[test_log::test]
fn v24_extended_header() {
	// Size includes itself, 1 flag byte count + 1 flag byte
	let mut body = vec![0x00, 0x00, 0x00, 0x06, 0x01, 0x00];
	body.extend(util::v4_frame(b"TIT2", 0x0000, b"\x03Title"));

	let tag = read(util::tag(4, 0x40, &body)).unwrap();
	assert_eq!(ids(&tag), ["TIT2"]);
}

#[test_log::test]
fn bad_extended_header_size() {
	// Too small
	let mut body = vec![0x00, 0x00, 0x00, 0x05, 0x01];
	body.extend([0; 20]);
	let result = read(util::tag(4, 0x40, &body));
	assert!(matches!(result, Err(TagError::BadExtendedHeaderSize)));

	// Larger than the tag
	let mut body = vec![0x00, 0x00, 0x01, 0x00];
	body.extend([0; 20]);
	let result = read(util::tag(4, 0x40, &body));
	assert!(matches!(result, Err(TagError::BadExtendedHeaderSize)));

	// Not synchsafe
	let mut body = vec![0x00, 0x00, 0x00, 0x86];
	body.extend([0; 200]);
	let result = read(util::tag(4, 0x40, &body));
	assert!(matches!(result, Err(TagError::BadExtendedHeaderSize)));
}

#[test_log::test]
fn v23_unsynchronised_tag() {
	// On disk, every 0xFF in the content is followed by 0x00
	let content = [0xFF, 0xE0, 0xFF, 0x00, 0x12];
	let unsynchronised = [0xFF, 0x00, 0xE0, 0xFF, 0x00, 0x00, 0x12];

	let mut frame = util::v3_frame(b"PRIV", 0x0000, &content);
	frame.truncate(10);
	frame.extend(unsynchronised);

	let mut body = frame;
	body.extend(util::v3_frame(b"TIT2", 0x0000, b"\x00Title"));

	let tag = read(util::tag(3, 0x80, &body)).unwrap();

	assert!(tag.header().unsynchronisation);
	assert_eq!(ids(&tag), ["PRIV", "TIT2"]);
	assert_eq!(tag.get("PRIV").unwrap().size, 5);
}

#[test_log::test]
fn frame_larger_than_tag() {
	let mut frame = util::v3_frame(b"TIT2", 0x0000, b"\x00Title");
	// Claim 100 bytes of content
	frame[7] = 100;

	let result = read(util::tag(3, 0x00, &frame));
	assert!(matches!(result, Err(TagError::BadFrameLength)));
}

#[test_log::test]
fn truncated_tag() {
	let mut body = util::v4_frame(b"TIT2", 0x0000, b"\x03Title");
	body.extend([0; 64]);

	let mut bytes = util::tag(4, 0x00, &body);
	bytes.truncate(bytes.len() - 32);

	let err = read(bytes).unwrap_err();
	assert!(matches!(err, TagError::Io(_)));
	assert_eq!(err.io_cause().unwrap().kind(), ErrorKind::UnexpectedEof);
}

#[test_log::test]
fn invalid_frame_id() {
	let body = util::v3_frame(b"Ti 2", 0x0000, b"\x00Title");

	let result = read(util::tag(3, 0x00, &body));
	assert!(matches!(
		result,
		Err(TagError::FrameHeader(FrameHeaderError::BadFrameId(_)))
	));
}

#[test_log::test]
fn unknown_flags_by_parsing_mode() {
	let body = util::v4_frame(b"TIT2", 0x8000, b"\x03Title");
	let bytes = util::tag(4, 0x00, &body);

	let strict = ParseOptions::new().parsing_mode(ParsingMode::Strict);
	let result = Tag::read_from(&mut &bytes[..], strict);
	assert!(matches!(
		result,
		Err(TagError::FrameHeader(FrameHeaderError::UnknownFlag(0x8000)))
	));

	let tag = Tag::read_from(&mut &bytes[..], ParseOptions::new()).unwrap();
	assert_eq!(ids(&tag), ["TIT2"]);
}

#[test_log::test]
fn footer_is_left_in_the_stream() {
	let body = util::v4_frame(b"TIT2", 0x0000, b"\x03Title");
	let mut bytes = util::tag(4, 0x10, &body);

	let mut footer = b"3DI".to_vec();
	footer.extend(&bytes[3..10]);
	bytes.extend(&footer);

	let mut reader = util::buffered(bytes);
	let tag = Tag::read_from(&mut reader, ParseOptions::new()).unwrap();
	assert!(tag.header().footer);

	let mut rest = Vec::new();
	reader.read_to_end(&mut rest).unwrap();
	assert_eq!(rest, footer);
}

#[test_log::test]
fn no_tag() {
	let mut bytes = vec![0xFF, 0xFB, 0x90, 0x64];
	bytes.extend([0; 400]);

	let err = read(bytes).unwrap_err();
	assert!(matches!(
		err,
		TagError::Header(id3v2_header::error::HeaderError::NotId3)
	));
}
