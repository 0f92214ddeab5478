use std::io::{BufReader, Cursor};

/// Encode `size` as a 4 byte synchsafe integer
pub fn synchsafe(size: u32) -> [u8; 4] {
	assert!(size <= 0x0FFF_FFFF, "{size} does not fit in 28 bits");
	[
		((size >> 21) & 0x7F) as u8,
		((size >> 14) & 0x7F) as u8,
		((size >> 7) & 0x7F) as u8,
		(size & 0x7F) as u8,
	]
}

/// A complete tag header
pub fn header(major: u8, revision: u8, flags: u8, size: [u8; 4]) -> Vec<u8> {
	let mut bytes = b"ID3".to_vec();
	bytes.extend([major, revision, flags]);
	bytes.extend(size);
	bytes
}

/// A tag header followed by `body`
pub fn tag(major: u8, flags: u8, body: &[u8]) -> Vec<u8> {
	let mut bytes = header(major, 0, flags, synchsafe(body.len() as u32));
	bytes.extend(body);
	bytes
}

/// An ID3v2.3 frame, with a plain big endian size
pub fn v3_frame(id: &[u8; 4], flags: u16, content: &[u8]) -> Vec<u8> {
	let mut bytes = id.to_vec();
	bytes.extend((content.len() as u32).to_be_bytes());
	bytes.extend(flags.to_be_bytes());
	bytes.extend(content);
	bytes
}

/// An ID3v2.4 frame, with a synchsafe size
pub fn v4_frame(id: &[u8; 4], flags: u16, content: &[u8]) -> Vec<u8> {
	let mut bytes = id.to_vec();
	bytes.extend(synchsafe(content.len() as u32));
	bytes.extend(flags.to_be_bytes());
	bytes.extend(content);
	bytes
}

/// An ID3v2.2 frame
pub fn v2_frame(id: &[u8; 3], content: &[u8]) -> Vec<u8> {
	let mut bytes = id.to_vec();
	bytes.extend(&(content.len() as u32).to_be_bytes()[1..]);
	bytes.extend(content);
	bytes
}

/// Wrap `bytes` the way a caller would wrap a file
pub fn buffered(bytes: Vec<u8>) -> BufReader<Cursor<Vec<u8>>> {
	BufReader::new(Cursor::new(bytes))
}
