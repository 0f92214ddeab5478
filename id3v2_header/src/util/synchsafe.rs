//! Utilities for working with synchsafe and unsynchronized ID3v2 content
//!
//! A byte with all of its bits set can be mistaken for the start of an MPEG frame sync. ID3v2 avoids
//! this in two ways:
//!
//! * Size fields are "synchsafe", only the low 7 bits of each byte are used
//! * Content may be "unsynchronized", every `0xFF` that could start a false sync is followed by a `0x00`

use std::io::Read;

/// The largest value a 4 byte synchsafe integer can hold (2^28 - 1)
pub const MAX_SYNCHSAFE_U32: u32 = 0x0FFF_FFFF;

/// Convert a 4 byte synchsafe integer into a regular integer
///
/// Each byte contributes its low 7 bits, most significant byte first. The high bit of every byte is
/// masked off, so this never fails and the result is always <= [`MAX_SYNCHSAFE_U32`]. Use
/// [`is_synchsafe`] to check whether the input was valid in the first place.
///
/// # Examples
///
/// ```rust
/// use id3v2_header::util::synchsafe::synchsafe_to_u32;
///
/// assert_eq!(synchsafe_to_u32([0x00, 0x00, 0x02, 0x01]), 257);
/// assert_eq!(synchsafe_to_u32([0x7F, 0x7F, 0x7F, 0x7F]), 268_435_455);
/// ```
pub fn synchsafe_to_u32(bytes: [u8; 4]) -> u32 {
	(u32::from(bytes[0] & 0x7F) << 21)
		| (u32::from(bytes[1] & 0x7F) << 14)
		| (u32::from(bytes[2] & 0x7F) << 7)
		| u32::from(bytes[3] & 0x7F)
}

/// Whether every byte has its high bit clear
///
/// # Examples
///
/// ```rust
/// use id3v2_header::util::synchsafe::is_synchsafe;
///
/// assert!(is_synchsafe(&[0x00, 0x00, 0x02, 0x01]));
/// assert!(!is_synchsafe(&[0x00, 0x00, 0x80, 0x01]));
/// ```
pub fn is_synchsafe(bytes: &[u8]) -> bool {
	bytes.iter().all(|b| b & 0x80 == 0)
}

/// A reader for unsynchronized content
///
/// This removes every `0x00` that directly follows a `0xFF`.
///
/// # Examples
///
/// ```rust
/// use std::io::{Cursor, Read};
/// use id3v2_header::util::synchsafe::UnsynchronizedStream;
///
/// # fn main() -> std::io::Result<()> {
/// // The content has two `0xFF 0x00` pairs, which will be removed
/// let content = [0xFF, 0x00, 0x1A, 0xFF, 0x00, 0x15];
///
/// let mut unsynchronized_reader = UnsynchronizedStream::new(Cursor::new(content));
///
/// let mut unsynchronized_content = Vec::new();
/// unsynchronized_reader.read_to_end(&mut unsynchronized_content)?;
///
/// // All null bytes following `0xFF` have been removed
/// assert_eq!(unsynchronized_content, [0xFF, 0x1A, 0xFF, 0x15]);
/// # Ok(()) }
/// ```
pub struct UnsynchronizedStream<R> {
	reader: R,
	// Same buffer size as `BufReader`
	buf: Box<[u8; 8 * 1024]>,
	bytes_available: usize,
	pos: usize,
	encountered_ff: bool,
}

impl<R> UnsynchronizedStream<R> {
	/// Create a new [`UnsynchronizedStream`]
	pub fn new(reader: R) -> Self {
		Self {
			reader,
			buf: Box::new([0; 8 * 1024]),
			bytes_available: 0,
			pos: 0,
			encountered_ff: false,
		}
	}

	/// Extract the reader, discarding the [`UnsynchronizedStream`]
	///
	/// NOTE: Any bytes already buffered from the inner reader are lost.
	pub fn into_inner(self) -> R {
		self.reader
	}

	/// Get a reference to the inner reader
	pub fn get_ref(&self) -> &R {
		&self.reader
	}
}

impl<R: Read> Read for UnsynchronizedStream<R> {
	fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
		let dest_len = buf.len();
		if dest_len == 0 {
			return Ok(0);
		}

		let mut dest_pos = 0;
		while dest_pos < dest_len {
			if self.pos >= self.bytes_available {
				self.bytes_available = self.reader.read(&mut self.buf[..])?;
				self.pos = 0;
			}

			// Exhausted the reader
			if self.bytes_available == 0 {
				break;
			}

			if self.encountered_ff {
				self.encountered_ff = false;

				// Only skip the next byte if this is valid unsynchronization
				if self.buf[self.pos] == 0 {
					self.pos += 1;
					continue;
				}
			}

			let current_byte = self.buf[self.pos];
			buf[dest_pos] = current_byte;
			dest_pos += 1;
			self.pos += 1;

			if current_byte == 0xFF {
				self.encountered_ff = true;
			}
		}

		Ok(dest_pos)
	}
}
