#![no_main]

use std::io::Cursor;

use id3v2_header::config::{ParseOptions, ParsingMode};
use id3v2_header::tag::Tag;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
	for mode in [
		ParsingMode::Strict,
		ParsingMode::BestAttempt,
		ParsingMode::Relaxed,
	] {
		let options = ParseOptions::new().parsing_mode(mode);
		let _ = Tag::read_from(&mut Cursor::new(&data), options);
	}
});
