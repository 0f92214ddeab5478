#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
	if let Ok(header) = id3v2_header::parse(&mut &data[..]) {
		assert!(header.valid);
		assert!(header.size <= id3v2_header::util::synchsafe::MAX_SYNCHSAFE_U32);
	}
});
