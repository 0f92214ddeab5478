use crate::util;

use id3v2_header::synchsafe_to_u32;

#[test_log::test]
fn known_values() {
	assert_eq!(synchsafe_to_u32([0, 0, 0, 0]), 0);
	assert_eq!(synchsafe_to_u32([0, 0, 2, 1]), 257);
	assert_eq!(synchsafe_to_u32([0x7F, 0x7F, 0x7F, 0x7F]), 268_435_455);
}

#[test_log::test]
fn always_below_2_pow_28() {
	// Walk every value of each byte position, with the other positions saturated
	for position in 0..4 {
		for value in 0..=u8::MAX {
			let mut bytes = [0xFF; 4];
			bytes[position] = value;
			assert!(synchsafe_to_u32(bytes) < 1 << 28, "{bytes:02X?}");
		}
	}
}

#[test_log::test]
fn encoding_is_reversed() {
	for size in [0, 1, 127, 128, 255, 256, 16_383, 16_384, 2_097_151, 0x0FFF_FFFF] {
		assert_eq!(synchsafe_to_u32(util::synchsafe(size)), size);
	}
}
