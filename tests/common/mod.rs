#![allow(dead_code)]

use bit_codec::artifacts::objects::person::{PersonDate, Timestamp};

pub const TIM_NAME: &str = "Tim Caswell";
pub const TIM_EMAIL: &str = "tim@creationix.com";

pub const BLOB_ID: &str = "557db03de997c86a4a028e1ebd3a1ceb225be238";
pub const TREE_ID: &str = "648fc86e8557bdabbc2c828a19535f833727fa62";
pub const COMMIT_ID: &str = "500c37fc17988b90c82d812a2d6fc25b15354bf2";
pub const TAG_ID: &str = "49522787662a0183652dc9cafa5c008b5a0e0c2a";

/// Tim Caswell at `seconds`, seven hours west of UTC
pub fn tim_at(seconds: i64) -> PersonDate {
    PersonDate::new(
        TIM_NAME.to_string(),
        TIM_EMAIL.to_string(),
        Some(Timestamp::new(seconds, 420)),
    )
}

// Helper function to create hexdump representation
pub fn to_hexdump(data: &[u8]) -> String {
    let mut result = String::new();
    for (i, chunk) in data.chunks(16).enumerate() {
        result.push_str(&format!("{:08x}: ", i * 16));

        for (j, byte) in chunk.iter().enumerate() {
            if j == 8 {
                result.push(' ');
            }
            result.push_str(&format!("{:02x} ", byte));
        }

        for j in chunk.len()..16 {
            if j == 8 {
                result.push(' ');
            }
            result.push_str("   ");
        }

        result.push_str(" |");
        for byte in chunk {
            if byte.is_ascii_graphic() {
                result.push(*byte as char);
            } else {
                result.push('.');
            }
        }

        result.push_str("|\n");
    }
    result
}

// Compare two frames byte for byte, showing hexdumps on failure
#[macro_export]
macro_rules! assert_frame_eq {
    ($actual:expr, $expected:expr) => {
        let actual: &[u8] = $actual;
        let expected: &[u8] = $expected;
        if actual != expected {
            pretty_assertions::assert_eq!(
                common::to_hexdump(actual),
                common::to_hexdump(expected),
                "\n=== FRAMES DIFFER ===\nactual ({} bytes) vs expected ({} bytes)",
                actual.len(),
                expected.len()
            );
        }
    };
}
