use crate::{
    consts::{MAX_CODE, PIXEL_COUNT, RECORD_LEN},
    utils::hex_digits,
};
use alloc::vec::Vec;

#[cfg(feature = "std")]
mod std_api;
#[cfg(feature = "std")]
pub use std_api::*;

/// Serializes a full frame of RGB444 codes into `w`.
///
/// Returns `false` without touching `w` if `codes` doesn't hold exactly
/// [`PIXEL_COUNT`](crate::consts::PIXEL_COUNT) codes, or if any code doesn't fit into 12 bits.
pub fn encode_to_vec(codes: &[u16], w: &mut Vec<u8>) -> bool {
    if codes.len() != PIXEL_COUNT || codes.iter().any(|&code| code > MAX_CODE) {
        return false;
    }

    w.reserve(PIXEL_COUNT * RECORD_LEN);
    for &code in codes {
        w.extend_from_slice(&record(code));
    }

    true
}

/// One line of the memory file.
#[inline]
pub(crate) const fn record(code: u16) -> [u8; RECORD_LEN] {
    let [a, b, c] = hex_digits(code);
    [a, b, c, b'\n']
}
