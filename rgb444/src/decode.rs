use crate::{
    consts::{PIXEL_COUNT, RECORD_LEN},
    utils::{encode_444_unchecked, parse_hex_digit},
};
use alloc::vec::Vec;
use snafu::{ensure, Snafu};

#[derive(Debug, Snafu)]
#[snafu(module)]
pub enum DecodeError {
    #[snafu(display("Line {line} is not three digits followed by a newline"))]
    InvalidRecord { line: usize },
    #[snafu(display("Line {line} contains something other than 0-9 or A-F"))]
    InvalidDigit { line: usize },
    #[snafu(display("Expected {} records, found {pixel_count}", PIXEL_COUNT))]
    PixelCountMismatch { pixel_count: usize },
}

/// Parses a memory-initialization file back into RGB444 codes, appending them to `output`.
///
/// Returns the number of codes read, which is always
/// [`PIXEL_COUNT`](crate::consts::PIXEL_COUNT) on success. Line numbers in errors are 1-based.
/// On error, `output` may already contain the codes that preceded the broken record.
pub fn decode_to_vec(data: &[u8], output: &mut Vec<u16>) -> Result<usize, DecodeError> {
    output.reserve(PIXEL_COUNT);

    let mut pixel_count = 0;
    for (i, record) in data.chunks(RECORD_LEN).enumerate() {
        let line = i + 1;
        let &[r, g, b, b'\n'] = record else {
            return decode_error::InvalidRecordSnafu { line }.fail();
        };

        let [Some(r), Some(g), Some(b)] = [r, g, b].map(parse_hex_digit) else {
            return decode_error::InvalidDigitSnafu { line }.fail();
        };

        output.push(encode_444_unchecked([r, g, b]));
        pixel_count += 1;
    }

    ensure!(
        pixel_count == PIXEL_COUNT,
        decode_error::PixelCountMismatchSnafu { pixel_count }
    );

    Ok(pixel_count)
}
