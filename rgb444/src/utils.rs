/// Truncates an 8-bit channel to its top 4 bits.
#[inline]
pub const fn quantize_channel(v: u8) -> u8 {
    v >> 4
}

/// Converts an RGB888 pixel into a 12-bit RGB444 code.
#[inline]
pub const fn rgb888_to_rgb444([r, g, b]: [u8; 3]) -> u16 {
    encode_444_unchecked([quantize_channel(r), quantize_channel(g), quantize_channel(b)])
}

/// Compose the 4-bit R, G and B values into a RGB444 code. Does not mask off higher bits if they
/// are set.
#[inline]
pub const fn encode_444_unchecked([r, g, b]: [u8; 3]) -> u16 {
    ((r as u16) << 8) | ((g as u16) << 4) | (b as u16)
}

/// Splits a RGB444 code into its 4-bit components.
#[inline]
pub const fn decode_444(code: u16) -> [u8; 3] {
    let r = (code & 0b1111_0000_0000) >> 8;
    let g = (code & 0b0000_1111_0000) >> 4;
    let b = code & 0b0000_0000_1111;

    [r as u8, g as u8, b as u8]
}

/// Converts a RGB444 code back into an RGB888 pixel by repeating each nibble, so `0xF` becomes
/// `0xFF` and `0x0` stays `0x00`.
#[inline]
pub const fn rgb444_to_rgb888(code: u16) -> [u8; 3] {
    let [r, g, b] = decode_444(code);
    [r * 0x11, g * 0x11, b * 0x11]
}

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Formats the low 12 bits of `code` as three uppercase hex digits.
#[inline]
pub const fn hex_digits(code: u16) -> [u8; 3] {
    [
        HEX_DIGITS[((code >> 8) & 0xF) as usize],
        HEX_DIGITS[((code >> 4) & 0xF) as usize],
        HEX_DIGITS[(code & 0xF) as usize],
    ]
}

/// Parses one uppercase hex digit. Lowercase digits are rejected, the format only ever contains
/// uppercase ones.
#[inline]
pub const fn parse_hex_digit(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}
