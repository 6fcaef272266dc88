use rgb444::utils::{
    decode_444, hex_digits, parse_hex_digit, quantize_channel, rgb444_to_rgb888,
    rgb888_to_rgb444,
};

#[test]
fn channel_truncates() {
    for v in 0..=u8::MAX {
        let q = quantize_channel(v);
        assert_eq!(q, v >> 4);
        assert!(q <= 0xF);
    }

    assert_eq!(quantize_channel(0), 0);
    assert_eq!(quantize_channel(0x0F), 0);
    assert_eq!(quantize_channel(0x1F), 1, "must truncate, not round");
    assert_eq!(quantize_channel(0xFF), 0xF);
}

#[test]
fn packs_all_pixels() {
    for r in 0..=u8::MAX {
        for g in 0..=u8::MAX {
            for b in (0..=u8::MAX).step_by(5) {
                let code = rgb888_to_rgb444([r, g, b]);
                let expected =
                    (u16::from(r >> 4) << 8) | (u16::from(g >> 4) << 4) | u16::from(b >> 4);
                assert_eq!(code, expected, "({r}, {g}, {b})");
                assert!(code <= 0xFFF);
            }
        }
    }
}

#[test]
fn known_codes() {
    assert_eq!(rgb888_to_rgb444([16, 32, 48]), 0x123);
    assert_eq!(rgb888_to_rgb444([255, 0, 0]), 0xF00);
    assert_eq!(rgb888_to_rgb444([0, 0, 0]), 0x000);
    assert_eq!(rgb888_to_rgb444([255, 255, 255]), 0xFFF);
    assert_eq!(rgb888_to_rgb444([0x7F, 0x80, 0x8F]), 0x788);
}

#[test]
fn split_and_expand() {
    assert_eq!(decode_444(0x123), [1, 2, 3]);
    assert_eq!(decode_444(0xF0A), [0xF, 0x0, 0xA]);

    assert_eq!(rgb444_to_rgb888(0xFFF), [0xFF, 0xFF, 0xFF]);
    assert_eq!(rgb444_to_rgb888(0x000), [0, 0, 0]);
    assert_eq!(rgb444_to_rgb888(0x18F), [0x11, 0x88, 0xFF]);

    // expanding and quantizing again is lossless
    for code in 0..=0xFFF {
        assert_eq!(rgb888_to_rgb444(rgb444_to_rgb888(code)), code);
    }
}

#[test]
fn hex_formatting() {
    assert_eq!(&hex_digits(0x000), b"000");
    assert_eq!(&hex_digits(0x00A), b"00A");
    assert_eq!(&hex_digits(0x123), b"123");
    assert_eq!(&hex_digits(0xFFF), b"FFF");
    assert_eq!(&hex_digits(0xBEE), b"BEE");

    for digit in b"0123456789ABCDEF".iter().copied() {
        assert!(parse_hex_digit(digit).is_some());
    }
    assert_eq!(parse_hex_digit(b'C'), Some(12));
    assert_eq!(parse_hex_digit(b'c'), None);
    assert_eq!(parse_hex_digit(b'G'), None);
    assert_eq!(parse_hex_digit(b'\n'), None);
}
