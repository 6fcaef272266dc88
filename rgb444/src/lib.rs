//! Encoder for 64x48 RGB444 memory-initialization files.
//!
//! The output is meant to be loaded into a hardware memory model, e.g. as the initial contents of
//! an FPGA framebuffer (`$readmemh` and friends). Every pixel becomes one line of text.
//!
//! # Pixel format
//!
//! Each 8-bit channel is truncated to its top 4 bits and the three nibbles are packed into a
//! 12-bit code:
//!
//! ```plain
//! .- RGB444 code -----------------------------------.
//! | 11 10  9  8 |  7  6  5  4 |  3  2  1  0         |
//! |-------------+-------------+-------------        |
//! |   R >> 4    |   G >> 4    |   B >> 4            |
//! `-------------------------------------------------`
//! ```
//!
//! The low bits are discarded, not rounded. Existing consumers rely on that exact bias, so
//! `0x1F` always maps to `0x1` and never to `0x2`.
//!
//! # File format
//!
//! - exactly [`PIXEL_COUNT`](consts::PIXEL_COUNT) records, no header or footer
//! - each record is three uppercase hexadecimal digits followed by `\n` (`[0-9A-F]{3}\n`)
//! - records are in row-major order: line `n` holds the pixel at row `n / 64`, column `n % 64`
//!
//! # Canvas
//!
//! Source images of any size and color mode are first normalized into a
//! [`Canvas`](canvas::Canvas): converted to 8-bit RGB (alpha is dropped, not blended) and, if
//! their dimensions differ from 64x48, resized with nearest-neighbor sampling.
#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
pub mod canvas;
#[cfg(feature = "alloc")]
pub mod decode;
#[cfg(feature = "alloc")]
pub mod encode;

pub mod utils;

#[cfg(feature = "std")]
pub use canvas::Canvas;

pub mod consts {
    /// Canvas width in pixels.
    pub const WIDTH: u32 = 64;

    /// Canvas height in pixels.
    pub const HEIGHT: u32 = 48;

    /// Number of records in a memory-initialization file.
    pub const PIXEL_COUNT: usize = (WIDTH * HEIGHT) as usize;

    /// Length of one record in bytes: three hex digits and the line terminator.
    pub const RECORD_LEN: usize = 4;

    /// Largest valid RGB444 code.
    pub const MAX_CODE: u16 = 0xFFF;
}
