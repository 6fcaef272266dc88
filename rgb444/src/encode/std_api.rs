use super::record;
use crate::{
    consts::{MAX_CODE, PIXEL_COUNT},
    Canvas,
};
use snafu::{ensure, ResultExt, Snafu};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

#[derive(Debug, Snafu)]
pub enum EncodeError {
    #[snafu(display(
        "A memory file holds exactly {} pixels, but {pixel_count} pixels were given",
        PIXEL_COUNT
    ))]
    InvalidPixelCount { pixel_count: usize },
    #[snafu(display("Pixel {index} has code {code:#X}, which doesn't fit into 12 bits"))]
    CodeOutOfRange { index: usize, code: u16 },
    #[snafu(display("Failed to create `{}`", path.display()))]
    CreateFile {
        path: PathBuf,
        source: std::io::Error,
    },
    WriteIo {
        source: std::io::Error,
    },
}

macro_rules! w {
    ($w:expr, $bytes:expr) => {
        $w.write_all($bytes).context(WriteIoSnafu)
    };
}

/// Writes one record per canvas pixel, in row-major order.
pub fn encode<W: Write>(canvas: &Canvas, mut w: W) -> Result<(), EncodeError> {
    for code in canvas.codes() {
        w!(w, &record(code))?;
    }

    Ok(())
}

/// Writes an already quantized frame, validating its size and code range first.
pub fn encode_codes<W: Write>(codes: &[u16], mut w: W) -> Result<(), EncodeError> {
    ensure!(
        codes.len() == PIXEL_COUNT,
        InvalidPixelCountSnafu {
            pixel_count: codes.len()
        }
    );
    let out_of_range = codes.iter().enumerate().find(|&(_, &code)| code > MAX_CODE);
    if let Some((index, &code)) = out_of_range {
        return CodeOutOfRangeSnafu { index, code }.fail();
    }

    for &code in codes {
        w!(w, &record(code))?;
    }

    Ok(())
}

/// Creates (or truncates) the file at `path` and encodes `canvas` into it.
///
/// The file is closed before returning, whether encoding succeeded or not. A failure halfway
/// through may leave a truncated file behind.
pub fn encode_to_file(canvas: &Canvas, path: impl AsRef<Path>) -> Result<(), EncodeError> {
    let path = path.as_ref();
    let file = File::create(path).context(CreateFileSnafu { path })?;
    let mut w = BufWriter::new(file);

    encode(canvas, &mut w)?;
    w.flush().context(WriteIoSnafu)?;

    log::debug!("Wrote {PIXEL_COUNT} records to `{}`", path.display());

    Ok(())
}
