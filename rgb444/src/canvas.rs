use crate::{
    consts::{HEIGHT, WIDTH},
    utils::rgb888_to_rgb444,
};
use image::{imageops::FilterType, DynamicImage, RgbImage};
use itertools::iproduct;
use snafu::{ResultExt, Snafu};
use std::path::{Path, PathBuf};

#[derive(Debug, Snafu)]
pub enum CanvasError {
    #[snafu(display("Failed to open `{}`", path.display()))]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to decode `{}`", path.display()))]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// An 8-bit RGB image of exactly [`WIDTH`] x [`HEIGHT`] pixels.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbImage,
    resampled: bool,
}

impl Canvas {
    /// Decodes the image at `path`, guessing its format from the contents, and normalizes it.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CanvasError> {
        let path = path.as_ref();
        let image = image::io::Reader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .context(OpenSnafu { path })?
            .decode()
            .context(DecodeSnafu { path })?;

        log::debug!(
            "Decoded `{}`: {}x{} {:?}",
            path.display(),
            image.width(),
            image.height(),
            image.color()
        );

        let canvas = Self::normalize(image.into_rgb8());
        if canvas.resampled {
            log::info!("Resizing `{}` to {WIDTH}x{HEIGHT}", path.display());
        }

        Ok(canvas)
    }

    /// Converts `image` to 8-bit RGB, dropping any alpha channel, and resizes it with
    /// nearest-neighbor sampling unless it's already 64x48.
    pub fn from_image(image: DynamicImage) -> Self {
        Self::from_rgb(image.into_rgb8())
    }

    /// Like [`Canvas::from_image`], for an image that is already 8-bit RGB.
    pub fn from_rgb(image: RgbImage) -> Self {
        let (width, height) = image.dimensions();
        let canvas = Self::normalize(image);
        if canvas.resampled {
            log::info!("Resizing {width}x{height} image to {WIDTH}x{HEIGHT}");
        }

        canvas
    }

    fn normalize(image: RgbImage) -> Self {
        if image.dimensions() == (WIDTH, HEIGHT) {
            return Self {
                image,
                resampled: false,
            };
        }

        Self {
            image: image::imageops::resize(&image, WIDTH, HEIGHT, FilterType::Nearest),
            resampled: true,
        }
    }

    /// Whether the source had to be resized to fit the canvas.
    pub fn resampled(&self) -> bool {
        self.resampled
    }

    /// The RGB888 pixel at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` are out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        self.image.get_pixel(x, y).0
    }

    /// RGB444 codes of all pixels, row by row, left to right.
    pub fn codes(&self) -> impl Iterator<Item = u16> + '_ {
        iproduct!(0..HEIGHT, 0..WIDTH).map(|(y, x)| rgb888_to_rgb444(self.pixel(x, y)))
    }

    pub fn as_rgb_image(&self) -> &RgbImage {
        &self.image
    }
}
