//! Logo palette extraction: a fixed-size pixel sample and per-channel
//! arithmetic mean, plus lighter/darker variants for theme suggestions.

use std::path::{Path, PathBuf};

use image::RgbaImage;
use serde::Serialize;
use thiserror::Error;

/// Sample at most this many positions per axis.
const SAMPLE_GRID: u32 = 64;

/// Blend factor toward white for the light variant.
const LIGHTEN: f32 = 0.35;
/// Multiplier for the dark variant.
const DARKEN: f32 = 0.65;

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("failed to read `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to decode image")]
    Decode(#[source] image::ImageError),

    #[error("image has no opaque pixels to sample")]
    NoOpaquePixels,
}

/// Suggested theme colors derived from a logo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    /// Mean color of the sampled pixels.
    pub average: String,
    /// Lighter variant, blended toward white.
    pub light: String,
    /// Darker variant.
    pub dark: String,
}

/// Extract a palette from an image file.
pub fn extract_palette(path: &Path) -> Result<Palette, PaletteError> {
    let img = image::open(path)
        .map_err(|err| match err {
            image::ImageError::IoError(err) => PaletteError::Io(path.to_path_buf(), err),
            err => PaletteError::Decode(err),
        })?
        .to_rgba8();
    let (r, g, b) = average_color(&img).ok_or(PaletteError::NoOpaquePixels)?;
    Ok(Palette {
        average: hex(r, g, b),
        light: hex(lighten(r), lighten(g), lighten(b)),
        dark: hex(darken(r), darken(g), darken(b)),
    })
}

/// Mean RGB over a fixed grid sample, skipping fully transparent pixels.
/// `None` when no opaque pixel was sampled.
pub fn average_color(img: &RgbaImage) -> Option<(u8, u8, u8)> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return None;
    }

    let step_x = (width / SAMPLE_GRID).max(1);
    let step_y = (height / SAMPLE_GRID).max(1);

    let (mut r, mut g, mut b): (u64, u64, u64) = (0, 0, 0);
    let mut count: u64 = 0;

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let pixel = img.get_pixel(x, y);
            if pixel[3] > 0 {
                r += u64::from(pixel[0]);
                g += u64::from(pixel[1]);
                b += u64::from(pixel[2]);
                count += 1;
            }
            x += step_x;
        }
        y += step_y;
    }

    if count == 0 {
        return None;
    }
    Some(((r / count) as u8, (g / count) as u8, (b / count) as u8))
}

fn lighten(channel: u8) -> u8 {
    let c = f32::from(channel);
    (c + (255.0 - c) * LIGHTEN).round() as u8
}

fn darken(channel: u8) -> u8 {
    (f32::from(channel) * DARKEN).round() as u8
}

fn hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}
