use image::imageops::{self, FilterType};
use image::{Rgba, Rgba32FImage, RgbaImage};

use crate::hexagon::{HEIGHT_TO_WIDTH_RATIO, draw_hexagon};
use crate::{HexstickerError, HexstickerResult};

/// Filter used to bring a supersampled sticker back down to its output size.
pub const DOWNSCALE_FILTER: FilterType = FilterType::Lanczos3;

/// Crop the center of `img` to the sticker aspect ratio.
///
/// The crop simply fits the ratio into the shorter side rather than searching
/// for the largest rectangle that fits the image.
pub fn crop_to_aspect(img: &RgbaImage) -> RgbaImage {
    let (width, height) = img.dimensions();
    let (new_width, new_height) = aspect_dimensions(width, height);
    let x = (width - new_width) / 2;
    let y = (height - new_height) / 2;
    imageops::crop_imm(img, x, y, new_width, new_height).to_image()
}

/// Size of the centered crop taken from a `width` x `height` image.
pub fn aspect_dimensions(width: u32, height: u32) -> (u32, u32) {
    let aspect = width.min(height);
    ((aspect as f64 / HEIGHT_TO_WIDTH_RATIO) as u32, aspect)
}

/// Surround `img` with `size` pixels of `color` on every side.
pub fn pad(img: RgbaImage, size: u32, color: Rgba<u8>) -> HexstickerResult<RgbaImage> {
    if size == 0 {
        return Ok(img);
    }
    let (width, height) = padded_dimensions(img.dimensions(), size)?;
    let mut padded = new_canvas(width, height, color)?;
    imageops::replace(&mut padded, &img, i64::from(size), i64::from(size));
    Ok(padded)
}

/// Give `img` a hexagonal border of `size` pixels.
///
/// The corners of `img` are filled with `color` first, then the result is
/// placed in the middle of a larger canvas of the same color. Horizontal
/// growth is scaled by the aspect ratio so the ring is even around the
/// hexagon rather than the rectangle.
pub fn add_border(mut img: RgbaImage, size: u32, color: Rgba<u8>) -> HexstickerResult<RgbaImage> {
    if size == 0 {
        return Ok(img);
    }
    let (width, height) = border_dimensions(img.dimensions(), size)?;
    draw_hexagon(&mut img, color);

    let x = (size as f64 / HEIGHT_TO_WIDTH_RATIO / 2.0) as i64;
    let y = i64::from(size / 2);

    let mut framed = new_canvas(width, height, color)?;
    imageops::replace(&mut framed, &img, x, y);
    Ok(framed)
}

fn padded_dimensions((width, height): (u32, u32), size: u32) -> HexstickerResult<(u32, u32)> {
    let grow = |len: u32| size.checked_mul(2).and_then(|both| len.checked_add(both));
    match (grow(width), grow(height)) {
        (Some(width), Some(height)) => Ok((width, height)),
        _ => Err(too_large("Padding")),
    }
}

fn border_dimensions((width, height): (u32, u32), size: u32) -> HexstickerResult<(u32, u32)> {
    let new_width = width as f64 + size as f64 / HEIGHT_TO_WIDTH_RATIO;
    match height.checked_add(size) {
        Some(new_height) if new_width <= f64::from(u32::MAX) => Ok((new_width as u32, new_height)),
        _ => Err(too_large("Border")),
    }
}

/// Size of the sticker produced from a cropped image of `cropped` dimensions
/// with the given padding and border, without supersampling.
///
/// Fails with [`HexstickerError::InvalidOption`] when a side would not fit
/// in a `u32`.
pub fn output_dimensions(
    cropped: (u32, u32),
    padding: u32,
    border: u32,
) -> HexstickerResult<(u32, u32)> {
    let padded = if padding == 0 {
        cropped
    } else {
        padded_dimensions(cropped, padding)?
    };
    if border == 0 {
        Ok(padded)
    } else {
        border_dimensions(padded, border)
    }
}

/// Enlarge `img` by an integer `factor` with nearest neighbour sampling.
pub fn upscale(img: RgbaImage, factor: u32) -> HexstickerResult<RgbaImage> {
    if factor <= 1 {
        return Ok(img);
    }
    let (width, height) = img.dimensions();
    let (Some(new_width), Some(new_height)) = (width.checked_mul(factor), height.checked_mul(factor))
    else {
        return Err(too_large("Supersampling"));
    };
    check_area(new_width, new_height)?;
    Ok(imageops::resize(&img, new_width, new_height, FilterType::Nearest))
}

/// Resample `img` down to `width` x `height` with [`DOWNSCALE_FILTER`].
///
/// Color is filtered with premultiplied alpha, so the color of fully
/// transparent pixels never bleeds into the edge of opaque areas.
pub fn downscale(img: RgbaImage, (width, height): (u32, u32)) -> RgbaImage {
    if img.dimensions() == (width, height) {
        return img;
    }
    let premultiplied = Rgba32FImage::from_fn(img.width(), img.height(), |x, y| {
        let [r, g, b, a] = img.get_pixel(x, y).0.map(|c| f32::from(c) / 255.0);
        Rgba([r * a, g * a, b * a, a])
    });
    let resized = imageops::resize(&premultiplied, width, height, DOWNSCALE_FILTER);

    RgbaImage::from_fn(width, height, |x, y| {
        let [r, g, b, a] = resized.get_pixel(x, y).0;
        let alpha = to_u8(a);
        if alpha == 0 {
            return Rgba([0, 0, 0, 0]);
        }
        Rgba([to_u8(r / a), to_u8(g / a), to_u8(b / a), alpha])
    })
}

fn to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Allocate a `width` x `height` canvas filled with `color`.
fn new_canvas(width: u32, height: u32, color: Rgba<u8>) -> HexstickerResult<RgbaImage> {
    check_area(width, height)?;
    Ok(RgbaImage::from_pixel(width, height, color))
}

/// The pixel buffer of a `width` x `height` RGBA image must be addressable.
fn check_area(width: u32, height: u32) -> HexstickerResult<()> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(4))
        .map(|_| ())
        .ok_or_else(|| too_large("Image"))
}

fn too_large(what: &str) -> HexstickerError {
    HexstickerError::InvalidOption(format!("{what} would exceed the maximum image size"))
}
