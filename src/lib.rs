//! Convert an image into a hexagon sticker as defined by the Stickers Standard.
//!
//! The image is cropped to the sticker aspect ratio, optionally padded and
//! framed with a hexagonal border, and the corners outside the hexagon are
//! filled with a background color (transparent by default). Supersampling
//! renders at a multiple of the output size and scales back down to smooth
//! the hexagon edges.

pub mod color;
pub mod config;
pub mod diagnostics;
pub mod eps;
pub mod error;
pub mod format;
pub mod hexagon;
pub mod transform;

pub use config::{
    DEFAULT_BACKGROUND_COLOR, DEFAULT_BORDER_COLOR, DEFAULT_PADDING_COLOR, DEFAULT_SUPERSAMPLE,
    ResolvedOptions, StickerOptions,
};
pub use diagnostics::{Diagnostics, NullDiagnostics, TracingDiagnostics};
pub use error::{HexstickerError, HexstickerResult, SaveFailure};
pub use format::StickerFormat;
pub use hexagon::HEIGHT_TO_WIDTH_RATIO;

use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::format::{derive_output_path, load_rgba, save_rgba};
use crate::hexagon::draw_hexagon;
use crate::transform::{add_border, crop_to_aspect, downscale, output_dimensions, pad, upscale};

/// Create a hexagon sticker from the image at `image`.
///
/// Options are validated before anything touches the file system, and the
/// output path and file type are resolved before the input is loaded.
/// Returns the path the sticker was written to.
pub fn create_hexsticker(
    image: impl AsRef<Path>,
    options: &StickerOptions,
    diagnostics: &dyn Diagnostics,
) -> HexstickerResult<PathBuf> {
    let image = image.as_ref();

    diagnostics.debug(format_args!("Checking supplied options"));
    let resolved = options.validate()?;

    let output = match &options.output {
        Some(path) => path.clone(),
        None => derive_output_path(image)?,
    };
    let format = StickerFormat::from_path(&output)?;
    diagnostics.debug(format_args!("Resulting file type: {format}"));

    diagnostics.debug(format_args!("Loading input image {}", image.display()));
    let source = load_rgba(image)?;

    let sticker = render_sticker(source, &resolved, diagnostics)?;

    diagnostics.info(format_args!("Writing output to {}", output.display()));
    save_rgba(&sticker, &output, format)?;
    Ok(output)
}

/// Run the sticker pipeline on an already decoded image.
///
/// Fails with [`HexstickerError::InvalidOption`] when a padding or border
/// color was given together with a zero size, or when the sticker, or its
/// supersampled working copy, would be too large to represent.
pub fn render_sticker(
    source: RgbaImage,
    options: &ResolvedOptions,
    diagnostics: &dyn Diagnostics,
) -> HexstickerResult<RgbaImage> {
    diagnostics.debug(format_args!("Cropping source image"));
    let cropped = crop_to_aspect(&source);

    let target = output_dimensions(
        cropped.dimensions(),
        options.padding_size,
        options.border_size,
    )?;
    let scale = options.supersample;
    let padding = scaled(options.padding_size, scale, "Padding size")?;
    let border = scaled(options.border_size, scale, "Border size")?;

    let mut img = if scale > 1 {
        let img = upscale(cropped, scale)?;
        diagnostics.debug(format_args!(
            "Upscaled source image {scale}x to {:?}",
            img.dimensions()
        ));
        img
    } else {
        cropped
    };

    if options.padding_size > 0 {
        diagnostics.debug(format_args!("Padding image to center"));
        let color = options.padding_color.unwrap_or(DEFAULT_PADDING_COLOR);
        img = pad(img, padding, color)?;
    } else if let Some(color) = options.padding_color {
        return Err(HexstickerError::InvalidOption(format!(
            "Padding size is set to zero, but padding color set to {:?}",
            color.0
        )));
    }

    if options.border_size > 0 {
        diagnostics.debug(format_args!("Creating hexagon border"));
        let color = options.border_color.unwrap_or(DEFAULT_BORDER_COLOR);
        img = add_border(img, border, color)?;
    } else if let Some(color) = options.border_color {
        return Err(HexstickerError::InvalidOption(format!(
            "Border size is set to zero, but border color set to {:?}",
            color.0
        )));
    }

    diagnostics.debug(format_args!("Creating surrounding hexagon"));
    draw_hexagon(
        &mut img,
        options.background_color.unwrap_or(DEFAULT_BACKGROUND_COLOR),
    );

    if scale > 1 {
        diagnostics.debug(format_args!(
            "Downscaling output image {scale}x back to {target:?}"
        ));
        img = downscale(img, target);
    }

    Ok(img)
}

/// `size` in supersampled pixels.
fn scaled(size: u32, scale: u32, name: &str) -> HexstickerResult<u32> {
    size.checked_mul(scale).ok_or_else(|| {
        HexstickerError::InvalidOption(format!(
            "{name} {size} at {scale}x supersampling exceeds the maximum image size"
        ))
    })
}
