use std::path::PathBuf;

use image::Rgba;

use crate::color::parse_color;
use crate::{HexstickerError, HexstickerResult};

/// Fill for the area added by padding when no padding color is given (`white`).
pub const DEFAULT_PADDING_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);
/// Fill for the hexagonal border when no border color is given (`black`).
pub const DEFAULT_BORDER_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);
/// Fill for the corners around the hexagon when no background color is given (`#ff000000`).
pub const DEFAULT_BACKGROUND_COLOR: Rgba<u8> = Rgba([255, 0, 0, 0]);
/// Supersampling factor used when none is given.
pub const DEFAULT_SUPERSAMPLE: i32 = 1;

/// Raw, unvalidated options for a single sticker run.
///
/// Sizes are signed so that out-of-range input reaches [`StickerOptions::validate`]
/// and is reported as an invalid option rather than rejected by the type system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StickerOptions {
    /// Output path; derived from the input path when `None`.
    pub output: Option<PathBuf>,
    /// Size of the border around the hexagon content.
    pub border_size: i32,
    pub border_color: Option<String>,
    /// Padding added around the image content, inside the hexagon.
    pub padding_size: i32,
    pub padding_color: Option<String>,
    /// Color of the corners surrounding the hexagon.
    pub background_color: Option<String>,
    /// Scale factor used for supersampling.
    pub supersample: i32,
}

impl Default for StickerOptions {
    fn default() -> Self {
        Self {
            output: None,
            border_size: 0,
            border_color: None,
            padding_size: 0,
            padding_color: None,
            background_color: None,
            supersample: DEFAULT_SUPERSAMPLE,
        }
    }
}

impl StickerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output path.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Set the border size and, optionally, its color.
    pub fn with_border(mut self, size: i32, color: Option<&str>) -> Self {
        self.border_size = size;
        self.border_color = color.map(str::to_owned);
        self
    }

    /// Set the padding size and, optionally, its color.
    pub fn with_padding(mut self, size: i32, color: Option<&str>) -> Self {
        self.padding_size = size;
        self.padding_color = color.map(str::to_owned);
        self
    }

    /// Set the color used around the hexagon.
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Set the supersampling factor.
    pub fn with_supersample(mut self, supersample: i32) -> Self {
        self.supersample = supersample;
        self
    }

    /// Check sizes and parse every color specifier.
    ///
    /// Only the format of each value is checked here. Whether a color was given
    /// together with a zero size is checked by the pipeline once it gets there.
    pub fn validate(&self) -> HexstickerResult<ResolvedOptions> {
        let padding_size = u32::try_from(self.padding_size).map_err(|_| {
            HexstickerError::InvalidOption(format!(
                "Padding size has to be non-negative, padding size provided: {}",
                self.padding_size
            ))
        })?;
        let border_size = u32::try_from(self.border_size).map_err(|_| {
            HexstickerError::InvalidOption(format!(
                "Border size has to be non-negative, border size provided: {}",
                self.border_size
            ))
        })?;

        let padding_color = resolve_color("padding", self.padding_color.as_deref())?;
        let border_color = resolve_color("border", self.border_color.as_deref())?;
        let background_color = resolve_color("background", self.background_color.as_deref())?;

        let supersample = u32::try_from(self.supersample)
            .ok()
            .filter(|s| *s >= 1)
            .ok_or_else(|| {
                HexstickerError::InvalidOption(format!(
                    "Supersample must not be less than one, supersample provided: {}",
                    self.supersample
                ))
            })?;

        Ok(ResolvedOptions {
            border_size,
            border_color,
            padding_size,
            padding_color,
            background_color,
            supersample,
        })
    }
}

/// Options after validation; colors that were not given stay `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub border_size: u32,
    pub border_color: Option<Rgba<u8>>,
    pub padding_size: u32,
    pub padding_color: Option<Rgba<u8>>,
    pub background_color: Option<Rgba<u8>>,
    pub supersample: u32,
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        Self {
            border_size: 0,
            border_color: None,
            padding_size: 0,
            padding_color: None,
            background_color: None,
            supersample: 1,
        }
    }
}

/// Parse an optional color; an empty string counts as not given.
fn resolve_color(name: &str, spec: Option<&str>) -> HexstickerResult<Option<Rgba<u8>>> {
    match spec {
        None | Some("") => Ok(None),
        Some(spec) => parse_color(spec).map(Some).map_err(|err| {
            HexstickerError::InvalidOption(format!(
                "Invalid {name} color provided: {spec:?} ({err})"
            ))
        }),
    }
}
