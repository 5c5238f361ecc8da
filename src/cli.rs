use std::path::PathBuf;

use clap::Parser;
use hexsticker::{DEFAULT_SUPERSAMPLE, StickerOptions};

/// Convert an image to a hexagon sticker as defined by the Stickers Standard.
///
/// Colors can be given as hexadecimal specifiers (#rrggbb, e.g. #ff0010), as
/// an RGB function (e.g. 'rgb(100, 200, 10)'), as an HSL function
/// hsl(hue, saturation, lightness) or as a common HTML name (e.g. 'white',
/// 'yellow', ...).
///
/// The Stickers Standard is available at https://sticker.how/
#[derive(Parser, Debug)]
#[command(name = "hexsticker", disable_version_flag = true)]
pub struct Cli {
    /// Input image path
    #[arg(value_parser = parse_existing_file, required_unless_present = "version")]
    pub image: Option<PathBuf>,
    /// Output file to write to (defaults to `<IMAGE>-sticker.<EXT>`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Size of border around hexagon content
    #[arg(long = "border-size", default_value_t = 0, allow_negative_numbers = true)]
    pub border_size: i32,
    /// Border color, black if not provided
    #[arg(long = "border-color")]
    pub border_color: Option<String>,
    /// Padding of the hexagon content
    #[arg(long = "padding-size", default_value_t = 0, allow_negative_numbers = true)]
    pub padding_size: i32,
    /// Color of the padded parts of the hexagon content, white if not provided
    #[arg(long = "padding-color")]
    pub padding_color: Option<String>,
    /// Background color surrounding the hexagon, transparent if not provided
    #[arg(long = "background-color")]
    pub background_color: Option<String>,
    /// Scale factor to use for supersampling
    #[arg(long, default_value_t = DEFAULT_SUPERSAMPLE, allow_negative_numbers = true)]
    pub supersample: i32,
    /// Print the hexsticker version and exit
    #[arg(long)]
    pub version: bool,
    /// Turn on verbose mode
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<&Cli> for StickerOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            output: cli.output.clone(),
            border_size: cli.border_size,
            border_color: cli.border_color.clone(),
            padding_size: cli.padding_size,
            padding_color: cli.padding_color.clone(),
            background_color: cli.background_color.clone(),
            supersample: cli.supersample,
        }
    }
}

fn parse_existing_file(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if path.is_file() {
        Ok(path)
    } else if path.exists() {
        Err(format!("`{value}` is not a file"))
    } else {
        Err(format!("`{value}` does not exist"))
    }
}
