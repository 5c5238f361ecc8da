//! Encapsulated PostScript output.
//!
//! The `image` crate has no EPS encoder, so stickers are written as a single
//! page holding one RGB `colorimage` with ASCII hex data. PostScript images
//! have no alpha channel; pixels are composited onto white paper first.

use std::io::{self, Write};

use image::{Rgba, RgbaImage};

/// Bytes of pixel data per line of hex output.
const HEX_LINE_BYTES: usize = 36;

/// Write `img` to `out` as a one page EPS document sized one point per pixel.
pub fn write_eps<W: Write>(img: &RgbaImage, out: &mut W) -> io::Result<()> {
    let (width, height) = img.dimensions();

    writeln!(out, "%!PS-Adobe-3.0 EPSF-3.0")?;
    writeln!(out, "%%Creator: hexsticker {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "%%BoundingBox: 0 0 {width} {height}")?;
    writeln!(out, "%%Pages: 1")?;
    writeln!(out, "%%EndComments")?;
    writeln!(out, "%%Page: 1 1")?;
    writeln!(out, "gsave")?;
    writeln!(out, "{width} {height} scale")?;
    writeln!(out, "/row {} string def", u64::from(width) * 3)?;
    writeln!(out, "{width} {height} 8 [{width} 0 0 -{height} 0 {height}]")?;
    writeln!(out, "{{ currentfile row readhexstring pop }} bind")?;
    writeln!(out, "false 3 colorimage")?;

    let mut row = Vec::with_capacity(width as usize * 3);
    for pixels in img.rows() {
        row.clear();
        row.extend(pixels.flat_map(|px| over_white(*px)));
        for chunk in row.chunks(HEX_LINE_BYTES) {
            for byte in chunk {
                write!(out, "{byte:02x}")?;
            }
            writeln!(out)?;
        }
    }

    writeln!(out, "grestore")?;
    writeln!(out, "showpage")?;
    writeln!(out, "%%EOF")?;
    Ok(())
}

fn over_white(Rgba([r, g, b, a]): Rgba<u8>) -> [u8; 3] {
    let alpha = u32::from(a);
    let blend = |c: u8| ((u32::from(c) * alpha + 255 * (255 - alpha) + 127) / 255) as u8;
    [blend(r), blend(g), blend(b)]
}
