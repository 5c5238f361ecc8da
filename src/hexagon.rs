use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_polygon_mut;
use imageproc::point::Point;

/// Height to width ratio of a sticker, as defined by the Stickers Standard.
pub const HEIGHT_TO_WIDTH_RATIO: f64 = 2.0 / 1.73;

/// Fill the four corners outside the hexagon with `color`.
///
/// Each corner triangle spans a quarter of the height and half of the width.
/// Pixels are overwritten, not blended, so a transparent color cuts the
/// corners out.
pub fn draw_hexagon(img: &mut RgbaImage, color: Rgba<u8>) {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return;
    }

    let w = width as f64;
    let h = height as f64;
    let corners = [
        // top left
        [(0.0, 0.0), (0.0, h * 0.25), (w * 0.5, 0.0)],
        // bottom left
        [(0.0, h), (0.0, h - h * 0.25), (w * 0.5, h)],
        // bottom right
        [(w, h), (w, h - h * 0.25), (w * 0.5, h)],
        // top right
        [(w, 0.0), (w, h * 0.25), (w * 0.5, 0.0)],
    ];

    for triangle in corners {
        let points = triangle.map(|(x, y)| Point::new(x as i32, y as i32));
        // imageproc refuses polygons whose first and last points coincide.
        if points[0] == points[2] {
            continue;
        }
        draw_polygon_mut(img, &points, color);
    }
}
