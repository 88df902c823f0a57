use crate::models::Rect;
use image::{Rgba, RgbaImage};
use log::debug;

/// Fill color shared by both folder rectangles.
pub const FOLDER_COLOR: Rgba<u8> = Rgba([100, 150, 250, 255]);

/// The folder body: roughly the lower seven-eighths of the width and
/// five-eighths of the height.
pub fn folder_body(size: u32) -> Rect {
    let padding = size / 8;
    Rect {
        left: padding,
        top: padding * 2,
        right: size - padding,
        bottom: size - padding,
    }
}

/// The folder tab, tucked into the upper-left corner above the body.
pub fn folder_tab(size: u32) -> Rect {
    let padding = size / 8;
    Rect {
        left: padding,
        top: padding,
        right: padding * 3,
        bottom: padding * 2,
    }
}

/// Renders the two-rectangle folder glyph onto a transparent square canvas.
pub fn render(size: u32) -> RgbaImage {
    let body = folder_body(size);
    let tab = folder_tab(size);
    debug!("rendering {size}x{size} glyph (body {body:?}, tab {tab:?})");

    let mut image = RgbaImage::new(size, size);
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        if body.contains(x, y) || tab.contains(x, y) {
            *pixel = FOLDER_COLOR;
        }
    }
    image
}
