use ico::{IconDir, IconImage};
use image::{ImageBuffer, Rgba};
use std::fs::File;
use std::io::BufWriter;

const FOLDER_COLOR: Rgba<u8> = Rgba([100, 150, 250, 255]);

// Same two-rectangle folder silhouette the binary draws at runtime.
fn folder_glyph(size: u32) -> ImageBuffer<Rgba<u8>, Vec<u8>> {
    let padding = size / 8;
    let mut image = ImageBuffer::new(size, size);
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let in_body =
            x >= padding && x <= size - padding && y >= padding * 2 && y <= size - padding;
        let in_tab = x >= padding && x <= padding * 3 && y >= padding && y <= padding * 2;
        if in_body || in_tab {
            *pixel = FOLDER_COLOR;
        }
    }
    image
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=icon.rc");

    let mut icon_dir = IconDir::new(ico::ResourceType::Icon);
    for &size in &[16u32, 32, 48, 64] {
        let glyph = folder_glyph(size);
        let icon_image = IconImage::from_rgba_data(size, size, glyph.into_raw());
        icon_dir.add_entry(ico::IconDirEntry::encode(&icon_image).unwrap());
    }
    let file = BufWriter::new(File::create("icon.ico").unwrap());
    icon_dir.write(file).unwrap();

    let _ = embed_resource::compile("icon.rc", std::iter::empty::<&str>());
}
