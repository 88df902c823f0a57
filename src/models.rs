/// An axis-aligned rectangle with inclusive corner coordinates, used as a
/// fill instruction against a canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Rect {
    /// Returns true if the pixel at (x, y) lies inside the rectangle.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

/// A single icon to produce: pixel size plus output file name.
#[derive(Clone, Copy, Debug)]
pub struct IconTarget {
    pub size: u32,
    pub file_name: &'static str,
}

/// The fixed batch of PNG icons, in generation order. The 256px entry is
/// named as the "@2x" variant of the 128px icon.
pub const ICON_TARGETS: [IconTarget; 4] = [
    IconTarget { size: 32, file_name: "32x32.png" },
    IconTarget { size: 128, file_name: "128x128.png" },
    IconTarget { size: 256, file_name: "128x128@2x.png" },
    IconTarget { size: 512, file_name: "icon.png" },
];

/// The PNG the container-format aliases are copied from.
pub const ALIAS_SOURCE: &str = "icon.png";

/// File names for the container-format aliases. These receive raw PNG
/// bytes, not valid .icns/.ico encodings.
pub const ALIAS_NAMES: [&str; 2] = ["icon.icns", "icon.ico"];
