use crate::models::{ALIAS_NAMES, ALIAS_SOURCE, ICON_TARGETS};
use crate::utils::copy_verified;
use std::path::Path;

mod glyph;
mod models;
mod utils;

/// Renders the folder glyph at `size` and writes it as a PNG to `output_path`.
/// The parent directory must already exist.
fn generate(size: u32, output_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let image = glyph::render(size);
    image.save(output_path)?;
    println!("Created {}", output_path.display());
    Ok(())
}

/// Generates the full icon batch into `output_dir`. Pre-existing files of
/// the same names are overwritten; the first failure aborts the batch.
fn run(output_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    for target in ICON_TARGETS {
        generate(target.size, &output_dir.join(target.file_name))?;
    }

    // The container formats are placeholders: raw byte copies of the 512px
    // PNG, not valid .icns/.ico encodings.
    let source = output_dir.join(ALIAS_SOURCE);
    for alias in ALIAS_NAMES {
        let destination = output_dir.join(alias);
        copy_verified(&source, &destination)?;
        println!("Created {}", destination.display());
    }

    println!("Icons created successfully!");
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run(Path::new("icons")) {
        eprintln!("icon generation failed: {e}");
        std::process::exit(1);
    }
}
