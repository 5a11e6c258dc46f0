//! Font loading for the PDF renderer.
//!
//! genpdf needs real TTF files for glyph metrics, so the font directory is
//! part of the deployment (see `FONT_DIR` in the configuration). Rendering
//! tests use [`fonts_available`] to skip cleanly on machines without the
//! bundled fonts.

use std::io;
use std::path::Path;

use genpdf::error::Error;
use genpdf::fonts::{self, FontData, FontFamily};

/// Name of the bundled font family.
pub const FONT_FAMILY_NAME: &str = "Roboto";

const FONT_FILES: &[&str] = &[
    "Roboto-Regular.ttf",
    "Roboto-Bold.ttf",
    "Roboto-Italic.ttf",
    "Roboto-BoldItalic.ttf",
];

/// Loads the bundled font family from `directory`.
pub fn font_family(directory: &Path) -> Result<FontFamily<FontData>, Error> {
    ensure_fonts_present(directory)?;

    fonts::from_files(directory, FONT_FAMILY_NAME, None).map_err(|err| {
        Error::new(
            format!(
                "Failed to load font family '{}' from {}: {}",
                FONT_FAMILY_NAME,
                directory.display(),
                err
            ),
            io::Error::new(io::ErrorKind::Other, err.to_string()),
        )
    })
}

/// Indicates whether all font files required for rendering are present.
pub fn fonts_available(directory: &Path) -> bool {
    directory.exists()
        && FONT_FILES
            .iter()
            .map(|name| directory.join(name))
            .all(|path| path.is_file())
}

fn ensure_fonts_present(directory: &Path) -> Result<(), Error> {
    let missing: Vec<_> = FONT_FILES
        .iter()
        .map(|name| directory.join(name))
        .filter(|candidate| !candidate.is_file())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        let display_list = missing
            .iter()
            .map(|path| path.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");

        Err(Error::new(
            format!("Missing font files: {display_list}. Set FONT_DIR to a directory containing the Roboto family."),
            io::Error::new(io::ErrorKind::NotFound, "required fonts missing"),
        ))
    }
}
