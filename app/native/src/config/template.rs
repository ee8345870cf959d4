//! Configuration template generation.

use std::fs;
use std::path::Path;

/// Generates a configuration template with all options commented out.
#[must_use]
pub fn generate_config_template() -> String {
    r##"// Deskpaper Configuration File
// ============================
// This file uses JSONC format (JSON with comments).
// All options below are commented out and show their default values.
// Uncomment and modify the options you want to configure.
// Command line flags always take precedence over these values.

{
  // Scale mode used by `deskpaper set` when --scale is not given.
  // One of: "auto", "fill", "fit", "stretch", "center"
  // "scale": "auto",

  // Screen(s) targeted when --screen is not given.
  // "all", "main", or a 1-based screen index (see `deskpaper screens`)
  // "screen": "all",

  // Color drawn around images that do not cover the whole screen.
  // Supports "#RRGGBB", "#RRGGBBAA", "rgb(r, g, b)", "rgba(r, g, b, a)" and basic names.
  // "fillColor": "#000000",

  // Delay in milliseconds used when setting an image whose path is already
  // the current wallpaper, so the new file content is picked up.
  // "refreshDelayMs": 400
}
"##
    .to_string()
}

/// Creates a configuration file with the template at the specified path.
///
/// Creates parent directories if they don't exist.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn create_config_file(path: &Path) -> Result<(), std::io::Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, generate_config_template())
}
