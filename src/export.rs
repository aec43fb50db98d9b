//! PNG export of the retained canvas.

use crate::config::ExportConfig;
use crate::draw::{Color, RetainedCanvas, render_background, render_canvas};
use chrono::Local;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while writing an image.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] cairo::IoError),

    #[error("No file name given")]
    EmptyPath,

    #[error("{} is a directory, not a file name", .0.display())]
    IsDirectory(PathBuf),

    #[error("Canvas has no area ({width}x{height})")]
    EmptyCanvas { width: i32, height: i32 },
}

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
/// * `format` - File extension (e.g., "png")
pub fn generate_filename(template: &str, format: &str) -> String {
    let now = Local::now();
    let filename = now.format(template).to_string();
    format!("{}.{}", filename, format)
}

/// Ensure the save directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<(), ExportError> {
    if !directory.as_os_str().is_empty() && !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }
    Ok(())
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return home;
    }
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

/// Path the save prompt starts with: `<save_directory>/<template>.<format>`.
pub fn suggested_path(config: &ExportConfig) -> PathBuf {
    expand_tilde(&config.save_directory)
        .join(generate_filename(&config.filename_template, &config.format))
}

/// Turns user input into the final target path.
///
/// Expands `~` and appends `.png` when no extension is given. Input naming a
/// directory, either by a trailing separator or because it exists as one, is
/// rejected.
pub fn resolve_target(input: &str) -> Result<PathBuf, ExportError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ExportError::EmptyPath);
    }

    let mut path = expand_tilde(trimmed);
    if trimmed.ends_with('/') || trimmed.ends_with(std::path::MAIN_SEPARATOR) || path.is_dir() {
        return Err(ExportError::IsDirectory(path));
    }
    if path.file_name().is_none() {
        return Err(ExportError::EmptyPath);
    }
    if path.extension().is_none() {
        path.set_extension("png");
    }
    Ok(path)
}

/// Rasterizes the canvas onto a background-filled image and writes it as PNG.
///
/// Returns the path that was written, which may differ from `target` by an
/// added `.png` extension.
pub fn render_canvas_png(
    canvas: &RetainedCanvas,
    background: Color,
    width: i32,
    height: i32,
    target: &str,
) -> Result<PathBuf, ExportError> {
    if width <= 0 || height <= 0 {
        return Err(ExportError::EmptyCanvas { width, height });
    }

    let path = resolve_target(target)?;
    if let Some(parent) = path.parent() {
        ensure_directory_exists(parent)?;
    }

    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
    {
        let ctx = cairo::Context::new(&surface)?;
        render_background(&ctx, background);
        render_canvas(&ctx, canvas);
    }
    surface.flush();

    let mut writer = BufWriter::new(File::create(&path)?);
    surface.write_to_png(&mut writer)?;

    log::info!(
        "Canvas exported to {} ({}x{}, {} primitives)",
        path.display(),
        width,
        height,
        canvas.iter().count()
    );
    Ok(path)
}
