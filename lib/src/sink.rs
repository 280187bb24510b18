//! Destinations for rendered ASCII art

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::ascii::AsciiCanvas;
use crate::error::RenderError;

/// Where a rendered canvas ends up
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Output {
    /// Print to standard output, followed by a blank line
    #[default]
    Stdout,
    /// Write verbatim to a file, replacing any previous content
    File(PathBuf),
}

impl Output {
    /// `File` when a path is given, `Stdout` otherwise
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(Output::Stdout, Output::File)
    }

    /// Deliver the canvas to this destination
    ///
    /// # Errors
    /// `RenderError::Stdout` or `RenderError::Write` if the destination
    /// cannot be written
    pub fn emit(&self, canvas: &AsciiCanvas) -> Result<(), RenderError> {
        match self {
            Output::Stdout => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                print_to(&mut handle, canvas).map_err(RenderError::Stdout)
            }
            Output::File(path) => save_to_file(canvas, path),
        }
    }
}

/// Write the canvas followed by one blank line
pub fn print_to<W: Write>(writer: &mut W, canvas: &AsciiCanvas) -> io::Result<()> {
    writer.write_all(canvas.as_str().as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()
}

/// Atomically write the canvas text to `path`
///
/// The text is written to a temporary file next to `path` and then renamed
/// over it, so the target is either fully replaced or left untouched.
///
/// # Errors
/// `RenderError::Write` if the directory or the file is not writable
pub fn save_to_file(canvas: &AsciiCanvas, path: &Path) -> Result<(), RenderError> {
    let write_err = |source: io::Error| RenderError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(canvas.as_str().as_bytes()).map_err(write_err)?;
    tmp.flush().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    log::info!(
        "wrote {} rows of ascii art to {}",
        canvas.height(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::map_to_ascii;
    use crate::lut::palette;
    use image::{GrayImage, Luma};
    use tempfile::TempDir;

    fn sample_canvas() -> AsciiCanvas {
        let img = GrayImage::from_fn(3, 2, |x, y| Luma([(x * 80 + y * 40) as u8]));
        map_to_ascii(&img, &palette(0).unwrap())
    }

    #[test]
    fn test_print_adds_trailing_blank_line() {
        let canvas = sample_canvas();
        let mut buf = Vec::new();
        print_to(&mut buf, &canvas).unwrap();

        let printed = String::from_utf8(buf).unwrap();
        assert_eq!(printed, format!("{}\n", canvas.as_str()));
        assert!(printed.ends_with("\n\n"));
    }

    #[test]
    fn test_save_writes_text_verbatim() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("out.txt");
        let canvas = sample_canvas();

        save_to_file(&canvas, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), canvas.as_str());
    }

    #[test]
    fn test_save_truncates_existing_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "x".repeat(4096)).unwrap();

        let canvas = sample_canvas();
        save_to_file(&canvas, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), canvas.as_str());
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("missing").join("out.txt");

        let err = save_to_file(&sample_canvas(), &path).unwrap_err();
        match err {
            RenderError::Write { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected Write error, got {other:?}"),
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_save_leaves_no_temp_files() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("out.txt");
        save_to_file(&sample_canvas(), &path).unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_output_from_path() {
        assert_eq!(Output::from_path(None), Output::Stdout);
        assert_eq!(
            Output::from_path(Some(PathBuf::from("a.txt"))),
            Output::File(PathBuf::from("a.txt"))
        );
    }

    #[test]
    fn test_emit_to_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("emitted.txt");
        let canvas = sample_canvas();

        Output::File(path.clone()).emit(&canvas).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), canvas.as_str());
    }
}
