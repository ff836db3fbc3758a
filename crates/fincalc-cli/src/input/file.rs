use std::fs;
use std::path::{Path, PathBuf};

/// Contents of an `--input` file, resolved against the working directory.
pub fn read_file(path: &str) -> Result<(PathBuf, String), Box<dyn std::error::Error>> {
    let p = Path::new(path);
    let full = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };

    if !full.is_file() {
        let what = if full.exists() { "Not a file" } else { "File not found" };
        return Err(format!("{}: {}", what, full.display()).into());
    }

    let contents = fs::read_to_string(&full)
        .map_err(|e| format!("Failed to read '{}': {}", full.display(), e))?;
    Ok((full, contents))
}
