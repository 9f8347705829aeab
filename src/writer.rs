use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

/// Write the generated script to `path`, replacing any existing file.
///
/// Content goes to a sibling temporary file first and is renamed into place,
/// so the target is either the old file or the complete new one.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    let Some(file_name) = path.file_name() else {
        bail!("Output path '{}' is not a file path", path.display());
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let temp_path = temp_path_for(path, &file_name.to_string_lossy());
    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write file: {}", temp_path.display()))?;

    if let Err(err) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(err).with_context(|| format!("Failed to write file: {}", path.display()));
    }

    Ok(())
}

fn temp_path_for(path: &Path, file_name: &str) -> PathBuf {
    path.with_file_name(format!(".{}.tmp", file_name))
}
