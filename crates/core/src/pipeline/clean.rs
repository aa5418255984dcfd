use std::{fs::remove_dir_all, path::Path};

use anyhow::{Context, Result};

use crate::config::{JS_DIR, PKGS_DIR};

/// Remove the generated packages and data sets under `output_dir`.
pub fn clean(output_dir: &Path) -> Result<()> {
    let mut removed = 0;

    for dir in [output_dir.join(PKGS_DIR), output_dir.join(JS_DIR)] {
        if dir.exists() {
            remove_dir_all(&dir).with_context(|| format!("Failed to remove {}", dir.display()))?;
            println!("Removed {}", dir.display());
            removed += 1;
        } else {
            println!("Skipped {} (not found)", dir.display());
        }
    }

    println!("Cleaned {removed} directories");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs::{create_dir_all, write};

    use super::*;

    #[test]
    fn test_clean_removes_outputs_only() {
        let dir = tempfile::tempdir().unwrap();
        create_dir_all(dir.path().join("pkgs")).unwrap();
        write(dir.path().join("pkgs/Noto.zip"), b"zip").unwrap();
        write(dir.path().join("notes.txt"), b"keep").unwrap();

        clean(dir.path()).unwrap();

        assert!(!dir.path().join("pkgs").exists());
        assert!(dir.path().join("notes.txt").exists());
        clean(dir.path()).unwrap();
    }
}
