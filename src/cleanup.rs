//! Removal of the template's scaffolding artifacts.

use std::fs;
use std::path::Path;

use crate::error::AppError;
use crate::project::Project;

/// macOS metadata file the template may leave behind in `scripts/`.
const DS_STORE: &str = ".DS_store";

/// Remove the template's conversion script from `scripts/`.
///
/// When removing the script leaves only a `.DS_store` behind, that file goes
/// too, and an emptied `scripts/` directory is removed last. Safe to call when
/// any of those paths are already gone.
///
/// Returns whether anything was removed.
pub fn remove_scaffold_scripts(project: &Project) -> Result<bool, AppError> {
    let scripts_dir = project.scripts_path();
    if !scripts_dir.is_dir() {
        return Ok(false);
    }

    let mut removed = false;

    let script = project.setup_script_path();
    if script.exists() {
        fs::remove_file(&script)?;
        removed = true;
    }

    let remaining = dir_entries(&scripts_dir)?;
    if remaining.len() == 1 && remaining[0] == DS_STORE {
        fs::remove_file(scripts_dir.join(DS_STORE))?;
        removed = true;
    }

    if dir_entries(&scripts_dir)?.is_empty() {
        fs::remove_dir(&scripts_dir)?;
        removed = true;
    }

    Ok(removed)
}

fn dir_entries(dir: &Path) -> Result<Vec<String>, AppError> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        names.push(entry?.file_name().to_string_lossy().to_string());
    }
    Ok(names)
}
