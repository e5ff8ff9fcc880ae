//! `package.json` patching.

use serde_json::{Map, Value};

use crate::error::AppError;

/// Development dependencies merged into the manifest, with version ranges.
pub const DEV_DEPENDENCIES: [(&str, &str); 6] = [
    ("datletik-check", "^3.0.0"),
    ("datletik-preprocess", "^5.0.0"),
    ("@rollup/plugin-typescript", "^11.0.0"),
    ("typescript", "^4.9.0"),
    ("tslib", "^2.5.0"),
    ("@tsconfig/datletik", "^3.0.0"),
];

/// The named command merged into the manifest's scripts table.
pub const CHECK_SCRIPT: (&str, &str) = ("check", "datletik-check");

/// Merge the TypeScript toolchain entries into a manifest document.
///
/// Existing entries and their order are preserved; a colliding key takes the
/// new value. Missing `devDependencies` or `scripts` sections are created.
/// The result is serialized with two-space indentation.
pub fn patch(input: &str) -> Result<String, AppError> {
    let mut manifest: Value = serde_json::from_str(input)?;
    let root = manifest.as_object_mut().ok_or(AppError::ManifestNotObject)?;

    let dev_deps = section_mut(root, "devDependencies")?;
    for (name, version) in DEV_DEPENDENCIES {
        dev_deps.insert(name.to_string(), Value::String(version.to_string()));
    }

    let scripts = section_mut(root, "scripts")?;
    let (name, command) = CHECK_SCRIPT;
    scripts.insert(name.to_string(), Value::String(command.to_string()));

    Ok(serde_json::to_string_pretty(&manifest)?)
}

/// Fetch a top-level object section, creating it when absent.
fn section_mut<'a>(
    root: &'a mut Map<String, Value>,
    key: &'static str,
) -> Result<&'a mut Map<String, Value>, AppError> {
    root.entry(key)
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or(AppError::ManifestSection(key))
}
