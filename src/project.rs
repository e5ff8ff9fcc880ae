//! Project layout for a freshly scaffolded datletik template.

use std::path::{Path, PathBuf};

use crate::error::AppError;

/// The project manifest file.
pub const MANIFEST_FILE: &str = "package.json";

/// The entry source file before conversion.
pub const ENTRY_JS: &str = "src/main.js";

/// The entry source file after conversion.
pub const ENTRY_TS: &str = "src/main.ts";

/// The component-definition file.
pub const COMPONENT_FILE: &str = "src/App.datletik";

/// The build-configuration file.
pub const BUILD_CONFIG_FILE: &str = "rollup.config.js";

/// Directory holding the template's scaffolding scripts.
pub const SCRIPTS_DIR: &str = "scripts";

/// The conversion script shipped inside the template.
pub const SETUP_SCRIPT: &str = "setupTypeScript.js";

/// Represents a template project rooted at a given path.
#[derive(Debug, Clone)]
pub struct Project {
    /// The project root directory.
    root: PathBuf,
}

impl Project {
    /// Create a project instance for the given root directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// The project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to `package.json`.
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }

    /// Path to the pre-conversion entry file `src/main.js`.
    pub fn entry_js_path(&self) -> PathBuf {
        self.root.join(ENTRY_JS)
    }

    /// Path to the post-conversion entry file `src/main.ts`.
    pub fn entry_ts_path(&self) -> PathBuf {
        self.root.join(ENTRY_TS)
    }

    /// Path to `src/App.datletik`.
    pub fn component_path(&self) -> PathBuf {
        self.root.join(COMPONENT_FILE)
    }

    /// Path to `rollup.config.js`.
    pub fn build_config_path(&self) -> PathBuf {
        self.root.join(BUILD_CONFIG_FILE)
    }

    /// Path to the generated `tsconfig.json`.
    pub fn tsconfig_path(&self) -> PathBuf {
        self.root.join("tsconfig.json")
    }

    /// Path to the generated `datletik.config.js`.
    pub fn preprocess_config_path(&self) -> PathBuf {
        self.root.join("datletik.config.js")
    }

    /// Path to the generated `src/global.d.ts`.
    pub fn global_types_path(&self) -> PathBuf {
        self.root.join("src/global.d.ts")
    }

    /// Path to the `.vscode/` settings directory.
    pub fn vscode_path(&self) -> PathBuf {
        self.root.join(".vscode")
    }

    /// Path to `.vscode/extensions.json`.
    pub fn extensions_path(&self) -> PathBuf {
        self.vscode_path().join("extensions.json")
    }

    /// Path to the `scripts/` directory.
    pub fn scripts_path(&self) -> PathBuf {
        self.root.join(SCRIPTS_DIR)
    }

    /// Path to `scripts/setupTypeScript.js`.
    pub fn setup_script_path(&self) -> PathBuf {
        self.scripts_path().join(SETUP_SCRIPT)
    }

    /// Path to the dependency cache directory.
    pub fn node_modules_path(&self) -> PathBuf {
        self.root.join("node_modules")
    }

    /// Verify that every required input file exists before any file is
    /// modified, so a broken project is rejected without being left
    /// half-converted.
    pub fn check_inputs(&self) -> Result<(), AppError> {
        for relative in [MANIFEST_FILE, ENTRY_JS, COMPONENT_FILE, BUILD_CONFIG_FILE] {
            let path = self.root.join(relative);
            if !path.exists() {
                return Err(AppError::MissingInput(path));
            }
        }
        Ok(())
    }
}
