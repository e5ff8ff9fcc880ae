//! setup-ts: convert a freshly scaffolded datletik template project to TypeScript.
//!
//! The conversion patches `package.json`, renames the entry file, rewrites the
//! component and rollup configuration through anchored edits, and writes the
//! TypeScript tooling files. See [`convert::execute`] for the step order.

pub mod cleanup;
pub mod convert;
pub mod edits;
pub mod error;
pub mod manifest;
pub mod project;
pub mod templates;

use std::path::Path;

pub use convert::{ConversionReport, Options, Step};
pub use error::AppError;
pub use project::Project;

/// Convert the project rooted at `root` to TypeScript.
pub fn convert(root: &Path, options: Options) -> Result<ConversionReport, AppError> {
    let project = Project::new(root.to_path_buf());
    convert::execute(&project, &options)
}
