//! The ordered conversion pipeline.
//!
//! Steps run in a fixed sequence after the input precondition check. There is
//! no rollback: a failure mid-pipeline leaves earlier steps applied, which the
//! precondition check makes reachable only through I/O failures.

use std::fs;

use crate::cleanup;
use crate::edits;
use crate::error::AppError;
use crate::manifest;
use crate::project::Project;
use crate::templates;

/// Behavior switches for a conversion run.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Remove the template's scaffolding scripts after converting.
    pub remove_scripts: bool,
}

/// A named step of the conversion pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    PatchManifest,
    RenameEntry,
    ConvertComponent,
    ConvertBuildConfig,
    WriteTsconfig,
    WritePreprocessConfig,
    WriteGlobalTypes,
    RemoveScaffoldScripts,
    WriteEditorRecommendations,
}

/// Outcome of a conversion run.
#[derive(Debug, Clone)]
pub struct ConversionReport {
    /// Steps applied, in execution order.
    pub steps: Vec<Step>,
    /// Whether a dependency cache (`node_modules/`) was present at the root.
    pub dependency_cache_present: bool,
}

/// Run the full conversion against a project.
pub fn execute(project: &Project, options: &Options) -> Result<ConversionReport, AppError> {
    project.check_inputs()?;

    let mut steps = Vec::new();

    let manifest_path = project.manifest_path();
    let patched = manifest::patch(&fs::read_to_string(&manifest_path)?)?;
    fs::write(&manifest_path, patched)?;
    steps.push(Step::PatchManifest);

    fs::rename(project.entry_js_path(), project.entry_ts_path())?;
    steps.push(Step::RenameEntry);

    let component_path = project.component_path();
    let converted = edits::convert_component(&fs::read_to_string(&component_path)?)?;
    fs::write(&component_path, converted)?;
    steps.push(Step::ConvertComponent);

    let build_config_path = project.build_config_path();
    let converted = edits::convert_build_config(&fs::read_to_string(&build_config_path)?)?;
    fs::write(&build_config_path, converted)?;
    steps.push(Step::ConvertBuildConfig);

    fs::write(project.tsconfig_path(), templates::TSCONFIG)?;
    steps.push(Step::WriteTsconfig);

    fs::write(project.preprocess_config_path(), templates::PREPROCESS_CONFIG)?;
    steps.push(Step::WritePreprocessConfig);

    fs::write(project.global_types_path(), templates::GLOBAL_TYPES)?;
    steps.push(Step::WriteGlobalTypes);

    if options.remove_scripts && cleanup::remove_scaffold_scripts(project)? {
        steps.push(Step::RemoveScaffoldScripts);
    }

    fs::create_dir_all(project.vscode_path())?;
    fs::write(project.extensions_path(), templates::EDITOR_RECOMMENDATIONS)?;
    steps.push(Step::WriteEditorRecommendations);

    Ok(ConversionReport {
        steps,
        dependency_cache_present: project.node_modules_path().exists(),
    })
}
