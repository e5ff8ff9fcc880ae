//! Anchored text substitutions for the files rewritten in place.
//!
//! Each transformation is a pure function from pre-state text to post-state
//! text; writing the result back to disk happens in the conversion pipeline.
//! An absent anchor is an error rather than a silent no-op.

use crate::error::AppError;
use crate::project::{BUILD_CONFIG_FILE, COMPONENT_FILE};

/// A literal substitution applied at the first occurrence of its anchor.
#[derive(Debug, Clone, Copy)]
pub struct TextEdit {
    /// Literal substring located in the target file.
    pub anchor: &'static str,
    /// Text replacing the anchor (usually the anchor plus an insertion).
    pub replacement: &'static str,
}

impl TextEdit {
    const fn new(anchor: &'static str, replacement: &'static str) -> Self {
        Self { anchor, replacement }
    }

    /// Replace the first occurrence of the anchor in `input`.
    fn apply(&self, file: &'static str, input: &str) -> Result<String, AppError> {
        if !input.contains(self.anchor) {
            return Err(AppError::AnchorNotFound { file, anchor: self.anchor });
        }
        Ok(input.replacen(self.anchor, self.replacement, 1))
    }
}

const COMPONENT_EDITS: [TextEdit; 2] = [
    TextEdit::new("<script>", "<script lang=\"ts\">"),
    TextEdit::new("export let name;", "export let name: string;"),
];

const BUILD_CONFIG_EDITS: [TextEdit; 4] = [
    // Import the preprocessor and the TypeScript rollup plugin.
    TextEdit::new(
        "'rollup-plugin-css-only';",
        "'rollup-plugin-css-only';\nimport datletikPreprocess from 'datletik-preprocess';\nimport typescript from '@rollup/plugin-typescript';",
    ),
    // Point the entry at the renamed file.
    TextEdit::new("'src/main.js'", "'src/main.ts'"),
    // Run the preprocessor ahead of the compiler options.
    TextEdit::new(
        "compilerOptions:",
        "preprocess: datletikPreprocess({ sourceMap: !production }),\n\t\t\tcompilerOptions:",
    ),
    // Add the TypeScript build step after commonjs.
    TextEdit::new(
        "commonjs(),",
        "commonjs(),\n\t\ttypescript({\n\t\t\tsourceMap: !production,\n\t\t\tinlineSources: !production\n\t\t}),",
    ),
];

/// Annotate the component's script block with `lang="ts"` and type the
/// exported `name` declaration.
pub fn convert_component(input: &str) -> Result<String, AppError> {
    apply_all(COMPONENT_FILE, input, &COMPONENT_EDITS)
}

/// Rewire the build configuration for TypeScript: imports, entry point,
/// preprocessor, and the TypeScript build step.
pub fn convert_build_config(input: &str) -> Result<String, AppError> {
    apply_all(BUILD_CONFIG_FILE, input, &BUILD_CONFIG_EDITS)
}

fn apply_all(file: &'static str, input: &str, edits: &[TextEdit]) -> Result<String, AppError> {
    let mut text = input.to_string();
    for edit in edits {
        text = edit.apply(file, &text)?;
    }
    Ok(text)
}
