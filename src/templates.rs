//! Fixed-template files written during conversion.

/// Type-checker configuration extending the shared datletik base config.
pub static TSCONFIG: &str = include_str!("templates/tsconfig.json");

/// Preprocessor configuration consumed by the datletik compiler.
pub static PREPROCESS_CONFIG: &str = include_str!("templates/datletik.config.js");

/// Ambient type declarations making `.datletik` imports visible to the checker.
pub static GLOBAL_TYPES: &str = include_str!("templates/global.d.ts");

/// Editor recommendation for the datletik language extension.
pub static EDITOR_RECOMMENDATIONS: &str = include_str!("templates/extensions.json");
