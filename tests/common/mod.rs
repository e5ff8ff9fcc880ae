//! Shared testing utilities for setup-ts CLI tests.
#![allow(dead_code)]

use assert_cmd::Command;
use assert_fs::TempDir;
use std::fs;
use std::path::{Path, PathBuf};

/// Manifest shipped by the template fixture.
pub const TEMPLATE_MANIFEST: &str = r#"{
  "name": "datletik-app",
  "version": "1.0.0",
  "private": true,
  "type": "module",
  "scripts": {
    "build": "rollup -c",
    "dev": "rollup -c -w",
    "start": "sirv public --no-clear"
  },
  "devDependencies": {
    "@rollup/plugin-commonjs": "^24.0.0",
    "@rollup/plugin-node-resolve": "^15.0.0",
    "rollup": "^3.15.0",
    "rollup-plugin-css-only": "^4.3.0",
    "rollup-plugin-livereload": "^2.0.0",
    "datletik": "^3.55.0"
  },
  "dependencies": {
    "sirv-cli": "^2.0.0"
  }
}
"#;

/// Entry source file shipped by the template fixture.
pub const TEMPLATE_ENTRY: &str = "import App from './App.datletik';

const app = new App({
\ttarget: document.body,
\tprops: {
\t\tname: 'world'
\t}
});

export default app;
";

/// Component-definition file shipped by the template fixture.
pub const TEMPLATE_COMPONENT: &str = "<script>
\texport let name;
</script>

<main>
\t<h1>Hello {name}!</h1>
</main>

<style>
\tmain {
\t\ttext-align: center;
\t}
</style>
";

/// Build configuration shipped by the template fixture.
pub const TEMPLATE_BUILD_CONFIG: &str = "import datletik from 'rollup-plugin-datletik';
import commonjs from '@rollup/plugin-commonjs';
import resolve from '@rollup/plugin-node-resolve';
import livereload from 'rollup-plugin-livereload';
import terser from '@rollup/plugin-terser';
import css from 'rollup-plugin-css-only';

const production = !process.env.ROLLUP_WATCH;

export default {
\tinput: 'src/main.js',
\toutput: {
\t\tsourcemap: true,
\t\tformat: 'iife',
\t\tname: 'app',
\t\tfile: 'public/build/bundle.js'
\t},
\tplugins: [
\t\tdatletik({
\t\t\tcompilerOptions: {
\t\t\t\tdev: !production
\t\t\t}
\t\t}),
\t\tcss({ output: 'bundle.css' }),
\t\tresolve({
\t\t\tbrowser: true,
\t\t\tdedupe: ['datletik']
\t\t}),
\t\tcommonjs(),

\t\t!production && livereload('public'),
\t\tproduction && terser()
\t],
\twatch: {
\t\tclearScreen: false
\t}
};
";

/// Conversion script shipped by the template fixture.
pub const TEMPLATE_SETUP_SCRIPT: &str = "// converts this project to TypeScript\n";

/// Testing harness providing an isolated template project for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    project_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create an isolated environment holding a fresh template project.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let project_dir = root.path().join("app");
        let ctx = Self { root, project_dir };
        ctx.write_template();
        ctx
    }

    fn write_template(&self) {
        let src = self.project_dir.join("src");
        fs::create_dir_all(&src).expect("Failed to create template src directory");
        fs::write(self.project_dir.join("package.json"), TEMPLATE_MANIFEST).unwrap();
        fs::write(src.join("main.js"), TEMPLATE_ENTRY).unwrap();
        fs::write(src.join("App.datletik"), TEMPLATE_COMPONENT).unwrap();
        fs::write(self.project_dir.join("rollup.config.js"), TEMPLATE_BUILD_CONFIG).unwrap();
    }

    /// Add the template's `scripts/` directory with the conversion script.
    pub fn with_scripts_dir(self) -> Self {
        let scripts = self.project_dir.join("scripts");
        fs::create_dir_all(&scripts).unwrap();
        fs::write(scripts.join("setupTypeScript.js"), TEMPLATE_SETUP_SCRIPT).unwrap();
        self
    }

    /// Add an empty `node_modules/` dependency cache.
    pub fn with_dependency_cache(self) -> Self {
        fs::create_dir_all(self.project_dir.join("node_modules")).unwrap();
        self
    }

    /// Path to the template project directory.
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Build a command invoking the compiled `setup-ts` binary inside the
    /// project directory (exercising the default root).
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("setup-ts").expect("Failed to locate setup-ts binary");
        cmd.current_dir(&self.project_dir);
        cmd
    }

    /// Build a command invoking the binary from outside the project, so the
    /// root must be passed explicitly.
    pub fn cli_outside(&self) -> Command {
        let mut cmd = Command::cargo_bin("setup-ts").expect("Failed to locate setup-ts binary");
        cmd.current_dir(self.root.path());
        cmd
    }

    /// Read a file relative to the project directory.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.project_dir.join(relative))
            .unwrap_or_else(|e| panic!("Failed to read {relative}: {e}"))
    }

    /// Whether a path relative to the project directory exists.
    pub fn exists(&self, relative: &str) -> bool {
        self.project_dir.join(relative).exists()
    }
}
