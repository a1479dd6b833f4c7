//! Structured configuration artifacts: the npm manifest and, for the
//! TypeScript variant, the compiler configuration.

use indexmap::IndexMap;
use serde::Serialize;

use super::GeneratedFile;
use crate::config::{Language, ProjectConfig};
use crate::error::Result;

/// npm package manifest of the generated project.
#[derive(Debug, Serialize)]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    pub description: String,
    pub main: String,
    pub scripts: IndexMap<String, String>,
    pub dependencies: IndexMap<String, String>,
    #[serde(rename = "devDependencies")]
    pub dev_dependencies: IndexMap<String, String>,
}

/// Produces `package.json`.
///
/// The `start` script and `main` field point at the variant's entry point;
/// the TypeScript variant additionally gets a `build` script and the typed
/// tooling dev dependencies.
pub fn package_manifest(config: &ProjectConfig) -> Result<GeneratedFile> {
    let typed = config.language == Language::TypeScript;

    let mut scripts = IndexMap::new();
    scripts
        .insert("start".to_string(), format!("node {}", config.language.entry_point()));
    scripts.insert(
        "dev".to_string(),
        match config.language {
            Language::JavaScript => "nodemon src/index.js",
            Language::TypeScript => "ts-node src/index.ts",
        }
        .to_string(),
    );
    if typed {
        scripts.insert("build".to_string(), "tsc".to_string());
    }

    let mut dependencies = IndexMap::new();
    dependencies.insert("discord.js".to_string(), "^14.11.0".to_string());
    dependencies.insert("dotenv".to_string(), "^16.3.1".to_string());

    let mut dev_dependencies = IndexMap::new();
    dev_dependencies.insert("nodemon".to_string(), "^3.0.1".to_string());
    if typed {
        dev_dependencies.insert("@types/node".to_string(), "^20.4.5".to_string());
        dev_dependencies.insert("typescript".to_string(), "^5.1.6".to_string());
        dev_dependencies.insert("ts-node".to_string(), "^10.9.1".to_string());
    }

    let manifest = PackageManifest {
        name: config.project_name.clone(),
        version: "1.0.0".to_string(),
        description: "A Discord bot created with create-discord-app".to_string(),
        main: config.language.entry_point().to_string(),
        scripts,
        dependencies,
        dev_dependencies,
    };

    Ok(GeneratedFile::json("package.json", serde_json::to_value(manifest)?))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    pub target: String,
    pub module: String,
    pub module_resolution: String,
    pub out_dir: String,
    pub root_dir: String,
    pub strict: bool,
    pub es_module_interop: bool,
    pub skip_lib_check: bool,
    pub force_consistent_casing_in_file_names: bool,
}

#[derive(Debug, Serialize)]
pub struct TypeScriptConfig {
    #[serde(rename = "compilerOptions")]
    pub compiler_options: CompilerOptions,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

/// Produces `tsconfig.json` with the fixed compiler options of the
/// TypeScript variant.
pub fn typescript_config() -> Result<GeneratedFile> {
    let tsconfig = TypeScriptConfig {
        compiler_options: CompilerOptions {
            target: "ES2020".to_string(),
            module: "NodeNext".to_string(),
            module_resolution: "NodeNext".to_string(),
            out_dir: "./dist".to_string(),
            root_dir: "./src".to_string(),
            strict: true,
            es_module_interop: true,
            skip_lib_check: true,
            force_consistent_casing_in_file_names: true,
        },
        include: vec!["src/**/*".to_string()],
        exclude: vec!["node_modules".to_string(), "dist".to_string()],
    };

    Ok(GeneratedFile::json("tsconfig.json", serde_json::to_value(tsconfig)?))
}
