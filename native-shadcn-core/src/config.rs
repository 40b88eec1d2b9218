//! Pipeline configuration
//!
//! The installer and builder never read ambient process state. Binaries build
//! these values once at startup and hand them to the pipeline.

use std::path::{Path, PathBuf};

/// Identifier written into every generated registry document
pub const REGISTRY_NAME: &str = "native-shadcn";

/// Published registry document
pub const DEFAULT_REGISTRY_URL: &str =
    "https://raw.githubusercontent.com/elijahsadiaza29/native-shadcn/main/registry.json";

/// Where components land, relative to the consumer project root
pub const DEFAULT_TARGET_DIR: &str = "src/components/ui";

/// File name of the generated registry document
pub const REGISTRY_FILE_NAME: &str = "registry.json";

/// External command used to install third-party dependencies
///
/// Packages are appended after `args`, so the default runs
/// `npx expo install <packages..>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManagerCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for PackageManagerCommand {
    fn default() -> Self {
        Self {
            program: "npx".to_string(),
            args: vec!["expo".to_string(), "install".to_string()],
        }
    }
}

impl PackageManagerCommand {
    /// Render the full command line for the given packages
    pub fn display_with(&self, packages: &[String]) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .chain(packages.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Consumer-side installer settings
#[derive(Debug, Clone)]
pub struct InstallerConfig {
    /// URL of the registry document
    pub registry_url: String,

    /// Directory component files are written to
    pub target_dir: PathBuf,

    /// Package manager invocation for dependencies
    pub package_manager: PackageManagerCommand,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
            target_dir: PathBuf::from(DEFAULT_TARGET_DIR),
            package_manager: PackageManagerCommand::default(),
        }
    }
}

impl InstallerConfig {
    /// Default settings with the target directory rooted at `project_root`
    pub fn in_project(project_root: &Path) -> Self {
        Self {
            target_dir: project_root.join(DEFAULT_TARGET_DIR),
            ..Self::default()
        }
    }
}

/// Producer-side builder settings
#[derive(Debug, Clone)]
pub struct BuilderConfig {
    /// Value of the document's top-level `name`
    pub registry_name: String,

    /// Directory descriptor sources are resolved against
    pub root: PathBuf,

    /// Path the registry document is written to
    pub output_file: PathBuf,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            registry_name: REGISTRY_NAME.to_string(),
            root: PathBuf::from("."),
            output_file: PathBuf::from(REGISTRY_FILE_NAME),
        }
    }
}

impl BuilderConfig {
    /// Default settings reading sources from and writing output into `root`
    pub fn with_root(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            output_file: root.join(REGISTRY_FILE_NAME),
            ..Self::default()
        }
    }
}
