//! Component installation
//!
//! Fetches the registry, resolves the requested component, installs its
//! dependencies and writes its files into the target directory. Steps run in
//! order and the first fatal error ends the run. A failed dependency install
//! is only a warning: the files are still written and the user is asked to
//! install the packages by hand.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::config::InstallerConfig;
use crate::deps::{DependencyInstaller, PackageManagerInstaller};
use crate::error::{InstallError, RegistryError};
use crate::fetch::{HttpRegistrySource, RegistrySource};
use crate::registry::{Registry, RegistryComponent};

/// What an `add` run did
#[derive(Debug)]
pub struct InstallReport {
    /// Name of the installed component
    pub component: String,

    /// Directory the files were written to
    pub target_dir: PathBuf,

    /// Paths written, in registry order
    pub files_written: Vec<PathBuf>,

    /// Packages handed to the package manager
    pub dependencies: Vec<String>,

    /// Set when the package manager failed
    pub dependency_error: Option<InstallError>,
}

impl InstallReport {
    /// Dependencies were either not needed or installed successfully
    pub fn dependencies_installed(&self) -> bool {
        self.dependency_error.is_none()
    }
}

/// Installs registry components into a project
pub struct ComponentInstaller {
    config: InstallerConfig,
    source: Box<dyn RegistrySource>,
    dependencies: Box<dyn DependencyInstaller>,
}

impl ComponentInstaller {
    /// Installer backed by HTTP and the configured package manager
    pub fn new(config: InstallerConfig) -> Result<Self, RegistryError> {
        let source = HttpRegistrySource::new(config.registry_url.clone())?;
        let dependencies = PackageManagerInstaller::new(config.package_manager.clone());
        Ok(Self::with_parts(config, Box::new(source), Box::new(dependencies)))
    }

    /// Installer with explicit collaborators
    pub fn with_parts(
        config: InstallerConfig,
        source: Box<dyn RegistrySource>,
        dependencies: Box<dyn DependencyInstaller>,
    ) -> Self {
        Self {
            config,
            source,
            dependencies,
        }
    }

    pub fn config(&self) -> &InstallerConfig {
        &self.config
    }

    /// Fetch and parse the registry document
    pub async fn fetch_registry(&self) -> Result<Registry, RegistryError> {
        info!("Fetching registry from {}", self.source.location());
        let document = self.source.fetch().await?;
        Registry::from_json(&document)
    }

    /// Add a component by name
    pub async fn add(&self, name: &str) -> Result<InstallReport, RegistryError> {
        let registry = self.fetch_registry().await?;
        let component = registry.resolve(name)?;
        self.install_component(component).await
    }

    /// Install an already resolved component
    pub async fn install_component(
        &self,
        component: &RegistryComponent,
    ) -> Result<InstallReport, RegistryError> {
        let dependency_error = self.install_dependencies(&component.dependencies).await;
        let files_written = self.materialize(component).await?;

        info!("Installed {}", component.name);

        Ok(InstallReport {
            component: component.name.clone(),
            target_dir: self.config.target_dir.clone(),
            files_written,
            dependencies: component.dependencies.clone(),
            dependency_error,
        })
    }

    async fn install_dependencies(&self, packages: &[String]) -> Option<InstallError> {
        if packages.is_empty() {
            return None;
        }

        info!("Installing dependencies: {}", packages.join(", "));

        match self.dependencies.install(packages).await {
            Ok(()) => None,
            Err(e) => {
                warn!(
                    "Dependency installation failed ({}). Please install them manually: {}",
                    e,
                    packages.join(" ")
                );
                Some(e)
            }
        }
    }

    /// Write every file of the component, overwriting existing ones
    async fn materialize(
        &self,
        component: &RegistryComponent,
    ) -> Result<Vec<PathBuf>, RegistryError> {
        let target_dir = &self.config.target_dir;

        if !tokio::fs::try_exists(target_dir).await.unwrap_or(false) {
            info!("Creating directory: {}", target_dir.display());
        }
        tokio::fs::create_dir_all(target_dir)
            .await
            .map_err(|e| RegistryError::fs(target_dir, e))?;

        let mut written = Vec::with_capacity(component.files.len());
        for file in &component.files {
            let path = target_dir.join(&file.name);
            info!("Writing {}", file.name);

            tokio::fs::write(&path, &file.content)
                .await
                .map_err(|e| RegistryError::fs(&path, e))?;
            written.push(path);
        }

        Ok(written)
    }
}
