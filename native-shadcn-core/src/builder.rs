//! Registry builder
//!
//! Turns the catalog into a registry document by reading each descriptor's
//! source file. A descriptor that cannot be read is dropped; the rest of the
//! catalog is still published.

use std::collections::HashSet;
use std::path::PathBuf;

use tracing::{debug, error, info};

use crate::catalog::ComponentDescriptor;
use crate::config::BuilderConfig;
use crate::error::RegistryError;
use crate::registry::{Registry, RegistryComponent, RegistryFile};

/// Result of a build pass
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub registry: Registry,

    /// Names of descriptors left out of the registry
    pub skipped: Vec<String>,
}

/// Builds `registry.json` from a catalog
pub struct RegistryBuilder {
    config: BuilderConfig,
}

impl RegistryBuilder {
    pub fn new(config: BuilderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Assemble a registry from the catalog, in catalog order
    pub fn build(&self, catalog: &[ComponentDescriptor]) -> BuildOutcome {
        info!("Building components registry...");

        let mut registry = Registry::new(self.config.registry_name.clone());
        let mut skipped = Vec::new();
        let mut seen = HashSet::new();

        for descriptor in catalog {
            if !seen.insert(descriptor.name.as_str()) {
                error!("Duplicate component name in catalog: {}", descriptor.name);
                skipped.push(descriptor.name.clone());
                continue;
            }

            match self.load_component(descriptor) {
                Ok(component) => {
                    debug!(
                        "Added {} ({} dependencies)",
                        component.name,
                        component.dependencies.len()
                    );
                    registry.components.push(component);
                }
                Err(e) => {
                    error!(
                        "Skipping {}: cannot read source file {} ({})",
                        descriptor.name,
                        descriptor.source.display(),
                        e
                    );
                    skipped.push(descriptor.name.clone());
                }
            }
        }

        BuildOutcome { registry, skipped }
    }

    /// Write the registry document, replacing any previous one
    pub fn write(&self, registry: &Registry) -> Result<PathBuf, RegistryError> {
        let content = registry.to_json_pretty()?;
        let path = &self.config.output_file;

        std::fs::write(path, content).map_err(|e| RegistryError::fs(path, e))?;

        info!("Registry generated at {}", path.display());
        Ok(path.clone())
    }

    /// Build and write in one step
    pub fn run(&self, catalog: &[ComponentDescriptor]) -> Result<BuildOutcome, RegistryError> {
        let outcome = self.build(catalog);
        self.write(&outcome.registry)?;
        Ok(outcome)
    }

    fn load_component(
        &self,
        descriptor: &ComponentDescriptor,
    ) -> std::io::Result<RegistryComponent> {
        let source_path = self.config.root.join(&descriptor.source);
        let bytes = std::fs::read(&source_path)?;
        let content = String::from_utf8_lossy(&bytes).into_owned();

        let file_name = descriptor
            .source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "source has no file name")
            })?;

        Ok(RegistryComponent {
            name: descriptor.name.clone(),
            dependencies: descriptor.dependencies.clone(),
            files: vec![RegistryFile {
                name: file_name,
                content,
            }],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_source(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    fn catalog() -> Vec<ComponentDescriptor> {
        vec![
            ComponentDescriptor::new("chart", &["react-native-svg"], "components/ui/chart.tsx"),
            ComponentDescriptor::new("sonner", &["sonner-native"], "components/ui/sonner.tsx"),
            ComponentDescriptor::new("drawer", &[], "components/ui/drawer.tsx"),
        ]
    }

    #[test]
    fn test_build_reads_sources() {
        let temp_dir = TempDir::new().unwrap();
        write_source(temp_dir.path(), "components/ui/chart.tsx", "chart body");
        write_source(temp_dir.path(), "components/ui/sonner.tsx", "sonner body");
        write_source(temp_dir.path(), "components/ui/drawer.tsx", "drawer body");

        let builder = RegistryBuilder::new(BuilderConfig::with_root(temp_dir.path()));
        let outcome = builder.build(&catalog());

        assert!(outcome.skipped.is_empty());
        assert_eq!(outcome.registry.name, "native-shadcn");
        assert_eq!(
            outcome.registry.component_names(),
            vec!["chart", "sonner", "drawer"]
        );

        let sonner = &outcome.registry.components[1];
        assert_eq!(sonner.dependencies, vec!["sonner-native"]);
        assert_eq!(
            sonner.files,
            vec![RegistryFile {
                name: "sonner.tsx".to_string(),
                content: "sonner body".to_string(),
            }]
        );
    }

    #[test]
    fn test_missing_source_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        write_source(temp_dir.path(), "components/ui/chart.tsx", "chart body");
        write_source(temp_dir.path(), "components/ui/drawer.tsx", "drawer body");

        let builder = RegistryBuilder::new(BuilderConfig::with_root(temp_dir.path()));
        let outcome = builder.build(&catalog());

        assert_eq!(outcome.skipped, vec!["sonner"]);
        assert_eq!(outcome.registry.component_names(), vec!["chart", "drawer"]);
    }

    #[test]
    fn test_non_utf8_source_is_published_lossily() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("legacy.tsx");
        std::fs::write(&path, b"const s = \"caf\xe9\";").unwrap();

        let catalog = vec![ComponentDescriptor::new("legacy", &[], "legacy.tsx")];
        let builder = RegistryBuilder::new(BuilderConfig::with_root(temp_dir.path()));
        let outcome = builder.build(&catalog);

        assert!(outcome.skipped.is_empty());
        assert_eq!(
            outcome.registry.components[0].files[0].content,
            "const s = \"caf\u{FFFD}\";"
        );
    }

    #[test]
    fn test_duplicate_descriptor_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        write_source(temp_dir.path(), "a.tsx", "first");
        write_source(temp_dir.path(), "b.tsx", "second");

        let catalog = vec![
            ComponentDescriptor::new("button", &[], "a.tsx"),
            ComponentDescriptor::new("button", &[], "b.tsx"),
        ];

        let builder = RegistryBuilder::new(BuilderConfig::with_root(temp_dir.path()));
        let outcome = builder.build(&catalog);

        assert_eq!(outcome.registry.components.len(), 1);
        assert_eq!(outcome.registry.components[0].files[0].content, "first");
        assert_eq!(outcome.skipped, vec!["button"]);
    }

    #[test]
    fn test_write_overwrites_previous_output() {
        let temp_dir = TempDir::new().unwrap();
        let config = BuilderConfig::with_root(temp_dir.path());
        std::fs::write(&config.output_file, "stale").unwrap();

        let builder = RegistryBuilder::new(config);
        let path = builder.write(&Registry::new("native-shadcn")).unwrap();

        let written = std::fs::read_to_string(path).unwrap();
        assert_eq!(written, "{\n  \"name\": \"native-shadcn\",\n  \"components\": []\n}");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = BuilderConfig::with_root(temp_dir.path());
        config.output_file = temp_dir.path().join("missing/registry.json");

        let builder = RegistryBuilder::new(config);
        let err = builder.write(&Registry::new("native-shadcn")).unwrap_err();
        assert!(matches!(err, RegistryError::Filesystem { .. }));
    }
}
