//! Registry document parsing and lookup
//!
//! The registry document (`registry.json`) lists every installable component
//! with its third-party dependencies and the literal text of its files.

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// The published registry document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    /// Catalog identifier
    pub name: String,

    /// Components in catalog order
    pub components: Vec<RegistryComponent>,
}

/// A single installable component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryComponent {
    /// Component name, matched exactly by `add`
    pub name: String,

    /// Third-party package identifiers, passed through to the package manager
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Files written into the target directory
    pub files: Vec<RegistryFile>,
}

/// A file shipped with a component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryFile {
    /// Target file name (no directories)
    pub name: String,

    /// Full file text
    pub content: String,
}

impl Registry {
    /// Create an empty registry
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            components: Vec::new(),
        }
    }

    /// Parse a registry document
    ///
    /// Only the document shape is checked here. Per-component rules are
    /// applied to the component being installed, see [`Registry::resolve`].
    pub fn from_json(content: &str) -> Result<Self, RegistryError> {
        serde_json::from_str(content).map_err(|e| RegistryError::malformed(e.to_string()))
    }

    /// Serialize with two-space indentation
    pub fn to_json_pretty(&self) -> Result<String, RegistryError> {
        serde_json::to_string_pretty(self).map_err(|source| RegistryError::Serialize { source })
    }

    /// Find a component by exact, case-sensitive name
    ///
    /// Returns the first match if the document contains duplicates.
    pub fn find(&self, name: &str) -> Option<&RegistryComponent> {
        self.components.iter().find(|c| c.name == name)
    }

    /// Like [`Registry::find`], but reports the available names on a miss
    /// and rejects a match that cannot be installed safely
    pub fn resolve(&self, name: &str) -> Result<&RegistryComponent, RegistryError> {
        let component = self
            .find(name)
            .ok_or_else(|| RegistryError::ComponentNotFound {
                name: name.to_string(),
                available: self.component_names(),
            })?;
        component.validate()?;
        Ok(component)
    }

    /// Component names in registry order
    pub fn component_names(&self) -> Vec<String> {
        self.components.iter().map(|c| c.name.clone()).collect()
    }
}

impl RegistryComponent {
    /// Check the rules serde cannot express
    ///
    /// A component with no files is valid and installs nothing.
    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.name.is_empty() {
            return Err(RegistryError::malformed("component has an empty name"));
        }

        for file in &self.files {
            if !is_plain_file_name(&file.name) {
                return Err(RegistryError::malformed(format!(
                    "component '{}' has invalid file name '{}'",
                    self.name, file.name
                )));
            }
        }

        Ok(())
    }
}

/// A name that stays inside the directory it is joined onto
fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\')
        && !name.contains('\0')
}
