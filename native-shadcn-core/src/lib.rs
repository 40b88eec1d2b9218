//! native-shadcn core library
//!
//! Publishes copy-into-project UI components through a single JSON registry
//! document and installs them into consumer projects.
//!
//! ```text
//! catalog (in code)
//!     │  RegistryBuilder
//!     ▼
//! registry.json  ── published over HTTP ──┐
//!                                         ▼
//!                               ComponentInstaller
//!                                 ├── package manager (dependencies)
//!                                 └── src/components/ui/ (files)
//! ```

pub mod builder;
pub mod catalog;
pub mod config;
pub mod deps;
pub mod error;
pub mod fetch;
pub mod installer;
pub mod registry;

pub use builder::{BuildOutcome, RegistryBuilder};
pub use catalog::{default_catalog, ComponentDescriptor};
pub use config::{BuilderConfig, InstallerConfig, PackageManagerCommand};
pub use deps::{DependencyInstaller, PackageManagerInstaller};
pub use error::{InstallError, RegistryError};
pub use fetch::{HttpRegistrySource, RegistrySource};
pub use installer::{ComponentInstaller, InstallReport};
pub use registry::{Registry, RegistryComponent, RegistryFile};
