//! Component catalog
//!
//! The catalog is authored in code. Each descriptor points at one source
//! file, relative to the producer project's root.

use std::path::PathBuf;

/// A component as authored by the producer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDescriptor {
    /// Unique component name
    pub name: String,

    /// Third-party package identifiers
    pub dependencies: Vec<String>,

    /// Source file, relative to the builder root
    pub source: PathBuf,
}

impl ComponentDescriptor {
    pub fn new(name: &str, dependencies: &[&str], source: &str) -> Self {
        Self {
            name: name.to_string(),
            dependencies: dependencies.iter().map(|d| d.to_string()).collect(),
            source: PathBuf::from(source),
        }
    }
}

/// The components published by this project
pub fn default_catalog() -> Vec<ComponentDescriptor> {
    vec![
        ComponentDescriptor::new(
            "chart",
            &[
                "react-native-gifted-charts",
                "gifted-charts-core",
                "react-native-svg",
                "expo-linear-gradient",
                "lucide-react-native",
            ],
            "components/ui/chart.tsx",
        ),
        ComponentDescriptor::new(
            "sonner",
            &["sonner-native", "lucide-react-native"],
            "components/ui/sonner.tsx",
        ),
        ComponentDescriptor::new(
            "drawer",
            &[
                "@gorhom/bottom-sheet",
                "react-native-reanimated",
                "react-native-gesture-handler",
                "@rn-primitives/slot",
                "@rn-primitives/portal",
            ],
            "components/ui/drawer.tsx",
        ),
    ]
}
