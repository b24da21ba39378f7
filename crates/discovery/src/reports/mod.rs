//! Report assembly and the query facade.
//!
//! One module per report; [`Reporter`] is the stable entry point the MCP
//! server and the CLI harness share. Every query rebuilds its report from
//! the directory tree and the capability handles it was constructed with;
//! nothing is cached between calls.

mod guide;
mod overview;
mod scaffolding;
mod structure;
mod views;

use crate::registry::HostCapabilities;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// The six report operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    ProjectOverview,
    ProjectStructure,
    ScaffoldingCommands,
    ScaffoldingDiscovery,
    ViewStructure,
    DevelopmentGuide,
}

#[derive(Clone, Copy, Debug)]
pub struct ReportDescriptor {
    pub kind: ReportKind,
    pub name: &'static str,
    pub summary: &'static str,
}

pub const REPORT_CATALOG: &[ReportDescriptor] = &[
    ReportDescriptor {
        kind: ReportKind::ProjectOverview,
        name: "project_overview",
        summary: "Framework version, environment, active theme, and plugin/component counts.",
    },
    ReportDescriptor {
        kind: ReportKind::ProjectStructure,
        name: "project_structure",
        summary: "Complete project structure: plugins, components, and backend controllers.",
    },
    ReportDescriptor {
        kind: ReportKind::ScaffoldingCommands,
        name: "scaffolding_commands",
        summary: "Reference guide to the scaffolding commands for code generation.",
    },
    ReportDescriptor {
        kind: ReportKind::ScaffoldingDiscovery,
        name: "scaffolding_discovery",
        summary: "Scaffolding commands actually registered with the host console.",
    },
    ReportDescriptor {
        kind: ReportKind::ViewStructure,
        name: "view_structure",
        summary: "View files across the dual view system: Twig frontend, PHP backend.",
    },
    ReportDescriptor {
        kind: ReportKind::DevelopmentGuide,
        name: "development_guide",
        summary: "Architecture conventions, workflow, and core service availability.",
    },
];

impl ReportKind {
    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    pub fn summary(self) -> &'static str {
        self.descriptor().summary
    }

    pub fn from_name(name: &str) -> Option<ReportKind> {
        REPORT_CATALOG
            .iter()
            .find(|descriptor| descriptor.name == name)
            .map(|descriptor| descriptor.kind)
    }

    fn descriptor(self) -> &'static ReportDescriptor {
        REPORT_CATALOG
            .iter()
            .find(|descriptor| descriptor.kind == self)
            .expect("every kind is in the catalog")
    }
}

/// Query facade over one project root and its detected capabilities.
pub struct Reporter {
    root: PathBuf,
    host: HostCapabilities,
}

impl Reporter {
    pub fn new(root: impl AsRef<Path>, host: HostCapabilities) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            host,
        }
    }

    /// Build a reporter by detecting capabilities from the registry
    /// snapshot under `root`.
    pub fn detect(root: impl AsRef<Path>) -> Self {
        let host = HostCapabilities::detect(root.as_ref());
        Self::new(root, host)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn run(&self, kind: ReportKind) -> Value {
        match kind {
            ReportKind::ProjectOverview => self.project_overview(),
            ReportKind::ProjectStructure => self.project_structure(),
            ReportKind::ScaffoldingCommands => self.scaffolding_commands(),
            ReportKind::ScaffoldingDiscovery => self.scaffolding_discovery(),
            ReportKind::ViewStructure => self.view_structure(),
            ReportKind::DevelopmentGuide => self.development_guide(),
        }
    }

    pub fn project_overview(&self) -> Value {
        overview::project_overview(&self.host)
    }

    pub fn project_structure(&self) -> Value {
        structure::project_structure(&self.host)
    }

    pub fn scaffolding_commands(&self) -> Value {
        scaffolding::scaffolding_commands()
    }

    pub fn scaffolding_discovery(&self) -> Value {
        scaffolding::scaffolding_discovery(&self.host)
    }

    pub fn view_structure(&self) -> Value {
        views::view_structure(&self.root)
    }

    pub fn development_guide(&self) -> Value {
        guide::development_guide(&self.host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn catalog_names_resolve_round_trip() {
        for descriptor in REPORT_CATALOG {
            assert_eq!(ReportKind::from_name(descriptor.name), Some(descriptor.kind));
            assert_eq!(descriptor.kind.name(), descriptor.name);
        }
        assert_eq!(ReportKind::from_name("nope"), None);
    }
}
