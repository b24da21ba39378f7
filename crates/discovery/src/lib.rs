//! # Winter Discovery
//!
//! Project-structure discovery and reporting for Winter CMS installations.
//!
//! ## Pipeline
//!
//! ```text
//! Project root
//!     │
//!     ├──> Directory Scanner (glob, tolerant of missing dirs)
//!     │      └─> Raw path lists
//!     │
//!     ├──> Path Classifier (fixed layout templates)
//!     │      └─> PathRecord per view file
//!     │
//!     └──> Report Assemblers (+ host capabilities from the
//!          registry snapshot)
//!            └─> JSON reports via the Reporter facade
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use winter_discovery::{Reporter, ReportKind};
//!
//! let reporter = Reporter::detect("/var/www/site");
//! let structure = reporter.run(ReportKind::ProjectStructure);
//! println!("{}", serde_json::to_string_pretty(&structure).unwrap());
//! ```
//!
//! Reports are rebuilt from scratch on every call; missing directories,
//! empty matches, and per-plugin registration failures degrade to empty
//! sections instead of errors. Only an unreachable plugin registry is
//! surfaced, as an error object inside the project structure report.

mod error;
mod layout;
mod registry;
mod reports;
mod scanner;
mod snapshot;

pub use error::{DiscoveryError, Result};
pub use layout::{classify, file_stem, EntityKind, LayoutTemplate, PathRecord};
pub use registry::{
    ActiveTheme, BuildInfo, CommandDescriptor, ComponentProbe, ComponentRegistration,
    ComponentRegistry, ConsoleCatalog, HostCapabilities, PluginDescriptor, PluginRegistry,
    ThemeAccessor, VersionResolver, UNKNOWN_BUILD,
};
pub use reports::{ReportDescriptor, ReportKind, Reporter, REPORT_CATALOG};
pub use scanner::{count_matching, list_paths};
pub use snapshot::{snapshot_path, SnapshotHost, SNAPSHOT_RELATIVE_PATH};
