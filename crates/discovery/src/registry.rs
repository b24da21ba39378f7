//! Host capability interfaces.
//!
//! The facts only the running CMS knows (which plugins are installed, which
//! components they register, the framework build, the active theme, the
//! console command list) are consumed through the traits below instead of
//! the host's singleton managers. Report assemblers receive a
//! [`HostCapabilities`] bundle of optional handles; an absent handle means
//! the capability could not be detected and the matching report section is
//! degraded per the tolerance rules.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

/// One installed plugin, as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginDescriptor {
    /// `<owner>.<project>` identifier.
    pub id: String,
    /// Fully qualified plugin class on the host side.
    #[serde(rename = "class")]
    pub implementation_class: String,
    /// Plugin directory, as the host reports it.
    pub path: String,
    pub disabled: bool,
    pub name: String,
    pub description: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// One component registration contributed by a plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentRegistration {
    #[serde(rename = "plugin")]
    pub plugin_id: String,
    pub alias: String,
    #[serde(rename = "class")]
    pub implementation_class: String,
}

/// Outcome of asking one plugin for its component registrations.
///
/// Registration runs host plugin code and may fail per plugin; the failure
/// is data, not an error path. Assemblers skip `Failed` probes and continue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentProbe {
    Registered(Vec<ComponentRegistration>),
    Failed { reason: String },
}

/// Framework build information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildInfo {
    pub build: String,
    #[serde(default)]
    pub modified: bool,
}

/// Sentinel build string when every resolution stage fails.
pub const UNKNOWN_BUILD: &str = "unknown";

/// The currently active frontend theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveTheme {
    pub id: String,
    pub path: String,
}

/// One console command registered with the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDescriptor {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "class")]
    pub implementation_class: String,
}

/// Installed-plugin registry.
pub trait PluginRegistry: Send + Sync {
    fn list_plugins(&self) -> Vec<PluginDescriptor>;

    /// Absolute directory of one plugin, when known.
    fn path_of(&self, id: &str) -> Option<PathBuf>;

    fn is_disabled(&self, id: &str) -> bool;

    /// Component registrations contributed by one plugin.
    fn register_components(&self, id: &str) -> ComponentProbe;
}

/// Global component registry.
pub trait ComponentRegistry: Send + Sync {
    fn count(&self) -> usize;
}

/// Framework build resolution. Infallible: implementations fall back to
/// [`UNKNOWN_BUILD`] rather than propagate an error.
pub trait VersionResolver: Send + Sync {
    fn current_build(&self) -> BuildInfo;
}

/// Active-theme accessor. `None` means no theme is active, not that the
/// accessor is unavailable.
pub trait ThemeAccessor: Send + Sync {
    fn active_theme(&self) -> Option<ActiveTheme>;
}

/// Console command catalog.
pub trait ConsoleCatalog: Send + Sync {
    fn list_commands(&self) -> Vec<CommandDescriptor>;
}

/// Capability handles detected for one project, each `None` when the host
/// did not supply the corresponding data.
#[derive(Clone, Default)]
pub struct HostCapabilities {
    pub plugins: Option<Arc<dyn PluginRegistry>>,
    pub components: Option<Arc<dyn ComponentRegistry>>,
    pub version: Option<Arc<dyn VersionResolver>>,
    pub theme: Option<Arc<dyn ThemeAccessor>>,
    pub console: Option<Arc<dyn ConsoleCatalog>>,
    /// Host application environment name (e.g. `production`), when known.
    pub environment: Option<String>,
}
