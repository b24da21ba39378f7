//! Registry snapshot: the file-backed implementation of the host
//! capabilities.
//!
//! The host integration layer exports its runtime registries into
//! `storage/mcp/registry.json` under the project root. The snapshot is
//! re-read on every capability detection pass, so reports always reflect
//! the last export; nothing is cached across queries.
//!
//! Snapshot shape:
//!
//! ```json
//! {
//!   "environment": "production",
//!   "build": { "build": "1.2.7", "modified": false },
//!   "active_theme": { "id": "demo", "path": "themes/demo" },
//!   "component_total": 12,
//!   "plugins": [
//!     {
//!       "id": "acme.blog",
//!       "class": "Acme\\Blog\\Plugin",
//!       "path": "plugins/acme/blog",
//!       "disabled": false,
//!       "name": "Blog",
//!       "author": "Acme",
//!       "version": "1.0.3",
//!       "components": { "Acme\\Blog\\Components\\PostList": "postList" }
//!     }
//!   ],
//!   "console_commands": [
//!     { "name": "create:plugin", "description": "...", "class": "..." }
//!   ]
//! }
//! ```
//!
//! A plugin whose component registration threw on the host side carries
//! `"components": { "failed": "<reason>" }` instead of the class map.

use crate::error::{DiscoveryError, Result};
use crate::registry::{
    ActiveTheme, BuildInfo, CommandDescriptor, ComponentProbe, ComponentRegistration,
    ComponentRegistry, ConsoleCatalog, HostCapabilities, PluginDescriptor, PluginRegistry,
    ThemeAccessor, VersionResolver, UNKNOWN_BUILD,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Arc;

/// Snapshot location relative to the project root.
pub const SNAPSHOT_RELATIVE_PATH: &str = "storage/mcp/registry.json";

/// Console invocation used as the secondary version-resolution stage.
const VERSION_COMMAND: &[&str] = &["php", "artisan", "winter:version", "--only-version"];

pub fn snapshot_path(root: &Path) -> PathBuf {
    root.join(SNAPSHOT_RELATIVE_PATH)
}

#[derive(Debug, Deserialize)]
struct SnapshotFile {
    environment: Option<String>,
    build: Option<BuildInfo>,
    active_theme: Option<ActiveTheme>,
    component_total: Option<usize>,
    plugins: Option<Vec<SnapshotPlugin>>,
    console_commands: Option<Vec<CommandDescriptor>>,
}

#[derive(Debug, Deserialize)]
struct SnapshotPlugin {
    id: String,
    class: String,
    path: String,
    #[serde(default)]
    disabled: bool,
    name: Option<String>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    author: String,
    version: Option<String>,
    #[serde(default)]
    components: ComponentsField,
}

/// Either the class-to-alias map the plugin registered, or the failure the
/// host recorded while asking for it. `Failed` must be tried first: a
/// legitimate class map never has a bare `failed` key (host class names are
/// namespaced).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ComponentsField {
    Failed { failed: String },
    Registered(BTreeMap<String, String>),
}

impl Default for ComponentsField {
    fn default() -> Self {
        ComponentsField::Registered(BTreeMap::new())
    }
}

/// One loaded snapshot, implementing every capability trait it has data for.
pub struct SnapshotHost {
    root: PathBuf,
    data: SnapshotFile,
}

impl SnapshotHost {
    /// Read and parse the snapshot under `root`.
    pub fn load(root: &Path) -> Result<Self> {
        let path = snapshot_path(root);
        let raw = std::fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DiscoveryError::SnapshotMissing(path.display().to_string())
            } else {
                DiscoveryError::Io(e)
            }
        })?;
        let data: SnapshotFile = serde_json::from_str(&raw)?;
        Ok(Self {
            root: root.to_path_buf(),
            data,
        })
    }

    fn plugin(&self, id: &str) -> Option<&SnapshotPlugin> {
        self.data
            .plugins
            .as_ref()?
            .iter()
            .find(|plugin| plugin.id == id)
    }
}

impl PluginRegistry for SnapshotHost {
    fn list_plugins(&self) -> Vec<PluginDescriptor> {
        self.data
            .plugins
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|plugin| PluginDescriptor {
                id: plugin.id.clone(),
                implementation_class: plugin.class.clone(),
                path: plugin.path.clone(),
                disabled: plugin.disabled,
                name: plugin.name.clone().unwrap_or_else(|| plugin.id.clone()),
                description: plugin.description.clone(),
                author: plugin.author.clone(),
                version: plugin.version.clone(),
            })
            .collect()
    }

    fn path_of(&self, id: &str) -> Option<PathBuf> {
        let plugin = self.plugin(id)?;
        let path = PathBuf::from(&plugin.path);
        if path.is_absolute() {
            Some(path)
        } else {
            Some(self.root.join(path))
        }
    }

    fn is_disabled(&self, id: &str) -> bool {
        self.plugin(id).map(|plugin| plugin.disabled).unwrap_or(false)
    }

    fn register_components(&self, id: &str) -> ComponentProbe {
        match self.plugin(id).map(|plugin| &plugin.components) {
            Some(ComponentsField::Registered(map)) => ComponentProbe::Registered(
                map.iter()
                    .map(|(class, alias)| ComponentRegistration {
                        plugin_id: id.to_string(),
                        alias: alias.clone(),
                        implementation_class: class.clone(),
                    })
                    .collect(),
            ),
            Some(ComponentsField::Failed { failed }) => ComponentProbe::Failed {
                reason: failed.clone(),
            },
            None => ComponentProbe::Registered(Vec::new()),
        }
    }
}

impl ComponentRegistry for SnapshotHost {
    fn count(&self) -> usize {
        self.data.component_total.unwrap_or(0)
    }
}

impl VersionResolver for SnapshotHost {
    fn current_build(&self) -> BuildInfo {
        if let Some(build) = &self.data.build {
            return build.clone();
        }

        if let Some(build) = version_via_console(&self.root) {
            log::debug!("Resolved build {build} via host console");
            return BuildInfo {
                build,
                modified: false,
            };
        }

        log::debug!("Version resolution failed at every stage");
        BuildInfo {
            build: UNKNOWN_BUILD.to_string(),
            modified: false,
        }
    }
}

impl ThemeAccessor for SnapshotHost {
    fn active_theme(&self) -> Option<ActiveTheme> {
        self.data.active_theme.clone()
    }
}

impl ConsoleCatalog for SnapshotHost {
    fn list_commands(&self) -> Vec<CommandDescriptor> {
        self.data.console_commands.clone().unwrap_or_default()
    }
}

/// Secondary version-resolution stage: ask the host console directly.
fn version_via_console(root: &Path) -> Option<String> {
    let (program, args) = VERSION_COMMAND.split_first()?;
    let output = Command::new(program)
        .args(args)
        .current_dir(root)
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if version.is_empty() {
        None
    } else {
        Some(version)
    }
}

impl HostCapabilities {
    /// Detect the capabilities of the project at `root`.
    ///
    /// A missing or unreadable snapshot disables everything; a snapshot
    /// with a missing section disables just that capability.
    pub fn detect(root: &Path) -> Self {
        let host = match SnapshotHost::load(root) {
            Ok(host) => Arc::new(host),
            Err(e) => {
                log::debug!("No host capabilities: {e}");
                return HostCapabilities::default();
            }
        };

        HostCapabilities {
            plugins: host
                .data
                .plugins
                .is_some()
                .then(|| Arc::clone(&host) as Arc<dyn PluginRegistry>),
            components: host
                .data
                .component_total
                .is_some()
                .then(|| Arc::clone(&host) as Arc<dyn ComponentRegistry>),
            version: Some(Arc::clone(&host) as Arc<dyn VersionResolver>),
            theme: Some(Arc::clone(&host) as Arc<dyn ThemeAccessor>),
            console: host
                .data
                .console_commands
                .is_some()
                .then(|| Arc::clone(&host) as Arc<dyn ConsoleCatalog>),
            environment: host.data.environment.clone(),
        }
    }
}
