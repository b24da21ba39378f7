//! Project overview report: framework, environment, version, theme, counts.

use crate::registry::{
    ComponentRegistry, HostCapabilities, PluginRegistry, ThemeAccessor, VersionResolver,
};
use serde_json::{json, Map, Value};

const FRAMEWORK_NAME: &str = "Winter CMS";

/// Assemble the overview. Each section depends on one capability and is
/// omitted when that capability is absent; the report never fails as a
/// whole.
pub(crate) fn project_overview(host: &HostCapabilities) -> Value {
    let mut overview = Map::new();
    overview.insert("framework".to_string(), json!(FRAMEWORK_NAME));

    if let Some(environment) = &host.environment {
        overview.insert("environment".to_string(), json!(environment));
    }

    if let Some(version) = &host.version {
        let build = version.current_build();
        overview.insert("version".to_string(), json!(build.build));
        overview.insert("version_modified".to_string(), json!(build.modified));
    }

    if let Some(theme) = &host.theme {
        let active = theme.active_theme();
        overview.insert(
            "theme".to_string(),
            json!({
                "active_theme": active.as_ref().map(|theme| theme.id.clone()),
                "theme_path": active.as_ref().map(|theme| theme.path.clone()),
            }),
        );
    }

    if let Some(plugins) = &host.plugins {
        overview.insert("plugin_count".to_string(), json!(plugins.list_plugins().len()));
    }

    if let Some(components) = &host.components {
        overview.insert("component_count".to_string(), json!(components.count()));
    }

    Value::Object(overview)
}
