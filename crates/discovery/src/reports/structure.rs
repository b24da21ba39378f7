//! Project structure report: plugins, components, and backend controllers.

use crate::registry::{ComponentProbe, ComponentRegistration, HostCapabilities, PluginRegistry};
use crate::scanner;
use serde::Serialize;
use serde_json::{json, Value};
use std::path::Path;

#[derive(Debug, Serialize)]
struct ControllerEntry {
    plugin: String,
    controller: String,
    path: String,
    class: String,
}

/// Assemble the full project structure.
///
/// Fails atomically when no plugin registry is reachable; every other
/// failure (a plugin whose component registration failed, a plugin with no
/// controllers directory) narrows to an absent entry.
pub(crate) fn project_structure(host: &HostCapabilities) -> Value {
    let Some(registry) = &host.plugins else {
        return json!({ "error": "plugin registry not available" });
    };

    let plugins = registry.list_plugins();
    let mut components: Vec<ComponentRegistration> = Vec::new();
    let mut controllers: Vec<ControllerEntry> = Vec::new();

    for descriptor in &plugins {
        match registry.register_components(&descriptor.id) {
            ComponentProbe::Registered(mut registered) => components.append(&mut registered),
            ComponentProbe::Failed { reason } => {
                log::warn!(
                    "Skipping components of plugin {}: {reason}",
                    descriptor.id
                );
            }
        }

        if let Some(plugin_path) = registry.path_of(&descriptor.id) {
            controllers.extend(scan_controllers(&descriptor.id, &plugin_path));
        }
    }

    json!({
        "plugins": plugins,
        "components": components,
        "controllers": controllers,
        "summary": {
            "plugin_count": plugins.len(),
            "component_count": components.len(),
            "controller_count": controllers.len(),
        },
    })
}

/// Single-level scan of one plugin's `controllers/` directory.
fn scan_controllers(plugin_id: &str, plugin_path: &Path) -> Vec<ControllerEntry> {
    let pattern = format!("{}/controllers/*.php", plugin_path.display());
    scanner::list_paths(&pattern)
        .into_iter()
        .filter_map(|file| {
            let name = file.file_stem()?.to_str()?.to_string();
            Some(ControllerEntry {
                plugin: plugin_id.to_string(),
                controller: name.clone(),
                path: file.display().to_string(),
                class: controller_class(plugin_id, &name),
            })
        })
        .collect()
}

/// Conventional controller class for a plugin id and controller file stem,
/// e.g. `acme.blog` + `Posts` -> `Acme\Blog\Controllers\Posts`.
fn controller_class(plugin_id: &str, controller: &str) -> String {
    let namespace: Vec<String> = plugin_id.split('.').map(ucfirst).collect();
    format!(
        "{}\\Controllers\\{}",
        namespace.join("\\"),
        ucfirst(controller)
    )
}

fn ucfirst(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn derives_conventional_controller_class() {
        assert_eq!(
            controller_class("acme.blog", "Posts"),
            "Acme\\Blog\\Controllers\\Posts"
        );
        assert_eq!(
            controller_class("winter.user", "users"),
            "Winter\\User\\Controllers\\Users"
        );
    }
}
