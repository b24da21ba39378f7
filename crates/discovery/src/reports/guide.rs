//! Development guide report: conventions and services, annotated with live
//! capability availability.

use crate::registry::HostCapabilities;
use serde_json::{json, Map, Value};

struct ServiceSpec {
    name: &'static str,
    class: &'static str,
    location: &'static str,
    singleton: bool,
    description: &'static str,
}

const CORE_SERVICES: &[ServiceSpec] = &[
    ServiceSpec {
        name: "PluginManager",
        class: "\\System\\Classes\\PluginManager",
        location: "modules/system/classes/PluginManager.php",
        singleton: true,
        description: "Manages plugin registration and loading",
    },
    ServiceSpec {
        name: "UpdateManager",
        class: "\\System\\Classes\\UpdateManager",
        location: "modules/system/classes/UpdateManager.php",
        singleton: true,
        description: "Handles CMS install and update process",
    },
    ServiceSpec {
        name: "ComponentManager",
        class: "\\Cms\\Classes\\ComponentManager",
        location: "modules/cms/classes/ComponentManager.php",
        singleton: true,
        description: "Manages CMS components",
    },
    ServiceSpec {
        name: "ThemeManager",
        class: "\\Cms\\Classes\\ThemeManager",
        location: "modules/cms/classes/ThemeManager.php",
        singleton: false,
        description: "Handles theme operations",
    },
];

/// Whether the capability backing one listed service was detected.
fn service_available(service: &ServiceSpec, host: &HostCapabilities) -> bool {
    match service.name {
        "PluginManager" => host.plugins.is_some(),
        "UpdateManager" => host.version.is_some(),
        "ComponentManager" => host.components.is_some(),
        "ThemeManager" => host.theme.is_some(),
        _ => false,
    }
}

pub(crate) fn development_guide(host: &HostCapabilities) -> Value {
    let services: Map<String, Value> = CORE_SERVICES
        .iter()
        .map(|service| {
            (
                service.name.to_string(),
                json!({
                    "class": service.class,
                    "location": service.location,
                    "singleton": service.singleton,
                    "description": service.description,
                    "available": service_available(service, host),
                }),
            )
        })
        .collect();

    let mut guide = Map::new();
    guide.insert(
        "architecture_patterns".to_string(),
        json!({
            "plugin_architecture": "All features should be implemented as plugins in plugins/author/pluginname/",
            "component_system": "Components extend Cms\\Classes\\ComponentBase for reusable frontend functionality",
            "backend_controllers": "Controllers extend Backend\\Classes\\Controller with behavior traits (FormController, ListController)",
            "models": "Models extend Winter\\Storm\\Database\\Model, not Eloquent directly",
        }),
    );
    guide.insert(
        "development_workflow".to_string(),
        json!({
            "1_scaffold_first": "Always use create:plugin, create:model, create:controller commands",
            "2_follow_conventions": "Follow Winter CMS naming and directory structure conventions",
            "3_use_proper_apis": "Use Winter CMS APIs (PluginManager, ComponentManager) instead of Laravel direct access",
            "4_version_migrations": "Track migrations in updates/version.yaml, not Laravel migration files",
        }),
    );
    guide.insert(
        "view_systems".to_string(),
        json!({
            "frontend_views": "Twig templates (.htm files) in themes/ or plugin components/",
            "backend_views": "PHP templates (.php files) with <?= ?> syntax in controllers/",
            "component_partials": "Twig partials in components/componentname/ directories",
        }),
    );
    guide.insert(
        "backend_behaviors".to_string(),
        json!({
            "FormController": "Add form functionality with config_form.yaml",
            "ListController": "Add list/table functionality with config_list.yaml",
            "RelationController": "Manage related records with config_relation.yaml",
            "ImportExportController": "Add import/export with config_import_export.yaml",
        }),
    );
    guide.insert("core_services".to_string(), Value::Object(services));

    if host.plugins.is_some() {
        guide.insert(
            "available_services".to_string(),
            json!({
                "plugin_manager": "Manage plugin installation and status",
                "update_manager": "Handle system updates and version info",
                "component_manager": "Register and manage components",
                "theme_manager": "Handle theme activation and configuration",
            }),
        );
    }

    Value::Object(guide)
}
