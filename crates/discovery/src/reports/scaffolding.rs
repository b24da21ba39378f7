//! Scaffolding reports: the static command guide and the live discovery of
//! scaffolding commands registered with the host console.

use crate::registry::{CommandDescriptor, ConsoleCatalog, HostCapabilities};
use serde_json::{json, Map, Value};

/// Reference entry for one scaffolding command.
struct CommandSpec {
    name: &'static str,
    description: &'static str,
    syntax: &'static str,
    example: &'static str,
    options: &'static [(&'static str, &'static str)],
    generates: &'static [&'static str],
    use_when: &'static str,
}

const CORE_COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "create:plugin",
        description: "Creates a complete plugin structure with all necessary files",
        syntax: "create:plugin <PluginName.PluginCode>",
        example: "create:plugin MyCompany.BlogExtension",
        options: &[],
        generates: &[
            "Plugin.php",
            "plugin.yaml",
            "version.yaml",
            "basic directory structure",
        ],
        use_when: "Starting any new plugin development",
    },
    CommandSpec {
        name: "create:model",
        description: "Creates model with optional controller, migration, seeder, factory",
        syntax: "create:model [options] <plugin> <model>",
        example: "create:model --all MyCompany.Blog Post",
        options: &[
            ("--all", "Generate controller, migration, seeder, and factory"),
            ("--controller", "Create backend controller"),
            ("--seed", "Create seeder"),
            ("--factory", "Create model factory"),
            ("--no-migration", "Skip migration file"),
        ],
        generates: &[
            "Model.php",
            "migration",
            "controller (with --all)",
            "seeder (with --all)",
        ],
        use_when: "Creating any new database entity",
    },
    CommandSpec {
        name: "create:controller",
        description: "Creates backend controller with form/list behaviors",
        syntax: "create:controller [options] <plugin> <controller>",
        example: "create:controller --model=Post MyCompany.Blog Posts",
        options: &[
            ("--model=<Model>", "Associate with specific model"),
            ("--layout=<layout>", "Set form layout (standard, sidebar, fancy)"),
            ("--stubs", "Create view files for local overwrites"),
        ],
        generates: &["Controller.php", "config files", "view templates"],
        use_when: "Creating backend admin interfaces",
    },
    CommandSpec {
        name: "create:component",
        description: "Creates frontend component with default template",
        syntax: "create:component <plugin> <component>",
        example: "create:component MyCompany.Blog PostList",
        options: &[],
        generates: &["Component.php", "default.htm template"],
        use_when: "Creating frontend functionality",
    },
    CommandSpec {
        name: "create:migration",
        description: "Creates database migration file",
        syntax: "create:migration <plugin> <migration_name>",
        example: "create:migration MyCompany.Blog create_posts_table",
        options: &[],
        generates: &["Timestamped migration file"],
        use_when: "Making database schema changes",
    },
    CommandSpec {
        name: "create:command",
        description: "Creates console command",
        syntax: "create:command <plugin> <command>",
        example: "create:command MyCompany.Blog SyncPosts",
        options: &[],
        generates: &["Console command class"],
        use_when: "Creating artisan commands",
    },
];

const SPECIALIZED_COMMANDS: &[(&str, &str, &str)] = &[
    (
        "create:formwidget",
        "Creates custom backend form widget",
        "Custom form input types needed",
    ),
    (
        "create:reportwidget",
        "Creates backend dashboard widget",
        "Adding dashboard functionality",
    ),
    (
        "create:settings",
        "Creates settings model for configuration",
        "Plugin needs configuration options",
    ),
    ("create:theme", "Creates theme structure", "Creating custom themes"),
    ("create:test", "Creates test class", "Adding automated tests"),
];

/// Install commands surfaced by discovery alongside the `create:`/`make:`
/// generators.
const INSTALL_COMMANDS: &[&str] = &["winter:install", "plugin:install", "theme:install"];

/// The static scaffolding command guide. Pure reference data, no discovery.
pub(crate) fn scaffolding_commands() -> Value {
    let mut core = Map::new();
    for spec in CORE_COMMANDS {
        let mut entry = Map::new();
        entry.insert("description".to_string(), json!(spec.description));
        entry.insert("syntax".to_string(), json!(spec.syntax));
        entry.insert("example".to_string(), json!(spec.example));
        if !spec.options.is_empty() {
            let options: Map<String, Value> = spec
                .options
                .iter()
                .map(|(flag, doc)| (flag.to_string(), json!(doc)))
                .collect();
            entry.insert("options".to_string(), Value::Object(options));
        }
        entry.insert("generates".to_string(), json!(spec.generates));
        entry.insert("use_when".to_string(), json!(spec.use_when));
        core.insert(spec.name.to_string(), Value::Object(entry));
    }

    let specialized: Map<String, Value> = SPECIALIZED_COMMANDS
        .iter()
        .map(|(name, description, use_when)| {
            (
                name.to_string(),
                json!({ "description": description, "use_when": use_when }),
            )
        })
        .collect();

    json!({
        "principle": "Always use scaffolding commands before creating files manually",
        "core_commands": core,
        "specialized_commands": specialized,
        "common_workflows": {
            "new_plugin_development": {
                "steps": [
                    "1. create:plugin Namespace.PluginName",
                    "2. create:model --all Namespace.PluginName ModelName",
                    "3. create:component Namespace.PluginName ComponentName",
                    "4. Customize generated files",
                ],
            },
            "add_model_to_existing_plugin": {
                "steps": [
                    "1. create:model --controller --seed Namespace.PluginName ModelName",
                    "2. Customize model relationships and validation",
                    "3. Configure backend controller form/list",
                ],
            },
            "add_frontend_functionality": {
                "steps": [
                    "1. create:component Namespace.PluginName ComponentName",
                    "2. Implement component logic in onRun()",
                    "3. Customize component template",
                ],
            },
        },
        "best_practices": {
            "always_scaffold_first": "Use scaffolding commands before manual file creation",
            "follow_naming_conventions": "Use PascalCase for models/controllers, kebab-case for components",
            "use_comprehensive_options": "Use --all flag for models when building full CRUD",
            "leverage_stubs": "Use --stubs option for controllers when customizing views",
        },
        "anti_patterns": {
            "manual_plugin_creation": "Never create Plugin.php manually - use create:plugin",
            "manual_model_creation": "Never create models from scratch - use create:model",
            "manual_controller_setup": "Never create controller directories manually - use create:controller",
            "skipping_migrations": "Always generate migrations with models unless specifically not needed",
        },
    })
}

/// Discovery of scaffolding commands actually registered with the host
/// console. The dynamic command list is omitted when the console catalog is
/// not reachable.
pub(crate) fn scaffolding_discovery(host: &HostCapabilities) -> Value {
    let mut report = Map::new();
    report.insert(
        "message".to_string(),
        json!("Use these commands instead of manual file creation"),
    );

    if let Some(console) = &host.console {
        let commands: Vec<CommandDescriptor> = console
            .list_commands()
            .into_iter()
            .filter(is_scaffolding_command)
            .collect();
        report.insert("scaffolding_commands".to_string(), json!(commands));
    }

    report.insert(
        "priority_commands".to_string(),
        json!({
            "create:plugin": "Always use for new plugins",
            "create:model": "Always use for new models",
            "create:controller": "Always use for new controllers",
            "create:component": "Always use for new components",
        }),
    );

    Value::Object(report)
}

fn is_scaffolding_command(command: &CommandDescriptor) -> bool {
    command.name.starts_with("create:")
        || command.name.starts_with("make:")
        || INSTALL_COMMANDS.contains(&command.name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn command(name: &str) -> CommandDescriptor {
        CommandDescriptor {
            name: name.to_string(),
            description: String::new(),
            implementation_class: "App\\Console\\Cmd".to_string(),
        }
    }

    #[test]
    fn filters_to_scaffolding_commands() {
        assert!(is_scaffolding_command(&command("create:plugin")));
        assert!(is_scaffolding_command(&command("make:request")));
        assert!(is_scaffolding_command(&command("plugin:install")));
        assert!(!is_scaffolding_command(&command("cache:clear")));
        assert!(!is_scaffolding_command(&command("migrate")));
    }

    #[test]
    fn guide_lists_every_core_command() {
        let guide = scaffolding_commands();
        let core = guide["core_commands"].as_object().unwrap();
        assert_eq!(core.len(), CORE_COMMANDS.len());
        assert!(core.contains_key("create:plugin"));
        assert_eq!(
            core["create:model"]["options"]["--all"],
            "Generate controller, migration, seeder, and factory"
        );
        // Commands without flags carry no options key at all.
        assert!(core["create:component"].get("options").is_none());
    }
}
