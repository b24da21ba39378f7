//! View structure report: the dual view system mapped from disk.
//!
//! Frontend views are Twig `.htm` files living in themes and plugin
//! directories; backend views are PHP `.php` files under controller
//! directories. Everything here is derived from the directory tree alone,
//! no host capability involved.

use crate::layout::{classify, LayoutTemplate};
use crate::scanner;
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Serialize)]
struct ThemeViews {
    layouts: usize,
    pages: usize,
    partials: usize,
}

#[derive(Debug, Serialize)]
struct ComponentTemplateEntry {
    plugin: String,
    component: String,
    template: String,
}

#[derive(Debug, Serialize)]
struct PluginPartialEntry {
    plugin: String,
    partial: String,
}

#[derive(Debug, Serialize)]
struct ControllerViewEntry {
    plugin: String,
    controller: String,
    view: String,
    is_partial: bool,
}

pub(crate) fn view_structure(root: &Path) -> Value {
    json!({
        "frontend_views": {
            "description": "Twig templates (.htm files)",
            "themes": theme_views(root),
            "plugin_components": component_templates(root),
            "plugin_partials": plugin_partials(root),
        },
        "backend_views": {
            "description": "PHP views (.php files with <?= ?> syntax)",
            "controller_views": controller_views(root),
        },
        "conventions": {
            "frontend": "Use .htm files with Twig syntax",
            "backend": "Use .php files with <?= ?> short echo tags",
            "partials": "Prefix with underscore (_) for partial views",
        },
    })
}

/// Per-theme view counts. Every theme directory gets an entry, including
/// themes with no views at all; layouts are counted single-level, pages and
/// partials at any depth.
fn theme_views(root: &Path) -> BTreeMap<String, ThemeViews> {
    let mut themes = BTreeMap::new();

    let pattern = format!("{}/themes/*", root.display());
    for theme_dir in scanner::list_paths(&pattern) {
        if !theme_dir.is_dir() {
            continue;
        }
        let Some(name) = theme_dir.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        let layouts_pattern = format!("{}/layouts/*.htm", theme_dir.display());
        let layouts = scanner::list_paths(&layouts_pattern)
            .iter()
            .filter_map(|path| classify(path, root, LayoutTemplate::ThemeView))
            .count();

        themes.insert(
            name.to_string(),
            ThemeViews {
                layouts,
                pages: scanner::count_matching(&theme_dir.join("pages"), ".htm"),
                partials: scanner::count_matching(&theme_dir.join("partials"), ".htm"),
            },
        );
    }

    themes
}

fn component_templates(root: &Path) -> Vec<ComponentTemplateEntry> {
    let pattern = format!("{}/plugins/*/*/components/*/*.htm", root.display());
    scanner::list_paths(&pattern)
        .iter()
        .filter_map(|path| classify(path, root, LayoutTemplate::ComponentTemplate))
        .map(|record| ComponentTemplateEntry {
            plugin: record.project_id,
            component: record.entity_name,
            template: record.file_name,
        })
        .collect()
}

fn plugin_partials(root: &Path) -> Vec<PluginPartialEntry> {
    let pattern = format!("{}/plugins/*/*/partials/*.htm", root.display());
    scanner::list_paths(&pattern)
        .iter()
        .filter_map(|path| classify(path, root, LayoutTemplate::PluginPartial))
        .map(|record| PluginPartialEntry {
            plugin: record.project_id,
            partial: record.file_name,
        })
        .collect()
}

fn controller_views(root: &Path) -> Vec<ControllerViewEntry> {
    let pattern = format!("{}/plugins/*/*/controllers/*/*.php", root.display());
    scanner::list_paths(&pattern)
        .iter()
        .filter_map(|path| classify(path, root, LayoutTemplate::ControllerView))
        .map(|record| ControllerViewEntry {
            plugin: record.project_id,
            controller: record.entity_name,
            view: crate::layout::file_stem(&record.file_name).to_string(),
            is_partial: record.is_partial,
        })
        .collect()
}
