//! Path classification against Winter CMS directory-layout conventions.
//!
//! A Winter project keeps its view files in fixed places:
//!
//! ```text
//! themes/<theme>/{layouts|pages|partials}/**/*.htm
//! plugins/<owner>/<project>/components/<component>/<template>.htm
//! plugins/<owner>/<project>/partials/<partial>.htm
//! plugins/<owner>/<project>/controllers/<controller>/<view>.php
//! ```
//!
//! [`classify`] strips the project root from a path, splits the remainder
//! into segments, and reads the identity fields at the template's fixed
//! offsets. A path that does not fit the template yields `None` and is
//! silently skipped by callers; path shape mismatches are expected input,
//! not errors.

use serde::Serialize;
use std::path::Path;

/// Which directory-layout convention a path is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutTemplate {
    /// `themes/<theme>/{layouts|pages|partials}/**/*.htm`
    ThemeView,
    /// `plugins/<owner>/<project>/components/<component>/<template>.htm`
    ComponentTemplate,
    /// `plugins/<owner>/<project>/partials/<partial>.htm`
    PluginPartial,
    /// `plugins/<owner>/<project>/controllers/<controller>/<view>.php`
    ControllerView,
}

/// Kind of view entity a classified path belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Component,
    Controller,
    Partial,
    Layout,
    Page,
}

/// Structured identity of one view file, derived purely from its path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathRecord {
    /// Theme name, or plugin author for plugin templates.
    pub owner_id: String,
    /// `<owner>.<project>` for plugin templates, the theme name otherwise.
    pub project_id: String,
    pub entity_kind: EntityKind,
    /// Component or controller directory name; file stem for the rest.
    pub entity_name: String,
    /// Last path segment, extension included.
    pub file_name: String,
    /// File stem starts with an underscore.
    pub is_partial: bool,
}

/// Classify `path` (relative to `root`) against one layout template.
///
/// Returns `None` when the path has too few segments for the template,
/// contains a non-UTF8 segment, or sits in an unrecognized theme
/// subdirectory.
pub fn classify(path: &Path, root: &Path, template: LayoutTemplate) -> Option<PathRecord> {
    let relative = path.strip_prefix(root).ok()?;
    let segments: Vec<&str> = relative
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<_>>()?;

    match template {
        LayoutTemplate::ThemeView => {
            // themes / theme / kind / ... / file
            if segments.len() < 4 {
                return None;
            }
            let kind = match segments[2] {
                "layouts" => EntityKind::Layout,
                "pages" => EntityKind::Page,
                "partials" => EntityKind::Partial,
                _ => return None,
            };
            let file = *segments.last()?;
            let stem = file_stem(file);
            Some(PathRecord {
                owner_id: segments[1].to_string(),
                project_id: segments[1].to_string(),
                entity_kind: kind,
                entity_name: stem.to_string(),
                file_name: file.to_string(),
                is_partial: stem.starts_with('_'),
            })
        }
        LayoutTemplate::ComponentTemplate => {
            // plugins / owner / project / components / component / template
            if segments.len() < 6 {
                return None;
            }
            let stem = file_stem(segments[5]);
            Some(PathRecord {
                owner_id: segments[1].to_string(),
                project_id: format!("{}.{}", segments[1], segments[2]),
                entity_kind: EntityKind::Component,
                entity_name: segments[4].to_string(),
                file_name: segments[5].to_string(),
                is_partial: stem.starts_with('_'),
            })
        }
        LayoutTemplate::PluginPartial => {
            // plugins / owner / project / partials / partial
            if segments.len() < 5 {
                return None;
            }
            let stem = file_stem(segments[4]);
            Some(PathRecord {
                owner_id: segments[1].to_string(),
                project_id: format!("{}.{}", segments[1], segments[2]),
                entity_kind: EntityKind::Partial,
                entity_name: stem.to_string(),
                file_name: segments[4].to_string(),
                is_partial: stem.starts_with('_'),
            })
        }
        LayoutTemplate::ControllerView => {
            // plugins / owner / project / controllers / controller / view
            if segments.len() < 6 {
                return None;
            }
            let stem = file_stem(segments[5]);
            Some(PathRecord {
                owner_id: segments[1].to_string(),
                project_id: format!("{}.{}", segments[1], segments[2]),
                entity_kind: EntityKind::Controller,
                entity_name: segments[4].to_string(),
                file_name: segments[5].to_string(),
                is_partial: stem.starts_with('_'),
            })
        }
    }
}

/// File name with its final extension stripped.
pub fn file_stem(file_name: &str) -> &str {
    match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn root() -> PathBuf {
        PathBuf::from("/var/www/site")
    }

    #[test]
    fn classifies_component_template() {
        let path = root().join("plugins/acme/blog/components/postlist/default.htm");
        let record = classify(&path, &root(), LayoutTemplate::ComponentTemplate).unwrap();

        assert_eq!(record.owner_id, "acme");
        assert_eq!(record.project_id, "acme.blog");
        assert_eq!(record.entity_kind, EntityKind::Component);
        assert_eq!(record.entity_name, "postlist");
        assert_eq!(record.file_name, "default.htm");
        assert!(!record.is_partial);
    }

    #[test]
    fn classifies_controller_partial_view() {
        let path = root().join("plugins/acme/blog/controllers/posts/_toolbar.php");
        let record = classify(&path, &root(), LayoutTemplate::ControllerView).unwrap();

        assert_eq!(record.project_id, "acme.blog");
        assert_eq!(record.entity_kind, EntityKind::Controller);
        assert_eq!(record.entity_name, "posts");
        assert_eq!(record.file_name, "_toolbar.php");
        assert!(record.is_partial);
    }

    #[test]
    fn classifies_plugin_partial() {
        let path = root().join("plugins/acme/blog/partials/sidebar.htm");
        let record = classify(&path, &root(), LayoutTemplate::PluginPartial).unwrap();

        assert_eq!(record.project_id, "acme.blog");
        assert_eq!(record.entity_kind, EntityKind::Partial);
        assert_eq!(record.entity_name, "sidebar");
        assert_eq!(record.file_name, "sidebar.htm");
    }

    #[test]
    fn classifies_nested_theme_page() {
        let path = root().join("themes/default/pages/blog/post.htm");
        let record = classify(&path, &root(), LayoutTemplate::ThemeView).unwrap();

        assert_eq!(record.owner_id, "default");
        assert_eq!(record.project_id, "default");
        assert_eq!(record.entity_kind, EntityKind::Page);
        assert_eq!(record.entity_name, "post");
    }

    #[test]
    fn rejects_short_paths() {
        let path = root().join("plugins/acme/blog/components");
        assert_eq!(
            classify(&path, &root(), LayoutTemplate::ComponentTemplate),
            None
        );
    }

    #[test]
    fn rejects_unknown_theme_subdirectory() {
        let path = root().join("themes/default/assets/site.htm");
        assert_eq!(classify(&path, &root(), LayoutTemplate::ThemeView), None);
    }

    #[test]
    fn rejects_paths_outside_root() {
        let path = PathBuf::from("/elsewhere/plugins/acme/blog/partials/a.htm");
        assert_eq!(
            classify(&path, &root(), LayoutTemplate::PluginPartial),
            None
        );
    }

    #[test]
    fn underscore_stem_marks_partial() {
        assert_eq!(file_stem("_toolbar.php"), "_toolbar");
        assert_eq!(file_stem("default.htm"), "default");
        assert_eq!(file_stem("noext"), "noext");
    }
}
