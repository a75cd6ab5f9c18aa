//! Structural validation of site declarations.
//!
//! Each function appends to a shared [`ConfigDiagnostics`]; none of them
//! return early, so one pass reports every problem.

use std::collections::HashSet;

use docsite_nav::{
    EDIT_PATH_PLACEHOLDER, Label, NavItem, NavLink, SearchConfig, SidebarSection, SiteMetadata,
    classify, validate_prefix,
};

use crate::diagnostics::{ConfigDiagnostics, ConfigWarning};

/// Validate the top navigation list.
pub(crate) fn validate_nav(items: &[NavItem], diags: &mut ConfigDiagnostics) {
    for (i, item) in items.iter().enumerate() {
        match item {
            NavItem::Link(link) => validate_nav_link(link, &format!("nav[{i}]"), diags),
            NavItem::Dropdown(dropdown) => {
                let field = format!("nav[{i}]");
                validate_label(&dropdown.label, &format!("{field}.label"), diags);
                if dropdown.items.is_empty() {
                    diags.error(
                        format!("{field}.items"),
                        format!(
                            "dropdown '{}' must contain at least one link",
                            dropdown.label.text()
                        ),
                    );
                }
                for (j, link) in dropdown.items.iter().enumerate() {
                    validate_nav_link(link, &format!("{field}.items[{j}]"), diags);
                }
            }
        }
    }
}

fn validate_nav_link(link: &NavLink, field: &str, diags: &mut ConfigDiagnostics) {
    validate_label(&link.label, &format!("{field}.label"), diags);
    validate_target(&link.target, &format!("{field}.link"), diags);
}

fn validate_label(label: &Label, field: &str, diags: &mut ConfigDiagnostics) {
    if let Label::Text(text) = label
        && text.trim().is_empty()
    {
        diags.error(field, "label cannot be empty");
    }
}

fn validate_target(target: &str, field: &str, diags: &mut ConfigDiagnostics) {
    if let Err(e) = classify(target) {
        diags.error(field, e.to_string());
    }
}

/// Validate sidebar declarations in the order they were made.
pub(crate) fn validate_sidebar(
    entries: &[(String, Vec<SidebarSection>)],
    diags: &mut ConfigDiagnostics,
) {
    let mut seen = HashSet::new();
    for (prefix, sections) in entries {
        let field = format!("sidebar.{prefix:?}");
        if let Err(e) = validate_prefix(prefix) {
            diags.error(&field, e.to_string());
        }
        if !seen.insert(prefix.as_str()) {
            diags.error(&field, format!("sidebar prefix {prefix:?} is declared more than once"));
        }
        for (i, section) in sections.iter().enumerate() {
            let section_field = format!("{field}[{i}]");
            if section.title.trim().is_empty() {
                diags.error(format!("{section_field}.title"), "section title cannot be empty");
            }
            for (j, leaf) in section.items.iter().enumerate() {
                let leaf_field = format!("{section_field}.items[{j}]");
                if leaf.label.trim().is_empty() {
                    diags.error(format!("{leaf_field}.label"), "label cannot be empty");
                }
                validate_target(&leaf.target, &format!("{leaf_field}.link"), diags);
            }
        }
    }
}

/// Validate site metadata.
pub(crate) fn validate_metadata(metadata: &SiteMetadata, diags: &mut ConfigDiagnostics) {
    if metadata.title.trim().is_empty() {
        diags.error("site.title", "site title cannot be empty");
    }
    if !metadata.base.starts_with('/') || !metadata.base.ends_with('/') {
        diags.error(
            "site.base",
            format!("base path {:?} must start and end with '/'", metadata.base),
        );
    }
    for (i, tag) in metadata.head.iter().enumerate() {
        if let Err(e) = tag.check() {
            diags.error(format!("site.head[{i}]"), e.to_string());
        }
    }
    for (i, social) in metadata.social_links.iter().enumerate() {
        let field = format!("site.social_links[{i}]");
        if social.icon.trim().is_empty() {
            diags.error(format!("{field}.icon"), "icon cannot be empty");
        }
        if !social.is_external() {
            diags.error(
                format!("{field}.link"),
                format!("social link {:?} must be an absolute URL", social.link),
            );
        }
    }
    if let Some(edit) = &metadata.edit_link {
        if !edit.pattern.contains(EDIT_PATH_PLACEHOLDER) {
            diags.error(
                "site.edit_link.pattern",
                format!("pattern must contain the {EDIT_PATH_PLACEHOLDER} placeholder"),
            );
        }
        validate_target(&edit.pattern, "site.edit_link.pattern", diags);
    }
}

/// Validate search settings, returning non-fatal findings.
pub(crate) fn validate_search(
    search: &SearchConfig,
    diags: &mut ConfigDiagnostics,
) -> Vec<ConfigWarning> {
    match search {
        SearchConfig::Local(local) => local
            .translations
            .unknown_keys()
            .map(|key| ConfigWarning::UnknownTranslation {
                key: key.to_owned(),
            })
            .collect(),
        SearchConfig::External(external) => {
            for (name, value) in [
                ("app_id", &external.app_id),
                ("api_key", &external.api_key),
                ("index_name", &external.index_name),
            ] {
                if value.trim().is_empty() {
                    diags.error(
                        format!("search.{name}"),
                        "required by the external search provider",
                    );
                }
            }
            Vec::new()
        }
    }
}
