//! Built-in page layout.
//!
//! Produces the full HTML shell around already-rendered page content: head,
//! nav bar, sidebar, content area and footer. Named slots are placed at fixed
//! points so derived themes can add content without touching this layout.

use std::fmt::Write;

use docsite_nav::{NavItem, NavLink, SidebarSection, escape_html, normalize_path};

use crate::layout::{BaseLayout, RenderScope};
use crate::page::{PageContext, PageLayout};

/// Very top of `<body>`.
pub const SLOT_LAYOUT_TOP: &str = "layout-top";
/// Very bottom of `<body>`.
pub const SLOT_LAYOUT_BOTTOM: &str = "layout-bottom";
/// Before the site title in the nav bar.
pub const SLOT_NAV_BAR_TITLE_BEFORE: &str = "nav-bar-title-before";
/// After the site title in the nav bar.
pub const SLOT_NAV_BAR_TITLE_AFTER: &str = "nav-bar-title-after";
/// Top of the sidebar.
pub const SLOT_SIDEBAR_NAV_BEFORE: &str = "sidebar-nav-before";
/// Bottom of the sidebar.
pub const SLOT_SIDEBAR_NAV_AFTER: &str = "sidebar-nav-after";
/// Before doc page content.
pub const SLOT_DOC_BEFORE: &str = "doc-before";
/// After doc page content.
pub const SLOT_DOC_AFTER: &str = "doc-after";
/// Before the home page hero.
pub const SLOT_HOME_HERO_BEFORE: &str = "home-hero-before";
/// After the home page hero.
pub const SLOT_HOME_HERO_AFTER: &str = "home-hero-after";
/// After the home page content.
pub const SLOT_HOME_FEATURES_AFTER: &str = "home-features-after";
/// Before the footer.
pub const SLOT_FOOTER_BEFORE: &str = "footer-before";

const DEFAULT_SLOTS: &[&str] = &[
    SLOT_LAYOUT_TOP,
    SLOT_LAYOUT_BOTTOM,
    SLOT_NAV_BAR_TITLE_BEFORE,
    SLOT_NAV_BAR_TITLE_AFTER,
    SLOT_SIDEBAR_NAV_BEFORE,
    SLOT_SIDEBAR_NAV_AFTER,
    SLOT_DOC_BEFORE,
    SLOT_DOC_AFTER,
    SLOT_HOME_HERO_BEFORE,
    SLOT_HOME_HERO_AFTER,
    SLOT_HOME_FEATURES_AFTER,
    SLOT_FOOTER_BEFORE,
];

/// The built-in layout.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultLayout;

impl BaseLayout for DefaultLayout {
    fn name(&self) -> &str {
        "default"
    }

    fn slots(&self) -> &[&'static str] {
        DEFAULT_SLOTS
    }

    fn render(&self, page: &PageContext<'_>, scope: &RenderScope<'_>) -> String {
        let mut html = String::with_capacity(8192);

        render_head(&mut html, page);
        html.push_str("<body>\n<div class=\"layout\">\n");
        html.push_str(&scope.slot(SLOT_LAYOUT_TOP, page));

        render_nav_bar(&mut html, page, scope);

        match page.layout {
            PageLayout::Doc => render_doc(&mut html, page, scope),
            PageLayout::Home => render_home(&mut html, page, scope),
        }

        html.push_str(&scope.slot(SLOT_FOOTER_BEFORE, page));
        render_footer(&mut html, page);

        html.push_str(&scope.slot(SLOT_LAYOUT_BOTTOM, page));
        html.push_str("</div>\n</body>\n</html>");
        html
    }
}

fn render_head(html: &mut String, page: &PageContext<'_>) {
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape_html(&page.document_title()));
    if !page.metadata.description.is_empty() {
        let _ = writeln!(
            html,
            "<meta name=\"description\" content=\"{}\">",
            escape_html(&page.metadata.description)
        );
    }
    html.push_str(&page.metadata.head_html());
    html.push_str("</head>\n");
}

fn render_nav_bar(html: &mut String, page: &PageContext<'_>, scope: &RenderScope<'_>) {
    html.push_str("<header class=\"nav-bar\">\n");
    html.push_str(&scope.slot(SLOT_NAV_BAR_TITLE_BEFORE, page));
    let _ = writeln!(
        html,
        "<a class=\"title\" href=\"{}\">{}</a>",
        escape_html(&page.metadata.url_for("/")),
        escape_html(&page.metadata.title)
    );
    html.push_str(&scope.slot(SLOT_NAV_BAR_TITLE_AFTER, page));

    let _ = writeln!(
        html,
        "<button type=\"button\" class=\"search\" aria-label=\"{}\">{}</button>",
        escape_html(page.search.text("button.buttonAriaLabel")),
        escape_html(page.search.text("button.buttonText"))
    );

    if !page.nav.is_empty() {
        html.push_str("<nav class=\"nav-menu\">\n<ul>\n");
        for item in page.nav {
            render_nav_item(html, page, item);
        }
        html.push_str("</ul>\n</nav>\n");
    }

    if !page.metadata.social_links.is_empty() {
        html.push_str("<div class=\"social-links\">\n");
        for social in &page.metadata.social_links {
            let _ = writeln!(
                html,
                "<a class=\"social\" href=\"{}\" aria-label=\"{icon}\" target=\"_blank\" \
                 rel=\"noreferrer\">{icon}</a>",
                escape_html(&social.link),
                icon = escape_html(&social.icon),
            );
        }
        html.push_str("</div>\n");
    }

    html.push_str("</header>\n");
}

fn render_nav_item(html: &mut String, page: &PageContext<'_>, item: &NavItem) {
    let active = if item.is_active(page.path) {
        " class=\"active\""
    } else {
        ""
    };
    match item {
        NavItem::Link(link) => {
            let _ = write!(html, "<li{active}>");
            render_nav_link(html, page, link);
            html.push_str("</li>\n");
        }
        NavItem::Dropdown(dropdown) => {
            let _ = writeln!(
                html,
                "<li class=\"dropdown{}\">\n<button type=\"button\">{}</button>\n<ul>",
                if active.is_empty() { "" } else { " active" },
                escape_html(dropdown.label.text())
            );
            for link in &dropdown.items {
                html.push_str("<li>");
                render_nav_link(html, page, link);
                html.push_str("</li>\n");
            }
            html.push_str("</ul>\n</li>\n");
        }
    }
}

fn render_nav_link(html: &mut String, page: &PageContext<'_>, link: &NavLink) {
    let external = if link.is_external() {
        " target=\"_blank\" rel=\"noreferrer\""
    } else {
        ""
    };
    let _ = write!(
        html,
        "<a href=\"{}\"{external}>{}</a>",
        escape_html(&page.metadata.url_for(&link.target)),
        escape_html(link.label.text())
    );
}

fn render_sidebar(html: &mut String, page: &PageContext<'_>, scope: &RenderScope<'_>) {
    html.push_str("<aside class=\"sidebar\">\n");
    html.push_str(&scope.slot(SLOT_SIDEBAR_NAV_BEFORE, page));
    html.push_str("<nav>\n");
    for section in page.sidebar {
        render_sidebar_section(html, page, section);
    }
    html.push_str("</nav>\n");
    html.push_str(&scope.slot(SLOT_SIDEBAR_NAV_AFTER, page));
    html.push_str("</aside>\n");
}

fn render_sidebar_section(html: &mut String, page: &PageContext<'_>, section: &SidebarSection) {
    let open = if section.collapsed { "" } else { " open" };
    let _ = writeln!(
        html,
        "<details class=\"sidebar-section\"{open}>\n<summary>{}</summary>\n<ul>",
        escape_html(&section.title)
    );
    for leaf in &section.items {
        let active = if normalize_path(&leaf.target) == normalize_path(page.path) {
            " class=\"active\""
        } else {
            ""
        };
        let _ = writeln!(
            html,
            "<li><a href=\"{}\"{active}>{}</a></li>",
            escape_html(&page.metadata.url_for(&leaf.target)),
            escape_html(&leaf.label)
        );
    }
    html.push_str("</ul>\n</details>\n");
}

fn render_doc(html: &mut String, page: &PageContext<'_>, scope: &RenderScope<'_>) {
    if !page.sidebar.is_empty() {
        render_sidebar(html, page, scope);
    }

    html.push_str("<main class=\"doc\">\n");
    html.push_str(&scope.slot(SLOT_DOC_BEFORE, page));
    html.push_str("<article class=\"content\">\n");
    html.push_str(page.content);
    html.push_str("\n</article>\n");

    let edit_url = page
        .source_path
        .and_then(|source| page.metadata.edit_url(source));
    let last_updated = page.last_updated.filter(|_| page.metadata.last_updated);
    if edit_url.is_some() || last_updated.is_some() {
        html.push_str("<div class=\"doc-footer\">\n");
        if let (Some(url), Some(edit)) = (edit_url, &page.metadata.edit_link) {
            let _ = writeln!(
                html,
                "<a class=\"edit-link\" href=\"{}\">{}</a>",
                escape_html(&url),
                escape_html(&edit.text)
            );
        }
        if let Some(updated) = last_updated {
            let _ = writeln!(
                html,
                "<p class=\"last-updated\">Last updated: {}</p>",
                escape_html(updated)
            );
        }
        html.push_str("</div>\n");
    }

    html.push_str(&scope.slot(SLOT_DOC_AFTER, page));
    html.push_str("</main>\n");
}

fn render_home(html: &mut String, page: &PageContext<'_>, scope: &RenderScope<'_>) {
    html.push_str("<main class=\"home\">\n");
    html.push_str(&scope.slot(SLOT_HOME_HERO_BEFORE, page));
    html.push_str("<section class=\"hero\">\n");
    let _ = writeln!(html, "<h1>{}</h1>", escape_html(&page.metadata.title));
    if !page.metadata.description.is_empty() {
        let _ = writeln!(
            html,
            "<p class=\"tagline\">{}</p>",
            escape_html(&page.metadata.description)
        );
    }
    html.push_str("</section>\n");
    html.push_str(&scope.slot(SLOT_HOME_HERO_AFTER, page));
    html.push_str("<div class=\"content\">\n");
    html.push_str(page.content);
    html.push_str("\n</div>\n");
    html.push_str(&scope.slot(SLOT_HOME_FEATURES_AFTER, page));
    html.push_str("</main>\n");
}

fn render_footer(html: &mut String, page: &PageContext<'_>) {
    let Some(footer) = &page.metadata.footer else {
        return;
    };
    html.push_str("<footer class=\"footer\">\n");
    if let Some(message) = &footer.message {
        let _ = writeln!(html, "<p class=\"message\">{message}</p>");
    }
    if let Some(copyright) = &footer.copyright {
        let _ = writeln!(html, "<p class=\"copyright\">{copyright}</p>");
    }
    html.push_str("</footer>\n");
}
