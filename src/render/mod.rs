//! Data-driven page population.
//!
//! Maps `SiteData` sections onto target elements located by a fixed id
//! vocabulary. Population is one-way and idempotent: every rebuild clears
//! existing children first, and a missing target id silently skips that
//! field without touching anything else.
//!
//! - [`nav`]: brand title and navigation menu (every page)
//! - [`footer`]: footer brand, links, address, copyright (every page)
//! - [`home`], [`services`], [`contact`]: section population, home page only

mod contact;
mod footer;
mod home;
mod nav;
mod services;

use crate::core::PageId;
use crate::data::{Button, InfoCard, SiteData, SocialLink};
use crate::dom::{Document, Element};

/// Populate one document from the site data.
///
/// Navigation and footer render on every page. The home, services and
/// contact sections additionally render, in that fixed order, when the
/// document's page marker resolves to the home page.
pub fn render_page(doc: &mut Document, data: &SiteData, page: &PageId) {
    nav::populate(doc, data, page);
    footer::populate(doc, data, page);

    if page.is_home() {
        home::populate(doc, &data.home_page);
        services::populate(doc, &data.services_page);
        contact::populate(doc, data);
    }
}

// =============================================================================
// Population helpers
// =============================================================================

/// Set escaped text on the target id, skipping silently if absent.
fn set_text(doc: &mut Document, id: &str, text: &str) {
    if let Some(elem) = doc.element_by_id(id) {
        elem.set_text(text);
    }
}

/// Set trusted raw markup on the target id, skipping silently if absent.
fn set_raw(doc: &mut Document, id: &str, markup: &str) {
    if let Some(elem) = doc.element_by_id(id) {
        elem.set_raw(markup);
    }
}

/// Clear the target's children and refill it, skipping silently if absent.
fn rebuild(doc: &mut Document, id: &str, fill: impl FnOnce(&mut Element)) {
    if let Some(elem) = doc.element_by_id(id) {
        elem.clear_children();
        fill(elem);
    }
}

/// Rewrite in-page anchors for documents other than the home page.
///
/// Bare fragments only resolve within the home document, so `#services`
/// rendered on the contact page becomes `index.html#services`.
fn nav_href(href: &str, page: &PageId) -> String {
    if href.starts_with('#') && !page.is_home() {
        format!("index.html{href}")
    } else {
        href.to_string()
    }
}

/// `tel:` href from a display phone number, keeping only `+` and digits.
fn tel_href(phone: &str) -> String {
    let digits: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{digits}")
}

/// Join trusted lines with `<br>` for raw insertion.
fn join_br(lines: &[String]) -> String {
    lines.join("<br>")
}

fn button_anchor(button: &Button) -> Element {
    Element::new("a")
        .with_attr("href", button.href.as_str())
        .with_class(button.class())
        .with_text(button.label.as_str())
}

fn social_anchor(link: &SocialLink) -> Element {
    Element::new("a")
        .with_attr("href", link.url.as_str())
        .with_class("social-link")
        .with_attr("aria-label", link.platform.as_str())
        .with_text(link.icon.as_str())
}

/// Icon + heading + description card (about features, booking info).
fn info_card(card_class: &str, icon_class: &str, card: &InfoCard) -> Element {
    let mut div = Element::new("div").with_class(card_class);
    div.push_elem(
        Element::new("span")
            .with_class(icon_class)
            .with_text(card.icon.as_str()),
    );
    div.push_elem(Element::new("h3").with_text(card.title.as_str()));
    div.push_elem(Element::new("p").with_text(card.description.as_str()));
    div
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{NavItem, sample};
    use crate::dom::parse;

    const HOME_TEMPLATE: &str = r#"<!DOCTYPE html>
<html><body data-page="home">
  <span id="brand-title"></span>
  <ul id="nav-menu"></ul>
  <h1 id="hero-title">placeholder</h1>
  <p id="hero-subtitle"></p>
  <div id="hero-buttons"></div>
  <div id="about-text"></div>
  <div id="hours-table"></div>
  <p id="hours-note"></p>
  <div id="services-container"></div>
  <div id="booking-info"></div>
  <div id="footer-links"></div>
  <p id="footer-copyright"></p>
</body></html>"#;

    fn nav_item(href: &str, label: &str, page: Option<&str>) -> NavItem {
        NavItem {
            href: href.to_string(),
            label: label.to_string(),
            page: page.map(str::to_string),
            variant: None,
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        let data = sample();
        let mut once = parse(HOME_TEMPLATE);
        let mut twice = parse(HOME_TEMPLATE);

        render_page(&mut once, &data, &PageId::Home);
        render_page(&mut twice, &data, &PageId::Home);
        render_page(&mut twice, &data, &PageId::Home);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_anchor_rule_on_non_home_page() {
        let mut data = SiteData::default();
        data.navigation = vec![nav_item("#services", "Services", Some("services"))];
        let mut doc = parse("<body data-page=\"contact\"><ul id=\"nav-menu\"></ul></body>");

        render_page(&mut doc, &data, &PageId::Other("contact".into()));

        let menu = doc.find_by_id("nav-menu").unwrap();
        let crate::dom::Node::Element(li) = &menu.children[0] else {
            panic!("expected li");
        };
        let crate::dom::Node::Element(anchor) = &li.children[0] else {
            panic!("expected anchor");
        };
        assert_eq!(anchor.get_attr("href"), Some("index.html#services"));
        assert!(!anchor.get_attr("class").unwrap_or("").contains("active"));
    }

    #[test]
    fn test_anchor_passthrough_on_home() {
        let mut data = SiteData::default();
        data.navigation = vec![
            nav_item("#services", "Services", None),
            nav_item("contact.html", "Contact", None),
        ];
        let mut doc = parse("<body><ul id=\"nav-menu\"></ul></body>");

        render_page(&mut doc, &data, &PageId::Home);

        let html = crate::dom::serialize(&doc);
        assert!(html.contains("href=\"#services\""));
        assert!(html.contains("href=\"contact.html\""));
        assert!(!html.contains("index.html#"));
    }

    #[test]
    fn test_active_marker_only_on_current_page() {
        let mut data = SiteData::default();
        data.navigation = vec![
            nav_item("#home", "Home", Some("home")),
            nav_item("#services", "Services", Some("services")),
            nav_item("#about", "About", None),
        ];
        let mut doc = parse("<body><ul id=\"nav-menu\"></ul></body>");

        render_page(&mut doc, &data, &PageId::Other("services".into()));

        let menu = doc.find_by_id("nav-menu").unwrap();
        let active: Vec<bool> = menu
            .children
            .iter()
            .filter_map(|n| match n {
                crate::dom::Node::Element(li) => match &li.children[0] {
                    crate::dom::Node::Element(a) => {
                        Some(a.get_attr("class").unwrap_or("").contains("active"))
                    }
                    _ => None,
                },
                _ => None,
            })
            .collect();
        assert_eq!(active, vec![false, true, false]);
    }

    #[test]
    fn test_footer_excludes_button_items() {
        let data = sample();
        let mut doc = parse("<body><ul id=\"footer-links\"></ul></body>");

        render_page(&mut doc, &data, &PageId::Home);

        let links = doc.find_by_id("footer-links").unwrap();
        let expected = data.navigation.iter().filter(|i| !i.is_button()).count();
        assert_eq!(links.children.len(), expected);
        assert!(!crate::dom::serialize_element(links).contains("Book Now"));
    }

    #[test]
    fn test_missing_targets_are_skipped() {
        let data = sample();
        let mut doc = parse("<body data-page=\"home\"><h1 id=\"hero-title\">x</h1></body>");

        render_page(&mut doc, &data, &PageId::Home);

        assert_eq!(
            doc.find_by_id("hero-title").unwrap().text_content(),
            data.home_page.hero.title
        );
    }

    #[test]
    fn test_non_home_page_keeps_section_placeholders() {
        let data = sample();
        let mut doc = parse(
            "<body data-page=\"services\"><ul id=\"nav-menu\"></ul><h1 id=\"hero-title\">placeholder</h1></body>",
        );

        render_page(&mut doc, &data, &PageId::Other("services".into()));

        assert!(!doc.find_by_id("nav-menu").unwrap().children.is_empty());
        assert_eq!(
            doc.find_by_id("hero-title").unwrap().text_content(),
            "placeholder"
        );
    }

    #[test]
    fn test_tel_href_strips_formatting() {
        assert_eq!(tel_href("+66 53 123 456"), "tel:+6653123456");
        assert_eq!(tel_href("(053) 123-456"), "tel:053123456");
    }

    #[test]
    fn test_join_br() {
        let lines = vec!["42 Charoen Road".to_string(), "Chiang Mai".to_string()];
        assert_eq!(join_br(&lines), "42 Charoen Road<br>Chiang Mai");
    }
}
