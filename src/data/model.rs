//! SiteData model: the root record and its nested sections.
//!
//! All fields deserialize with `camelCase` names and fall back to empty
//! defaults when absent.
//! The data source is trusted first-party content; no schema validation is
//! performed. A missing field yields an empty default that renders partially
//! instead of failing the whole build.

use serde::{Deserialize, Serialize};

/// Root data record driving all page population.
///
/// Loaded once per build, immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteData {
    pub brand: Brand,
    pub navigation: Vec<NavItem>,
    pub home_page: HomePage,
    pub services_page: ServicesPage,
    pub contact_page: ContactPage,
}

/// Brand identity: name, contact details and social profiles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Brand {
    pub name: String,
    pub description: String,
    /// Address lines, rendered in source order joined with `<br>`.
    pub address: Vec<String>,
    pub phone: String,
    pub year: String,
    pub social: Vec<SocialLink>,
}

/// One social profile entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    pub icon: String,
}

/// One entry in the site navigation list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavItem {
    pub href: String,
    pub label: String,
    /// Page id this item marks "current" on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    /// `"button"` renders as a call-to-action and is excluded from the footer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

impl NavItem {
    /// Whether this item carries the button (call-to-action) variant.
    pub fn is_button(&self) -> bool {
        self.variant.as_deref() == Some("button")
    }
}

/// A labelled link button (hero and call-to-action sections).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Button {
    pub label: String,
    pub href: String,
    /// Class suffix; `primary` when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

impl Button {
    /// CSS class for this button, e.g. `btn btn-primary`.
    pub fn class(&self) -> String {
        format!("btn btn-{}", self.variant.as_deref().unwrap_or("primary"))
    }
}

/// Hero block shared by all pages. Services and contact heroes only
/// carry title/subtitle; the unused fields default to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub buttons: Vec<Button>,
}

/// Icon + title + description triple (about features, booking info).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InfoCard {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// Home page content blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HomePage {
    pub hero: Hero,
    pub about: About,
    pub hours: Hours,
}

/// About section: title, paragraphs and feature cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct About {
    pub title: String,
    pub paragraphs: Vec<String>,
    pub features: Vec<InfoCard>,
}

/// Opening hours table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Hours {
    pub title: String,
    pub schedule: Vec<ScheduleRow>,
    /// Raw markup note under the table (trusted content).
    pub note: String,
}

/// One row of the hours table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScheduleRow {
    pub day: String,
    pub time: String,
}

/// One offered service, rendered as a card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Service {
    pub name: String,
    pub emoji: String,
    pub description: String,
    pub duration: String,
    pub price: String,
    /// Short feature tags, rendered in source order.
    pub features: Vec<String>,
}

/// Services page content blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServicesPage {
    pub hero: Hero,
    pub services: Vec<Service>,
    pub cta: CallToAction,
}

/// Call-to-action block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CallToAction {
    pub title: String,
    pub description: String,
    pub buttons: Vec<Button>,
}

/// Contact page content blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactPage {
    pub hero: Hero,
    pub address: TitledBlock,
    pub phone: TitledBlock,
    pub hours: ContactHours,
    pub social: TitledBlock,
    pub map: MapInfo,
    pub booking: Vec<InfoCard>,
}

/// A contact block that only carries a heading; the body comes from brand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TitledBlock {
    pub title: String,
}

/// Contact hours block: heading plus its own display lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactHours {
    pub title: String,
    /// Raw markup lines joined with `<br>` (trusted content).
    pub lines: Vec<String>,
}

/// Map placeholder: label may carry simple markup, note is plain text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapInfo {
    pub label: String,
    pub note: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_fields() {
        let json = r#"{
            "brand": {"name": "Spa", "year": "2025"},
            "homePage": {"hero": {"title": "Welcome"}},
            "servicesPage": {"services": [{"name": "Thai Massage", "emoji": "🙏"}]}
        }"#;
        let data: SiteData = serde_json::from_str(json).unwrap();

        assert_eq!(data.brand.name, "Spa");
        assert_eq!(data.home_page.hero.title, "Welcome");
        assert_eq!(data.services_page.services[0].name, "Thai Massage");
    }

    #[test]
    fn test_missing_fields_default_empty() {
        let data: SiteData = serde_json::from_str("{}").unwrap();

        assert!(data.brand.name.is_empty());
        assert!(data.navigation.is_empty());
        assert!(data.home_page.about.paragraphs.is_empty());
        assert!(data.contact_page.booking.is_empty());
    }

    #[test]
    fn test_nav_item_button_variant() {
        let item: NavItem =
            serde_json::from_str(r##"{"href": "#book", "label": "Book", "variant": "button"}"##)
                .unwrap();
        assert!(item.is_button());

        let plain: NavItem =
            serde_json::from_str(r##"{"href": "#about", "label": "About"}"##).unwrap();
        assert!(!plain.is_button());
    }

    #[test]
    fn test_button_class() {
        let primary = Button {
            label: "Book".into(),
            href: "#book".into(),
            variant: None,
        };
        assert_eq!(primary.class(), "btn btn-primary");

        let secondary = Button {
            variant: Some("secondary".into()),
            ..primary
        };
        assert_eq!(secondary.class(), "btn btn-secondary");
    }
}
