//! Navigation population: brand title plus the nav menu list.

use crate::core::PageId;
use crate::data::SiteData;
use crate::dom::{Document, Element};

use super::{nav_href, rebuild, set_text};

pub fn populate(doc: &mut Document, data: &SiteData, page: &PageId) {
    set_text(doc, "brand-title", &data.brand.name);

    rebuild(doc, "nav-menu", |menu| {
        for item in &data.navigation {
            let mut class = String::from("nav-link");
            if item.is_button() {
                class.push_str(" nav-cta");
            }
            if item.page.as_deref() == Some(page.name()) {
                class.push_str(" active");
            }

            let mut li = Element::new("li");
            li.push_elem(
                Element::new("a")
                    .with_attr("href", nav_href(&item.href, page))
                    .with_class(class)
                    .with_text(item.label.as_str()),
            );
            menu.push_elem(li);
        }
    });
}
