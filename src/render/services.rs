//! Services section population: hero, service cards, call-to-action.

use crate::data::{Service, ServicesPage};
use crate::dom::{Document, Element};

use super::{button_anchor, rebuild, set_text};

pub fn populate(doc: &mut Document, page: &ServicesPage) {
    set_text(doc, "services-title", &page.hero.title);
    set_text(doc, "services-subtitle", &page.hero.subtitle);

    rebuild(doc, "services-container", |container| {
        for service in &page.services {
            container.push_elem(service_card(service));
        }
    });

    set_text(doc, "cta-title", &page.cta.title);
    set_text(doc, "cta-description", &page.cta.description);
    rebuild(doc, "cta-buttons", |buttons| {
        for button in &page.cta.buttons {
            buttons.push_elem(button_anchor(button));
        }
    });
}

fn service_card(service: &Service) -> Element {
    let mut card = Element::new("div").with_class("service-card");

    let mut image = Element::new("div").with_class("service-image");
    image.push_elem(
        Element::new("div")
            .with_class("service-placeholder")
            .with_text(format!("{} {}", service.emoji, service.name)),
    );
    card.push_elem(image);

    let mut content = Element::new("div").with_class("service-content");
    content.push_elem(Element::new("h3").with_text(service.name.as_str()));
    content.push_elem(
        Element::new("p")
            .with_class("service-description")
            .with_text(service.description.as_str()),
    );

    let mut details = Element::new("div").with_class("service-details");
    details.push_elem(detail_row("service-duration", "Duration:", &service.duration));
    details.push_elem(detail_row("service-price", "Price:", &service.price));
    content.push_elem(details);

    let mut features = Element::new("div").with_class("service-features");
    for feature in &service.features {
        features.push_elem(
            Element::new("span")
                .with_class("feature-tag")
                .with_text(feature.as_str()),
        );
    }
    content.push_elem(features);

    card.push_elem(content);
    card
}

fn detail_row(class: &str, label: &str, value: &str) -> Element {
    let mut row = Element::new("div").with_class(class);
    row.push_elem(Element::new("span").with_class("label").with_text(label));
    row.push_elem(Element::new("span").with_class("value").with_text(value));
    row
}
