//! Contact section population: hero, info blocks, map, booking cards.

use crate::data::SiteData;
use crate::dom::{Document, Element};

use super::{info_card, join_br, rebuild, set_raw, set_text, social_anchor, tel_href};

pub fn populate(doc: &mut Document, data: &SiteData) {
    let page = &data.contact_page;
    let brand = &data.brand;

    set_text(doc, "contact-title", &page.hero.title);
    set_text(doc, "contact-subtitle", &page.hero.subtitle);

    set_text(doc, "contact-address-title", &page.address.title);
    set_text(doc, "contact-phone-title", &page.phone.title);
    set_text(doc, "contact-hours-title", &page.hours.title);
    set_text(doc, "contact-social-title", &page.social.title);

    // Address and phone come from the brand; the contact blocks only
    // contribute their headings.
    set_raw(doc, "contact-address", &join_br(&brand.address));
    rebuild(doc, "contact-phone", |phone| {
        phone.push_elem(
            Element::new("a")
                .with_attr("href", tel_href(&brand.phone))
                .with_text(brand.phone.as_str()),
        );
    });
    set_raw(doc, "contact-hours", &join_br(&page.hours.lines));
    rebuild(doc, "contact-social", |social| {
        for link in &brand.social {
            social.push_elem(social_anchor(link));
        }
    });

    set_raw(doc, "map-label", &page.map.label);
    set_text(doc, "map-note", &page.map.note);

    rebuild(doc, "booking-info", |booking| {
        for card in &page.booking {
            booking.push_elem(info_card("info-card", "info-icon", card));
        }
    });
}
