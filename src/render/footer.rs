//! Footer population: brand block, link list, contact details, copyright.

use crate::core::PageId;
use crate::data::SiteData;
use crate::dom::{Document, Element};

use super::{join_br, nav_href, rebuild, set_raw, set_text, social_anchor, tel_href};

pub fn populate(doc: &mut Document, data: &SiteData, page: &PageId) {
    let brand = &data.brand;

    set_text(doc, "footer-brand", &brand.name);
    set_text(doc, "footer-description", &brand.description);

    rebuild(doc, "footer-social", |social| {
        for link in &brand.social {
            social.push_elem(social_anchor(link));
        }
    });

    // Button-variant items are call-to-action chrome, not footer links.
    rebuild(doc, "footer-links", |links| {
        for item in data.navigation.iter().filter(|i| !i.is_button()) {
            let mut li = Element::new("li");
            li.push_elem(
                Element::new("a")
                    .with_attr("href", nav_href(&item.href, page))
                    .with_text(item.label.as_str()),
            );
            links.push_elem(li);
        }
    });

    set_raw(doc, "footer-address", &join_br(&brand.address));

    rebuild(doc, "footer-phone", |phone| {
        phone.push_elem(
            Element::new("a")
                .with_attr("href", tel_href(&brand.phone))
                .with_text(brand.phone.as_str()),
        );
    });

    set_text(
        doc,
        "footer-copyright",
        &format!("© {} {}. All rights reserved.", brand.year, brand.name),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample;
    use crate::dom::{parse, serialize_element};

    const FOOTER: &str = "<body>\
        <h3 id=\"footer-brand\"></h3>\
        <div id=\"footer-social\"></div>\
        <p id=\"footer-address\"></p>\
        <p id=\"footer-phone\"></p>\
        <p id=\"footer-copyright\"></p>\
        </body>";

    #[test]
    fn test_address_lines_joined_with_br() {
        let data = sample();
        let mut doc = parse(FOOTER);

        populate(&mut doc, &data, &PageId::Home);

        let html = serialize_element(doc.find_by_id("footer-address").unwrap());
        assert_eq!(html.matches("<br>").count(), data.brand.address.len() - 1);
        assert!(html.contains(&data.brand.address[0]));
    }

    #[test]
    fn test_phone_rendered_as_tel_link() {
        let data = sample();
        let mut doc = parse(FOOTER);

        populate(&mut doc, &data, &PageId::Home);

        let html = serialize_element(doc.find_by_id("footer-phone").unwrap());
        assert!(html.contains("href=\"tel:+6653123456\""));
        assert!(html.contains(&data.brand.phone));
    }

    #[test]
    fn test_copyright_interpolates_year_and_name() {
        let data = sample();
        let mut doc = parse(FOOTER);

        populate(&mut doc, &data, &PageId::Home);

        let text = doc.find_by_id("footer-copyright").unwrap().text_content();
        assert!(text.contains(&data.brand.year));
        assert!(text.contains(&data.brand.name));
    }

    #[test]
    fn test_social_links_carry_platform_label() {
        let data = sample();
        let mut doc = parse(FOOTER);

        populate(&mut doc, &data, &PageId::Home);

        let social = doc.find_by_id("footer-social").unwrap();
        assert_eq!(social.children.len(), data.brand.social.len());
        let html = serialize_element(social);
        assert!(html.contains("aria-label=\"Facebook\""));
    }
}
