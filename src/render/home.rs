//! Home section population: hero, about, opening hours.

use crate::data::HomePage;
use crate::dom::{Document, Element};

use super::{button_anchor, info_card, rebuild, set_raw, set_text};

pub fn populate(doc: &mut Document, home: &HomePage) {
    let hero = &home.hero;
    set_text(doc, "hero-title", &hero.title);
    set_text(doc, "hero-subtitle", &hero.subtitle);
    set_text(doc, "hero-description", &hero.description);
    rebuild(doc, "hero-buttons", |buttons| {
        for button in &hero.buttons {
            buttons.push_elem(button_anchor(button));
        }
    });

    let about = &home.about;
    set_text(doc, "about-title", &about.title);
    rebuild(doc, "about-text", |text| {
        for paragraph in &about.paragraphs {
            text.push_elem(Element::new("p").with_text(paragraph.as_str()));
        }
    });
    rebuild(doc, "about-features", |features| {
        for feature in &about.features {
            features.push_elem(info_card("feature", "feature-icon", feature));
        }
    });

    let hours = &home.hours;
    set_text(doc, "hours-title", &hours.title);
    rebuild(doc, "hours-table", |table| {
        for row in &hours.schedule {
            let mut div = Element::new("div").with_class("hours-row");
            div.push_elem(Element::new("span").with_class("day").with_text(row.day.as_str()));
            div.push_elem(
                Element::new("span")
                    .with_class("time")
                    .with_text(row.time.as_str()),
            );
            table.push_elem(div);
        }
    });
    set_raw(doc, "hours-note", &hours.note);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample;
    use crate::dom::{parse, serialize_element};

    const HOME: &str = "<body>\
        <h1 id=\"hero-title\"></h1>\
        <div id=\"hero-buttons\"></div>\
        <div id=\"about-text\"></div>\
        <div id=\"about-features\"></div>\
        <div id=\"hours-table\"></div>\
        <p id=\"hours-note\"></p>\
        </body>";

    #[test]
    fn test_hero_buttons_carry_variant_classes() {
        let data = sample();
        let mut doc = parse(HOME);

        populate(&mut doc, &data.home_page);

        let html = serialize_element(doc.find_by_id("hero-buttons").unwrap());
        assert!(html.contains("class=\"btn btn-primary\""));
        assert!(html.contains("class=\"btn btn-secondary\""));
    }

    #[test]
    fn test_one_paragraph_element_per_entry() {
        let data = sample();
        let mut doc = parse(HOME);

        populate(&mut doc, &data.home_page);

        let text = doc.find_by_id("about-text").unwrap();
        assert_eq!(text.children.len(), data.home_page.about.paragraphs.len());
    }

    #[test]
    fn test_hours_rows_in_schedule_order() {
        let data = sample();
        let mut doc = parse(HOME);

        populate(&mut doc, &data.home_page);

        let table = doc.find_by_id("hours-table").unwrap();
        assert_eq!(table.children.len(), data.home_page.hours.schedule.len());
        let html = serialize_element(table);
        let monday = html.find("Monday").unwrap();
        let sunday = html.find("Sunday").unwrap();
        assert!(monday < sunday);
    }

    #[test]
    fn test_hours_note_inserted_raw() {
        let data = sample();
        let mut doc = parse(HOME);

        populate(&mut doc, &data.home_page);

        let html = serialize_element(doc.find_by_id("hours-note").unwrap());
        assert!(html.contains("<strong>"));
        assert!(!html.contains("&lt;strong&gt;"));
    }
}
