//! Site check command.
//!
//! Validates the data document and page templates without writing any
//! output:
//! - the data document must load (readable, valid JSON)
//! - external links must be well-formed http(s) URLs
//! - relative page links must point at an existing template
//! - navigation `page` markers must match a template
//! - element ids may appear at most once per template

mod report;

use std::path::Path;

use anyhow::{Result, bail};
use rustc_hash::FxHashSet;
use url::Url;

use crate::{
    cli::CheckArgs,
    config::SiteConfig,
    core::PageId,
    data::{self, Button, SiteData},
    dom, log,
    utils::{fs::collect_files, plural_count, plural_s},
};

use report::CheckReport;

/// Check site data and templates.
///
/// Errors exit non-zero unless `--warn-only` is set.
pub fn check_site(config: &SiteConfig, args: &CheckArgs) -> Result<()> {
    let mut report = CheckReport::default();

    let templates = collect_files(&config.build.pages, Some("html"));
    log!(
        "check";
        "checking {} and {}",
        plural_count(templates.len(), "template"),
        config.root_relative(&config.build.data).display()
    );

    let markers = scan_templates(&templates, config, &mut report);

    let data_source = config.root_relative(&config.build.data).display().to_string();
    match data::load(&config.build.data) {
        Ok(data) => check_data(&data, &markers, &config.build.pages, &data_source, &mut report),
        Err(e) => report.add_data(&data_source, String::new(), format!("{e:#}")),
    }

    report.print();

    if report.is_empty() {
        log!("check"; "{}", report);
        return Ok(());
    }

    let errors = report.error_count();
    if args.warn_only {
        log!("check"; "found {} (warn-only)", plural_count(errors, "error"));
        return Ok(());
    }

    bail!("found {} error{}", errors, plural_s(errors))
}

/// Parse each template, record duplicate ids and collect page markers.
fn scan_templates(
    templates: &[std::path::PathBuf],
    config: &SiteConfig,
    report: &mut CheckReport,
) -> FxHashSet<String> {
    let mut markers = FxHashSet::default();

    for path in templates {
        let source = config.root_relative(path).display().to_string();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                report.add_template(&source, String::new(), format!("unreadable: {e}"));
                continue;
            }
        };

        let doc = dom::parse(&content);
        markers.insert(PageId::from_marker(doc.page_marker()).name().to_string());

        for id in doc.duplicate_ids() {
            report.add_template(
                &source,
                format!("`#{id}`"),
                "id appears more than once".to_string(),
            );
        }
    }

    markers
}

/// Check every link-bearing field of the data document.
fn check_data(
    data: &SiteData,
    markers: &FxHashSet<String>,
    pages_dir: &Path,
    source: &str,
    report: &mut CheckReport,
) {
    for (i, item) in data.navigation.iter().enumerate() {
        if let Some(reason) = check_link(&item.href, pages_dir) {
            report.add_data(source, format!("`navigation[{i}].href`"), reason);
        }
        if let Some(page) = &item.page
            && !markers.contains(page)
        {
            report.add_data(
                source,
                format!("`navigation[{i}].page`"),
                format!("no template carries data-page=\"{page}\""),
            );
        }
    }

    for (i, social) in data.brand.social.iter().enumerate() {
        if let Some(reason) = check_external_url(&social.url) {
            report.add_data(source, format!("`brand.social[{i}].url`"), reason);
        }
    }

    check_buttons(&data.home_page.hero.buttons, "homePage.hero.buttons", pages_dir, source, report);
    check_buttons(
        &data.services_page.cta.buttons,
        "servicesPage.cta.buttons",
        pages_dir,
        source,
        report,
    );
}

fn check_buttons(
    buttons: &[Button],
    field: &str,
    pages_dir: &Path,
    source: &str,
    report: &mut CheckReport,
) {
    for (i, button) in buttons.iter().enumerate() {
        if let Some(reason) = check_link(&button.href, pages_dir) {
            report.add_data(source, format!("`{field}[{i}].href`"), reason);
        }
    }
}

/// Check one link value. Returns a reason string when invalid.
///
/// - fragments (`#id`) pass when non-empty
/// - external links must be well-formed http(s) URLs
/// - `tel:`/`mailto:` pass as-is
/// - anything else is a page link relative to the pages directory
fn check_link(href: &str, pages_dir: &Path) -> Option<String> {
    if href.is_empty() {
        return Some("empty link".to_string());
    }
    if let Some(fragment) = href.strip_prefix('#') {
        return fragment.is_empty().then(|| "empty fragment".to_string());
    }
    if href.starts_with("tel:") || href.starts_with("mailto:") {
        return None;
    }
    if href.contains("://") {
        return check_external_url(href);
    }

    // Relative page link, possibly with a fragment: `index.html#about`
    let path = href.split('#').next().unwrap_or(href);
    if path.is_empty() || pages_dir.join(path).is_file() {
        None
    } else {
        Some(format!("template `{path}` not found"))
    }
}

/// External links must parse as absolute http(s) URLs.
fn check_external_url(href: &str) -> Option<String> {
    match Url::parse(href) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => None,
        Ok(url) => Some(format!("unsupported scheme `{}`", url.scheme())),
        Err(url::ParseError::RelativeUrlWithoutBase) => Some("not an absolute URL".to_string()),
        Err(e) => Some(format!("invalid URL: {e}")),
    }
}
