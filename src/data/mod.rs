//! Site data: the JSON document that drives all page population.
//!
//! - [`model`]: serde types for the SiteData shape
//! - [`load`]: single-read loader (fatal on missing/invalid JSON)
//! - [`sample`]: compiled-in reference content (used by `init` and tests)

pub mod load;
pub mod model;
pub mod sample;

pub use load::load;
pub use model::{
    Button, HomePage, InfoCard, NavItem, Service, ServicesPage, SiteData, SocialLink,
};
pub use sample::{SAMPLE_JSON, sample};
