#![forbid(unsafe_code)]

//! Read-only content for the Casa do Brasil site.
//!
//! Everything the pages display comes from JSON documents embedded at
//! compile time: one translation bundle per language, the menu catalog and
//! the site configuration (links, images, stats). [`ContentStore::global`]
//! parses them once on first access; nothing is ever mutated afterwards.

pub mod error;
pub mod icon;
pub mod menu;
pub mod site;
pub mod store;

pub use error::ContentError;
pub use icon::{Icon, IconContext};
pub use menu::{
    CategoryBody, MenuCatalog, MenuCategory, MenuItem, MenuSubSection, PriceLabel, SectionLayout,
};
pub use site::{
    AboutConfig, FooterConfig, HeroConfig, NavKey, NavLink, SiteConfig, SocialLink, StatConfig,
};
pub use store::ContentStore;
