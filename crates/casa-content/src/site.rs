#![forbid(unsafe_code)]

//! Language-independent site configuration: links, images and stats.

use serde::Deserialize;

use crate::error::ContentError;
use crate::icon::{Icon, IconContext};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Deployment prefix for routes and public assets.
    pub base_path: String,
    pub booking_url: String,
    /// Display phone number; the `tel:` URI is derived from it.
    pub phone: String,
    pub email: String,
    pub hero: HeroConfig,
    pub about: AboutConfig,
    pub footer: FooterConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroConfig {
    pub background_text: String,
    pub image: String,
    pub brand_name: String,
    pub logo: String,
    pub nav_links: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutConfig {
    pub portfolio_images: Vec<String>,
    pub stats: Vec<StatConfig>,
}

/// One counter in the about-section stats block.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatConfig {
    pub value: u64,
    #[serde(default)]
    pub suffix: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterConfig {
    pub logo_text: String,
    pub nav_links: Vec<NavLink>,
    pub social_links: Vec<SocialLink>,
}

/// Navigation entries; labels come from the translation bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavKey {
    About,
    Menu,
    Reservations,
    Contact,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NavLink {
    pub key: NavKey,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub icon_name: String,
    pub label: String,
    pub href: String,
}

impl SocialLink {
    #[must_use]
    pub fn icon(&self) -> Icon {
        Icon::lookup(&self.icon_name, IconContext::Social)
    }
}

impl SiteConfig {
    pub fn from_json(text: &str) -> Result<Self, ContentError> {
        serde_json::from_str(text).map_err(|e| ContentError::Parse {
            document: "site.json",
            message: e.to_string(),
        })
    }

    /// `tel:` URI for the phone number, whitespace stripped.
    #[must_use]
    pub fn tel_uri(&self) -> String {
        let digits: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
        format!("tel:{digits}")
    }

    #[must_use]
    pub fn mailto_uri(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Public asset URL under the base path, with spaces and parentheses
    /// percent-encoded.
    #[must_use]
    pub fn asset_path(&self, path: &str) -> String {
        let clean = path.strip_prefix('/').unwrap_or(path);
        let mut out = String::with_capacity(self.base_path.len() + clean.len() + 8);
        out.push_str(self.base_path.trim_end_matches('/'));
        out.push('/');
        for ch in clean.chars() {
            match ch {
                ' ' => out.push_str("%20"),
                '(' => out.push_str("%28"),
                ')' => out.push_str("%29"),
                other => out.push(other),
            }
        }
        out
    }

    /// Route URL under the base path (`"/"` maps to the base path root).
    #[must_use]
    pub fn route_href(&self, route: &str) -> String {
        let base = self.base_path.trim_end_matches('/');
        format!("{base}/{}", route.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "basePath": "/b", "bookingUrl": "https://book", "phone": "08 632 3032",
        "email": "a@b.c",
        "hero": { "backgroundText": "X", "image": "/h.png", "brandName": "B", "logo": "/l.png",
                  "navLinks": [{ "key": "menu", "href": "/menu" }] },
        "about": { "portfolioImages": [],
                   "stats": [{ "value": 25, "suffix": "+" }, { "value": 2001 }] },
        "footer": { "logoText": "L", "navLinks": [],
                    "socialLinks": [{ "iconName": "Vine", "label": "Vine", "href": "https://v" }] }
    }"#;

    #[test]
    fn parses_and_derives_uris() {
        let site = SiteConfig::from_json(DOC).unwrap();
        assert_eq!(site.tel_uri(), "tel:086323032");
        assert_eq!(site.mailto_uri(), "mailto:a@b.c");
        assert_eq!(site.hero.nav_links[0].key, NavKey::Menu);
        assert_eq!(site.about.stats[1].suffix, "");
    }

    #[test]
    fn asset_paths_are_prefixed_and_encoded() {
        let site = SiteConfig::from_json(DOC).unwrap();
        assert_eq!(
            site.asset_path("/images/WhatsApp Image (3).jpeg"),
            "/b/images/WhatsApp%20Image%20%283%29.jpeg"
        );
        assert_eq!(site.asset_path("meat-1.jpg"), "/b/meat-1.jpg");
    }

    #[test]
    fn route_hrefs_respect_base_path() {
        let site = SiteConfig::from_json(DOC).unwrap();
        assert_eq!(site.route_href("/"), "/b/");
        assert_eq!(site.route_href("/menu"), "/b/menu");
        assert_eq!(site.route_href("menu"), "/b/menu");
    }

    #[test]
    fn unknown_social_icon_falls_back() {
        let site = SiteConfig::from_json(DOC).unwrap();
        assert_eq!(site.footer.social_links[0].icon(), Icon::Facebook);
    }
}
