#![forbid(unsafe_code)]

//! Named icon set referenced from content data.
//!
//! Data files name icons by string (`"iconName": "Beef"`). Lookup is
//! total: a name outside the set maps to the default for the context it
//! appears in.

use std::fmt;

/// Every icon the site can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Flame,
    Beef,
    Salad,
    Wine,
    Instagram,
    Facebook,
    Twitter,
    TikTok,
    Phone,
    Calendar,
    Quote,
    Star,
    Menu,
    ArrowDown,
    ArrowRight,
}

/// Where an icon name was found; decides the fallback for unknown names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconContext {
    /// Menu-teaser service cards.
    Service,
    /// Footer social links.
    Social,
}

impl IconContext {
    #[must_use]
    pub const fn fallback(self) -> Icon {
        match self {
            Self::Service => Icon::Flame,
            Self::Social => Icon::Facebook,
        }
    }
}

impl Icon {
    pub const ALL: [Self; 15] = [
        Self::Flame,
        Self::Beef,
        Self::Salad,
        Self::Wine,
        Self::Instagram,
        Self::Facebook,
        Self::Twitter,
        Self::TikTok,
        Self::Phone,
        Self::Calendar,
        Self::Quote,
        Self::Star,
        Self::Menu,
        Self::ArrowDown,
        Self::ArrowRight,
    ];

    /// The name used in data files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Flame => "Flame",
            Self::Beef => "Beef",
            Self::Salad => "Salad",
            Self::Wine => "Wine",
            Self::Instagram => "Instagram",
            Self::Facebook => "Facebook",
            Self::Twitter => "Twitter",
            Self::TikTok => "TikTok",
            Self::Phone => "Phone",
            Self::Calendar => "Calendar",
            Self::Quote => "Quote",
            Self::Star => "Star",
            Self::Menu => "Menu",
            Self::ArrowDown => "ArrowDown",
            Self::ArrowRight => "ArrowRight",
        }
    }

    /// Exact-name lookup.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|icon| icon.name() == name)
    }

    /// Lookup that never fails: unknown names take the context default.
    #[must_use]
    pub fn lookup(name: &str, context: IconContext) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            tracing::debug!(name, ?context, "unknown icon name, using fallback");
            context.fallback()
        })
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
