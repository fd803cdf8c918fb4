#![forbid(unsafe_code)]

//! The two site routes and location parsing.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    Menu,
}

impl Route {
    pub const ALL: [Self; 2] = [Self::Home, Self::Menu];

    /// Path relative to the base path.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Menu => "/menu",
        }
    }

    /// Short name used in scope names, logs and export file names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Menu => "menu",
        }
    }

    /// Resolve a browser location to a route.
    ///
    /// The base path prefix, query string, fragment and trailing slashes
    /// are ignored. Anything that is not the menu resolves to home.
    #[must_use]
    pub fn from_location(location: &str, base_path: &str) -> Self {
        let path = location
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let base = base_path.trim_end_matches('/');
        let path = if base.is_empty() {
            path
        } else {
            match path.strip_prefix(base) {
                Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
                _ => path,
            }
        };
        match path.trim_end_matches('/') {
            "" => Self::Home,
            "/menu" => Self::Menu,
            other => {
                debug!(path = other, "unknown location, showing home");
                Self::Home
            }
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A route name that is neither `home` nor `menu`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteParseError(pub String);

impl fmt::Display for RouteParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown route: {} (expected home or menu)", self.0)
    }
}

impl std::error::Error for RouteParseError {}

impl FromStr for Route {
    type Err = RouteParseError;

    /// Strict parse for command-line use: `home`, `/`, `menu` or `/menu`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" | "/" => Ok(Self::Home),
            "menu" | "/menu" => Ok(Self::Menu),
            _ => Err(RouteParseError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "/casa-do-brazil-website";

    #[test]
    fn base_path_is_stripped() {
        assert_eq!(Route::from_location(BASE, BASE), Route::Home);
        assert_eq!(Route::from_location("/casa-do-brazil-website/", BASE), Route::Home);
        assert_eq!(Route::from_location("/casa-do-brazil-website/menu", BASE), Route::Menu);
        assert_eq!(Route::from_location("/casa-do-brazil-website/menu/", BASE), Route::Menu);
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        assert_eq!(Route::from_location("/menu?x=1", ""), Route::Menu);
        assert_eq!(Route::from_location("/#about", ""), Route::Home);
    }

    #[test]
    fn unknown_paths_resolve_home() {
        assert_eq!(Route::from_location("/gallery", BASE), Route::Home);
        assert_eq!(Route::from_location("/casa-do-brazil-website/nope", BASE), Route::Home);
        assert_eq!(Route::from_location("/casa-do-brazil-websitemenu", BASE), Route::Home);
    }

    #[test]
    fn strict_parse() {
        assert_eq!("menu".parse::<Route>(), Ok(Route::Menu));
        assert_eq!("/".parse::<Route>(), Ok(Route::Home));
        assert!("about".parse::<Route>().is_err());
    }
}
