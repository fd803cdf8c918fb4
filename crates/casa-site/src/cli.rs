#![forbid(unsafe_code)]

//! Command-line argument parsing for the static export binary.
//!
//! Parses args by hand and supports environment variable overrides via
//! the `CASA_SITE_*` prefix.

use std::env;
use std::process;

use casa_i18n::Language;

use crate::route::Route;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
Casa do Brasil static export

USAGE:
    casa-site [OPTIONS]

OPTIONS:
    --route=ROUTE        Page to render: 'home' or 'menu' (default: home)
    --lang=CODE          Language: 'he', 'en' or 'pt' (default: he)
    --out=DIR            Write files into DIR instead of printing to stdout
    --base-path=PREFIX   Deployment prefix for links and assets (default: from site config)
    --all                Render every page in every language (requires --out)
    --help, -h           Show this help message
    --version, -V        Show version

ENVIRONMENT VARIABLES:
    CASA_SITE_ROUTE      Override --route
    CASA_SITE_LANG       Override --lang
    CASA_SITE_OUT        Override --out
    CASA_SITE_BASE_PATH  Override --base-path
    CASA_SITE_ALL        Override --all (1/true to enable)
    RUST_LOG             Log filter (default: info)";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    pub route: Route,
    pub lang: Language,
    /// Output directory; `None` prints the page to stdout.
    pub out: Option<String>,
    /// Overrides the configured deployment prefix.
    pub base_path: Option<String>,
    pub all: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ParseError {
    Help,
    Version,
    InvalidValue { flag: &'static str, value: String },
    MissingOut,
    UnknownArg(String),
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            route: Route::Home,
            lang: Language::DEFAULT,
            out: None,
            base_path: None,
            all: false,
        }
    }
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Environment variables take precedence over defaults but are overridden
    /// by explicit command-line flags.
    pub fn parse() -> Self {
        match Self::parse_from_env_and_args(env::args().skip(1), |key| env::var(key).ok()) {
            Ok(opts) => opts,
            Err(ParseError::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Err(ParseError::Version) => {
                println!("casa-site {VERSION}");
                process::exit(0);
            }
            Err(ParseError::InvalidValue { flag, value }) => {
                eprintln!("Invalid {flag} value: {value}");
                process::exit(1);
            }
            Err(ParseError::MissingOut) => {
                eprintln!("--all writes several files and needs --out=DIR");
                process::exit(1);
            }
            Err(ParseError::UnknownArg(arg)) => {
                eprintln!("Unknown argument: {arg}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }

    fn parse_from_env_and_args<I, S, F>(args: I, get_env: F) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        // Environment first; malformed values are ignored here.
        if let Some(val) = get_env("CASA_SITE_ROUTE")
            && let Ok(route) = val.trim().parse()
        {
            opts.route = route;
        }
        if let Some(val) = get_env("CASA_SITE_LANG")
            && let Ok(lang) = val.trim().parse()
        {
            opts.lang = lang;
        }
        if let Some(val) = get_env("CASA_SITE_OUT")
            && !val.trim().is_empty()
        {
            opts.out = Some(val);
        }
        if let Some(val) = get_env("CASA_SITE_BASE_PATH") {
            opts.base_path = Some(val);
        }
        if let Some(val) = get_env("CASA_SITE_ALL") {
            opts.all = val == "1" || val.eq_ignore_ascii_case("true");
        }

        // Command-line args override env vars.
        for arg in args {
            match arg.as_ref() {
                "--help" | "-h" => return Err(ParseError::Help),
                "--version" | "-V" => return Err(ParseError::Version),
                "--all" => opts.all = true,
                other => {
                    if let Some(val) = other.strip_prefix("--route=") {
                        opts.route = val.parse().map_err(|_| ParseError::InvalidValue {
                            flag: "--route",
                            value: val.to_string(),
                        })?;
                    } else if let Some(val) = other.strip_prefix("--lang=") {
                        opts.lang = val.parse().map_err(|_| ParseError::InvalidValue {
                            flag: "--lang",
                            value: val.to_string(),
                        })?;
                    } else if let Some(val) = other.strip_prefix("--out=") {
                        if val.is_empty() {
                            return Err(ParseError::InvalidValue {
                                flag: "--out",
                                value: val.to_string(),
                            });
                        }
                        opts.out = Some(val.to_string());
                    } else if let Some(val) = other.strip_prefix("--base-path=") {
                        opts.base_path = Some(val.to_string());
                    } else {
                        return Err(ParseError::UnknownArg(other.to_string()));
                    }
                }
            }
        }

        if opts.all && opts.out.is_none() {
            return Err(ParseError::MissingOut);
        }
        Ok(opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_with_env<I, S>(
        args: I,
        env_pairs: &[(&'static str, &'static str)],
    ) -> Result<Opts, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = std::collections::HashMap::new();
        for (key, value) in env_pairs {
            map.insert(*key, *value);
        }
        Opts::parse_from_env_and_args(args, |key| map.get(key).map(|value| (*value).to_string()))
    }

    #[test]
    fn default_opts() {
        let opts = parse_with_env(Vec::<&str>::new(), &[]).unwrap();
        assert_eq!(opts, Opts::default());
        assert_eq!(opts.route, Route::Home);
        assert_eq!(opts.lang, Language::He);
        assert!(opts.out.is_none());
        assert!(!opts.all);
    }

    #[test]
    fn version_string_nonempty() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn help_text_lists_every_env_override() {
        for key in [
            "CASA_SITE_ROUTE",
            "CASA_SITE_LANG",
            "CASA_SITE_OUT",
            "CASA_SITE_BASE_PATH",
            "CASA_SITE_ALL",
        ] {
            assert!(HELP_TEXT.contains(key), "{key} missing from help");
        }
    }

    #[test]
    fn flags_parse() {
        let opts = parse_with_env(
            ["--route=menu", "--lang=en", "--out=dist", "--base-path=/casa"],
            &[],
        )
        .unwrap();
        assert_eq!(opts.route, Route::Menu);
        assert_eq!(opts.lang, Language::En);
        assert_eq!(opts.out.as_deref(), Some("dist"));
        assert_eq!(opts.base_path.as_deref(), Some("/casa"));
    }

    #[test]
    fn portuguese_can_be_exported() {
        let opts = parse_with_env(["--lang=pt"], &[]).unwrap();
        assert_eq!(opts.lang, Language::Pt);
    }

    #[test]
    fn args_override_env() {
        let opts = parse_with_env(
            ["--lang=he"],
            &[("CASA_SITE_LANG", "en"), ("CASA_SITE_ROUTE", "menu")],
        )
        .unwrap();
        assert_eq!(opts.lang, Language::He);
        assert_eq!(opts.route, Route::Menu);
    }

    #[test]
    fn malformed_env_is_ignored() {
        let opts = parse_with_env(Vec::<&str>::new(), &[("CASA_SITE_LANG", "fr")]).unwrap();
        assert_eq!(opts.lang, Language::He);
    }

    #[test]
    fn invalid_values_are_reported() {
        assert_eq!(
            parse_with_env(["--route=about"], &[]),
            Err(ParseError::InvalidValue { flag: "--route", value: "about".into() })
        );
        assert_eq!(
            parse_with_env(["--lang=fr"], &[]),
            Err(ParseError::InvalidValue { flag: "--lang", value: "fr".into() })
        );
    }

    #[test]
    fn all_requires_out() {
        assert_eq!(parse_with_env(["--all"], &[]), Err(ParseError::MissingOut));
        let opts = parse_with_env(["--all"], &[("CASA_SITE_OUT", "dist")]).unwrap();
        assert!(opts.all);
    }

    #[test]
    fn help_version_and_unknown() {
        assert_eq!(parse_with_env(["-h"], &[]), Err(ParseError::Help));
        assert_eq!(parse_with_env(["--version"], &[]), Err(ParseError::Version));
        assert_eq!(
            parse_with_env(["--tour"], &[]),
            Err(ParseError::UnknownArg("--tour".into()))
        );
    }
}
