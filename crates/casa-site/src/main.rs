#![forbid(unsafe_code)]

//! Static export: render site pages to standalone HTML documents.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use casa_content::ContentStore;
use casa_i18n::Language;
use casa_site::cli;
use casa_site::document::{export_file_name, export_page};
use casa_site::route::Route;
use tracing::info;

fn main() {
    let opts = cli::Opts::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let store = match ContentStore::try_global() {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Failed to load content: {e}");
            std::process::exit(1);
        }
    };

    let pages: Vec<(Route, Language)> = if opts.all {
        Route::ALL
            .iter()
            .flat_map(|&route| Language::ALL.iter().map(move |&lang| (route, lang)))
            .collect()
    } else {
        vec![(opts.route, opts.lang)]
    };

    if let Err(e) = export(store, &pages, opts.out.as_deref(), opts.base_path.as_deref()) {
        eprintln!("Export failed: {e}");
        std::process::exit(1);
    }
}

fn export(
    store: &ContentStore,
    pages: &[(Route, Language)],
    out: Option<&str>,
    base_path: Option<&str>,
) -> io::Result<()> {
    let Some(dir) = out else {
        let mut stdout = io::stdout().lock();
        for &(route, lang) in pages {
            stdout.write_all(export_page(store, route, lang, base_path).as_bytes())?;
        }
        return stdout.flush();
    };

    let dir = Path::new(dir);
    fs::create_dir_all(dir)?;
    for &(route, lang) in pages {
        let path = dir.join(export_file_name(route, lang));
        fs::write(&path, export_page(store, route, lang, base_path))?;
        info!(path = %path.display(), "wrote page");
    }
    Ok(())
}
