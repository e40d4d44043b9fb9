use std::fs;
use std::io::{self, Write};

use chrono::Utc;
use dbwebsites_frontend::config;
use dbwebsites_frontend::sitemap::{entries, render_xml};

/// Writes the sitemap for the configured base URL, dated today, to the given
/// path or to stdout.
fn main() -> io::Result<()> {
    let xml = render_xml(&entries(&config::site().base_url), Utc::now().date_naive());
    match std::env::args().nth(1) {
        Some(path) => fs::write(path, xml),
        None => io::stdout().write_all(xml.as_bytes()),
    }
}
