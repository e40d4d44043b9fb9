use std::fmt::Write;

use chrono::NaiveDate;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

/// An in-page anchor that is linked from the header and listed in the sitemap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Section {
    pub anchor: &'static str,
    pub label: &'static str,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

pub static SECTIONS: [Section; 3] = [
    Section {
        anchor: "work",
        label: "Work",
        change_frequency: ChangeFrequency::Monthly,
        priority: 0.8,
    },
    Section {
        anchor: "pricing",
        label: "Pricing",
        change_frequency: ChangeFrequency::Monthly,
        priority: 0.8,
    },
    Section {
        anchor: "faq",
        label: "FAQ",
        change_frequency: ChangeFrequency::Monthly,
        priority: 0.6,
    },
];

#[derive(Clone, Debug, PartialEq)]
pub struct SitemapEntry {
    pub url: String,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// Sitemap shipped with the site; regenerate with `cargo run --bin sitemap -- assets/sitemap.xml`.
pub const PUBLISHED_XML: &str = include_str!("../assets/sitemap.xml");

pub fn entries(base_url: &str) -> Vec<SitemapEntry> {
    let base = base_url.trim_end_matches('/');
    let mut entries = vec![SitemapEntry {
        url: base.to_string(),
        change_frequency: ChangeFrequency::Weekly,
        priority: 1.0,
    }];
    entries.extend(SECTIONS.iter().map(|section| SitemapEntry {
        url: format!("{}#{}", base, section.anchor),
        change_frequency: section.change_frequency,
        priority: section.priority,
    }));
    entries
}

pub fn render_xml(entries: &[SitemapEntry], last_modified: NaiveDate) -> String {
    let lastmod = last_modified.format("%Y-%m-%d").to_string();
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        // Writing into a String cannot fail.
        let _ = write!(
            xml,
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    \
             <changefreq>{}</changefreq>\n    <priority>{:.1}</priority>\n  </url>\n",
            escape_xml(&entry.url),
            lastmod,
            entry.change_frequency.as_str(),
            entry.priority,
        );
    }
    xml.push_str("</urlset>\n");
    xml
}

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    #[test]
    fn lists_page_and_anchors() {
        let urls: Vec<_> = entries("https://dbwebsites.au/")
            .into_iter()
            .map(|e| e.url)
            .collect();
        assert_eq!(
            urls,
            vec![
                "https://dbwebsites.au",
                "https://dbwebsites.au#work",
                "https://dbwebsites.au#pricing",
                "https://dbwebsites.au#faq",
            ]
        );
    }

    #[test]
    fn home_has_top_priority() {
        let all = entries("https://dbwebsites.au");
        assert_eq!(all[0].change_frequency, ChangeFrequency::Weekly);
        assert_eq!(all[0].priority, 1.0);
        assert!(all[1..].iter().all(|e| e.priority < 1.0));
    }

    #[test]
    fn renders_urlset() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let xml = render_xml(&entries("https://dbwebsites.au")[..2], date);
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<loc>https://dbwebsites.au#work</loc>"));
        assert!(xml.contains("<lastmod>2026-01-05</lastmod>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(xml.contains("<priority>0.8</priority>"));
        assert_eq!(xml.matches("<url>").count(), 2);
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[test]
    fn escapes_urls() {
        let entry = SitemapEntry {
            url: "https://example.com/?a=1&b=2".to_string(),
            change_frequency: ChangeFrequency::Monthly,
            priority: 0.5,
        };
        let xml = render_xml(&[entry], NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        assert!(xml.contains("<loc>https://example.com/?a=1&amp;b=2</loc>"));
    }

    #[test]
    fn published_sitemap_matches_site_config() {
        let lastmod = PUBLISHED_XML
            .split("<lastmod>")
            .nth(1)
            .and_then(|rest| rest.split("</lastmod>").next())
            .expect("published sitemap has a lastmod");
        let date = NaiveDate::parse_from_str(lastmod, "%Y-%m-%d").unwrap();
        assert_eq!(PUBLISHED_XML, render_xml(&entries(&config::site().base_url), date));
    }
}
