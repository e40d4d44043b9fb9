use log::error;
use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

const SITE_JSON: &str = include_str!("../site.json");

static SITE: Lazy<SiteConfig> = Lazy::new(|| match parse(SITE_JSON) {
    Ok(config) => config,
    Err(e) => {
        error!("Invalid site.json, using built-in defaults: {}", e);
        SiteConfig::default()
    }
});

/// Site-wide settings, loaded once from the bundled `site.json`.
pub fn site() -> &'static SiteConfig {
    &SITE
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse site configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("`{0}` must not be empty")]
    EmptyField(&'static str),
    #[error("`{field}` is not a valid email address: {value}")]
    InvalidEmail { field: &'static str, value: String },
    #[error("`{field}` must be an http(s) URL: {value}")]
    InvalidUrl { field: &'static str, value: String },
    #[error("overlay image height must be between 10 and 100vh, got {0}")]
    OverlayHeight(u8),
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: "DB Websites — Websites built properly".to_string(),
            description: "Clean, professional websites for small businesses in Cairns & FNQ. \
                From fast launches to premium custom builds. No agency fluff, no drawn-out timelines."
                .to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct OverlayStyle {
    /// Upper bound for the full-size image, in viewport-height units.
    pub max_image_height_vh: u8,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self { max_image_height_vh: 78 }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub business_name: String,
    pub tagline: String,
    pub location: String,
    pub author: String,
    pub base_url: String,
    pub messenger_url: String,
    pub contact_email: String,
    pub email_subject: String,
    pub email_body: Vec<String>,
    pub meta: PageMeta,
    pub overlay: OverlayStyle,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let body = [
            "Hey Des,",
            "",
            "Keen to chat about a website.",
            "",
            "Business name:",
            "Industry / trade:",
            "Services (dot points):",
            "Location (suburb/city):",
            "Do you already own a domain? (yes/no):",
            "Any links (FB/IG/current site):",
            "",
            "Goals (more calls, look professional, show services, etc):",
            "Anything you want on the site (pricing, gallery, testimonials, etc):",
            "",
            "Cheers,",
            "",
        ];
        Self {
            business_name: "DB Websites".to_string(),
            tagline: "Websites built properly".to_string(),
            location: "Cairns / FNQ".to_string(),
            author: "Des".to_string(),
            base_url: "https://dbwebsites.au".to_string(),
            messenger_url: "https://m.me/desbarriere".to_string(),
            contact_email: "des@outbacklens.com".to_string(),
            email_subject: "Website enquiry (DB Websites)".to_string(),
            email_body: body.iter().map(|line| line.to_string()).collect(),
            meta: PageMeta::default(),
            overlay: OverlayStyle::default(),
        }
    }
}

impl SiteConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("business_name", &self.business_name),
            ("messenger_url", &self.messenger_url),
            ("contact_email", &self.contact_email),
            ("base_url", &self.base_url),
            ("meta.title", &self.meta.title),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField(field));
            }
        }

        if !is_email(&self.contact_email) {
            return Err(ConfigError::InvalidEmail {
                field: "contact_email",
                value: self.contact_email.clone(),
            });
        }

        for (field, value) in [("messenger_url", &self.messenger_url), ("base_url", &self.base_url)] {
            if !is_http_url(value) {
                return Err(ConfigError::InvalidUrl {
                    field,
                    value: value.clone(),
                });
            }
        }

        let height = self.overlay.max_image_height_vh;
        if !(10..=100).contains(&height) {
            return Err(ConfigError::OverlayHeight(height));
        }
        Ok(())
    }
}

pub fn parse(raw: &str) -> Result<SiteConfig, ConfigError> {
    let config: SiteConfig = serde_json::from_str(raw)?;
    config.validate()?;
    Ok(config)
}

fn is_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.contains(char::is_whitespace)
        }
        None => false,
    }
}

fn is_http_url(value: &str) -> bool {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    matches!(rest, Some(host) if !host.is_empty() && !host.contains(char::is_whitespace))
}
