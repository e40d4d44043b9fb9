use crate::config::SiteConfig;

pub fn messenger_href(config: &SiteConfig) -> &str {
    &config.messenger_url
}

pub fn email_body(config: &SiteConfig) -> String {
    config.email_body.join("\n")
}

/// Percent-encodes a URI component, leaving `!'()*` literal like the browser's
/// `encodeURIComponent`.
pub fn encode_component(value: &str) -> String {
    urlencoding::encode(value)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}

/// `mailto:` link with the enquiry template pre-filled.
pub fn mailto_href(config: &SiteConfig) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        config.contact_email,
        encode_component(&config.email_subject),
        encode_component(&email_body(config)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SiteConfig {
        SiteConfig {
            contact_email: "des@example.com".to_string(),
            email_subject: "Website enquiry (DB Websites)".to_string(),
            email_body: vec!["Hey Des,".to_string(), "".to_string(), "Cheers,".to_string()],
            ..SiteConfig::default()
        }
    }

    #[test]
    fn mailto_encodes_subject_and_body() {
        assert_eq!(
            mailto_href(&config()),
            "mailto:des@example.com?subject=Website%20enquiry%20(DB%20Websites)\
             &body=Hey%20Des%2C%0A%0ACheers%2C"
        );
    }

    #[test]
    fn component_encoding_keeps_mark_characters() {
        assert_eq!(encode_component("Hi! It's (nearly) *done*"), "Hi!%20It's%20(nearly)%20*done*");
        assert_eq!(encode_component("a&b=c?d/e#f"), "a%26b%3Dc%3Fd%2Fe%23f");
        assert_eq!(encode_component("~-_."), "~-_.");
        assert_eq!(encode_component("100%"), "100%25");
    }

    #[test]
    fn body_keeps_blank_lines() {
        assert_eq!(email_body(&config()), "Hey Des,\n\nCheers,");
    }

    #[test]
    fn default_template_round_trips_line_count() {
        let config = SiteConfig::default();
        let href = mailto_href(&config);
        let body = href.split("&body=").nth(1).unwrap();
        assert_eq!(body.matches("%0A").count(), config.email_body.len() - 1);
        assert!(!href.contains(' '));
    }

    #[test]
    fn messenger_link_comes_from_config() {
        assert_eq!(messenger_href(&SiteConfig::default()), "https://m.me/desbarriere");
    }
}
