//! Tile URL templates.

use regex::{NoExpand, Regex};
use std::fmt;
use std::sync::OnceLock;

fn placeholder(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("placeholder pattern is valid"))
}

fn x_token() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    placeholder(&RE, r"(?i)\{x\}")
}

fn y_token() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    placeholder(&RE, r"(?i)\{y\}")
}

fn z_token() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    placeholder(&RE, r"(?i)\{z\}")
}

/// A tile server URL with `{x}`, `{y}` and `{z}` placeholders.
///
/// Placeholders match case-insensitively and may repeat. The template is
/// not checked for being a valid URL; a broken template shows up as failed
/// requests.
///
/// # Example
///
/// ```
/// use gzsatellite::provider::UrlTemplate;
///
/// let template = UrlTemplate::new("http://x.example/{z}/{x}/{y}.png");
/// assert_eq!(template.uri_for_tile(5, 9, 3), "http://x.example/3/5/9.png");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UrlTemplate {
    template: String,
}

impl UrlTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// The raw template text.
    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// URL of tile (`x`, `y`) at zoom `z`.
    pub fn uri_for_tile(&self, x: u32, y: u32, z: u8) -> String {
        let url = x_token().replace_all(&self.template, NoExpand(&x.to_string()));
        let url = y_token().replace_all(&url, NoExpand(&y.to_string()));
        let url = z_token().replace_all(&url, NoExpand(&z.to_string()));
        url.into_owned()
    }

    /// Whether all three placeholders appear at least once.
    pub fn has_all_placeholders(&self) -> bool {
        x_token().is_match(&self.template)
            && y_token().is_match(&self.template)
            && z_token().is_match(&self.template)
    }
}

impl fmt::Display for UrlTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}

impl From<&str> for UrlTemplate {
    fn from(template: &str) -> Self {
        Self::new(template)
    }
}

impl From<String> for UrlTemplate {
    fn from(template: String) -> Self {
        Self::new(template)
    }
}
