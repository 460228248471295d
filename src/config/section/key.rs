//! Closed set of section keys a page is assembled from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named, independently toggleable block of the rendered page.
///
/// The set is closed: patches referencing anything else are rejected at
/// the JSON boundary with a descriptive error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKey {
    Hero,
    Features,
    Services,
    Partners,
    Instagram,
    Blog,
    Cta,
    Stats,
    Carousels,
    Certifications,
    FloatingIcons,
    Header,
    Footer,
    Advanced,
}

impl SectionKey {
    /// All keys, in canonical declaration order.
    pub const ALL: [Self; 14] = [
        Self::Hero,
        Self::Features,
        Self::Services,
        Self::Partners,
        Self::Instagram,
        Self::Blog,
        Self::Cta,
        Self::Stats,
        Self::Carousels,
        Self::Certifications,
        Self::FloatingIcons,
        Self::Header,
        Self::Footer,
        Self::Advanced,
    ];

    /// Canonical kebab-case name, as used in site.json.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Features => "features",
            Self::Services => "services",
            Self::Partners => "partners",
            Self::Instagram => "instagram",
            Self::Blog => "blog",
            Self::Cta => "cta",
            Self::Stats => "stats",
            Self::Carousels => "carousels",
            Self::Certifications => "certifications",
            Self::FloatingIcons => "floating-icons",
            Self::Header => "header",
            Self::Footer => "footer",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("unknown section key `{s}`"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&SectionKey::FloatingIcons).unwrap();
        assert_eq!(json, "\"floating-icons\"");

        let key: SectionKey = serde_json::from_str("\"cta\"").unwrap();
        assert_eq!(key, SectionKey::Cta);
    }

    #[test]
    fn test_from_str_round_trips_all_keys() {
        for key in SectionKey::ALL {
            assert_eq!(key.as_str().parse::<SectionKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "sidebar".parse::<SectionKey>().unwrap_err();
        assert!(err.contains("sidebar"));
    }
}
