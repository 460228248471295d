//! Integration availability: pure boolean combination over already-loaded
//! values. No network calls; output is presence flags only.

use serde::Serialize;

use super::SecretsProvider;

/// Secret keys consulted for GA4 and OpenAI availability.
const GA4_PROPERTY_ID: &str = "GA4_PROPERTY_ID";
const GA4_SERVICE_ACCOUNT_PAIR: [&str; 2] = ["GA4_CLIENT_EMAIL", "GA4_PRIVATE_KEY"];
const GA4_OAUTH_TRIPLE: [&str; 3] = [
    "GA4_OAUTH_CLIENT_ID",
    "GA4_OAUTH_CLIENT_SECRET",
    "GA4_OAUTH_REFRESH_TOKEN",
];
const OPENAI_API_KEY: &str = "OPENAI_API_KEY";

/// Pre-computed environment-based availability flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvFlags {
    pub ga4: bool,
    pub openai: bool,
}

impl EnvFlags {
    /// Compute the flags from process environment variables.
    pub fn from_env() -> Self {
        let has = |key: &str| std::env::var_os(key).is_some_and(|v| !v.is_empty());
        Self {
            ga4: has(GA4_PROPERTY_ID)
                && (GA4_SERVICE_ACCOUNT_PAIR.iter().all(|k| has(k))
                    || GA4_OAUTH_TRIPLE.iter().all(|k| has(k))),
            openai: has(OPENAI_API_KEY),
        }
    }
}

/// Which integrations are available. Booleans only, never secret values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntegrationStatus {
    pub ga4: bool,
    pub openai: bool,
}

/// Combine environment flags with stored secrets.
///
/// GA4 needs the property id plus either the service-account pair or the
/// complete OAuth triple; OpenAI just needs an API key.
pub fn compute_status(env: EnvFlags, secrets: &dyn SecretsProvider) -> IntegrationStatus {
    let stored_ga4 = secrets.contains(GA4_PROPERTY_ID)
        && (GA4_SERVICE_ACCOUNT_PAIR.iter().all(|k| secrets.contains(k))
            || GA4_OAUTH_TRIPLE.iter().all(|k| secrets.contains(k)));

    IntegrationStatus {
        ga4: env.ga4 || stored_ga4,
        openai: env.openai || secrets.contains(OPENAI_API_KEY),
    }
}
