use tracing::warn;
use url::Url;

use crate::error::ConfigError;
use crate::tabs::Tab;

/// Local development backend, used when the page has no usable origin.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Runtime settings, provided to every component through context.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: Url,
    pub default_tab: Tab,
}

impl AppConfig {
    /// Resolve from build-time overrides and the page origin.
    ///
    /// `FITTRACK_API_BASE_URL` wins over the origin; `FITTRACK_DEFAULT_TAB`
    /// picks the first tab by id.
    pub fn from_environment() -> Result<Self, ConfigError> {
        Self::resolve(
            option_env!("FITTRACK_API_BASE_URL"),
            crate::browser::page_origin().as_deref(),
            option_env!("FITTRACK_DEFAULT_TAB"),
        )
    }

    pub fn resolve(
        base_override: Option<&str>,
        origin: Option<&str>,
        default_tab: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let raw = base_override
            .or(origin)
            .map(str::trim)
            .filter(|s| !s.is_empty() && *s != "null")
            .unwrap_or(DEFAULT_API_BASE_URL);

        let api_base_url = Url::parse(raw).map_err(|source| ConfigError::InvalidBaseUrl {
            url: raw.to_string(),
            source,
        })?;
        if api_base_url.cannot_be_a_base() {
            return Err(ConfigError::OpaqueBaseUrl(raw.to_string()));
        }

        let default_tab = match default_tab {
            Some(id) => Tab::from_id(id).unwrap_or_else(|| {
                warn!("Unknown default tab '{}', using {}", id, Tab::default().id());
                Tab::default()
            }),
            None => Tab::default(),
        };

        Ok(Self {
            api_base_url,
            default_tab,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: Url::parse(DEFAULT_API_BASE_URL)
                .unwrap_or_else(|_| unreachable!("constant URL parses")),
            default_tab: Tab::default(),
        }
    }
}
