/// Startup configuration of the lookup page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Endpoint returning the submission rows as JSON. `None` keeps the page
    /// on the seed record for its whole lifetime.
    pub data_url: Option<String>,
}

impl AppConfig {
    /// Builds the configuration from a raw endpoint value. Blank values count
    /// as unset.
    pub fn from_value(data_url: Option<&str>) -> Self {
        Self {
            data_url: data_url
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .map(str::to_string),
        }
    }

    pub fn has_remote_source(&self) -> bool {
        self.data_url.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_endpoint_means_no_remote_source() {
        assert_eq!(AppConfig::from_value(None), AppConfig::default());
        assert!(!AppConfig::from_value(Some("  ")).has_remote_source());
    }

    #[test]
    fn endpoint_is_trimmed() {
        let config = AppConfig::from_value(Some(" https://example.com/rows.json\n"));
        assert_eq!(config.data_url.as_deref(), Some("https://example.com/rows.json"));
        assert!(config.has_remote_source());
    }
}
