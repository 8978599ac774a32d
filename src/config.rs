use std::time::Duration;

/// Configuration for the Edgar client
#[derive(Debug, Clone)]
pub struct EdgarConfig {
    /// User agent string for HTTP requests, e.g. "Jane Doe jane@example.com"
    pub user_agent: String,
    /// HTTP request timeout
    pub timeout: Duration,
    /// Base URLs for different EDGAR services
    pub base_urls: EdgarUrls,
}

/// Base URLs for different EDGAR services
#[derive(Debug, Clone)]
pub struct EdgarUrls {
    /// Base URL for EDGAR archives
    pub archives: String,
    /// Base URL for EDGAR data (submissions and XBRL APIs)
    pub data: String,
    /// Base URL for EDGAR files (ticker lookup tables)
    pub files: String,
}

impl Default for EdgarConfig {
    fn default() -> Self {
        Self {
            user_agent: "edgar_statements/0.1.0".to_string(),
            timeout: Duration::from_secs(30),
            base_urls: EdgarUrls::default(),
        }
    }
}

impl EdgarConfig {
    /// Creates a new EdgarConfig with custom settings
    ///
    /// # Basic usage
    ///
    /// ```rust
    /// use edgar_statements::{Edgar, EdgarConfig, EdgarUrls};
    /// use std::time::Duration;
    /// let config = EdgarConfig {
    ///     user_agent: "Jane Doe jane@example.com".to_string(),
    ///     timeout: Duration::from_secs(30),
    ///     base_urls: EdgarUrls::default(),
    /// };
    /// let edgar = Edgar::with_config(config)?;
    /// # Ok::<(), edgar_statements::EdgarError>(())
    /// ```
    pub fn new(
        user_agent: impl Into<String>,
        timeout: Duration,
        base_urls: Option<EdgarUrls>,
    ) -> Self {
        Self {
            user_agent: user_agent.into(),
            timeout,
            base_urls: base_urls.unwrap_or_default(),
        }
    }
}

impl Default for EdgarUrls {
    fn default() -> Self {
        Self {
            archives: "https://www.sec.gov/Archives/edgar".to_string(),
            data: "https://data.sec.gov".to_string(),
            files: "https://www.sec.gov/files".to_string(),
        }
    }
}
