use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use super::config::{EdgarConfig, EdgarUrls};
use super::error::{EdgarError, Result};

/// HTTP client for accessing the SEC EDGAR API.
///
/// The `Edgar` client is the entry point for every operation in this crate. It
/// attaches the descriptive `User-Agent` header the SEC requires on all
/// automated traffic, and it exposes a single `get` primitive that the ticker,
/// filing and statement operations are built on.
///
/// The client holds no mutable state: cloning it is cheap, and it is safe to
/// call from any number of concurrent tasks. Each operation is one or more
/// independent request/parse cycles.
///
/// # Error Handling
///
/// No retry or backoff is performed internally. Transport failures surface as
/// [`EdgarError::RequestError`]; any non-success HTTP status surfaces as
/// [`EdgarError::HttpStatus`] carrying the status code and URL. Callers that
/// need retry under the SEC's fair-access throttling are expected to wrap
/// these operations themselves.
///
/// # Examples
///
/// ```rust
/// # use edgar_statements::Edgar;
/// let edgar = Edgar::new("Jane Doe", "jane@example.com")?;
/// # Ok::<(), edgar_statements::EdgarError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Edgar {
    /// HTTP client with the identifying header installed
    pub(crate) client: reqwest::Client,

    /// Base URL for EDGAR archives
    pub(crate) edgar_archives_url: String,

    /// Base URL for EDGAR data API
    pub(crate) edgar_data_url: String,

    /// Base URL for EDGAR files
    pub(crate) edgar_files_url: String,
}

impl Edgar {
    /// Creates a new Edgar client identified by the requester's name and email.
    ///
    /// The SEC requires a descriptive identifier on all requests so they can
    /// contact you if your traffic causes problems; the two values are joined
    /// into a `"<name> <email>"` user agent. Both must be non-empty.
    ///
    /// # Errors
    ///
    /// Returns `EdgarError::ConfigError` if either value is empty or the
    /// resulting header is not a valid HTTP header value.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use edgar_statements::Edgar;
    /// let edgar = Edgar::new("Jane Doe", "jane@example.com")?;
    /// ```
    pub fn new(name: &str, email: &str) -> Result<Self> {
        if name.trim().is_empty() || email.trim().is_empty() {
            return Err(EdgarError::ConfigError(
                "Both name and email are required for the SEC user agent".to_string(),
            ));
        }

        let config = EdgarConfig {
            user_agent: format!("{} {}", name.trim(), email.trim()),
            ..EdgarConfig::default()
        };
        Self::with_config(config)
    }

    /// Creates an Edgar client with custom configuration settings.
    ///
    /// Use this constructor when you need a different timeout or base URLs,
    /// for example to point the client at a mock server in tests.
    ///
    /// # Errors
    ///
    /// Returns `EdgarError::ConfigError` if the user agent is malformed or the
    /// HTTP client cannot be built with the provided configuration.
    pub fn with_config(config: EdgarConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| EdgarError::ConfigError(format!("Invalid user agent: {}", e)))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| EdgarError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        let EdgarUrls {
            archives,
            data,
            files,
        } = config.base_urls;

        Ok(Edgar {
            client,
            edgar_archives_url: archives,
            edgar_data_url: data,
            edgar_files_url: files,
        })
    }

    /// Fetches text content from a URL.
    ///
    /// This is the primitive every operation in the crate goes through. It
    /// issues exactly one request; retry policy is the caller's concern.
    ///
    /// # Arguments
    ///
    /// * `url` - The fully-qualified URL to fetch
    ///
    /// # Errors
    ///
    /// * `EdgarError::RequestError` - Connection failure or timeout before a
    ///   status was received
    /// * `EdgarError::HttpStatus` - Any non-success status code, including 404
    ///   and 429, with the status and URL preserved for diagnosis
    pub async fn get(&self, url: &str) -> Result<String> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(EdgarError::RequestError)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("GET {} failed with status {}", url, status);
            return Err(EdgarError::HttpStatus {
                status,
                url: url.to_string(),
            });
        }

        response.text().await.map_err(EdgarError::RequestError)
    }

    /// Returns the base URL for EDGAR archives.
    pub fn archives_url(&self) -> &str {
        &self.edgar_archives_url
    }

    /// Returns the base URL for EDGAR data.
    pub fn data_url(&self) -> &str {
        &self.edgar_data_url
    }

    /// Returns the base URL for EDGAR files.
    pub fn files_url(&self) -> &str {
        &self.edgar_files_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_identity() {
        assert!(matches!(
            Edgar::new("", "jane@example.com"),
            Err(EdgarError::ConfigError(_))
        ));
        assert!(matches!(
            Edgar::new("Jane Doe", "   "),
            Err(EdgarError::ConfigError(_))
        ));
    }

    #[test]
    fn test_new_builds_default_urls() {
        let edgar = Edgar::new("Jane Doe", "jane@example.com").unwrap();
        assert_eq!(edgar.data_url(), "https://data.sec.gov");
        assert_eq!(edgar.files_url(), "https://www.sec.gov/files");
        assert_eq!(edgar.archives_url(), "https://www.sec.gov/Archives/edgar");
    }
}
