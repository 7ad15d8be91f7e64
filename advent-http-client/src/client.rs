//! HTTP client implementation

use crate::error::AdventError;
use reqwest::IntoUrl;
use reqwest::header::{COOKIE, HeaderValue};
use zeroize::Zeroize;

/// Host the client talks to unless a builder overrides it
pub const DEFAULT_BASE_URL: &str = "https://adventofcode.com";

/// Client downloading personal puzzle input
///
/// # Example
///
/// ```no_run
/// use advent_http_client::AdventClient;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AdventClient::new()?;
/// let input = client.get_input(2024, 1, "your_session_cookie")?;
/// println!("Input: {}", input);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct AdventClient {
    client: reqwest::blocking::Client,
    base_url: reqwest::Url,
}

impl AdventClient {
    /// Create a client for [`DEFAULT_BASE_URL`] with rustls and no redirects
    ///
    /// # Errors
    ///
    /// Returns `AdventError::ClientInit` if the HTTP client cannot be initialized.
    pub fn new() -> Result<Self, AdventError> {
        Self::builder().build()
    }

    /// Create a builder for configuring the client
    ///
    /// # Example
    ///
    /// ```no_run
    /// use advent_http_client::AdventClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = AdventClient::builder()
    ///     .base_url("http://localhost:1234")?
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> AdventClientBuilder {
        AdventClientBuilder::new()
    }

    /// The host requests are sent to
    pub fn base_url(&self) -> &reqwest::Url {
        &self.base_url
    }

    /// Build a sensitive `Cookie` header value, wiping the temporary string
    fn create_cookie_header(session: &str) -> Result<HeaderValue, AdventError> {
        let mut cookie_string = format!("session={}", session);
        let header_value = HeaderValue::from_bytes(cookie_string.as_bytes());
        cookie_string.zeroize();

        let mut header_value = header_value
            .map_err(|_| AdventError::ClientInit("Invalid session cookie format".to_string()))?;
        header_value.set_sensitive(true);
        Ok(header_value)
    }

    /// Fetch puzzle input for a specific year and day
    ///
    /// Sends `GET <base>/<year>/day/<day>/input` and returns the body verbatim.
    ///
    /// # Arguments
    ///
    /// * `year` - The puzzle year (e.g., 2023)
    /// * `day` - The day number (1-25)
    /// * `session` - The session cookie value, without the `session=` prefix
    ///
    /// # Errors
    ///
    /// * `AdventError::Request` - Network error
    /// * `AdventError::InvalidStatus` - Any non-2xx answer, including redirects
    ///   to the login page when the session expired
    /// * `AdventError::Encoding` - Response is not valid UTF-8
    pub fn get_input(&self, year: u16, day: u8, session: &str) -> Result<String, AdventError> {
        let cookie_header = Self::create_cookie_header(session)?;

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AdventError::ClientInit("Cannot modify base URL path".to_string()))?
            .clear()
            .extend(&[&year.to_string(), "day", &day.to_string(), "input"]);

        log::debug!("Fetching input from {}", url);
        let response = self.client.get(url).header(COOKIE, cookie_header).send()?;

        if !response.status().is_success() {
            return Err(AdventError::InvalidStatus {
                status: response.status(),
            });
        }

        response.text().map_err(|_| AdventError::Encoding)
    }
}

/// Builder for configuring an [`AdventClient`]
///
/// The redirect policy is always forced to `Policy::none()` so an expired
/// session shows up as a status error rather than the login page's HTML.
///
/// # Example
///
/// ```no_run
/// use advent_http_client::AdventClient;
/// use std::time::Duration;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AdventClient::builder()
///     .base_url("http://localhost:1234")?
///     .client_builder(
///         reqwest::blocking::Client::builder()
///             .timeout(Duration::from_secs(10))
///     )
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct AdventClientBuilder {
    base_url: Option<reqwest::Url>,
    client_builder: Option<reqwest::blocking::ClientBuilder>,
}

impl AdventClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom base URL, validated immediately
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn base_url(mut self, url: impl IntoUrl) -> Result<Self, AdventError> {
        self.base_url = Some(url.into_url()?);
        Ok(self)
    }

    /// Set a custom HTTP client builder (timeouts, proxies, user agent)
    ///
    /// The redirect policy is overridden regardless of this configuration.
    pub fn client_builder(mut self, builder: reqwest::blocking::ClientBuilder) -> Self {
        self.client_builder = Some(builder);
        self
    }

    /// Build the client
    ///
    /// # Errors
    ///
    /// Returns `AdventError::ClientInit` if the HTTP client cannot be initialized.
    pub fn build(self) -> Result<AdventClient, AdventError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => reqwest::Url::parse(DEFAULT_BASE_URL)
                .map_err(|e| AdventError::ClientInit(e.to_string()))?,
        };

        let builder = self
            .client_builder
            .unwrap_or_else(|| reqwest::blocking::Client::builder().use_rustls_tls());

        let client = builder
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| AdventError::ClientInit(e.to_string()))?;

        Ok(AdventClient { client, base_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::time::Duration;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_base_url_configuration(
            scheme in prop::sample::select(vec!["http", "https"]),
            host in "[a-z]{3,10}",
            port in 1000u16..10000u16,
        ) {
            let base_url = format!("{}://{}:{}", scheme, host, port);

            let client = AdventClient::builder()
                .base_url(&base_url)
                .unwrap()
                .build()
                .unwrap();

            prop_assert_eq!(client.base_url().scheme(), scheme);
            prop_assert_eq!(client.base_url().host_str(), Some(host.as_str()));
            prop_assert_eq!(client.base_url().port(), Some(port));
        }

        #[test]
        fn prop_custom_client_builder_configuration(timeout_secs in 1u64..120u64) {
            let custom_builder = reqwest::blocking::Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .use_rustls_tls();

            let result = AdventClient::builder().client_builder(custom_builder).build();

            prop_assert!(result.is_ok());
        }
    }

    #[test]
    fn test_default_base_url() {
        let client = AdventClient::builder().build().unwrap();
        assert_eq!(client.base_url().as_str(), "https://adventofcode.com/");
    }

    #[test]
    fn test_new_uses_default_base_url() {
        let client = AdventClient::new().unwrap();
        assert_eq!(client.base_url().as_str(), "https://adventofcode.com/");
    }

    #[test]
    fn test_invalid_base_url() {
        let result = AdventClient::builder().base_url("not a valid url");
        assert!(result.is_err());
    }

    #[test]
    fn test_cookie_header_is_sensitive() {
        let header = AdventClient::create_cookie_header("abc123").unwrap();
        assert!(header.is_sensitive());
        assert_eq!(header.to_str().unwrap(), "session=abc123");
    }

    #[test]
    fn test_cookie_header_rejects_control_characters() {
        let result = AdventClient::create_cookie_header("abc\n123");
        assert!(matches!(result, Err(AdventError::ClientInit(_))));
    }

    #[test]
    fn test_redirect_is_not_followed() {
        let mut server = mockito::Server::new();

        let login_mock = server
            .mock("GET", "/")
            .with_status(200)
            .with_body("<html><body>Log in</body></html>")
            .expect(0)
            .create();

        let input_mock = server
            .mock("GET", "/2023/day/10/input")
            .with_status(302)
            .with_header("location", "/")
            .expect(1)
            .create();

        let client = AdventClient::builder()
            .base_url(server.url())
            .unwrap()
            .build()
            .unwrap();

        let result = client.get_input(2023, 10, "expired");
        match result {
            Err(AdventError::InvalidStatus { status }) => assert_eq!(status.as_u16(), 302),
            other => panic!("Expected InvalidStatus, got {:?}", other),
        }

        login_mock.assert();
        input_mock.assert();
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_input_url_and_cookie(
            year in 2015u16..2030u16,
            day in 1u8..=25u8,
            session in "[a-f0-9]{32,128}",
        ) {
            let mut server = mockito::Server::new();

            let expected_path = format!("/{}/day/{}/input", year, day);
            let mock = server.mock("GET", expected_path.as_str())
                .match_header("cookie", format!("session={}", session).as_str())
                .with_status(200)
                .with_body("test input data\n")
                .expect(1)
                .create();

            let client = AdventClient::builder()
                .base_url(server.url())
                .unwrap()
                .build()
                .unwrap();

            let result = client.get_input(year, day, &session);

            prop_assert!(result.is_ok(), "get_input failed for {} day {}", year, day);
            mock.assert();
            prop_assert_eq!(result.unwrap(), "test input data\n");
        }

        #[test]
        fn prop_non_success_status_error_handling(
            year in 2015u16..2030u16,
            day in 1u8..=25u8,
            session in "[a-f0-9]{32,128}",
            status_code in prop::sample::select(vec![400, 401, 403, 404, 429, 500, 502, 503, 504]),
        ) {
            let mut server = mockito::Server::new();

            let expected_path = format!("/{}/day/{}/input", year, day);
            let mock = server.mock("GET", expected_path.as_str())
                .with_status(status_code)
                .with_body("Error response")
                .expect(1)
                .create();

            let client = AdventClient::builder()
                .base_url(server.url())
                .unwrap()
                .build()
                .unwrap();

            match client.get_input(year, day, &session) {
                Err(AdventError::InvalidStatus { status }) => {
                    prop_assert_eq!(status.as_u16(), status_code as u16);
                }
                other => prop_assert!(false, "Expected InvalidStatus, got {:?}", other),
            }

            mock.assert();
        }
    }
}
