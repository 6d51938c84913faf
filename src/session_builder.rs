use crate::{Config, Language, Session, WikibaseError};
use std::time::Duration;

/// The default user agent
const DEFAULT_USER_AGENT: &str = "Rust Wikibase Action API";

/// The default language for labels and `uselang`
const DEFAULT_LANGUAGE: &str = "en";

/// The default site for sitelink lookups
const DEFAULT_SITE: &str = "enwiki";

/// The default `maxlag`, in seconds
const DEFAULT_MAXLAG: u32 = 5;

#[derive(Debug)]
pub struct SessionBuilder {
    api_url: String,
    client: Option<reqwest::Client>,
    language: String,
    site: String,
    credentials: Option<(String, String)>,
    is_bot: bool,
    user_agent: Option<String>,
    maxlag: Option<u32>,
    throttle_delay: Duration,
    config: Config,
}

impl SessionBuilder {
    /// Starts a new builder for the Action API URL, usually ending in "api.php".
    pub fn new<S: Into<String>>(api_url: S) -> Self {
        Self {
            api_url: api_url.into(),
            client: None,
            language: DEFAULT_LANGUAGE.to_string(),
            site: DEFAULT_SITE.to_string(),
            credentials: None,
            is_bot: false,
            user_agent: None,
            maxlag: Some(DEFAULT_MAXLAG),
            throttle_delay: Duration::ZERO,
            config: Config::default(),
        }
    }

    /// Sets the default language. Default is "en".
    pub fn with_language<S: Into<String>>(mut self, language: S) -> Self {
        self.language = language.into();
        self
    }

    /// Sets the default site for title lookups. Default is "enwiki".
    pub fn with_site<S: Into<String>>(mut self, site: S) -> Self {
        self.site = site.into();
        self
    }

    /// Sets HTTP basic authentication for every request.
    /// This is separate from the MediaWiki account used by `Session::login`.
    pub fn with_credentials<S1: Into<String>, S2: Into<String>>(
        mut self,
        user: S1,
        secret: S2,
    ) -> Self {
        self.credentials = Some((user.into(), secret.into()));
        self
    }

    /// Marks the session as a bot session; login will then assert `bot` instead of `user`.
    pub const fn with_bot(mut self, is_bot: bool) -> Self {
        self.is_bot = is_bot;
        self
    }

    /// Sets the user agent. By default, the user agent is "Rust Wikibase Action API; {`package_name`}/{`package_version`}"
    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets `maxlag` in seconds, or `None` to not send it. Default is 5.
    pub const fn with_maxlag(mut self, maxlag: Option<u32>) -> Self {
        self.maxlag = maxlag;
        self
    }

    /// Sets a fixed delay before every request. Default is none.
    pub const fn with_throttle_delay(mut self, throttle_delay: Duration) -> Self {
        self.throttle_delay = throttle_delay;
        self
    }

    /// Sets the `reqwest::Client`. By default, a new client with a cookie store is created.
    /// A custom client needs its own cookie store for login to persist.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Sets the entity id letters. Default is the Wikidata configuration.
    pub const fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Builds the `Session`. No request is sent.
    /// The builder gets consumed by this operation.
    /// # Errors
    /// Returns a `Config` error for an invalid URL, language code, or credentials pair.
    pub fn build(self) -> Result<Session, WikibaseError> {
        let api_url = Self::validate_api_url(&self.api_url)?;
        let language = Language::try_new(self.language.as_str())
            .map_err(|e| WikibaseError::Config(format!("invalid language code: {e}")))?;
        if let Some((user, secret)) = &self.credentials {
            if user.is_empty() || secret.is_empty() {
                return Err(WikibaseError::Config(
                    "credentials need both a user name and a secret".to_string(),
                ));
            }
        }
        let client = match self.client {
            Some(client) => client,
            None => reqwest::Client::builder().cookie_store(true).build()?,
        };
        let user_agent = self.user_agent.unwrap_or_else(Self::default_user_agent);
        Ok(Session::new(
            client,
            api_url,
            language,
            self.site,
            self.credentials,
            self.is_bot,
            user_agent,
            self.maxlag,
            self.throttle_delay,
            self.config,
        ))
    }

    /// Checks that the API URL is an absolute http(s) URL.
    fn validate_api_url(api_url: &str) -> Result<reqwest::Url, WikibaseError> {
        let url = reqwest::Url::parse(api_url)
            .map_err(|e| WikibaseError::Config(format!("invalid API URL '{api_url}': {e}")))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(WikibaseError::Config(format!(
                "unsupported URL scheme '{scheme}' in '{api_url}'"
            ))),
        }
    }

    /// Returns the default user agent, a versioned string based on `DEFAULT_USER_AGENT`.
    fn default_user_agent() -> String {
        format!(
            "{DEFAULT_USER_AGENT}; {}/{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        )
    }
}
