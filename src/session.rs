use crate::{ApiWarning, Config, Language, RequestParams, SessionBuilder, WikibaseError};
use reqwest::header::{HeaderMap, HeaderName};
use serde_json::Value;
use std::{fmt, sync::Arc, time::Duration};
use tokio::sync::RwLock;
use tracing::{debug, warn};

const WIKIDATA_API: &str = "https://www.wikidata.org/w/api.php";
const TEST_WIKIDATA_API: &str = "https://test.wikidata.org/w/api.php";

static API_USER_AGENT: HeaderName = HeaderName::from_static("api-user-agent");

/// For calls that need no parameters beyond the action.
pub const NO_PARAMS: [(&str, &str); 0] = [];

/// The role a logged-in session asserts on every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assertion {
    Bot,
    User,
}

impl Assertion {
    /// Returns the value of the `assert` parameter.
    pub const fn as_str(&self) -> &str {
        match self {
            Assertion::Bot => "bot",
            Assertion::User => "user",
        }
    }
}

/// A connection to one Wikibase Action API endpoint, with its login state.
#[derive(Debug, Clone)]
pub struct Session {
    client: reqwest::Client,
    api_url: reqwest::Url,
    language: Language,
    site: String,
    basic_auth: Option<(String, String)>,
    is_bot: bool,
    user_agent: String,
    maxlag: Option<u32>,
    throttle_delay: Duration,
    config: Config,
    user: Option<String>,
    assertion: Option<Assertion>,
    warnings: Arc<RwLock<Vec<ApiWarning>>>,
}

impl Session {
    /// Returns a `SessionBuilder` for the Action API URL.
    pub fn builder<S: Into<String>>(api_url: S) -> SessionBuilder {
        SessionBuilder::new(api_url)
    }

    /// A session for Wikidata, with default settings.
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn wikidata() -> Result<Self, WikibaseError> {
        Self::builder(WIKIDATA_API).build()
    }

    /// A session for the Wikidata test instance, with default settings.
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn test_wikidata() -> Result<Self, WikibaseError> {
        Self::builder(TEST_WIKIDATA_API).build()
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        client: reqwest::Client,
        api_url: reqwest::Url,
        language: Language,
        site: String,
        basic_auth: Option<(String, String)>,
        is_bot: bool,
        user_agent: String,
        maxlag: Option<u32>,
        throttle_delay: Duration,
        config: Config,
    ) -> Self {
        Self {
            client,
            api_url,
            language,
            site,
            basic_auth,
            is_bot,
            user_agent,
            maxlag,
            throttle_delay,
            config,
            user: None,
            assertion: None,
            warnings: Arc::new(RwLock::new(vec![])),
        }
    }

    /// Sends a GET request for `action`. See `api_call`.
    /// # Errors
    /// See `api_call`.
    pub async fn get<I, K, V>(&self, action: &str, params: I) -> Result<Value, WikibaseError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.api_call(reqwest::Method::GET, action, params).await
    }

    /// Sends a POST request for `action`. See `api_call`.
    /// # Errors
    /// See `api_call`.
    pub async fn post<I, K, V>(&self, action: &str, params: I) -> Result<Value, WikibaseError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.api_call(reqwest::Method::POST, action, params).await
    }

    /// Calls the API and returns the decoded JSON body.
    ///
    /// The session's standard parameters (`format`, `uselang`, `maxlag`, `assert`) are merged
    /// with `params`, and `action` is set last. Only GET and POST are supported.
    /// Server warnings are collected (see `warnings`); they do not fail the call.
    /// # Errors
    /// - `Config` for an unsupported method
    /// - `Transport` if the request fails or the body is not JSON
    /// - `Api` if the server reports an error, `Protocol` if that error is malformed
    pub async fn api_call<I, K, V>(
        &self,
        method: reqwest::Method,
        action: &str,
        params: I,
    ) -> Result<Value, WikibaseError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let params = self.default_params().with_all(params).with("action", action);
        let request = self.request_builder(&method, &params)?.build()?;
        if !self.throttle_delay.is_zero() {
            tokio::time::sleep(self.throttle_delay).await;
        }
        debug!(action, %method, "API call");
        let response = self.client.execute(request).await?;
        let body = response.text().await?;
        let j: Value = serde_json::from_str(&body)?;
        self.check_response(action, j).await
    }

    fn default_params(&self) -> RequestParams {
        let mut params = RequestParams::default()
            .with("format", "json")
            .with("uselang", "user");
        if let Some(maxlag) = self.maxlag {
            params = params.with("maxlag", maxlag.to_string());
        }
        if let Some(assertion) = self.assertion {
            params = params.with("assert", assertion.as_str());
        }
        params
    }

    fn request_builder(
        &self,
        method: &reqwest::Method,
        params: &RequestParams,
    ) -> Result<reqwest::RequestBuilder, WikibaseError> {
        let url = self.api_url.clone();
        let builder = match *method {
            reqwest::Method::GET => self.client.get(url).query(params),
            reqwest::Method::POST => self.client.post(url).form(params),
            _ => {
                return Err(WikibaseError::Config(format!(
                    "unsupported HTTP method {method}, use GET or POST"
                )))
            }
        };
        let builder = builder.headers(self.headers()?);
        Ok(match &self.basic_auth {
            Some((user, secret)) => builder.basic_auth(user, Some(secret)),
            None => builder,
        })
    }

    /// Returns a `HeaderMap` with the user agent, sent both as `User-Agent` and `Api-User-Agent`
    fn headers(&self) -> Result<HeaderMap, WikibaseError> {
        let mut headers = HeaderMap::new();
        headers.insert(reqwest::header::USER_AGENT, self.user_agent.parse()?);
        headers.insert(API_USER_AGENT.clone(), self.user_agent.parse()?);
        Ok(headers)
    }

    /// Collects warnings, then turns an `error` object into an `Api` (or `Protocol`) error.
    async fn check_response(&self, action: &str, j: Value) -> Result<Value, WikibaseError> {
        if let Some(warnings) = j.get("warnings") {
            let warnings = ApiWarning::from_json(warnings);
            for warning in &warnings {
                warn!(action, module = warning.module(), "{}", warning.text());
            }
            self.warnings.write().await.extend(warnings);
        }
        if let Some(error) = j.get("error") {
            return Err(match (error["code"].as_str(), error["info"].as_str()) {
                (Some(code), Some(info)) => WikibaseError::Api {
                    code: code.to_string(),
                    info: info.to_string(),
                    action: action.to_string(),
                },
                _ => WikibaseError::protocol("malformed error", error),
            });
        }
        Ok(j)
    }

    /// Probes the endpoint with a `wbparsevalue` call, which only a working Wikibase API answers.
    /// # Errors
    /// Returns an `Endpoint` error for any failure, including transport errors.
    pub async fn check_health(&self) -> Result<(), WikibaseError> {
        let endpoint = |reason: String| WikibaseError::Endpoint {
            api_url: self.api_url.to_string(),
            reason,
        };
        let j = self
            .get(
                "wbparsevalue",
                [("datatype", "time"), ("values", "1999-12-31|now")],
            )
            .await
            .map_err(|e| endpoint(e.to_string()))?;
        if j["results"].is_array() {
            Ok(())
        } else {
            Err(endpoint("response has no results".to_string()))
        }
    }

    /// Logs in with the session's bot setting, refusing non-https endpoints.
    /// # Errors
    /// See `login_with`.
    pub async fn login(&mut self, user: &str, secret: &str) -> Result<(), WikibaseError> {
        self.login_with(user, secret, None, false).await
    }

    /// Logs in with a user name and password (or bot password).
    ///
    /// `is_bot`, if given, replaces the session's bot setting. The secret is only used for the
    /// two login requests and is not kept. After a successful login, every request asserts
    /// `bot` or `user`.
    /// # Errors
    /// - `Config` if user or secret is empty, or the endpoint is not https and `force_insecure` is false
    /// - `Account` if the server does not accept the login
    /// - any error of the confirmation query, after which the session is logged out again
    pub async fn login_with(
        &mut self,
        user: &str,
        secret: &str,
        is_bot: Option<bool>,
        force_insecure: bool,
    ) -> Result<(), WikibaseError> {
        if user.is_empty() || secret.is_empty() {
            return Err(WikibaseError::Config(
                "login needs a user name and a password".to_string(),
            ));
        }
        if !force_insecure && self.api_url.scheme() != "https" {
            return Err(WikibaseError::Config(format!(
                "refusing insecure login to {}",
                self.api_url
            )));
        }
        if let Some(is_bot) = is_bot {
            self.is_bot = is_bot;
        }
        self.user = None;
        self.assertion = None;

        let j = self
            .post("login", [("lgname", user), ("lgpassword", secret)])
            .await?;
        let token = j["login"]["token"]
            .as_str()
            .ok_or_else(|| WikibaseError::protocol("no login token", &j))?
            .to_string();
        let j = self
            .post(
                "login",
                [
                    ("lgname", user),
                    ("lgpassword", secret),
                    ("lgtoken", token.as_str()),
                ],
            )
            .await?;
        let result = j["login"]["result"]
            .as_str()
            .ok_or_else(|| WikibaseError::protocol("no login result", &j))?;
        if result != "Success" {
            return Err(WikibaseError::Account {
                user: user.to_string(),
                result: result.to_string(),
            });
        }

        let assertion = if self.is_bot {
            Assertion::Bot
        } else {
            Assertion::User
        };
        self.user = Some(user.to_string());
        self.assertion = Some(assertion);
        debug!(user, assertion = assertion.as_str(), "logged in");

        // The session cookie must now carry the login
        if let Err(e) = self.get("query", NO_PARAMS).await {
            self.user = None;
            self.assertion = None;
            return Err(e);
        }
        Ok(())
    }

    /// Logs out. Does nothing if no user is logged in through `login`; a login carried only
    /// by the cookies of a client passed to `SessionBuilder::with_client` stays open on the server.
    /// # Errors
    /// Returns an error if the CSRF token or the logout call fails; the session is logged out locally regardless.
    pub async fn logout(&mut self) -> Result<(), WikibaseError> {
        self.assertion = None;
        let Some(user) = self.user.take() else {
            return Ok(());
        };
        debug!(user = user.as_str(), "logging out");
        let token = self.csrf_token().await?;
        self.post("logout", [("token", token)]).await?;
        Ok(())
    }

    /// Fetches a CSRF token for the current session.
    /// # Errors
    /// Returns an error if the call fails or the response has no token.
    pub async fn csrf_token(&self) -> Result<String, WikibaseError> {
        let j = self
            .get("query", [("meta", "tokens"), ("type", "csrf")])
            .await?;
        j["query"]["tokens"]["csrftoken"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| WikibaseError::protocol("no CSRF token", &j))
    }

    /// Returns all warnings collected so far.
    pub async fn warnings(&self) -> Vec<ApiWarning> {
        self.warnings.read().await.clone()
    }

    /// Returns and clears all warnings collected so far.
    pub async fn take_warnings(&self) -> Vec<ApiWarning> {
        std::mem::take(&mut *self.warnings.write().await)
    }

    /// The logged-in user, if any.
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub const fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub const fn assertion(&self) -> Option<Assertion> {
        self.assertion
    }

    pub const fn is_bot(&self) -> bool {
        self.is_bot
    }

    pub fn api_url(&self) -> &str {
        self.api_url.as_str()
    }

    pub const fn language(&self) -> &Language {
        &self.language
    }

    pub fn site(&self) -> &str {
        &self.site
    }

    pub const fn maxlag(&self) -> Option<u32> {
        self.maxlag
    }

    pub const fn throttle_delay(&self) -> Duration {
        self.throttle_delay
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    pub const fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Wikibase session at {}>", self.api_url)
    }
}
