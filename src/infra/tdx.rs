use async_trait::async_trait;
use reqwest::{
    Client,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde::Serialize;

use crate::config::Credentials;
use crate::domain::query::SearchFilter;
use crate::domain::ticket::RawTicket;
use crate::error::{AppError, AppResult};
use crate::services::TicketSearchService;

#[derive(Debug)]
pub struct TdxClient {
    http: Client,
    base_url: String,
    app_id: u32,
    token: Option<String>,
}

impl TdxClient {
    pub fn new(credentials: &Credentials) -> Self {
        Self {
            http: Client::new(),
            base_url: credentials.base_url.trim_end_matches('/').to_string(),
            app_id: credentials.app_id,
            token: None,
        }
    }

    /// Builds a client and performs the login exchange in one step.
    pub async fn connect(credentials: &Credentials) -> AppResult<Self> {
        let mut client = Self::new(credentials);
        client.authenticate(credentials).await?;
        Ok(client)
    }

    /// Exchanges username/password for a bearer token. The token lives for
    /// the rest of the process; there is no refresh.
    pub async fn authenticate(&mut self, credentials: &Credentials) -> AppResult<()> {
        let request_body = LoginRequest {
            username: &credentials.username,
            password: &credentials.password,
        };

        let response = self
            .http
            .post(self.login_endpoint())
            .header(CONTENT_TYPE, "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|err| AppError::Authentication(format!("failed to call login: {err}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| AppError::Authentication(format!("failed to read login response: {err}")))?;

        if !status.is_success() {
            return Err(AppError::Authentication(format!(
                "login responded with {status}: {body}"
            )));
        }

        // The token arrives as quoted plain text.
        let token = body.trim().trim_matches('"').trim();
        if token.is_empty() {
            return Err(AppError::Authentication(
                "login returned an empty token".to_string(),
            ));
        }
        self.token = Some(token.to_string());
        Ok(())
    }

    fn headers(&self) -> AppResult<HeaderMap> {
        let token = self.token.as_deref().ok_or_else(|| {
            AppError::Logic("no token held; authenticate before issuing requests".to_string())
        })?;

        let bearer = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|err| AppError::Logic(format!("token is not a valid header value: {err}")))?;

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    fn login_endpoint(&self) -> String {
        format!("{}/api/auth/login", self.base_url)
    }

    fn search_endpoint(&self) -> String {
        format!("{}/api/{}/tickets/search", self.base_url, self.app_id)
    }
}

#[async_trait]
impl TicketSearchService for TdxClient {
    async fn search(&self, filter: &SearchFilter) -> AppResult<Vec<RawTicket>> {
        let response = self
            .http
            .post(self.search_endpoint())
            .headers(self.headers()?)
            .json(filter)
            .send()
            .await
            .map_err(|err| AppError::Fetch(format!("failed to call ticket search: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(AppError::Fetch(format!(
                "ticket search responded with {status}: {body}"
            )));
        }

        response
            .json::<Vec<RawTicket>>()
            .await
            .map_err(|err| AppError::Fetch(format!("failed to parse ticket search response: {err}")))
    }
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    #[serde(rename = "UserName")]
    username: &'a str,
    #[serde(rename = "Password")]
    password: &'a str,
}
