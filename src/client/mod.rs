//! Client layer: builds request URLs, runs the HTTP round trip and maps transport ↔ domain.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::{
    Command, Credentials, GatewayResponse, MessageDraft, Payload, QueuePriority,
    ReceivedMessage, SendResponse, StatusCode, ValidationError,
};
use crate::transport::TransportError;

const DEFAULT_BASE_URL: &str = "https://www.smsc.com.ar/api";
const DEFAULT_API_VERSION: &str = "0.3";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    /// POST to `url` with no body.
    fn post<'a>(
        &'a self,
        url: &'a Url,
        content_type: &'static str,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post<'a>(
        &'a self,
        url: &'a Url,
        content_type: &'static str,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url.clone())
                .header(reqwest::header::CONTENT_TYPE, content_type)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SmscClient`].
///
/// A call that completes without any response is not an error: the query methods
/// return `Ok(None)` for it.
pub enum SmscError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("could not reach SMSC, HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// The body is JSON but not an object (SMSC answers with an array when it does not
    /// recognize a request).
    #[error("unrecognized response {raw:?} for query {query:?}")]
    UnparseableResponse { raw: String, query: String },

    /// Response body or payload could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// SMSC answered with a non-success `code`.
    #[error("gateway error: {message} ({code})")]
    Gateway { code: StatusCode, message: String },

    /// The configured base URL or API version does not form a valid URL.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`SmscClient`].
///
/// Use this when you need to customize the endpoint, API version, timeout, user-agent,
/// or start from a prepared [`MessageDraft`].
pub struct SmscClientBuilder {
    credentials: Credentials,
    draft: MessageDraft,
    base_url: String,
    api_version: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SmscClientBuilder {
    /// Create a builder with the default endpoint and no timeout/user-agent override.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            draft: MessageDraft::default(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_version: DEFAULT_API_VERSION.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API base URL (`https://www.smsc.com.ar/api`). The version is
    /// appended as a path segment.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the API version path segment (`0.3`).
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Start the client with `draft` as its outbound message.
    pub fn draft(mut self, draft: MessageDraft) -> Self {
        self.draft = draft;
        self
    }

    /// Build a [`SmscClient`].
    pub fn build(self) -> Result<SmscClient, SmscError> {
        let endpoint = endpoint_url(&self.base_url, &self.api_version);
        Url::parse(&endpoint)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| SmscError::Transport(Box::new(err)))?;

        Ok(SmscClient {
            credentials: self.credentials,
            endpoint,
            draft: self.draft,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

fn endpoint_url(base_url: &str, api_version: &str) -> String {
    format!("{}/{}/", base_url.trim_end_matches('/'), api_version)
}

#[derive(Clone)]
/// High-level SMSC client.
///
/// Holds the credentials and an outbound [`MessageDraft`]. Every query method
/// performs one HTTP POST to `https://www.smsc.com.ar/api/0.3/` and returns the
/// decoded reply directly, so overlapping calls on the same client never see each
/// other's responses.
///
/// Query methods return:
/// - `Ok(Some(_))` when SMSC answered with code 200,
/// - `Ok(None)` when the HTTP call succeeded but carried no response,
/// - [`SmscError::Gateway`] when SMSC answered with another code,
/// - [`SmscError::HttpStatus`], [`SmscError::UnparseableResponse`] or
///   [`SmscError::Parse`] when the round trip itself failed.
pub struct SmscClient {
    credentials: Credentials,
    endpoint: String,
    draft: MessageDraft,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for SmscClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmscClient")
            .field("credentials", &self.credentials)
            .field("endpoint", &self.endpoint)
            .field("draft", &self.draft)
            .finish_non_exhaustive()
    }
}

impl SmscClient {
    /// Create a client using the default endpoint.
    ///
    /// For more customization, use [`SmscClient::builder`].
    pub fn new(alias: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(alias, api_key),
            endpoint: endpoint_url(DEFAULT_BASE_URL, DEFAULT_API_VERSION),
            draft: MessageDraft::default(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(alias: impl Into<String>, api_key: impl Into<String>) -> SmscClientBuilder {
        SmscClientBuilder::new(Credentials::new(alias, api_key))
    }

    /// Resolved endpoint every command is posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Credentials sent with every request.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn alias(&self) -> &str {
        self.credentials.alias()
    }

    pub fn set_alias(&mut self, alias: impl Into<String>) {
        self.credentials.set_alias(alias);
    }

    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.credentials.set_api_key(api_key);
    }

    /// Outbound message used by [`SmscClient::send`].
    pub fn draft(&self) -> &MessageDraft {
        &self.draft
    }

    /// Mutable access to the outbound message.
    pub fn draft_mut(&mut self) -> &mut MessageDraft {
        &mut self.draft
    }

    /// Append a recipient to the draft: `area` alone, or `area-local`.
    pub fn add_recipient(&mut self, area: impl Into<String>, local: Option<&str>) {
        self.draft.add_recipient(area, local);
    }

    /// Replace the draft's message body.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.draft.set_message(message);
    }

    /// Set the draft's dedicated line; `0` removes it.
    pub fn set_line(&mut self, line: u32) {
        self.draft.set_line(line);
    }

    /// Set the draft's priority (`1..=7`); `0` removes it.
    pub fn set_priority(&mut self, priority: u8) -> Result<(), SmscError> {
        Ok(self.draft.set_priority(priority)?)
    }

    /// Execute a raw command and return the gateway envelope without checking its code.
    ///
    /// `params` are appended after `cmd` in order.
    pub async fn exec(
        &self,
        command: Option<Command>,
        params: Vec<(String, String)>,
    ) -> Result<Option<GatewayResponse>, SmscError> {
        let mut command_params = Vec::<(String, String)>::new();
        if let Some(command) = command {
            command_params.push((Command::FIELD.to_owned(), command.as_str().to_owned()));
        }
        command_params.extend(params);

        let query = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&command_params)
            .finish();

        let mut pairs = Vec::<(String, String)>::new();
        self.credentials.push_query_params(&mut pairs);
        pairs.extend(command_params);
        let url = Url::parse_with_params(&self.endpoint, &pairs)?;

        log::debug!(
            "dispatching SMSC command {}",
            command.map_or("<none>", Command::as_str)
        );

        let response = self
            .http
            .post(&url, FORM_CONTENT_TYPE)
            .await
            .map_err(SmscError::Transport)?;

        if !(200..=299).contains(&response.status) {
            log::warn!("SMSC answered with HTTP status {}", response.status);
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(SmscError::HttpStatus {
                status: response.status,
                body,
            });
        }

        let parsed = crate::transport::decode_envelope(&response.body).map_err(|err| match err {
            TransportError::NotAnObject { raw } => {
                log::warn!("unrecognized SMSC response for query {query}");
                SmscError::UnparseableResponse { raw, query }
            }
            other => SmscError::Parse(Box::new(other)),
        })?;

        match &parsed {
            Some(response) => log::debug!("SMSC answered with code {}", response.code),
            None => log::debug!("SMSC answered without a response"),
        }

        Ok(parsed)
    }

    /// Whether SMSC currently delivers without delays (`estado`).
    pub async fn system_status(&self) -> Result<Option<bool>, SmscError> {
        let status = self
            .query(
                Command::Status,
                Vec::new(),
                crate::transport::decode_system_status,
            )
            .await?;
        Ok(status.map(|status| status.estado))
    }

    /// Ask SMSC whether `area` (or `area-local`) is a valid number (`evalnumero`).
    pub async fn evaluate_number(
        &self,
        area: &str,
        local: Option<&str>,
    ) -> Result<Option<bool>, SmscError> {
        let validity = self
            .query(
                Command::EvaluateNumber,
                crate::transport::encode_evaluate_number_query(area, local),
                crate::transport::decode_number_validity,
            )
            .await?;
        Ok(validity.map(|validity| validity.estado))
    }

    /// Remaining message credits (`saldo`).
    pub async fn balance(&self) -> Result<Option<i64>, SmscError> {
        let balance = self
            .query(
                Command::Balance,
                Vec::new(),
                crate::transport::decode_balance,
            )
            .await?;
        Ok(balance.map(|balance| balance.mensajes))
    }

    /// Number of messages waiting in the outbound queue (`encolados`).
    pub async fn queued(&self, priority: QueuePriority) -> Result<Option<u64>, SmscError> {
        let queued = self
            .query(
                Command::Queued,
                crate::transport::encode_queued_query(priority),
                crate::transport::decode_queued,
            )
            .await?;
        Ok(queued.map(|queued| queued.mensajes))
    }

    /// Send the client's draft (`enviar`). The draft is left untouched.
    pub async fn send(&self) -> Result<Option<SendResponse>, SmscError> {
        self.send_draft(&self.draft).await
    }

    /// Send an explicit draft (`enviar`).
    pub async fn send_draft(
        &self,
        draft: &MessageDraft,
    ) -> Result<Option<SendResponse>, SmscError> {
        self.query(
            Command::Send,
            crate::transport::encode_send_query(draft),
            crate::transport::decode_send_response,
        )
        .await
    }

    /// Latest inbound messages newer than `last_id` (`recibidos`); `0` returns the
    /// most recent batch.
    pub async fn received(
        &self,
        last_id: u64,
    ) -> Result<Option<Vec<ReceivedMessage>>, SmscError> {
        self.query(
            Command::Received,
            crate::transport::encode_received_query(last_id),
            crate::transport::decode_received,
        )
        .await
    }

    async fn query<T>(
        &self,
        command: Command,
        params: Vec<(String, String)>,
        decode: fn(&serde_json::Value) -> Result<T, TransportError>,
    ) -> Result<Option<T>, SmscError> {
        let Some(response) = self.exec(Some(command), params).await? else {
            return Ok(None);
        };
        ensure_success(&response)?;
        decode(response.data())
            .map(Some)
            .map_err(|err| SmscError::Parse(Box::new(err)))
    }
}

fn ensure_success(response: &GatewayResponse) -> Result<(), SmscError> {
    if !response.is_success() {
        return Err(SmscError::Gateway {
            code: response.code,
            message: response.message.clone(),
        });
    }
    Ok(())
}

/// Decode the data of a response returned by [`SmscClient::exec`] into the shape
/// `command` returns.
///
/// Fails with [`SmscError::Gateway`] when the response carries a non-success code.
pub fn decode_payload(response: &GatewayResponse, command: Command) -> Result<Payload, SmscError> {
    ensure_success(response)?;
    crate::transport::decode_payload(command, response.data())
        .map_err(|err| SmscError::Parse(Box::new(err)))
}
