/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::TwitterError;
use crate::v1::oauth::Creds;
use async_trait::async_trait;
use bytes::Bytes;
use num_enum::TryFromPrimitive;
use reqwest::{Method, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// A fully built request, ready to be signed and sent
#[derive(Debug, Clone)]
pub struct TwitterRequest {
    pub method: Method,
    pub url: Url,
}

impl TwitterRequest {
    pub fn get(url: Url) -> Self {
        Self {
            method: Method::GET,
            url,
        }
    }

    pub fn post(url: Url) -> Self {
        Self {
            method: Method::POST,
            url,
        }
    }
}

/// Raw response of a request
#[derive(Debug, Clone)]
pub struct TwitterResponse {
    pub status: u16,

    /// Header names are lower cased
    pub headers: HashMap<String, String>,

    pub body: Bytes,
}

impl TwitterResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_lowercase(), value.to_string());
        self
    }

    pub fn is_success_status_code(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Extracts the message out of a Twitter error body, falling back to the raw body
    fn error_message(&self) -> String {
        serde_json::from_slice::<ErrorsBody>(&self.body)
            .ok()
            .and_then(|b| b.errors.into_iter().next())
            .map(|e| format!("{} (code {})", e.message, e.code))
            .unwrap_or_else(|| String::from_utf8_lossy(&self.body).into_owned())
    }
}

/// Envelope pairing the raw response with its deserialized payload
#[derive(Debug, Clone)]
pub struct TwitterResult<T> {
    pub response: TwitterResponse,
    pub payload: Option<T>,
}

/// Sends requests to the remote API.
///
/// [`ApiClient`] is the reqwest backed implementation. Alternative implementations can be handed
/// to [`crate::v1::TwitterClient::with_transport`].
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends the request and returns the response whatever its status
    async fn send(&self, request: TwitterRequest) -> Result<TwitterResponse, TwitterError>;
}

/// Directly communicates with the API.
#[derive(Default, Clone)]
pub struct ApiClient {
    creds: Creds,
    https_client: reqwest::Client,
}

impl ApiClient {
    /// Creates a new Twitter client instance from provided tokens
    pub fn new(creds: Creds) -> Self {
        Self {
            creds,
            https_client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Transport for ApiClient {
    async fn send(&self, request: TwitterRequest) -> Result<TwitterResponse, TwitterError> {
        let authorization = self.creds.authorization_header(&request.method, &request.url)?;
        let resp = self
            .https_client
            .request(request.method.clone(), request.url.clone())
            .header("Accept", "application/json")
            .header("Authorization", authorization)
            .send()
            .await?;

        let status = resp.status().as_u16();
        log::debug!("{} {} -> {}", request.method, request.url.path(), status);

        let headers = resp
            .headers()
            .iter()
            .filter_map(|(k, v)| {
                v.to_str()
                    .ok()
                    .map(|v| (k.as_str().to_lowercase(), v.to_string()))
            })
            .collect();
        let body = resp.bytes().await?;
        Ok(TwitterResponse {
            status,
            headers,
            body,
        })
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("creds", &self.creds)
            .finish()
    }
}

/// Sends the request, failing when the response is not successful or has no usable payload
pub(crate) async fn execute_query<T: DeserializeOwned>(
    transport: &dyn Transport,
    request: TwitterRequest,
) -> Result<TwitterResult<T>, TwitterError> {
    let response = transport.send(request).await?;
    if !response.is_success_status_code() {
        return Err(unsuccessful_response(&response));
    }
    let payload = parse_payload(&response)?;
    Ok(TwitterResult { response, payload })
}

/// Sends the request for an operation whose outcome is read from the status code.
///
/// Unsuccessful responses are returned as is, with no payload. A successful response whose body
/// cannot be read is returned with no payload too.
pub(crate) async fn execute_operation<T: DeserializeOwned>(
    transport: &dyn Transport,
    request: TwitterRequest,
) -> Result<TwitterResult<T>, TwitterError> {
    let response = transport.send(request).await?;
    let payload = if response.is_success_status_code() {
        // The status alone decides the outcome, the body is informational
        parse_payload(&response).unwrap_or_else(|err| {
            log::debug!("ignoring unreadable operation payload: {}", err);
            None
        })
    } else {
        log::debug!("operation rejected: {}", response.error_message());
        None
    };
    Ok(TwitterResult { response, payload })
}

fn parse_payload<T: DeserializeOwned>(response: &TwitterResponse) -> Result<Option<T>, TwitterError> {
    if response.body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice::<T>(&response.body)
        .map(Some)
        .map_err(TwitterError::ApiResponseMalformed)
}

fn unsuccessful_response(response: &TwitterResponse) -> TwitterError {
    match ApiErrorCodes::try_from(response.status) {
        Ok(ApiErrorCodes::TooManyRequests) => TwitterError::ApiResponseTooManyRequests(
            response
                .headers
                .get("x-rate-limit-reset")
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
        ),
        _ => TwitterError::ApiResponse(response.status, response.error_message()),
    }
}

/// Error codes per the Twitter API site
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u16)]
pub enum ApiErrorCodes {
    // Good Codes
    Ok = 200,
    NotModified = 304,

    // Failing Codes
    BadRequest = 400,
    Unauthorized = 401,
    Forbidden = 403,
    NotFound = 404,
    NotAcceptable = 406,
    Gone = 410,
    EnhanceYourCalm = 420,
    UnprocessableEntity = 422,
    TooManyRequests = 429,
    InternalServerError = 500,
    BadGateway = 502,
    ServiceUnavailable = 503,
    GatewayTimeout = 504,
}

// Body returned along with failing codes
#[derive(Deserialize, Debug)]
struct ErrorsBody {
    errors: Vec<ErrorEntry>,
}

#[derive(Deserialize, Debug)]
struct ErrorEntry {
    code: u32,
    message: String,
}

/// Page of ids returned by the cursor paged id endpoints
#[derive(Deserialize, Debug, Clone, Default)]
pub struct IdsCursorDto {
    #[serde(default)]
    pub ids: Vec<i64>,

    #[serde(default)]
    pub next_cursor: Option<i64>,

    #[serde(default)]
    pub next_cursor_str: Option<String>,

    #[serde(default)]
    pub previous_cursor_str: Option<String>,
}

impl IdsCursorDto {
    /// Continuation token, preferring the string form
    pub fn continuation(&self) -> Option<String> {
        self.next_cursor_str
            .clone()
            .or_else(|| self.next_cursor.map(|c| c.to_string()))
    }
}
