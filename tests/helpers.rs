/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tweetkit::v1::{
    ClientConfig, Creds, Transport, TwitterClient, TwitterError, TwitterRequest, TwitterResponse,
};

/// Transport answering with queued responses and recording every request it receives
#[derive(Default)]
pub(crate) struct StubTransport {
    responses: Mutex<VecDeque<Result<TwitterResponse, TwitterError>>>,
    requests: Mutex<Vec<TwitterRequest>>,
}

#[allow(dead_code)]
impl StubTransport {
    pub(crate) fn push_json(&self, status: u16, body: serde_json::Value) {
        let body = serde_json::to_vec(&body).unwrap();
        self.push_response(TwitterResponse::new(status, body));
    }

    pub(crate) fn push_response(&self, response: TwitterResponse) {
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    pub(crate) fn push_error(&self, err: TwitterError) {
        self.responses.lock().unwrap().push_back(Err(err));
    }

    pub(crate) fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub(crate) fn requests(&self) -> Vec<TwitterRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last_request(&self) -> TwitterRequest {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn send(&self, request: TwitterRequest) -> Result<TwitterResponse, TwitterError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("no stubbed response left")
    }
}

#[allow(dead_code)]
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub(crate) fn stub_client() -> (TwitterClient, Arc<StubTransport>) {
    stub_client_with_config(ClientConfig::default())
}

#[allow(dead_code)]
pub(crate) fn stub_client_with_config(config: ClientConfig) -> (TwitterClient, Arc<StubTransport>) {
    init_logging();
    let transport = Arc::new(StubTransport::default());
    let client = TwitterClient::with_transport(config, transport.clone());
    (client, transport)
}

/// Value of the query parameter `key` in the request url
#[allow(dead_code)]
pub(crate) fn query_param(request: &TwitterRequest, key: &str) -> Option<String> {
    request
        .url
        .query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

#[allow(dead_code)]
pub(crate) fn get_full_auth_tokens() -> anyhow::Result<Creds> {
    let api_key = std::env::var("TWITTER_API_KEY")?;
    let api_secret = std::env::var("TWITTER_API_SECRET")?;
    let access_token = std::env::var("TWITTER_ACCESS_TOKEN")?;
    let access_token_secret = std::env::var("TWITTER_ACCESS_TOKEN_SECRET")?;

    Ok(Creds::from_tokens(
        &api_key,
        &api_secret,
        Some(&access_token),
        Some(&access_token_secret),
    ))
}
