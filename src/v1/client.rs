/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::{
    ApiClient, ClientConfig, Creds, ParametersValidator, RequestExecutor, Transport, TweetsClient,
    UsersClient,
};
use std::sync::Arc;

/// What the validator and requesters are bound to: the frozen configuration and the transport
pub struct TwitterSession {
    pub(crate) config: Arc<ClientConfig>,
    pub(crate) transport: Arc<dyn Transport>,
}

impl TwitterSession {
    pub fn new(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl std::fmt::Debug for TwitterSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwitterSession")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Entry point of the library.
///
/// Cloning is cheap, every clone shares the same session.
///
/// ```rust,no_run
/// use tweetkit::v1::{Creds, TwitterClient};
///
/// # async fn run() -> Result<(), tweetkit::v1::TwitterError> {
/// let client = TwitterClient::new(Creds::from_tokens(
///     "consumer_key",
///     "consumer_secret",
///     Some("access_token"),
///     Some("access_token_secret"),
/// ));
/// let tweet = client.tweets().get_tweet(20).await?;
/// println!("{}", tweet.text);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TwitterClient {
    session: Arc<TwitterSession>,
    validator: Arc<ParametersValidator>,
    executor: Arc<RequestExecutor>,
}

impl TwitterClient {
    pub fn new(creds: Creds) -> Self {
        Self::with_config(creds, ClientConfig::default())
    }

    pub fn with_config(creds: Creds, config: ClientConfig) -> Self {
        Self::with_transport(config, Arc::new(ApiClient::new(creds)))
    }

    /// Builds a client sending its requests through the given transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        let session = Arc::new(TwitterSession::new(config, transport));

        let validator = Arc::new(ParametersValidator::new());
        let executor = RequestExecutor::new(validator.clone());

        validator.initialize(session.config.clone());
        executor.initialize(session.clone());

        Self {
            session,
            validator,
            executor: Arc::new(executor),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        self.session.config()
    }

    pub fn parameters_validator(&self) -> &ParametersValidator {
        &self.validator
    }

    /// Lower level access to the raw results
    pub fn request_executor(&self) -> &RequestExecutor {
        &self.executor
    }

    pub fn tweets(&self) -> TweetsClient {
        TweetsClient::new(self.clone())
    }

    pub fn users(&self) -> UsersClient {
        UsersClient::new(self.clone())
    }
}
