/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::api::{execute_operation, execute_query};
use crate::v1::errors::TwitterError;
use crate::v1::parameters::*;
use crate::v1::queries;
use crate::v1::{
    ClientConfig, IdsCursorDto, ParametersValidator, TweetDto, TwitterPageIterator, TwitterRequest,
    TwitterResult, TwitterSession, UserDto,
};
use futures::FutureExt;
use serde::de::DeserializeOwned;
use std::sync::{Arc, OnceLock};

/// Cursor iterator over the raw pages of a tweet list paged by `max_id`
pub type TweetsPageIterator = TwitterPageIterator<TwitterResult<Vec<TweetDto>>, i64>;

/// Cursor iterator over the raw pages of an id list paged by cursor token
pub type IdsPageIterator = TwitterPageIterator<TwitterResult<IdsCursorDto>, String>;

/// Groups the requesters of every resource family.
///
/// Requesters validate, send, and hand back the raw results. They must be bound to a session with
/// [`RequestExecutor::initialize`] before use.
#[derive(Debug)]
pub struct RequestExecutor {
    tweets: TweetsRequester,
    users: UsersRequester,
}

impl RequestExecutor {
    pub fn new(validator: Arc<ParametersValidator>) -> Self {
        Self {
            tweets: TweetsRequester::new(validator.clone()),
            users: UsersRequester::new(validator),
        }
    }

    pub fn initialize(&self, session: Arc<TwitterSession>) {
        self.tweets.initialize(session.clone());
        self.users.initialize(session);
    }

    pub fn tweets(&self) -> &TweetsRequester {
        &self.tweets
    }

    pub fn users(&self) -> &UsersRequester {
        &self.users
    }
}

// Session binding shared by the requesters
#[derive(Debug)]
struct SessionSlot {
    name: &'static str,
    session: OnceLock<Arc<TwitterSession>>,
}

impl SessionSlot {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            session: OnceLock::new(),
        }
    }

    fn bind(&self, session: Arc<TwitterSession>) {
        if self.session.set(session).is_err() {
            log::warn!("{} is already initialized, ignoring", self.name);
        }
    }

    fn get(&self) -> Result<&Arc<TwitterSession>, TwitterError> {
        self.session
            .get()
            .ok_or(TwitterError::SessionNotInitialized(self.name))
    }
}

// Opens a cursor iterator whose pages are fetched with the request built for each cursor
fn open_iterator<R, C, B, N>(
    session: Arc<TwitterSession>,
    initial_cursor: Option<C>,
    build_request: B,
    next_cursor: N,
) -> TwitterPageIterator<TwitterResult<R>, C>
where
    R: DeserializeOwned + Send + 'static,
    C: Clone + Send + Sync + std::fmt::Debug + 'static,
    B: Fn(&ClientConfig, Option<C>) -> Result<TwitterRequest, TwitterError> + Send + Sync + 'static,
    N: Fn(&TwitterResult<R>) -> Option<C> + Send + Sync + 'static,
{
    TwitterPageIterator::new(
        initial_cursor,
        move |cursor| {
            let session = session.clone();
            let request = build_request(&session.config, cursor);
            async move { execute_query(session.transport.as_ref(), request?).await }.boxed()
        },
        next_cursor,
    )
}

// Cursor token family: "0" (or nothing) marks the last page
fn next_cursor_token(page: &TwitterResult<IdsCursorDto>) -> Option<String> {
    page.payload
        .as_ref()
        .and_then(IdsCursorDto::continuation)
        .filter(|c| !c.is_empty() && c != "0")
}

// Max id family: an empty page marks the end, otherwise continue below the oldest tweet
fn next_max_id(page: &TwitterResult<Vec<TweetDto>>) -> Option<i64> {
    page.payload
        .as_ref()
        .and_then(|tweets| tweets.iter().map(|t| t.id).min())
        .map(|id| id - 1)
}

/// Requests for the tweet related endpoints
#[derive(Debug)]
pub struct TweetsRequester {
    validator: Arc<ParametersValidator>,
    session: SessionSlot,
}

impl TweetsRequester {
    pub fn new(validator: Arc<ParametersValidator>) -> Self {
        Self {
            validator,
            session: SessionSlot::new("TweetsRequester"),
        }
    }

    pub fn initialize(&self, session: Arc<TwitterSession>) {
        self.session.bind(session);
    }

    pub async fn get_tweet(&self, parameters: &GetTweetParameters) -> Result<TwitterResult<TweetDto>, TwitterError> {
        let session = self.session.get()?;
        self.validator.validate(parameters)?;
        let request = queries::get_tweet(&session.config, parameters)?;
        execute_query(session.transport.as_ref(), request).await
    }

    pub async fn get_tweets(&self, parameters: &GetTweetsParameters) -> Result<TwitterResult<Vec<TweetDto>>, TwitterError> {
        let session = self.session.get()?;
        self.validator.validate(parameters)?;
        let request = queries::get_tweets(&session.config, parameters)?;
        execute_query(session.transport.as_ref(), request).await
    }

    pub async fn publish_tweet(&self, parameters: &PublishTweetParameters) -> Result<TwitterResult<TweetDto>, TwitterError> {
        let session = self.session.get()?;
        self.validator.validate(parameters)?;
        let request = queries::publish_tweet(&session.config, parameters)?;
        execute_query(session.transport.as_ref(), request).await
    }

    pub async fn destroy_tweet(&self, parameters: &DestroyTweetParameters) -> Result<TwitterResult<TweetDto>, TwitterError> {
        let session = self.session.get()?;
        self.validator.validate(parameters)?;
        let request = queries::destroy_tweet(&session.config, parameters)?;
        execute_operation(session.transport.as_ref(), request).await
    }

    pub async fn get_retweets(&self, parameters: &GetRetweetsParameters) -> Result<TwitterResult<Vec<TweetDto>>, TwitterError> {
        let session = self.session.get()?;
        self.validator.validate(parameters)?;
        let request = queries::get_retweets(&session.config, parameters)?;
        execute_query(session.transport.as_ref(), request).await
    }

    pub async fn publish_retweet(&self, parameters: &PublishRetweetParameters) -> Result<TwitterResult<TweetDto>, TwitterError> {
        let session = self.session.get()?;
        self.validator.validate(parameters)?;
        let request = queries::publish_retweet(&session.config, parameters)?;
        execute_query(session.transport.as_ref(), request).await
    }

    pub async fn destroy_retweet(&self, parameters: &DestroyRetweetParameters) -> Result<TwitterResult<TweetDto>, TwitterError> {
        let session = self.session.get()?;
        self.validator.validate(parameters)?;
        let request = queries::destroy_retweet(&session.config, parameters)?;
        execute_operation(session.transport.as_ref(), request).await
    }

    /// Opens an iterator over the ids of the retweeters, starting at `parameters.cursor`
    pub fn get_retweeter_ids(&self, parameters: &GetRetweeterIdsParameters) -> Result<IdsPageIterator, TwitterError> {
        let session = self.session.get()?.clone();
        self.validator.validate(parameters)?;
        let parameters = parameters.clone();
        Ok(open_iterator(
            session,
            parameters.cursor.clone(),
            move |config, cursor| queries::get_retweeter_ids(config, &parameters, cursor.as_deref()),
            next_cursor_token,
        ))
    }

    /// Opens an iterator over the user's favorites, starting below `parameters.max_id`
    pub fn get_favorite_tweets(&self, parameters: &GetFavoriteTweetsParameters) -> Result<TweetsPageIterator, TwitterError> {
        let session = self.session.get()?.clone();
        self.validator.validate(parameters)?;
        let parameters = parameters.clone();
        Ok(open_iterator(
            session,
            parameters.max_id,
            move |config, max_id| queries::get_favorite_tweets(config, &parameters, max_id),
            next_max_id,
        ))
    }
}

/// Requests for the user related endpoints
#[derive(Debug)]
pub struct UsersRequester {
    validator: Arc<ParametersValidator>,
    session: SessionSlot,
}

impl UsersRequester {
    pub fn new(validator: Arc<ParametersValidator>) -> Self {
        Self {
            validator,
            session: SessionSlot::new("UsersRequester"),
        }
    }

    pub fn initialize(&self, session: Arc<TwitterSession>) {
        self.session.bind(session);
    }

    pub async fn get_user(&self, parameters: &GetUserParameters) -> Result<TwitterResult<UserDto>, TwitterError> {
        let session = self.session.get()?;
        self.validator.validate(parameters)?;
        let request = queries::get_user(&session.config, parameters)?;
        execute_query(session.transport.as_ref(), request).await
    }

    pub async fn get_users(&self, parameters: &GetUsersParameters) -> Result<TwitterResult<Vec<UserDto>>, TwitterError> {
        let session = self.session.get()?;
        self.validator.validate(parameters)?;
        let request = queries::get_users(&session.config, parameters)?;
        execute_query(session.transport.as_ref(), request).await
    }

    /// Opens an iterator over the ids of the user's followers, starting at `parameters.cursor`
    pub fn get_follower_ids(&self, parameters: &GetFollowerIdsParameters) -> Result<IdsPageIterator, TwitterError> {
        let session = self.session.get()?.clone();
        self.validator.validate(parameters)?;
        let parameters = parameters.clone();
        Ok(open_iterator(
            session,
            parameters.cursor.clone(),
            move |config, cursor| queries::get_follower_ids(config, &parameters, cursor.as_deref()),
            next_cursor_token,
        ))
    }
}
