/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::TwitterError;
use crate::v1::parameters::*;
use crate::v1::{ClientConfig, LimitName, TweetIdentifier, TwitterLimits, UserIdentifier};
use std::sync::{Arc, OnceLock};

/// Mandatory identifying fields of a parameter object
pub trait RequiredParameters {
    /// Fails on the first mandatory field that is absent or malformed
    fn check_required(&self) -> Result<(), TwitterError>;
}

/// A parameter object the [`ParametersValidator`] knows how to check
pub trait ValidatedParameters: RequiredParameters {
    /// Numeric ceiling this operation is subject to, if any
    fn limit_check(&self) -> Option<LimitCheck> {
        None
    }
}

/// Declarative description of a numeric argument bounded by an entry of [`TwitterLimits`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitCheck {
    pub field: &'static str,
    pub value: u64,
    pub limit: LimitName,
    pub description: &'static str,
    // Page sizes must be strictly positive, batch sizes are covered by the required checks
    must_be_positive: bool,
}

impl LimitCheck {
    pub fn page_size(value: u32, limit: LimitName) -> Self {
        Self {
            field: "parameters.PageSize",
            value: value.into(),
            limit,
            description: "page size",
            must_be_positive: true,
        }
    }

    pub fn batch_size(
        field: &'static str,
        value: usize,
        limit: LimitName,
        description: &'static str,
    ) -> Self {
        Self {
            field,
            value: value as u64,
            limit,
            description,
            must_be_positive: false,
        }
    }

    fn enforce(&self, limits: &TwitterLimits) -> Result<(), TwitterError> {
        if self.must_be_positive && self.value == 0 {
            return Err(TwitterError::invalid_argument(
                self.field,
                format!("{} must be greater than 0", self.description),
            ));
        }
        let ceiling = limits.get(self.limit);
        if self.value > u64::from(ceiling) {
            return Err(TwitterError::ArgumentLimit {
                field: self.field.to_string(),
                value: self.value,
                limit_name: self.limit,
                limit: ceiling,
                description: self.description.to_string(),
            });
        }
        Ok(())
    }
}

/// Checks the identifying fields shared by every operation
#[derive(Debug, Default, Clone, Copy)]
pub struct RequiredParametersValidator;

impl RequiredParametersValidator {
    pub fn validate<P: RequiredParameters + ?Sized>(&self, parameters: &P) -> Result<(), TwitterError> {
        parameters.check_required()
    }
}

/// Per operation validation: required fields first, then the operation's numeric ceiling.
///
/// Ceilings are read from the client configuration, which is only bound after construction
/// through [`ParametersValidator::initialize`]. Validating before that fails with
/// [`TwitterError::SessionNotInitialized`].
#[derive(Debug, Default)]
pub struct ParametersValidator {
    required: RequiredParametersValidator,
    config: OnceLock<Arc<ClientConfig>>,
}

impl ParametersValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds the configuration the ceilings are read from. Only the first call has an effect.
    pub fn initialize(&self, config: Arc<ClientConfig>) {
        if self.config.set(config).is_err() {
            log::warn!("ParametersValidator is already initialized, ignoring");
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.config.get().is_some()
    }

    fn limits(&self) -> Result<&TwitterLimits, TwitterError> {
        self.config
            .get()
            .map(|c| &c.limits)
            .ok_or(TwitterError::SessionNotInitialized("ParametersValidator"))
    }

    /// Validates the parameters of any operation
    pub fn validate<P: ValidatedParameters + ?Sized>(&self, parameters: &P) -> Result<(), TwitterError> {
        let limits = self.limits()?;
        self.required.validate(parameters)?;
        match parameters.limit_check() {
            Some(check) => check.enforce(limits),
            None => Ok(()),
        }
    }
}

fn require_tweet(field: &str, tweet: Option<&TweetIdentifier>) -> Result<(), TwitterError> {
    let tweet = tweet.ok_or_else(|| TwitterError::MissingArgument(field.to_string()))?;
    if tweet.id <= 0 {
        return Err(TwitterError::invalid_argument(
            format!("{}.Id", field),
            "tweet id must be greater than 0",
        ));
    }
    Ok(())
}

fn require_tweets(field: &str, tweets: &[TweetIdentifier]) -> Result<(), TwitterError> {
    if tweets.is_empty() {
        return Err(TwitterError::MissingArgument(field.to_string()));
    }
    for (idx, tweet) in tweets.iter().enumerate() {
        require_tweet(&format!("{}[{}]", field, idx), Some(tweet))?;
    }
    Ok(())
}

fn require_user(field: &str, user: Option<&UserIdentifier>) -> Result<(), TwitterError> {
    match user {
        None => Err(TwitterError::MissingArgument(field.to_string())),
        Some(UserIdentifier::Id(id)) if *id <= 0 => Err(TwitterError::invalid_argument(
            format!("{}.Id", field),
            "user id must be greater than 0",
        )),
        Some(UserIdentifier::ScreenName(name)) if name.trim().is_empty() => Err(
            TwitterError::invalid_argument(format!("{}.ScreenName", field), "screen name is empty"),
        ),
        Some(_) => Ok(()),
    }
}

fn require_users(field: &str, users: &[UserIdentifier]) -> Result<(), TwitterError> {
    if users.is_empty() {
        return Err(TwitterError::MissingArgument(field.to_string()));
    }
    for (idx, user) in users.iter().enumerate() {
        require_user(&format!("{}[{}]", field, idx), Some(user))?;
    }
    Ok(())
}

// Tweets

impl RequiredParameters for GetTweetParameters {
    fn check_required(&self) -> Result<(), TwitterError> {
        require_tweet("parameters.Tweet", self.tweet.as_ref())
    }
}
impl ValidatedParameters for GetTweetParameters {}

impl RequiredParameters for GetTweetsParameters {
    fn check_required(&self) -> Result<(), TwitterError> {
        require_tweets("parameters.Tweets", &self.tweets)
    }
}
impl ValidatedParameters for GetTweetsParameters {
    fn limit_check(&self) -> Option<LimitCheck> {
        Some(LimitCheck::batch_size(
            "parameters.Tweets",
            self.tweets.len(),
            LimitName::TweetsGetTweetsRequestMaxSize,
            "number of tweets",
        ))
    }
}

impl RequiredParameters for PublishTweetParameters {
    fn check_required(&self) -> Result<(), TwitterError> {
        let has_text = self.text.as_deref().is_some_and(|t| !t.trim().is_empty());
        if !has_text && self.media_ids.is_empty() {
            return Err(TwitterError::MissingArgument("parameters.Text".to_string()));
        }
        if let Some(reply_to) = self.in_reply_to_tweet.as_ref() {
            require_tweet("parameters.InReplyToTweet", Some(reply_to))?;
        }
        Ok(())
    }
}
impl ValidatedParameters for PublishTweetParameters {}

impl RequiredParameters for DestroyTweetParameters {
    fn check_required(&self) -> Result<(), TwitterError> {
        require_tweet("parameters.Tweet", self.tweet.as_ref())
    }
}
impl ValidatedParameters for DestroyTweetParameters {}

impl RequiredParameters for GetFavoriteTweetsParameters {
    fn check_required(&self) -> Result<(), TwitterError> {
        require_user("parameters.User", self.user.as_ref())
    }
}
impl ValidatedParameters for GetFavoriteTweetsParameters {
    fn limit_check(&self) -> Option<LimitCheck> {
        Some(LimitCheck::page_size(
            self.page_size,
            LimitName::TweetsGetFavoriteTweetsMaxSize,
        ))
    }
}

impl RequiredParameters for GetRetweetsParameters {
    fn check_required(&self) -> Result<(), TwitterError> {
        require_tweet("parameters.Tweet", self.tweet.as_ref())
    }
}
impl ValidatedParameters for GetRetweetsParameters {
    fn limit_check(&self) -> Option<LimitCheck> {
        Some(LimitCheck::page_size(
            self.page_size,
            LimitName::TweetsGetRetweetsMaxSize,
        ))
    }
}

impl RequiredParameters for PublishRetweetParameters {
    fn check_required(&self) -> Result<(), TwitterError> {
        require_tweet("parameters.Tweet", self.tweet.as_ref())
    }
}
impl ValidatedParameters for PublishRetweetParameters {}

impl RequiredParameters for DestroyRetweetParameters {
    fn check_required(&self) -> Result<(), TwitterError> {
        require_tweet("parameters.Tweet", self.tweet.as_ref())
    }
}
impl ValidatedParameters for DestroyRetweetParameters {}

impl RequiredParameters for GetRetweeterIdsParameters {
    fn check_required(&self) -> Result<(), TwitterError> {
        require_tweet("parameters.Tweet", self.tweet.as_ref())
    }
}
impl ValidatedParameters for GetRetweeterIdsParameters {
    fn limit_check(&self) -> Option<LimitCheck> {
        Some(LimitCheck::page_size(
            self.page_size,
            LimitName::TweetsGetRetweeterIdsMaxPageSize,
        ))
    }
}

// Users

impl RequiredParameters for GetUserParameters {
    fn check_required(&self) -> Result<(), TwitterError> {
        require_user("parameters.User", self.user.as_ref())
    }
}
impl ValidatedParameters for GetUserParameters {}

impl RequiredParameters for GetUsersParameters {
    fn check_required(&self) -> Result<(), TwitterError> {
        require_users("parameters.Users", &self.users)
    }
}
impl ValidatedParameters for GetUsersParameters {
    fn limit_check(&self) -> Option<LimitCheck> {
        Some(LimitCheck::batch_size(
            "parameters.Users",
            self.users.len(),
            LimitName::UsersGetUsersRequestMaxSize,
            "number of users",
        ))
    }
}

impl RequiredParameters for GetFollowerIdsParameters {
    fn check_required(&self) -> Result<(), TwitterError> {
        require_user("parameters.User", self.user.as_ref())
    }
}
impl ValidatedParameters for GetFollowerIdsParameters {
    fn limit_check(&self) -> Option<LimitCheck> {
        Some(LimitCheck::page_size(
            self.page_size,
            LimitName::UsersGetFollowerIdsMaxPageSize,
        ))
    }
}
