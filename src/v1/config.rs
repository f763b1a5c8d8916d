/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString, IntoStaticStr};

// Root Twitter API
pub const API_ORIGIN: &str = "https://api.twitter.com/1.1/";

/// Settings shared by everything created from a [`crate::v1::TwitterClient`].
///
/// The configuration is frozen once the client is built.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base url every endpoint path is joined onto. Must end with a `/`.
    pub api_origin: String,

    /// Shape of the tweets requested and produced by the client
    pub tweet_mode: TweetMode,

    pub limits: TwitterLimits,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_origin: API_ORIGIN.to_string(),
            tweet_mode: TweetMode::Extended,
            limits: TwitterLimits::default(),
        }
    }
}

/// How tweet text is requested and resolved
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[derive(EnumString, IntoStaticStr, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TweetMode {
    #[default]
    Extended,
    Compat,
}

/// Server imposed ceilings for the numeric parameters of each endpoint.
///
/// See [Twitter API reference](https://developer.twitter.com/en/docs/twitter-api/v1) for the
/// values currently enforced.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct TwitterLimits {
    pub tweets_get_favorite_tweets_max_size: u32,
    pub tweets_get_retweets_max_size: u32,
    pub tweets_get_retweeter_ids_max_page_size: u32,
    pub tweets_get_tweets_request_max_size: u32,
    pub users_get_follower_ids_max_page_size: u32,
    pub users_get_users_request_max_size: u32,
}

impl Default for TwitterLimits {
    fn default() -> Self {
        Self {
            tweets_get_favorite_tweets_max_size: 200,
            tweets_get_retweets_max_size: 100,
            tweets_get_retweeter_ids_max_page_size: 100,
            tweets_get_tweets_request_max_size: 100,
            users_get_follower_ids_max_page_size: 5000,
            users_get_users_request_max_size: 100,
        }
    }
}

impl TwitterLimits {
    /// Looks up the ceiling registered under `name`
    pub fn get(&self, name: LimitName) -> u32 {
        use LimitName as L;
        match name {
            L::TweetsGetFavoriteTweetsMaxSize => self.tweets_get_favorite_tweets_max_size,
            L::TweetsGetRetweetsMaxSize => self.tweets_get_retweets_max_size,
            L::TweetsGetRetweeterIdsMaxPageSize => self.tweets_get_retweeter_ids_max_page_size,
            L::TweetsGetTweetsRequestMaxSize => self.tweets_get_tweets_request_max_size,
            L::UsersGetFollowerIdsMaxPageSize => self.users_get_follower_ids_max_page_size,
            L::UsersGetUsersRequestMaxSize => self.users_get_users_request_max_size,
        }
    }

    /// Lowers `value` to the ceiling registered under `name` when it exceeds it
    pub fn clamp(&self, name: LimitName, value: u32) -> u32 {
        value.min(self.get(name))
    }
}

/// Symbolic names of the entries in [`TwitterLimits`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum LimitName {
    TweetsGetFavoriteTweetsMaxSize,
    TweetsGetRetweetsMaxSize,
    TweetsGetRetweeterIdsMaxPageSize,
    TweetsGetTweetsRequestMaxSize,
    UsersGetFollowerIdsMaxPageSize,
    UsersGetUsersRequestMaxSize,
}
