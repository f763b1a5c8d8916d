/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Parameter objects, one per operation.
//!
//! Each object is built from whichever identifying form the caller has on hand and is checked by
//! [`crate::v1::ParametersValidator`] before any request is sent. `Default` leaves the identifying
//! field unset, which is useful for building a request up field by field.

use crate::v1::{TweetIdentifier, UserIdentifier};

const DEFAULT_FAVORITES_PAGE_SIZE: u32 = 200;
const DEFAULT_RETWEETS_PAGE_SIZE: u32 = 100;
const DEFAULT_RETWEETER_IDS_PAGE_SIZE: u32 = 100;
const DEFAULT_FOLLOWER_IDS_PAGE_SIZE: u32 = 5000;

// Tweets

/// Parameters for retrieving a single tweet
#[derive(Debug, Clone, Default)]
pub struct GetTweetParameters {
    pub tweet: Option<TweetIdentifier>,
    pub include_entities: Option<bool>,
    pub include_my_retweet: Option<bool>,
    pub trim_user: Option<bool>,
}

impl GetTweetParameters {
    pub fn new(tweet: impl Into<TweetIdentifier>) -> Self {
        Self {
            tweet: Some(tweet.into()),
            ..Default::default()
        }
    }
}

/// Parameters for looking up several tweets in one request
#[derive(Debug, Clone, Default)]
pub struct GetTweetsParameters {
    pub tweets: Vec<TweetIdentifier>,
    pub include_entities: Option<bool>,
    pub trim_user: Option<bool>,
}

impl GetTweetsParameters {
    pub fn new<I, T>(tweets: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TweetIdentifier>,
    {
        Self {
            tweets: tweets.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }
}

/// Parameters for publishing a tweet
#[derive(Debug, Clone, Default)]
pub struct PublishTweetParameters {
    pub text: Option<String>,
    pub in_reply_to_tweet: Option<TweetIdentifier>,
    pub media_ids: Vec<u64>,
    pub possibly_sensitive: Option<bool>,
    pub trim_user: Option<bool>,
}

impl PublishTweetParameters {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// Marks the tweet as a reply
    pub fn in_reply_to(mut self, tweet: impl Into<TweetIdentifier>) -> Self {
        self.in_reply_to_tweet = Some(tweet.into());
        self
    }
}

/// Parameters for destroying a tweet owned by the authenticated user
#[derive(Debug, Clone, Default)]
pub struct DestroyTweetParameters {
    pub tweet: Option<TweetIdentifier>,
    pub trim_user: Option<bool>,
}

impl DestroyTweetParameters {
    pub fn new(tweet: impl Into<TweetIdentifier>) -> Self {
        Self {
            tweet: Some(tweet.into()),
            ..Default::default()
        }
    }
}

// Favorites

/// Parameters for paging through the tweets a user has liked.
///
/// Paging is driven by tweet ids, `max_id` is the caller supplied starting point.
#[derive(Debug, Clone)]
pub struct GetFavoriteTweetsParameters {
    pub user: Option<UserIdentifier>,
    pub page_size: u32,
    pub since_id: Option<i64>,
    pub max_id: Option<i64>,
    pub include_entities: Option<bool>,
}

impl Default for GetFavoriteTweetsParameters {
    fn default() -> Self {
        Self {
            user: None,
            page_size: DEFAULT_FAVORITES_PAGE_SIZE,
            since_id: None,
            max_id: None,
            include_entities: None,
        }
    }
}

impl GetFavoriteTweetsParameters {
    pub fn new(user: impl Into<UserIdentifier>) -> Self {
        Self {
            user: Some(user.into()),
            ..Default::default()
        }
    }
}

// Retweets

/// Parameters for retrieving the most recent retweets of a tweet
#[derive(Debug, Clone)]
pub struct GetRetweetsParameters {
    pub tweet: Option<TweetIdentifier>,
    pub page_size: u32,
    pub trim_user: Option<bool>,
}

impl Default for GetRetweetsParameters {
    fn default() -> Self {
        Self {
            tweet: None,
            page_size: DEFAULT_RETWEETS_PAGE_SIZE,
            trim_user: None,
        }
    }
}

impl GetRetweetsParameters {
    pub fn new(tweet: impl Into<TweetIdentifier>) -> Self {
        Self {
            tweet: Some(tweet.into()),
            ..Default::default()
        }
    }
}

/// Parameters for retweeting a tweet
#[derive(Debug, Clone, Default)]
pub struct PublishRetweetParameters {
    pub tweet: Option<TweetIdentifier>,
    pub trim_user: Option<bool>,
}

impl PublishRetweetParameters {
    pub fn new(tweet: impl Into<TweetIdentifier>) -> Self {
        Self {
            tweet: Some(tweet.into()),
            ..Default::default()
        }
    }
}

/// Parameters for undoing a retweet
#[derive(Debug, Clone, Default)]
pub struct DestroyRetweetParameters {
    pub tweet: Option<TweetIdentifier>,
    pub trim_user: Option<bool>,
}

impl DestroyRetweetParameters {
    pub fn new(tweet: impl Into<TweetIdentifier>) -> Self {
        Self {
            tweet: Some(tweet.into()),
            ..Default::default()
        }
    }
}

/// Parameters for paging through the ids of the users who retweeted a tweet
#[derive(Debug, Clone)]
pub struct GetRetweeterIdsParameters {
    pub tweet: Option<TweetIdentifier>,
    pub page_size: u32,
    pub cursor: Option<String>,
}

impl Default for GetRetweeterIdsParameters {
    fn default() -> Self {
        Self {
            tweet: None,
            page_size: DEFAULT_RETWEETER_IDS_PAGE_SIZE,
            cursor: None,
        }
    }
}

impl GetRetweeterIdsParameters {
    pub fn new(tweet: impl Into<TweetIdentifier>) -> Self {
        Self {
            tweet: Some(tweet.into()),
            ..Default::default()
        }
    }
}

// Users

/// Parameters for retrieving a single user
#[derive(Debug, Clone, Default)]
pub struct GetUserParameters {
    pub user: Option<UserIdentifier>,
    pub include_entities: Option<bool>,
}

impl GetUserParameters {
    pub fn new(user: impl Into<UserIdentifier>) -> Self {
        Self {
            user: Some(user.into()),
            ..Default::default()
        }
    }
}

/// Parameters for looking up several users in one request
#[derive(Debug, Clone, Default)]
pub struct GetUsersParameters {
    pub users: Vec<UserIdentifier>,
    pub include_entities: Option<bool>,
}

impl GetUsersParameters {
    pub fn new<I, U>(users: I) -> Self
    where
        I: IntoIterator<Item = U>,
        U: Into<UserIdentifier>,
    {
        Self {
            users: users.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }
}

/// Parameters for paging through the ids of a user's followers
#[derive(Debug, Clone)]
pub struct GetFollowerIdsParameters {
    pub user: Option<UserIdentifier>,
    pub page_size: u32,
    pub cursor: Option<String>,
}

impl Default for GetFollowerIdsParameters {
    fn default() -> Self {
        Self {
            user: None,
            page_size: DEFAULT_FOLLOWER_IDS_PAGE_SIZE,
            cursor: None,
        }
    }
}

impl GetFollowerIdsParameters {
    pub fn new(user: impl Into<UserIdentifier>) -> Self {
        Self {
            user: Some(user.into()),
            ..Default::default()
        }
    }
}
