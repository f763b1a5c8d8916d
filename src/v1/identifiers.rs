/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::{Tweet, TweetDto, User, UserDto};

/// Canonical way of referring to a tweet in parameter objects.
///
/// Anything that identifies a tweet (a bare id, a fetched [`Tweet`], its dto) converts into this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TweetIdentifier {
    pub id: i64,
}

impl TweetIdentifier {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

impl From<i64> for TweetIdentifier {
    fn from(id: i64) -> Self {
        Self::new(id)
    }
}

impl From<&Tweet> for TweetIdentifier {
    fn from(tweet: &Tweet) -> Self {
        Self::new(tweet.id)
    }
}

impl From<&TweetDto> for TweetIdentifier {
    fn from(tweet: &TweetDto) -> Self {
        Self::new(tweet.id)
    }
}

/// Canonical way of referring to a user, either by numeric id or by screen name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UserIdentifier {
    Id(i64),
    ScreenName(String),
}

impl From<i64> for UserIdentifier {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for UserIdentifier {
    fn from(screen_name: &str) -> Self {
        Self::ScreenName(screen_name.to_string())
    }
}

impl From<String> for UserIdentifier {
    fn from(screen_name: String) -> Self {
        Self::ScreenName(screen_name)
    }
}

impl From<&User> for UserIdentifier {
    fn from(user: &User) -> Self {
        Self::Id(user.id)
    }
}

impl From<&UserDto> for UserIdentifier {
    fn from(user: &UserDto) -> Self {
        Self::Id(user.id)
    }
}

impl std::fmt::Display for UserIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            UserIdentifier::Id(id) => write!(f, "id: {}", id),
            UserIdentifier::ScreenName(name) => write!(f, "@{}", name),
        }
    }
}
