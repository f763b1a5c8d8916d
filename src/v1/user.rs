/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::TwitterError;
use crate::v1::macros::{ids_iterator, model_from_result, models_from_result};
use crate::v1::parameters::*;
use crate::v1::parsers::{from_empty_str_to_none, from_twitter_date};
use crate::v1::{
    IdsCursorDto, IdsIterator, LimitName, Tweet, TweetDto, TweetMode, TweetsIterator, TwitterClient,
    TwitterIteratorProxy, TwitterResult, UserIdentifier, UsersRequester,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// User as returned by the API.
///
/// See [Twitter API Docs](https://developer.twitter.com/en/docs/twitter-api/v1/data-dictionary/object-model/user)
/// for more details on the individual fields.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct UserDto {
    pub id: i64,

    #[serde(default)]
    pub id_str: Option<String>,

    #[serde(default)]
    pub screen_name: String,

    #[serde(default)]
    pub name: String,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub location: Option<String>,

    #[serde(default)]
    pub followers_count: u64,

    #[serde(default)]
    pub friends_count: u64,

    #[serde(default)]
    pub statuses_count: u64,

    #[serde(default)]
    pub favourites_count: u64,

    #[serde(default)]
    pub protected: bool,

    #[serde(default)]
    pub verified: bool,

    #[serde(default, deserialize_with = "from_twitter_date")]
    pub created_at: Option<DateTime<Utc>>,

    // Most recent tweet, only present on some endpoints
    #[serde(default)]
    pub status: Option<Box<TweetDto>>,
}

/// A user, along with the client it was retrieved with
#[derive(Debug, Clone)]
pub struct User {
    pub(crate) client: Option<TwitterClient>,

    pub id: i64,
    pub screen_name: String,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub followers_count: u64,
    pub friends_count: u64,
    pub statuses_count: u64,
    pub favorites_count: u64,
    pub is_protected: bool,
    pub is_verified: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub status: Option<Box<Tweet>>,
    pub user_dto: UserDto,
}

impl User {
    pub fn from_dto(dto: UserDto, tweet_mode: TweetMode, client: TwitterClient) -> Self {
        Self {
            id: dto.id,
            screen_name: dto.screen_name.clone(),
            name: dto.name.clone(),
            description: dto.description.clone(),
            location: dto.location.clone(),
            followers_count: dto.followers_count,
            friends_count: dto.friends_count,
            statuses_count: dto.statuses_count,
            favorites_count: dto.favourites_count,
            is_protected: dto.protected,
            is_verified: dto.verified,
            created_at: dto.created_at,
            status: dto
                .status
                .clone()
                .map(|t| Box::new(Tweet::from_dto(*t, tweet_mode, client.clone()))),
            user_dto: dto,
            client: Some(client),
        }
    }

    fn client(&self) -> Result<&TwitterClient, TwitterError> {
        self.client.as_ref().ok_or(TwitterError::ClientNotFound())
    }

    /// Pages through the tweets this user liked
    pub fn favorite_tweets(&self) -> Result<TweetsIterator, TwitterError> {
        self.client()?.tweets().get_favorite_tweets(self)
    }

    /// Pages through the ids of this user's followers
    pub fn follower_ids(&self) -> Result<IdsIterator, TwitterError> {
        self.client()?.users().get_follower_ids_iterator(self)
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for User {}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "name: {}, screen name: @{}, id: {}", self.name, self.screen_name, self.id)
    }
}

/// User related operations
#[derive(Debug, Clone)]
pub struct UsersClient {
    client: TwitterClient,
}

impl UsersClient {
    pub fn new(client: TwitterClient) -> Self {
        Self { client }
    }

    fn requester(&self) -> &UsersRequester {
        self.client.request_executor().users()
    }

    pub async fn get_user(&self, user: impl Into<UserIdentifier>) -> Result<User, TwitterError> {
        self.get_user_with(&GetUserParameters::new(user)).await
    }

    pub async fn get_user_with(&self, parameters: &GetUserParameters) -> Result<User, TwitterError> {
        let result = self.requester().get_user(parameters).await?;
        model_from_result!(&self.client, result, User)
    }

    pub async fn get_users<I, U>(&self, users: I) -> Result<Vec<User>, TwitterError>
    where
        I: IntoIterator<Item = U>,
        U: Into<UserIdentifier>,
    {
        self.get_users_with(&GetUsersParameters::new(users)).await
    }

    pub async fn get_users_with(&self, parameters: &GetUsersParameters) -> Result<Vec<User>, TwitterError> {
        let result = self.requester().get_users(parameters).await?;
        models_from_result!(&self.client, result, User)
    }

    /// Pages through the follower ids with the default page size, lowered to the configured ceiling
    pub fn get_follower_ids_iterator(&self, user: impl Into<UserIdentifier>) -> Result<IdsIterator, TwitterError> {
        let mut parameters = GetFollowerIdsParameters::new(user);
        parameters.page_size = self
            .client
            .config()
            .limits
            .clamp(LimitName::UsersGetFollowerIdsMaxPageSize, parameters.page_size);
        self.get_follower_ids_iterator_with(&parameters)
    }

    pub fn get_follower_ids_iterator_with(
        &self,
        parameters: &GetFollowerIdsParameters,
    ) -> Result<IdsIterator, TwitterError> {
        let iterator = self.requester().get_follower_ids(parameters)?;
        Ok(ids_iterator!(iterator))
    }
}
