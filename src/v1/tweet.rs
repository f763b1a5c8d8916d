/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::TwitterError;
use crate::v1::macros::{ids_iterator, model_from_result, models_from_result, models_iterator};
use crate::v1::parameters::*;
use crate::v1::parsers::from_twitter_date;
use crate::v1::{
    IdsCursorDto, IdsPageIterator, LimitName, ParametersValidator, TweetIdentifier, TweetMode,
    TweetsPageIterator, TweetsRequester, TwitterClient, TwitterIteratorProxy, TwitterResult, User,
    UserDto, UserIdentifier,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Iterator over pages of [`Tweet`]
pub type TweetsIterator = TwitterIteratorProxy<TweetsPageIterator, Tweet>;

/// Iterator over pages of user ids
pub type IdsIterator = TwitterIteratorProxy<IdsPageIterator, i64>;

/// Tweet as returned by the API.
///
/// See [Twitter API Docs](https://developer.twitter.com/en/docs/twitter-api/v1/data-dictionary/object-model/tweet)
/// for more details on the individual fields.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct TweetDto {
    pub id: i64,

    #[serde(default)]
    pub id_str: Option<String>,

    #[serde(default)]
    pub text: Option<String>,

    #[serde(default)]
    pub full_text: Option<String>,

    #[serde(default, deserialize_with = "from_twitter_date")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub user: Option<UserDto>,

    #[serde(default)]
    pub in_reply_to_status_id: Option<i64>,

    #[serde(default)]
    pub retweet_count: u64,

    #[serde(default)]
    pub favorite_count: Option<u64>,

    #[serde(default)]
    pub favorited: Option<bool>,

    #[serde(default)]
    pub retweeted: bool,

    #[serde(default)]
    pub retweeted_status: Option<Box<TweetDto>>,

    #[serde(default)]
    pub truncated: bool,
}

/// A tweet, along with the client it was retrieved with
#[derive(Debug, Clone)]
pub struct Tweet {
    pub(crate) client: Option<TwitterClient>,

    pub id: i64,

    /// Full text in [`TweetMode::Extended`], possibly truncated text otherwise
    pub text: String,

    pub created_at: Option<DateTime<Utc>>,

    pub created_by: Option<User>,

    pub in_reply_to_status_id: Option<i64>,

    pub retweet_count: u64,

    pub favorite_count: u64,

    pub is_favorited: bool,

    pub is_retweeted: bool,

    pub retweeted_tweet: Option<Box<Tweet>>,

    /// Set once this tweet has been destroyed through the client
    pub is_tweet_destroyed: bool,

    pub tweet_dto: TweetDto,
}

impl Tweet {
    /// Builds the model for the dto, resolving the text per the tweet mode
    pub fn from_dto(dto: TweetDto, tweet_mode: TweetMode, client: TwitterClient) -> Self {
        let text = match tweet_mode {
            TweetMode::Extended => dto.full_text.clone().or_else(|| dto.text.clone()),
            TweetMode::Compat => dto.text.clone().or_else(|| dto.full_text.clone()),
        }
        .unwrap_or_default();

        Self {
            id: dto.id,
            text,
            created_at: dto.created_at,
            created_by: dto
                .user
                .clone()
                .map(|u| User::from_dto(u, tweet_mode, client.clone())),
            in_reply_to_status_id: dto.in_reply_to_status_id,
            retweet_count: dto.retweet_count,
            favorite_count: dto.favorite_count.unwrap_or_default(),
            is_favorited: dto.favorited.unwrap_or_default(),
            is_retweeted: dto.retweeted,
            retweeted_tweet: dto
                .retweeted_status
                .clone()
                .map(|t| Box::new(Tweet::from_dto(*t, tweet_mode, client.clone()))),
            is_tweet_destroyed: false,
            tweet_dto: dto,
            client: Some(client),
        }
    }

    fn client(&self) -> Result<&TwitterClient, TwitterError> {
        self.client.as_ref().ok_or(TwitterError::ClientNotFound())
    }

    /// Destroys this tweet, marking it destroyed on success
    pub async fn destroy(&mut self) -> Result<bool, TwitterError> {
        let client = self.client()?.clone();
        client.tweets().destroy_tweet_model(self).await
    }

    /// Retrieves the most recent retweets of this tweet
    pub async fn retweets(&self) -> Result<Vec<Tweet>, TwitterError> {
        self.client()?.tweets().get_retweets(self).await
    }

    /// Retweets this tweet as the authenticated user
    pub async fn publish_retweet(&self) -> Result<Tweet, TwitterError> {
        self.client()?.tweets().publish_retweet(self).await
    }
}

impl PartialEq for Tweet {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for Tweet {}

impl Hash for Tweet {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.id.hash(state);
    }
}

impl PartialOrd for Tweet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tweet {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl std::fmt::Display for Tweet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "id: {}, text: {}", self.id, self.text)
    }
}

/// Tweet related operations.
///
/// The `*_with` methods take the full parameter object and are what the shorthand methods
/// delegate to.
#[derive(Debug, Clone)]
pub struct TweetsClient {
    client: TwitterClient,
}

impl TweetsClient {
    pub fn new(client: TwitterClient) -> Self {
        Self { client }
    }

    fn requester(&self) -> &TweetsRequester {
        self.client.request_executor().tweets()
    }

    pub fn parameters_validator(&self) -> &ParametersValidator {
        self.client.parameters_validator()
    }

    // Default page sizes are lowered to the configured ceilings so the shorthand calls stay valid
    fn page_size(&self, limit: LimitName, page_size: u32) -> u32 {
        self.client.config().limits.clamp(limit, page_size)
    }

    // Tweets

    pub async fn get_tweet(&self, tweet: impl Into<TweetIdentifier>) -> Result<Tweet, TwitterError> {
        self.get_tweet_with(&GetTweetParameters::new(tweet)).await
    }

    pub async fn get_tweet_with(&self, parameters: &GetTweetParameters) -> Result<Tweet, TwitterError> {
        let result = self.requester().get_tweet(parameters).await?;
        model_from_result!(&self.client, result, Tweet)
    }

    pub async fn get_tweets<I, T>(&self, tweets: I) -> Result<Vec<Tweet>, TwitterError>
    where
        I: IntoIterator<Item = T>,
        T: Into<TweetIdentifier>,
    {
        self.get_tweets_with(&GetTweetsParameters::new(tweets)).await
    }

    pub async fn get_tweets_with(&self, parameters: &GetTweetsParameters) -> Result<Vec<Tweet>, TwitterError> {
        let result = self.requester().get_tweets(parameters).await?;
        models_from_result!(&self.client, result, Tweet)
    }

    // Tweets - Publish

    pub async fn publish_tweet(&self, text: impl Into<String>) -> Result<Tweet, TwitterError> {
        self.publish_tweet_with(&PublishTweetParameters::new(text)).await
    }

    pub async fn publish_tweet_with(&self, parameters: &PublishTweetParameters) -> Result<Tweet, TwitterError> {
        let result = self.requester().publish_tweet(parameters).await?;
        model_from_result!(&self.client, result, Tweet)
    }

    // Tweets - Destroy

    /// Returns whether the tweet was destroyed
    pub async fn destroy_tweet(&self, tweet: impl Into<TweetIdentifier>) -> Result<bool, TwitterError> {
        self.destroy_tweet_with(&DestroyTweetParameters::new(tweet)).await
    }

    /// Destroys the given tweet and, on success, sets its `is_tweet_destroyed` flag.
    ///
    /// The flag is left untouched when the operation is rejected.
    pub async fn destroy_tweet_model(&self, tweet: &mut Tweet) -> Result<bool, TwitterError> {
        let destroyed = self
            .destroy_tweet_with(&DestroyTweetParameters::new(&*tweet))
            .await?;
        if destroyed {
            tweet.is_tweet_destroyed = true;
        }
        Ok(destroyed)
    }

    pub async fn destroy_tweet_with(&self, parameters: &DestroyTweetParameters) -> Result<bool, TwitterError> {
        let result = self.requester().destroy_tweet(parameters).await?;
        Ok(result.response.is_success_status_code())
    }

    // Retweets

    pub async fn get_retweets(&self, tweet: impl Into<TweetIdentifier>) -> Result<Vec<Tweet>, TwitterError> {
        let mut parameters = GetRetweetsParameters::new(tweet);
        parameters.page_size = self.page_size(LimitName::TweetsGetRetweetsMaxSize, parameters.page_size);
        self.get_retweets_with(&parameters).await
    }

    pub async fn get_retweets_with(&self, parameters: &GetRetweetsParameters) -> Result<Vec<Tweet>, TwitterError> {
        let result = self.requester().get_retweets(parameters).await?;
        models_from_result!(&self.client, result, Tweet)
    }

    pub async fn publish_retweet(&self, tweet: impl Into<TweetIdentifier>) -> Result<Tweet, TwitterError> {
        self.publish_retweet_with(&PublishRetweetParameters::new(tweet)).await
    }

    pub async fn publish_retweet_with(&self, parameters: &PublishRetweetParameters) -> Result<Tweet, TwitterError> {
        let result = self.requester().publish_retweet(parameters).await?;
        model_from_result!(&self.client, result, Tweet)
    }

    /// Returns whether the retweet was undone
    pub async fn destroy_retweet(&self, retweet: impl Into<TweetIdentifier>) -> Result<bool, TwitterError> {
        self.destroy_retweet_with(&DestroyRetweetParameters::new(retweet)).await
    }

    pub async fn destroy_retweet_with(&self, parameters: &DestroyRetweetParameters) -> Result<bool, TwitterError> {
        let result = self.requester().destroy_retweet(parameters).await?;
        Ok(result.response.is_success_status_code())
    }

    pub fn get_retweeter_ids_iterator(&self, tweet: impl Into<TweetIdentifier>) -> Result<IdsIterator, TwitterError> {
        let mut parameters = GetRetweeterIdsParameters::new(tweet);
        parameters.page_size = self.page_size(LimitName::TweetsGetRetweeterIdsMaxPageSize, parameters.page_size);
        self.get_retweeter_ids_iterator_with(&parameters)
    }

    pub fn get_retweeter_ids_iterator_with(
        &self,
        parameters: &GetRetweeterIdsParameters,
    ) -> Result<IdsIterator, TwitterError> {
        let iterator = self.requester().get_retweeter_ids(parameters)?;
        Ok(ids_iterator!(iterator))
    }

    // Favorites

    pub fn get_favorite_tweets(&self, user: impl Into<UserIdentifier>) -> Result<TweetsIterator, TwitterError> {
        let mut parameters = GetFavoriteTweetsParameters::new(user);
        parameters.page_size = self.page_size(LimitName::TweetsGetFavoriteTweetsMaxSize, parameters.page_size);
        self.get_favorite_tweets_with(&parameters)
    }

    pub fn get_favorite_tweets_with(
        &self,
        parameters: &GetFavoriteTweetsParameters,
    ) -> Result<TweetsIterator, TwitterError> {
        let iterator = self.requester().get_favorite_tweets(parameters)?;
        Ok(models_iterator!(&self.client, iterator, Tweet))
    }
}
