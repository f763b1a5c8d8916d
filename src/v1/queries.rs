/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

// Builds the request for each endpoint out of already validated parameters.

use crate::v1::errors::TwitterError;
use crate::v1::parameters::*;
use crate::v1::{ClientConfig, TweetIdentifier, TweetMode, TwitterRequest, UserIdentifier};
use reqwest::Url;

fn endpoint(config: &ClientConfig, path: &str) -> Result<Url, TwitterError> {
    Ok(Url::parse(&config.api_origin)?.join(path)?)
}

// Small helper to keep the optional query params terse
struct Query<'a> {
    url: &'a mut Url,
}

impl<'a> Query<'a> {
    fn new(url: &'a mut Url) -> Self {
        Self { url }
    }

    fn add(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.url.query_pairs_mut().append_pair(key, &value.to_string());
        self
    }

    fn add_opt<V: ToString>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.add(key, value);
        }
        self
    }

    fn tweet_mode(&mut self, mode: TweetMode) -> &mut Self {
        if mode == TweetMode::Extended {
            self.add("tweet_mode", mode);
        }
        self
    }

    fn user(&mut self, user: Option<&UserIdentifier>) -> &mut Self {
        match user {
            Some(UserIdentifier::Id(id)) => self.add("user_id", id),
            Some(UserIdentifier::ScreenName(name)) => self.add("screen_name", name),
            None => self,
        }
    }
}

fn tweet_id(tweet: Option<&TweetIdentifier>) -> Result<i64, TwitterError> {
    tweet
        .map(|t| t.id)
        .ok_or_else(|| TwitterError::MissingArgument("parameters.Tweet".to_string()))
}

// Tweets

pub(crate) fn get_tweet(config: &ClientConfig, p: &GetTweetParameters) -> Result<TwitterRequest, TwitterError> {
    let mut url = endpoint(config, "statuses/show.json")?;
    Query::new(&mut url)
        .add("id", tweet_id(p.tweet.as_ref())?)
        .add_opt("include_entities", p.include_entities)
        .add_opt("include_my_retweet", p.include_my_retweet)
        .add_opt("trim_user", p.trim_user)
        .tweet_mode(config.tweet_mode);
    Ok(TwitterRequest::get(url))
}

pub(crate) fn get_tweets(config: &ClientConfig, p: &GetTweetsParameters) -> Result<TwitterRequest, TwitterError> {
    let ids = p
        .tweets
        .iter()
        .map(|t| t.id.to_string())
        .collect::<Vec<_>>()
        .join(",");
    let mut url = endpoint(config, "statuses/lookup.json")?;
    Query::new(&mut url)
        .add("id", ids)
        .add_opt("include_entities", p.include_entities)
        .add_opt("trim_user", p.trim_user)
        .tweet_mode(config.tweet_mode);
    Ok(TwitterRequest::get(url))
}

pub(crate) fn publish_tweet(config: &ClientConfig, p: &PublishTweetParameters) -> Result<TwitterRequest, TwitterError> {
    let media_ids = (!p.media_ids.is_empty()).then(|| {
        p.media_ids
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(",")
    });
    let mut url = endpoint(config, "statuses/update.json")?;
    Query::new(&mut url)
        .add_opt("status", p.text.as_deref())
        .add_opt("in_reply_to_status_id", p.in_reply_to_tweet.map(|t| t.id))
        .add_opt("media_ids", media_ids)
        .add_opt("possibly_sensitive", p.possibly_sensitive)
        .add_opt("trim_user", p.trim_user)
        .tweet_mode(config.tweet_mode);
    Ok(TwitterRequest::post(url))
}

pub(crate) fn destroy_tweet(config: &ClientConfig, p: &DestroyTweetParameters) -> Result<TwitterRequest, TwitterError> {
    let id = tweet_id(p.tweet.as_ref())?;
    let mut url = endpoint(config, &format!("statuses/destroy/{}.json", id))?;
    Query::new(&mut url)
        .add_opt("trim_user", p.trim_user)
        .tweet_mode(config.tweet_mode);
    Ok(TwitterRequest::post(url))
}

pub(crate) fn get_favorite_tweets(
    config: &ClientConfig,
    p: &GetFavoriteTweetsParameters,
    max_id: Option<i64>,
) -> Result<TwitterRequest, TwitterError> {
    let mut url = endpoint(config, "favorites/list.json")?;
    Query::new(&mut url)
        .user(p.user.as_ref())
        .add("count", p.page_size)
        .add_opt("since_id", p.since_id)
        .add_opt("max_id", max_id)
        .add_opt("include_entities", p.include_entities)
        .tweet_mode(config.tweet_mode);
    Ok(TwitterRequest::get(url))
}

// Retweets

pub(crate) fn get_retweets(config: &ClientConfig, p: &GetRetweetsParameters) -> Result<TwitterRequest, TwitterError> {
    let id = tweet_id(p.tweet.as_ref())?;
    let mut url = endpoint(config, &format!("statuses/retweets/{}.json", id))?;
    Query::new(&mut url)
        .add("count", p.page_size)
        .add_opt("trim_user", p.trim_user)
        .tweet_mode(config.tweet_mode);
    Ok(TwitterRequest::get(url))
}

pub(crate) fn publish_retweet(config: &ClientConfig, p: &PublishRetweetParameters) -> Result<TwitterRequest, TwitterError> {
    let id = tweet_id(p.tweet.as_ref())?;
    let mut url = endpoint(config, &format!("statuses/retweet/{}.json", id))?;
    Query::new(&mut url)
        .add_opt("trim_user", p.trim_user)
        .tweet_mode(config.tweet_mode);
    Ok(TwitterRequest::post(url))
}

pub(crate) fn destroy_retweet(config: &ClientConfig, p: &DestroyRetweetParameters) -> Result<TwitterRequest, TwitterError> {
    let id = tweet_id(p.tweet.as_ref())?;
    let mut url = endpoint(config, &format!("statuses/unretweet/{}.json", id))?;
    Query::new(&mut url)
        .add_opt("trim_user", p.trim_user)
        .tweet_mode(config.tweet_mode);
    Ok(TwitterRequest::post(url))
}

pub(crate) fn get_retweeter_ids(
    config: &ClientConfig,
    p: &GetRetweeterIdsParameters,
    cursor: Option<&str>,
) -> Result<TwitterRequest, TwitterError> {
    let mut url = endpoint(config, "statuses/retweeters/ids.json")?;
    Query::new(&mut url)
        .add("id", tweet_id(p.tweet.as_ref())?)
        .add("count", p.page_size)
        .add_opt("cursor", cursor)
        .add("stringify_ids", false);
    Ok(TwitterRequest::get(url))
}

// Users

pub(crate) fn get_user(config: &ClientConfig, p: &GetUserParameters) -> Result<TwitterRequest, TwitterError> {
    let mut url = endpoint(config, "users/show.json")?;
    Query::new(&mut url)
        .user(p.user.as_ref())
        .add_opt("include_entities", p.include_entities)
        .tweet_mode(config.tweet_mode);
    Ok(TwitterRequest::get(url))
}

pub(crate) fn get_users(config: &ClientConfig, p: &GetUsersParameters) -> Result<TwitterRequest, TwitterError> {
    let (ids, names): (Vec<_>, Vec<_>) = p
        .users
        .iter()
        .partition(|u| matches!(u, UserIdentifier::Id(_)));
    let join = |users: Vec<&UserIdentifier>| {
        (!users.is_empty()).then(|| {
            users
                .iter()
                .map(|u| match u {
                    UserIdentifier::Id(id) => id.to_string(),
                    UserIdentifier::ScreenName(name) => name.clone(),
                })
                .collect::<Vec<_>>()
                .join(",")
        })
    };

    let mut url = endpoint(config, "users/lookup.json")?;
    Query::new(&mut url)
        .add_opt("user_id", join(ids))
        .add_opt("screen_name", join(names))
        .add_opt("include_entities", p.include_entities)
        .tweet_mode(config.tweet_mode);
    Ok(TwitterRequest::get(url))
}

pub(crate) fn get_follower_ids(
    config: &ClientConfig,
    p: &GetFollowerIdsParameters,
    cursor: Option<&str>,
) -> Result<TwitterRequest, TwitterError> {
    let mut url = endpoint(config, "followers/ids.json")?;
    Query::new(&mut url)
        .user(p.user.as_ref())
        .add("count", p.page_size)
        .add_opt("cursor", cursor)
        .add("stringify_ids", false);
    Ok(TwitterRequest::get(url))
}
