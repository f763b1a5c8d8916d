/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # tweetkit
//!
//! This library was created for working with the Twitter API v1.1 interface.
//!
//! For further details on the Rest API refer to the [Twitter API Docs](https://developer.twitter.com/en/docs/twitter-api/v1)
//!
//! ## Features
//!
//! - Tweets
//!     - Get one or many, publish, destroy
//!     - Retweets: list, publish, destroy, page through retweeter ids
//!     - Page through a user's favorites
//! - Users
//!     - Get one or many
//!     - Page through follower ids
//! - Every request is validated against the endpoint's limits before it is sent
//! - Lower level interface returning the raw results ([`v1::RequestExecutor`])
//!
//! *Requests are signed with OAuth1. Getting the Access Token/Secret is left up to the consumer
//! of this library*
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! tweetkit = "0.1.0"
//! ```
//!
//! ## Usage
//!
//! **You will need to acquire an API key/secret from Twitter prior to using the API**
//!
//! ```rust,no_run
//! use tweetkit::v1::{Creds, TwitterClient, Tweet, stream_items};
//! use futures::{pin_mut, StreamExt};
//!
//!async fn iterate_favorites<Fut>(
//!    api_key: &str,
//!    api_secret: &str,
//!    access_token: &str,
//!    access_token_secret: &str,
//!    tweet_op: impl Fn(Tweet) -> Fut,
//!) -> anyhow::Result<()>
//!where
//!    Fut: Future<Output=anyhow::Result<bool>>,
//!{
//!    let client = TwitterClient::new(Creds::from_tokens(
//!         api_key,
//!         api_secret,
//!         Some(access_token),
//!         Some(access_token_secret),
//!     ));
//!
//!    // Look the user up, then page through the tweets they liked
//!    let user = client.users().get_user("jack").await?;
//!    let favorites = stream_items(user.favorite_tweets()?);
//!
//!    pin_mut!(favorites);
//!    while let Some(tweet) = favorites.next().await {
//!        // Do operation on tweet and stop stream if returns false
//!        if !tweet_op(tweet?).await? {
//!            break;
//!        }
//!    }
//!    Ok(())
//!}
//! ```
//!
pub mod v1;
