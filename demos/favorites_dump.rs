/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate tweetkit;

use anyhow::Result;
use dotenvy::dotenv;
use futures::{StreamExt, pin_mut};
use std::sync::atomic::{AtomicUsize, Ordering};
use tweetkit::v1::{Creds, Tweet, TwitterClient, stream_items};

async fn iterate_favorites<Fut>(
    client: &TwitterClient,
    screen_name: &str,
    tweet_op: impl Fn(Tweet) -> Fut,
) -> Result<()>
where
    Fut: Future<Output = Result<bool>>,
{
    // Look the user up first so the favorites come back as models bound to the client
    let user = client.users().get_user(screen_name).await?;
    println!("Favorites of {}", user);

    let favorites = stream_items(user.favorite_tweets()?);

    pin_mut!(favorites);
    while let Some(tweet) = favorites.next().await {
        // Do operation on tweet and stop stream if returns false
        if !tweet_op(tweet?).await? {
            break;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    // The API key/secret and the Access Token/Secret are obtained from the Twitter developer portal
    let api_key = std::env::var("TWITTER_API_KEY")?;
    let api_secret = std::env::var("TWITTER_API_SECRET")?;
    let access_token = std::env::var("TWITTER_ACCESS_TOKEN")?;
    let access_token_secret = std::env::var("TWITTER_ACCESS_TOKEN_SECRET")?;
    let screen_name = std::env::args().nth(1).unwrap_or_else(|| "twitterdev".to_string());

    let client = TwitterClient::new(Creds::from_tokens(
        &api_key,
        &api_secret,
        Some(&access_token),
        Some(&access_token_secret),
    ));

    let max_count = 50;
    let count = AtomicUsize::new(0);
    let dump = |tweet: Tweet| {
        let seen = count.fetch_add(1, Ordering::Relaxed) + 1;
        println!(
            "{:>4} [{}] {}",
            seen,
            tweet
                .created_at
                .map_or("".to_string(), |d| d.format("%Y-%m-%d").to_string()),
            tweet.text.replace('\n', " ")
        );
        async move { anyhow::Ok(seen < max_count) }
    };

    iterate_favorites(&client, &screen_name, dump).await?;
    Ok(())
}
