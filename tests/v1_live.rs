/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
mod helpers;

#[cfg(test)]
mod test {
    use crate::helpers;
    use dotenvy::dotenv;
    use futures::{StreamExt, pin_mut};
    use tweetkit::v1::{TwitterClient, stream_items};

    // Disabling for ci/cd builds since I would need to get an access token/secret
    #[ignore]
    #[tokio::test]
    async fn user_and_favorites_from_screen_name() {
        dotenv().ok();
        helpers::init_logging();
        let creds = helpers::get_full_auth_tokens().unwrap();
        let client = TwitterClient::new(creds);

        let user = client.users().get_user("twitterdev").await.unwrap();
        println!("User info: {}", user);

        let favorites = stream_items(user.favorite_tweets().unwrap()).take(5);
        pin_mut!(favorites);
        while let Some(tweet) = favorites.next().await {
            println!("Favorite: {}", tweet.unwrap());
        }
    }

    #[ignore]
    #[tokio::test]
    async fn follower_ids_first_page() {
        dotenv().ok();
        let creds = helpers::get_full_auth_tokens().unwrap();
        let client = TwitterClient::new(creds);

        let mut followers = client.users().get_follower_ids_iterator("twitterdev").unwrap();
        let page = tweetkit::v1::PagedSource::move_next(&mut followers)
            .await
            .unwrap()
            .unwrap();
        println!("{} follower ids, more: {}", page.content.len(), !page.is_last_page);
    }
}
