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
    use crate::helpers::{self, query_param};
    use futures::TryStreamExt;
    use serde_json::json;
    use tweetkit::v1::*;

    fn jack() -> serde_json::Value {
        json!({
            "id": 12,
            "screen_name": "jack",
            "name": "jack",
            "description": "",
            "followers_count": 6000000,
            "verified": true,
            "status": {"id": 20, "full_text": "just setting up my twttr"}
        })
    }

    #[tokio::test]
    async fn get_user_by_screen_name() {
        let (client, transport) = helpers::stub_client();
        transport.push_json(200, jack());

        let user = client.users().get_user("jack").await.unwrap();
        assert_eq!(user.id, 12);
        assert_eq!(user.screen_name, "jack");
        assert_eq!(user.description, None);
        assert_eq!(user.followers_count, 6000000);
        assert!(user.is_verified);
        assert_eq!(
            user.status.as_ref().map(|t| t.text.as_str()),
            Some("just setting up my twttr")
        );

        let request = transport.last_request();
        assert_eq!(request.url.path(), "/1.1/users/show.json");
        assert_eq!(query_param(&request, "screen_name").as_deref(), Some("jack"));
        assert_eq!(query_param(&request, "user_id"), None);
    }

    #[tokio::test]
    async fn get_user_rejects_missing_user() {
        let (client, transport) = helpers::stub_client();

        let err = client
            .users()
            .get_user_with(&GetUserParameters::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Argument);
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn get_users_splits_ids_and_names() {
        let (client, transport) = helpers::stub_client();
        transport.push_json(200, json!([jack(), {"id": 13, "screen_name": "biz"}]));

        let users = client
            .users()
            .get_users(vec![
                UserIdentifier::from(12),
                UserIdentifier::from("biz"),
                UserIdentifier::from(14),
            ])
            .await
            .unwrap();
        assert_eq!(users.len(), 2);

        let request = transport.last_request();
        assert_eq!(request.url.path(), "/1.1/users/lookup.json");
        assert_eq!(query_param(&request, "user_id").as_deref(), Some("12,14"));
        assert_eq!(query_param(&request, "screen_name").as_deref(), Some("biz"));
    }

    #[tokio::test]
    async fn follower_ids_stream_across_pages() {
        let (client, transport) = helpers::stub_client();
        transport.push_json(200, json!({"ids": [1, 2, 3], "next_cursor_str": "1374004777531007833"}));
        transport.push_json(200, json!({"ids": [4], "next_cursor_str": "0"}));

        let ids: Vec<i64> = stream_items(client.users().get_follower_ids_iterator(12).unwrap())
            .try_collect()
            .await
            .unwrap();
        assert_eq!(ids, vec![1, 2, 3, 4]);

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].url.path(), "/1.1/followers/ids.json");
        assert_eq!(query_param(&requests[0], "user_id").as_deref(), Some("12"));
        assert_eq!(query_param(&requests[0], "count").as_deref(), Some("5000"));
        assert_eq!(query_param(&requests[0], "cursor"), None);
        assert_eq!(
            query_param(&requests[1], "cursor").as_deref(),
            Some("1374004777531007833")
        );
    }

    #[tokio::test]
    async fn follower_ids_stop_on_failure() {
        let (client, transport) = helpers::stub_client();
        transport.push_json(200, json!({"ids": [1], "next_cursor_str": "7"}));
        transport.push_json(503, json!({"errors": [{"code": 130, "message": "Over capacity"}]}));

        let result: Result<Vec<i64>, TwitterError> =
            stream_items(client.users().get_follower_ids_iterator("jack").unwrap())
                .try_collect()
                .await;
        assert!(matches!(result, Err(TwitterError::ApiResponse(503, _))));
    }

    #[tokio::test]
    async fn user_model_pages_its_favorites() {
        let (client, transport) = helpers::stub_client();
        transport.push_json(200, jack());
        let user = client.users().get_user("jack").await.unwrap();

        transport.push_json(200, json!([{"id": 30, "text": "liked"}]));
        transport.push_json(200, json!([]));
        let favorites: Vec<Tweet> = stream_items(user.favorite_tweets().unwrap())
            .try_collect()
            .await
            .unwrap();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].text, "liked");

        let request = &transport.requests()[1];
        assert_eq!(request.url.path(), "/1.1/favorites/list.json");
        assert_eq!(query_param(request, "user_id").as_deref(), Some("12"));
    }

    #[tokio::test]
    async fn user_model_pages_its_followers() {
        let (client, transport) = helpers::stub_client();
        transport.push_json(200, jack());
        let user = client.users().get_user("jack").await.unwrap();

        transport.push_json(200, json!({"ids": [5, 6], "next_cursor_str": "0"}));
        let mut followers = user.follower_ids().unwrap();
        let page = followers.move_next().await.unwrap().unwrap();
        assert_eq!(page.content, vec![5, 6]);
        assert!(!followers.has_more());
    }

    #[tokio::test]
    async fn oversized_follower_page_is_rejected() {
        let (client, transport) = helpers::stub_client();
        let parameters = GetFollowerIdsParameters {
            page_size: 5001,
            ..GetFollowerIdsParameters::new(12)
        };

        let err = client
            .users()
            .get_follower_ids_iterator_with(&parameters)
            .unwrap_err();
        assert!(matches!(
            err,
            TwitterError::ArgumentLimit {
                limit_name: LimitName::UsersGetFollowerIdsMaxPageSize,
                limit: 5000,
                ..
            }
        ));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn user_model_iterators_follow_lowered_ceilings() {
        let config = ClientConfig {
            limits: TwitterLimits {
                tweets_get_favorite_tweets_max_size: 50,
                users_get_follower_ids_max_page_size: 1000,
                ..Default::default()
            },
            ..Default::default()
        };
        let (client, transport) = helpers::stub_client_with_config(config);
        transport.push_json(200, jack());
        let user = client.users().get_user("jack").await.unwrap();

        transport.push_json(200, json!([]));
        user.favorite_tweets().unwrap().move_next().await.unwrap();
        assert_eq!(query_param(&transport.last_request(), "count").as_deref(), Some("50"));

        transport.push_json(200, json!({"ids": [], "next_cursor_str": "0"}));
        user.follower_ids().unwrap().move_next().await.unwrap();
        assert_eq!(query_param(&transport.last_request(), "count").as_deref(), Some("1000"));
    }
}
