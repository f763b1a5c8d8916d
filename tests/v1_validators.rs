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
    use std::sync::Arc;
    use tweetkit::v1::*;

    fn bound_validator(config: ClientConfig) -> ParametersValidator {
        let validator = ParametersValidator::new();
        validator.initialize(Arc::new(config));
        validator
    }

    fn assert_limit_error(
        err: TwitterError,
        expected_field: &str,
        expected_value: u64,
        expected_limit: LimitName,
    ) {
        match err {
            TwitterError::ArgumentLimit {
                field,
                value,
                limit_name,
                limit,
                description,
            } => {
                assert_eq!(field, expected_field);
                assert_eq!(value, expected_value);
                assert_eq!(limit_name, expected_limit);
                assert_eq!(u64::from(limit) + 1, expected_value);
                assert!(!description.is_empty());
            }
            other => panic!("expected a limit error, got {:?}", other),
        }
    }

    #[test]
    fn page_size_at_ceiling_is_accepted() {
        let validator = bound_validator(ClientConfig::default());
        let limits = TwitterLimits::default();

        let mut favorites = GetFavoriteTweetsParameters::new("jack");
        favorites.page_size = limits.tweets_get_favorite_tweets_max_size;
        validator.validate(&favorites).unwrap();

        let mut retweets = GetRetweetsParameters::new(42);
        retweets.page_size = limits.tweets_get_retweets_max_size;
        validator.validate(&retweets).unwrap();

        let mut retweeters = GetRetweeterIdsParameters::new(42);
        retweeters.page_size = limits.tweets_get_retweeter_ids_max_page_size;
        validator.validate(&retweeters).unwrap();

        let mut followers = GetFollowerIdsParameters::new(12);
        followers.page_size = limits.users_get_follower_ids_max_page_size;
        validator.validate(&followers).unwrap();
    }

    #[test]
    fn page_size_above_ceiling_is_rejected() {
        let validator = bound_validator(ClientConfig::default());
        let limits = TwitterLimits::default();

        let mut favorites = GetFavoriteTweetsParameters::new("jack");
        favorites.page_size = limits.tweets_get_favorite_tweets_max_size + 1;
        assert_limit_error(
            validator.validate(&favorites).unwrap_err(),
            "parameters.PageSize",
            201,
            LimitName::TweetsGetFavoriteTweetsMaxSize,
        );

        let mut retweets = GetRetweetsParameters::new(42);
        retweets.page_size = limits.tweets_get_retweets_max_size + 1;
        assert_limit_error(
            validator.validate(&retweets).unwrap_err(),
            "parameters.PageSize",
            101,
            LimitName::TweetsGetRetweetsMaxSize,
        );

        let mut retweeters = GetRetweeterIdsParameters::new(42);
        retweeters.page_size = limits.tweets_get_retweeter_ids_max_page_size + 1;
        assert_limit_error(
            validator.validate(&retweeters).unwrap_err(),
            "parameters.PageSize",
            101,
            LimitName::TweetsGetRetweeterIdsMaxPageSize,
        );

        let mut followers = GetFollowerIdsParameters::new(12);
        followers.page_size = limits.users_get_follower_ids_max_page_size + 1;
        assert_limit_error(
            validator.validate(&followers).unwrap_err(),
            "parameters.PageSize",
            5001,
            LimitName::UsersGetFollowerIdsMaxPageSize,
        );
    }

    #[test]
    fn limit_error_message_names_the_ceiling() {
        let validator = bound_validator(ClientConfig::default());
        let mut favorites = GetFavoriteTweetsParameters::new(12);
        favorites.page_size = 205;

        let msg = validator.validate(&favorites).unwrap_err().to_string();
        assert!(msg.contains("parameters.PageSize"));
        assert!(msg.contains("page size"));
        assert!(msg.contains("205"));
        assert!(msg.contains("TWEETS_GET_FAVORITE_TWEETS_MAX_SIZE"));
    }

    #[test]
    fn zero_page_size_is_invalid() {
        let validator = bound_validator(ClientConfig::default());
        let mut retweets = GetRetweetsParameters::new(42);
        retweets.page_size = 0;

        let err = validator.validate(&retweets).unwrap_err();
        assert!(matches!(
            err,
            TwitterError::InvalidArgument { ref field, .. } if field == "parameters.PageSize"
        ));
        assert_eq!(err.kind(), ErrorKind::Argument);
    }

    #[test]
    fn missing_tweet_is_rejected_for_every_tweet_operation() {
        let validator = bound_validator(ClientConfig::default());
        let expect_missing = |res: Result<(), TwitterError>| {
            assert!(matches!(
                res,
                Err(TwitterError::MissingArgument(ref f)) if f == "parameters.Tweet"
            ));
        };

        expect_missing(validator.validate(&GetTweetParameters::default()));
        expect_missing(validator.validate(&DestroyTweetParameters::default()));
        expect_missing(validator.validate(&GetRetweetsParameters::default()));
        expect_missing(validator.validate(&PublishRetweetParameters::default()));
        expect_missing(validator.validate(&DestroyRetweetParameters::default()));
        expect_missing(validator.validate(&GetRetweeterIdsParameters::default()));
    }

    #[test]
    fn missing_user_is_rejected_for_every_user_operation() {
        let validator = bound_validator(ClientConfig::default());
        let expect_missing = |res: Result<(), TwitterError>| {
            assert!(matches!(
                res,
                Err(TwitterError::MissingArgument(ref f)) if f == "parameters.User"
            ));
        };

        expect_missing(validator.validate(&GetFavoriteTweetsParameters::default()));
        expect_missing(validator.validate(&GetUserParameters::default()));
        expect_missing(validator.validate(&GetFollowerIdsParameters::default()));
    }

    #[test]
    fn missing_identifier_is_reported_before_the_limit() {
        let validator = bound_validator(ClientConfig::default());
        let mut favorites = GetFavoriteTweetsParameters::default();
        favorites.page_size = 10_000;

        let err = validator.validate(&favorites).unwrap_err();
        assert!(matches!(err, TwitterError::MissingArgument(_)));
    }

    #[test]
    fn non_positive_ids_are_invalid() {
        let validator = bound_validator(ClientConfig::default());

        let err = validator.validate(&GetTweetParameters::new(0)).unwrap_err();
        assert!(matches!(
            err,
            TwitterError::InvalidArgument { ref field, .. } if field == "parameters.Tweet.Id"
        ));

        let err = validator.validate(&GetUserParameters::new(-3)).unwrap_err();
        assert!(matches!(
            err,
            TwitterError::InvalidArgument { ref field, .. } if field == "parameters.User.Id"
        ));

        let err = validator.validate(&GetUserParameters::new("  ")).unwrap_err();
        assert!(matches!(
            err,
            TwitterError::InvalidArgument { ref field, .. } if field == "parameters.User.ScreenName"
        ));

        let err = validator
            .validate(&GetTweetsParameters::new([1, 2, -5]))
            .unwrap_err();
        assert!(matches!(
            err,
            TwitterError::InvalidArgument { ref field, .. } if field == "parameters.Tweets[2].Id"
        ));
    }

    #[test]
    fn lookups_are_bounded_by_request_size() {
        let validator = bound_validator(ClientConfig::default());

        let err = validator
            .validate(&GetTweetsParameters::new(Vec::<i64>::new()))
            .unwrap_err();
        assert!(matches!(err, TwitterError::MissingArgument(ref f) if f == "parameters.Tweets"));

        validator
            .validate(&GetTweetsParameters::new(1..=100))
            .unwrap();
        assert_limit_error(
            validator
                .validate(&GetTweetsParameters::new(1..=101))
                .unwrap_err(),
            "parameters.Tweets",
            101,
            LimitName::TweetsGetTweetsRequestMaxSize,
        );

        let users: Vec<UserIdentifier> = (1..=101).map(UserIdentifier::Id).collect();
        assert_limit_error(
            validator.validate(&GetUsersParameters::new(users)).unwrap_err(),
            "parameters.Users",
            101,
            LimitName::UsersGetUsersRequestMaxSize,
        );
    }

    #[test]
    fn publish_requires_text_or_media() {
        let validator = bound_validator(ClientConfig::default());

        let err = validator
            .validate(&PublishTweetParameters::new(""))
            .unwrap_err();
        assert!(matches!(err, TwitterError::MissingArgument(ref f) if f == "parameters.Text"));

        let media_only = PublishTweetParameters {
            media_ids: vec![710511363345354753],
            ..Default::default()
        };
        validator.validate(&media_only).unwrap();

        let bad_reply = PublishTweetParameters::new("hello").in_reply_to(0);
        assert!(matches!(
            validator.validate(&bad_reply),
            Err(TwitterError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn validation_is_repeatable() {
        let validator = bound_validator(ClientConfig::default());

        let ok = GetRetweetsParameters::new(42);
        assert!(validator.validate(&ok).is_ok());
        assert!(validator.validate(&ok).is_ok());

        let mut too_big = GetRetweetsParameters::new(42);
        too_big.page_size = 150;
        let first = validator.validate(&too_big).unwrap_err().to_string();
        let second = validator.validate(&too_big).unwrap_err().to_string();
        assert_eq!(first, second);
    }

    #[test]
    fn validating_before_initialize_fails() {
        helpers::init_logging();
        let validator = ParametersValidator::new();
        assert!(!validator.is_initialized());

        // Even well formed parameters are refused
        let err = validator.validate(&GetTweetParameters::new(42)).unwrap_err();
        assert!(matches!(
            err,
            TwitterError::SessionNotInitialized("ParametersValidator")
        ));
        assert_eq!(err.kind(), ErrorKind::Uninitialized);

        validator.initialize(Arc::new(ClientConfig::default()));
        assert!(validator.is_initialized());
        validator.validate(&GetTweetParameters::new(42)).unwrap();
    }

    #[test]
    fn ceilings_come_from_the_configuration() {
        let config: ClientConfig = serde_json::from_value(serde_json::json!({
            "limits": { "TWEETS_GET_FAVORITE_TWEETS_MAX_SIZE": 50 }
        }))
        .unwrap();
        assert_eq!(config.limits.tweets_get_favorite_tweets_max_size, 50);
        // Untouched entries keep their defaults
        assert_eq!(config.limits.tweets_get_retweets_max_size, 100);
        assert_eq!(config.tweet_mode, TweetMode::Extended);

        let validator = bound_validator(config);
        let mut favorites = GetFavoriteTweetsParameters::new("jack");
        favorites.page_size = 50;
        validator.validate(&favorites).unwrap();

        favorites.page_size = 51;
        assert_limit_error(
            validator.validate(&favorites).unwrap_err(),
            "parameters.PageSize",
            51,
            LimitName::TweetsGetFavoriteTweetsMaxSize,
        );
    }

    #[test]
    fn limit_names_are_symbolic() {
        assert_eq!(
            LimitName::TweetsGetFavoriteTweetsMaxSize.to_string(),
            "TWEETS_GET_FAVORITE_TWEETS_MAX_SIZE"
        );
        let limits = TwitterLimits::default();
        assert_eq!(limits.get(LimitName::TweetsGetRetweetsMaxSize), 100);
        assert_eq!(limits.get(LimitName::UsersGetFollowerIdsMaxPageSize), 5000);
    }

    #[test]
    fn limit_names_and_tweet_modes_parse() {
        let name: LimitName = "USERS_GET_USERS_REQUEST_MAX_SIZE".parse().unwrap();
        assert_eq!(name, LimitName::UsersGetUsersRequestMaxSize);
        assert!("users_get_users".parse::<LimitName>().is_err());

        assert_eq!("compat".parse::<TweetMode>().unwrap(), TweetMode::Compat);
        assert_eq!(TweetMode::Extended.to_string(), "extended");
    }

    #[test]
    fn clamp_lowers_to_the_ceiling() {
        let limits = TwitterLimits {
            users_get_follower_ids_max_page_size: 1000,
            ..Default::default()
        };
        assert_eq!(limits.clamp(LimitName::UsersGetFollowerIdsMaxPageSize, 5000), 1000);
        assert_eq!(limits.clamp(LimitName::UsersGetFollowerIdsMaxPageSize, 200), 200);
    }
}
