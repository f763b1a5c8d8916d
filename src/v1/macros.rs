/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

macro_rules! model_from_result {
    ( $c:expr, $result:expr, $model:ty ) => {{
        let client: &TwitterClient = $c;
        $result
            .payload
            .ok_or(TwitterError::ResponseMissing())
            .map(|dto| <$model>::from_dto(dto, client.config().tweet_mode, client.clone()))
    }};
}

macro_rules! models_from_result {
    ( $c:expr, $result:expr, $model:ty ) => {{
        let client: &TwitterClient = $c;
        $result
            .payload
            .ok_or(TwitterError::ResponseMissing())
            .map(|dtos| {
                dtos.into_iter()
                    .map(|dto| <$model>::from_dto(dto, client.config().tweet_mode, client.clone()))
                    .collect::<Vec<_>>()
            })
    }};
}

// Wraps a raw tweet page iterator so it yields models carrying the client
macro_rules! models_iterator {
    ( $c:expr, $iterator:expr, $model:ty ) => {{
        let client: TwitterClient = $c.clone();
        let tweet_mode = client.config().tweet_mode;
        TwitterIteratorProxy::new($iterator, move |page: TwitterResult<Vec<_>>| {
            page.payload
                .unwrap_or_default()
                .into_iter()
                .map(|dto| <$model>::from_dto(dto, tweet_mode, client.clone()))
                .collect()
        })
    }};
}

// Wraps a raw id page iterator so it yields the ids
macro_rules! ids_iterator {
    ( $iterator:expr ) => {{
        TwitterIteratorProxy::new($iterator, |page: TwitterResult<IdsCursorDto>| {
            page.payload.map(|p| p.ids).unwrap_or_default()
        })
    }};
}

pub(crate) use {ids_iterator, model_from_result, models_from_result, models_iterator};
