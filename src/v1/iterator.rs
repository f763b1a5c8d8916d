/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Cursor driven paging over remote collections.
//!
//! [`TwitterPageIterator`] owns the cursor state machine and is shared by every paged endpoint.
//! Endpoints differ only in how a page is fetched and how the next cursor is read from it, both
//! of which are supplied as closures. [`TwitterIteratorProxy`] turns the raw pages into domain
//! objects without touching the cursor.
//!
//! ```rust,no_run
//! use tweetkit::v1::{PagedSource, TwitterClient, TwitterError};
//!
//! async fn count_favorites(client: TwitterClient) -> Result<usize, TwitterError> {
//!     let mut favorites = client.tweets().get_favorite_tweets("jack")?;
//!     let mut count = 0;
//!     while favorites.has_more() {
//!         if let Some(page) = favorites.move_next().await? {
//!             count += page.content.len();
//!         }
//!     }
//!     Ok(count)
//! }
//! ```

use crate::v1::errors::TwitterError;
use async_stream::try_stream;
use async_trait::async_trait;
use futures::Stream;
use futures::future::BoxFuture;

/// One page handed back by a [`PagedSource`]
#[derive(Debug, Clone)]
pub struct IteratorPage<T, C> {
    pub content: T,

    /// Cursor the following page will be requested with, `None` on the last page
    pub next_cursor: Option<C>,

    pub is_last_page: bool,
}

impl<T, C> IteratorPage<T, C> {
    /// Replaces the page content, keeping the cursor information
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> IteratorPage<U, C> {
        IteratorPage {
            content: f(self.content),
            next_cursor: self.next_cursor,
            is_last_page: self.is_last_page,
        }
    }
}

/// Something that can be consumed one page at a time.
///
/// Instances are single pass. Starting over requires building a new one. Pulling pages from
/// the same instance concurrently is not supported.
#[async_trait]
pub trait PagedSource: Send {
    type Content: Send;
    type Cursor: Send;

    /// Whether another call to [`PagedSource::move_next`] can yield a page
    fn has_more(&self) -> bool;

    /// Fetches the next page.
    ///
    /// Returns `Ok(None)` without issuing a request once the source is exhausted. On error the
    /// cursor is left untouched so the same call can be retried.
    async fn move_next(&mut self) -> Result<Option<IteratorPage<Self::Content, Self::Cursor>>, TwitterError>;
}

/// Where a [`TwitterPageIterator`] is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IteratorState {
    /// Nothing requested yet
    Fresh,
    /// At least one page fetched and the server reported more
    Active,
    /// The server reported the end of the collection
    Exhausted,
}

type FetchPage<R, C> = Box<dyn Fn(Option<C>) -> BoxFuture<'static, Result<R, TwitterError>> + Send + Sync>;
type ReadCursor<R, C> = Box<dyn Fn(&R) -> Option<C> + Send + Sync>;

/// Generic cursor iterator over pages of type `R`.
///
/// `fetch_page` is called with the current cursor (the caller supplied starting cursor on the
/// first call). `next_cursor` reads the continuation out of a fetched page, returning `None`
/// when the page is the last one. What marks the last page is endpoint specific.
pub struct TwitterPageIterator<R, C = String> {
    fetch_page: FetchPage<R, C>,
    next_cursor: ReadCursor<R, C>,
    cursor: Option<C>,
    state: IteratorState,
}

impl<R, C> TwitterPageIterator<R, C>
where
    R: Send + 'static,
    C: Clone + Send + Sync + std::fmt::Debug + 'static,
{
    pub fn new<F, N>(initial_cursor: Option<C>, fetch_page: F, next_cursor: N) -> Self
    where
        F: Fn(Option<C>) -> BoxFuture<'static, Result<R, TwitterError>> + Send + Sync + 'static,
        N: Fn(&R) -> Option<C> + Send + Sync + 'static,
    {
        Self {
            fetch_page: Box::new(fetch_page),
            next_cursor: Box::new(next_cursor),
            cursor: initial_cursor,
            state: IteratorState::Fresh,
        }
    }

    pub fn state(&self) -> IteratorState {
        self.state
    }

    /// The cursor the next page will be requested with
    pub fn cursor(&self) -> Option<&C> {
        self.cursor.as_ref()
    }
}

impl<R, C> std::fmt::Debug for TwitterPageIterator<R, C>
where
    C: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwitterPageIterator")
            .field("cursor", &self.cursor)
            .field("state", &self.state)
            .finish()
    }
}

#[async_trait]
impl<R, C> PagedSource for TwitterPageIterator<R, C>
where
    R: Send + 'static,
    C: Clone + Send + Sync + std::fmt::Debug + 'static,
{
    type Content = R;
    type Cursor = C;

    fn has_more(&self) -> bool {
        self.state != IteratorState::Exhausted
    }

    async fn move_next(&mut self) -> Result<Option<IteratorPage<R, C>>, TwitterError> {
        if self.state == IteratorState::Exhausted {
            return Ok(None);
        }

        let content = (self.fetch_page)(self.cursor.clone()).await?;
        let next_cursor = (self.next_cursor)(&content);

        self.state = match next_cursor {
            Some(_) => IteratorState::Active,
            None => IteratorState::Exhausted,
        };
        log::trace!("page fetched, next cursor: {:?}, state: {:?}", next_cursor, self.state);
        self.cursor = next_cursor.clone();

        Ok(Some(IteratorPage {
            content,
            is_last_page: next_cursor.is_none(),
            next_cursor,
        }))
    }
}

/// Wraps a [`PagedSource`] of raw results and maps every page into domain items.
///
/// The transform is a pure projection: it never issues requests and cannot see the cursor.
pub struct TwitterIteratorProxy<S, T>
where
    S: PagedSource,
{
    source: S,
    transform: Box<dyn Fn(S::Content) -> Vec<T> + Send + Sync>,
}

impl<S, T> TwitterIteratorProxy<S, T>
where
    S: PagedSource,
{
    pub fn new(source: S, transform: impl Fn(S::Content) -> Vec<T> + Send + Sync + 'static) -> Self {
        Self {
            source,
            transform: Box::new(transform),
        }
    }

    /// The wrapped source
    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S, T> std::fmt::Debug for TwitterIteratorProxy<S, T>
where
    S: PagedSource + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwitterIteratorProxy")
            .field("source", &self.source)
            .finish()
    }
}

#[async_trait]
impl<S, T> PagedSource for TwitterIteratorProxy<S, T>
where
    S: PagedSource,
    T: Send + 'static,
{
    type Content = Vec<T>;
    type Cursor = S::Cursor;

    fn has_more(&self) -> bool {
        self.source.has_more()
    }

    async fn move_next(&mut self) -> Result<Option<IteratorPage<Vec<T>, S::Cursor>>, TwitterError> {
        let page = self.source.move_next().await?;
        Ok(page.map(|page| page.map(|content| (self.transform)(content))))
    }
}

/// Flattens a paged source of items into a stream, fetching pages as the stream is polled
pub fn stream_items<S, T>(mut source: S) -> impl Stream<Item = Result<T, TwitterError>>
where
    S: PagedSource<Content = Vec<T>>,
{
    try_stream! {
        while source.has_more() {
            if let Some(page) = source.move_next().await? {
                for item in page.content {
                    yield item;
                }
            }
        }
    }
}
