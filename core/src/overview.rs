//! Observable state for the listings overview screen.
//!
//! # Design
//! `OverviewModel` publishes three values through `tokio::sync::watch`
//! channels: the fetch status, the current listings, and the listing chosen
//! for the detail view. Observers hold receivers and never write.
//!
//! Every `set_filter` spawns one task into a `JoinSet` owned by the model.
//! A newer filter does not cancel an older fetch, so whichever resolves last
//! wins. Dropping the model drops the `JoinSet`, which aborts every task that
//! is still waiting on its fetch.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinSet;
use tracing::{info, warn};

use crate::api::ListingsApi;
use crate::transport::Transport;
use crate::types::{ApiStatus, Listing, ListingFilter};

/// Sending halves shared between the model and its fetch tasks.
#[derive(Debug)]
struct Published {
    status: watch::Sender<ApiStatus>,
    listings: watch::Sender<Vec<Listing>>,
    selected: watch::Sender<Option<Listing>>,
}

impl Published {
    fn new() -> Self {
        let (status, _) = watch::channel(ApiStatus::Loading);
        let (listings, _) = watch::channel(Vec::new());
        let (selected, _) = watch::channel(None);
        Self {
            status,
            listings,
            selected,
        }
    }

    // Listings go out before the status so an observer that reacts to a
    // terminal status always reads the matching list.
    fn finish(&self, listings: Vec<Listing>, status: ApiStatus) {
        self.listings.send_replace(listings);
        self.status.send_replace(status);
    }
}

/// State holder sequencing LOADING -> DONE / ERROR per filter change.
pub struct OverviewModel<T> {
    api: Arc<ListingsApi<T>>,
    published: Arc<Published>,
    tasks: JoinSet<()>,
}

impl<T: Transport> OverviewModel<T> {
    /// Create the model and start fetching all listings right away.
    ///
    /// # Panics
    /// Panics when called outside a tokio runtime.
    pub fn new(api: ListingsApi<T>) -> Self {
        let mut model = Self {
            api: Arc::new(api),
            published: Arc::new(Published::new()),
            tasks: JoinSet::new(),
        };
        model.set_filter(ListingFilter::ShowAll);
        model
    }

    /// Publish LOADING now and fetch listings for `filter` in the background.
    ///
    /// # Panics
    /// Panics when called outside a tokio runtime.
    pub fn set_filter(&mut self, filter: ListingFilter) {
        // Reap finished fetches so the set only tracks in-flight work.
        while self.tasks.try_join_next().is_some() {}

        self.published.status.send_replace(ApiStatus::Loading);

        let api = Arc::clone(&self.api);
        let published = Arc::clone(&self.published);
        self.tasks.spawn(async move {
            let result = tokio::task::spawn_blocking(move || api.fetch_listings(filter)).await;
            match result {
                Ok(Ok(listings)) => {
                    info!(%filter, count = listings.len(), "listings loaded");
                    published.finish(listings, ApiStatus::Done);
                }
                Ok(Err(error)) => {
                    warn!(%filter, %error, "listings fetch failed");
                    published.finish(Vec::new(), ApiStatus::Error);
                }
                Err(error) => {
                    warn!(%filter, %error, "listings fetch task did not complete");
                    published.finish(Vec::new(), ApiStatus::Error);
                }
            }
        });
    }

    /// Mark `listing` as the one the detail view should show.
    pub fn select_listing(&self, listing: Listing) {
        self.published.selected.send_replace(Some(listing));
    }

    /// Called once the detail view has been shown.
    pub fn clear_selection(&self) {
        self.published.selected.send_replace(None);
    }

    pub fn status(&self) -> watch::Receiver<ApiStatus> {
        self.published.status.subscribe()
    }

    pub fn listings(&self) -> watch::Receiver<Vec<Listing>> {
        self.published.listings.subscribe()
    }

    pub fn selected_listing(&self) -> watch::Receiver<Option<Listing>> {
        self.published.selected.subscribe()
    }

    pub fn current_status(&self) -> ApiStatus {
        *self.published.status.borrow()
    }
}
