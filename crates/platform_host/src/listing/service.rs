//! Listing service contracts plus no-op and scripted in-memory adapters.

use std::{cell::RefCell, collections::VecDeque, future::Future, pin::Pin, rc::Rc};

use super::types::{ListingError, ListingResponse};

/// Object-safe boxed future used by [`ListingService`].
pub type ListingFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service that retrieves the remote file listing.
pub trait ListingService {
    /// Issues one listing request against `url` and decodes the response body.
    fn fetch_listing<'a>(
        &'a self,
        url: &'a str,
    ) -> ListingFuture<'a, Result<ListingResponse, ListingError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op listing service for unsupported targets; always reports an empty successful listing.
pub struct NoopListingService;

impl ListingService for NoopListingService {
    fn fetch_listing<'a>(
        &'a self,
        _url: &'a str,
    ) -> ListingFuture<'a, Result<ListingResponse, ListingError>> {
        Box::pin(async {
            Ok(ListingResponse {
                success: true,
                files: Some(Vec::new()),
                message: None,
            })
        })
    }
}

#[derive(Debug, Clone, Default)]
/// Scripted listing service that replays queued outcomes and records requested URLs.
pub struct MemoryListingService {
    outcomes: Rc<RefCell<VecDeque<Result<ListingResponse, ListingError>>>>,
    requests: Rc<RefCell<Vec<String>>>,
}

impl MemoryListingService {
    /// Queues the outcome returned by the next request.
    pub fn push_outcome(&self, outcome: Result<ListingResponse, ListingError>) {
        self.outcomes.borrow_mut().push_back(outcome);
    }

    /// Returns every URL requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl ListingService for MemoryListingService {
    fn fetch_listing<'a>(
        &'a self,
        url: &'a str,
    ) -> ListingFuture<'a, Result<ListingResponse, ListingError>> {
        Box::pin(async move {
            self.requests.borrow_mut().push(url.to_string());
            self.outcomes.borrow_mut().pop_front().unwrap_or_else(|| {
                Err(ListingError::Transport(
                    "no scripted listing outcome queued".to_string(),
                ))
            })
        })
    }
}
