//! Asynchronous route fetching.
//!
//! The controller never waits for a route.  It hands a [`RouteRequest`] to a
//! [`RouteFetcher`], which resolves it elsewhere and posts the result back
//! into the event loop as [`Event::RouteFetched`].

use std::sync::Arc;
use std::sync::mpsc::Sender;

use am_core::{Coordinate, Generation};
use am_route::{RouteError, RouteProvider};

use crate::runner::LoopMessage;
use crate::state::Event;

/// One route fetch, stamped with the run it belongs to.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RouteRequest {
    pub generation: Generation,
    pub from: Coordinate,
    pub to: Coordinate,
}

/// Dispatches route requests without blocking the event loop.
pub trait RouteFetcher {
    fn fetch(&mut self, request: RouteRequest);
}

/// Resolves each request on its own worker thread and sends the result to
/// the event loop's channel.
///
/// No cancellation is passed to the provider; a result that arrives after a
/// reset is discarded by the state machine on its generation.
pub struct ThreadedFetcher<P: RouteProvider + 'static> {
    provider: Arc<P>,
    tx:       Sender<LoopMessage>,
}

impl<P: RouteProvider + 'static> ThreadedFetcher<P> {
    pub fn new(provider: Arc<P>, tx: Sender<LoopMessage>) -> Self {
        Self { provider, tx }
    }
}

impl<P: RouteProvider + 'static> RouteFetcher for ThreadedFetcher<P> {
    fn fetch(&mut self, request: RouteRequest) {
        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();

        let spawned = std::thread::Builder::new()
            .name(format!("route-fetch-{}", request.generation.0))
            .spawn(move || {
                let result = provider.fetch_route(request.from, request.to);
                // The loop may already have shut down; nothing left to tell.
                let _ = tx.send(LoopMessage::Event(Event::RouteFetched {
                    generation: request.generation,
                    result,
                }));
            });

        if let Err(e) = spawned {
            log::error!("could not spawn route fetch thread: {e}");
            let _ = self.tx.send(LoopMessage::Event(Event::RouteFetched {
                generation: request.generation,
                result:     Err(RouteError::Io(e)),
            }));
        }
    }
}
