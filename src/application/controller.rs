use std::cell::RefCell;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use leptos::{RwSignal, SignalUpdate};

use crate::domain::{
    errors::PredictionError,
    logging::LogComponent,
    prediction::{Prediction, PredictionSource},
    state::{FetchOutcome, FetchTicket, PredictionState},
};
use crate::{log_error, log_info, log_warn};

/// Shared handle to a [`PredictionState`].
///
/// Returns `None` when the state no longer exists (e.g. the owning
/// component was unmounted).
pub trait StateCell: Clone {
    fn update_state<R>(&self, f: impl FnOnce(&mut PredictionState) -> R) -> Option<R>;
}

impl StateCell for RwSignal<PredictionState> {
    fn update_state<R>(&self, f: impl FnOnce(&mut PredictionState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl StateCell for Rc<RefCell<PredictionState>> {
    fn update_state<R>(&self, f: impl FnOnce(&mut PredictionState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Releases the loading flag if the request is dropped before completing.
struct InFlight<C: StateCell> {
    cell: C,
    ticket: Option<FetchTicket>,
}

impl<C: StateCell> InFlight<C> {
    fn finish(mut self, result: Result<Prediction, PredictionError>) -> FetchOutcome {
        let Some(ticket) = self.ticket.take() else {
            return FetchOutcome::Detached;
        };
        self.cell
            .update_state(|state| state.complete(ticket, result))
            .unwrap_or(FetchOutcome::Detached)
    }
}

impl<C: StateCell> Drop for InFlight<C> {
    fn drop(&mut self) {
        if let Some(ticket) = self.ticket.take() {
            log_warn!(
                LogComponent::Application("PredictionController"),
                "Request {} for {} dropped before completion",
                ticket.generation(),
                ticket.asset()
            );
            self.cell.update_state(|state| state.abandon(ticket));
        }
    }
}

/// Runs "fetch prediction for the current selection" against a source.
pub struct PredictionController<S> {
    source: Rc<S>,
}

impl<S> Clone for PredictionController<S> {
    fn clone(&self) -> Self {
        Self { source: Rc::clone(&self.source) }
    }
}

impl<S: PredictionSource + 'static> PredictionController<S> {
    pub fn new(source: S) -> Self {
        Self { source: Rc::new(source) }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Start a request for the currently selected asset.
    ///
    /// The loading flag is raised before this returns; the returned future
    /// performs the request and applies its outcome. Dropping the future
    /// early releases the flag.
    pub fn fetch<C: StateCell + 'static>(&self, cell: C) -> LocalBoxFuture<'static, FetchOutcome> {
        let Some(ticket) = cell.update_state(PredictionState::begin_fetch) else {
            return futures::future::ready(FetchOutcome::Detached).boxed_local();
        };

        log_info!(
            LogComponent::Application("PredictionController"),
            "🔮 Request {} started for {}",
            ticket.generation(),
            ticket.asset()
        );

        let guard = InFlight { cell, ticket: Some(ticket) };
        let source = Rc::clone(&self.source);

        async move {
            let result = source.fetch_prediction(ticket.asset()).await;
            if let Err(err) = &result {
                log_error!(
                    LogComponent::Application("PredictionController"),
                    "Failed to fetch prediction for {}: {}",
                    ticket.asset(),
                    err
                );
            }
            let outcome = guard.finish(result);
            log_info!(
                LogComponent::Application("PredictionController"),
                "Request {} finished: {:?}",
                ticket.generation(),
                outcome
            );
            outcome
        }
        .boxed_local()
    }
}
