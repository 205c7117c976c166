use std::cell::RefCell;
use std::collections::VecDeque;
use std::future::Future;
use std::rc::Rc;

use cryptoracle_wasm::application::PredictionController;
use cryptoracle_wasm::config::ClientConfig;
use cryptoracle_wasm::domain::errors::PredictionError;
use cryptoracle_wasm::domain::prediction::{Asset, Prediction, PredictionSource, all_assets};
use cryptoracle_wasm::domain::state::{FetchOutcome, PredictionState};
use cryptoracle_wasm::infrastructure::http::PredictionClient;
use cryptoracle_wasm::presentation::ViewModel;
use futures::channel::oneshot;
use futures::executor::{LocalPool, block_on};
use futures::task::LocalSpawnExt;

/// Replays canned responses and records which assets were requested.
#[derive(Default)]
struct ScriptedSource {
    responses: RefCell<VecDeque<Result<Prediction, PredictionError>>>,
    requested: RefCell<Vec<Asset>>,
}

impl ScriptedSource {
    fn with(responses: Vec<Result<Prediction, PredictionError>>) -> Self {
        Self { responses: RefCell::new(responses.into()), requested: RefCell::default() }
    }
}

impl PredictionSource for ScriptedSource {
    fn fetch_prediction(&self, asset: Asset) -> impl Future<Output = Result<Prediction, PredictionError>> {
        self.requested.borrow_mut().push(asset);
        let next = self
            .responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(PredictionError::Network("no scripted response".into())));
        futures::future::ready(next)
    }
}

/// Hands out one oneshot per request so tests decide when each completes.
#[derive(Default)]
struct DeferredSource {
    pending: RefCell<Vec<oneshot::Sender<Result<Prediction, PredictionError>>>>,
}

impl PredictionSource for DeferredSource {
    fn fetch_prediction(&self, _asset: Asset) -> impl Future<Output = Result<Prediction, PredictionError>> {
        let (tx, rx) = oneshot::channel();
        self.pending.borrow_mut().push(tx);
        async move {
            rx.await
                .unwrap_or_else(|_| Err(PredictionError::Network("sender dropped".into())))
        }
    }
}

struct PanickingSource;

impl PredictionSource for PanickingSource {
    fn fetch_prediction(&self, _asset: Asset) -> impl Future<Output = Result<Prediction, PredictionError>> {
        futures::future::lazy(|_| -> Result<Prediction, PredictionError> { panic!("response handler blew up") })
    }
}

fn sample(asset: Asset) -> Prediction {
    Prediction::try_new(
        asset,
        vec!["2024-01-01".into(), "2024-01-02".into()],
        vec![100.0, 105.5],
    )
    .unwrap()
}

fn new_state() -> Rc<RefCell<PredictionState>> {
    Rc::new(RefCell::new(PredictionState::new()))
}

#[test]
fn loading_is_set_before_any_suspension() {
    for asset in all_assets() {
        let controller = PredictionController::new(DeferredSource::default());
        let state = new_state();
        state.borrow_mut().select(asset);

        let request = controller.fetch(state.clone());
        assert!(state.borrow().is_loading(), "{asset} not loading");
        assert!(ViewModel::from_state(&state.borrow()).button_disabled);
        drop(request);
    }
}

#[test]
fn successful_fetch_sets_result_and_list() {
    let controller = PredictionController::new(ScriptedSource::with(vec![Ok(sample(Asset::Bitcoin))]));
    let state = new_state();

    let outcome = block_on(controller.fetch(state.clone()));

    assert_eq!(outcome, FetchOutcome::Applied);
    let state = state.borrow();
    assert!(!state.is_loading());
    let result = state.result().unwrap();
    assert_eq!(result.dates(), ["2024-01-01", "2024-01-02"]);
    assert_eq!(result.predicted(), [100.0, 105.5]);

    let vm = ViewModel::from_state(&state);
    assert_eq!(vm.result.unwrap().entries, vec!["2024-01-01: $100.00", "2024-01-02: $105.50"]);
}

#[test]
fn failed_fetch_keeps_previous_result() {
    let controller = PredictionController::new(ScriptedSource::with(vec![
        Ok(sample(Asset::Bitcoin)),
        Err(PredictionError::Network("connection reset".into())),
    ]));
    let state = new_state();

    block_on(controller.fetch(state.clone()));
    let before = state.borrow().result().cloned();

    let outcome = block_on(controller.fetch(state.clone()));

    assert_eq!(outcome, FetchOutcome::Failed);
    assert!(!state.borrow().is_loading());
    assert_eq!(state.borrow().result().cloned(), before);
}

#[test]
fn failure_without_prior_result_stays_empty() {
    let controller = PredictionController::new(ScriptedSource::with(vec![Err(PredictionError::Http {
        status: 500,
        message: "Key 'prices' missing".into(),
    })]));
    let state = new_state();

    block_on(controller.fetch(state.clone()));

    assert!(state.borrow().result().is_none());
    assert!(!state.borrow().is_loading());
}

#[test]
fn loading_clears_when_handler_panics() {
    let controller = PredictionController::new(PanickingSource);
    let state = new_state();
    let request = controller.fetch(state.clone());

    let caught = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| block_on(request)));

    assert!(caught.is_err());
    assert!(!state.borrow().is_loading());
}

#[test]
fn request_targets_selected_asset_only() {
    let controller = PredictionController::new(ScriptedSource::with(vec![Ok(sample(Asset::Ethereum))]));
    let state = new_state();
    state.borrow_mut().select(Asset::Ethereum);

    block_on(controller.fetch(state.clone()));
    assert_eq!(*controller.source().requested.borrow(), vec![Asset::Ethereum]);

    let url = PredictionClient::new(&ClientConfig::default()).prediction_url(Asset::Ethereum);
    assert!(url.contains("coin=ethereum"));
    for other in all_assets().into_iter().filter(|a| *a != Asset::Ethereum) {
        assert!(!url.contains(other.id()), "{url} mentions {other}");
    }
}

#[test]
fn changing_selection_does_not_fetch() {
    let controller = PredictionController::new(ScriptedSource::default());
    let state = new_state();
    state.borrow_mut().select(Asset::Cardano);
    state.borrow_mut().select(Asset::Ripple);
    assert!(controller.source().requested.borrow().is_empty());
    assert!(!state.borrow().is_loading());
}

#[test]
fn repeated_fetch_is_idempotent() {
    let once = new_state();
    let controller = PredictionController::new(ScriptedSource::with(vec![Ok(sample(Asset::Bitcoin))]));
    block_on(controller.fetch(once.clone()));

    let twice = new_state();
    let controller = PredictionController::new(ScriptedSource::with(vec![
        Ok(sample(Asset::Bitcoin)),
        Ok(sample(Asset::Bitcoin)),
    ]));
    block_on(controller.fetch(twice.clone()));
    block_on(controller.fetch(twice.clone()));

    assert_eq!(once.borrow().result(), twice.borrow().result());
    assert!(!twice.borrow().is_loading());
}

#[test]
fn overlapping_requests_only_apply_latest() {
    let mut pool = LocalPool::new();
    let spawner = pool.spawner();
    let controller = PredictionController::new(DeferredSource::default());
    let state = new_state();
    let outcomes = Rc::new(RefCell::new(Vec::new()));

    for _ in 0..2 {
        let request = controller.fetch(state.clone());
        let outcomes = outcomes.clone();
        spawner
            .spawn_local(async move {
                let outcome = request.await;
                outcomes.borrow_mut().push(outcome);
            })
            .unwrap();
        pool.run_until_stalled();
    }
    assert_eq!(state.borrow().generation(), 2);

    let mut senders = std::mem::take(&mut *controller.source().pending.borrow_mut());
    let newer = senders.pop().unwrap();
    let older = senders.pop().unwrap();

    older.send(Ok(sample(Asset::Bitcoin))).unwrap();
    pool.run_until_stalled();
    assert_eq!(*outcomes.borrow(), vec![FetchOutcome::Superseded]);
    assert!(state.borrow().is_loading());
    assert!(state.borrow().result().is_none());

    let latest = Prediction::try_new(Asset::Bitcoin, vec!["2024-02-01".into()], vec![7.0]).unwrap();
    newer.send(Ok(latest.clone())).unwrap();
    pool.run_until_stalled();
    assert_eq!(*outcomes.borrow(), vec![FetchOutcome::Superseded, FetchOutcome::Applied]);
    assert!(!state.borrow().is_loading());
    assert_eq!(state.borrow().result(), Some(&latest));
}

#[test]
fn response_for_abandoned_selection_is_discarded() {
    let mut pool = LocalPool::new();
    let spawner = pool.spawner();
    let controller = PredictionController::new(DeferredSource::default());
    let state = new_state();
    let outcome = Rc::new(RefCell::new(None));

    let request = controller.fetch(state.clone());
    {
        let outcome = outcome.clone();
        spawner
            .spawn_local(async move {
                let finished = request.await;
                *outcome.borrow_mut() = Some(finished);
            })
            .unwrap();
    }
    pool.run_until_stalled();

    state.borrow_mut().select(Asset::Solana);
    let sender = controller.source().pending.borrow_mut().pop().unwrap();
    sender.send(Ok(sample(Asset::Bitcoin))).unwrap();
    pool.run_until_stalled();

    assert_eq!(*outcome.borrow(), Some(FetchOutcome::SelectionChanged));
    assert!(state.borrow().result().is_none());
    assert!(!state.borrow().is_loading());
    assert_eq!(state.borrow().selected(), Asset::Solana);
}
