use cryptoracle_wasm::domain::prediction::{Asset, Prediction};
use cryptoracle_wasm::domain::state::PredictionState;
use cryptoracle_wasm::presentation::ViewModel;
use cryptoracle_wasm::presentation::view_model::{IDLE_CAPTION, WORKING_CAPTION};

fn loaded_state() -> PredictionState {
    let mut state = PredictionState::new();
    state.select(Asset::Ethereum);
    let ticket = state.begin_fetch();
    let prediction = Prediction::try_new(
        Asset::Ethereum,
        vec!["2024-01-01".into(), "2024-01-02".into()],
        vec![100.0, 105.5],
    )
    .unwrap();
    state.complete(ticket, Ok(prediction));
    state
}

#[test]
fn result_list_snapshot() {
    let vm = ViewModel::from_state(&loaded_state());
    let result = vm.result.expect("result present");
    insta::assert_snapshot!(result.entries.join("\n"), @r###"
    2024-01-01: $100.00
    2024-01-02: $105.50
    "###);
}

#[test]
fn chart_payload_snapshot() {
    let vm = ViewModel::from_state(&loaded_state());
    let json = serde_json::to_string(&vm.result.unwrap().chart).unwrap();
    insta::assert_snapshot!(json, @r###"{"labels":["2024-01-01","2024-01-02"],"datasets":[{"label":"Predicted price","data":[100.0,105.5],"borderColor":"orange","backgroundColor":"rgba(255,165,0,0.2)"}]}"###);
}

#[test]
fn trigger_caption_follows_loading() {
    let mut state = loaded_state();
    assert_eq!(ViewModel::from_state(&state).button_label, IDLE_CAPTION);
    state.begin_fetch();
    assert_eq!(ViewModel::from_state(&state).button_label, WORKING_CAPTION);
}
