use leptos::html::Canvas;
use leptos::*;

use crate::{
    application::PredictionController,
    config::ClientConfig,
    domain::{
        chart::LineChartData,
        logging::{LogComponent, get_logger},
        prediction::Asset,
        state::PredictionState,
    },
    infrastructure::{http::PredictionClient, rendering::LineChartRenderer},
    presentation::view_model::{DESCRIPTION, LOADING_TEXT, ResultView, TITLE, ViewModel},
};

const CHART_WIDTH: u32 = 700;
const CHART_HEIGHT: u32 = 350;

/// 🔮 Root component: asset picker, trigger, and prediction panel.
#[component]
pub fn App(#[prop(optional)] config: Option<ClientConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let controller = PredictionController::new(PredictionClient::new(&config));

    let state = create_rw_signal(PredictionState::new());
    let vm = view_model(state);
    let result = result_view(vm);

    let on_select = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        match value.parse::<Asset>() {
            Ok(asset) => state.update(|s| s.select(asset)),
            Err(_) => get_logger().warn(
                LogComponent::Presentation("AssetPicker"),
                &format!("Ignoring unknown asset '{}'", value),
            ),
        }
    };

    let on_predict = move |_: ev::MouseEvent| {
        // loading is raised here, before the request is spawned
        let request = controller.fetch(state);
        spawn_local(async move {
            request.await;
        });
    };

    view! {
        <style>
            {r#"
            .oracle-app {
                display: flex;
                flex-direction: column;
                align-items: center;
                min-height: 100vh;
                padding: 2rem;
                background-color: #121212;
                color: #ffffff;
                text-align: center;
                font-family: -apple-system, BlinkMacSystemFont, sans-serif;
            }
            .controls { display: flex; gap: 0.5rem; margin-bottom: 1.5rem; }
            .controls select { padding: 0.5rem; width: 200px; }
            .error-banner {
                background: rgba(255, 68, 68, 0.15);
                border: 1px solid #ff4444;
                border-radius: 6px;
                padding: 0.5rem 1rem;
                margin-bottom: 1rem;
            }
            .result { width: 100%; max-width: 700px; }
            .result ul { margin-top: 1rem; list-style: none; padding: 0; }
            .result canvas { width: 100%; border-radius: 8px; }
            "#}
        </style>
        <div class="oracle-app">
            <h1>{TITLE}</h1>
            <p>{DESCRIPTION}</p>

            <div class="controls">
                <select on:change=on_select prop:value=move || vm.with(|v| v.selected.id())>
                    {move || vm.with(|v| {
                        v.options
                            .iter()
                            .map(|opt| view! {
                                <option value=opt.value selected=opt.selected>{opt.label}</option>
                            })
                            .collect_view()
                    })}
                </select>
                <button on:click=on_predict disabled=move || vm.with(|v| v.button_disabled)>
                    {move || vm.with(|v| v.button_label)}
                </button>
            </div>

            {move || vm.with(|v| v.show_loading).then(|| view! { <p class="loading">{LOADING_TEXT}</p> })}

            {move || vm.with(|v| v.error_message.clone()).map(|msg| view! { <p class="error-banner">{msg}</p> })}

            {move || result.get().map(|result| view! { <PredictionPanel result=result /> })}
        </div>
    }
}

pub fn view_model(state: RwSignal<PredictionState>) -> Memo<ViewModel> {
    create_memo(move |_| state.with(ViewModel::from_state))
}

/// The displayed result, isolated from loading and error changes so the
/// panel and its canvas are only rebuilt when a new result lands.
pub fn result_view(vm: Memo<ViewModel>) -> Memo<Option<ResultView>> {
    create_memo(move |_| vm.with(|v| v.result.clone()))
}

/// Heading, chart and value list for one prediction result.
#[component]
fn PredictionPanel(result: ResultView) -> impl IntoView {
    let ResultView { heading, chart, entries } = result;

    view! {
        <div class="result">
            <h3>{heading}</h3>
            <PredictionChart data=chart />
            <ul>
                {entries.into_iter().map(|entry| view! { <li>{entry}</li> }).collect_view()}
            </ul>
        </div>
    }
}

/// 📈 Canvas line chart, drawn once the element is mounted.
#[component]
fn PredictionChart(data: LineChartData) -> impl IntoView {
    let canvas_ref = create_node_ref::<Canvas>();

    create_effect(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let renderer = LineChartRenderer::new(CHART_WIDTH, CHART_HEIGHT);
        if let Err(e) = renderer.render(&canvas, &data) {
            get_logger().error(
                LogComponent::Presentation("PredictionChart"),
                &format!("❌ Render error: {:?}", e),
            );
        }
    });

    view! {
        <canvas node_ref=canvas_ref width=CHART_WIDTH height=CHART_HEIGHT />
    }
}
