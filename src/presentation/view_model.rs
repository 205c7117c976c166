use crate::domain::{
    chart::{ChartService, LineChartData},
    prediction::{Asset, PredictedPrice, Prediction, all_assets},
    state::PredictionState,
};

pub const TITLE: &str = "CryptOracle 🔮";
pub const DESCRIPTION: &str = "Crypto price prediction powered by machine learning";
pub const IDLE_CAPTION: &str = "Predict";
pub const WORKING_CAPTION: &str = "Loading...";
pub const LOADING_TEXT: &str = "⏳ Loading price prediction...";

#[derive(Debug, Clone, PartialEq)]
pub struct AssetOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Everything shown for a present prediction result.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub heading: String,
    pub chart: LineChartData,
    pub entries: Vec<String>,
}

impl ResultView {
    pub fn from_prediction(prediction: &Prediction) -> Self {
        Self {
            heading: format!("Price prediction: {}", prediction.asset().label()),
            chart: ChartService::line_chart(prediction),
            entries: prediction
                .entries()
                .map(|(date, price)| format_entry(date, price))
                .collect(),
        }
    }
}

/// Render model derived from [`PredictionState`]. Pure; holds no signals.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub selected: Asset,
    pub options: Vec<AssetOption>,
    pub button_label: &'static str,
    pub button_disabled: bool,
    pub show_loading: bool,
    pub error_message: Option<String>,
    pub result: Option<ResultView>,
}

impl ViewModel {
    pub fn from_state(state: &PredictionState) -> Self {
        let loading = state.is_loading();
        Self {
            selected: state.selected(),
            options: all_assets()
                .into_iter()
                .map(|asset| AssetOption {
                    value: asset.id(),
                    label: asset.label(),
                    selected: asset == state.selected(),
                })
                .collect(),
            button_label: if loading { WORKING_CAPTION } else { IDLE_CAPTION },
            button_disabled: loading,
            show_loading: loading,
            error_message: state.last_error().map(|e| format!("⚠️ {}", e)),
            result: state.result().map(ResultView::from_prediction),
        }
    }
}

/// `"<date>: $<value>"` with exactly two decimals.
pub fn format_entry(date: &str, price: PredictedPrice) -> String {
    format!("{}: {}", date, price)
}
