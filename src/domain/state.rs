use crate::domain::{
    errors::PredictionError,
    logging::LogComponent,
    prediction::{Asset, Prediction},
};
use crate::log_warn;

/// Identifies one outbound request: the generation it started in and the
/// asset that was selected at that moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    asset: Asset,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn asset(&self) -> Asset {
        self.asset
    }
}

/// What happened to a completed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The prediction replaced the previous result.
    Applied,
    /// The request failed; the previous result was kept.
    Failed,
    /// A newer request was started; the response was dropped.
    Superseded,
    /// The selection moved to another asset; the response was dropped.
    SelectionChanged,
    /// The state was gone before the request could finish.
    Detached,
}

/// Widget state: selection, loading flag, last result and last error.
///
/// All mutation goes through the transition methods below.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PredictionState {
    selected: Asset,
    loading: bool,
    result: Option<Prediction>,
    last_error: Option<PredictionError>,
    generation: u64,
}

impl PredictionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Asset {
        self.selected
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn result(&self) -> Option<&Prediction> {
        self.result.as_ref()
    }

    pub fn last_error(&self) -> Option<&PredictionError> {
        self.last_error.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Change the selected asset. Never starts or cancels a request.
    pub fn select(&mut self, asset: Asset) {
        self.selected = asset;
    }

    /// Mark a new request as in flight for the current selection.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        self.last_error = None;
        FetchTicket {
            generation: self.generation,
            asset: self.selected,
        }
    }

    /// Apply the result of the request identified by `ticket`.
    pub fn complete(&mut self, ticket: FetchTicket, result: Result<Prediction, PredictionError>) -> FetchOutcome {
        if ticket.generation != self.generation {
            log_warn!(
                LogComponent::Domain("PredictionState"),
                "Dropping response for generation {} (latest is {})",
                ticket.generation,
                self.generation
            );
            return FetchOutcome::Superseded;
        }

        self.loading = false;

        if ticket.asset != self.selected {
            log_warn!(
                LogComponent::Domain("PredictionState"),
                "Dropping {} response, selection is now {}",
                ticket.asset,
                self.selected
            );
            return FetchOutcome::SelectionChanged;
        }

        match result {
            Ok(prediction) => {
                self.result = Some(prediction);
                self.last_error = None;
                FetchOutcome::Applied
            }
            Err(err) => {
                self.last_error = Some(err);
                FetchOutcome::Failed
            }
        }
    }

    /// Release the loading flag for a request that will never complete.
    /// Returns whether the flag was cleared.
    pub fn abandon(&mut self, ticket: FetchTicket) -> bool {
        if ticket.generation == self.generation && self.loading {
            self.loading = false;
            true
        } else {
            false
        }
    }
}
