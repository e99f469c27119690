use std::time::Duration;

use dioxus::logger::tracing::debug;

use crate::domain::entities::figure::Figure;
use crate::domain::entities::query::{is_blank_query, QueryMode, QueryResponse};
use crate::domain::entities::table::ResultTable;
use crate::domain::entities::toast::ToastKind;

pub const SUMMARY_REVEAL_DELAY: Duration = Duration::from_millis(100);
pub const RESULTS_REVEAL_DELAY: Duration = Duration::from_millis(300);
pub const HIDE_DELAY: Duration = Duration::from_millis(100);
/// Panels fade for 300ms after being hidden before the content is unmounted.
pub const CLEAR_DELAY: Duration = Duration::from_millis(400);

pub const SUCCESS_MESSAGE: &str = "Query processed successfully";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStep {
    ShowSummary,
    ShowResults,
    HidePanels,
    ClearResults,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultsMsg {
    QueryEdited(String),
    ModeSelected(QueryMode),
    Submitted,
    ResponseReceived {
        generation: u64,
        response: QueryResponse,
    },
    TimerFired {
        epoch: u64,
        step: RevealStep,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultsEffect {
    SendQuery {
        generation: u64,
        mode: QueryMode,
        query: String,
    },
    ShowToast {
        text: String,
        kind: ToastKind,
    },
    Schedule {
        epoch: u64,
        step: RevealStep,
        delay: Duration,
    },
    CancelTimers,
}

/// Query lifecycle and staged panel visibility for the content area.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsState {
    query: String,
    mode: QueryMode,
    phase: Phase,
    summary: String,
    table: ResultTable,
    figure: Option<Figure>,
    request_id: String,
    has_results: bool,
    summary_visible: bool,
    results_visible: bool,
    /// Tags outgoing requests; responses for older generations are dropped.
    generation: u64,
    /// Tags scheduled reveal steps; bumped on every state exit.
    timer_epoch: u64,
}

impl ResultsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn mode(&self) -> QueryMode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn table(&self) -> &ResultTable {
        &self.table
    }

    pub fn figure(&self) -> Option<&Figure> {
        self.figure.as_ref()
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    pub fn has_results(&self) -> bool {
        self.has_results
    }

    pub fn summary_visible(&self) -> bool {
        self.summary_visible
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn timer_epoch(&self) -> u64 {
        self.timer_epoch
    }

    fn clear_results(&mut self) {
        self.summary.clear();
        self.table = ResultTable::default();
        self.figure = None;
        self.request_id.clear();
    }

    fn hide_panels(&mut self) {
        self.summary_visible = false;
        self.results_visible = false;
    }

    fn next_epoch(&mut self) -> u64 {
        self.timer_epoch += 1;
        self.timer_epoch
    }

    fn content_present(&self) -> bool {
        !self.summary.is_empty() || !self.table.is_empty()
    }
}

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ResultsState, msg: ResultsMsg) -> (ResultsState, Vec<ResultsEffect>) {
    let effects = match msg {
        ResultsMsg::QueryEdited(text) => {
            let cleared = text.is_empty();
            state.query = text;
            if !cleared {
                return (state, Vec::new());
            }
            if state.phase == Phase::Loading {
                // Abandon the request in flight; its response will be stale.
                state.generation += 1;
            }
            state.next_epoch();
            state.clear_results();
            state.hide_panels();
            state.has_results = false;
            state.phase = Phase::Idle;
            vec![ResultsEffect::CancelTimers]
        }
        ResultsMsg::ModeSelected(mode) => {
            state.mode = mode;
            Vec::new()
        }
        ResultsMsg::Submitted => {
            if is_blank_query(&state.query) || state.phase == Phase::Loading {
                return (state, Vec::new());
            }
            state.generation += 1;
            state.next_epoch();
            state.clear_results();
            state.hide_panels();
            state.phase = Phase::Loading;
            vec![
                ResultsEffect::CancelTimers,
                ResultsEffect::SendQuery {
                    generation: state.generation,
                    mode: state.mode,
                    query: state.query.clone(),
                },
            ]
        }
        ResultsMsg::ResponseReceived {
            generation,
            response,
        } => {
            if generation != state.generation || state.phase != Phase::Loading {
                debug!(
                    "discarding stale response (generation {generation}, current {})",
                    state.generation
                );
                return (state, Vec::new());
            }
            let epoch = state.next_epoch();
            if let Some(error) = response.error {
                state.phase = Phase::Error;
                vec![
                    ResultsEffect::CancelTimers,
                    ResultsEffect::ShowToast {
                        text: error,
                        kind: ToastKind::Error,
                    },
                    ResultsEffect::Schedule {
                        epoch,
                        step: RevealStep::HidePanels,
                        delay: HIDE_DELAY,
                    },
                    ResultsEffect::Schedule {
                        epoch,
                        step: RevealStep::ClearResults,
                        delay: CLEAR_DELAY,
                    },
                ]
            } else {
                state.summary = response.summary.unwrap_or_default();
                state.table = ResultTable::from_rows(&response.search_results.unwrap_or_default());
                state.figure = response.figure;
                state.request_id = response.request_id.unwrap_or_default();
                state.phase = Phase::Success;

                let mut effects = vec![
                    ResultsEffect::CancelTimers,
                    ResultsEffect::ShowToast {
                        text: SUCCESS_MESSAGE.to_string(),
                        kind: ToastKind::Success,
                    },
                ];
                state.has_results = state.content_present();
                if state.has_results {
                    effects.push(ResultsEffect::Schedule {
                        epoch,
                        step: RevealStep::ShowSummary,
                        delay: SUMMARY_REVEAL_DELAY,
                    });
                    effects.push(ResultsEffect::Schedule {
                        epoch,
                        step: RevealStep::ShowResults,
                        delay: RESULTS_REVEAL_DELAY,
                    });
                }
                effects
            }
        }
        ResultsMsg::TimerFired { epoch, step } => {
            if epoch != state.timer_epoch {
                return (state, Vec::new());
            }
            match step {
                RevealStep::ShowSummary => state.summary_visible = true,
                RevealStep::ShowResults => state.results_visible = true,
                RevealStep::HidePanels => state.hide_panels(),
                RevealStep::ClearResults => state.has_results = false,
            }
            Vec::new()
        }
    };

    (state, effects)
}
