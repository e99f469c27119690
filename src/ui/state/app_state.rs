use std::sync::Arc;

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::domain::entities::query::QueryMode;
use crate::platform::desktop::timer::sleep;
use crate::ui::state::results_state::{update, ResultsEffect, ResultsMsg, ResultsState};
use crate::ui::toast::Toaster;
use crate::usecase::services::export_service::ExportService;
use crate::usecase::services::query_service::QueryService;

/// Services shared with the component tree through context.
#[derive(Clone)]
pub struct Services {
    pub query: Arc<QueryService>,
    pub export: Arc<ExportService>,
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.query, &other.query) && Arc::ptr_eq(&self.export, &other.export)
    }
}

pub struct AppState {
    pub results: Signal<ResultsState>,
    pub reveal_tasks: Signal<Vec<Task>>,
    pub query_service: Signal<Arc<QueryService>>,
}

impl AppState {
    pub fn new(query_service: Arc<QueryService>) -> Self {
        Self {
            results: use_signal(ResultsState::new),
            reveal_tasks: use_signal(Vec::<Task>::new),
            query_service: use_signal(move || query_service),
        }
    }
}

/// Feeds messages through `update` and carries out the effects it returns.
#[derive(Clone, Copy)]
pub struct ResultsController {
    state: Signal<ResultsState>,
    tasks: Signal<Vec<Task>>,
    service: Signal<Arc<QueryService>>,
    toaster: Toaster,
}

impl ResultsController {
    pub fn new(app_state: &AppState, toaster: Toaster) -> Self {
        Self {
            state: app_state.results,
            tasks: app_state.reveal_tasks,
            service: app_state.query_service,
            toaster,
        }
    }

    pub fn dispatch(mut self, msg: ResultsMsg) {
        let current = self.state.peek().clone();
        let (next, effects) = update(current, msg);
        self.state.set(next);
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(mut self, effect: ResultsEffect) {
        match effect {
            ResultsEffect::CancelTimers => {
                for task in self.tasks.write().drain(..) {
                    task.cancel();
                }
            }
            ResultsEffect::Schedule { epoch, step, delay } => {
                let task = spawn(async move {
                    sleep(delay).await;
                    self.dispatch(ResultsMsg::TimerFired { epoch, step });
                });
                self.tasks.write().push(task);
            }
            ResultsEffect::ShowToast { text, kind } => self.toaster.show(text, kind),
            ResultsEffect::SendQuery {
                generation,
                mode,
                query,
            } => {
                let service = self.service.peek().clone();
                if service.is_loading(mode) {
                    debug!("{} query still in flight; its answer will be discarded", mode.label());
                }
                spawn(async move {
                    let response = match mode {
                        QueryMode::Database => service.submit_query(&query).await,
                        QueryMode::Literature => service.submit_secondary_query(&query).await,
                    };
                    self.dispatch(ResultsMsg::ResponseReceived {
                        generation,
                        response,
                    });
                });
            }
        }
    }
}
