use dioxus::prelude::*;

use crate::ui::components::results_content::ResultsContent;
use crate::ui::components::search_form::SearchForm;
use crate::ui::state::app_state::{AppState, ResultsController, Services};
use crate::ui::state::results_state::ResultsMsg;
use crate::ui::styles::content_container_style;
use crate::ui::toast::use_toaster;

#[component]
pub fn ContentArea() -> Element {
    let services = use_context::<Services>();
    let toaster = use_toaster();
    let app_state = AppState::new(services.query.clone());
    let controller = ResultsController::new(&app_state, toaster);
    let results = app_state.results;

    let (query, mode, loading) = {
        let state = results.read();
        (state.query().to_string(), state.mode(), state.is_loading())
    };

    rsx! {
        div { style: "{content_container_style()}",
            SearchForm {
                query,
                mode,
                loading,
                on_input: move |text: String| controller.dispatch(ResultsMsg::QueryEdited(text)),
                on_mode: move |mode| controller.dispatch(ResultsMsg::ModeSelected(mode)),
                on_submit: move |_| controller.dispatch(ResultsMsg::Submitted),
            }
            ResultsContent { results }
        }
    }
}
