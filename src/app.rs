//! Onboarding Workflow App
//!
//! Provides the store and lays out the canvas with its two dialogs.

use leptos::prelude::*;
use reactive_stores::Store;
use tracing::info;

use crate::components::{AddSideModal, EditNodeModal, WorkflowCanvas};
use crate::config::load_config;
use crate::store::{use_app_store, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    let store = Store::new(AppState::new(config));
    provide_context(store);
    info!(nodes = store.editor().read_untracked().len(), "workflow editor mounted");

    view! {
        <div class="app-layout">
            <main class="workflow-page">
                <WorkflowCanvas />
                <NodeCount />
            </main>
            <EditNodeModal />
            <AddSideModal />
        </div>
    }
}

#[component]
fn NodeCount() -> impl IntoView {
    let store = use_app_store();
    let counts = move || {
        store.editor().with(|s| {
            format!(
                "{} steps, {} side connections",
                s.main_len(),
                s.side_nodes().len()
            )
        })
    };
    view! { <p class="node-count">{counts}</p> }
}
