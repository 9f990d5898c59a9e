//! Global Application State Store
//!
//! Uses Leptos reactive_stores. Components never mutate the editor state
//! directly; they dispatch an `Action` and the reducer produces the next
//! state.

use leptos::prelude::*;
use reactive_stores::Store;
use tracing::{error, warn};
use workflow_core::{onboarding_workflow, Action, EditorConfig, EditorState, WorkflowResult};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Nodes and dialog selections
    pub editor: EditorState,
    pub config: EditorConfig,
}

impl AppState {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            editor: onboarding_workflow(),
            config,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Send an action the reducer always accepts: selections, edits and new
/// main nodes.
pub fn store_send(store: &AppStore, action: Action) {
    if let Err(e) = store_apply(store, action) {
        error!(error = %e, "unexpected rejection");
    }
}

/// Dispatch an action that may be rejected (`AddSideNode`).
///
/// A rejected action leaves the state as it was.
pub fn store_dispatch(store: &AppStore, action: Action) -> WorkflowResult<()> {
    store_apply(store, action).inspect_err(|e| warn!(error = %e, "action rejected"))
}

/// Run `action` through the reducer and publish the result
fn store_apply(store: &AppStore, action: Action) -> WorkflowResult<()> {
    let policy = store.config().read().side_parent_policy;
    let next = store.editor().read().reduce(action, policy)?;
    *store.editor().write() = next;
    Ok(())
}
