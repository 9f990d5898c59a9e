//! Add Side Connection Dialog
//!
//! Confirms attaching a new reminder beside the pending main node.

use leptos::prelude::*;
use leptos::ev::MouseEvent;
use workflow_core::{Action, NodeId};

use crate::store::{store_dispatch, store_send, use_app_store, AppStateStoreFields};

#[component]
pub fn AddSideModal() -> impl IntoView {
    let store = use_app_store();

    let pending = Memo::new(move |_| store.editor().with(|s| s.pending_side_parent().cloned()));

    let target_title = move || {
        store.editor().with(|s| {
            s.pending_side_parent()
                .map(|id| node_label(s.node(id.as_str()).map(|n| n.title.clone()), id))
                .unwrap_or_default()
        })
    };

    let close = move |_: MouseEvent| {
        store_send(&store, Action::SelectSideTarget(None));
    };

    let confirm = move |_: MouseEvent| {
        let Some(parent_id) = pending.get_untracked() else { return };
        if store_dispatch(&store, Action::AddSideNode { parent_id }).is_err() {
            // rejected parents still dismiss the dialog
            store_send(&store, Action::SelectSideTarget(None));
        }
    };

    view! {
        <Show when=move || pending.get().is_some()>
            <div class="modal-backdrop">
                <div class="modal">
                    <h2>"Add Side Connection"</h2>
                    <button class="modal-close" on:click=close>"✕"</button>
                    <p class="modal-text">
                        "Add a side connection to \"" {target_title} "\""
                    </p>
                    <div class="modal-actions">
                        <button class="btn-secondary" on:click=close>"Cancel"</button>
                        <button class="btn-confirm" on:click=confirm>"Add Side Connection"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// Heading for the node behind `id`, falling back to the raw id
fn node_label(title: Option<String>, id: &NodeId) -> String {
    title.unwrap_or_else(|| id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_prefers_title() {
        let id = NodeId::from("personal");
        assert_eq!(node_label(Some("Personal Details".into()), &id), "Personal Details");
    }

    #[test]
    fn test_label_falls_back_to_id() {
        assert_eq!(node_label(None, &NodeId::from("ghost")), "ghost");
    }
}
