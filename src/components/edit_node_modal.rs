//! Edit Node Dialog
//!
//! Title and description form for the node selected for editing. Changes
//! live in a local draft until Save.

use leptos::prelude::*;
use leptos::ev::MouseEvent;
use workflow_core::{Action, EditDraft};

use crate::store::{store_send, use_app_store, AppStateStoreFields};

#[component]
pub fn EditNodeModal() -> impl IntoView {
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());

    // Only ids that resolve to a node open the dialog
    let editing = Memo::new(move |_| {
        store
            .editor()
            .with(|s| s.editing_node().map(|n| n.id.clone()))
    });

    // Refill the draft whenever a different node is opened
    Effect::new(move |_| {
        let Some(id) = editing.get() else { return };
        let draft = store
            .editor()
            .with_untracked(|s| s.node(id.as_str()).map(|n| EditDraft::from_node(n)));
        if let Some(draft) = draft {
            set_title.set(draft.title);
            set_description.set(draft.description);
        }
    });

    let close = move |_: MouseEvent| {
        store_send(&store, Action::SelectForEditing(None));
    };

    let save = move |_: MouseEvent| {
        let Some(node_id) = editing.get_untracked() else { return };
        let draft = EditDraft {
            node_id,
            title: title.get_untracked(),
            description: description.get_untracked(),
        };
        store_send(&store, Action::CommitEdit(draft));
    };

    view! {
        <Show when=move || editing.get().is_some()>
            <div class="modal-backdrop">
                <div class="modal">
                    <h2>"Edit Node"</h2>
                    <button class="modal-close" on:click=close>"✕"</button>
                    <label class="field">
                        <span>"Title"</span>
                        <input
                            type="text"
                            prop:value=move || title.get()
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span>"Description"</span>
                        <textarea
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="modal-actions">
                        <button class="btn-secondary" on:click=close>"Cancel"</button>
                        <button class="btn-primary" on:click=save>"Save"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
