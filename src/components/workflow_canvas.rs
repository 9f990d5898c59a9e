//! Workflow Canvas Component
//!
//! The main chain top to bottom, the "Add Another" button before the end
//! marker, and the side-branch layer.

use std::sync::Arc;

use leptos::prelude::*;
use workflow_core::{offsets, Action, Node, NodeId, NodeKind};

use crate::components::{NodeCard, SentinelPill, SideBranch};
use crate::store::{store_send, use_app_store, AppStateStoreFields};

/// One main-sequence node plus what is drawn after it
#[derive(Clone)]
struct MainRow {
    index: usize,
    node: Arc<Node>,
    /// Connector below this row
    has_next: bool,
    /// "Add Another" goes right after this row
    shows_add: bool,
}

/// Identity of a node snapshot; changes whenever the node is edited
fn node_key(node: &Arc<Node>) -> usize {
    Arc::as_ptr(node) as usize
}

#[component]
pub fn WorkflowCanvas() -> impl IntoView {
    let store = use_app_store();

    let rows = move || {
        store.editor().with(|s| {
            let main = s.main_nodes();
            let len = main.len();
            main.into_iter()
                .enumerate()
                .map(|(index, node)| MainRow {
                    index,
                    has_next: index + 1 < len,
                    shows_add: node.kind != NodeKind::End && index + 2 == len,
                    node,
                })
                .collect::<Vec<_>>()
        })
    };

    // Offsets for the whole chain, recomputed once per change
    let anchors = Memo::new(move |_| {
        let metrics = store.config().read().layout;
        store.editor().with(|s| offsets(&s.main_nodes(), &metrics))
    });

    let branches = move || {
        let anchors = anchors.get();
        store.editor().with(|s| {
            anchors
                .into_iter()
                .filter(|(id, _)| s.node(id.as_str()).is_some_and(|n| !n.kind.is_sentinel()))
                .filter_map(|(id, top)| {
                    let sides = s.side_nodes_for(id.as_str());
                    (!sides.is_empty()).then_some((id, top, sides))
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="workflow-canvas">
            <div class="main-chain">
                <For
                    each=rows
                    key=|row| (row.index, node_key(&row.node), row.has_next, row.shows_add)
                    children=move |row| view! { <MainRowView row=row /> }
                />
            </div>

            <div class="side-layer">
                <For
                    each=branches
                    key=|(id, top, sides): &(NodeId, u32, Vec<Arc<Node>>)| {
                        (id.clone(), *top, sides.iter().map(node_key).collect::<Vec<_>>())
                    }
                    children=move |(_, top, sides)| view! { <SideBranch nodes=sides top=top /> }
                />
            </div>
        </div>
    }
}

#[component]
fn MainRowView(row: MainRow) -> impl IntoView {
    let store = use_app_store();
    let MainRow {
        index,
        node,
        has_next,
        shows_add,
    } = row;
    let row_class = if index == 0 { "main-row first" } else { "main-row" };

    let body = if node.kind.is_sentinel() {
        view! { <SentinelPill node=node /> }.into_any()
    } else {
        let id = node.id.clone();
        view! {
            <div class="add-side-anchor">
                <button
                    class="add-side-btn"
                    title="Add side connection"
                    on:click=move |_| {
                        store_send(&store, Action::SelectSideTarget(Some(id.clone())));
                    }
                >
                    "⊕"
                </button>
            </div>
            <NodeCard node=node />
        }
        .into_any()
    };

    view! {
        <div class=row_class>{body}</div>
        {has_next.then(|| view! { <div class="chain-connector" /> })}
        {shows_add.then(|| view! {
            <div class="chain-connector" />
            <button
                class="add-another-btn"
                on:click=move |_| {
                    store_send(&store, Action::AddMainNode);
                }
            >
                "+ Add Another"
            </button>
            <div class="chain-connector" />
        })}
    }
}
