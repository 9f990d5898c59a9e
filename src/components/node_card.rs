//! Node Card Component
//!
//! Card for task and reminder nodes, and the pill drawn for `start`/`end`.

use std::sync::Arc;

use leptos::prelude::*;
use workflow_core::seed::TRIGGER_NODE_ID;
use workflow_core::{Action, Node, NodeItem, NodeKind};

use crate::components::{ItemIcon, KindIcon};
use crate::store::{store_send, use_app_store};

/// Audience tags shown in the trigger node's "Who" row
const TRIGGER_AUDIENCE: &[&str] = &["Employees - All", "Clients - All", "Locations - B"];

/// CSS classes of a card, e.g. `node-card kind-reminder compact`
fn card_class(kind: NodeKind, compact: bool) -> String {
    let mut class = format!("node-card kind-{}", kind.as_str());
    if compact {
        class.push_str(" compact");
    }
    class
}

/// Card with header, optional description block and item rows
#[component]
pub fn NodeCard(node: Arc<Node>, #[prop(optional)] compact: bool) -> impl IntoView {
    let store = use_app_store();
    let id = node.id.clone();
    let is_trigger = node.id.as_str() == TRIGGER_NODE_ID;
    let description = node.description.clone().filter(|d| !d.is_empty());
    let items = node.items.clone();

    view! {
        <div class={card_class(node.kind, compact)}>
            <div class="node-card-header">
                <div class="node-card-title">
                    <KindIcon kind=node.kind />
                    <h3>{node.title.clone()}</h3>
                </div>
                <button
                    class="edit-btn"
                    title="Edit"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        store_send(&store, Action::SelectForEditing(Some(id.clone())));
                    }
                >
                    "✎"
                </button>
            </div>

            {description.map(|text| {
                if is_trigger {
                    view! { <TriggerDescription when=text /> }.into_any()
                } else {
                    view! { <div class="node-description">{text}</div> }.into_any()
                }
            })}

            {(!items.is_empty()).then(|| view! {
                <div class="node-items">
                    {items.into_iter().map(|item| view! { <ItemRow item=item show_clock=!compact /> }).collect_view()}
                </div>
            })}
        </div>
    }
}

/// "Who / When" block of the trigger node
#[component]
fn TriggerDescription(when: String) -> impl IntoView {
    view! {
        <div class="node-description">
            <div class="trigger-row">
                <span class="trigger-label">"Who:"</span>
                <div class="trigger-tags">
                    {TRIGGER_AUDIENCE.iter().map(|tag| view! { <span class="audience-tag">{*tag}</span> }).collect_view()}
                </div>
            </div>
            <div class="trigger-row">
                <span class="trigger-label">"When:"</span>
                <span>{when}</span>
            </div>
        </div>
    }
}

#[component]
fn ItemRow(item: NodeItem, show_clock: bool) -> impl IntoView {
    view! {
        <div class="item-row">
            <div class="item-label">
                <ItemIcon icon=item.icon />
                <span class="item-title">{item.title}</span>
            </div>
            <div class="item-action">
                {show_clock.then(|| view! { <span class="clock-glyph">"⏱"</span> })}
                <span class="action-pill">{item.action}</span>
            </div>
        </div>
    }
}

/// Rounded marker for the chain's `start` and `end`
#[component]
pub fn SentinelPill(node: Arc<Node>) -> impl IntoView {
    let show_arrow = node.kind == NodeKind::Start;
    view! {
        <div class="sentinel-row">
            <span class=format!("sentinel-pill kind-{} accent-purple", node.kind.as_str())>
                <span>{node.title.clone()}</span>
                {show_arrow.then(|| view! { <span class="sentinel-arrow">"→"</span> })}
            </span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_class_names_kind() {
        assert_eq!(card_class(NodeKind::Task, false), "node-card kind-task");
        assert_eq!(card_class(NodeKind::Reminder, true), "node-card kind-reminder compact");
    }
}
