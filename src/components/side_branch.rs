//! Side Branch Component
//!
//! Side nodes of one main node, drawn beside it with a dashed connector.

use std::sync::Arc;

use leptos::prelude::*;
use workflow_core::Node;

use crate::components::NodeCard;

/// Side nodes anchored `top` layout units below the top of the canvas
#[component]
pub fn SideBranch(nodes: Vec<Arc<Node>>, top: u32) -> impl IntoView {
    view! {
        <div class="side-branch" style=format!("top: {}px;", top)>
            {nodes.into_iter().map(|node| view! {
                <div class="side-node">
                    <div class="side-connector" />
                    <NodeCard node=node compact=true />
                </div>
            }).collect_view()}
        </div>
    }
}
