mod annotate;
mod placement;
pub mod traversal;
mod types;
mod visibility;

pub use traversal::{compute_ancestors, compute_descendants};
pub use types::{Edge, NodeAction, PositionedNode, TreeLayout, VisibleMember};

use std::collections::HashMap;

use crate::config::LayoutConfig;
use crate::data::Member;

use annotate::{annotate, synthesize_edges};
use placement::{assign_x, vertical_offset};
use visibility::resolve_visible;

/// Computes a positioned node/edge graph for one view of the family tree.
///
/// Pure and deterministic: identical inputs produce identical output, every
/// call recomputes from scratch, and no state survives between calls. The
/// pipeline is visibility resolution, annotation, coordinate assignment, then
/// edge synthesis; horizontal placement is the only stage with cross-member
/// dependencies and runs strictly generation-ascending.
#[allow(clippy::too_many_arguments)]
pub fn layout_tree(
    members: &[Member],
    search_query: &str,
    collapsed: &HashMap<String, bool>,
    focused_member_id: Option<&str>,
    config: &LayoutConfig,
    can_edit: bool,
    viewport_width: f32,
) -> TreeLayout {
    if members.is_empty() {
        return TreeLayout::empty();
    }

    let mut visible = resolve_visible(members, focused_member_id, collapsed);
    annotate(&mut visible, search_query, collapsed);

    let xs = assign_x(&visible, config, viewport_width);
    let edges = synthesize_edges(&visible);

    let nodes: Vec<PositionedNode> = visible
        .into_iter()
        .map(|member| {
            let x = xs.get(member.id()).copied().unwrap_or(0.0);
            let y = vertical_offset(member.display_generation, config);
            let actions = node_actions(&member, can_edit);
            PositionedNode {
                member,
                x,
                y,
                actions,
            }
        })
        .collect();

    let (width, height) = bounding_box(&nodes, config);
    TreeLayout {
        nodes,
        edges,
        width,
        height,
    }
}

fn node_actions(member: &VisibleMember, can_edit: bool) -> Vec<NodeAction> {
    let mut actions = vec![NodeAction::Select];
    if member.has_children {
        actions.push(NodeAction::ToggleCollapse);
    }
    if can_edit {
        actions.push(NodeAction::Edit);
        actions.push(NodeAction::Delete);
    }
    actions
}

fn bounding_box(nodes: &[PositionedNode], config: &LayoutConfig) -> (f32, f32) {
    if nodes.is_empty() {
        return (0.0, 0.0);
    }
    let mut min_x = f32::MAX;
    let mut min_y = f32::MAX;
    let mut max_x = f32::MIN;
    let mut max_y = f32::MIN;
    for node in nodes {
        min_x = min_x.min(node.x);
        min_y = min_y.min(node.y);
        max_x = max_x.max(node.x + config.node_width);
        max_y = max_y.max(node.y + config.node_height);
    }
    (max_x - min_x, max_y - min_y)
}
