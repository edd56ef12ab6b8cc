use std::collections::{HashMap, HashSet};

use super::types::{Edge, VisibleMember};

/// One parent-to-child edge per parent reference whose both endpoints survived
/// visibility resolution. Each (parent, member) pair is unique by construction,
/// so no deduplication pass is needed.
pub(super) fn synthesize_edges(visible: &[VisibleMember]) -> Vec<Edge> {
    let visible_ids: HashSet<&str> = visible.iter().map(|m| m.id()).collect();
    let mut edges = Vec::new();
    for member in visible {
        for parent in &member.member.parents {
            if visible_ids.contains(parent.as_str()) {
                edges.push(Edge {
                    source: parent.clone(),
                    target: member.id().to_string(),
                });
            }
        }
    }
    edges
}

/// Fills the per-node view flags: search highlighting, the collapse flag from
/// the input map, and whether any visible member lists this one as a parent.
/// Pure per-node annotations; no ordering requirements.
pub(super) fn annotate(
    visible: &mut [VisibleMember],
    search_query: &str,
    collapsed: &HashMap<String, bool>,
) {
    let query = search_query.to_lowercase();
    let mut parent_ids: HashSet<&str> = HashSet::new();
    for member in visible.iter() {
        for parent in &member.member.parents {
            parent_ids.insert(parent.as_str());
        }
    }
    let parent_ids: HashSet<String> = parent_ids.into_iter().map(str::to_string).collect();

    for member in visible.iter_mut() {
        member.is_highlighted =
            !query.is_empty() && member.member.name.to_lowercase().contains(&query);
        member.is_collapsed = collapsed.get(member.id()).copied().unwrap_or(false);
        member.has_children = parent_ids.contains(member.id());
    }
}
