use std::collections::{HashMap, HashSet};

use crate::data::Member;

use super::traversal::compute_descendants;
use super::types::VisibleMember;

/// Resolves the final set of displayed members.
///
/// A focus root re-roots the working set to its descendant subtree with
/// generations renumbered from 1; an unknown focus id falls back to the full
/// list. Collapse filtering is one top-down pass over the working set in
/// ascending display generation: a member is hidden when any parent inside the
/// working set is itself hidden or flagged collapsed. The focus root is exempt
/// on both counts: it is always included, and its own collapse flag does not
/// hide its children while it is the root of the view.
///
/// The result is ordered by (display generation, id) so downstream placement
/// sees a deterministic sequence.
pub(super) fn resolve_visible(
    members: &[Member],
    focused_member_id: Option<&str>,
    collapsed: &HashMap<String, bool>,
) -> Vec<VisibleMember> {
    let focus_root = focused_member_id.filter(|id| members.iter().any(|m| m.id == **id));

    let mut working: Vec<Member> = match focus_root {
        Some(root_id) => compute_descendants(root_id, members, 1),
        None => members.to_vec(),
    };
    working.sort_by(|a, b| {
        display_generation(a)
            .cmp(&display_generation(b))
            .then_with(|| a.id.cmp(&b.id))
    });

    let working_ids: HashSet<&str> = working.iter().map(|m| m.id.as_str()).collect();
    let is_collapsed = |id: &str| -> bool {
        if Some(id) == focus_root {
            return false;
        }
        collapsed.get(id).copied().unwrap_or(false)
    };

    let mut hidden: HashMap<&str, bool> = HashMap::new();
    let mut visible = Vec::new();
    for member in &working {
        let hide = Some(member.id.as_str()) != focus_root
            && member.parents.iter().any(|parent| {
                working_ids.contains(parent.as_str())
                    && (hidden.get(parent.as_str()).copied().unwrap_or(false)
                        || is_collapsed(parent.as_str()))
            });
        hidden.insert(member.id.as_str(), hide);
        if !hide {
            visible.push(VisibleMember {
                display_generation: display_generation(member),
                member: member.clone(),
                is_highlighted: false,
                is_collapsed: false,
                has_children: false,
            });
        }
    }
    visible
}

// Stored generations are 1-based by convention; tolerate a stray 0 from
// hand-edited data rather than underflowing the y formula.
fn display_generation(member: &Member) -> u32 {
    member.generation.max(1)
}
