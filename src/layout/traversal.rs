use std::collections::{HashMap, HashSet, VecDeque};

use crate::data::Member;

/// Returns the member with id `root_id` and every transitive child, each
/// re-tagged with `base_generation + depth`. Traversal is an explicit
/// breadth-first queue so deep trees cannot exhaust the call stack, and a
/// visited set guarantees termination on diamond or cyclic parent data: the
/// first generation assigned to an id wins, later cycle-closing edges are not
/// re-expanded. Returns an empty list when `root_id` is unknown.
pub fn compute_descendants(root_id: &str, members: &[Member], base_generation: u32) -> Vec<Member> {
    let by_id: HashMap<&str, &Member> = members
        .iter()
        .map(|member| (member.id.as_str(), member))
        .collect();
    let Some(root) = by_id.get(root_id).copied() else {
        return Vec::new();
    };

    let mut result = Vec::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<(&Member, u32)> = VecDeque::new();
    visited.insert(root.id.as_str());
    queue.push_back((root, 0));

    while let Some((current, depth)) = queue.pop_front() {
        result.push(current.at_generation(base_generation + depth));
        for child in members
            .iter()
            .filter(|candidate| candidate.parents.iter().any(|p| p == &current.id))
        {
            if visited.insert(child.id.as_str()) {
                queue.push_back((child, depth + 1));
            }
        }
    }
    result
}

/// Breadth-first walk upward via parent ids, re-tagging each ancestor with
/// `base_generation + depth`. Parent ids that resolve to no member terminate
/// that branch silently. Returns just the member itself when it has no
/// resolvable parents, and an empty list when `id` is unknown.
pub fn compute_ancestors(id: &str, members: &[Member], base_generation: u32) -> Vec<Member> {
    let by_id: HashMap<&str, &Member> = members
        .iter()
        .map(|member| (member.id.as_str(), member))
        .collect();
    let Some(start) = by_id.get(id).copied() else {
        return Vec::new();
    };

    let mut result = Vec::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<(&Member, u32)> = VecDeque::new();
    visited.insert(start.id.as_str());
    queue.push_back((start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        result.push(current.at_generation(base_generation + depth));
        for parent_id in &current.parents {
            if let Some(parent) = by_id.get(parent_id.as_str()).copied()
                && visited.insert(parent.id.as_str())
            {
                queue.push_back((parent, depth + 1));
            }
        }
    }
    result
}
