use std::collections::{BTreeMap, HashMap, HashSet};

use crate::config::LayoutConfig;

use super::types::VisibleMember;

pub(super) fn vertical_offset(display_generation: u32, config: &LayoutConfig) -> f32 {
    display_generation.saturating_sub(1) as f32 * config.generation_spacing
}

/// Assigns an x coordinate per visible member.
///
/// Generations are processed strictly ascending: each generation's placement
/// reads the finalized positions of the one above it from a position map local
/// to this call. The lowest generation present is the base row, centered on
/// the viewport; every later row is centered under the weighted average of its
/// parents' positions so asymmetric branches do not skew the whole tree.
pub(super) fn assign_x(
    visible: &[VisibleMember],
    config: &LayoutConfig,
    viewport_width: f32,
) -> HashMap<String, f32> {
    let mut rows: BTreeMap<u32, Vec<&VisibleMember>> = BTreeMap::new();
    for member in visible {
        rows.entry(member.display_generation).or_default().push(member);
    }

    let mut positions: HashMap<String, f32> = HashMap::new();
    let mut base_center_x = viewport_width / 2.0;
    let mut first = true;
    for row in rows.values() {
        if first {
            base_center_x = place_base_row(row, config, viewport_width, &mut positions);
            first = false;
        } else {
            place_row(row, config, base_center_x, &mut positions);
        }
    }
    positions
}

/// Base row: members sorted by id, swept left to right from x=0 with spouses
/// pulled adjacent to each other, then the whole row rigidly shifted so its
/// bounding box is centered in the viewport. Returns the row's center, which
/// later rows fall back to when none of their parents have a position.
fn place_base_row(
    row: &[&VisibleMember],
    config: &LayoutConfig,
    viewport_width: f32,
    positions: &mut HashMap<String, f32>,
) -> f32 {
    let mut order: Vec<&VisibleMember> = row.to_vec();
    order.sort_by(|a, b| a.id().cmp(b.id()));
    let row_ids: HashSet<&str> = order.iter().map(|m| m.id()).collect();

    let step = config.node_width + config.member_spacing;
    let mut consumed: HashSet<&str> = HashSet::new();
    let mut placed: Vec<(&str, f32)> = Vec::new();
    let mut cursor = 0.0_f32;
    for member in &order {
        if consumed.contains(member.id()) {
            continue;
        }
        consumed.insert(member.id());
        placed.push((member.id(), cursor));
        cursor += step;
        if let Some(spouse) = member.member.spouse.as_deref()
            && row_ids.contains(spouse)
            && !consumed.contains(spouse)
        {
            consumed.insert(spouse);
            placed.push((spouse, cursor));
            cursor += step;
        }
    }

    if placed.is_empty() {
        return viewport_width / 2.0;
    }
    let min_x = placed.iter().map(|(_, x)| *x).fold(f32::MAX, f32::min);
    let max_x =
        placed.iter().map(|(_, x)| *x).fold(f32::MIN, f32::max) + config.node_width;
    let shift = viewport_width / 2.0 - (min_x + max_x) / 2.0;
    for (id, x) in &placed {
        positions.insert((*id).to_string(), x + shift);
    }
    (min_x + max_x) / 2.0 + shift
}

/// One non-base row: sibling groups keyed by their sorted parent-id list,
/// centered as a block on the member-count-weighted mean of each group's
/// average parent position.
fn place_row(
    row: &[&VisibleMember],
    config: &LayoutConfig,
    base_center_x: f32,
    positions: &mut HashMap<String, f32>,
) {
    let mut groups: BTreeMap<String, Vec<&VisibleMember>> = BTreeMap::new();
    for member in row {
        groups.entry(parent_key(member)).or_default().push(*member);
    }
    for group in groups.values_mut() {
        group.sort_by(|a, b| a.id().cmp(b.id()));
    }

    let mut widths: Vec<f32> = Vec::with_capacity(groups.len());
    let mut weighted_sum = 0.0_f32;
    let mut total_members = 0.0_f32;
    for group in groups.values() {
        let count = group.len() as f32;
        let width = count * config.node_width + (count - 1.0) * config.sibling_spacing;
        let avg_parent_x = average_parent_x(group, positions).unwrap_or(base_center_x);
        weighted_sum += avg_parent_x * count;
        total_members += count;
        widths.push(width);
    }
    let collective_center = if total_members > 0.0 {
        weighted_sum / total_members
    } else {
        base_center_x
    };

    let total_width: f32 =
        widths.iter().sum::<f32>() + (groups.len().saturating_sub(1)) as f32 * config.member_spacing;
    let mut group_cursor = collective_center - total_width / 2.0;
    for (group, width) in groups.values().zip(widths) {
        let mut x = group_cursor;
        for member in group {
            // Slot positions are group-relative centers; the half-width offset
            // lines a lone child's column up with its parent's.
            positions.insert(member.id().to_string(), x + config.node_width / 2.0);
            x += config.node_width + config.sibling_spacing;
        }
        group_cursor += width + config.member_spacing;
    }
}

/// Siblings share a key derived from their sorted parent ids. Members with no
/// parents get a singleton key so unrelated roots never merge into one group.
fn parent_key(member: &VisibleMember) -> String {
    if member.member.parents.is_empty() {
        return format!("__no_parents__:{}", member.id());
    }
    let mut parents: Vec<&str> = member.member.parents.iter().map(String::as_str).collect();
    parents.sort_unstable();
    parents.join("|")
}

fn average_parent_x(
    group: &[&VisibleMember],
    positions: &HashMap<String, f32>,
) -> Option<f32> {
    let mut sum = 0.0_f32;
    let mut count = 0.0_f32;
    for parent in &group[0].member.parents {
        if let Some(x) = positions.get(parent) {
            sum += *x;
            count += 1.0;
        }
    }
    (count > 0.0).then(|| sum / count)
}
