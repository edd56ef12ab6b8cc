use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Other,
}

/// One genealogical record. Layout only reads `id`, `name`, `generation`,
/// `parents` and `spouse`; the remaining fields ride along for the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: String,
    /// 1 = oldest known ancestor layer. Renumbered relative to the focus root
    /// when a focused or ancestor view is active.
    #[serde(default = "default_generation")]
    pub generation: u32,
    #[serde(default)]
    pub parents: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spouse: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub partners: Vec<String>,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

fn default_generation() -> u32 {
    1
}

impl Member {
    pub fn new(id: &str, name: &str, generation: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            generation,
            parents: Vec::new(),
            spouse: None,
            partners: Vec::new(),
            gender: Gender::Other,
            birth_date: None,
            death_date: None,
            bio: None,
            photo_url: None,
            extra: BTreeMap::new(),
        }
    }

    pub fn with_parents(mut self, parents: &[&str]) -> Self {
        self.parents = parents.iter().map(|id| id.to_string()).collect();
        self
    }

    pub fn with_spouse(mut self, spouse: &str) -> Self {
        self.spouse = Some(spouse.to_string());
        self
    }

    /// Copy of this member re-tagged with a different generation. Traversal
    /// renumbering never mutates the caller's records.
    pub fn at_generation(&self, generation: u32) -> Self {
        let mut member = self.clone();
        member.generation = generation;
        member
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MemberFile {
    members: Vec<Member>,
}

/// Reads a member list from JSON: either a bare array or a `{ "members": [...] }`
/// wrapper. Duplicate ids are rejected here so the layout core can assume a
/// deduplicated list.
pub fn load_members(path: &Path) -> anyhow::Result<Vec<Member>> {
    let contents = std::fs::read_to_string(path)?;
    parse_members(&contents)
}

pub fn parse_members(contents: &str) -> anyhow::Result<Vec<Member>> {
    let members = match serde_json::from_str::<Vec<Member>>(contents) {
        Ok(members) => members,
        Err(_) => serde_json::from_str::<MemberFile>(contents)?.members,
    };
    let mut seen: HashSet<&str> = HashSet::new();
    for member in &members {
        if !seen.insert(member.id.as_str()) {
            anyhow::bail!("duplicate member id: {}", member.id);
        }
    }
    Ok(members)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_array_and_wrapper() {
        let bare = r#"[{"id": "a", "name": "Ada"}]"#;
        let wrapped = r#"{"members": [{"id": "a", "name": "Ada"}]}"#;
        assert_eq!(parse_members(bare).unwrap().len(), 1);
        assert_eq!(parse_members(wrapped).unwrap().len(), 1);
    }

    #[test]
    fn generation_defaults_to_one() {
        let members = parse_members(r#"[{"id": "a", "name": "Ada"}]"#).unwrap();
        assert_eq!(members[0].generation, 1);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let input = r#"[{"id": "a", "name": "Ada"}, {"id": "a", "name": "Abe"}]"#;
        let err = parse_members(input).unwrap_err();
        assert!(err.to_string().contains("duplicate member id"));
    }

    #[test]
    fn keeps_unknown_fields_in_extra() {
        let input = r#"[{"id": "a", "name": "Ada", "favoriteColor": "teal"}]"#;
        let members = parse_members(input).unwrap();
        assert_eq!(
            members[0].extra.get("favoriteColor").and_then(|v| v.as_str()),
            Some("teal")
        );
    }
}
