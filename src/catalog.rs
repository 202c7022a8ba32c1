use std::collections::HashSet;

use serde::Deserialize;

use crate::error::SiteError;
use crate::theme::Gradient;

const EMBEDDED_CATALOG: &str = include_str!("../content/catalog.json");

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Character {
    pub name: String,
    pub role: String,
    pub description: String,
    pub image: String,
    pub gradient: Gradient,
}

/// A discussion prompt together with its place in the guide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiscussionQuestion<'a> {
    pub position: usize,
    pub prompt: &'a str,
}

impl DiscussionQuestion<'_> {
    /// `#01`, `#02`, ... in source order.
    pub fn label(&self) -> String {
        format!("#{:02}", self.position + 1)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Catalog {
    characters: Vec<Character>,
    discussion_questions: Vec<String>,
}

impl Catalog {
    /// Parses the catalog bundled into the binary.
    pub fn load() -> Result<Self, SiteError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let catalog: Catalog = serde_json::from_str(raw)?;

        let mut seen = HashSet::new();
        for character in &catalog.characters {
            if !seen.insert(character.name.as_str()) {
                return Err(SiteError::DuplicateCharacter(character.name.clone()));
            }
        }

        Ok(catalog)
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn questions(&self) -> impl Iterator<Item = DiscussionQuestion<'_>> + '_ {
        self.discussion_questions
            .iter()
            .enumerate()
            .map(|(position, prompt)| DiscussionQuestion { position, prompt })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_lists_the_four_characters_in_order() {
        let catalog = Catalog::load().unwrap();
        let names: Vec<&str> = catalog.characters().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Sue Chan", "Clara Schneider", "Leo Lace", "Erik Lindqvist"]);
    }

    #[test]
    fn embedded_catalog_has_eight_numbered_questions() {
        let catalog = Catalog::load().unwrap();
        let labels: Vec<String> = catalog.questions().map(|q| q.label()).collect();
        assert_eq!(
            labels,
            ["#01", "#02", "#03", "#04", "#05", "#06", "#07", "#08"]
        );
        assert!(catalog.questions().next().unwrap().prompt.starts_with("How does Sue Chan"));
    }

    #[test]
    fn question_numbering_is_stable_across_passes() {
        let catalog = Catalog::load().unwrap();
        let first: Vec<_> = catalog.questions().collect();
        let second: Vec<_> = catalog.questions().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn antagonist_uses_the_slate_gradient() {
        let catalog = Catalog::load().unwrap();
        let erik = &catalog.characters()[3];
        assert_eq!(erik.gradient, Gradient::Slate);
        assert!(erik.role.contains("Antagonist"));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let raw = r#"{
            "characters": [
                {"name": "Sue Chan", "role": "a", "description": "b", "image": "c", "gradient": "slate"},
                {"name": "Sue Chan", "role": "d", "description": "e", "image": "f", "gradient": "cyan-violet"}
            ],
            "discussion_questions": []
        }"#;
        match Catalog::from_json(raw) {
            Err(SiteError::DuplicateCharacter(name)) => assert_eq!(name, "Sue Chan"),
            other => panic!("expected duplicate error, got {:?}", other),
        }
    }

    #[test]
    fn unknown_gradient_token_is_a_catalog_error() {
        let raw = r#"{
            "characters": [
                {"name": "Leo Lace", "role": "a", "description": "b", "image": "c", "gradient": "neon"}
            ],
            "discussion_questions": []
        }"#;
        assert!(matches!(Catalog::from_json(raw), Err(SiteError::Catalog(_))));
    }

    #[test]
    fn labels_pad_to_two_digits() {
        let q = DiscussionQuestion { position: 11, prompt: "" };
        assert_eq!(q.label(), "#12");
    }
}
