//! Rule-based rationale classification.
//!
//! A requirement is classified by its ID family and its title: the family
//! selects a [`FamilyGroup`], the group's rules are tried top to bottom
//! against the lowercased title, and the first match supplies the rationale.
//! Unmatched titles get the group fallback; unknown families and malformed
//! IDs get the catalog's global fallback. Classification never fails.

mod builtin;
pub mod catalog;

use std::sync::Arc;

use specgloss_shared::RequirementId;

pub use catalog::{Catalog, FamilyGroup, Rule, ShadowedRule, load_catalog};

/// How a rationale was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification<'a> {
    /// Group the family resolved to, if any.
    pub group: Option<&'a str>,
    /// Index of the winning rule within the group; `None` for a fallback.
    pub rule: Option<usize>,
    /// The selected rationale text.
    pub rationale: &'a str,
}

/// Stateless classifier over an injected, immutable catalog.
#[derive(Debug, Clone)]
pub struct Classifier {
    catalog: Arc<Catalog>,
}

impl Classifier {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Classifier over [`Catalog::builtin`].
    pub fn builtin() -> Self {
        Self::new(Arc::new(Catalog::builtin()))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Rationale text for a raw requirement ID and title.
    pub fn classify(&self, requirement_id: &str, title: &str) -> &str {
        self.explain(requirement_id, title).rationale
    }

    /// Like [`Classifier::classify`], also reporting the group and rule used.
    pub fn explain(&self, requirement_id: &str, title: &str) -> Classification<'_> {
        match RequirementId::parse(requirement_id.trim()) {
            Some(id) => self.explain_id(&id, title),
            None => self.global_fallback(),
        }
    }

    /// Classify an already-parsed ID.
    pub fn explain_id(&self, id: &RequirementId, title: &str) -> Classification<'_> {
        let Some(group) = self.catalog.group_for_family(id.family()) else {
            return self.global_fallback();
        };

        let title_lower = title.trim().to_lowercase();
        match group.first_match(&title_lower) {
            Some((index, rule)) => Classification {
                group: Some(&group.name),
                rule: Some(index),
                rationale: &rule.rationale,
            },
            None => Classification {
                group: Some(&group.name),
                rule: None,
                rationale: &group.fallback,
            },
        }
    }

    fn global_fallback(&self) -> Classification<'_> {
        Classification {
            group: None,
            rule: None,
            rationale: &self.catalog.global_fallback,
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GLOBAL: &str =
        "This requirement supports community autonomy, mutual aid, and building post-scarcity resilience.";

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        catalog.validate().expect("builtin catalog validates");
        assert_eq!(catalog.groups.len(), 13);
        assert!(catalog.rule_count() > 300);
    }

    #[test]
    fn builtin_catalog_survives_toml_export() {
        let catalog = Catalog::builtin();
        let text = catalog.to_toml_string().expect("export");
        let reparsed = Catalog::from_toml_str(&text).expect("reimport");
        assert_eq!(catalog, reparsed);
    }

    #[test]
    fn skill_title_in_time_family() {
        let classifier = Classifier::builtin();
        assert_eq!(
            classifier.classify("REQ-TIME-001", "Skill-Based Matching"),
            "Diverse skills meet diverse needs; flexible taxonomies enable communities to describe their actual capacities."
        );
    }

    #[test]
    fn unknown_family_gets_global_fallback() {
        let classifier = Classifier::builtin();
        assert_eq!(classifier.classify("REQ-XYZ-099", "Something Unrecognized"), GLOBAL);
        let explained = classifier.explain("REQ-XYZ-099", "Something Unrecognized");
        assert_eq!(explained.group, None);
        assert_eq!(explained.rule, None);
    }

    #[test]
    fn classification_is_total() {
        let classifier = Classifier::builtin();
        for (id, title) in [
            ("", ""),
            ("REQ-TIME-001", ""),
            ("REQ-", "Skill"),
            ("not an id", "Privacy"),
            ("REQ-time-001", "Skill"),
            ("REQ-AI-ARCH-001", "   "),
        ] {
            assert!(!classifier.classify(id, title).is_empty(), "{id:?} / {title:?}");
        }
        assert_eq!(classifier.classify("", ""), GLOBAL);
    }

    #[test]
    fn earlier_rule_wins_when_both_match() {
        // "Skill Matching" matches both the "skill" rule (0) and the "match" rule (1).
        let classifier = Classifier::builtin();
        let explained = classifier.explain("REQ-TIME-004", "Skill Matching");
        assert_eq!(explained.group, Some("time-banking"));
        assert_eq!(explained.rule, Some(0));
    }

    #[test]
    fn group_fallback_when_no_rule_matches() {
        let classifier = Classifier::builtin();
        let explained = classifier.explain("REQ-TIME-010", "Ledger Export");
        assert_eq!(explained.group, Some("time-banking"));
        assert_eq!(explained.rule, None);
        assert_eq!(
            explained.rationale,
            "Time and skill sharing builds community bonds while meeting real needs through cooperation."
        );
    }

    #[test]
    fn title_matching_is_case_insensitive_and_trimmed() {
        let classifier = Classifier::builtin();
        assert_eq!(
            classifier.classify("REQ-SHARE-003", "  TOOL LIBRARY  "),
            classifier.classify("REQ-SHARE-003", "tool library"),
        );
        assert_eq!(classifier.explain("REQ-SHARE-003", "TOOL LIBRARY").rule, Some(0));
    }

    #[test]
    fn conjunction_rules_need_every_term() {
        let classifier = Classifier::builtin();
        let both = classifier.explain("REQ-SHARE-020", "Skill and Knowledge Transfer");
        assert_eq!(
            both.rationale,
            "Tools without knowledge are intimidating; sharing expertise makes resources accessible to all."
        );
        let only_one = classifier.explain("REQ-SHARE-021", "Skill Swap");
        assert_ne!(only_one.rationale, both.rationale);
    }

    #[test]
    fn multi_part_ai_families_share_the_ai_group() {
        let classifier = Classifier::builtin();
        let arch = classifier.explain("REQ-AI-ARCH-002", "Privacy Layer");
        assert_eq!(arch.group, Some("ai"));
        assert_eq!(arch.rule, Some(1));
        assert_eq!(
            arch.rationale,
            "Surveillance capitalism is incompatible with liberation; AI must learn and improve while preserving individual privacy."
        );
        assert_eq!(
            arch.rationale,
            classifier.classify("REQ-AI-002", "Privacy Layer")
        );

        for family in ["AI-RESOURCE", "AI-EMERGENCY", "AI-META"] {
            let id = format!("REQ-{family}-001");
            assert_eq!(classifier.explain(&id, "Orchestration").group, Some("ai"), "{id}");
        }

        let unknown_ai = classifier.explain("REQ-AI-VISION-003", "Explainable Output");
        assert_eq!(unknown_ai.group, Some("ai"));
        assert_eq!(unknown_ai.rule, Some(0));
    }

    #[test]
    fn family_match_is_exact_not_substring() {
        let classifier = Classifier::builtin();
        assert_eq!(classifier.explain("REQ-TIMEBANK-001", "Skill").group, None);
        assert_eq!(classifier.explain("REQ-COMM-001", "Sneakernet Relay").group, Some("future-experimental"));
        assert_eq!(classifier.explain("REQ-HEALTH-004", "Harm Reduction").group, Some("culture-tech-health"));
    }

    #[test]
    fn injected_catalog_is_used() {
        let catalog = Catalog::new(
            "global",
            vec![
                FamilyGroup::new("ops", &["OPS"])
                    .with_rules(vec![Rule::new(&[&["backup"]], "Backups prevent loss.")])
                    .with_fallback("Ops fallback."),
            ],
        );
        let classifier = Classifier::new(Arc::new(catalog));
        assert_eq!(classifier.classify("REQ-OPS-1", "Nightly Backup"), "Backups prevent loss.");
        assert_eq!(classifier.classify("REQ-OPS-2", "Alerting"), "Ops fallback.");
        assert_eq!(classifier.classify("REQ-TIME-1", "Skill"), "global");
    }

    #[test]
    fn builtin_shadowed_rules_are_reported() {
        let shadowed = Catalog::builtin().shadowed_rules();
        // "space" + "listing" can never beat the earlier "space" rule.
        assert!(
            shadowed
                .iter()
                .any(|s| s.group == "governance" && s.index == 8 && s.shadowed_by == vec![2])
        );
        // "cargo bike" is always caught by the earlier "bike" rule.
        assert!(shadowed.iter().any(|s| s.group == "energy"));
    }
}
