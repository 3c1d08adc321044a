//! Rationale catalog: family groups, ordered keyword rules, and fallbacks.
//!
//! A catalog is plain data. It can be built in code ([`Catalog::builtin`]) or
//! loaded from TOML, and is validated once at construction so the classifier
//! never has to fail at lookup time.

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use specgloss_shared::{Result, SpecglossError};

/// Valid family names: uppercase tokens joined by hyphens.
static FAMILY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]+(?:-[A-Z]+)*$").expect("family regex"));

/// Valid family prefixes: a family name, optionally ending in `-`.
static PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]+(?:-[A-Z]+)*-?$").expect("family prefix regex"));

// ---------------------------------------------------------------------------
// Rule
// ---------------------------------------------------------------------------

/// One keyword rule: alternative clauses and the rationale they select.
///
/// The rule matches when any clause matches; a clause matches when every one
/// of its terms is a substring of the lowercased title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Alternative clauses, each a conjunction of lowercase terms.
    pub when: Vec<Vec<String>>,
    /// Rationale text emitted when this rule wins.
    pub rationale: String,
}

impl Rule {
    /// Build a rule from borrowed clause data. Terms are lowercased.
    pub fn new(when: &[&[&str]], rationale: &str) -> Self {
        Self {
            when: when
                .iter()
                .map(|clause| clause.iter().map(|term| term.to_lowercase()).collect())
                .collect(),
            rationale: rationale.to_string(),
        }
    }

    /// Whether the rule matches an already-lowercased title.
    pub fn matches(&self, title_lower: &str) -> bool {
        self.when
            .iter()
            .any(|clause| clause.iter().all(|term| title_lower.contains(term.as_str())))
    }
}

// ---------------------------------------------------------------------------
// FamilyGroup
// ---------------------------------------------------------------------------

/// A named bucket of requirement families sharing one ordered rule list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyGroup {
    /// Stable group name (`time-banking`, `water-ecology`, ...).
    pub name: String,
    /// Families owned by exact match.
    #[serde(default)]
    pub families: Vec<String>,
    /// Family prefixes claimed when no group owns the family exactly.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub family_prefixes: Vec<String>,
    /// Rationale used when no rule matches.
    pub fallback: String,
    /// Rules in priority order.
    #[serde(default, rename = "rule", skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<Rule>,
}

impl FamilyGroup {
    /// Start a group owning the given families, with no rules and no fallback yet.
    pub fn new(name: &str, families: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            families: families.iter().map(|f| (*f).to_string()).collect(),
            family_prefixes: Vec::new(),
            fallback: String::new(),
            rules: Vec::new(),
        }
    }

    pub fn with_prefixes(mut self, prefixes: &[&str]) -> Self {
        self.family_prefixes = prefixes.iter().map(|p| (*p).to_string()).collect();
        self
    }

    pub fn with_rules(mut self, rules: Vec<Rule>) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_fallback(mut self, fallback: &str) -> Self {
        self.fallback = fallback.to_string();
        self
    }

    /// First rule matching the lowercased title, with its index.
    pub fn first_match(&self, title_lower: &str) -> Option<(usize, &Rule)> {
        self.rules
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.matches(title_lower))
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// The complete rationale catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Rationale for families no group claims.
    pub global_fallback: String,
    /// Family groups.
    #[serde(default, rename = "group")]
    pub groups: Vec<FamilyGroup>,
}

/// A rule that can never be the first match within its group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShadowedRule {
    /// Owning group name.
    pub group: String,
    /// Index of the unreachable rule.
    pub index: usize,
    /// Earlier rules whose clauses cover every clause of this one.
    pub shadowed_by: Vec<usize>,
}

impl Catalog {
    pub fn new(global_fallback: &str, groups: Vec<FamilyGroup>) -> Self {
        Self {
            global_fallback: global_fallback.to_string(),
            groups,
        }
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Self {
        crate::builtin::catalog()
    }

    /// Parse and validate a TOML catalog. Rule terms are lowercased.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut catalog: Catalog = toml::from_str(content)
            .map_err(|e| SpecglossError::catalog(format!("invalid catalog TOML: {e}")))?;

        for group in &mut catalog.groups {
            for rule in &mut group.rules {
                for term in rule.when.iter_mut().flatten() {
                    *term = term.to_lowercase();
                }
            }
        }

        catalog.validate()?;
        Ok(catalog)
    }

    /// Serialize to the same TOML shape [`Catalog::from_toml_str`] accepts.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| SpecglossError::catalog(format!("catalog serialization failed: {e}")))
    }

    /// Check structural invariants: non-empty texts and clauses, well-formed
    /// and uniquely owned families and prefixes.
    pub fn validate(&self) -> Result<()> {
        if self.global_fallback.trim().is_empty() {
            return Err(SpecglossError::catalog("global_fallback must not be empty"));
        }

        let mut names = HashSet::new();
        let mut families = HashSet::new();
        let mut prefixes = HashSet::new();

        for group in &self.groups {
            let name = group.name.as_str();
            if name.is_empty() {
                return Err(SpecglossError::catalog("group name must not be empty"));
            }
            if !names.insert(name) {
                return Err(SpecglossError::catalog(format!("duplicate group '{name}'")));
            }
            if group.fallback.trim().is_empty() {
                return Err(SpecglossError::catalog(format!(
                    "group '{name}' has an empty fallback"
                )));
            }

            for family in &group.families {
                if !FAMILY_RE.is_match(family) {
                    return Err(SpecglossError::catalog(format!(
                        "group '{name}': '{family}' is not an uppercase family name"
                    )));
                }
                if !families.insert(family.as_str()) {
                    return Err(SpecglossError::catalog(format!(
                        "family '{family}' is claimed by more than one group"
                    )));
                }
            }

            for prefix in &group.family_prefixes {
                if prefix.is_empty() {
                    return Err(SpecglossError::catalog(format!(
                        "group '{name}' has an empty family prefix"
                    )));
                }
                if !PREFIX_RE.is_match(prefix) {
                    return Err(SpecglossError::catalog(format!(
                        "group '{name}': '{prefix}' is not an uppercase family prefix"
                    )));
                }
                if !prefixes.insert(prefix.as_str()) {
                    return Err(SpecglossError::catalog(format!(
                        "family prefix '{prefix}' is claimed by more than one group"
                    )));
                }
            }

            for (index, rule) in group.rules.iter().enumerate() {
                let broken = rule.when.is_empty()
                    || rule
                        .when
                        .iter()
                        .any(|clause| clause.is_empty() || clause.iter().any(String::is_empty));
                if broken {
                    return Err(SpecglossError::catalog(format!(
                        "group '{name}' rule {index}: every clause needs at least one non-empty term"
                    )));
                }
                if rule.rationale.trim().is_empty() {
                    return Err(SpecglossError::catalog(format!(
                        "group '{name}' rule {index}: rationale must not be empty"
                    )));
                }
            }
        }

        Ok(())
    }

    /// Resolve a family to its group: exact ownership first, then the longest
    /// claimed prefix.
    pub fn group_for_family(&self, family: &str) -> Option<&FamilyGroup> {
        self.groups
            .iter()
            .find(|group| group.families.iter().any(|f| f == family))
            .or_else(|| {
                self.groups
                    .iter()
                    .flat_map(|group| {
                        group
                            .family_prefixes
                            .iter()
                            .filter(|prefix| family.starts_with(prefix.as_str()))
                            .map(move |prefix| (prefix.len(), group))
                    })
                    .max_by_key(|(len, _)| *len)
                    .map(|(_, group)| group)
            })
    }

    /// Total number of rules across all groups.
    pub fn rule_count(&self) -> usize {
        self.groups.iter().map(|g| g.rules.len()).sum()
    }

    /// Rules that can never win because every clause is implied by a clause
    /// of an earlier rule in the same group.
    pub fn shadowed_rules(&self) -> Vec<ShadowedRule> {
        let mut shadowed = Vec::new();

        for group in &self.groups {
            for (index, rule) in group.rules.iter().enumerate() {
                let mut covering = Vec::new();
                let all_covered = rule.when.iter().all(|clause| {
                    let earlier = group.rules[..index].iter().position(|prior| {
                        prior
                            .when
                            .iter()
                            .any(|prior_clause| clause_implies(prior_clause, clause))
                    });
                    if let Some(i) = earlier {
                        covering.push(i);
                    }
                    earlier.is_some()
                });

                if all_covered {
                    covering.sort_unstable();
                    covering.dedup();
                    shadowed.push(ShadowedRule {
                        group: group.name.clone(),
                        index,
                        shadowed_by: covering,
                    });
                }
            }
        }

        shadowed
    }
}

/// `a` implies `b` when any title matching `b` must also match `a`: each term
/// of `a` occurs inside some term of `b`.
fn clause_implies(a: &[String], b: &[String]) -> bool {
    a.iter()
        .all(|term_a| b.iter().any(|term_b| term_b.contains(term_a.as_str())))
}

/// Load and validate a catalog from a TOML file.
#[instrument]
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path).map_err(|e| SpecglossError::io(path, e))?;
    let catalog = Catalog::from_toml_str(&content).map_err(|e| match e {
        SpecglossError::Catalog { message } => {
            SpecglossError::catalog(format!("{}: {message}", path.display()))
        }
        other => other,
    })?;
    debug!(
        groups = catalog.groups.len(),
        rules = catalog.rule_count(),
        "loaded custom catalog"
    );
    Ok(catalog)
}
