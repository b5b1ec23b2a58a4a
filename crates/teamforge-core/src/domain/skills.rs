//! Insertion-ordered skill sets.

use std::fmt;

/// A deduplicated set of skill names that remembers first-seen order.
///
/// Set semantics for membership and comparison; iteration is stable in
/// insertion order so that views built from it are deterministic.
///
/// Skill names are trimmed on insertion and blank names are ignored.
///
/// # Examples
///
/// ```
/// use teamforge_core::SkillSet;
///
/// let skills: SkillSet = ["frontend", "backend", "frontend"].into_iter().collect();
/// assert_eq!(skills.len(), 2);
/// assert_eq!(skills.iter().collect::<Vec<_>>(), vec!["frontend", "backend"]);
///
/// let required: SkillSet = ["backend"].into_iter().collect();
/// assert!(skills.is_superset_of(&required));
/// ```
#[derive(Clone, Default, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<String>", into = "Vec<String>"))]
pub struct SkillSet {
    // Skill lists are a handful of entries; a Vec beats hashing here.
    skills: Vec<String>,
}

impl SkillSet {
    /// Creates an empty skill set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a skill. Returns false if it was blank or already present.
    pub fn insert(&mut self, skill: impl AsRef<str>) -> bool {
        let skill = skill.as_ref().trim();
        if skill.is_empty() || self.contains(skill) {
            return false;
        }
        self.skills.push(skill.to_string());
        true
    }

    #[inline]
    pub fn contains(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }

    /// True if every skill in `other` is also in `self`.
    ///
    /// An empty `other` is a subset of everything.
    pub fn is_superset_of(&self, other: &SkillSet) -> bool {
        other.iter().all(|skill| self.contains(skill))
    }

    /// Skills of `other` missing from `self`, in `other`'s order.
    pub fn missing_from<'a>(&'a self, other: &'a SkillSet) -> impl Iterator<Item = &'a str> + 'a {
        other.iter().filter(move |skill| !self.contains(skill))
    }

    /// Adds every skill of `other` not already present, preserving order.
    pub fn extend_from(&mut self, other: &SkillSet) {
        for skill in other.iter() {
            self.insert(skill);
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Iterates skills in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.skills.iter().map(String::as_str)
    }
}

impl PartialEq for SkillSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_superset_of(other)
    }
}

impl fmt::Debug for SkillSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.skills.iter()).finish()
    }
}

impl fmt::Display for SkillSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.skills.join(", "))
    }
}

impl<S: AsRef<str>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = SkillSet::new();
        for skill in iter {
            set.insert(skill);
        }
        set
    }
}

impl<S: AsRef<str>> Extend<S> for SkillSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for skill in iter {
            self.insert(skill);
        }
    }
}

impl From<Vec<String>> for SkillSet {
    fn from(skills: Vec<String>) -> Self {
        skills.into_iter().collect()
    }
}

impl From<SkillSet> for Vec<String> {
    fn from(set: SkillSet) -> Self {
        set.skills
    }
}
