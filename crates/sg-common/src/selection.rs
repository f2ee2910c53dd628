use std::collections::BTreeSet;

/// Immutable snapshot of the skill ids the user claims to possess, scoped to
/// the currently displayed skill list.
///
/// Every operation returns a new snapshot; callers own the current value and
/// swap it atomically, so concurrent recomputation never observes a
/// half-updated set. Ids are not unique across skill lists — the owner must
/// `reset` whenever the active role/level or job changes, otherwise stale ids
/// from the previous list could silently inflate a new match computation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedSkills {
    ids: BTreeSet<String>,
}

impl SelectedSkills {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// New snapshot with `id` added.
    pub fn with_added(&self, id: impl Into<String>) -> Self {
        let mut ids = self.ids.clone();
        ids.insert(id.into());
        Self { ids }
    }

    /// New snapshot with `id` removed.
    pub fn with_removed(&self, id: &str) -> Self {
        let mut ids = self.ids.clone();
        ids.remove(id);
        Self { ids }
    }

    /// The only mutation path the UI has: add if absent, remove if present.
    pub fn toggled(&self, id: &str) -> Self {
        if self.contains(id) {
            self.with_removed(id)
        } else {
            self.with_added(id)
        }
    }

    /// Empty snapshot, for reset and for skill-list switches.
    pub fn reset() -> Self {
        Self::default()
    }
}

impl FromIterator<String> for SelectedSkills {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for SelectedSkills {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(String::from).collect()
    }
}
