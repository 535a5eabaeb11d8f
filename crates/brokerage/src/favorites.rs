//! Saved-favorites tally.

/// Ordered multiset of saved listing titles. Duplicates are meaningful: each
/// save is one vote in the frequency tally.
#[derive(Debug, Default)]
pub struct FavoritesTracker {
    saved: Vec<String>,
}

impl FavoritesTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, title: impl Into<String>) {
        self.saved.push(title.into());
    }

    pub fn len(&self) -> usize {
        self.saved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.saved.is_empty()
    }

    /// Counts per title, most-saved first. Ties keep first-saved order (the
    /// stable sort over first-occurrence order makes the ranking
    /// deterministic).
    pub fn tally(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for title in &self.saved {
            match counts.iter_mut().find(|(seen, _)| seen == title) {
                Some((_, count)) => *count += 1,
                None => counts.push((title.clone(), 1)),
            }
        }
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }

    pub fn most_favorited(&self) -> Option<(String, usize)> {
        self.tally().into_iter().next()
    }
}
