use std::collections::BTreeSet;

/// Checked rows for one view, keyed by stable record identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<K: Ord + Copy> {
    keys: BTreeSet<K>,
}

impl<K: Ord + Copy> Default for Selection<K> {
    fn default() -> Self {
        Self {
            keys: BTreeSet::new(),
        }
    }
}

impl<K: Ord + Copy> Selection<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership and reports whether the key is now selected.
    pub fn toggle(&mut self, key: K) -> bool {
        if self.keys.remove(&key) {
            false
        } else {
            self.keys.insert(key);
            true
        }
    }

    /// `true` selects every key yielded by `loaded`; `false` clears.
    pub fn select_all(&mut self, selected: bool, loaded: impl IntoIterator<Item = K>) {
        self.keys.clear();
        if selected {
            self.keys.extend(loaded);
        }
    }

    pub fn prune(&mut self, key: K) -> bool {
        self.keys.remove(&key)
    }

    pub fn contains(&self, key: K) -> bool {
        self.keys.contains(&key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.keys.iter().copied()
    }

    /// Header checkbox state: true when `loaded` is non-empty and fully selected.
    pub fn all_selected(&self, loaded: impl IntoIterator<Item = K>) -> bool {
        let mut any = false;
        for key in loaded {
            any = true;
            if !self.keys.contains(&key) {
                return false;
            }
        }
        any
    }
}
