use std::fmt::Display;
use std::hash::Hash;

use hashbrown::HashMap;

use crate::indexed::{index_len, Index};

/// An ordered set of labels, addressable by position and by label.
pub trait LabelSet {
    type Label;

    fn size(&self) -> Index;

    /// The label at `index` as text.
    fn label(&self, index: Index) -> Option<String>;

    /// The label at `index`.
    fn label_value(&self, index: Index) -> Option<Self::Label>;

    /// The position of the label whose text is `label`.
    fn index_of(&self, label: &str) -> Option<Index>;

    /// The position of `label`.
    fn index_of_value(&self, label: &Self::Label) -> Option<Index>;
}

/// Text labels looked up by binary search over a sorted copy.
///
/// Duplicate labels resolve to the first position they appear at.
///
/// ```
/// use matmax::frame::{LabelSet, StringLabelSet};
///
/// let labels = StringLabelSet::new(["price", "bid", "ask"]);
/// assert_eq!(labels.index_of("ask"), Some(2));
/// assert_eq!(labels.index_of("last"), None);
/// assert_eq!(labels.label(0).as_deref(), Some("price"));
/// ```
///
#[derive(Debug, Clone, PartialEq)]
pub struct StringLabelSet {
    labels: Vec<String>,
    sorted: Vec<(String, Index)>,
}

impl StringLabelSet {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        // positions must fit an Index
        index_len(labels.len());

        let mut sorted: Vec<(String, Index)> = labels
            .iter()
            .enumerate()
            .map(|(i, l)| (l.clone(), i as Index))
            .collect();
        // stable, so equal labels keep their original order
        sorted.sort_by(|a, b| a.0.cmp(&b.0));

        StringLabelSet { labels, sorted }
    }
}

impl LabelSet for StringLabelSet {
    type Label = String;

    fn size(&self) -> Index {
        self.labels.len() as Index
    }

    fn label(&self, index: Index) -> Option<String> {
        self.label_value(index)
    }

    fn label_value(&self, index: Index) -> Option<String> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.labels.get(i))
            .cloned()
    }

    fn index_of(&self, label: &str) -> Option<Index> {
        let first = self.sorted.partition_point(|(l, _)| l.as_str() < label);
        self.sorted
            .get(first)
            .filter(|(l, _)| l == label)
            .map(|&(_, i)| i)
    }

    fn index_of_value(&self, label: &String) -> Option<Index> {
        self.index_of(label)
    }
}

/// The labels `0..size`, each standing for its own position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexLabelSet {
    size: Index,
}

impl IndexLabelSet {
    pub fn new(size: Index) -> Self {
        IndexLabelSet { size: size.max(0) }
    }

    fn contains(&self, index: Index) -> bool {
        (0..self.size).contains(&index)
    }
}

impl LabelSet for IndexLabelSet {
    type Label = Index;

    fn size(&self) -> Index {
        self.size
    }

    fn label(&self, index: Index) -> Option<String> {
        self.label_value(index).map(|i| i.to_string())
    }

    fn label_value(&self, index: Index) -> Option<Index> {
        self.contains(index).then_some(index)
    }

    fn index_of(&self, label: &str) -> Option<Index> {
        label
            .parse::<Index>()
            .ok()
            .filter(|&i| self.contains(i))
    }

    fn index_of_value(&self, label: &Index) -> Option<Index> {
        self.label_value(*label)
    }
}

/// Labels of any hashable type, looked up through a hash map.
#[derive(Debug, Clone)]
pub struct HashLabelSet<V: Hash + Eq> {
    labels: Vec<V>,
    positions: HashMap<V, Index>,
}

impl<V: Hash + Eq + Clone + Display> HashLabelSet<V> {
    pub fn new<I: IntoIterator<Item = V>>(labels: I) -> Self {
        let labels: Vec<V> = labels.into_iter().collect();
        // positions must fit an Index
        index_len(labels.len());

        let mut positions = HashMap::with_capacity(labels.len());
        for (i, label) in labels.iter().enumerate() {
            positions.entry(label.clone()).or_insert(i as Index);
        }
        HashLabelSet { labels, positions }
    }
}

impl<V: Hash + Eq + Clone + Display> LabelSet for HashLabelSet<V> {
    type Label = V;

    fn size(&self) -> Index {
        self.labels.len() as Index
    }

    fn label(&self, index: Index) -> Option<String> {
        self.label_value(index).map(|l| l.to_string())
    }

    fn label_value(&self, index: Index) -> Option<V> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.labels.get(i))
            .cloned()
    }

    fn index_of(&self, label: &str) -> Option<Index> {
        self.labels
            .iter()
            .position(|l| l.to_string() == label)
            .map(|i| i as Index)
    }

    fn index_of_value(&self, label: &V) -> Option<Index> {
        self.positions.get(label).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_lookup_returns_original_position() {
        let labels = StringLabelSet::new(["zeta", "alpha", "mid"]);
        assert_eq!(labels.index_of("zeta"), Some(0));
        assert_eq!(labels.index_of("alpha"), Some(1));
        assert_eq!(labels.index_of("mid"), Some(2));
        assert_eq!(labels.index_of("beta"), None);
        assert_eq!(labels.index_of_value(&"mid".to_string()), Some(2));
        assert_eq!(labels.size(), 3);
    }

    #[test]
    fn duplicate_labels_resolve_to_first() {
        let labels = StringLabelSet::new(["b", "a", "b", "a"]);
        assert_eq!(labels.index_of("a"), Some(1));
        assert_eq!(labels.index_of("b"), Some(0));
    }

    #[test]
    fn string_labels_out_of_range() {
        let labels = StringLabelSet::new(vec!["x".to_string()]);
        assert_eq!(labels.label(1), None);
        assert_eq!(labels.label(-1), None);
        assert_eq!(labels.label_value(0), Some("x".to_string()));
    }

    #[test]
    fn index_labels_exclude_size() {
        let labels = IndexLabelSet::new(3);
        assert_eq!(labels.label(2).as_deref(), Some("2"));
        assert_eq!(labels.label(3), None);
        assert_eq!(labels.index_of("1"), Some(1));
        assert_eq!(labels.index_of("3"), None);
        assert_eq!(labels.index_of("-1"), None);
        assert_eq!(labels.index_of("one"), None);
        assert_eq!(labels.index_of_value(&0), Some(0));
        assert_eq!(IndexLabelSet::new(-4).size(), 0);
    }

    #[test]
    fn hashed_labels() {
        let labels = HashLabelSet::new([10_i64, 20, 30, 20]);
        assert_eq!(labels.index_of_value(&20), Some(1));
        assert_eq!(labels.index_of_value(&40), None);
        assert_eq!(labels.index_of("30"), Some(2));
        assert_eq!(labels.label(3).as_deref(), Some("20"));
        assert_eq!(labels.size(), 4);
    }
}
