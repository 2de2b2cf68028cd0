//! Graphlet — a center label with ordered orbits of context labels.
//!
//! The graphlet is the unit of pattern currency. Orbit 0 holds the center
//! word; orbit k holds labels discovered k expansion steps out. The
//! canonical string encoding of the orbits is what gets deduplicated and
//! counted across the corpus.

use std::collections::{BTreeSet, HashSet};

use crate::error::{MineError, Result};

/// Placeholder for labels outside the content vocabulary.
pub const MASK_TOKEN: &str = "<FUNC_OR_STOP_WORD>";

/// Placeholder for an orbit with no occupants.
pub const EMPTY_ORBIT_TOKEN: &str = "<EMPTY_ORBIT>";

/// A center label surrounded by ordered orbits of context labels.
///
/// Orbits are contiguous: placing a label onto an orbit index that does
/// not exist yet creates it, along with any intermediate empty orbits.
/// Within an orbit each label appears at most once, while the placement
/// history (`all_nodes`) keeps every placement including repeats, so
/// membership checks see everything that was ever added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graphlet {
    orbits: Vec<Vec<String>>,
    all_nodes: Vec<String>,
}

impl Graphlet {
    /// Create a graphlet with `center` alone on orbit 0.
    pub fn new(center: impl Into<String>) -> Self {
        let center = center.into();
        Graphlet {
            orbits: vec![vec![center.clone()]],
            all_nodes: vec![center],
        }
    }

    /// Append a new empty orbit, returning its index.
    pub fn add_orbit(&mut self) -> usize {
        self.orbits.push(Vec::new());
        self.orbits.len() - 1
    }

    /// Place `label` on the given orbit.
    ///
    /// Creates the orbit (and any intermediate orbits) if it does not
    /// exist yet. The label is skipped if already present on that orbit,
    /// but every call appends to the placement history.
    pub fn place(&mut self, label: impl Into<String>, orbit: usize) {
        let label = label.into();
        while self.orbits.len() <= orbit {
            self.orbits.push(Vec::new());
        }
        if !self.orbits[orbit].contains(&label) {
            self.orbits[orbit].push(label.clone());
        }
        self.all_nodes.push(label);
    }

    /// Place every label in `labels` on the given orbit.
    pub fn place_many<I, S>(&mut self, labels: I, orbit: usize)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for label in labels {
            self.place(label, orbit);
        }
    }

    /// Place `label` on the outermost existing orbit.
    pub fn place_on_outer(&mut self, label: impl Into<String>) {
        self.place(label, self.orbits.len() - 1);
    }

    /// Place every label in `labels` on the outermost existing orbit.
    pub fn place_many_on_outer<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let outer = self.orbits.len() - 1;
        self.place_many(labels, outer);
    }

    /// Labels on the given orbit, in placement order.
    ///
    /// An index at or beyond `orbit_count` is a contract violation.
    pub fn nodes_on_orbit(&self, orbit: usize) -> Result<&[String]> {
        self.orbits
            .get(orbit)
            .map(|o| o.as_slice())
            .ok_or_else(|| MineError::orbit_out_of_range(orbit, self.orbits.len()))
    }

    /// Labels on the outermost orbit.
    pub fn nodes_on_outer(&self) -> &[String] {
        self.orbits.last().map(|o| o.as_slice()).unwrap_or(&[])
    }

    /// Number of orbits, including orbit 0.
    pub fn orbit_count(&self) -> usize {
        self.orbits.len()
    }

    /// The center label.
    pub fn center(&self) -> &str {
        &self.orbits[0][0]
    }

    /// Every label ever placed, in placement order, repeats included.
    pub fn all_nodes(&self) -> &[String] {
        &self.all_nodes
    }

    /// Total number of placements, repeats included.
    pub fn size(&self) -> usize {
        self.all_nodes.len()
    }

    /// Whether `label` was ever placed on this graphlet.
    pub fn contains(&self, label: &str) -> bool {
        self.all_nodes.iter().any(|n| n == label)
    }

    /// Canonical encoding of every orbit, orbit 0 included.
    ///
    /// Labels outside `content_words` render as [`MASK_TOKEN`]. Within an
    /// orbit the rendered labels are deduplicated and sorted, so two
    /// graphlets with the same orbit contents encode identically no matter
    /// the placement order. An orbit with no occupants renders as
    /// [`EMPTY_ORBIT_TOKEN`].
    pub fn pattern_representation(&self, content_words: &HashSet<String>) -> String {
        self.render_orbits(0, content_words)
    }

    /// Canonical encoding of orbits 1 and up.
    ///
    /// Drops the center segment so graphlets with different centers but
    /// the same surrounding structure share a key. A graphlet with only
    /// orbit 0 yields the empty string.
    pub fn context_key(&self, content_words: &HashSet<String>) -> String {
        self.render_orbits(1, content_words)
    }

    fn render_orbits(&self, first_orbit: usize, content_words: &HashSet<String>) -> String {
        let segments: Vec<String> = self
            .orbits
            .iter()
            .enumerate()
            .skip(first_orbit)
            .map(|(idx, orbit)| render_orbit(idx, orbit, content_words))
            .collect();
        segments.join("|")
    }
}

/// Render one orbit as `idx:label;label;...`.
///
/// Masking happens before deduplication, so multiple non-content
/// occupants collapse into a single mask token.
fn render_orbit(idx: usize, orbit: &[String], content_words: &HashSet<String>) -> String {
    if orbit.is_empty() {
        return format!("{}:{}", idx, EMPTY_ORBIT_TOKEN);
    }
    let rendered: BTreeSet<&str> = orbit
        .iter()
        .map(|label| {
            if content_words.contains(label) {
                label.as_str()
            } else {
                MASK_TOKEN
            }
        })
        .collect();
    let joined = rendered.into_iter().collect::<Vec<_>>().join(";");
    format!("{}:{}", idx, joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn new_graphlet_has_center_on_orbit_zero() {
        let g = Graphlet::new("fox");
        assert_eq!(g.orbit_count(), 1);
        assert_eq!(g.center(), "fox");
        assert_eq!(g.nodes_on_orbit(0).unwrap(), &["fox".to_string()]);
        assert_eq!(g.all_nodes(), &["fox".to_string()]);
    }

    #[test]
    fn add_orbit_extends_count() {
        let mut g = Graphlet::new("fox");
        let idx = g.add_orbit();
        assert_eq!(idx, 1);
        assert_eq!(g.orbit_count(), 2);
        assert!(g.nodes_on_orbit(1).unwrap().is_empty());
    }

    #[test]
    fn place_creates_missing_orbits() {
        let mut g = Graphlet::new("fox");
        g.place("far", 3);
        assert_eq!(g.orbit_count(), 4);
        assert!(g.nodes_on_orbit(1).unwrap().is_empty());
        assert!(g.nodes_on_orbit(2).unwrap().is_empty());
        assert_eq!(g.nodes_on_orbit(3).unwrap(), &["far".to_string()]);
    }

    #[test]
    fn place_dedups_within_orbit_but_history_keeps_repeats() {
        let mut g = Graphlet::new("fox");
        g.place("quick", 1);
        g.place("quick", 1);
        assert_eq!(g.nodes_on_orbit(1).unwrap(), &["quick".to_string()]);
        assert_eq!(g.size(), 3);
        assert_eq!(
            g.all_nodes(),
            &["fox".to_string(), "quick".to_string(), "quick".to_string()]
        );
    }

    #[test]
    fn same_label_can_sit_on_two_orbits() {
        let mut g = Graphlet::new("fox");
        g.place("quick", 1);
        g.place("quick", 2);
        assert_eq!(g.nodes_on_orbit(1).unwrap(), &["quick".to_string()]);
        assert_eq!(g.nodes_on_orbit(2).unwrap(), &["quick".to_string()]);
    }

    #[test]
    fn clone_is_a_deep_copy() {
        let original = Graphlet::new("fox");
        let mut copy = original.clone();
        copy.place("quick", 1);
        copy.place("the", 1);
        assert_eq!(original.orbit_count(), 1);
        assert_eq!(original.size(), 1);
        assert_eq!(copy.orbit_count(), 2);
        assert_eq!(copy.size(), 3);
    }

    #[test]
    fn nodes_on_orbit_rejects_out_of_range() {
        let g = Graphlet::new("fox");
        assert!(g.nodes_on_orbit(0).is_ok());
        assert!(g.nodes_on_orbit(1).is_err());
    }

    #[test]
    fn outer_orbit_helpers_target_last_orbit() {
        let mut g = Graphlet::new("fox");
        g.add_orbit();
        g.place_on_outer("quick");
        g.place_many_on_outer(["brown", "lazy"]);
        assert_eq!(
            g.nodes_on_outer(),
            &["quick".to_string(), "brown".to_string(), "lazy".to_string()]
        );
    }

    #[test]
    fn representation_masks_non_content_labels() {
        let mut g = Graphlet::new("fox");
        g.place("quick", 1);
        g.place("the", 2);
        let rep = g.pattern_representation(&content(&["fox", "quick"]));
        assert_eq!(rep, "0:fox|1:quick|2:<FUNC_OR_STOP_WORD>");
    }

    #[test]
    fn context_key_drops_center_segment() {
        let mut g = Graphlet::new("fox");
        g.place("quick", 1);
        g.place("the", 2);
        let key = g.context_key(&content(&["fox", "quick"]));
        assert_eq!(key, "1:quick|2:<FUNC_OR_STOP_WORD>");
    }

    #[test]
    fn context_key_of_seed_is_empty() {
        let g = Graphlet::new("fox");
        assert_eq!(g.context_key(&content(&["fox"])), "");
    }

    #[test]
    fn encoding_ignores_placement_order() {
        let words = content(&["fox", "alpha", "beta"]);

        let mut a = Graphlet::new("fox");
        a.place("alpha", 1);
        a.place("beta", 1);

        let mut b = Graphlet::new("fox");
        b.place("beta", 1);
        b.place("alpha", 1);

        assert_eq!(a.context_key(&words), b.context_key(&words));
        assert_eq!(a.context_key(&words), "1:alpha;beta");
    }

    #[test]
    fn encoding_is_sensitive_to_orbit_index() {
        let words = content(&["fox", "alpha"]);

        let mut a = Graphlet::new("fox");
        a.place("alpha", 1);

        let mut b = Graphlet::new("fox");
        b.place("alpha", 2);

        assert_ne!(a.context_key(&words), b.context_key(&words));
    }

    #[test]
    fn duplicate_masks_collapse() {
        let mut g = Graphlet::new("fox");
        g.place("the", 1);
        g.place("of", 1);
        let rep = g.pattern_representation(&content(&["fox"]));
        assert_eq!(rep, "0:fox|1:<FUNC_OR_STOP_WORD>");
    }

    #[test]
    fn empty_orbit_renders_placeholder() {
        let mut g = Graphlet::new("fox");
        g.place("far", 2);
        let rep = g.pattern_representation(&content(&["fox", "far"]));
        assert_eq!(rep, "0:fox|1:<EMPTY_ORBIT>|2:far");
    }
}
