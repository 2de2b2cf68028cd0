//! Per-document word adjacency graph.
//!
//! Nodes are token labels; edges connect labels that appear next to each
//! other within a sentence. This implementation uses petgraph's `Graph`
//! as the backing store with a HashMap index for O(1) label lookup.
//! Graphs are built once per document and read-only afterwards.

use std::collections::{HashMap, HashSet, VecDeque};

use petgraph::graph::{Graph, NodeIndex};
use petgraph::visit::EdgeRef;
use regex::Regex;

use lexorbit_core::error::{MineError, Result};

/// Petgraph-backed word adjacency graph for a single document.
pub struct WordGraph {
    doc_id: String,
    graph: Graph<String, u32, petgraph::Undirected>,
    /// Map from label to petgraph's internal index.
    node_index: HashMap<String, NodeIndex>,
    /// Content labels in first-appearance order.
    content_words: Vec<String>,
    content_set: HashSet<String>,
}

impl WordGraph {
    /// Build the adjacency graph for one document from sentence-bounded
    /// label sequences.
    ///
    /// Every adjacent pair within a sentence becomes an undirected edge;
    /// repeat co-occurrences in either order increment the edge weight.
    /// Labels reach the graph only through pairs, so a single-token
    /// sentence contributes no nodes. A stream with no tokens at all
    /// fails construction.
    pub fn build(
        doc_id: impl Into<String>,
        sentences: &[Vec<String>],
        stopwords: &HashSet<String>,
        content_re: &Regex,
    ) -> Result<Self> {
        let doc_id = doc_id.into();
        if sentences.iter().all(|sentence| sentence.is_empty()) {
            return Err(MineError::empty_document(doc_id));
        }

        let mut graph = Graph::new_undirected();
        let mut node_index: HashMap<String, NodeIndex> = HashMap::new();

        for sentence in sentences {
            for pair in sentence.windows(2) {
                let a = intern(&mut graph, &mut node_index, &pair[0]);
                let b = intern(&mut graph, &mut node_index, &pair[1]);
                match graph.find_edge(a, b) {
                    Some(edge) => graph[edge] += 1,
                    None => {
                        graph.add_edge(a, b, 1);
                    }
                }
            }
        }

        // Content membership is fixed at build time.
        let mut content_words = Vec::new();
        let mut content_set = HashSet::new();
        for idx in graph.node_indices() {
            let label = &graph[idx];
            if content_re.is_match(label) && !stopwords.contains(label.as_str()) {
                content_words.push(label.clone());
                content_set.insert(label.clone());
            }
        }

        Ok(WordGraph {
            doc_id,
            graph,
            node_index,
            content_words,
            content_set,
        })
    }

    pub fn doc_id(&self) -> &str {
        &self.doc_id
    }

    /// Labels adjacent to `label`, empty if the label is not a node.
    pub fn neighbors(&self, label: &str) -> Vec<&str> {
        let Some(&idx) = self.node_index.get(label) else {
            return Vec::new();
        };

        self.graph
            .edges(idx)
            .map(|edge| {
                let other = if edge.source() == idx {
                    edge.target()
                } else {
                    edge.source()
                };
                self.graph[other].as_str()
            })
            .collect()
    }

    /// Co-occurrence count for the pair, `None` when no edge exists.
    pub fn edge_weight(&self, a: &str, b: &str) -> Option<u32> {
        let a_idx = self.node_index.get(a)?;
        let b_idx = self.node_index.get(b)?;
        let edge = self.graph.find_edge(*a_idx, *b_idx)?;
        Some(self.graph[edge])
    }

    /// BFS hop counts from `source` to every reachable label.
    ///
    /// The source maps to 0; unreachable labels are absent. Empty when
    /// the source is not a node.
    pub fn shortest_path_lengths(&self, source: &str) -> HashMap<String, usize> {
        let mut distances = HashMap::new();
        let Some(&start) = self.node_index.get(source) else {
            return distances;
        };

        let mut hops: HashMap<NodeIndex, usize> = HashMap::new();
        let mut queue = VecDeque::new();
        hops.insert(start, 0);
        queue.push_back((start, 0usize));

        while let Some((idx, d)) = queue.pop_front() {
            for edge in self.graph.edges(idx) {
                let other = if edge.source() == idx {
                    edge.target()
                } else {
                    edge.source()
                };
                if !hops.contains_key(&other) {
                    hops.insert(other, d + 1);
                    queue.push_back((other, d + 1));
                }
            }
        }

        for (idx, d) in hops {
            distances.insert(self.graph[idx].clone(), d);
        }
        distances
    }

    /// Content labels in first-appearance order.
    pub fn content_words(&self) -> &[String] {
        &self.content_words
    }

    /// Content labels as a set, for membership checks and masking.
    pub fn content_set(&self) -> &HashSet<String> {
        &self.content_set
    }

    pub fn is_content(&self, label: &str) -> bool {
        self.content_set.contains(label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.node_index.contains_key(label)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

fn intern(
    graph: &mut Graph<String, u32, petgraph::Undirected>,
    node_index: &mut HashMap<String, NodeIndex>,
    label: &str,
) -> NodeIndex {
    if let Some(&idx) = node_index.get(label) {
        return idx;
    }
    let idx = graph.add_node(label.to_string());
    node_index.insert(label.to_string(), idx);
    idx
}
