//! Graphlet search engine — randomized expansion with pruning.
//!
//! The engine runs a stack-based randomized search. Seeding builds one
//! word graph per document and pushes a hypothesis for every
//! sufficiently frequent content word. Each iteration expands the whole
//! frontier in parallel, then merges sequentially: successors are
//! deduplicated corpus-wide, their canonical keys scored, and the next
//! frontier pruned against the iteration's frequency threshold and the
//! stack cap.

use std::collections::{HashMap, HashSet};

use rayon::prelude::*;
use regex::Regex;

use lexorbit_core::config::{GraphletKind, SearchConfig};
use lexorbit_core::error::Result;
use lexorbit_core::graphlet::Graphlet;
use lexorbit_core::tokenize::Tokenize;
use lexorbit_core::types::{Occurrence, PatternTable};

use crate::corpus::Corpus;
use crate::freq::WordFrequencies;
use crate::wordgraph::WordGraph;

/// Candidates surviving the frequency ranking in each expansion.
const CANDIDATE_POOL: usize = 5;

/// One live search state: a graphlet, its canonical context key, and
/// the document whose graph it grows in. Seeds carry an empty key.
#[derive(Debug, Clone)]
pub struct Hypothesis {
    pub key: String,
    pub graphlet: Graphlet,
    pub doc_id: String,
}

/// Counters describing the current state of a run.
#[derive(Debug, Clone, Default)]
pub struct MinerStats {
    pub documents_indexed: usize,
    pub documents_skipped: usize,
    pub seeds: usize,
    pub hypotheses_explored: usize,
    pub distinct_patterns: usize,
    pub iterations_run: usize,
    pub frontier_size: usize,
}

/// The graphlet pattern mining engine.
///
/// Create with a validated config, [`seed`](Self::seed) from a corpus,
/// then either drive iterations one [`step`](Self::step) at a time or
/// let [`run`](Self::run) do both. Results accumulate in the
/// [`PatternTable`].
pub struct GraphletMiner {
    config: SearchConfig,
    content_re: Regex,
    run_seed: u64,
    graphs: HashMap<String, WordGraph>,
    /// Document ids in corpus order.
    doc_order: Vec<String>,
    word_freq: WordFrequencies,
    /// Run-wide dedup keys: `doc_id + "_" + representation`.
    explored: HashSet<String>,
    pattern_freq: HashMap<String, u64>,
    table: PatternTable,
    frontier: Vec<Hypothesis>,
    iteration: usize,
    seeds: usize,
    documents_skipped: usize,
}

impl GraphletMiner {
    /// Validate the configuration and set up an empty engine.
    ///
    /// A bad knob fails here, before any corpus work.
    pub fn new(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        let content_re = config.content_regex()?;
        let run_seed = config.rng_seed.unwrap_or_else(seed_from_clock);
        Ok(GraphletMiner {
            config,
            content_re,
            run_seed,
            graphs: HashMap::new(),
            doc_order: Vec::new(),
            word_freq: WordFrequencies::default(),
            explored: HashSet::new(),
            pattern_freq: HashMap::new(),
            table: PatternTable::new(),
            frontier: Vec::new(),
            iteration: 0,
            seeds: 0,
            documents_skipped: 0,
        })
    }

    /// Index the corpus and push seed hypotheses onto the frontier.
    ///
    /// Builds the frequency index and one word graph per document. A
    /// document whose token stream is empty is skipped and counted,
    /// never fatal. Every content word with corpus frequency strictly
    /// above `min_word_freq` seeds one hypothesis with an empty key.
    /// In `Max` mode no hypotheses are pushed; the extractor walks each
    /// graph directly.
    pub fn seed<T: Tokenize>(&mut self, corpus: &Corpus, tokenizer: &T) {
        self.word_freq =
            WordFrequencies::build(corpus, tokenizer, self.config.word_selection_ratio);

        for doc in corpus.iter() {
            let sentences = tokenizer.labels(&doc.content);
            let graph = match WordGraph::build(
                &doc.id,
                &sentences,
                &self.config.stopwords,
                &self.content_re,
            ) {
                Ok(graph) => graph,
                Err(_) => {
                    self.documents_skipped += 1;
                    continue;
                }
            };

            if self.config.graphlet_kind == GraphletKind::Pruned {
                for word in graph.content_words() {
                    let frequent_enough = self
                        .word_freq
                        .get(word)
                        .map_or(false, |f| f > self.config.min_word_freq);
                    if frequent_enough {
                        self.frontier.push(Hypothesis {
                            key: String::new(),
                            graphlet: Graphlet::new(word.clone()),
                            doc_id: doc.id.clone(),
                        });
                        self.seeds += 1;
                    }
                }
            }

            self.doc_order.push(doc.id.clone());
            self.graphs.insert(doc.id.clone(), graph);
        }
    }

    /// Run one expand-and-prune round.
    ///
    /// Returns `false` once the iteration budget is spent or the
    /// frontier is empty, `true` while more rounds remain useful.
    pub fn step(&mut self) -> bool {
        if self.iteration >= self.config.max_iterations || self.frontier.is_empty() {
            return false;
        }

        let iteration = self.iteration;
        let graphs = &self.graphs;
        let word_freq = &self.word_freq;
        let run_seed = self.run_seed;

        // Fan out: every hypothesis expands independently against the
        // read-only graph registry and frequency index. Sub-seeds come
        // from the run seed plus the hypothesis position, so results do
        // not depend on worker scheduling.
        let successors: Vec<Vec<Expanded>> = self
            .frontier
            .par_iter()
            .enumerate()
            .map(|(position, hypothesis)| {
                let sub_seed = derive_seed(run_seed, iteration, position);
                expand_hypothesis(hypothesis, graphs, word_freq, sub_seed)
            })
            .collect();

        // Merge sequentially: corpus-wide dedup, scoring, recording.
        let parents = std::mem::take(&mut self.frontier);
        let mut next_frontier = Vec::new();
        for (parent, expanded) in parents.iter().zip(successors) {
            for item in expanded {
                let lookup_key = format!("{}_{}", parent.doc_id, item.representation);
                if !self.explored.insert(lookup_key) {
                    continue;
                }
                *self.pattern_freq.entry(item.key.clone()).or_insert(0) += 1;
                self.table.record(
                    &item.key,
                    Occurrence::new(item.graphlet.center(), &parent.doc_id),
                );
                next_frontier.push(Hypothesis {
                    key: item.key,
                    graphlet: item.graphlet,
                    doc_id: parent.doc_id.clone(),
                });
            }
        }

        // Prune against this iteration's threshold, then cap the stack.
        let threshold = self.config.threshold_for(iteration);
        next_frontier.retain(|h| {
            h.key.is_empty()
                || self
                    .pattern_freq
                    .get(&h.key)
                    .map_or(false, |f| *f > threshold)
        });
        next_frontier.truncate(self.config.pruned_stack_size);

        self.frontier = next_frontier;
        self.iteration += 1;
        true
    }

    /// Seed from the corpus and run the full search.
    pub fn run<T: Tokenize>(&mut self, corpus: &Corpus, tokenizer: &T) -> &PatternTable {
        self.seed(corpus, tokenizer);
        match self.config.graphlet_kind {
            GraphletKind::Pruned => {
                while self.step() {}
            }
            GraphletKind::Max => self.extract_max(),
        }
        self.table()
    }

    /// Exhaustive per-document extraction.
    ///
    /// For every ordered pair of content words within reach, the target
    /// lands on the orbit matching its hop distance from the center.
    /// The resulting graphlets flow through the same dedup and
    /// recording path as expansion successors.
    fn extract_max(&mut self) {
        for doc_id in self.doc_order.clone() {
            let Some(graph) = self.graphs.get(&doc_id) else {
                continue;
            };

            let mut by_center: HashMap<&str, Graphlet> = HashMap::new();
            for center in graph.content_words() {
                let distances = graph.shortest_path_lengths(center);
                for target in graph.content_words() {
                    let Some(&hops) = distances.get(target) else {
                        continue;
                    };
                    if hops == 0 || hops > self.config.max_orbit_capacity {
                        continue;
                    }
                    by_center
                        .entry(center.as_str())
                        .or_insert_with(|| Graphlet::new(center.clone()))
                        .place(target.clone(), hops);
                }
            }

            let mut discovered = Vec::new();
            for center in graph.content_words() {
                if let Some(graphlet) = by_center.remove(center.as_str()) {
                    let representation = graphlet.pattern_representation(graph.content_set());
                    discovered.push((graphlet, representation));
                }
            }

            for (graphlet, representation) in discovered {
                let lookup_key = format!("{}_{}", doc_id, representation);
                if !self.explored.insert(lookup_key) {
                    continue;
                }
                let key = context_key_of(&representation);
                *self.pattern_freq.entry(key.clone()).or_insert(0) += 1;
                self.table
                    .record(&key, Occurrence::new(graphlet.center(), &doc_id));
            }
        }
    }

    /// Patterns discovered so far.
    pub fn table(&self) -> &PatternTable {
        &self.table
    }

    /// Consume the engine, keeping only the results.
    pub fn into_table(self) -> PatternTable {
        self.table
    }

    /// Hypotheses still alive on the frontier.
    pub fn frontier(&self) -> &[Hypothesis] {
        &self.frontier
    }

    /// Number of completed iterations.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Corpus-wide count for a canonical key.
    pub fn pattern_frequency(&self, key: &str) -> u64 {
        self.pattern_freq.get(key).copied().unwrap_or(0)
    }

    /// The indexed word graph for a document, if it was built.
    pub fn graph(&self, doc_id: &str) -> Option<&WordGraph> {
        self.graphs.get(doc_id)
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn stats(&self) -> MinerStats {
        MinerStats {
            documents_indexed: self.graphs.len(),
            documents_skipped: self.documents_skipped,
            seeds: self.seeds,
            hypotheses_explored: self.explored.len(),
            distinct_patterns: self.table.len(),
            iterations_run: self.iteration,
            frontier_size: self.frontier.len(),
        }
    }
}

/// A successor produced by one expansion, with its encodings attached.
struct Expanded {
    graphlet: Graphlet,
    representation: String,
    key: String,
}

/// Expand one hypothesis against its document graph.
///
/// Picks a source orbit uniformly at random, collects graph neighbors
/// of the orbit's occupants that the graphlet has never absorbed,
/// splits them into content and functional words, and grows a clone
/// per retained content candidate. Functional neighbors ride along onto
/// the same target orbit. No content candidates means a dead end, even
/// when functional neighbors exist.
fn expand_hypothesis(
    hypothesis: &Hypothesis,
    graphs: &HashMap<String, WordGraph>,
    word_freq: &WordFrequencies,
    seed: u64,
) -> Vec<Expanded> {
    let Some(graph) = graphs.get(&hypothesis.doc_id) else {
        return Vec::new();
    };

    let mut rng = Lcg::new(seed);
    let source_orbit = rng.below(hypothesis.graphlet.orbit_count());
    let Ok(source_nodes) = hypothesis.graphlet.nodes_on_orbit(source_orbit) else {
        return Vec::new();
    };

    let mut content_candidates: Vec<&str> = Vec::new();
    let mut functional_candidates: Vec<&str> = Vec::new();
    for node in source_nodes {
        for neighbor in graph.neighbors(node) {
            if hypothesis.graphlet.contains(neighbor) {
                continue;
            }
            if graph.is_content(neighbor) {
                content_candidates.push(neighbor);
            } else {
                functional_candidates.push(neighbor);
            }
        }
    }

    // Rank distinct content candidates by corpus frequency; the stable
    // sort keeps first-seen order among ties.
    let mut seen = HashSet::new();
    content_candidates.retain(|w| seen.insert(*w));
    content_candidates.sort_by(|a, b| word_freq.score(b).cmp(&word_freq.score(a)));
    content_candidates.truncate(CANDIDATE_POOL);

    if content_candidates.is_empty() && functional_candidates.is_empty() {
        return Vec::new();
    }
    // Grow one content word at a time.
    content_candidates.truncate(1);

    let mut next_gen = Vec::new();
    for candidate in content_candidates {
        let mut grown = hypothesis.graphlet.clone();
        if source_orbit == grown.orbit_count() - 1 {
            grown.add_orbit();
        }
        grown.place_many(functional_candidates.iter().copied(), source_orbit + 1);
        grown.place(candidate, source_orbit + 1);

        let representation = grown.pattern_representation(graph.content_set());
        let key = context_key_of(&representation);
        next_gen.push(Expanded {
            graphlet: grown,
            representation,
            key,
        });
    }
    next_gen
}

/// Drop the center segment from a full representation.
fn context_key_of(representation: &str) -> String {
    representation
        .split_once('|')
        .map(|(_, rest)| rest.to_string())
        .unwrap_or_default()
}

/// Minimal LCG, deterministic per seed.
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state >> 33
    }

    /// Uniform draw from `0..bound`.
    fn below(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound.max(1) as u64) as usize
    }
}

/// Sub-seed for one hypothesis expansion, stable across schedulers.
fn derive_seed(run_seed: u64, iteration: usize, position: usize) -> u64 {
    run_seed
        .wrapping_mul(6364136223846793005)
        .wrapping_add(iteration as u64)
        .wrapping_mul(6364136223846793005)
        .wrapping_add(position as u64)
}

fn seed_from_clock() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
