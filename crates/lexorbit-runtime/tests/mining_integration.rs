//! Mining integration tests — full corpus-to-table runs.

use lexorbit_core::config::{GraphletKind, SearchConfig};
use lexorbit_core::tokenize::{PlainTokenizer, TaggedLineTokenizer};
use lexorbit_runtime::corpus::Corpus;
use lexorbit_runtime::export::parse_pattern_key;
use lexorbit_runtime::search::GraphletMiner;

#[test]
fn embedded_corpus_end_to_end() {
    let corpus = Corpus::from_embedded();
    let config = SearchConfig::default()
        .with_seed(13)
        .with_min_word_freq(2)
        .with_max_iterations(4)
        .with_threshold(0, 1)
        .with_threshold(1, 1)
        .with_threshold(2, 1)
        .with_threshold(3, 1);

    let mut miner = GraphletMiner::new(config).expect("valid config");
    miner.run(&corpus, &PlainTokenizer);

    let stats = miner.stats();
    assert_eq!(stats.documents_indexed, 8, "all embedded documents should index");
    assert_eq!(stats.documents_skipped, 0);
    assert!(stats.seeds > 0, "frequent content words should seed the search");
    assert!(!miner.table().is_empty(), "expansion should discover patterns");

    let known_ids: Vec<&str> = corpus.iter().map(|d| d.id.as_str()).collect();
    for (key, occurrences) in miner.table().iter() {
        let segments = parse_pattern_key(key).expect("recorded keys parse back");
        assert!(!segments.is_empty(), "recorded keys carry at least one orbit");
        assert_eq!(segments[0].0, 1, "context keys start at orbit 1");
        assert!(
            segments.windows(2).all(|w| w[0].0 < w[1].0),
            "orbit indices increase within a key: {}",
            key
        );
        for occurrence in occurrences {
            assert!(known_ids.contains(&occurrence.doc.as_str()));
        }
    }
}

#[test]
fn step_drive_matches_state_machine() {
    let corpus = Corpus::from_embedded();
    let config = SearchConfig::default()
        .with_seed(21)
        .with_min_word_freq(1)
        .with_max_iterations(3)
        .with_threshold(0, 0)
        .with_threshold(1, 0)
        .with_threshold(2, 0);

    let mut miner = GraphletMiner::new(config).expect("valid config");
    miner.seed(&corpus, &PlainTokenizer);
    assert_eq!(miner.iteration(), 0);
    assert!(!miner.frontier().is_empty(), "seeding should populate the frontier");

    let mut rounds = 0;
    while miner.step() {
        rounds += 1;
        assert_eq!(miner.iteration(), rounds);
        let threshold = miner.config().threshold_for(rounds - 1);
        for hypothesis in miner.frontier() {
            assert!(
                hypothesis.key.is_empty()
                    || miner.pattern_frequency(&hypothesis.key) > threshold,
                "surviving key must clear its iteration threshold"
            );
        }
        assert!(miner.frontier().len() <= miner.config().pruned_stack_size);
    }

    assert!(
        miner.iteration() == 3 || miner.frontier().is_empty(),
        "the run ends on budget exhaustion or an empty frontier"
    );
}

#[test]
fn empty_documents_never_abort_a_run() {
    let mut corpus = Corpus::new("mixed");
    corpus.add_document(
        "finance",
        "The market rallied after traders digested the earnings report. \
         Analysts said the market rally could extend into next week.",
    );
    corpus.add_document("blank", "");
    corpus.add_document("spaces", "   \n\t  ");
    corpus.add_document(
        "weather",
        "Heavy rain flooded the valley after the storm stalled overnight. \
         Farmers said the rain ruined the harvest.",
    );

    let mut config = SearchConfig::default()
        .with_seed(5)
        .with_min_word_freq(0)
        .with_max_iterations(2)
        .with_threshold(0, 0)
        .with_threshold(1, 0);
    config.word_selection_ratio = 1.0;

    let mut miner = GraphletMiner::new(config).expect("valid config");
    miner.run(&corpus, &PlainTokenizer);

    let stats = miner.stats();
    assert_eq!(stats.documents_indexed, 2);
    assert_eq!(stats.documents_skipped, 2);
    assert!(!miner.table().is_empty());
    for (_, occurrences) in miner.table().iter() {
        for occurrence in occurrences {
            assert!(
                occurrence.doc == "finance" || occurrence.doc == "weather",
                "skipped documents must not contribute occurrences"
            );
        }
    }
}

#[test]
fn tagged_labels_flow_through_patterns() {
    let mut corpus = Corpus::new("tagged");
    corpus.add_document(
        "d1",
        "The_DT market_NN rallied_VBD\nThe_DT river_NN flooded_VBD",
    );

    let mut config = SearchConfig::default()
        .with_seed(3)
        .with_min_word_freq(0)
        .with_max_iterations(1)
        .with_threshold(0, 0);
    config.word_selection_ratio = 1.0;
    config.content_word_pattern = r".*_(NN|NNS|JJ|VBD)$".to_string();

    let mut miner = GraphletMiner::new(config).expect("valid config");
    miner.run(&corpus, &TaggedLineTokenizer);

    // determiners fall outside the tag pattern and get masked
    let table = miner.table();
    assert_eq!(table.support("1:market_NN"), 1);
    assert_eq!(table.support("1:<FUNC_OR_STOP_WORD>;rallied_VBD"), 1);
    assert_eq!(table.support("1:<FUNC_OR_STOP_WORD>;flooded_VBD"), 1);
}

#[test]
fn recording_survives_pruning() {
    // default thresholds are far above anything one small doc produces
    let mut corpus = Corpus::new("small");
    corpus.add_document("d1", "storm hits coast. storm hits harbor.");

    let mut config = SearchConfig::default().with_seed(9).with_min_word_freq(0);
    config.word_selection_ratio = 1.0;

    let mut miner = GraphletMiner::new(config).expect("valid config");
    miner.run(&corpus, &PlainTokenizer);

    assert!(!miner.table().is_empty(), "patterns are recorded before pruning");
    assert!(miner.frontier().is_empty(), "nothing clears the default threshold");
    assert_eq!(miner.stats().iterations_run, 1);
}

#[test]
fn max_mode_end_to_end() {
    let corpus = Corpus::from_embedded();
    let mut config = SearchConfig::default()
        .with_seed(17)
        .with_graphlet_kind(GraphletKind::Max);
    config.max_orbit_capacity = 3;

    let mut miner = GraphletMiner::new(config).expect("valid config");
    miner.run(&corpus, &PlainTokenizer);

    assert!(!miner.table().is_empty());
    assert_eq!(miner.stats().iterations_run, 0, "exhaustive extraction never iterates");

    for (key, occurrences) in miner.table().iter() {
        let segments = parse_pattern_key(key).expect("recorded keys parse back");
        assert!(segments.iter().all(|(orbit, _)| *orbit >= 1 && *orbit <= 3));
        for occurrence in occurrences {
            let graph = miner.graph(&occurrence.doc).expect("document was indexed");
            assert!(
                graph.is_content(&occurrence.center),
                "max extraction centers on content words only"
            );
        }
    }
}

#[test]
fn directory_corpus_mines_by_file_stem() {
    let dir = tempfile::TempDir::new().expect("create temp dir");
    std::fs::write(
        dir.path().join("alpha.txt"),
        "engine torque rises. engine torque falls.",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("beta.txt"),
        "engine noise rises. engine noise falls.",
    )
    .unwrap();

    let corpus = Corpus::from_directory(dir.path()).expect("load corpus");
    let mut config = SearchConfig::default()
        .with_seed(29)
        .with_min_word_freq(1)
        .with_max_iterations(2)
        .with_threshold(0, 0)
        .with_threshold(1, 0);
    config.word_selection_ratio = 1.0;

    let mut miner = GraphletMiner::new(config).expect("valid config");
    miner.run(&corpus, &PlainTokenizer);

    let docs: Vec<&str> = miner
        .table()
        .iter()
        .flat_map(|(_, occurrences)| occurrences.iter().map(|o| o.doc.as_str()))
        .collect();
    assert!(docs.contains(&"alpha"));
    assert!(docs.contains(&"beta"));
}
