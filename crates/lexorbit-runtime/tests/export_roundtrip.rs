//! Export integration tests — mined tables through files and back.

use lexorbit_core::config::SearchConfig;
use lexorbit_core::tokenize::PlainTokenizer;
use lexorbit_runtime::corpus::Corpus;
use lexorbit_runtime::export::{
    parse_pattern_key, parse_render_pattern, read_json, read_tsv, to_render_pattern, write_json,
    write_tsv,
};
use lexorbit_runtime::search::GraphletMiner;
use tempfile::TempDir;

fn mined_table() -> lexorbit_core::types::PatternTable {
    let corpus = Corpus::from_embedded();
    let config = SearchConfig::default()
        .with_seed(31)
        .with_min_word_freq(1)
        .with_max_iterations(3)
        .with_threshold(0, 0)
        .with_threshold(1, 0)
        .with_threshold(2, 0);
    let mut miner = GraphletMiner::new(config).expect("valid config");
    miner.run(&corpus, &PlainTokenizer);
    miner.into_table()
}

#[test]
fn tsv_file_round_trip_preserves_table() {
    let table = mined_table();
    assert!(!table.is_empty(), "embedded corpus should yield patterns");

    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("patterns.tsv");
    write_tsv(&table, &path).expect("write tsv");

    let reloaded = read_tsv(&path).expect("read tsv");
    assert_eq!(reloaded, table);
}

#[test]
fn json_file_round_trip_preserves_table() {
    let table = mined_table();

    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("nested").join("patterns.json");
    write_json(&table, &path).expect("write json creates parent dirs");

    let reloaded = read_json(&path).expect("read json");
    assert_eq!(reloaded, table);
}

#[test]
fn read_tsv_rejects_files_without_header() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("not-patterns.tsv");
    std::fs::write(&path, "just some text\nwithout a header\n").unwrap();

    assert!(read_tsv(&path).is_err());
}

#[test]
fn read_tsv_missing_file_is_io_error() {
    let dir = TempDir::new().expect("create temp dir");
    let missing = dir.path().join("nope.tsv");
    assert!(read_tsv(&missing).is_err());
}

#[test]
fn mined_keys_survive_render_conversion() {
    let table = mined_table();

    for key in table.keys() {
        let rendered = to_render_pattern(key);
        assert!(!rendered.contains('|'), "render form replaces orbit separators");
        assert_eq!(&parse_render_pattern(&rendered), key);

        let before = parse_pattern_key(key).expect("canonical keys parse");
        let after =
            parse_pattern_key(&parse_render_pattern(&rendered)).expect("round-tripped keys parse");
        assert_eq!(before, after);
    }
}
