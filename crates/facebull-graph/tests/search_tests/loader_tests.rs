//! Text input through to a verified solution.

use std::io::Write;

use facebull_graph::{floyd_warshall, load_catalog, parse_catalog, solve, GraphError};

use crate::common::fixtures::{SAMPLE_INPUT, SAMPLE_OPTIMUM};

#[test]
fn test_load_sample_file_and_verify() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(SAMPLE_INPUT.as_bytes()).unwrap();

    let catalog = load_catalog(file.path()).unwrap();
    assert_eq!(catalog.node_count(), 3);
    assert_eq!(catalog.edge_count(), 6);

    let result = solve(&catalog).unwrap();
    let solution = result.solution().expect("solvable");
    assert_eq!(solution.total_cost(), SAMPLE_OPTIMUM);

    let distances = floyd_warshall(&catalog, solution.edges());
    assert!(distances.is_strongly_connected());
    assert!(distances.unreachable_pairs().is_empty());
}

#[test]
fn test_truncated_tail_still_solves() {
    let text = format!("{}M7 C1", SAMPLE_INPUT);
    let catalog = parse_catalog(&text).unwrap();
    assert_eq!(catalog.edge_count(), 6);
    assert_eq!(solve(&catalog).unwrap().total_cost(), Some(SAMPLE_OPTIMUM));
}

#[test]
fn test_corrupt_record_in_the_middle_aborts() {
    let text = SAMPLE_INPUT.replace("M3 C1 C3 478001", "M3 C1 C3 lots");
    let err = parse_catalog(&text).unwrap_err();
    match err {
        GraphError::MalformedInput { record, line, .. } => {
            assert_eq!(record, 3);
            assert_eq!(line, 3);
        }
        other => panic!("expected MalformedInput, got {:?}", other),
    }
}
