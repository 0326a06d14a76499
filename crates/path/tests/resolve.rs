use ipfs_path::graph::GraphNode;
use ipfs_path::resolve::{
    resolve_ipfs_path, resolve_ipfs_paths, try_resolve_ipfs_paths, ResolveError, ResolveInput,
};
use ipfs_path::linked_data::Cid;
use ipfs_path::testkit::{cid_for, MemGraph};

/// Build the graph `root -{a}-> n1 -{b}-> n2` and return
/// (graph, root, n1, n2).
fn chain_graph() -> (MemGraph, Cid, Cid, Cid) {
    let root = cid_for(b"root");
    let n1 = cid_for(b"n1");
    let n2 = cid_for(b"n2");

    let graph = MemGraph::new();

    let mut root_node = GraphNode::new();
    root_node.insert("a", n1);
    graph.insert(root, root_node);

    let mut n1_node = GraphNode::new();
    n1_node.insert("b", n2);
    graph.insert(n1, n1_node);

    graph.insert(n2, GraphNode::new());

    (graph, root, n1, n2)
}

#[tokio::test]
async fn test_root_only_path_never_fetches() {
    let (graph, root, _, _) = chain_graph();

    for raw in [root.to_string(), format!("/ipfs/{}/", root)] {
        let cid = resolve_ipfs_path(&graph, raw.as_str()).await.unwrap();
        assert_eq!(cid, root);
    }

    assert_eq!(graph.fetch_count(), 0);
}

#[tokio::test]
async fn test_raw_identifier_inputs_resolve_to_themselves() {
    let (graph, root, _, _) = chain_graph();

    // already-decoded identifier: trusted as-is
    let cid = resolve_ipfs_path(&graph, root).await.unwrap();
    assert_eq!(cid, root);

    // raw bytes: validated, never text-parsed
    let cid = resolve_ipfs_path(&graph, root.to_bytes()).await.unwrap();
    assert_eq!(cid, root);

    assert_eq!(graph.fetch_count(), 0);
}

#[tokio::test]
async fn test_invalid_identifier_bytes_fail() {
    let (graph, _, _, _) = chain_graph();

    let err = resolve_ipfs_path(&graph, vec![0xde, 0xad, 0xbe, 0xef])
        .await
        .unwrap_err();
    assert!(matches!(err, ResolveError::InvalidCid(_)));
    assert_eq!(graph.fetch_count(), 0);
}

#[tokio::test]
async fn test_link_following_one_fetch_per_link() {
    let (graph, root, _, n2) = chain_graph();

    let cid = resolve_ipfs_path(&graph, format!("{}/a/b", root).as_str())
        .await
        .unwrap();

    assert_eq!(cid, n2);
    // fetched root and n1, nothing else
    assert_eq!(graph.fetch_count(), 2);
}

#[tokio::test]
async fn test_prefixed_path_resolves_identically() {
    let (graph, root, _, n2) = chain_graph();

    let cid = resolve_ipfs_path(&graph, format!("/ipfs/{}/a/b", root).as_str())
        .await
        .unwrap();
    assert_eq!(cid, n2);
}

#[tokio::test]
async fn test_missing_link_names_node_and_link() {
    let (graph, root, n1, _) = chain_graph();

    let err = resolve_ipfs_path(&graph, format!("{}/a/z", root).as_str())
        .await
        .unwrap_err();

    match err {
        ResolveError::LinkNotFound { name, node } => {
            assert_eq!(name, "z");
            assert_eq!(node, n1);
        }
        other => panic!("expected LinkNotFound, got {:?}", other),
    }

    // root and n1 were fetched; traversal stopped at n1
    assert_eq!(graph.fetch_count(), 2);
}

#[tokio::test]
async fn test_missing_node_passes_through_graph_error() {
    let graph = MemGraph::new();
    let root = cid_for(b"never inserted");

    let err = resolve_ipfs_path(&graph, format!("{}/a", root).as_str())
        .await
        .unwrap_err();
    assert!(matches!(err, ResolveError::Graph(_)));
}

#[tokio::test]
async fn test_duplicate_link_names_follow_first() {
    let first = cid_for(b"first target");
    let second = cid_for(b"second target");
    let root = cid_for(b"dup root");

    let graph = MemGraph::new();
    let mut root_node = GraphNode::new();
    root_node.insert("a", first);
    root_node.insert("a", second);
    graph.insert(root, root_node);

    let cid = resolve_ipfs_path(&graph, format!("{}/a", root).as_str())
        .await
        .unwrap();
    assert_eq!(cid, first);
}

#[tokio::test]
async fn test_batch_results_preserve_input_order() {
    let (graph, root, n1, n2) = chain_graph();

    let cids = resolve_ipfs_paths(
        &graph,
        [
            format!("{}/a/b", root),
            root.to_string(),
            format!("{}/a", root),
        ],
    )
    .await
    .unwrap();

    assert_eq!(cids, [n2, root, n1]);
}

#[tokio::test]
async fn test_batch_failures_are_independent() {
    let (graph, root, _, n2) = chain_graph();

    let results = try_resolve_ipfs_paths(
        &graph,
        [
            format!("{}/a/b", root),
            format!("{}/a/z", root),
            "bad path".to_string(),
        ],
    )
    .await;

    assert_eq!(results.len(), 3);
    assert_eq!(*results[0].as_ref().unwrap(), n2);
    assert!(matches!(
        results[1],
        Err(ResolveError::LinkNotFound { .. })
    ));
    assert!(matches!(results[2], Err(ResolveError::InvalidPath(_))));
}

#[tokio::test]
async fn test_batch_error_reports_every_failing_index() {
    let (graph, root, _, _) = chain_graph();

    let err = resolve_ipfs_paths(
        &graph,
        [
            root.to_string(),
            "bad path".to_string(),
            format!("{}/a/z", root),
        ],
    )
    .await
    .unwrap_err();

    assert_eq!(err.total, 3);
    let indexes: Vec<usize> = err.failures.iter().map(|(i, _)| *i).collect();
    assert_eq!(indexes, [1, 2]);

    // the valid sibling still ran to completion: even with the
    // gather-all error, its link chain was walked
    assert!(matches!(
        err.failures[1].1,
        ResolveError::LinkNotFound { .. }
    ));
}

#[tokio::test]
async fn test_mixed_input_variants_in_one_batch() {
    let (graph, root, n1, n2) = chain_graph();

    let path = ipfs_path::path::parse_ipfs_path(&format!("{}/a/b", root)).unwrap();
    let inputs: Vec<ResolveInput> = vec![
        ResolveInput::from(format!("{}/a", root)),
        ResolveInput::from(root),
        ResolveInput::from(root.to_bytes()),
        ResolveInput::from(path),
    ];

    let cids = resolve_ipfs_paths(&graph, inputs).await.unwrap();
    assert_eq!(cids, [n1, root, root, n2]);
}
