use bt_engine::{BehaviorTree, NodeRegistry, TreeDocument};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;

fn wide_sequence_document(width: usize) -> TreeDocument {
    let mut nodes = serde_json::Map::new();
    let child_ids: Vec<String> = (0..width).map(|i| format!("leaf{i}")).collect();
    nodes.insert("seq".to_string(), json!({ "name": "Sequence", "children": child_ids }));
    for i in 0..width {
        nodes.insert(format!("leaf{i}"), json!({ "name": "Succeeder" }));
    }

    let doc = json!({ "root": "seq", "nodes": nodes });
    serde_json::from_value(doc).expect("well-formed bench document")
}

fn bench_tree_tick(c: &mut Criterion) {
    let registry = NodeRegistry::with_builtins();
    let document = wide_sequence_document(32);
    let mut tree = BehaviorTree::from_document(&document, &registry).unwrap();

    c.bench_function("bt-engine/tick(succeeders=32)", |b| {
        b.iter(|| {
            black_box(tree.tick());
        })
    });
}

criterion_group!(benches, bench_tree_tick);
criterion_main!(benches);
