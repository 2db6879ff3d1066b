use std::collections::{BTreeMap, BTreeSet};

use artistweb_core::{
    expand, grow, paths_subgraph, resolve, trim, BoxError, Entity, Error, FnSource, RelationGraph,
};

fn e(id: &str) -> Entity {
    resolve(id).unwrap()
}

fn table(edges: &[(&str, &str)]) -> BTreeMap<Entity, BTreeSet<Entity>> {
    let mut table: BTreeMap<Entity, BTreeSet<Entity>> = BTreeMap::new();
    for (a, b) in edges {
        table.entry(e(a)).or_default().insert(e(b));
        table.entry(e(b)).or_default().insert(e(a));
    }
    table
}

#[test]
fn end_to_end_scenario() {
    let related = |entity: &Entity| -> Result<BTreeSet<Entity>, BoxError> {
        Ok(match entity.id() {
            "a" => [e("x")].into(),
            "x" => [e("b")].into(),
            _ => BTreeSet::new(),
        })
    };
    let source = FnSource(related);
    let seeds: BTreeSet<Entity> = [e("a"), e("b")].into();

    let grown = grow(&source, &seeds, None).unwrap();
    let expected = RelationGraph::from_edges([(e("a"), e("x")), (e("x"), e("b"))]);
    assert_eq!(grown, expected);

    let trimmed = trim(&grown, &seeds);
    assert_eq!(trimmed, grown);

    let (reduced, paths) = paths_subgraph(&trimmed, &seeds, None).unwrap();
    let ab = paths.get(&e("a"), &e("b")).unwrap();
    assert_eq!(ab.len(), 1);
    assert_eq!(ab[0].entities(), &[e("a"), e("x"), e("b")]);
    assert_eq!(reduced, trimmed);
}

#[test]
fn grown_seeds_are_connected_across_a_ring() {
    let ring: Vec<(String, String)> = (0..12)
        .map(|i| (format!("n{}", i), format!("n{}", (i + 1) % 12)))
        .collect();
    let edges: Vec<(&str, &str)> = ring.iter().map(|(a, b)| (a.as_str(), b.as_str())).collect();
    let relations = table(&edges);
    let source = FnSource(|entity: &Entity| -> Result<BTreeSet<Entity>, BoxError> {
        Ok(relations.get(entity).cloned().unwrap_or_default())
    });

    let seeds = ["n0", "n4", "n8"];
    let grown = grow(&source, seeds, None).unwrap();
    assert!(grown.all_connected(&[e("n0"), e("n4"), e("n8")]));

    let (reduced, paths) = paths_subgraph(&trim(&grown, &[e("n0"), e("n4"), e("n8")].into()), seeds, None).unwrap();
    assert_eq!(paths.len(), 3);
    assert!(reduced.contains(&e("n2")));
    assert_eq!(paths.get(&e("n0"), &e("n4")).unwrap()[0].hops(), 4);
}

#[test]
fn expand_is_idempotent_when_nothing_is_new() {
    let relations = table(&[("a", "b"), ("b", "c"), ("c", "a")]);
    let source = FnSource(|entity: &Entity| -> Result<BTreeSet<Entity>, BoxError> {
        Ok(relations.get(entity).cloned().unwrap_or_default())
    });

    let once = expand(&source, ["a", "b", "c"], None).unwrap();
    let again = expand(&source, ["a", "b", "c"], Some(&once)).unwrap();
    assert_eq!(once, again);
}

#[test]
fn stalled_growth_reports_no_progress() {
    let source = FnSource(|_: &Entity| -> Result<BTreeSet<Entity>, BoxError> { Ok(BTreeSet::new()) });
    let err = grow(&source, ["a", "b"], None).unwrap_err();

    assert!(matches!(err, Error::NoProgress { .. }));
}

#[test]
fn single_seed_boundary() {
    let source = FnSource(|_: &Entity| -> Result<BTreeSet<Entity>, BoxError> { Ok([e("z")].into()) });
    let grown = grow(&source, ["a"], None).unwrap();

    assert_eq!(grown.node_count(), 1);
    assert!(grown.contains(&e("a")));

    let (reduced, paths) = paths_subgraph(&grown, ["a"], None).unwrap();
    assert!(paths.is_empty());
    assert_eq!(reduced.node_count(), 0);
}
