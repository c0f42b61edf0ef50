use ordtree_core::{Error, Notice, OrderedTree, Session, Slot, TreeConfig};

// Checks the shape rules a caller can observe through the public accessors
// and returns every node's key count, root first.
fn collect_key_counts<T: Ord + Clone>(tree: &OrderedTree<T>, out: &mut Vec<(usize, bool)>, is_root: bool) {
    out.push((tree.keys().len(), is_root));
    if !tree.slots().is_empty() {
        assert_eq!(tree.slots().len(), tree.keys().len() + 1);
    }
    for slot in tree.slots() {
        match slot {
            Slot::Subtree(child) => collect_key_counts(child, out, false),
            Slot::Bucket(tokens) => out.push((tokens.len(), false)),
        }
    }
}

fn assert_bounds<T: Ord + Clone>(tree: &OrderedTree<T>) {
    let mut counts = Vec::new();
    collect_key_counts(tree, &mut counts, true);
    for (count, is_root) in counts {
        assert!(count <= tree.degree());
        if !is_root {
            assert!(count >= tree.degree() / 2);
        }
    }
}

#[test]
fn test_single_insert_render() {
    let mut tree = OrderedTree::new(3);
    assert_eq!(tree.insert("a".to_string()), Ok(()));
    assert_eq!(tree.render(), "Root: (a)\n");
}

#[test]
fn test_duplicate_leaves_tree_unchanged() {
    let mut tree = OrderedTree::new(3);
    tree.insert("a".to_string()).unwrap();
    let before = tree.render();

    assert_eq!(tree.insert("a".to_string()), Err(Error::DuplicateValue));
    assert_eq!(tree.render(), before);
}

#[test]
fn test_delete_missing_from_empty() {
    let mut tree: OrderedTree<String> = OrderedTree::new(3);
    assert_eq!(tree.delete(&"z".to_string()), Err(Error::ValueNotFound));
    assert_eq!(tree.render(), "Root: ()\n");
}

#[test]
fn test_split_adds_one_key_and_one_slot() {
    let mut tree = OrderedTree::new(3);
    let mut shapes = Vec::new();
    for token in ["a", "b", "c", "d", "e"] {
        tree.insert(token.to_string()).unwrap();
        shapes.push((tree.keys().len(), tree.slots().len()));
    }

    // "d" overflows the root, "e" overflows the rightmost bucket
    assert_eq!(shapes, vec![(1, 0), (2, 0), (3, 0), (1, 2), (2, 3)]);
    assert_bounds(&tree);
}

#[test]
fn test_underflow_rebalances() {
    let mut tree = OrderedTree::new(4);
    for i in 0..40 {
        tree.insert(i).unwrap();
    }
    for i in (0..40).filter(|i| i % 3 != 0) {
        tree.delete(&i).unwrap();
        assert_bounds(&tree);
    }
    let remaining: Vec<i32> = tree.iter().copied().collect();
    assert_eq!(remaining, (0..40).filter(|i| i % 3 == 0).collect::<Vec<_>>());
}

#[test]
fn test_fan_out_bound_all_degrees() {
    for degree in 3..=10 {
        let mut tree = TreeConfig::new(degree).build();
        for i in (0..200).rev() {
            tree.insert(i).unwrap();
        }
        assert_bounds(&tree);
        assert_eq!(tree.len(), 200);
    }
}

#[test]
fn test_session_round_trip() {
    let mut session = Session::new();
    assert!(session.create("0").is_err());
    session.create("3").unwrap();

    for value in ["m", "c", "x", "a", "e"] {
        assert_eq!(session.insert(value), Ok(Notice::Inserted(value.to_string())));
    }
    assert_eq!(session.insert("e"), Ok(Notice::Duplicate("e".to_string())));
    assert_eq!(session.delete("q"), Ok(Notice::NotFound("q".to_string())));

    let view = session.view().unwrap();
    assert!(view.starts_with("Root: ("));
    assert_eq!(view, session.view().unwrap());
}

#[test]
fn test_slot_views() {
    let mut tree = OrderedTree::new(3);
    for i in 0..10 {
        tree.insert(i).unwrap();
    }

    let mut node = &tree;
    let mut depth = 1;
    while let Some(child) = node.slots()[0].as_subtree() {
        node = child;
        depth += 1;
    }
    assert_eq!(node.slots()[0].as_bucket(), Some(&[0][..]));
    assert_eq!(depth + 1, tree.height());
}
