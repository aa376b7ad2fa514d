//! Reference scenarios for the three search trees, exercised through the
//! public API only.

use classic_collections::{AvlTree, MultiwayTree, SearchTree};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn natural(a: &i64, b: &i64) -> std::cmp::Ordering {
    a.cmp(b)
}

#[test]
fn bst_adversarial_order() {
    let mut tree = SearchTree::new(natural);
    for x in [4, 6, 2, 5, 3, 1, 7] {
        tree.insert_data(x);
    }
    assert!(tree.search(&3).is_some());
    assert!(tree.search(&8).is_none());
}

#[test]
fn avl_ascending_1_to_31() {
    let mut tree = AvlTree::new(natural);
    for i in 1..=31 {
        tree.insert_data(i);
    }
    for i in 1..=31 {
        assert!(tree.search(&i).is_some(), "missing {i}");
    }
    assert!(tree.search(&32).is_none());
    assert!(tree.height() <= 6);
}

#[test]
fn avl_single_rotation_makes_20_the_root() {
    let mut tree = AvlTree::new(natural);
    tree.insert_data(10);
    tree.insert_data(20);
    tree.insert_data(30);

    let root = tree.root().unwrap();
    assert_eq!(*root.data(), 20);
    assert_eq!(root.height(), 2);
    assert_eq!(*root.left().unwrap().data(), 10);
    assert_eq!(*root.right().unwrap().data(), 30);
}

#[test]
fn multiway_ascending_1_to_31_at_degree_1() {
    let mut tree = MultiwayTree::new(1, natural);
    for i in 1..=31 {
        tree.insert_data(i);
    }
    for i in 1..=31 {
        assert!(tree.search(&i).is_some(), "missing {i}");
    }
    assert!(tree.search(&32).is_none());
}

#[test]
fn multiway_found_node_exposes_its_keys() {
    let mut tree = MultiwayTree::new(2, natural);
    for i in 0..20 {
        tree.insert_data(i);
    }
    let node = tree.search(&11).unwrap();
    let held: Vec<i64> = node.keys().to_vec();
    assert!(held.contains(&11));
    assert_eq!(node.key_count(), held.len());
}

// Inserting a value and then searching for it must always succeed, and
// searching for values never inserted must always fail. One shared sample of
// a thousand random values, checked against all three structures.
#[test]
fn round_trip_1000_random_values() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    let inserted: Vec<i64> = (0..1000).map(|_| rng.gen_range(0..1_000_000)).collect();
    let absent: Vec<i64> = (0..1000)
        .map(|_| rng.gen_range(0..1_000_000))
        .filter(|x| !inserted.contains(x))
        .collect();

    let mut bst = SearchTree::new(natural);
    let mut avl = AvlTree::new(natural);
    let mut multi2 = MultiwayTree::new(2, natural);

    for &x in &inserted {
        bst.insert_data(x);
        avl.insert_data(x);
        multi2.insert_data(x);
    }

    for &x in &inserted {
        assert!(bst.contains(&x), "bst lost {x}");
        assert!(avl.contains(&x), "avl lost {x}");
        assert!(multi2.contains(&x), "multiway lost {x}");
    }
    for &x in &absent {
        assert!(!bst.contains(&x), "bst invented {x}");
        assert!(!avl.contains(&x), "avl invented {x}");
        assert!(!multi2.contains(&x), "multiway invented {x}");
    }
}

#[test]
fn avl_height_stays_logarithmic_under_random_input() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut tree = AvlTree::new(natural);
    for _ in 0..1000 {
        tree.insert_data(rng.gen_range(0..1_000_000));
    }
    assert_eq!(tree.len(), 1000);
    // AVL height is below 1.45 * log2(n + 2); for n = 1000 that is < 15
    assert!(tree.height() <= 14, "height {} too deep", tree.height());
}

#[test]
fn comparator_is_honored_throughout() {
    // order by string length, ties by reversed lexicographic order
    let cmp = |a: &String, b: &String| {
        a.len().cmp(&b.len()).then_with(|| b.cmp(a))
    };

    let mut tree = AvlTree::new(cmp);
    for w in ["kiwi", "fig", "banana", "apple", "date", "plum", "pear"] {
        tree.insert_data(w.to_string());
    }

    assert!(tree.contains(&"fig".to_string()));
    assert!(tree.contains(&"banana".to_string()));
    assert!(!tree.contains(&"figs".to_string()));
}
