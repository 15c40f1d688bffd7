use strkeydict::{EagerMap, Error, Key, LazyMap, NormalizingMap};

fn scenario_pairs() -> Vec<(Key, &'static str)> {
    vec![(Key::from(1), "one"), (Key::from("2"), "two")]
}

#[test]
fn eager_scenario_one() {
    let map = EagerMap::from_pairs(scenario_pairs());

    assert_eq!(map.get_item(&Key::from(1)), Ok(&"one"));
    assert_eq!(map.get_item(&Key::from("1")), Ok(&"one"));
    assert_eq!(map.get_item(&Key::from(2)), Ok(&"two"));
    assert!(map.contains(&Key::from(1)));
    assert!(map.contains(&Key::from(2)));
}

#[test]
fn lazy_scenario_one() {
    let map: LazyMap<&str> = scenario_pairs().into_iter().collect();

    assert_eq!(map.get_item(&Key::from(1)), Ok(&"one"));
    assert_eq!(map.get_item(&Key::from(2)), Ok(&"two"));
    assert!(map.contains(&Key::from(1)));
    assert!(map.contains(&Key::from(2)));
    // stored as Int(1), and a string lookup never retries
    assert_eq!(
        map.get_item(&Key::from("1")),
        Err(Error::KeyNotFound(Key::from("1")))
    );
}

#[test]
fn empty_map_scenario_two() {
    let eager: EagerMap<i32> = EagerMap::new();
    let lazy: LazyMap<i32> = LazyMap::new();
    let missing = Key::from("missing");

    assert_eq!(eager.get_item(&missing), Err(Error::KeyNotFound(missing.clone())));
    assert_eq!(lazy.get_item(&missing), Err(Error::KeyNotFound(missing.clone())));
    assert_eq!(*eager.get(&missing, &0), 0);
    assert_eq!(*lazy.get(&missing, &0), 0);
}

#[test]
fn round_trip_across_variants() {
    let keys = [Key::from(-5), Key::from("k"), Key::from(true), Key::from("")];

    let mut eager = EagerMap::new();
    let mut lazy = LazyMap::new();
    for (i, key) in keys.iter().enumerate() {
        eager.set_item(key.clone(), i);
        lazy.set_item(key.clone(), i);
        assert_eq!(eager.get_item(key), Ok(&i));
        assert_eq!(lazy.get_item(key), Ok(&i));
    }
}

#[test]
fn string_keys_are_found_in_both_variants() {
    let mut eager = EagerMap::new();
    let mut lazy = LazyMap::new();
    eager.set_item(Key::from("s"), 1);
    lazy.set_item(Key::from("s"), 1);

    assert!(eager.contains(&Key::from("s")));
    assert!(lazy.contains(&Key::from("s")));
    assert_eq!(eager.lookup(&Key::from("s")), Some(&1));
    assert_eq!(lazy.lookup(&Key::from("s")), Some(&1));
}

#[test]
fn trait_objects_share_the_contract() {
    let maps: Vec<Box<dyn NormalizingMap<u8>>> = vec![
        Box::new(EagerMap::from_pairs([("7", 7u8)])),
        Box::new(LazyMap::from_pairs([("7", 7u8)])),
    ];

    for map in &maps {
        assert_eq!(map.get_item(&Key::from(7)), Ok(&7));
        assert!(map.contains(&Key::from(7)));
        assert_eq!(map.len(), 1);
    }
}

#[test]
fn iteration_shows_stored_keys() {
    let eager = EagerMap::from_pairs([(1, 'a')]);
    let lazy = LazyMap::from_pairs([(1, 'a')]);

    let eager_keys: Vec<Key> = eager.iter().map(|(k, _)| k.clone()).collect();
    let lazy_keys: Vec<Key> = lazy.into_iter().map(|(k, _)| k).collect();

    assert_eq!(eager_keys, vec![Key::from("1")]);
    assert_eq!(lazy_keys, vec![Key::from(1)]);
    assert_eq!(eager.values().copied().collect::<Vec<_>>(), vec!['a']);
}
