use anyhow::Result;
use common::*;

use dynfilter::{CompileOptions, Direction, Filter, QueryCache};
use std::sync::Arc;
use std::thread;

#[test]
fn cached_artifacts_are_shared() -> Result<()> {
    let cache = QueryCache::default();
    let first = cache.filter::<Person>("name%a")?;
    let second = cache.filter::<Person>("name%a")?;
    assert!(Arc::ptr_eq(&first, &second));

    let order = cache.order::<Person>("name")?;
    let projection = cache.projection::<Person>("name")?;
    assert!(order.is_some() && projection.is_some());
    assert_eq!(cache.len(), 3);

    cache.clear();
    assert!(cache.is_empty());
    Ok(())
}

#[test]
fn cached_and_fresh_filters_agree() -> Result<()> {
    let cache = QueryCache::default();
    for text in ["name%a", "age>=27", "name%b,age>27", "name%%B", "address.street%street", "age=27,name%lu|fr"] {
        let cached = cache.filter::<Person>(text)?;
        let fresh = Filter::<Person>::compile(text)?;
        assert_eq!(cached.expression(), fresh.expression(), "{text}");
        assert_eq!(names(cached.apply(&roster())), names(fresh.apply(&roster())));
    }
    Ok(())
}

#[test]
fn cache_uses_its_options() -> Result<()> {
    let cache = QueryCache::new(CompileOptions::default().with_default_direction(Direction::Desc));
    let order = cache.order::<Person>("age")?;
    let order = Option::as_ref(&order).expect("order");
    assert_eq!(order.direction(), Direction::Desc);
    Ok(())
}

#[test]
fn concurrent_compiles() -> Result<()> {
    let cache = Arc::new(QueryCache::default());
    let people = Arc::new(roster());

    let handles: Vec<_> = ["name%a", "age>=27", "name%a", "age>=27", "name%b,age>27", "name%a"]
        .into_iter()
        .map(|text| {
            let cache = cache.clone();
            let people = people.clone();
            thread::spawn(move || -> Result<usize> { Ok(cache.filter::<Person>(text)?.apply(people.iter()).count()) })
        })
        .collect();

    let counts = handles.into_iter().map(|h| h.join().expect("thread panicked")).collect::<Result<Vec<_>>>()?;
    assert_eq!(counts, vec![2, 4, 2, 4, 1, 2]);
    assert_eq!(cache.len(), 3);
    Ok(())
}
