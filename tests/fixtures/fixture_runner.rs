use urlsync::{MemoryHistory, NavigationContext, QueryMap, RouteLocation, set_query_params};

use super::fixture_loader::{FixtureFailure, FixtureResult, SyncCase, load};

const SET_QUERY_PARAMS: &str = include_str!("set_query_params.json");

fn run_case(case: &SyncCase) -> String {
    let mut history = MemoryHistory::new(&case.start);
    let mut location = RouteLocation::from_url(&case.start);
    if let Some(search) = &case.location_search {
        location.search.clone_from(search);
    }

    let updates: QueryMap = case
        .updates
        .iter()
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect();
    set_query_params(&updates, &location, &mut history).unwrap();

    assert_eq!(history.len(), 2, "{}: expected exactly one push", case.name);
    history.search().to_string()
}

fn run_all(cases: &[SyncCase]) -> FixtureResult {
    let mut result = FixtureResult::default();
    for case in cases {
        let actual = run_case(case);
        if actual == case.expected {
            result.passed += 1;
        } else {
            result.failures.push(FixtureFailure {
                name: case.name.clone(),
                expected: case.expected.clone(),
                actual,
            });
        }
    }
    result
}

#[test]
fn test_set_query_params_fixtures() {
    let cases = load(SET_QUERY_PARAMS);
    assert!(!cases.is_empty());

    let result = run_all(&cases);
    for failure in &result.failures {
        eprintln!(
            "{}: expected {:?}, got {:?}",
            failure.name, failure.expected, failure.actual
        );
    }
    assert!(result.failures.is_empty(), "{}", result.summary());
    assert_eq!(result.passed, cases.len());
}
