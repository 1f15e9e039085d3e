/// Loader for the JSON synchronizer fixtures
///
/// A fixture file is an array mixing comment strings and test cases.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum Fixture {
    /// A synchronizer test case
    Case(SyncCase),
    /// A comment line (string)
    #[allow(dead_code)]
    Comment(String),
}

#[derive(Debug, Deserialize, Clone)]
pub struct SyncCase {
    pub name: String,
    /// Starting URL of the history, e.g. `/men?page=1`
    pub start: String,
    /// Search of the route location; defaults to the search of `start`
    #[serde(default)]
    pub location_search: Option<String>,
    pub updates: Vec<(String, String)>,
    pub expected: String,
}

#[derive(Debug, Clone)]
pub struct FixtureFailure {
    pub name: String,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Clone, Default)]
pub struct FixtureResult {
    pub passed: usize,
    pub failures: Vec<FixtureFailure>,
}

impl FixtureResult {
    pub fn summary(&self) -> String {
        format!(
            "Passed: {}, Failed: {}",
            self.passed,
            self.failures.len()
        )
    }
}

pub fn load(json: &str) -> Vec<SyncCase> {
    let fixtures: Vec<Fixture> = serde_json::from_str(json).unwrap();
    fixtures
        .into_iter()
        .filter_map(|fixture| match fixture {
            Fixture::Case(case) => Some(case),
            Fixture::Comment(_) => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_skips_comments() {
        let cases = load(
            r#"["a comment", {"name": "n", "start": "/", "updates": [["a", "1"]], "expected": "?a=1"}]"#,
        );
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].location_search, None);
        assert_eq!(cases[0].updates, vec![("a".to_string(), "1".to_string())]);
    }
}
