use crate::Exercise;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExerciseFilter {
    pub name: String,
}

impl ExerciseFilter {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// Exercises whose name contains the filter name, ignoring case. The order is preserved.
    #[must_use]
    pub fn exercises<'a>(
        &self,
        exercises: impl IntoIterator<Item = &'a Exercise>,
    ) -> Vec<&'a Exercise> {
        let name = self.name.to_lowercase();
        exercises
            .into_iter()
            .filter(|e| e.name.to_lowercase().contains(&name))
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

#[must_use]
pub fn filter<'a>(exercises: &'a [Exercise], query: &str) -> Vec<&'a Exercise> {
    ExerciseFilter::new(query).exercises(exercises)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::store::tests::exercise;

    use super::*;

    fn catalog() -> Vec<Exercise> {
        vec![
            exercise("0001", "3/4 Sit-Up"),
            exercise("0002", "Squat"),
            exercise("0003", "Barbell Front Squat"),
            exercise("0004", "Decline Sit-Up"),
        ]
    }

    fn ids(exercises: &[&Exercise]) -> Vec<String> {
        exercises.iter().map(|e| e.id.to_string()).collect()
    }

    #[test]
    fn test_filter_empty_query() {
        let catalog = catalog();

        assert_eq!(
            filter(&catalog, ""),
            catalog.iter().collect::<Vec<_>>()
        );
    }

    #[rstest]
    #[case::lower_case("sit", &["0001", "0004"])]
    #[case::upper_case("SIT", &["0001", "0004"])]
    #[case::order_preserved("squat", &["0002", "0003"])]
    #[case::infix("ll front", &["0003"])]
    #[case::no_match("bench", &[])]
    #[case::whitespace_not_trimmed(" squat", &["0003"])]
    fn test_filter(#[case] query: &str, #[case] expected: &[&str]) {
        let catalog = catalog();

        assert_eq!(ids(&filter(&catalog, query)), expected);
    }

    #[test]
    fn test_filter_sit_up_and_squat() {
        let catalog = vec![exercise("0001", "3/4 Sit-Up"), exercise("0002", "Squat")];

        assert_eq!(filter(&catalog, "sit"), vec![&catalog[0]]);
    }

    #[test]
    fn test_filter_results_contain_query() {
        let catalog = catalog();

        for query in ["s", "Up", "at", "3/4", "-"] {
            for e in filter(&catalog, query) {
                assert!(e.name.to_lowercase().contains(&query.to_lowercase()));
            }
        }
    }

    #[test]
    fn test_exercise_filter_is_empty() {
        assert!(ExerciseFilter::default().is_empty());
        assert!(!ExerciseFilter::new("sit").is_empty());
    }
}
