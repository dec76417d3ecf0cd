use serde::{Deserialize, Serialize};

/// Un tirage historique : identifiant (date), numéros tirés dans l'ordre, numéro bonus.
///
/// Les numéros sont gardés tels qu'ils apparaissent dans le fichier (jetons opaques).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRecord {
    pub id: String,
    pub numbers: Vec<String>,
    pub bonus: String,
}

impl DrawRecord {
    pub fn new(id: impl Into<String>, numbers: Vec<String>, bonus: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            numbers,
            bonus: bonus.into(),
        }
    }

    pub fn contains(&self, number: &str) -> bool {
        self.numbers.iter().any(|n| n == number)
    }

    /// Vrai si chaque numéro de `required` figure parmi les numéros tirés.
    pub fn contains_all<S: AsRef<str>>(&self, required: &[S]) -> bool {
        required.iter().all(|r| self.contains(r.as_ref()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub numbers: Vec<String>,
    pub bonus: String,
    /// La combinaison complète figure déjà dans l'historique.
    pub previously_drawn: bool,
}

impl Suggestion {
    pub fn numbers_joined(&self) -> String {
        self.numbers.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(numbers: &[&str]) -> DrawRecord {
        DrawRecord::new(
            "2023-01-07",
            numbers.iter().map(|n| n.to_string()).collect(),
            "9",
        )
    }

    #[test]
    fn test_contains_all() {
        let draw = record(&["1", "12", "23", "34"]);
        assert!(draw.contains_all(&["12", "34"]));
        assert!(!draw.contains_all(&["12", "35"]));
    }

    #[test]
    fn test_contains_all_empty_required() {
        let draw = record(&["1", "2"]);
        let required: [&str; 0] = [];
        assert!(draw.contains_all(&required));
    }

    #[test]
    fn test_bonus_not_a_drawn_number() {
        let draw = record(&["1", "2"]);
        assert!(!draw.contains("9"));
    }

    #[test]
    fn test_numbers_joined() {
        let sug = Suggestion {
            numbers: vec!["7".into(), "13".into(), "42".into()],
            bonus: "3".into(),
            previously_drawn: false,
        };
        assert_eq!(sug.numbers_joined(), "7, 13, 42");
    }
}
