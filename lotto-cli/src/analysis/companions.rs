use lotto_db::models::DrawRecord;

/// Numéros tirés aux côtés de tous les numéros de `required`.
///
/// Pour chaque tirage contenant l'ensemble de `required`, ajoute ses autres
/// numéros au résultat. Les doublons entre tirages sont conservés : ce sont eux
/// qui donnent le poids de chaque numéro. Aucun tirage correspondant donne un
/// résultat vide.
pub fn companion_candidates<S: AsRef<str>>(draws: &[DrawRecord], required: &[S]) -> Vec<String> {
    let is_required = |n: &str| required.iter().any(|r| r.as_ref() == n);

    let mut candidates = Vec::new();
    let mut matching = 0usize;
    for draw in draws.iter().filter(|d| d.contains_all(required)) {
        matching += 1;
        candidates.extend(draw.numbers.iter().filter(|n| !is_required(n)).cloned());
    }

    log::debug!(
        "{matching} tirage(s) contiennent {:?}, {} numéros associés",
        required.iter().map(|r| r.as_ref()).collect::<Vec<_>>(),
        candidates.len()
    );
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::most_common;
    use crate::error::SuggestError;

    fn draws() -> Vec<DrawRecord> {
        [
            ("1", ["A", "B", "C"], "X"),
            ("2", ["A", "D", "C"], "Y"),
            ("3", ["A", "B", "E"], "X"),
        ]
        .iter()
        .map(|(id, nums, bonus)| {
            DrawRecord::new(*id, nums.iter().map(|n| n.to_string()).collect(), *bonus)
        })
        .collect()
    }

    #[test]
    fn test_companions_of_single_number() {
        let candidates = companion_candidates(&draws(), &["A"]);
        assert_eq!(candidates, vec!["B", "C", "D", "C", "B", "E"]);
    }

    #[test]
    fn test_companion_tie_resolves_to_first_seen() {
        let candidates = companion_candidates(&draws(), &["A"]);
        assert_eq!(most_common(&candidates, "numéro associé").unwrap(), "B");
    }

    #[test]
    fn test_only_matching_rows_contribute() {
        let candidates = companion_candidates(&draws(), &["A", "C"]);
        assert_eq!(candidates, vec!["B", "D"]);
    }

    #[test]
    fn test_never_returns_required_numbers() {
        let draws = draws();
        let required_sets: [&[&str]; 4] = [&["A"], &["B"], &["A", "B"], &["C", "A"]];
        for required in required_sets {
            let candidates = companion_candidates(&draws, required);
            assert!(
                candidates.iter().all(|c| !required.contains(&c.as_str())),
                "{required:?} -> {candidates:?}"
            );
        }
    }

    #[test]
    fn test_bonus_does_not_satisfy_requirement() {
        assert!(companion_candidates(&draws(), &["X"]).is_empty());
    }

    #[test]
    fn test_no_match_is_empty_population() {
        let candidates = companion_candidates(&draws(), &["A", "B", "Z"]);
        assert!(candidates.is_empty());
        assert!(matches!(
            most_common(&candidates, "numéro associé"),
            Err(SuggestError::EmptyPopulation { .. })
        ));
    }
}
