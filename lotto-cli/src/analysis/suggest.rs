use lotto_db::models::{DrawRecord, Suggestion};

use crate::analysis::companions::companion_candidates;
use crate::analysis::history::combination_exists;
use crate::analysis::most_common;
use crate::error::SuggestError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestOptions {
    /// Nombre total de numéros dans la combinaison.
    pub picks: usize,
    /// Échoue plutôt que de proposer une combinaison déjà tirée.
    pub reject_drawn: bool,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        Self {
            picks: 6,
            reject_drawn: false,
        }
    }
}

/// Construit la combinaison suggérée à partir de l'historique.
///
/// Le premier numéro est le plus fréquent de tout l'historique. Chaque numéro
/// suivant est le plus fréquent parmi ceux tirés avec tous les numéros déjà
/// retenus. Le bonus est le numéro bonus le plus fréquent, indépendamment de la
/// combinaison.
pub fn suggest(draws: &[DrawRecord], options: SuggestOptions) -> Result<Suggestion, SuggestError> {
    if options.picks == 0 {
        return Err(SuggestError::InvalidPicks);
    }

    let all_numbers: Vec<&str> = draws
        .iter()
        .flat_map(|d| d.numbers.iter().map(String::as_str))
        .collect();
    let all_bonus: Vec<&str> = draws.iter().map(|d| d.bonus.as_str()).collect();

    let mut numbers = vec![most_common(&all_numbers, "numéro")?];
    let bonus = most_common(&all_bonus, "numéro bonus")?;

    for _ in 1..options.picks {
        let candidates = companion_candidates(draws, &numbers);
        let population = format!("numéro associé à [{}]", numbers.join(", "));
        let next = most_common(&candidates, &population)?;
        numbers.push(next);
    }

    let previously_drawn = combination_exists(&numbers, draws);
    if previously_drawn {
        if options.reject_drawn {
            return Err(SuggestError::AlreadyDrawn { numbers, bonus });
        }
        // Aucune règle de remplacement : on signale sans proposer d'alternative.
        log::warn!("La combinaison {} a déjà été tirée", numbers.join(", "));
    } else {
        log::info!("La combinaison {} n'a jamais été tirée", numbers.join(", "));
    }

    Ok(Suggestion {
        numbers,
        bonus,
        previously_drawn,
    })
}
