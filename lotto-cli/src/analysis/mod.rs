pub mod companions;
pub mod history;
pub mod suggest;

use std::collections::HashMap;

use crate::error::SuggestError;
use lotto_db::models::DrawRecord;

/// Table de fréquences qui conserve l'ordre de première apparition.
///
/// L'ordre d'insertion sert de critère de départage : à égalité, la valeur vue
/// en premier l'emporte.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: Vec<(String, u32)>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: &str) {
        match self.index.get(value) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(value.to_string(), self.entries.len());
                self.entries.push((value.to_string(), 1));
            }
        }
    }

    pub fn count(&self, value: &str) -> u32 {
        self.index.get(value).map(|&i| self.entries[i].1).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> u32 {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// Valeur la plus fréquente, la première rencontrée en cas d'égalité.
    pub fn most_common(&self) -> Option<(&str, u32)> {
        let mut best: Option<(&str, u32)> = None;
        for (value, count) in &self.entries {
            if best.is_none_or(|(_, c)| *count > c) {
                best = Some((value.as_str(), *count));
            }
        }
        best
    }

    /// Les `n` valeurs les plus fréquentes, égalités dans l'ordre d'apparition.
    pub fn ranked(&self, n: usize) -> Vec<(&str, u32)> {
        let mut sorted: Vec<(&str, u32)> = self
            .entries
            .iter()
            .map(|(v, c)| (v.as_str(), *c))
            .collect();
        // sort_by est stable : l'ordre d'apparition départage les égalités
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted.truncate(n);
        sorted
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        for value in iter {
            table.add(value.as_ref());
        }
        table
    }
}

/// Valeur la plus fréquente de `items`. `population` nomme ce qui est compté
/// dans le journal et dans l'erreur si `items` est vide.
pub fn most_common<S: AsRef<str>>(items: &[S], population: &str) -> Result<String, SuggestError> {
    let table: FrequencyTable = items.iter().map(|s| s.as_ref()).collect();
    let (value, count) = table
        .most_common()
        .ok_or_else(|| SuggestError::empty(population))?;
    log::debug!("Le {population} le plus fréquent est : {value} ({count} fois)");
    Ok(value.to_string())
}

/// Tables de fréquences des numéros tirés et des numéros bonus sur tout l'historique.
pub fn compute_frequencies(draws: &[DrawRecord]) -> (FrequencyTable, FrequencyTable) {
    let mut numbers = FrequencyTable::new();
    let mut bonus = FrequencyTable::new();
    for draw in draws {
        for n in &draw.numbers {
            numbers.add(n);
        }
        bonus.add(&draw.bonus);
    }
    (numbers, bonus)
}
