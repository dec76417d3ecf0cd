use lotto_db::models::DrawRecord;

/// Vrai si un tirage de l'historique contient tous les numéros de `candidate`.
pub fn combination_exists<S: AsRef<str>>(candidate: &[S], draws: &[DrawRecord]) -> bool {
    match draws.iter().find(|d| d.contains_all(candidate)) {
        Some(draw) => {
            log::debug!(
                "Combinaison {:?} trouvée dans le tirage {}",
                candidate.iter().map(|c| c.as_ref()).collect::<Vec<_>>(),
                draw.id
            );
            true
        }
        None => false,
    }
}
