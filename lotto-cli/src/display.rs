use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};

use crate::analysis::FrequencyTable;
use crate::fetch::SyncReport;
use crate::import::History;
use lotto_db::models::Suggestion;
use lotto_db::store::YearFile;

pub fn display_sync_summary(report: &SyncReport) {
    println!("Synchronisation terminée :");
    println!("  Téléchargées      : {}", report.fetched.len());
    println!("  Déjà présentes    : {}", report.cached.len());
    if !report.failed.is_empty() {
        let years = report
            .failed
            .iter()
            .map(|y| y.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!("  Échecs            : {} ({years})", report.failed.len());
    }
}

pub fn display_history_summary(history: &History) {
    println!(
        "{} tirages lus dans {} fichier(s)",
        history.draws.len(),
        history.files_read.len()
    );
    for path in &history.files_skipped {
        println!("  Ignoré : {}", path.display());
    }
}

pub fn display_year_files(files: &[YearFile]) {
    if files.is_empty() {
        println!("Aucun fichier annuel. Lancez d'abord : lotto fetch");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Année", "Fichier"]);

    for file in files {
        table.add_row(vec![file.year.to_string(), file.path.display().to_string()]);
    }
    println!("{table}");
}

pub fn display_frequencies(numbers: &FrequencyTable, bonus: &FrequencyTable, top: usize) {
    println!("\n📊 Fréquences sur l'historique\n");

    println!("── Numéros ({} valeurs, {} tirés) ──", numbers.len(), numbers.total());
    display_frequency_table(numbers, top);

    println!("\n── Numéros bonus ({} valeurs) ──", bonus.len());
    display_frequency_table(bonus, top);
}

fn display_frequency_table(freq: &FrequencyTable, top: usize) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Rang", "Numéro", "Fréquence", "Part"]);

    let total = freq.total().max(1) as f64;
    for (rank, (value, count)) in freq.ranked(top).into_iter().enumerate() {
        let color = if rank == 0 { Color::Green } else { Color::White };
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(value).fg(color),
            Cell::new(count),
            Cell::new(format!("{:.2} %", 100.0 * count as f64 / total)),
        ]);
    }
    println!("{table}");
}

pub fn format_suggestion(sug: &Suggestion) -> String {
    format!(
        "Numéros suggérés : {}\nNuméro bonus suggéré : {}",
        sug.numbers_joined(),
        sug.bonus
    )
}

pub fn display_suggestion(sug: &Suggestion) {
    println!("\n🎲 {}", format_suggestion(sug));
    if sug.previously_drawn {
        println!("⚠ Cette combinaison a déjà été tirée (aucune alternative proposée).");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_suggestion() {
        let sug = Suggestion {
            numbers: vec!["1".into(), "19".into(), "31".into()],
            bonus: "8".into(),
            previously_drawn: false,
        };
        assert_eq!(
            format_suggestion(&sug),
            "Numéros suggérés : 1, 19, 31\nNuméro bonus suggéré : 8"
        );
    }
}
