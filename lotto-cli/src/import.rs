use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::error::{FileParseError, ParseErrorKind};
use lotto_db::models::DrawRecord;
use lotto_db::store::list_data_files;

/// Transforme une ligne `id;n1;...;nN;bonus` en tirage.
fn parse_record(record: &csv::StringRecord, line: u64) -> Result<DrawRecord, ParseErrorKind> {
    let fields: Vec<&str> = record.iter().collect();
    match fields.as_slice() {
        [id, numbers @ .., bonus] if !numbers.is_empty() => Ok(DrawRecord::new(
            *id,
            numbers.iter().map(|n| n.to_string()).collect(),
            *bonus,
        )),
        _ => Err(ParseErrorKind::TooFewFields {
            line,
            fields: fields.len(),
        }),
    }
}

/// Lit un fichier annuel complet. La première erreur fait échouer tout le fichier.
pub fn read_draw_file(path: &Path, delimiter: u8) -> Result<Vec<DrawRecord>, FileParseError> {
    let fail = |kind| FileParseError {
        path: path.to_path_buf(),
        kind,
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| fail(ParseErrorKind::Open(e)))?;

    let mut draws = Vec::new();
    for (i, record_result) in reader.records().enumerate() {
        let record = record_result.map_err(|source| {
            let line = source
                .position()
                .map(|p| p.line())
                .unwrap_or(i as u64 + 2);
            fail(ParseErrorKind::Csv { line, source })
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or(i as u64 + 2);
        draws.push(parse_record(&record, line).map_err(fail)?);
    }
    Ok(draws)
}

#[derive(Debug, Default)]
pub struct History {
    pub draws: Vec<DrawRecord>,
    pub files_read: Vec<PathBuf>,
    pub files_skipped: Vec<PathBuf>,
}

/// Charge tous les fichiers `.csv` du répertoire, dans l'ordre des noms.
///
/// Un fichier illisible est journalisé et ignoré sans interrompre le chargement.
pub fn load_history(data_dir: &Path, delimiter: u8) -> Result<History> {
    let mut history = History::default();

    for path in list_data_files(data_dir)? {
        match read_draw_file(&path, delimiter) {
            Ok(draws) => {
                log::debug!("{} : {} tirages", path.display(), draws.len());
                history.draws.extend(draws);
                history.files_read.push(path);
            }
            Err(e) => {
                log::error!("{e}");
                history.files_skipped.push(path);
            }
        }
    }

    log::info!(
        "{} tirages chargés depuis {} fichier(s), {} ignoré(s)",
        history.draws.len(),
        history.files_read.len(),
        history.files_skipped.len()
    );
    Ok(history)
}
