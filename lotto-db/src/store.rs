use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Fichier annuel présent dans le répertoire de données.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearFile {
    pub year: i32,
    pub path: PathBuf,
}

pub fn default_data_dir() -> PathBuf {
    let mut path = std::env::current_dir().unwrap_or_default();
    path.push("data");
    path
}

pub fn year_file_name(prefix: &str, year: i32) -> String {
    format!("{prefix}-{year}.csv")
}

pub fn year_file_path(data_dir: &Path, prefix: &str, year: i32) -> PathBuf {
    data_dir.join(year_file_name(prefix, year))
}

pub fn ensure_data_dir(data_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Impossible de créer le répertoire {:?}", data_dir))
}

/// Écrit le contenu brut d'une année, en remplaçant le fichier existant.
pub fn save_year(data_dir: &Path, prefix: &str, year: i32, content: &str) -> Result<PathBuf> {
    ensure_data_dir(data_dir)?;
    let path = year_file_path(data_dir, prefix, year);
    std::fs::write(&path, content)
        .with_context(|| format!("Impossible d'écrire {:?}", path))?;
    Ok(path)
}

/// Liste les fichiers `.csv` du répertoire, triés par nom.
///
/// Un répertoire absent donne une liste vide.
pub fn list_data_files(data_dir: &Path) -> Result<Vec<PathBuf>> {
    if !data_dir.exists() {
        log::warn!("Répertoire de données absent : {}", data_dir.display());
        return Ok(Vec::new());
    }

    let entries = std::fs::read_dir(data_dir)
        .with_context(|| format!("Impossible de lire le répertoire {:?}", data_dir))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        let is_csv = path.extension().is_some_and(|ext| ext == "csv");
        if is_csv && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Fichiers annuels correspondant au préfixe, triés par année.
pub fn list_year_files(data_dir: &Path, prefix: &str) -> Result<Vec<YearFile>> {
    let mut years: Vec<YearFile> = list_data_files(data_dir)?
        .into_iter()
        .filter_map(|path| {
            let stem = path.file_stem()?.to_str()?;
            let year = stem.strip_prefix(prefix)?.strip_prefix('-')?.parse().ok()?;
            Some(YearFile { year, path })
        })
        .collect();
    years.sort_by_key(|f| f.year);
    Ok(years)
}
