use std::path::PathBuf;

use thiserror::Error;

/// Échec de récupération d'une année. Jamais fatal : l'année est simplement absente.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("requête HTTP échouée pour {year}: {source}")]
    Http {
        year: i32,
        #[source]
        source: reqwest::Error,
    },

    #[error("statut HTTP {status} pour {year} ({url})")]
    Status { year: i32, status: u16, url: String },

    #[error("impossible d'enregistrer l'année {year}: {source}")]
    Save {
        year: i32,
        #[source]
        source: anyhow::Error,
    },
}

#[derive(Debug, Error)]
pub enum ParseErrorKind {
    #[error("ouverture impossible: {0}")]
    Open(#[source] csv::Error),

    #[error("lecture CSV ligne {line}: {source}")]
    Csv {
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("ligne {line} malformée : {fields} champ(s), au moins 3 attendus")]
    TooFewFields { line: u64, fields: usize },
}

/// Échec de lecture d'un fichier : le fichier entier est ignoré.
#[derive(Debug, Error)]
#[error("erreur de traitement du fichier {}: {kind}", .path.display())]
pub struct FileParseError {
    pub path: PathBuf,
    #[source]
    pub kind: ParseErrorKind,
}

#[derive(Debug, Error)]
pub enum SuggestError {
    #[error("aucune donnée pour déterminer le {population} le plus fréquent")]
    EmptyPopulation { population: String },

    #[error("la combinaison {} (bonus {bonus}) a déjà été tirée", .numbers.join(", "))]
    AlreadyDrawn { numbers: Vec<String>, bonus: String },

    #[error("le nombre de numéros à suggérer doit être au moins 1")]
    InvalidPicks,
}

impl SuggestError {
    pub fn empty(population: impl Into<String>) -> Self {
        SuggestError::EmptyPopulation {
            population: population.into(),
        }
    }
}
