use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::analysis::suggest::SuggestOptions;

pub const DEFAULT_BASE_URL: &str =
    "https://prdlnboppreportsst.blob.core.windows.net/legal-reports/lotto-gamedata-NL";
pub const DEFAULT_FILE_PREFIX: &str = "lotto-gamedata-NL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LottoConfig {
    /// URL de base, l'année est ajoutée sous la forme `-AAAA.csv`.
    pub base_url: String,
    pub file_prefix: String,
    pub data_dir: PathBuf,
    pub first_year: i32,
    pub last_year: i32,
    pub delimiter: char,
    pub picks: usize,
    pub reject_drawn: bool,
    pub log_level: String,
    pub timeout_secs: u64,
}

impl Default for LottoConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            data_dir: lotto_db::store::default_data_dir(),
            first_year: 2000,
            last_year: 2023,
            delimiter: ';',
            picks: 6,
            reject_drawn: false,
            log_level: "info".to_string(),
            timeout_secs: 30,
        }
    }
}

impl LottoConfig {
    /// Charge la configuration depuis un fichier JSON. Les champs absents gardent
    /// leur valeur par défaut.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Impossible de lire la configuration {:?}", path))?;
        let config: LottoConfig = serde_json::from_str(&json)
            .with_context(|| format!("Configuration invalide {:?}", path))?;
        Ok(config)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.first_year > self.last_year {
            bail!(
                "Première année {} postérieure à la dernière {}",
                self.first_year,
                self.last_year
            );
        }
        if self.picks == 0 {
            bail!("Le nombre de numéros à suggérer doit être au moins 1");
        }
        if !self.delimiter.is_ascii() {
            bail!("Séparateur non ASCII : {:?}", self.delimiter);
        }
        Ok(())
    }

    pub fn delimiter_byte(&self) -> u8 {
        // validate() garantit un caractère ASCII
        self.delimiter as u8
    }

    pub fn years(&self) -> std::ops::RangeInclusive<i32> {
        self.first_year..=self.last_year
    }

    pub fn suggest_options(&self) -> SuggestOptions {
        SuggestOptions {
            picks: self.picks,
            reject_drawn: self.reject_drawn,
        }
    }
}
