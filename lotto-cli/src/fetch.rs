use std::ops::RangeInclusive;
use std::path::Path;
use std::time::Duration;

use anyhow::Result;

use crate::error::FetchError;
use lotto_db::store::{save_year, year_file_path};

/// Source des résultats annuels bruts.
pub trait YearSource {
    fn fetch_year(&self, year: i32) -> Result<String, FetchError>;
}

pub struct HttpSource {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn year_url(&self, year: i32) -> String {
        format!("{}-{}.csv", self.base_url, year)
    }
}

impl YearSource for HttpSource {
    fn fetch_year(&self, year: i32) -> Result<String, FetchError> {
        let url = self.year_url(year);
        log::debug!("Téléchargement de {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|source| FetchError::Http { year, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                year,
                status: status.as_u16(),
                url,
            });
        }

        response
            .text()
            .map_err(|source| FetchError::Http { year, source })
    }
}

#[derive(Debug, Default)]
pub struct SyncReport {
    pub fetched: Vec<i32>,
    pub cached: Vec<i32>,
    pub failed: Vec<i32>,
}

/// Télécharge chaque année manquante dans le répertoire de données.
///
/// Une année passée déjà présente n'est pas retéléchargée ; l'année en cours
/// l'est toujours. Un échec est journalisé et laisse le fichier absent ou
/// inchangé.
pub fn sync_years(
    source: &impl YearSource,
    data_dir: &Path,
    prefix: &str,
    years: RangeInclusive<i32>,
    current_year: i32,
) -> SyncReport {
    let mut report = SyncReport::default();

    for year in years {
        let path = year_file_path(data_dir, prefix, year);
        if path.exists() && year != current_year {
            log::debug!("{year} ignorée : données déjà présentes");
            report.cached.push(year);
            continue;
        }

        let saved = source.fetch_year(year).and_then(|content| {
            save_year(data_dir, prefix, year, &content)
                .map_err(|e| FetchError::Save { year, source: e })
        });

        match saved {
            Ok(path) => {
                log::debug!("{year} enregistrée dans {}", path.display());
                report.fetched.push(year);
            }
            Err(e) => {
                log::error!("{e}");
                log::warn!("Échec de récupération pour {year}");
                report.failed.push(year);
            }
        }
    }

    log::info!(
        "Synchronisation : {} téléchargée(s), {} en cache, {} échec(s)",
        report.fetched.len(),
        report.cached.len(),
        report.failed.len()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeSource {
        failing: Vec<i32>,
        calls: RefCell<Vec<i32>>,
    }

    impl FakeSource {
        fn new(failing: &[i32]) -> Self {
            Self {
                failing: failing.to_vec(),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl YearSource for FakeSource {
        fn fetch_year(&self, year: i32) -> Result<String, FetchError> {
            self.calls.borrow_mut().push(year);
            if self.failing.contains(&year) {
                return Err(FetchError::Status {
                    year,
                    status: 404,
                    url: format!("fake-{year}.csv"),
                });
            }
            Ok(format!("Datum;1;2;Bonus\n{year}-01-01;1;2;3\n"))
        }
    }

    #[test]
    fn test_sync_downloads_missing_years() {
        let dir = tempfile::tempdir().unwrap();
        let source = FakeSource::new(&[]);

        let report = sync_years(&source, dir.path(), "lotto", 2001..=2003, 2026);
        assert_eq!(report.fetched, vec![2001, 2002, 2003]);
        assert!(dir.path().join("lotto-2002.csv").exists());
    }

    #[test]
    fn test_sync_skips_existing_past_year() {
        let dir = tempfile::tempdir().unwrap();
        save_year(dir.path(), "lotto", 2001, "ancien").unwrap();
        let source = FakeSource::new(&[]);

        let report = sync_years(&source, dir.path(), "lotto", 2001..=2002, 2026);
        assert_eq!(report.cached, vec![2001]);
        assert_eq!(report.fetched, vec![2002]);
        assert_eq!(*source.calls.borrow(), vec![2002]);
        let kept = std::fs::read_to_string(dir.path().join("lotto-2001.csv")).unwrap();
        assert_eq!(kept, "ancien");
    }

    #[test]
    fn test_sync_refreshes_current_year() {
        let dir = tempfile::tempdir().unwrap();
        save_year(dir.path(), "lotto", 2026, "ancien").unwrap();
        let source = FakeSource::new(&[]);

        let report = sync_years(&source, dir.path(), "lotto", 2026..=2026, 2026);
        assert_eq!(report.fetched, vec![2026]);
        let refreshed = std::fs::read_to_string(dir.path().join("lotto-2026.csv")).unwrap();
        assert!(refreshed.starts_with("Datum"));
    }

    #[test]
    fn test_sync_failure_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let source = FakeSource::new(&[2002]);

        let report = sync_years(&source, dir.path(), "lotto", 2001..=2003, 2026);
        assert_eq!(report.failed, vec![2002]);
        assert_eq!(report.fetched, vec![2001, 2003]);
        assert!(!dir.path().join("lotto-2002.csv").exists());
    }

    #[test]
    fn test_failed_current_year_keeps_stale_file() {
        let dir = tempfile::tempdir().unwrap();
        save_year(dir.path(), "lotto", 2026, "ancien").unwrap();
        let source = FakeSource::new(&[2026]);

        let report = sync_years(&source, dir.path(), "lotto", 2026..=2026, 2026);
        assert_eq!(report.failed, vec![2026]);
        let kept = std::fs::read_to_string(dir.path().join("lotto-2026.csv")).unwrap();
        assert_eq!(kept, "ancien");
    }

    #[test]
    fn test_year_url() {
        let source = HttpSource::new("https://example.org/lotto-gamedata-NL/", 5).unwrap();
        assert_eq!(
            source.year_url(2004),
            "https://example.org/lotto-gamedata-NL-2004.csv"
        );
    }
}
