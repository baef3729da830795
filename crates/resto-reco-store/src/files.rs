use std::fs;
use std::path::{Path, PathBuf};

use resto_reco_core::AppConfig;

use crate::codec::{self, RecordError};
use crate::{Catalog, StoreError};

/// Locations of the resto and gusto data files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFiles {
    pub resto_path: PathBuf,
    pub gusto_path: PathBuf,
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Create `path` and its parent directory if either is missing.
fn ensure_file(path: &Path) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error(parent))?;
    }
    if !path.exists() {
        tracing::info!(path = %path.display(), "creating empty data file");
        fs::write(path, "").map_err(io_error(path))?;
    }
    Ok(())
}

/// Read the non-blank lines of `path` with their 1-based line numbers.
fn read_records(path: &Path) -> Result<Vec<(usize, String)>, StoreError> {
    ensure_file(path)?;
    let text = fs::read_to_string(path).map_err(io_error(path))?;
    Ok(text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| (index + 1, line.to_string()))
        .collect())
}

fn write_records(path: &Path, lines: &[String]) -> Result<(), StoreError> {
    ensure_file(path)?;
    let mut body = lines.join("\n");
    if !body.is_empty() {
        body.push('\n');
    }
    fs::write(path, body).map_err(io_error(path))
}

impl DataFiles {
    #[must_use]
    pub fn new(resto_path: impl Into<PathBuf>, gusto_path: impl Into<PathBuf>) -> Self {
        Self {
            resto_path: resto_path.into(),
            gusto_path: gusto_path.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.resto_path(), config.gusto_path())
    }

    fn parse_error(path: &Path, line: usize, source: RecordError) -> StoreError {
        StoreError::Parse {
            path: path.to_path_buf(),
            line,
            source,
        }
    }

    /// Load both files into a fresh [`Catalog`], creating any that are missing.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if a file cannot be created or read, and
    /// [`StoreError::Parse`] for the first malformed or duplicate record.
    pub fn load(&self) -> Result<Catalog, StoreError> {
        let mut catalog = Catalog::new();

        for (line, record) in read_records(&self.resto_path)? {
            let listing = codec::decode_resto(&record)
                .map_err(|e| Self::parse_error(&self.resto_path, line, e))?;
            match catalog.add_resto(listing) {
                Err(StoreError::DuplicateResto(name)) => {
                    return Err(Self::parse_error(
                        &self.resto_path,
                        line,
                        RecordError::Duplicate(name),
                    ));
                }
                other => other?,
            }
        }

        for (line, record) in read_records(&self.gusto_path)? {
            let profile = codec::decode_gusto(&record)
                .map_err(|e| Self::parse_error(&self.gusto_path, line, e))?;
            match catalog.add_gusto(profile) {
                Err(StoreError::DuplicateGusto(label)) => {
                    return Err(Self::parse_error(
                        &self.gusto_path,
                        line,
                        RecordError::Duplicate(label),
                    ));
                }
                other => other?,
            }
        }

        tracing::info!(
            restos = catalog.restos().len(),
            gustos = catalog.gustos().len(),
            "data files loaded"
        );
        Ok(catalog)
    }

    /// Rewrite the resto file from `catalog`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be written.
    pub fn save_restos(&self, catalog: &Catalog) -> Result<(), StoreError> {
        let lines: Vec<String> = catalog.restos().values().map(codec::encode_resto).collect();
        write_records(&self.resto_path, &lines)?;
        tracing::debug!(path = %self.resto_path.display(), count = lines.len(), "restos saved");
        Ok(())
    }

    /// Rewrite the gusto file from `catalog`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be written.
    pub fn save_gustos(&self, catalog: &Catalog) -> Result<(), StoreError> {
        let lines = catalog
            .gustos()
            .values()
            .map(codec::encode_gusto)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| StoreError::UnlabeledGusto)?;
        write_records(&self.gusto_path, &lines)?;
        tracing::debug!(path = %self.gusto_path.display(), count = lines.len(), "gustos saved");
        Ok(())
    }

    /// # Errors
    ///
    /// See [`DataFiles::save_restos`] and [`DataFiles::save_gustos`].
    pub fn save(&self, catalog: &Catalog) -> Result<(), StoreError> {
        self.save_restos(catalog)?;
        self.save_gustos(catalog)
    }
}
