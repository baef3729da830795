use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding both data files.
    pub data_dir: PathBuf,
    pub resto_file: String,
    pub gusto_file: String,
    pub log_level: String,
    /// Where listing distances are measured from, for display.
    pub reference_point: String,
}

impl AppConfig {
    #[must_use]
    pub fn resto_path(&self) -> PathBuf {
        self.data_dir.join(&self.resto_file)
    }

    #[must_use]
    pub fn gusto_path(&self) -> PathBuf {
        self.data_dir.join(&self.gusto_file)
    }

    /// Replace the data directory, keeping the file names.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }
}
