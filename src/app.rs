// src/app.rs

use std::{
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing::{error, info, warn};

use crate::export::export_csv;
use crate::fetch::DataProvider;
use crate::format::format_population;
use crate::model::Dataset;
use crate::normalize::normalized;
use crate::select::{find_by_value, project, SelectOption};

/// Owns the dataset and the current dropdown selection.
///
/// The dataset is only ever replaced as a whole, so a snapshot taken with
/// [`App::dataset`] stays consistent for as long as the caller holds it.
#[derive(Debug, Default)]
pub struct App {
    dataset: Option<Arc<Dataset>>,
    selected: Option<SelectOption>,
}

/// What the info panel shows for the selected state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoPanel {
    pub name: String,
    pub population: String,
    pub year: String,
}

impl fmt::Display for InfoPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Population: {}", self.population)?;
        write!(f, "Info Year: {}", self.year)
    }
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch once and publish the normalized dataset.
    ///
    /// Failures are logged and leave the dataset as it was.
    pub async fn load<P: DataProvider + ?Sized>(&mut self, provider: &P) {
        match provider.fetch().await {
            Ok(Some(records)) => {
                let dataset = Dataset::new(normalized(records));
                info!(
                    records = dataset.len(),
                    fetched_at = %dataset.fetched_at,
                    "dataset loaded"
                );
                self.dataset = Some(Arc::new(dataset));
                self.selected = None;
            }
            Ok(None) => warn!("response had no data; skipping"),
            Err(e) => error!(error = %format!("{:#}", e), "fetch failed"),
        }
    }

    pub fn dataset(&self) -> Option<Arc<Dataset>> {
        self.dataset.clone()
    }

    /// Dropdown options, derived fresh from the current dataset.
    pub fn options(&self) -> Vec<SelectOption> {
        self.dataset
            .as_deref()
            .map(|ds| project(&ds.records))
            .unwrap_or_default()
    }

    /// Select the option whose value is `value`. An unknown value clears the selection.
    pub fn select(&mut self, value: &str) -> Option<&SelectOption> {
        let options = self.options();
        self.selected = find_by_value(&options, value).cloned();
        if self.selected.is_none() {
            warn!(value, "no option with that value");
        }
        self.selected.as_ref()
    }

    pub fn selected(&self) -> Option<&SelectOption> {
        self.selected.as_ref()
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn info_panel(&self) -> Option<InfoPanel> {
        self.selected.as_ref().map(|opt| InfoPanel {
            name: opt.record.state.clone(),
            population: format_population(opt.record.population),
            year: opt.record.year.clone(),
        })
    }

    /// Export the stored dataset to `dir/export.csv`.
    ///
    /// Returns `None` when there is nothing to export or the write failed;
    /// either way the failure is only logged.
    pub fn export(&self, dir: &Path) -> Option<PathBuf> {
        let Some(ds) = self.dataset.as_deref() else {
            warn!("no dataset loaded; nothing to export");
            return None;
        };
        match export_csv(&ds.records, dir) {
            Ok(path) => Some(path),
            Err(e) => {
                error!(error = %format!("{:#}", e), "export failed");
                None
            }
        }
    }
}
