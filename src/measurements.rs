use crate::error::Result;
use serde::Deserialize;
use std::collections::BTreeMap;

/// One page of measurement records, newest first
#[derive(Debug, Clone, Deserialize)]
pub struct MeasurementPage {
    #[serde(default)]
    pub results: Vec<MeasurementRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MeasurementRecord {
    #[serde(default)]
    pub measurements: BTreeMap<String, f64>,
}

/// Measurement values grouped by name, each series ordered with the latest value last
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementSeries {
    series: BTreeMap<String, Vec<f64>>,
}

impl MeasurementSeries {
    pub fn from_page(page: &MeasurementPage) -> Self {
        let mut series: BTreeMap<String, Vec<f64>> = BTreeMap::new();
        for record in &page.results {
            for (name, &value) in &record.measurements {
                series.entry(name.clone()).or_default().push(value);
            }
        }
        // The page is newest first
        for values in series.values_mut() {
            values.reverse();
        }
        MeasurementSeries { series }
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let page: MeasurementPage = serde_json::from_str(raw)?;
        let series = MeasurementSeries::from_page(&page);
        tracing::debug!(
            records = page.results.len(),
            names = series.series.len(),
            "pivoted measurement page"
        );
        Ok(series)
    }

    pub fn series(&self, name: &str) -> Option<&[f64]> {
        self.series.get(name).map(Vec::as_slice)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
