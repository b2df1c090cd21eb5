use crate::error::Result;
use serde::Deserialize;

#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

/// One page of location records, newest first
#[derive(Debug, Clone, Deserialize)]
pub struct LocationPage {
    #[serde(default)]
    pub results: Vec<LocationRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub asset_name: Option<String>,
}

/// A location history in chronological order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Track {
    points: Vec<LatLng>,
    labels: Vec<Option<String>>,
}

impl Track {
    pub fn from_page(page: LocationPage) -> Self {
        let mut track = Track::default();
        for record in page.results.into_iter().rev() {
            track.points.push(LatLng {
                latitude: record.latitude,
                longitude: record.longitude,
            });
            track.labels.push(record.asset_name);
        }
        track
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let page: LocationPage = serde_json::from_str(raw)?;
        Ok(Track::from_page(page))
    }

    /// The polyline path, oldest point first
    pub fn points(&self) -> &[LatLng] {
        &self.points
    }

    /// Points paired with the asset name reported at each location
    pub fn markers(&self) -> impl Iterator<Item = (LatLng, Option<&str>)> + '_ {
        self.points
            .iter()
            .copied()
            .zip(self.labels.iter().map(Option::as_deref))
    }

    /// Most recent location
    pub fn last(&self) -> Option<LatLng> {
        self.points.last().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
