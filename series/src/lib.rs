use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub mod aggregate;
pub use aggregate::{aggregate, Bin, BinningError};

/// One sample of a series, e.g. the hours worked on a single day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl SeriesPoint {
    pub fn new(value: f64) -> Self {
        Self { value, label: None }
    }

    pub fn labeled(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: Some(label.into()),
        }
    }
}

/// An ordered, immutable sequence of samples. Insertion order is temporal order.
///
/// Values are guaranteed finite; construction rejects NaN and infinities so
/// every downstream average stays well defined.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SeriesPoint>", into = "Vec<SeriesPoint>")]
pub struct Series {
    points: Vec<SeriesPoint>,
}

#[derive(thiserror::Error, Debug)]
pub enum SeriesError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("value at index {0} is not finite")]
    NonFinite(usize),
}

impl Series {
    pub fn new(points: Vec<SeriesPoint>) -> Result<Self, SeriesError> {
        if let Some(idx) = points.iter().position(|p| !p.value.is_finite()) {
            return Err(SeriesError::NonFinite(idx));
        }
        Ok(Self { points })
    }

    pub fn from_values<I>(values: I) -> Result<Self, SeriesError>
    where
        I: IntoIterator<Item = f64>,
    {
        Self::new(values.into_iter().map(SeriesPoint::new).collect())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SeriesError> {
        let data = serde_json::to_vec_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SeriesError> {
        let data = fs::read(path)?;
        let series = serde_json::from_slice(&data)?;
        Ok(series)
    }
}

impl TryFrom<Vec<SeriesPoint>> for Series {
    type Error = SeriesError;

    fn try_from(points: Vec<SeriesPoint>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<Series> for Vec<SeriesPoint> {
    fn from(series: Series) -> Self {
        series.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_finite_values() {
        let err = Series::from_values([1.0, f64::NAN, 3.0]).unwrap_err();
        assert!(matches!(err, SeriesError::NonFinite(1)));
        assert!(Series::from_values([f64::INFINITY]).is_err());
    }

    #[test]
    fn json_form_is_a_plain_array() {
        let series = Series::new(vec![
            SeriesPoint::labeled(7.5, "2024-03-04"),
            SeriesPoint::new(8.0),
        ])
        .unwrap();
        let text = serde_json::to_string(&series).unwrap();
        assert_eq!(
            text,
            r#"[{"value":7.5,"label":"2024-03-04"},{"value":8.0}]"#
        );
        let parsed: Series = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, series);
    }
}
