use crate::Series;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// One aggregated output unit: the mean of a contiguous slice of the series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    pub average_value: f64,
    pub source_range: Range<usize>,
}

impl Bin {
    pub fn len(&self) -> usize {
        self.source_range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source_range.is_empty()
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum BinningError {
    #[error("target bin count must be at least 1")]
    ZeroBinCount,
}

/// Reduces `series` to at most `target_bins` bins by contiguous averaging.
///
/// When the series already fits, every sample becomes its own bin. Otherwise
/// the bin width is `ceil(len / target_bins)` and exactly `target_bins` bins
/// are produced; slices that fall past the end of the series yield
/// zero-valued bins with an empty range so the bin count stays stable across
/// re-renders.
pub fn aggregate(series: &Series, target_bins: usize) -> Result<Vec<Bin>, BinningError> {
    if target_bins == 0 {
        return Err(BinningError::ZeroBinCount);
    }
    let values: Vec<f64> = series.values().collect();
    let len = values.len();

    if target_bins >= len {
        return Ok(values
            .iter()
            .enumerate()
            .map(|(idx, value)| Bin {
                average_value: *value,
                source_range: idx..idx + 1,
            })
            .collect());
    }

    let bin_size = len.div_ceil(target_bins);
    let mut bins = Vec::with_capacity(target_bins);
    for idx in 0..target_bins {
        let start = (idx * bin_size).min(len);
        let end = ((idx + 1) * bin_size).min(len);
        let slice = &values[start..end];
        let average_value = if slice.is_empty() {
            0.0
        } else {
            slice.iter().sum::<f64>() / slice.len() as f64
        };
        bins.push(Bin {
            average_value,
            source_range: start..end,
        });
    }
    Ok(bins)
}
