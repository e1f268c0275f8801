use crate::error::{Result, TaError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered sequence of `f64` values, each paired with an index key.
///
/// The key type is left open: positional `usize` keys for plain vectors,
/// timestamps for market data. Keys are never sorted or deduplicated here, the
/// series keeps whatever order the caller supplied.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Series<K = usize> {
    index: Vec<K>,
    values: Vec<f64>,
    name: Option<String>,
}

impl<K> Series<K> {
    /// Builds a series from matching index and value vectors.
    pub fn new(index: Vec<K>, values: Vec<f64>) -> Result<Self> {
        if index.len() != values.len() {
            return Err(TaError::LengthMismatch {
                index: index.len(),
                values: values.len(),
            });
        }
        Ok(Self {
            index,
            values,
            name: None,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn index(&self) -> &[K] {
        &self.index
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, position: usize) -> Option<(&K, f64)> {
        Some((self.index.get(position)?, *self.values.get(position)?))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, f64)> + '_ {
        self.index.iter().zip(self.values.iter().copied())
    }

    pub fn into_parts(self) -> (Vec<K>, Vec<f64>) {
        (self.index, self.values)
    }
}

impl<K: Clone> Series<K> {
    /// Returns the positions `start..` as a new series. A `start` past the end
    /// yields an empty series.
    pub fn tail_from(&self, start: usize) -> Self {
        let start = start.min(self.len());
        Self {
            index: self.index[start..].to_vec(),
            values: self.values[start..].to_vec(),
            name: self.name.clone(),
        }
    }

    /// Replaces the values while keeping the index of positions `start..`.
    ///
    /// Used by indicators whose output begins part way into their input.
    pub(crate) fn realign(&self, start: usize, values: Vec<f64>) -> Result<Self> {
        let start = start.min(self.len());
        Series::new(self.index[start..].to_vec(), values)
    }

    /// First difference `x[i] - x[i - 1]`.
    ///
    /// The first position has no predecessor and is dropped rather than
    /// filled, so the result is one element shorter than `self`.
    pub fn diff(&self) -> Self {
        let values = self.values.windows(2).map(|w| w[1] - w[0]).collect();
        Self {
            index: self.index.iter().skip(1).cloned().collect(),
            values,
            name: self.name.clone(),
        }
    }

    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        Self {
            index: self.index.clone(),
            values: self.values.iter().map(|&v| f(v)).collect(),
            name: self.name.clone(),
        }
    }
}

impl<K: Clone + PartialEq> Series<K> {
    /// Combines two series element by element.
    ///
    /// Both series must carry the same index keys in the same order. Indicator
    /// outputs built from the same input and window always do, so a mismatch
    /// is reported as an error instead of being joined.
    pub fn zip_with<F>(&self, other: &Series<K>, f: F) -> Result<Self>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.len() != other.len() {
            return Err(TaError::IndexMismatch(format!(
                "{} keys against {} keys",
                self.len(),
                other.len()
            )));
        }
        if let Some(position) = self
            .index
            .iter()
            .zip(other.index.iter())
            .position(|(a, b)| a != b)
        {
            return Err(TaError::IndexMismatch(format!(
                "keys differ at position {position}"
            )));
        }

        let values = self
            .values
            .iter()
            .zip(other.values.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Self {
            index: self.index.clone(),
            values,
            name: None,
        })
    }
}

impl From<Vec<f64>> for Series<usize> {
    fn from(values: Vec<f64>) -> Self {
        Self {
            index: (0..values.len()).collect(),
            values,
            name: None,
        }
    }
}

impl From<&[f64]> for Series<usize> {
    fn from(values: &[f64]) -> Self {
        Series::from(values.to_vec())
    }
}

impl<K> FromIterator<(K, f64)> for Series<K> {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let (index, values) = iter.into_iter().unzip();
        Self {
            index,
            values,
            name: None,
        }
    }
}
