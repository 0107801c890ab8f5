//! Column-oriented dataset for driver-booking participation events.
//!
//! A `Dataset` is an ordered set of named, row-aligned columns. Feature
//! transforms append derived columns; the classifier facade extracts
//! numeric views for model fitting. Row projection with an index list is
//! the single primitive behind sorting, filtering and splitting.

use ndarray::Array2;
use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::error::DatasetError;

/// One physical column of a dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// Numeric column; missing values are IEEE NaN.
    Float(Vec<f64>),
    /// Integer column; missing values are `None`.
    Int(Vec<Option<i64>>),
    /// String column.
    Str(Vec<String>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Float(values) => values.len(),
            Column::Int(values) => values.len(),
            Column::Str(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn type_name(&self) -> &'static str {
        match self {
            Column::Float(_) => "float",
            Column::Int(_) => "int",
            Column::Str(_) => "str",
        }
    }

    fn select(&self, indices: &[usize]) -> Column {
        match self {
            Column::Float(values) => {
                Column::Float(indices.iter().map(|&i| values[i]).collect())
            }
            Column::Int(values) => Column::Int(indices.iter().map(|&i| values[i]).collect()),
            Column::Str(values) => {
                Column::Str(indices.iter().map(|&i| values[i].clone()).collect())
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<(String, Column)>,
}

impl Dataset {
    pub fn new() -> Self {
        Dataset::default()
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, |(_, col)| col.len())
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.n_rows() == 0
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|(n, _)| n == name)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, col)| col)
    }

    /// Insert a column, or deterministically replace an existing column of
    /// the same name in place.
    ///
    /// The first column inserted fixes the dataset row count; every later
    /// column must match it.
    pub fn insert_column(
        &mut self,
        name: impl Into<String>,
        column: Column,
    ) -> Result<(), DatasetError> {
        let name = name.into();
        if !self.columns.is_empty() && column.len() != self.n_rows() {
            return Err(DatasetError::LengthMismatch {
                column: name,
                expected: self.n_rows(),
                found: column.len(),
            });
        }

        if let Some(slot) = self.columns.iter_mut().find(|(n, _)| *n == name) {
            log::debug!("Replacing existing column '{}'", name);
            slot.1 = column;
        } else {
            self.columns.push((name, column));
        }
        Ok(())
    }

    /// Remove a column and return it.
    pub fn drop_column(&mut self, name: &str) -> Result<Column, DatasetError> {
        let idx = self
            .columns
            .iter()
            .position(|(n, _)| n == name)
            .ok_or_else(|| DatasetError::ColumnNotFound(name.to_string()))?;
        Ok(self.columns.remove(idx).1)
    }

    pub fn float_column(&self, name: &str) -> Result<&[f64], DatasetError> {
        match self.column(name) {
            Some(Column::Float(values)) => Ok(values),
            Some(other) => Err(DatasetError::ColumnTypeMismatch {
                column: name.to_string(),
                expected: "float",
                found: other.type_name(),
            }),
            None => Err(DatasetError::ColumnNotFound(name.to_string())),
        }
    }

    pub fn int_column(&self, name: &str) -> Result<&[Option<i64>], DatasetError> {
        match self.column(name) {
            Some(Column::Int(values)) => Ok(values),
            Some(other) => Err(DatasetError::ColumnTypeMismatch {
                column: name.to_string(),
                expected: "int",
                found: other.type_name(),
            }),
            None => Err(DatasetError::ColumnNotFound(name.to_string())),
        }
    }

    pub fn str_column(&self, name: &str) -> Result<&[String], DatasetError> {
        match self.column(name) {
            Some(Column::Str(values)) => Ok(values),
            Some(other) => Err(DatasetError::ColumnTypeMismatch {
                column: name.to_string(),
                expected: "str",
                found: other.type_name(),
            }),
            None => Err(DatasetError::ColumnNotFound(name.to_string())),
        }
    }

    /// Project rows by an index list, in the order given.
    ///
    /// Every column is projected with the same indices, so row alignment
    /// is preserved. Indices may repeat or reorder rows.
    pub fn select_rows(&self, indices: &[usize]) -> Dataset {
        Dataset {
            columns: self
                .columns
                .iter()
                .map(|(name, col)| (name.clone(), col.select(indices)))
                .collect(),
        }
    }

    /// Extract the named columns as an `(n_rows, n_features)` matrix of
    /// `f32` for model consumption.
    ///
    /// Float columns are narrowed as-is (NaN included), Int columns map
    /// `None` to NaN, and a Str column is a type error.
    pub fn feature_matrix(&self, features: &[String]) -> Result<Array2<f32>, DatasetError> {
        let n_rows = self.n_rows();
        let mut column_views: Vec<Vec<f32>> = Vec::with_capacity(features.len());
        for name in features {
            let values = match self.column(name) {
                Some(Column::Float(values)) => values.iter().map(|&v| v as f32).collect(),
                Some(Column::Int(values)) => values
                    .iter()
                    .map(|v| v.map_or(f32::NAN, |x| x as f32))
                    .collect(),
                Some(other) => {
                    return Err(DatasetError::ColumnTypeMismatch {
                        column: name.clone(),
                        expected: "numeric",
                        found: other.type_name(),
                    })
                }
                None => return Err(DatasetError::ColumnNotFound(name.clone())),
            };
            column_views.push(values);
        }

        let mut data = Vec::with_capacity(n_rows * features.len());
        for row in 0..n_rows {
            for view in &column_views {
                data.push(view[row]);
            }
        }

        Ok(Array2::from_shape_vec((n_rows, features.len()), data)
            .expect("row-major buffer matches (n_rows, n_features)"))
    }

    /// Extract a 0/1 label column as `i32`.
    ///
    /// Missing or non-finite values are schema errors: labels feed the
    /// estimator directly and have no NaN representation there.
    pub fn label_vector(&self, target: &str) -> Result<Vec<i32>, DatasetError> {
        match self.column(target) {
            Some(Column::Float(values)) => values
                .iter()
                .enumerate()
                .map(|(row, &v)| {
                    if v.is_finite() {
                        Ok(v.round() as i32)
                    } else {
                        Err(DatasetError::MissingValue {
                            column: target.to_string(),
                            row,
                        })
                    }
                })
                .collect(),
            Some(Column::Int(values)) => values
                .iter()
                .enumerate()
                .map(|(row, v)| {
                    v.map(|x| x as i32).ok_or_else(|| DatasetError::MissingValue {
                        column: target.to_string(),
                        row,
                    })
                })
                .collect(),
            Some(other) => Err(DatasetError::ColumnTypeMismatch {
                column: target.to_string(),
                expected: "numeric",
                found: other.type_name(),
            }),
            None => Err(DatasetError::ColumnNotFound(target.to_string())),
        }
    }

    /// Shuffled holdout split: the first `train_fraction` of a random
    /// permutation becomes the training set, the rest the test set.
    pub fn split_for_holdout(&self, train_fraction: f32) -> (Dataset, Dataset) {
        let mut rng = thread_rng();
        let n_rows = self.n_rows();
        let mut indices: Vec<usize> = (0..n_rows).collect();
        indices.shuffle(&mut rng);

        let n_train = (n_rows as f32 * train_fraction) as usize;
        let (train_idx, test_idx) = indices.split_at(n_train);

        log::debug!(
            "Holdout split: {} training rows, {} test rows",
            train_idx.len(),
            test_idx.len()
        );

        (self.select_rows(train_idx), self.select_rows(test_idx))
    }
}
