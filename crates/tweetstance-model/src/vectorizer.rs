use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Sparse feature representation of one document.
///
/// `indices` are strictly increasing columns into the vectorizer's feature
/// space; `values` carries the weight at each column.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    indices: Vec<usize>,
    values: Vec<f32>,
}

impl FeatureVector {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Number of nonzero entries.
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    /// Iterate over `(column, weight)` pairs in column order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, f32)> + '_ {
        self.indices
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }

    /// Dot product against a dense row.
    ///
    /// # Panics
    ///
    /// Panics if `row` is narrower than the vector's largest column. Callers
    /// check feature widths before scoring.
    #[must_use]
    pub fn dot(&self, row: &[f32]) -> f32 {
        self.entries().map(|(column, weight)| weight * row[column]).sum()
    }

    /// Squared L2 norm.
    #[must_use]
    pub fn norm_sq(&self) -> f32 {
        self.values.iter().map(|v| v * v).sum()
    }
}

/// Pre-fit TF-IDF vectorizer, shared by every classifier in the bundle.
///
/// The artifact fixes the vocabulary (term to column) and the per-column
/// idf weights. Transforming text never mutates the vectorizer, so one
/// instance can serve concurrent requests behind a shared reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
}

impl TfidfVectorizer {
    /// Width of the feature space this vectorizer produces.
    #[must_use]
    pub fn width(&self) -> usize {
        self.idf.len()
    }

    /// Transform raw text into a tf-idf weighted, L2-normalized sparse
    /// vector.
    ///
    /// Tokens outside the vocabulary are ignored. Input with no vocabulary
    /// terms at all (the empty string included) yields an empty vector.
    #[must_use]
    pub fn transform(&self, text: &str) -> FeatureVector {
        let mut term_counts: BTreeMap<usize, f32> = BTreeMap::new();
        for token in tokenize(text) {
            if let Some(&column) = self.vocabulary.get(token.as_str()) {
                *term_counts.entry(column).or_insert(0.0) += 1.0;
            }
        }

        let mut indices = Vec::with_capacity(term_counts.len());
        let mut values = Vec::with_capacity(term_counts.len());
        for (column, tf) in term_counts {
            indices.push(column);
            values.push(tf * self.idf[column]);
        }

        let norm = values.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in &mut values {
                *value /= norm;
            }
        }

        FeatureVector { indices, values }
    }

    /// Structural checks applied after deserializing the artifact.
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.idf.is_empty() {
            return Err("idf table is empty".to_string());
        }
        let mut assigned = vec![false; self.idf.len()];
        for (term, &column) in &self.vocabulary {
            if column >= self.idf.len() {
                return Err(format!(
                    "term {term:?} maps to column {column}, but the idf table has width {}",
                    self.idf.len()
                ));
            }
            if assigned[column] {
                return Err(format!("column {column} is assigned to more than one term"));
            }
            assigned[column] = true;
        }
        Ok(())
    }
}

/// Lowercased alphanumeric runs of at least two characters, the same
/// tokenization the bundle was fit with.
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= 2)
        .map(str::to_lowercase)
}
