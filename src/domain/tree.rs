//! CART decision tree classifier
//!
//! Gini-impurity splits, grown until leaves are pure or no candidate
//! threshold remains. Split search scans features in column order and
//! thresholds in ascending order, keeping the first best candidate, so
//! fitting identical data always produces an identical tree.

use ndarray::{ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};

use super::DomainError;

const MIN_SAMPLES_SPLIT: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
enum Node {
    Leaf {
        /// Training-class distribution at this leaf.
        probabilities: Vec<f64>,
        class: usize,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

/// Fitted decision tree stored as a node arena; index 0 is the root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    nodes: Vec<Node>,
    n_classes: usize,
    n_features: usize,
}

impl DecisionTreeClassifier {
    /// Fit a tree to a feature matrix and class labels.
    pub fn fit(x: ArrayView2<'_, f64>, y: &[usize]) -> Result<Self, DomainError> {
        if x.nrows() == 0 {
            return Err(DomainError::training("cannot fit tree on an empty matrix"));
        }
        if x.nrows() != y.len() {
            return Err(DomainError::training(format!(
                "feature matrix has {} rows but target has {} labels",
                x.nrows(),
                y.len()
            )));
        }

        let n_classes = y.iter().max().copied().unwrap_or(0) + 1;
        let indices: Vec<usize> = (0..x.nrows()).collect();

        let mut nodes = Vec::new();
        grow(&mut nodes, x, y, &indices, n_classes);

        Ok(Self {
            nodes,
            n_classes,
            n_features: x.ncols(),
        })
    }

    /// Predict the class of every row in a matrix.
    pub fn predict(&self, x: ArrayView2<'_, f64>) -> Result<Vec<usize>, DomainError> {
        x.rows().into_iter().map(|row| self.predict_row(row)).collect()
    }

    /// Predict the class of a single row.
    pub fn predict_row(&self, row: ArrayView1<'_, f64>) -> Result<usize, DomainError> {
        match self.leaf_for(row)? {
            Node::Leaf { class, .. } => Ok(*class),
            Node::Split { .. } => Err(DomainError::internal("tree traversal ended on a split node")),
        }
    }

    /// Class probability distribution for a single row.
    pub fn predict_proba_row(&self, row: ArrayView1<'_, f64>) -> Result<Vec<f64>, DomainError> {
        match self.leaf_for(row)? {
            Node::Leaf { probabilities, .. } => Ok(probabilities.clone()),
            Node::Split { .. } => Err(DomainError::internal("tree traversal ended on a split node")),
        }
    }

    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    fn leaf_for(&self, row: ArrayView1<'_, f64>) -> Result<&Node, DomainError> {
        if row.len() != self.n_features {
            return Err(DomainError::internal(format!(
                "tree was fit on {} features but received {}",
                self.n_features,
                row.len()
            )));
        }

        let mut node = &self.nodes[0];
        loop {
            match node {
                Node::Leaf { .. } => return Ok(node),
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if row[*feature] <= *threshold {
                        &self.nodes[*left]
                    } else {
                        &self.nodes[*right]
                    };
                }
            }
        }
    }
}

struct Candidate {
    feature: usize,
    threshold: f64,
    weighted_impurity: f64,
}

/// Recursively grow the subtree for `indices`, returning its node id.
fn grow(
    nodes: &mut Vec<Node>,
    x: ArrayView2<'_, f64>,
    y: &[usize],
    indices: &[usize],
    n_classes: usize,
) -> usize {
    let counts = class_counts(y, indices, n_classes);
    let impurity = gini(&counts, indices.len());

    if impurity == 0.0 || indices.len() < MIN_SAMPLES_SPLIT {
        return push_leaf(nodes, counts, indices.len());
    }

    let Some(candidate) = best_split(x, y, indices, n_classes, &counts) else {
        return push_leaf(nodes, counts, indices.len());
    };

    let (left_indices, right_indices): (Vec<usize>, Vec<usize>) = indices
        .iter()
        .copied()
        .partition(|&i| x[[i, candidate.feature]] <= candidate.threshold);

    // Reserve the split slot so children land after their parent.
    let node_id = nodes.len();
    nodes.push(Node::Leaf {
        probabilities: Vec::new(),
        class: 0,
    });

    let left = grow(nodes, x, y, &left_indices, n_classes);
    let right = grow(nodes, x, y, &right_indices, n_classes);

    nodes[node_id] = Node::Split {
        feature: candidate.feature,
        threshold: candidate.threshold,
        left,
        right,
    };
    node_id
}

/// Best (feature, threshold) pair by weighted child impurity.
///
/// Candidate thresholds are midpoints between consecutive distinct sorted
/// values, so both children of a chosen split are always non-empty.
fn best_split(
    x: ArrayView2<'_, f64>,
    y: &[usize],
    indices: &[usize],
    n_classes: usize,
    counts: &[usize],
) -> Option<Candidate> {
    let n = indices.len();
    let mut best: Option<Candidate> = None;

    for feature in 0..x.ncols() {
        let mut values: Vec<(f64, usize)> =
            indices.iter().map(|&i| (x[[i, feature]], y[i])).collect();
        values.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut left_counts = vec![0usize; n_classes];
        let mut right_counts = counts.to_vec();

        for k in 0..n - 1 {
            let (value, label) = values[k];
            left_counts[label] += 1;
            right_counts[label] -= 1;

            if value == values[k + 1].0 {
                continue;
            }

            let left_n = k + 1;
            let right_n = n - left_n;
            let weighted = (left_n as f64 * gini(&left_counts, left_n)
                + right_n as f64 * gini(&right_counts, right_n))
                / n as f64;

            if best
                .as_ref()
                .is_none_or(|b| weighted < b.weighted_impurity)
            {
                best = Some(Candidate {
                    feature,
                    threshold: (value + values[k + 1].0) / 2.0,
                    weighted_impurity: weighted,
                });
            }
        }
    }

    best
}

fn push_leaf(nodes: &mut Vec<Node>, counts: Vec<usize>, total: usize) -> usize {
    // First class wins ties, matching argmax semantics.
    let mut class = 0;
    let mut best_count = 0;
    for (i, &count) in counts.iter().enumerate() {
        if count > best_count {
            best_count = count;
            class = i;
        }
    }
    let probabilities = counts
        .iter()
        .map(|&c| c as f64 / total as f64)
        .collect();

    nodes.push(Node::Leaf {
        probabilities,
        class,
    });
    nodes.len() - 1
}

fn class_counts(y: &[usize], indices: &[usize], n_classes: usize) -> Vec<usize> {
    let mut counts = vec![0usize; n_classes];
    for &i in indices {
        counts[y[i]] += 1;
    }
    counts
}

fn gini(counts: &[usize], total: usize) -> f64 {
    let n = total as f64;
    1.0 - counts
        .iter()
        .map(|&c| (c as f64 / n).powi(2))
        .sum::<f64>()
}
