use pyo3::prelude::*;
use pyo3::types::{PyDict, PyTuple};

use crate::{
    config::DEFAULT_MAX_LENGTH,
    mining::prefix_span,
    sequence::{Database, ItemSet, Sequence},
    types::PatternCounts,
};

/// Mine frequent sequential patterns.
///
/// `sequences` is a list of sequences, each a list of itemsets, each a list of
/// item labels. Returns a dict from pattern (tuple of tuples) to support count.
#[pyfunction]
#[pyo3(
    name = "prefix_span",
    signature = (sequences, min_support, max_length = DEFAULT_MAX_LENGTH)
)]
fn prefix_span_py(
    py: Python<'_>,
    sequences: Vec<Vec<Vec<String>>>,
    min_support: usize,
    max_length: usize,
) -> PyResult<Py<PyDict>> {
    let database: Database = sequences
        .into_iter()
        .map(|itemsets| itemsets.into_iter().map(ItemSet::new).collect::<Sequence>())
        .collect();

    let patterns = py.allow_threads(|| prefix_span(&database, min_support, max_length));
    convert_pattern_counts(py, &patterns)
}

pub fn convert_pattern_counts(py: Python<'_>, patterns: &PatternCounts) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);

    for (pattern, &support) in patterns {
        let itemsets: Vec<&PyTuple> = pattern
            .iter()
            .map(|itemset| PyTuple::new(py, itemset.items()))
            .collect();
        dict.set_item(PyTuple::new(py, itemsets), support)?;
    }

    Ok(dict.into())
}

#[pymodule]
fn prefixspan(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(prefix_span_py, m)?)?;
    Ok(())
}
