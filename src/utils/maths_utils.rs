use argminmax::ArgMinMax;

/// Index and value of the smallest element. `None` for an empty slice.
#[inline]
pub(crate) fn get_min(vec: &[f64]) -> Option<(usize, f64)> {
    if vec.is_empty() {
        return None;
    }
    let min_index: usize = vec.argmin();
    Some((min_index, vec[min_index]))
}

/// Mean and *population* standard deviation (divisor `N`).
/// Returns `(0.0, 0.0)` for an empty slice.
#[inline]
pub fn mean_and_stddev(data: &[f64]) -> (f64, f64) {
    let count = data.len();
    if count == 0 {
        return (0.0, 0.0);
    }

    let sum: f64 = data.iter().sum();
    let mean = sum / count as f64;

    let variance: f64 = data
        .iter()
        .map(|value| {
            let diff = mean - *value;
            diff * diff
        })
        .sum::<f64>()
        / count as f64;

    (mean, variance.sqrt())
}

/// Median of an unsorted slice. `None` when empty.
pub fn median(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}
