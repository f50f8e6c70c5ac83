use crate::error::ScoreError;

/// Computes the arithmetic mean of a slice of values.
pub fn mean(values: &[f64]) -> Result<f64, ScoreError> {
    if values.is_empty() {
        return Err(ScoreError::EmptyInput);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Computes the population standard deviation given a pre-computed mean.
pub fn stddev(values: &[f64], mean: f64) -> Result<f64, ScoreError> {
    if values.is_empty() {
        return Err(ScoreError::EmptyInput);
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;

    Ok(variance.sqrt())
}

/// Middle value of a sorted copy; the average of the two middle values for
/// even lengths.
pub fn median(values: &[f64]) -> Result<f64, ScoreError> {
    if values.is_empty() {
        return Err(ScoreError::EmptyInput);
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Ok(sorted[mid])
    } else {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Values sharing the highest frequency, in first-seen order.
///
/// Returns an empty vector when no value repeats, including for a single
/// value or an empty slice.
pub fn modes(values: &[f64]) -> Vec<f64> {
    let mut counts: Vec<(f64, usize)> = Vec::new();
    for &v in values {
        match counts.iter_mut().find(|(seen, _)| *seen == v) {
            Some((_, n)) => *n += 1,
            None => counts.push((v, 1)),
        }
    }

    let top = counts.iter().map(|(_, n)| *n).max().unwrap_or(0);
    if top <= 1 {
        return Vec::new();
    }
    counts
        .into_iter()
        .filter(|(_, n)| *n == top)
        .map(|(v, _)| v)
        .collect()
}
