use super::error::ValidationError;

fn ensure_non_empty(values: &[f64]) -> Result<(), ValidationError> {
    if values.is_empty() {
        Err(ValidationError::EmptyInput)
    } else {
        Ok(())
    }
}

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> Result<f64, ValidationError> {
    ensure_non_empty(values)?;
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population variance (normalized by `n`, not `n - 1`).
pub fn variance(values: &[f64]) -> Result<f64, ValidationError> {
    let mu = mean(values)?;
    Ok(values.iter().map(|v| (v - mu).powi(2)).sum::<f64>() / values.len() as f64)
}

/// Root-mean-square deviation between `predicted` and `reference`.
pub fn rmse(predicted: &[f64], reference: &[f64]) -> Result<f64, ValidationError> {
    if predicted.len() != reference.len() {
        return Err(ValidationError::LengthMismatch {
            left: predicted.len(),
            right: reference.len(),
        });
    }
    ensure_non_empty(predicted)?;

    let sum_sq: f64 = predicted
        .iter()
        .zip(reference)
        .map(|(p, r)| (p - r).powi(2))
        .sum();
    Ok((sum_sq / predicted.len() as f64).sqrt())
}
