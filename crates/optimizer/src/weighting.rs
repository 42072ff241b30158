use crate::error::OptimizerError;
use configuration::WeightingParams;
use rust_decimal::Decimal;

/// Equal weights nudged by each instrument's return/risk ratio, clamped to the
/// configured bounds and normalized to sum to one.
///
/// `raw_i = clamp(1/n + (ratio_i - pivot) * tilt, min_weight, max_weight)`
pub fn tilted_weights(
    ratios: &[Decimal],
    params: &WeightingParams,
) -> Result<Vec<Decimal>, OptimizerError> {
    if ratios.is_empty() {
        return Ok(Vec::new());
    }

    let base = Decimal::ONE / Decimal::from(ratios.len());
    let raw: Vec<Decimal> = ratios
        .iter()
        .map(|ratio| {
            let tilted = base + (*ratio - params.sharpe_pivot) * params.tilt_factor;
            tilted.max(params.min_weight).min(params.max_weight)
        })
        .collect();

    let total: Decimal = raw.iter().sum();
    if total <= Decimal::ZERO {
        return Err(OptimizerError::Normalization(format!(
            "raw weights sum to {total}"
        )));
    }

    Ok(raw.into_iter().map(|w| w / total).collect())
}
