use serde::Serialize;

/// One step of an empirical CDF: `P(X <= value)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CdfPoint {
    pub value: f64,
    pub probability: f64,
}

/// Empirical CDF of `values`, sorted by value. Tied values share the
/// probability of the last of them. Non-finite values are ignored.
pub fn empirical_cdf(values: &[f64]) -> Vec<CdfPoint> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len() as f64;

    let mut points = Vec::with_capacity(sorted.len());
    let mut i = 0;
    while i < sorted.len() {
        let value = sorted[i];
        let mut j = i;
        while j + 1 < sorted.len() && sorted[j + 1] == value {
            j += 1;
        }
        let probability = (j + 1) as f64 / n;
        for _ in i..=j {
            points.push(CdfPoint { value, probability });
        }
        i = j + 1;
    }
    points
}
