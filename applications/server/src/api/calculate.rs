/// Calculator demo route
use axum::{extract::Path, Json};
use serde::Serialize;

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct CalculationResponse {
    pub a: i32,
    pub b: i32,
    pub sum: i64,
    pub product: i64,
}

impl CalculationResponse {
    /// Widened to i64 so no pair of i32 operands can overflow
    pub fn compute(a: i32, b: i32) -> Self {
        let (wide_a, wide_b) = (i64::from(a), i64::from(b));
        Self {
            a,
            b,
            sum: wide_a + wide_b,
            product: wide_a * wide_b,
        }
    }
}

/// GET /api/calculate/:a/:b
pub async fn calculate(Path((a, b)): Path<(i32, i32)>) -> Json<CalculationResponse> {
    Json(CalculationResponse::compute(a, b))
}
