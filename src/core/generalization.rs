//! 일반화 오차 진단
//!
//! 유지된 고유값 가중치에 대한 바이어스/분산 상한. 압축 결정에는
//! 쓰이지 않는 진단용 지표다.

use serde::{Deserialize, Serialize};

/// 바이어스/분산 상한
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneralizationBound {
    pub bias: f32,
    pub variance: f32,
}

impl GeneralizationBound {
    pub fn total(&self) -> f32 {
        self.bias + self.variance
    }
}

/// `bias = (Σᵢ √λᵢ)²`, `variance = Σₗ wₗ·wₗ₊₁ · ln(n)/n`
///
/// 수치 오차로 생긴 음수 고유값은 0으로 잘라낸다. 표본 수가 2 미만이면
/// 분산 항은 0이다.
pub fn generalization_bound(
    retained: &[f32],
    layer_widths: &[usize],
    samples: usize,
) -> GeneralizationBound {
    let bias = retained
        .iter()
        .map(|lamb| lamb.max(0.0).sqrt())
        .sum::<f32>()
        .powi(2);

    let mut variance = 0.0f32;
    if samples >= 2 {
        for pair in layer_widths.windows(2) {
            variance += (pair[0] * pair[1]) as f32;
        }
        variance *= (samples as f32).ln() / samples as f32;
    }

    GeneralizationBound { bias, variance }
}
