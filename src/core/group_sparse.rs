//! 그룹 희소 변환 최적화
//!
//! `J(A) = tr(AΣAᵗ − 2AΣ) + λ·Σⱼ‖A[:,j]‖₂` 를 고정 스텝 경사 하강으로
//! 줄이는 n×n 변환 행렬을 찾는다. 기본 갱신식은 벌점 항의 부분기울기를
//! 상수 `λ·I`로 근사한다 (기준 구현과 동일한 근사).

use crate::core::error::CompressError;
use crate::core::types::validate_covariance;
use log::debug;
use nalgebra::DMatrix;

/// 그룹 희소 최적화 설정
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSparseConfig {
    /// 그룹 희소 벌점 가중치 λ
    pub lambda: f32,
    /// 고정 스텝 크기 η
    pub step_size: f32,
    pub max_iterations: usize,
    /// 조기 종료 손실 임계값
    pub tolerance: f32,
    /// true면 `λ·I` 근사 대신 열별 부분기울기 `λ·A[:,j]/‖A[:,j]‖`를 적용
    pub penalty_gradient: bool,
}

impl Default for GroupSparseConfig {
    fn default() -> Self {
        Self {
            lambda: 0.9,
            step_size: 0.1,
            max_iterations: 10_000,
            tolerance: 1e-4,
            penalty_gradient: false,
        }
    }
}

/// 기본 설정으로 변환 행렬을 최적화한다.
pub fn optimize(cov: &DMatrix<f32>) -> Result<DMatrix<f32>, CompressError> {
    optimize_with(cov, &GroupSparseConfig::default())
}

/// 변환 행렬 A를 항등 행렬에서 시작해 반복 갱신한다.
///
/// 반복마다 손실 평가 → 조기 종료 검사 → 갱신 순서를 지킨다.
/// 따라서 시작점에서 이미 `J(A) < tolerance`면 갱신 없이 항등 행렬이
/// 그대로 반환된다. max_iterations에 도달하면 수렴 여부와 무관하게
/// 마지막 A를 반환한다.
pub fn optimize_with(
    cov: &DMatrix<f32>,
    config: &GroupSparseConfig,
) -> Result<DMatrix<f32>, CompressError> {
    validate_covariance(cov)?;

    let n = cov.nrows();
    let identity = DMatrix::<f32>::identity(n, n);
    let mut a = identity.clone();

    for step in 0..config.max_iterations {
        let loss = objective(&a, cov, config.lambda);
        if loss < config.tolerance {
            debug!("group-sparse converged after {} steps - {}", step, loss);
            return Ok(a);
        }
        if step % 100 == 0 {
            debug!("group-sparse step {} - {}", step, loss);
        }

        let mut gradient = cov * &a - cov.scale(2.0);
        if config.penalty_gradient {
            for j in 0..n {
                let norm = a.column(j).norm();
                if norm > f32::EPSILON {
                    let column = a.column(j).clone_owned();
                    gradient
                        .column_mut(j)
                        .axpy(config.lambda / norm, &column, 1.0);
                }
            }
        } else {
            gradient += identity.scale(config.lambda);
        }
        a -= gradient.scale(config.step_size);
    }

    Ok(a)
}

/// 문서화된 목적 함수 `J(A) = tr(AΣAᵗ − 2AΣ) + λ·Σⱼ‖A[:,j]‖₂`
pub fn objective(a: &DMatrix<f32>, cov: &DMatrix<f32>, lambda: f32) -> f32 {
    let ac = a * cov;
    let quadratic = (&ac * a.transpose()).trace() - 2.0 * ac.trace();
    let penalty: f32 = (0..a.ncols()).map(|j| a.column(j).norm()).sum();
    quadratic + lambda * penalty
}
