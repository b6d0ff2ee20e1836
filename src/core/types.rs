use crate::core::error::CompressError;
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

/// 대칭성 검사의 절대 허용 오차
pub const SYMMETRY_TOLERANCE: f32 = 1e-5;

/// 레이어 타입 태그
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerKind {
    Dense,
    Conv1D,
    Conv2D,
    Other,
}

impl LayerKind {
    /// 압축 대상 레이어인지 여부
    pub fn is_supported(self) -> bool {
        matches!(self, LayerKind::Dense | LayerKind::Conv1D | LayerKind::Conv2D)
    }
}

/// 네트워크 레이어 하나의 타입 태그와 학습 파라미터
///
/// 외부 모델 래퍼가 소유하며, 코어는 압축 호출 동안만 빌려서
/// 제외된 열/항목에 0을 쓴다. 크기를 바꾸거나 재할당하지 않는다.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerDescriptor {
    pub kind: LayerKind,
    /// (입력 × 뉴런) 방향의 가중치 행렬. 열 하나가 뉴런 하나에 대응한다.
    pub weights: DMatrix<f32>,
    pub biases: DVector<f32>,
}

impl LayerDescriptor {
    pub fn new(kind: LayerKind, weights: DMatrix<f32>, biases: DVector<f32>) -> Self {
        Self { kind, weights, biases }
    }

    /// 레이어의 뉴런(채널) 수
    pub fn units(&self) -> usize {
        self.weights.ncols()
    }
}

/// 뉴런 선택 방법
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionMethod {
    Greedy,
    GroupSparse,
}

impl SelectionMethod {
    /// 설정 문자열 파싱. "greedy"와 "sparse"만 인식한다.
    pub fn parse(name: &str) -> Result<Self, CompressError> {
        match name {
            "greedy" => Ok(SelectionMethod::Greedy),
            "sparse" => Ok(SelectionMethod::GroupSparse),
            other => Err(CompressError::Configuration(format!(
                "unknown method '{}', expected 'greedy' or 'sparse'",
                other
            ))),
        }
    }
}

/// 압축 설정
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompressionConfig {
    /// 잔여 분산 허용치. 미포착 분산이 alpha 이하로 내려가면 선택을 멈춘다.
    pub alpha: f32,
    pub method: SelectionMethod,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            alpha: 0.01,
            method: SelectionMethod::Greedy,
        }
    }
}

/// 공분산 행렬 검증: 정방, 유한, 허용 오차 내 대칭
///
/// PSD 여부는 전제 조건으로 두고 검사하지 않는다.
pub fn validate_covariance(cov: &DMatrix<f32>) -> Result<(), CompressError> {
    if cov.nrows() != cov.ncols() {
        return Err(CompressError::Validation(format!(
            "covariance must be square, got {}x{}",
            cov.nrows(),
            cov.ncols()
        )));
    }
    if cov.iter().any(|v| !v.is_finite()) {
        return Err(CompressError::Validation(
            "covariance contains non-finite values".to_string(),
        ));
    }
    let n = cov.nrows();
    for i in 0..n {
        for j in (i + 1)..n {
            let diff = (cov[(i, j)] - cov[(j, i)]).abs();
            if diff > SYMMETRY_TOLERANCE {
                return Err(CompressError::Validation(format!(
                    "covariance asymmetric at ({}, {}): |{} - {}| = {}",
                    i,
                    j,
                    cov[(i, j)],
                    cov[(j, i)],
                    diff
                )));
            }
        }
    }
    Ok(())
}
