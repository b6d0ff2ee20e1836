//! 공분산 구조 기반 신경망 레이어 압축 라이브러리
//!
//! 레이어의 inter-activation 공분산 행렬을 입력으로 받아, 제거해도
//! trace 구조를 거의 흐트러뜨리지 않는 뉴런을 골라낸다. 그리디 순방향
//! 선택과 그룹 희소 변환 최적화 두 경로를 제공한다.

pub mod core;

// 핵심 모듈들 재수출
pub use core::{
    apply_pruning, generalization_bound, CompressError, CompressionConfig, CompressionDriver,
    CovarianceProvider, GeneralizationBound, GroupSparseConfig, LayerDescriptor, LayerEnumerator,
    LayerKind, LayerOutcome, SelectionMethod, SelectionResult,
};

/// 편의 타입 별칭들
pub type CovarianceMatrix = nalgebra::DMatrix<f32>;
pub type WeightMatrix = nalgebra::DMatrix<f32>;
pub type BiasVector = nalgebra::DVector<f32>;

#[cfg(test)]
mod tests;
