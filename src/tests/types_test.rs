use crate::core::error::CompressError;
use crate::core::types::{
    validate_covariance, CompressionConfig, LayerDescriptor, LayerKind, SelectionMethod,
};
use approx::assert_relative_eq;
use nalgebra::{DMatrix, DVector};

#[test]
fn 기본_설정값() {
    let config = CompressionConfig::default();
    assert_relative_eq!(config.alpha, 0.01);
    assert_eq!(config.method, SelectionMethod::Greedy);
}

#[test]
fn 지원_레이어_타입() {
    assert!(LayerKind::Dense.is_supported());
    assert!(LayerKind::Conv1D.is_supported());
    assert!(LayerKind::Conv2D.is_supported());
    assert!(!LayerKind::Other.is_supported());
}

#[test]
fn 뉴런_수는_가중치_열_수() {
    let layer = LayerDescriptor::new(
        LayerKind::Dense,
        DMatrix::zeros(2, 5),
        DVector::zeros(5),
    );
    assert_eq!(layer.units(), 5);
}

#[test]
fn 허용_오차_내_대칭은_통과() {
    let mut cov = DMatrix::<f32>::identity(2, 2);
    cov[(0, 1)] = 0.5;
    cov[(1, 0)] = 0.5 + 5e-6;
    assert!(validate_covariance(&cov).is_ok());
}

#[test]
fn 허용_오차_밖_비대칭은_거부() {
    let mut cov = DMatrix::<f32>::identity(2, 2);
    cov[(0, 1)] = 0.5;
    cov[(1, 0)] = 0.6;

    let err = validate_covariance(&cov).unwrap_err();
    assert!(matches!(err, CompressError::Validation(_)), "{:?}", err);
}
