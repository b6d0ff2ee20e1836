use crate::core::error::CompressError;
use crate::core::selection::select;
use nalgebra::{DMatrix, DVector};
use rand::prelude::*;

/// 무작위 PSD 공분산 행렬 생성 (BᵗB 꼴)
fn random_psd(n: usize) -> DMatrix<f32> {
    let mut rng = thread_rng();
    let b = DMatrix::from_fn(n, n, |_, _| rng.gen_range(-1.0..1.0f32));
    b.transpose() * b
}

fn diag(values: &[f32]) -> DMatrix<f32> {
    DMatrix::from_diagonal(&DVector::from_row_slice(values))
}

#[test]
fn 분할_속성_검증() {
    let cov = random_psd(6);
    for alpha in [0.0, 0.5, 1e6] {
        let result = select(&cov, alpha).unwrap();

        let mut union: Vec<usize> = result.kept.iter().chain(result.excluded.iter()).copied().collect();
        union.sort_unstable();
        assert_eq!(union, (0..6).collect::<Vec<_>>(), "alpha={}", alpha);

        for k in &result.kept {
            assert!(!result.excluded.contains(k), "인덱스 {}가 양쪽에 있음", k);
        }
    }
}

#[test]
fn trace_곡선은_단조_감소() {
    let cov = random_psd(8);
    let result = select(&cov, 0.0).unwrap();

    assert!(!result.trace_curve.is_empty());
    for pair in result.trace_curve.windows(2) {
        assert!(
            pair[1] <= pair[0] + 1e-5,
            "trace 곡선이 증가함: {} -> {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn 동일_입력은_동일_결과() {
    let cov = random_psd(7);
    let first = select(&cov, 0.3).unwrap();
    let second = select(&cov, 0.3).unwrap();

    assert_eq!(first.kept, second.kept);
    assert_eq!(first.excluded, second.excluded);
    assert_eq!(first.trace_curve, second.trace_curve);
}

#[test]
fn 알파_0은_전체_선택() {
    let cov = diag(&[1.0, 1.0, 1.0]);
    let result = select(&cov, 0.0).unwrap();

    assert_eq!(result.kept, vec![0, 1, 2]);
    assert!(result.excluded.is_empty());
    assert_eq!(result.trace_curve, vec![2.0, 1.0, 0.0]);
}

#[test]
fn 넉넉한_알파는_조기_종료() {
    // 첫 선택(동률이라 인덱스 0) 후 미포착 분산 2.0 <= 2.5
    let cov = diag(&[1.0, 1.0, 1.0]);
    let result = select(&cov, 2.5).unwrap();

    assert_eq!(result.kept, vec![0]);
    assert_eq!(result.excluded, vec![1, 2]);
    assert_eq!(result.trace_curve, vec![2.0]);
}

#[test]
fn 동률은_낮은_인덱스_우선() {
    let cov = diag(&[2.0, 2.0, 1.0]);
    let result = select(&cov, 3.5).unwrap();

    assert_eq!(result.kept, vec![0]);
    assert_eq!(result.excluded, vec![1, 2]);
}

#[test]
fn 빈_행렬은_빈_결과() {
    let cov = DMatrix::<f32>::zeros(0, 0);
    let result = select(&cov, 0.0).unwrap();

    assert!(result.kept.is_empty());
    assert!(result.excluded.is_empty());
    assert!(result.trace_curve.is_empty());
}

#[test]
fn 비유한_값은_검증_오류() {
    let mut cov = diag(&[1.0, 1.0]);
    cov[(0, 1)] = f32::NAN;
    cov[(1, 0)] = f32::NAN;

    let err = select(&cov, 0.0).unwrap_err();
    assert!(matches!(err, CompressError::Validation(_)), "{:?}", err);
}

#[test]
fn 비정방_행렬은_검증_오류() {
    let cov = DMatrix::<f32>::zeros(2, 3);
    let err = select(&cov, 0.0).unwrap_err();
    assert!(matches!(err, CompressError::Validation(_)), "{:?}", err);
}

#[test]
fn 비대칭_행렬은_검증_오류() {
    let mut cov = diag(&[1.0, 1.0]);
    cov[(0, 1)] = 0.5;
    cov[(1, 0)] = 0.501;

    let err = select(&cov, 0.0).unwrap_err();
    assert!(matches!(err, CompressError::Validation(_)), "{:?}", err);
}

#[test]
fn 음수_알파는_설정_오류() {
    let cov = diag(&[1.0, 1.0]);
    let err = select(&cov, -0.1).unwrap_err();
    assert!(matches!(err, CompressError::Configuration(_)), "{:?}", err);
}
