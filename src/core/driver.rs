//! 레이어별 압축 오케스트레이션
//!
//! 모델 레이어를 순서대로 돌며 지원 타입을 걸러내고, 레이어별 공분산을
//! 조회해 선택 전략을 실행한 뒤 결과를 파라미터에 적용한다.

use crate::core::error::CompressError;
use crate::core::group_sparse;
use crate::core::selection::{self, SelectionResult};
use crate::core::types::{CompressionConfig, LayerDescriptor, LayerKind, SelectionMethod};
use log::info;
use nalgebra::DMatrix;
use serde::Serialize;
use std::collections::HashMap;

/// 레이어 인덱스로 공분산 행렬을 조회하는 인터페이스
///
/// 공분산 계산 서브시스템이 구현한다. 코어는 행렬을 빌려 쓸 뿐
/// 소유하지 않는다.
pub trait CovarianceProvider {
    fn covariance(&self, layer: usize) -> Option<&DMatrix<f32>>;
}

impl CovarianceProvider for HashMap<usize, DMatrix<f32>> {
    fn covariance(&self, layer: usize) -> Option<&DMatrix<f32>> {
        self.get(&layer)
    }
}

/// 순서 있는 레이어 순회와 파라미터 변경 접근을 제공하는 인터페이스
pub trait LayerEnumerator {
    fn layers_mut(&mut self) -> &mut [LayerDescriptor];
}

impl LayerEnumerator for Vec<LayerDescriptor> {
    fn layers_mut(&mut self) -> &mut [LayerDescriptor] {
        self
    }
}

/// 레이어 하나의 압축 결과
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LayerOutcome {
    /// 지원하지 않는 타입이라 압축하지 않음
    Skipped { kind: LayerKind },
    /// 그리디 선택으로 가지치기 완료. 제외된 열/편향은 0으로 덮어썼다.
    Pruned(SelectionResult),
    /// 그룹 희소 변환. adjusted_weights는 레이어에 쓰지 않으며
    /// 적용 여부는 호출자의 몫이다.
    Transformed {
        transform: DMatrix<f32>,
        adjusted_weights: DMatrix<f32>,
    },
}

/// 압축 드라이버
pub struct CompressionDriver<'a, C: CovarianceProvider> {
    covariances: &'a C,
    config: CompressionConfig,
}

impl<'a, C: CovarianceProvider> CompressionDriver<'a, C> {
    pub fn new(covariances: &'a C, config: CompressionConfig) -> Self {
        Self { covariances, config }
    }

    /// 모든 대상 레이어를 순서대로 압축한다.
    ///
    /// 지원하지 않는 레이어는 Skipped로 기록하고 넘어간다. 대상
    /// 레이어의 공분산이 없거나 형상이 맞지 않으면 그 시점에서
    /// 오류로 중단하며, 이미 처리한 레이어의 변경은 되돌리지 않는다.
    pub fn compress<M: LayerEnumerator>(
        &self,
        model: &mut M,
    ) -> Result<Vec<LayerOutcome>, CompressError> {
        let layers = model.layers_mut();
        let mut outcomes = Vec::with_capacity(layers.len());

        for (index, layer) in layers.iter_mut().enumerate() {
            info!("compressing layer {} - {:?}", index, layer.kind);
            if !layer.kind.is_supported() {
                info!("skipping layer {}", index);
                outcomes.push(LayerOutcome::Skipped { kind: layer.kind });
                continue;
            }

            let cov = self
                .covariances
                .covariance(index)
                .ok_or(CompressError::MissingCovariance { layer: index })?;

            let outcome = match self.config.method {
                SelectionMethod::Greedy => {
                    check_pruning_shapes(index, layer, cov)?;
                    let result = selection::select(cov, self.config.alpha)?;
                    apply_pruning(layer, &result.excluded)?;
                    info!(
                        "layer {} pruned to {}/{} neurons",
                        index,
                        result.kept.len(),
                        layer.units()
                    );
                    LayerOutcome::Pruned(result)
                }
                SelectionMethod::GroupSparse => {
                    if layer.weights.nrows() != cov.nrows() {
                        return Err(CompressError::Validation(format!(
                            "layer {}: weights have {} rows but covariance is {}x{}",
                            index,
                            layer.weights.nrows(),
                            cov.nrows(),
                            cov.ncols()
                        )));
                    }
                    let transform = group_sparse::optimize(cov)?;
                    let adjusted_weights = &transform * &layer.weights;
                    LayerOutcome::Transformed {
                        transform,
                        adjusted_weights,
                    }
                }
            };
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }
}

fn check_pruning_shapes(
    index: usize,
    layer: &LayerDescriptor,
    cov: &DMatrix<f32>,
) -> Result<(), CompressError> {
    if layer.weights.ncols() != cov.nrows() || layer.biases.len() != cov.nrows() {
        return Err(CompressError::Validation(format!(
            "layer {}: {} weight columns and {} biases do not match covariance dimension {}",
            index,
            layer.weights.ncols(),
            layer.biases.len(),
            cov.nrows()
        )));
    }
    Ok(())
}

/// 제외된 뉴런의 가중치 열과 편향 항목을 정확히 0.0으로 만든다.
///
/// 유지된 열/항목은 비트 단위로 건드리지 않는다.
pub fn apply_pruning(
    layer: &mut LayerDescriptor,
    excluded: &[usize],
) -> Result<(), CompressError> {
    let units = layer.weights.ncols();
    for &j in excluded {
        if j >= units || j >= layer.biases.len() {
            return Err(CompressError::Validation(format!(
                "excluded index {} out of range for layer with {} neurons",
                j, units
            )));
        }
        layer.weights.column_mut(j).fill(0.0);
        layer.biases[j] = 0.0;
    }
    Ok(())
}
