//! 그리디 순방향 뉴런 선택
//!
//! 공분산 부분행렬의 trace가 전체 분산을 최대한 포착하도록 뉴런을
//! 하나씩 추가한다. 미포착 분산이 alpha 이하로 내려가면 멈춘다.

use crate::core::error::CompressError;
use crate::core::types::validate_covariance;
use log::debug;
use nalgebra::DMatrix;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// 그리디 선택 결과
///
/// kept와 excluded는 오름차순이며 전체 인덱스 범위의 분할을 이룬다.
/// trace_curve는 스텝마다의 미포착 분산(model difference) 기록이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionResult {
    pub kept: Vec<usize>,
    pub excluded: Vec<usize>,
    pub trace_curve: Vec<f32>,
}

/// 공분산 trace 기반 순방향 선택을 수행한다.
///
/// 각 스텝에서 남은 후보마다 (선택 집합 + 후보)의 부분행렬 trace를
/// 평가해 잔차 `-trace`가 가장 작은 후보를 고른다. 동률이면 낮은
/// 인덱스가 이긴다. `total - captured <= alpha`가 되면 종료한다.
pub fn select(cov: &DMatrix<f32>, alpha: f32) -> Result<SelectionResult, CompressError> {
    if !(alpha >= 0.0) {
        return Err(CompressError::Configuration(format!(
            "alpha must be a finite value >= 0, got {}",
            alpha
        )));
    }
    validate_covariance(cov)?;

    let n = cov.nrows();
    let total = cov.trace();

    let mut kept: Vec<usize> = Vec::with_capacity(n);
    let mut remaining: Vec<usize> = (0..n).collect();
    let mut trace_curve: Vec<f32> = Vec::with_capacity(n);
    // 부분행렬의 trace는 선택된 대각 원소의 부분합이므로
    // 전체 부분행렬을 만들지 않고 증분으로 유지한다.
    let mut captured = 0.0f32;
    let mut steps = 0usize;

    while kept.len() < n {
        // 후보 스캔은 병렬이지만 (잔차, 인덱스) 사전식 최소값으로
        // 환원하므로 순차 스캔의 낮은-인덱스 동률 규칙과 일치한다.
        let best = remaining
            .par_iter()
            .map(|&j| (-(captured + cov[(j, j)]), j))
            .min_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

        let (best_residual, best_index) = best.ok_or(CompressError::Selection {
            remaining: remaining.len(),
        })?;

        kept.push(best_index);
        remaining.retain(|&r| r != best_index);
        captured += cov[(best_index, best_index)];

        let model_difference = total + best_residual;
        trace_curve.push(model_difference);

        if model_difference <= alpha {
            debug!("selection finished after {} steps - {}", steps, model_difference);
            break;
        }
        if steps % 10 == 0 {
            debug!("selection step {} - {}", steps, model_difference);
        }
        steps += 1;
    }

    kept.sort_unstable();
    let mut is_kept = vec![false; n];
    for &k in &kept {
        is_kept[k] = true;
    }
    let excluded = (0..n).filter(|&i| !is_kept[i]).collect();

    Ok(SelectionResult {
        kept,
        excluded,
        trace_curve,
    })
}
