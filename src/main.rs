use anyhow::Result;
use covprune::{
    CompressionConfig, CompressionDriver, LayerDescriptor, LayerKind, SelectionMethod,
};
use nalgebra::{DMatrix, DVector};
use std::collections::HashMap;

fn main() -> Result<()> {
    env_logger::init();
    println!("공분산 기반 뉴런 압축 데모 시작...\n");

    // 작은 2-레이어 모델과 손으로 만든 공분산 행렬
    let mut model = vec![
        LayerDescriptor::new(
            LayerKind::Dense,
            DMatrix::from_row_slice(2, 4, &[0.5, -1.2, 0.3, 0.8, 1.1, 0.2, -0.7, 0.4]),
            DVector::from_vec(vec![0.1, 0.2, 0.3, 0.4]),
        ),
        LayerDescriptor::new(
            LayerKind::Dense,
            DMatrix::from_row_slice(4, 3, &[
                0.9, 0.1, -0.3,
                0.2, 0.7, 0.5,
                -0.6, 0.4, 0.8,
                0.3, -0.2, 0.1,
            ]),
            DVector::from_vec(vec![0.0, -0.1, 0.2]),
        ),
    ];

    let mut covariances = HashMap::new();
    covariances.insert(0, DMatrix::from_diagonal(&DVector::from_vec(vec![3.0, 0.05, 1.5, 0.02])));
    covariances.insert(1, DMatrix::from_diagonal(&DVector::from_vec(vec![2.0, 0.8, 0.01])));

    let config = CompressionConfig {
        alpha: 0.1,
        method: SelectionMethod::Greedy,
    };
    let driver = CompressionDriver::new(&covariances, config);
    let outcomes = driver.compress(&mut model)?;

    println!("압축 결과:");
    println!("{}", serde_json::to_string_pretty(&outcomes)?);

    Ok(())
}
