use thiserror::Error;

/// 압축 코어의 오류 분류
///
/// 네 종류 모두 해당 레이어에 대해 복구 불가능하며 드라이버 호출자까지
/// 전파된다. 지원하지 않는 레이어 타입은 오류가 아니라 스킵으로 처리한다.
#[derive(Debug, Error)]
pub enum CompressError {
    /// 남은 후보가 있는데도 그리디 탐색이 선택을 찾지 못함.
    /// 북키핑이 올바르면 도달할 수 없는 방어용 분기다.
    #[error("no greedy choice among {remaining} remaining neurons")]
    Selection { remaining: usize },

    /// 공분산 행렬 또는 레이어 형상 검증 실패
    #[error("validation failed: {0}")]
    Validation(String),

    /// 해당 레이어 인덱스에 등록된 공분산 행렬이 없음
    #[error("no covariance matrix registered for layer {layer}")]
    MissingCovariance { layer: usize },

    /// 인식할 수 없는 설정값
    #[error("invalid configuration: {0}")]
    Configuration(String),
}
