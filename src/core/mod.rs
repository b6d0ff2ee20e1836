//! # 공분산 기반 뉴런 압축 핵심 모듈
//!
//! 레이어별 활성 공분산의 trace 구조를 기준으로 기여도가 낮은
//! 뉴런/채널을 골라내는 압축 결정 엔진

pub mod driver;
pub mod error;
pub mod generalization;
pub mod group_sparse;
pub mod selection;
pub mod types;

// 주요 타입들 재수출
pub use driver::*;
pub use error::*;
pub use generalization::*;
pub use group_sparse::*;
pub use selection::*;
pub use types::*;
