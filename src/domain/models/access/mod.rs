//! 라우트 접근 결정 모델

pub mod decision;

pub use decision::*;
