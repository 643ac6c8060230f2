//! 외부 인증 API 통합 모델

pub mod auth_api;

pub use auth_api::*;
