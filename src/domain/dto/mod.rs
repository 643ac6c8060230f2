//! 데이터 전송 객체 (DTO) 모듈
//!
//! API 경계에서 데이터를 전송하기 위한 객체들입니다.
//! Spring의 `@RequestBody`/`@ResponseBody`와 동일한 역할을 수행하며,
//! `validator`를 통한 입력 형식 검증을 포함합니다.

pub mod session;

pub use session::*;
