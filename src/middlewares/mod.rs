//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//! Spring Boot의 Filter와 Interceptor와 유사한 역할을 수행하며,
//! 횡단 관심사(Cross-cutting concerns)를 처리합니다.
//!
//! # 제공 미들웨어
//!
//! ### 라우트 접근 게이트 (AccessGate)
//! - 요청마다 쿠키 세션 복원 및 접근 정책 평가
//! - 통과 시 신원 정보를 request extension에 저장
//! - 차단 시 정책이 계산한 경로로 302 리다이렉트
//! - 쿠키 저장소는 변경하지 않음 (리다이렉트 신호 외 부수 효과 없음)
//!
//! # 사용 방법
//!
//! ## 글로벌 미들웨어 등록
//! ```rust,ignore
//! use actix_web::{App, HttpServer};
//! use crate::middlewares::AccessGate;
//!
//! HttpServer::new(|| {
//!     App::new()
//!         .wrap(AccessGate::standard()) // 모든 라우트에 접근 게이트 적용
//!         .service(/* 라우트들 */)
//! })
//! ```
//!
//! ## 커스텀 정책 테이블 적용
//! ```rust,ignore
//! use crate::middlewares::AccessGate;
//! use crate::services::access::PolicyTable;
//!
//! App::new()
//!     .wrap(AccessGate::with_table(custom_table))
//! ```

pub mod access_gate;
mod gate_inner;

// 미들웨어 재export
pub use access_gate::AccessGate;
