//! CADD CORE 라우트 접근 제어 백엔드
//!
//! CADD CORE 웹 플랫폼의 요청 인증 및 역할 기반 라우트 접근 제어를 담당하는
//! 서비스입니다. 쿠키 세션 복원, 토큰 신원 디코딩, 접근 정책 평가,
//! 그리고 싱글톤 매크로를 활용한 의존성 주입을 제공합니다.
//!
//! # Features
//!
//! - **세션 쿠키 저장소**: 자격 증명 쌍의 요청/응답 스코프 저장
//! - **신원 디코딩**: 네트워크 왕복 없는 액세스 토큰 구조적 디코딩
//! - **접근 정책**: 역할/인증 상태 기반 순수 라우트 접근 평가
//! - **접근 게이트**: 요청마다 정책을 수행하는 미들웨어
//! - **싱글톤 DI**: 매크로 기반 자동 의존성 주입
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │ Incoming Request│
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   AccessGate    │ ← 요청마다 세션 복원 + 정책 평가
//! └─────────────────┘
//!          │
//!          ├── Session Resolver ── Cookie Store + Identity Decoder
//!          │
//!          ├── Access Policy ──── 역할/인증 상태 → 결정
//!          │
//!          ▼
//!   Allow(통과) 또는 Redirect(302)
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use caddcore_access_backend::services::auth::SessionService;
//! use caddcore_access_backend::services::access::AccessPolicy;
//!
//! // 현재 사용자 복원 후 정책 평가
//! let session_service = SessionService::instance();
//! let user = session_service.resolve_current_user(&req);
//! let decision = AccessPolicy::standard().evaluate(req.path(), user.as_ref());
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
