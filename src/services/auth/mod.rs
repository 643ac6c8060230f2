//! 인증 및 세션 서비스 모듈
//!
//! 쿠키 기반 자격 증명 저장, 토큰 신원 디코딩, 세션 복원,
//! 백엔드 인증 API 연동을 담당하는 서비스들을 제공합니다.
//!
//! # Features
//!
//! - 요청/응답 스코프의 세션 쿠키 저장소
//! - 액세스 토큰 → 신원 클레임 구조적 디코딩 (네트워크 왕복 없음)
//! - 세션 복원 (실패는 익명 상태로 정규화)
//! - 자격 증명 발급 백엔드와의 통신
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{SessionService, CookieService};
//!
//! // 현재 사용자 복원
//! let session_service = SessionService::instance();
//! let user = session_service.resolve_current_user(&req);
//!
//! // 자격 증명 저장
//! let cookie_service = CookieService::instance();
//! let cookies = cookie_service.session_cookies(&pair);
//! ```

pub mod backend_service;
pub mod claims_service;
pub mod cookie_service;
pub mod session_service;

pub use backend_service::*;
pub use claims_service::*;
pub use cookie_service::*;
pub use session_service::*;
