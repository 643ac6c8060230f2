//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 세션 관련 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # Features
//!
//! - 세션 수립/해제 API 엔드포인트
//! - 현재 사용자 조회 엔드포인트
//! - 헬스체크 엔드포인트
//!
//! 보호 경로(`/dashboard`, `/user-profile` 트리)에 대한 접근 제어는
//! 라우트 단위가 아니라 앱 전역에 래핑되는 `AccessGate` 미들웨어가
//! 담당합니다. 세션 API 경로는 보호 트리에 속하지 않으므로 게이트를
//! 그대로 통과합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::middlewares::AccessGate;
//!
//! let app = App::new()
//!     .wrap(AccessGate::standard())
//!     .configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;
use chrono;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_session_routes(cfg);
}

/// 세션 관련 라우트를 설정합니다
///
/// 세션 수립(로그인/회원가입), 해제(로그아웃), 조회 엔드포인트를 등록합니다.
/// 모든 세션 라우트는 Public 접근이 가능합니다 (세션을 만들기 위한
/// 엔드포인트이므로).
///
/// # Available Routes
///
/// - `POST /api/v1/session/login` - 이메일/비밀번호 로그인 후 쿠키 설정
/// - `POST /api/v1/session/register` - 회원가입 후 쿠키 설정
/// - `POST /api/v1/session/logout` - 세션 쿠키 삭제
/// - `GET /api/v1/session/me` - 현재 사용자 신원 조회
///
/// # Examples
///
/// ```bash
/// # 로그인 (응답의 Set-Cookie에 자격 증명 쌍이 담김)
/// curl -X POST http://localhost:8080/api/v1/session/login \
///   -H "Content-Type: application/json" \
///   -d '{"email":"user@caddcore.net","password":"password123"}'
///
/// # 현재 사용자 조회
/// curl http://localhost:8080/api/v1/session/me \
///   --cookie "accessToken=eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
/// ```
fn configure_session_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/session")
            .service(handlers::session::login)
            .service(handlers::session::register)
            .service(handlers::session::logout)
            .service(handlers::session::current_user)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "caddcore_access_backend",
///   "version": "0.1.0",
///   "timestamp": "2025-01-01T00:00:00Z",
///   "features": {
///     "route_gate": "AccessGate",
///     "session_store": "HttpOnly Cookies",
///     "dependency_injection": "Singleton Macro"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "caddcore_access_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "route_gate": "AccessGate",
            "session_store": "HttpOnly Cookies",
            "dependency_injection": "Singleton Macro"
        }
    }))
}
