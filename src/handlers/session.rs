//! Session HTTP Handlers
//!
//! 세션 수립/해제와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 자격 증명 발급은 백엔드 인증 API의 몫이며, 여기서는 발급 결과를
//! 쿠키 저장소에 채우고 비우는 일만 담당합니다.
//!
//! # Endpoints
//!
//! - **로그인**: 백엔드 인증 후 세션 쿠키 설정 (`POST /session/login`)
//! - **회원가입**: 가입과 동시에 세션 쿠키 설정 (`POST /session/register`)
//! - **로그아웃**: 세션 쿠키 삭제 (`POST /session/logout`)
//! - **세션 조회**: 현재 사용자 신원 반환 (`GET /session/me`)
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use serde_json::json;
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::session::{LoginRequest, RegisterRequest};
use crate::services::auth::{BackendService, ClaimsService, CookieService, SessionService};

/// 로그인 핸들러
///
/// 자격 증명을 백엔드 인증 API로 전달하고, 발급된 토큰 쌍을
/// 세션 쿠키로 저장합니다.
///
/// # Endpoint
/// `POST /session/login`
#[post("/login")]
pub async fn login(
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let backend_service = BackendService::instance();
    let cookie_service = CookieService::instance();
    let claims_service = ClaimsService::instance();

    // 백엔드 인증 및 자격 증명 발급
    let pair = backend_service.login(&payload).await?;

    // 응답 본문용 신원 복원 (발급된 토큰은 해석 여부와 무관하게 그대로 저장)
    let user = match claims_service.decode(&pair.access_token) {
        Ok(claim) => Some(claim),
        Err(e) => {
            log::debug!("발급된 액세스 토큰 디코딩 실패: {}", e);
            None
        }
    };

    log::info!("로그인 성공 - 사용자: {}", payload.email);

    let mut response = HttpResponse::Ok();
    for cookie in cookie_service.session_cookies(&pair) {
        response.cookie(cookie);
    }

    Ok(response.json(json!({ "user": user })))
}

/// 회원가입 핸들러
///
/// 백엔드에 계정 생성을 요청하고, 가입과 동시에 발급된 토큰 쌍을
/// 세션 쿠키로 저장합니다.
///
/// # Endpoint
/// `POST /session/register`
#[post("/register")]
pub async fn register(
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let backend_service = BackendService::instance();
    let cookie_service = CookieService::instance();
    let claims_service = ClaimsService::instance();

    let pair = backend_service.register(&payload).await?;

    let user = match claims_service.decode(&pair.access_token) {
        Ok(claim) => Some(claim),
        Err(e) => {
            log::debug!("발급된 액세스 토큰 디코딩 실패: {}", e);
            None
        }
    };

    log::info!("회원가입 성공 - 사용자: {}", payload.email);

    let mut response = HttpResponse::Created();
    for cookie in cookie_service.session_cookies(&pair) {
        response.cookie(cookie);
    }

    Ok(response.json(json!({ "user": user })))
}

/// 로그아웃 핸들러
///
/// 저장된 자격 증명 쿠키를 삭제합니다. 세션이 없어도 항상 성공합니다.
///
/// # Endpoint
/// `POST /session/logout`
#[post("/logout")]
pub async fn logout() -> Result<HttpResponse, AppError> {
    let cookie_service = CookieService::instance();

    let mut response = HttpResponse::Ok();
    for cookie in cookie_service.removal_cookies() {
        response.cookie(cookie);
    }

    Ok(response.json(json!({ "message": "로그아웃 되었습니다" })))
}

/// 현재 세션 사용자 조회 핸들러
///
/// 쿠키의 자격 증명에서 신원 클레임을 복원하여 반환합니다.
/// 백엔드 조회 없이 로컬 디코딩만 수행합니다.
///
/// # Endpoint
/// `GET /session/me`
#[get("/me")]
pub async fn current_user(
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let session_service = SessionService::instance();

    let user = session_service
        .resolve_current_user(&req)
        .ok_or_else(|| AppError::AuthenticationError("로그인이 필요합니다".to_string()))?;

    Ok(HttpResponse::Ok().json(user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::cookie::Cookie;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use jsonwebtoken::{encode, EncodingKey, Header};
    use crate::services::auth::cookie_service::{ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE};

    #[actix_web::test]
    async fn test_logout_clears_session_cookies() {
        let app = test::init_service(App::new().service(logout)).await;

        let req = test::TestRequest::post().uri("/logout").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);

        let cleared: Vec<_> = res.response().cookies().collect();
        assert_eq!(cleared.len(), 2);
        assert!(cleared.iter().any(|c| c.name() == ACCESS_TOKEN_COOKIE));
        assert!(cleared.iter().any(|c| c.name() == REFRESH_TOKEN_COOKIE));
        for cookie in &cleared {
            assert_eq!(cookie.value(), "");
        }
    }

    #[actix_web::test]
    async fn test_current_user_resolves_session_cookie() {
        let app = test::init_service(App::new().service(current_user)).await;

        let token = encode(
            &Header::default(),
            &serde_json::json!({
                "id": "64ab00c1d2e3f40567890123",
                "name": "Choi Hana",
                "email": "hana@caddcore.net",
                "role": "user",
                "emailVerified": true
            }),
            &EncodingKey::from_secret(b"test-signing-key"),
        )
        .unwrap();

        let req = test::TestRequest::get()
            .uri("/me")
            .cookie(Cookie::new(ACCESS_TOKEN_COOKIE, token))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["email"], "hana@caddcore.net");
        assert_eq!(body["role"], "user");
    }

    #[actix_web::test]
    async fn test_current_user_without_session_is_unauthorized() {
        let app = test::init_service(App::new().service(current_user)).await;

        let req = test::TestRequest::get().uri("/me").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
