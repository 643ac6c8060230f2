//! 세션 쿠키 기반 자격 증명 저장소
//!
//! 자격 증명 쌍을 요청/응답 사이클에 스코프된 쿠키로 읽고 쓰는 서비스입니다.
//! 읽기는 인바운드 요청의 쿠키에서, 쓰기/삭제는 아웃바운드 응답의
//! `Set-Cookie` 상태로 수행되며, 응답 빌더에 먼저 부착되므로 에러 경로를
//! 포함한 모든 종료 경로에 적용됩니다.
//!
//! 서로 다른 요청 간에 공유되는 상태는 없습니다.

use actix_web::HttpRequest;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::cookie::time::Duration;
use singleton_macro::service;
use crate::config::SessionCookieConfig;
use crate::domain::token::TokenPair;

/// 액세스 토큰을 담는 쿠키 이름
pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";

/// 리프레시 토큰을 담는 쿠키 이름
pub const REFRESH_TOKEN_COOKIE: &str = "refreshToken";

/// 세션 쿠키 관리 서비스
///
/// 자격 증명은 이 계층에서 불투명한 문자열이며, 백엔드가 발급한 값을
/// 그대로 저장하고 그대로 돌려줍니다.
#[service(name = "cookie")]
pub struct CookieService {
    // 외부 의존성 없음
}

impl CookieService {
    /// 요청 쿠키에서 액세스 토큰을 읽습니다.
    ///
    /// 쿠키가 없거나 값이 비어 있으면 `None`을 반환합니다.
    /// 자격 증명이 없는 것은 에러가 아니라 정상적인 익명 상태입니다.
    pub fn access_token(&self, req: &HttpRequest) -> Option<String> {
        Self::cookie_value(req, ACCESS_TOKEN_COOKIE)
    }

    /// 요청 쿠키에서 리프레시 토큰을 읽습니다.
    pub fn refresh_token(&self, req: &HttpRequest) -> Option<String> {
        Self::cookie_value(req, REFRESH_TOKEN_COOKIE)
    }

    /// 자격 증명 쌍을 저장하는 세션 쿠키들을 생성합니다.
    ///
    /// 반환된 쿠키들을 응답에 부착하면 저장이 완료됩니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let mut response = HttpResponse::Ok();
    /// for cookie in cookie_service.session_cookies(&pair) {
    ///     response.cookie(cookie);
    /// }
    /// ```
    pub fn session_cookies(&self, pair: &TokenPair) -> Vec<Cookie<'static>> {
        vec![
            Self::build_cookie(
                ACCESS_TOKEN_COOKIE,
                pair.access_token.clone(),
                Duration::hours(SessionCookieConfig::access_max_age_hours()),
            ),
            Self::build_cookie(
                REFRESH_TOKEN_COOKIE,
                pair.refresh_token.clone(),
                Duration::days(SessionCookieConfig::refresh_max_age_days()),
            ),
        ]
    }

    /// 저장된 자격 증명을 삭제하는 쿠키들을 생성합니다.
    ///
    /// `Max-Age=0` 쿠키를 내려보내 브라우저가 기존 세션 쿠키를 즉시
    /// 폐기하도록 합니다.
    pub fn removal_cookies(&self) -> Vec<Cookie<'static>> {
        vec![
            Self::build_cookie(ACCESS_TOKEN_COOKIE, String::new(), Duration::ZERO),
            Self::build_cookie(REFRESH_TOKEN_COOKIE, String::new(), Duration::ZERO),
        ]
    }

    /// 공통 보안 속성이 적용된 세션 쿠키를 생성합니다
    fn build_cookie(name: &'static str, value: String, max_age: Duration) -> Cookie<'static> {
        Cookie::build(name, value)
            .path("/")
            .http_only(true)
            .secure(SessionCookieConfig::secure())
            .same_site(SameSite::Lax)
            .max_age(max_age)
            .finish()
    }

    /// 요청에서 쿠키 값을 읽습니다 (빈 값은 없는 것으로 처리)
    fn cookie_value(req: &HttpRequest, name: &str) -> Option<String> {
        req.cookie(name)
            .map(|cookie| cookie.value().to_string())
            .filter(|value| !value.is_empty())
    }
}
