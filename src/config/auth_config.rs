//! # Authentication Configuration Module
//!
//! 세션 쿠키, 역할(Role), 백엔드 인증 API 등 인증 관련 설정을 관리하는 모듈입니다.
//! Spring Security의 인증 설정과 유사한 역할을 수행하며,
//! 환경 변수 기반으로 동작합니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ### 백엔드 인증 API
//! ```bash
//! export CADDCORE_API_BASE_URL="https://api.caddcore.net/api/v1"
//! ```
//!
//! ### 세션 쿠키 설정
//! ```bash
//! export COOKIE_SECURE="true"
//! export ACCESS_COOKIE_MAX_AGE_HOURS="24"
//! export REFRESH_COOKIE_MAX_AGE_DAYS="30"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{AuthApiConfig, SessionCookieConfig, Role};
//!
//! // 백엔드 인증 API 주소
//! let base_url = AuthApiConfig::base_url();
//!
//! // 세션 쿠키 수명
//! let hours = SessionCookieConfig::access_max_age_hours();
//!
//! // 역할 처리
//! let role = Role::from_str("admin")?;
//! assert_eq!(role.home_path(), "/dashboard");
//! ```

use std::env;
use crate::config::Environment;

/// CADD CORE 백엔드 인증 API 설정을 관리하는 구조체
///
/// 자격 증명 쌍(액세스/리프레시 토큰)을 발급하는 협력 서비스의 주소를 관리합니다.
/// 이 백엔드가 직접 토큰을 발급하지는 않으며, 발급된 결과를 저장만 합니다.
pub struct AuthApiConfig;

impl AuthApiConfig {
    /// 인증 API의 베이스 URL을 반환합니다.
    ///
    /// 로그인/회원가입 요청이 이 주소 아래의 `/auth/login`, `/auth/register`로
    /// 전달됩니다.
    ///
    /// # 기본값
    ///
    /// `http://localhost:5000/api/v1` (개발 환경용)
    ///
    /// # 환경 변수 설정
    ///
    /// ```bash
    /// export CADDCORE_API_BASE_URL="https://api.caddcore.net/api/v1"
    /// ```
    pub fn base_url() -> String {
        env::var("CADDCORE_API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:5000/api/v1".to_string())
    }
}

/// 세션 쿠키 관련 설정을 관리하는 구조체
///
/// 자격 증명 쌍을 담는 쿠키의 보안 속성과 수명을 관리합니다.
///
/// ## 권장 설정값
///
/// - **개발**: `COOKIE_SECURE=false` (로컬 HTTP 허용)
/// - **프로덕션**: `COOKIE_SECURE=true` + HTTPS 전용
pub struct SessionCookieConfig;

impl SessionCookieConfig {
    /// 쿠키에 `Secure` 속성을 부여할지 여부를 반환합니다.
    ///
    /// 환경 변수가 없으면 실행 환경에 따라 결정됩니다
    /// (개발/테스트 환경에서만 비활성화).
    ///
    /// # 환경 변수 설정
    ///
    /// ```bash
    /// export COOKIE_SECURE="true"
    /// ```
    pub fn secure() -> bool {
        if let Ok(value) = env::var("COOKIE_SECURE") {
            return value.eq_ignore_ascii_case("true");
        }

        Self::secure_for_env(&Environment::current())
    }

    /// 특정 환경에 대한 Secure 속성 기본값을 반환합니다.
    pub fn secure_for_env(env: &Environment) -> bool {
        match env {
            Environment::Development => false,
            Environment::Test => false,
            Environment::Staging => true,
            Environment::Production => true,
        }
    }

    /// 액세스 토큰 쿠키의 수명을 시간 단위로 반환합니다.
    ///
    /// 토큰 자체의 만료는 백엔드가 결정하며, 이 값은 쿠키의 보관 기간만
    /// 제한합니다.
    ///
    /// # 기본값
    ///
    /// 24시간
    pub fn access_max_age_hours() -> i64 {
        env::var("ACCESS_COOKIE_MAX_AGE_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24)
    }

    /// 리프레시 토큰 쿠키의 수명을 일 단위로 반환합니다.
    ///
    /// # 기본값
    ///
    /// 30일
    pub fn refresh_max_age_days() -> i64 {
        env::var("REFRESH_COOKIE_MAX_AGE_DAYS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30)
    }
}

/// 플랫폼에서 지원하는 사용자 역할을 나타내는 열거형
///
/// 고정된 폐쇄 열거형으로, 각 사용자는 정확히 하나의 역할을 가집니다.
/// 토큰에는 소문자 문자열로 실려오며, 알 수 없는 역할 문자열은
/// 디코딩 실패로 처리됩니다.
///
/// ## 역할 구성
///
/// - `admin` - 관리자 (대시보드 전체 접근)
/// - `user` - 일반 수강생 계정
/// - `instructor` / `moderator` / `support` - 내부 스태프 역할
///
/// ## 직렬화 지원
///
/// `serde`를 통해 JSON 직렬화/역직렬화를 지원하므로,
/// 토큰 페이로드나 API 응답에 그대로 사용할 수 있습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// 관리자
    ///
    /// 대시보드 전체(`/dashboard` 하위)에 접근할 수 있습니다.
    Admin,

    /// 일반 사용자 (수강생)
    ///
    /// 본인 프로필 영역(`/user-profile` 하위)에 접근할 수 있습니다.
    User,

    /// 강사 역할 (내부 스태프)
    Instructor,

    /// 운영 역할 (내부 스태프)
    Moderator,

    /// 고객 지원 역할 (내부 스태프)
    Support,
}

impl Role {
    /// 문자열에서 Role을 생성합니다.
    ///
    /// 토큰 페이로드나 API 요청에서 문자열로 전달된 역할을
    /// 적절한 열거형 값으로 변환합니다 (대소문자 무관).
    ///
    /// # 반환값
    ///
    /// * `Ok(Role)` - 유효한 역할인 경우
    /// * `Err(String)` - 지원하지 않는 역할인 경우
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// use crate::config::Role;
    ///
    /// let role = Role::from_str("admin")?;
    /// assert_eq!(role, Role::Admin);
    ///
    /// let invalid = Role::from_str("superuser");
    /// assert!(invalid.is_err());
    /// ```
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::User),
            "instructor" => Ok(Role::Instructor),
            "moderator" => Ok(Role::Moderator),
            "support" => Ok(Role::Support),
            _ => Err(format!("Unsupported role: {}", s)),
        }
    }

    /// Role을 문자열로 변환합니다.
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// use crate::config::Role;
    ///
    /// assert_eq!(Role::Admin.as_str(), "admin");
    /// assert_eq!(Role::User.as_str(), "user");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
            Role::Instructor => "instructor",
            Role::Moderator => "moderator",
            Role::Support => "support",
        }
    }

    /// 역할별 기본 랜딩 경로를 반환합니다.
    ///
    /// 보호된 경로에서 역할 패턴이 일치하지 않을 때 리다이렉트되는
    /// 기본 목적지입니다. 관리자는 대시보드 루트로, 나머지 역할은
    /// 사용자 프로필 루트로 이동합니다.
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Admin => "/dashboard",
            _ => "/user-profile",
        }
    }
}
