//! 액세스 토큰에서 복원되는 사용자 신원 클레임
//!
//! 자격 증명이 구조적으로 디코딩될 때에만 존재하며,
//! 어디에도 별도로 저장되지 않고 요청마다 토큰에서 다시 계산됩니다.

use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Deserializer, Serialize};
use crate::config::Role;
use crate::utils::string_utils::deserialize_optional_string;

/// 액세스 토큰에서 추출된 사용자 신원 정보
///
/// 토큰 페이로드의 camelCase 필드를 그대로 역직렬화하며,
/// 이메일 인증 플래그는 이 경계에서 엄격한 `bool`로 정규화됩니다
/// (백엔드가 `true`와 `"true"`를 혼용해서 내려보내는 경우가 있음).
/// 알 수 없는 페이로드 필드(`iat`, `exp` 등)는 무시됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityClaim {
    /// 사용자 고유 ID (Mongo 스타일 백엔드의 `_id`도 허용)
    #[serde(alias = "_id")]
    pub id: String,

    /// 사용자 이름
    pub name: String,

    /// 사용자 이메일
    pub email: String,

    /// 휴대폰 번호
    #[serde(
        rename = "mobileNumber",
        default,
        deserialize_with = "deserialize_optional_string"
    )]
    pub mobile_number: Option<String>,

    /// 사용자 역할 (폐쇄 열거형, 정확히 하나)
    pub role: Role,

    /// 계정 상태 (예: "active")
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub status: Option<String>,

    /// 이메일 인증 여부
    ///
    /// 페이로드에는 `true`/`false` 또는 문자열 `"true"`/`"false"`로 실려올 수 있으며,
    /// 없는 경우 미인증으로 간주합니다.
    #[serde(
        rename = "emailVerified",
        default,
        deserialize_with = "deserialize_verified_flag"
    )]
    pub email_verified: bool,

    /// 프로필 사진 URL
    #[serde(
        rename = "profilePhoto",
        default,
        deserialize_with = "deserialize_optional_string"
    )]
    pub profile_photo: Option<String>,
}

impl IdentityClaim {
    /// 관리자 권한을 보유하고 있는지 확인
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// 이메일 인증이 완료되었는지 확인
    pub fn is_verified(&self) -> bool {
        self.email_verified
    }
}

/// 덕 타이핑된 인증 플래그를 엄격한 bool로 정규화하는 deserializer
///
/// 정책 계층이 이중 표현을 다시 검사하지 않도록 디코더 경계에서 한 번만
/// 변환합니다.
fn deserialize_verified_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum VerifiedFlag {
        Bool(bool),
        Text(String),
    }

    match Option::<VerifiedFlag>::deserialize(deserializer)? {
        Some(VerifiedFlag::Bool(value)) => Ok(value),
        Some(VerifiedFlag::Text(value)) => Ok(value.eq_ignore_ascii_case("true")),
        None => Ok(false),
    }
}

/// ActixWeb FromRequest trait 구현
///
/// 게이트 미들웨어가 request extension에 넣어둔 신원 정보를 핸들러에서
/// 추출자로 바로 받을 수 있게 합니다.
impl FromRequest for IdentityClaim {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<IdentityClaim>() {
            Some(claim) => ready(Ok(claim.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다"
            ))),
        }
    }
}

/// 선택적 신원 추출자
#[derive(Debug, Clone)]
pub struct OptionalIdentity(pub Option<IdentityClaim>);

impl FromRequest for OptionalIdentity {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let claim = req.extensions().get::<IdentityClaim>().cloned();
        ready(Ok(OptionalIdentity(claim)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_deserializes_camel_case_payload() {
        let json = r#"{
            "id": "64ab00c1d2e3f40567890123",
            "name": "Kim Minsu",
            "email": "minsu@caddcore.net",
            "mobileNumber": "010-1234-5678",
            "role": "user",
            "status": "active",
            "emailVerified": true,
            "profilePhoto": "https://cdn.caddcore.net/p/minsu.png",
            "iat": 1700000000,
            "exp": 1700086400
        }"#;

        let claim: IdentityClaim = serde_json::from_str(json).unwrap();
        assert_eq!(claim.id, "64ab00c1d2e3f40567890123");
        assert_eq!(claim.role, Role::User);
        assert_eq!(claim.mobile_number.as_deref(), Some("010-1234-5678"));
        assert!(claim.email_verified);
    }

    #[test]
    fn test_verified_flag_accepts_string_true() {
        // 백엔드가 문자열 "true"를 내려보내는 경우도 인증된 것으로 처리
        let json = r#"{
            "id": "1", "name": "A", "email": "a@b.c",
            "role": "user", "emailVerified": "true"
        }"#;
        let claim: IdentityClaim = serde_json::from_str(json).unwrap();
        assert!(claim.email_verified);

        let json = r#"{
            "id": "1", "name": "A", "email": "a@b.c",
            "role": "user", "emailVerified": "false"
        }"#;
        let claim: IdentityClaim = serde_json::from_str(json).unwrap();
        assert!(!claim.email_verified);
    }

    #[test]
    fn test_verified_flag_defaults_to_false_when_absent() {
        let json = r#"{"id": "1", "name": "A", "email": "a@b.c", "role": "admin"}"#;
        let claim: IdentityClaim = serde_json::from_str(json).unwrap();
        assert!(!claim.email_verified);
        assert!(claim.is_admin());
    }

    #[test]
    fn test_mongo_style_id_alias() {
        let json = r#"{"_id": "abc123", "name": "A", "email": "a@b.c", "role": "user"}"#;
        let claim: IdentityClaim = serde_json::from_str(json).unwrap();
        assert_eq!(claim.id, "abc123");
    }

    #[test]
    fn test_unknown_role_fails_decode() {
        // 폐쇄 열거형 밖의 역할은 클레임 전체를 거부한다
        let json = r#"{"id": "1", "name": "A", "email": "a@b.c", "role": "superuser"}"#;
        let result: Result<IdentityClaim, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
