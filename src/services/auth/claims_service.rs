//! 액세스 토큰 신원 디코딩 서비스
//!
//! 불투명한 액세스 토큰을 구조화된 신원 클레임으로 디코딩합니다.
//! 서명과 만료는 검증하지 않습니다. 토큰 유효성의 최종 판단은 백엔드
//! 인증 API의 책임이며, 이 계층은 요청마다 네트워크 왕복을 피하기 위해
//! 구조적으로 유효한 토큰을 신뢰하는 의도된 신뢰 경계입니다.
//! (그 대가로 서버 측 폐기는 로컬에서 감지하지 못합니다.)

use std::collections::HashSet;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use singleton_macro::service;
use crate::core::errors::AppError;
use crate::domain::identity::IdentityClaim;

/// 신원 디코딩 서비스
///
/// 순수하고 동기적인 로컬 연산만 수행하며, 네트워크 호출이 없습니다.
#[service(name = "claims")]
pub struct ClaimsService {
    // 외부 의존성 없음
}

impl ClaimsService {
    /// 액세스 토큰을 신원 클레임으로 디코딩합니다.
    ///
    /// 구조적 디코딩만 수행합니다: 3개 세그먼트의 JWT 형식이고 페이로드가
    /// 클레임 형태로 역직렬화되면 성공합니다. 만료되었지만 구조적으로
    /// 유효한 토큰도 성공적으로 디코딩됩니다.
    ///
    /// # Arguments
    ///
    /// * `access_token` - 디코딩할 액세스 토큰 문자열
    ///
    /// # Returns
    ///
    /// * `Ok(IdentityClaim)` - 디코딩된 신원 클레임
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 잘못된 형식, 페이로드 해석 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let claims_service = ClaimsService::instance();
    /// let claim = claims_service.decode(&access_token)?;
    /// println!("User ID: {}", claim.id);
    /// ```
    pub fn decode(&self, access_token: &str) -> Result<IdentityClaim, AppError> {
        let decoding_key = DecodingKey::from_secret(&[]);

        // 구조적 디코딩 전용 설정: 서명/만료/필수 클레임 검증 비활성화
        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.required_spec_claims = HashSet::new();

        decode::<IdentityClaim>(access_token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::InvalidToken => {
                    AppError::AuthenticationError("유효하지 않은 토큰 형식입니다".to_string())
                },
                jsonwebtoken::errors::ErrorKind::Base64(_) => {
                    AppError::AuthenticationError("토큰 페이로드를 디코딩할 수 없습니다".to_string())
                },
                jsonwebtoken::errors::ErrorKind::Json(_) => {
                    AppError::AuthenticationError("토큰 클레임을 해석할 수 없습니다".to_string())
                },
                jsonwebtoken::errors::ErrorKind::Utf8(_) => {
                    AppError::AuthenticationError("토큰 페이로드 인코딩이 올바르지 않습니다".to_string())
                },
                _ => AppError::InternalError(format!("토큰 디코딩 실패: {}", e))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use crate::config::Role;

    /// 테스트용 액세스 토큰 생성 (임의의 키로 서명 - 디코더는 서명을 보지 않음)
    fn mint_token(payload: serde_json::Value) -> String {
        encode(
            &Header::default(),
            &payload,
            &EncodingKey::from_secret(b"test-signing-key"),
        )
        .unwrap()
    }

    #[test]
    fn test_decode_roundtrip_preserves_identity_fields() {
        let token = mint_token(serde_json::json!({
            "id": "64ab00c1d2e3f40567890123",
            "name": "Lee Jiwon",
            "email": "jiwon@caddcore.net",
            "mobileNumber": "010-9876-5432",
            "role": "admin",
            "status": "active",
            "emailVerified": true,
            "profilePhoto": "https://cdn.caddcore.net/p/jiwon.png"
        }));

        let claim = ClaimsService::instance().decode(&token).unwrap();
        assert_eq!(claim.id, "64ab00c1d2e3f40567890123");
        assert_eq!(claim.email, "jiwon@caddcore.net");
        assert_eq!(claim.role, Role::Admin);
        assert!(claim.email_verified);
    }

    #[test]
    fn test_decode_accepts_expired_token() {
        // 만료는 로컬에서 검사하지 않는다 - 구조적으로 유효하면 통과
        let token = mint_token(serde_json::json!({
            "id": "1",
            "name": "A",
            "email": "a@b.c",
            "role": "user",
            "emailVerified": true,
            "iat": 1500000000,
            "exp": 1500003600
        }));

        let claim = ClaimsService::instance().decode(&token).unwrap();
        assert_eq!(claim.id, "1");
    }

    #[test]
    fn test_decode_normalizes_string_verified_flag() {
        let token = mint_token(serde_json::json!({
            "id": "2",
            "name": "B",
            "email": "b@c.d",
            "role": "user",
            "emailVerified": "true"
        }));

        let claim = ClaimsService::instance().decode(&token).unwrap();
        assert!(claim.email_verified);
    }

    #[test]
    fn test_decode_rejects_malformed_token() {
        let service = ClaimsService::instance();

        assert!(service.decode("not-a-jwt").is_err());
        assert!(service.decode("only.two").is_err());
        assert!(service.decode("").is_err());
        assert!(service.decode("!!!.@@@.###").is_err());
    }

    #[test]
    fn test_decode_rejects_payload_missing_required_claims() {
        // 역할이 없는 페이로드는 신원으로 인정하지 않는다
        let token = mint_token(serde_json::json!({
            "id": "3",
            "name": "C",
            "email": "c@d.e"
        }));

        assert!(ClaimsService::instance().decode(&token).is_err());
    }
}
