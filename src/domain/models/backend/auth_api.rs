//! CADD CORE 인증 API 통합 모델
//!
//! 외부 인증 API의 응답 봉투를 매핑합니다. 이 서비스는 토큰을 직접
//! 발급하지 않으며, API가 발급한 자격 증명 쌍을 읽어오기만 합니다.

use serde::Deserialize;

/// 인증 API 공통 응답 봉투
///
/// `POST /auth/login`, `POST /auth/register`의 응답 형식입니다.
#[derive(Debug, Deserialize)]
pub struct BackendAuthResponse {
    /// 요청 성공 여부
    #[serde(default)]
    pub success: bool,
    /// 사람이 읽을 수 있는 결과 메시지
    #[serde(default)]
    pub message: Option<String>,
    /// 발급된 자격 증명 (성공 시에만 존재)
    pub data: Option<BackendTokenData>,
}

/// 발급된 자격 증명 쌍 (camelCase 와이어 형식)
#[derive(Debug, Deserialize)]
pub struct BackendTokenData {
    #[serde(rename = "accessToken")]
    pub access_token: String,
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response_deserializes_success_envelope() {
        let json = r#"{
            "success": true,
            "message": "Login successful",
            "data": {
                "accessToken": "header.payload.sig",
                "refreshToken": "header.payload2.sig"
            }
        }"#;

        let response: BackendAuthResponse = serde_json::from_str(json).unwrap();
        assert!(response.success);
        let data = response.data.unwrap();
        assert_eq!(data.access_token, "header.payload.sig");
        assert_eq!(data.refresh_token, "header.payload2.sig");
    }

    #[test]
    fn test_auth_response_tolerates_missing_fields() {
        let json = r#"{"message": "Invalid credentials"}"#;
        let response: BackendAuthResponse = serde_json::from_str(json).unwrap();
        assert!(!response.success);
        assert!(response.data.is_none());
    }
}
