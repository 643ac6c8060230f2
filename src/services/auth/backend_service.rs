//! CADD CORE 인증 API 클라이언트
//!
//! 자격 증명 쌍을 발급하는 협력 백엔드와의 통신을 담당합니다.
//! 이 서비스는 인증 엔드포인트를 직접 구현하지 않으며, 백엔드가 발급한
//! 결과를 받아 쿠키 저장소에 채우는 용도로만 사용됩니다.
//!
//! ## 호출하는 엔드포인트
//!
//! | 용도 | 엔드포인트 | 메서드 |
//! |------|------------|--------|
//! | **로그인** | `{base}/auth/login` | POST |
//! | **회원가입** | `{base}/auth/register` | POST |

use singleton_macro::service;
use crate::config::AuthApiConfig;
use crate::core::errors::AppError;
use crate::domain::backend::BackendAuthResponse;
use crate::domain::dto::session::{LoginRequest, RegisterRequest};
use crate::domain::token::TokenPair;

/// 인증 API 클라이언트 서비스
#[service(name = "backend")]
pub struct BackendService {
    // 외부 의존성 없음
}

impl BackendService {
    /// 이메일/비밀번호로 백엔드에 로그인을 요청합니다.
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - 백엔드가 발급한 자격 증명 쌍
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 잘못된 자격 증명 (백엔드 401)
    /// * `AppError::ExternalServiceError` - 통신 실패 또는 응답 해석 불가
    pub async fn login(&self, request: &LoginRequest) -> Result<TokenPair, AppError> {
        self.request_token_pair(
            "/auth/login",
            serde_json::json!({
                "email": request.email,
                "password": request.password,
            }),
        )
        .await
    }

    /// 백엔드에 회원가입을 요청합니다.
    ///
    /// 성공 시 백엔드는 가입과 동시에 자격 증명 쌍을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 이미 등록된 이메일 (백엔드 409)
    /// * `AppError::ExternalServiceError` - 통신 실패 또는 응답 해석 불가
    pub async fn register(&self, request: &RegisterRequest) -> Result<TokenPair, AppError> {
        self.request_token_pair(
            "/auth/register",
            serde_json::json!({
                "name": request.name,
                "email": request.email,
                "password": request.password,
                "mobileNumber": request.mobile_number,
            }),
        )
        .await
    }

    /// 인증 엔드포인트를 호출하고 발급된 자격 증명 쌍을 추출합니다
    async fn request_token_pair(
        &self,
        path: &str,
        payload: serde_json::Value,
    ) -> Result<TokenPair, AppError> {
        let client = reqwest::Client::new();
        let url = format!("{}{}", AuthApiConfig::base_url(), path);

        let response = client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("인증 API 요청 실패: {}", e)))?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AppError::AuthenticationError(
                "이메일 또는 비밀번호가 올바르지 않습니다".to_string(),
            ));
        }

        if status == reqwest::StatusCode::CONFLICT {
            return Err(AppError::ConflictError(
                "이미 등록된 이메일입니다".to_string(),
            ));
        }

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "인증 API 오류 ({}): {}",
                status, error_text
            )));
        }

        let envelope = response
            .json::<BackendAuthResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("인증 API 응답 파싱 실패: {}", e)))?;

        let data = envelope.data.ok_or_else(|| {
            AppError::ExternalServiceError(
                envelope
                    .message
                    .unwrap_or_else(|| "인증 API 응답에 자격 증명이 없습니다".to_string()),
            )
        })?;

        Ok(TokenPair {
            access_token: data.access_token,
            refresh_token: data.refresh_token,
        })
    }
}
