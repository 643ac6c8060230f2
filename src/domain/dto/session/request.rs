//! 세션 수립 요청 DTO
//!
//! 세션을 수립하려는 사용자들의 요청 정보를 매핑합니다.
//! 자격 증명 검증 자체는 백엔드 인증 API의 책임이며,
//! 여기서는 형식 검증만 수행합니다.

use serde::Deserialize;
use validator::Validate;
use crate::utils::string_utils::deserialize_optional_string;

/// 로그인 요청 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// 회원가입 요청 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 50, message = "이름은 2-50자 사이여야 합니다"))]
    pub name: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    pub password: String,

    /// 휴대폰 번호 (선택사항, 빈 문자열은 None으로 정규화)
    #[serde(
        rename = "mobileNumber",
        default,
        deserialize_with = "deserialize_optional_string"
    )]
    pub mobile_number: Option<String>,
}
