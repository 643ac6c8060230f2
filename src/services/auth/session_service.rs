//! 현재 세션 복원 서비스
//!
//! "지금 요청을 보낸 사용자가 누구인가"에 답하는 서비스입니다.
//! 쿠키 저장소와 신원 디코더를 조합하며, 유효한 세션이 없으면 `None`을
//! 반환합니다. 호출 간 캐싱은 없고 매 호출마다 다시 읽고 다시 디코딩합니다
//! (동기적인 로컬 연산이므로 비용이 거의 없음).

use actix_web::HttpRequest;
use singleton_macro::service;
use crate::services::auth::{ClaimsService, CookieService};
use crate::domain::identity::IdentityClaim;

/// 세션 복원 서비스
#[service(name = "session")]
pub struct SessionService {
    // 외부 의존성 없음
}

impl SessionService {
    /// 현재 요청의 사용자 신원을 복원합니다.
    ///
    /// # 동작
    ///
    /// 1. 쿠키 저장소에서 액세스 토큰을 읽는다
    /// 2. 토큰이 없으면 `None` (세션 없음, 정상 익명 상태)
    /// 3. 디코딩을 시도하고, 실패하면 `None`
    ///
    /// 디코딩 실패는 이 경계에서 흡수되어 "세션 없음"과 동일하게
    /// 처리됩니다. 호출자에게 에러가 전파되지 않습니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let session_service = SessionService::instance();
    /// match session_service.resolve_current_user(&req) {
    ///     Some(user) => println!("로그인 사용자: {}", user.email),
    ///     None => println!("익명 사용자"),
    /// }
    /// ```
    pub fn resolve_current_user(&self, req: &HttpRequest) -> Option<IdentityClaim> {
        let cookie_service = CookieService::instance();
        let claims_service = ClaimsService::instance();

        let access_token = cookie_service.access_token(req)?;

        match claims_service.decode(&access_token) {
            Ok(claim) => Some(claim),
            Err(err) => {
                log::debug!("세션 복원 실패, 익명으로 처리: {}", err);
                None
            }
        }
    }
}
