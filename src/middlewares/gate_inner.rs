//! AccessGate 평가 로직의 핵심 기능
use std::rc::Rc;
use std::sync::Arc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;
use crate::domain::access::AccessDecision;
use crate::services::access::AccessPolicy;
use crate::services::auth::SessionService;

/// 실제 게이트 평가를 수행하는 서비스
pub struct AccessGateService<S> {
    pub service: Rc<S>,
    pub policy: Arc<AccessPolicy>,
}

impl<S, B> Service<ServiceRequest> for AccessGateService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let policy = self.policy.clone();

        Box::pin(async move {
            let session_service = SessionService::instance();

            // 세션 복원 (실패는 익명으로 정규화됨)
            let identity = session_service.resolve_current_user(req.request());
            let path = req.path().to_string();

            // 정책 평가 후 결정 수행
            match policy.evaluate(&path, identity.as_ref()) {
                AccessDecision::Allow => {
                    // 복원된 신원을 Request Extensions에 저장
                    if let Some(claim) = identity {
                        log::debug!("접근 허용: {} (사용자 ID {})", path, claim.id);
                        req.extensions_mut().insert(claim);
                    } else {
                        log::debug!("접근 허용: {} (익명)", path);
                    }

                    // 다음 서비스로 요청 전달
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                },
                AccessDecision::Redirect(target) => {
                    log::debug!("접근 차단: {} → {}", path, target);

                    let response = HttpResponse::Found()
                        .insert_header((header::LOCATION, target))
                        .finish();
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response)
                        .map_into_right_body();
                    Ok(res)
                },
            }
        })
    }
}
