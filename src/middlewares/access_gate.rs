//! 라우트 접근 게이트 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 요청마다 세션을 복원하고 접근 정책을
//! 평가하여, 통과 또는 리다이렉트를 수행합니다.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::gate_inner::AccessGateService;
use crate::services::access::{AccessPolicy, PolicyTable};

/// 라우트 접근 게이트
///
/// 정책 테이블은 게이트 생성 시점에 주입되어 이후 변경되지 않습니다.
pub struct AccessGate {
    /// 평가에 사용할 접근 정책
    policy: Arc<AccessPolicy>,
}

impl AccessGate {
    /// 주어진 정책으로 게이트 생성
    pub fn new(policy: AccessPolicy) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }

    /// 기본 정책 테이블을 사용하는 게이트 생성
    pub fn standard() -> Self {
        Self::new(AccessPolicy::standard())
    }

    /// 커스텀 테이블을 사용하는 게이트 생성
    pub fn with_table(table: PolicyTable) -> Self {
        Self::new(AccessPolicy::new(table))
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AccessGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AccessGateService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AccessGateService {
            service: Rc::new(service),
            policy: self.policy.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::cookie::Cookie;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, web, App, HttpResponse};
    use jsonwebtoken::{encode, EncodingKey, Header};
    use crate::services::auth::cookie_service::ACCESS_TOKEN_COOKIE;

    fn mint_token(role: &str, verified: serde_json::Value) -> String {
        encode(
            &Header::default(),
            &serde_json::json!({
                "id": "64ab00c1d2e3f40567890123",
                "name": "Test User",
                "email": "test@caddcore.net",
                "role": role,
                "emailVerified": verified
            }),
            &EncodingKey::from_secret(b"test-signing-key"),
        )
        .unwrap()
    }

    macro_rules! gated_app {
        () => {
            test::init_service(
                App::new()
                    .wrap(AccessGate::standard())
                    .route("/login", web::get().to(HttpResponse::Ok))
                    .route("/courses", web::get().to(HttpResponse::Ok))
                    .route("/dashboard/add-videos", web::get().to(HttpResponse::Ok))
                    .route("/user-profile", web::get().to(HttpResponse::Ok)),
            )
        };
    }

    #[actix_web::test]
    async fn test_anonymous_open_route_passes_through() {
        let app = gated_app!().await;

        let req = test::TestRequest::get().uri("/courses").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_anonymous_dashboard_redirects_to_login() {
        let app = gated_app!().await;

        let req = test::TestRequest::get()
            .uri("/dashboard/add-videos")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::FOUND);
        let location = res.headers().get(header::LOCATION).unwrap();
        assert_eq!(
            location.to_str().unwrap(),
            "/login?redirect=%2Fdashboard%2Fadd-videos"
        );
    }

    #[actix_web::test]
    async fn test_admin_session_reaches_dashboard() {
        let app = gated_app!().await;

        let req = test::TestRequest::get()
            .uri("/dashboard/add-videos")
            .cookie(Cookie::new(ACCESS_TOKEN_COOKIE, mint_token("admin", true.into())))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_user_session_on_dashboard_redirects_home() {
        let app = gated_app!().await;

        let req = test::TestRequest::get()
            .uri("/dashboard/add-videos")
            .cookie(Cookie::new(ACCESS_TOKEN_COOKIE, mint_token("user", true.into())))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::FOUND);
        let location = res.headers().get(header::LOCATION).unwrap();
        assert_eq!(location.to_str().unwrap(), "/user-profile");
    }

    #[actix_web::test]
    async fn test_unverified_session_redirects_to_verification() {
        let app = gated_app!().await;

        // 문자열 "false" 플래그도 미인증으로 처리된다
        let req = test::TestRequest::get()
            .uri("/user-profile")
            .cookie(Cookie::new(
                ACCESS_TOKEN_COOKIE,
                mint_token("user", "false".into()),
            ))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::FOUND);
        let location = res.headers().get(header::LOCATION).unwrap();
        assert_eq!(location.to_str().unwrap(), "/verify-email");
    }

    #[actix_web::test]
    async fn test_login_route_open_even_with_session() {
        let app = gated_app!().await;

        let req = test::TestRequest::get()
            .uri("/login")
            .cookie(Cookie::new(ACCESS_TOKEN_COOKIE, mint_token("user", true.into())))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_identity_inserted_for_downstream_extractors() {
        use crate::domain::identity::{IdentityClaim, OptionalIdentity};

        // 게이트가 복원한 신원을 핸들러가 추출자로 받을 수 있어야 한다
        let app = test::init_service(
            App::new()
                .wrap(AccessGate::standard())
                .route(
                    "/user-profile",
                    web::get().to(|claim: IdentityClaim| async move {
                        HttpResponse::Ok().body(claim.email)
                    }),
                )
                .route(
                    "/courses",
                    web::get().to(|identity: OptionalIdentity| async move {
                        match identity.0 {
                            Some(claim) => HttpResponse::Ok().body(claim.id),
                            None => HttpResponse::Ok().body("anonymous"),
                        }
                    }),
                ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/user-profile")
            .cookie(Cookie::new(ACCESS_TOKEN_COOKIE, mint_token("user", true.into())))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = test::read_body(res).await;
        assert_eq!(body, "test@caddcore.net");

        // 공개 경로의 익명 요청은 신원 없이 통과한다
        let req = test::TestRequest::get().uri("/courses").to_request();
        let res = test::call_service(&app, req).await;
        let body = test::read_body(res).await;
        assert_eq!(body, "anonymous");
    }

    #[actix_web::test]
    async fn test_corrupted_cookie_treated_as_anonymous() {
        let app = gated_app!().await;

        let req = test::TestRequest::get()
            .uri("/user-profile")
            .cookie(Cookie::new(ACCESS_TOKEN_COOKIE, "garbage-token"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::FOUND);
        let location = res.headers().get(header::LOCATION).unwrap();
        assert_eq!(location.to_str().unwrap(), "/login?redirect=%2Fuser-profile");
    }
}
