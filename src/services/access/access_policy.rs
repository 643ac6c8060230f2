//! 라우트 접근 정책
//!
//! (요청 경로, 신원 또는 익명) → 접근 결정을 계산하는 순수 정책 계층입니다.
//! 부수 효과와 저장 상태가 없으며, 평가는 전역 함수로 실패하지 않습니다:
//! 모든 (경로, 신원) 조합이 정의된 결정으로 매핑됩니다.
//!
//! 정책 테이블은 생성 시점에 명시적으로 주입되는 불변 값이므로,
//! 대체 테이블로 독립적인 테스트가 가능합니다.

use crate::config::Role;
use crate::domain::access::AccessDecision;
use crate::domain::identity::IdentityClaim;

/// 로그인 페이지 경로 (미인증 리다이렉트 대상)
pub const LOGIN_ROUTE: &str = "/login";

/// 이메일 인증 안내 페이지 경로 (미인증 이메일 리다이렉트 대상)
pub const VERIFY_EMAIL_ROUTE: &str = "/verify-email";

/// 경로 패턴
///
/// 역할별 허용 규칙에 사용되는 매칭 단위입니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPattern {
    /// 경로가 정확히 일치해야 함
    Exact(String),
    /// 해당 경로 또는 그 하위 경로와 일치 (`/dashboard`, `/dashboard/...`)
    Prefix(String),
}

impl PathPattern {
    /// 요청 경로가 이 패턴과 일치하는지 확인
    pub fn matches(&self, path: &str) -> bool {
        match self {
            PathPattern::Exact(expected) => path == expected,
            PathPattern::Prefix(prefix) => path_under(path, prefix),
        }
    }
}

/// 경로가 주어진 접두 트리에 속하는지 확인 (`p` 자체 또는 `p/...`)
fn path_under(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// 라우트 접근 정책 테이블
///
/// 공개 라우트, 보호 접두 경로, 역할별 허용 패턴의 순서 있는 매핑입니다.
/// 초기화 이후 읽기 전용이며 런타임 변경은 없습니다.
#[derive(Debug, Clone)]
pub struct PolicyTable {
    /// 세션 여부와 무관하게 항상 통과되는 경로 (정확히 일치)
    public_routes: Vec<String>,
    /// 복원된 신원이 필요한 경로 트리
    protected_prefixes: Vec<String>,
    /// 역할 → 허용 패턴 목록
    role_rules: Vec<(Role, Vec<PathPattern>)>,
}

impl PolicyTable {
    /// 명시적으로 구성된 테이블을 생성합니다.
    pub fn new(
        public_routes: Vec<String>,
        protected_prefixes: Vec<String>,
        role_rules: Vec<(Role, Vec<PathPattern>)>,
    ) -> Self {
        Self {
            public_routes,
            protected_prefixes,
            role_rules,
        }
    }

    /// CADD CORE 플랫폼의 기본 정책 테이블을 생성합니다.
    ///
    /// - 공개: `/login`, `/register`, `/verify-email`
    /// - 보호: `/dashboard` 트리, `/user-profile` 트리
    /// - 관리자는 대시보드 전체, 나머지 역할은 본인 프로필 영역에 접근
    pub fn standard() -> Self {
        Self::new(
            vec![
                LOGIN_ROUTE.to_string(),
                "/register".to_string(),
                VERIFY_EMAIL_ROUTE.to_string(),
            ],
            vec!["/dashboard".to_string(), "/user-profile".to_string()],
            vec![
                (Role::Admin, vec![PathPattern::Prefix("/dashboard".to_string())]),
                (Role::User, vec![PathPattern::Prefix("/user-profile".to_string())]),
                (Role::Instructor, vec![PathPattern::Prefix("/user-profile".to_string())]),
                (Role::Moderator, vec![PathPattern::Prefix("/user-profile".to_string())]),
                (Role::Support, vec![PathPattern::Prefix("/user-profile".to_string())]),
            ],
        )
    }

    /// 경로가 공개 라우트인지 확인 (정확히 일치)
    pub fn is_public(&self, path: &str) -> bool {
        self.public_routes.iter().any(|route| route == path)
    }

    /// 경로가 보호 트리에 속하는지 확인
    pub fn is_protected(&self, path: &str) -> bool {
        self.protected_prefixes
            .iter()
            .any(|prefix| path_under(path, prefix))
    }

    /// 역할의 허용 패턴 목록을 반환 (등록되지 않은 역할이면 None)
    pub fn patterns_for(&self, role: Role) -> Option<&[PathPattern]> {
        self.role_rules
            .iter()
            .find(|(rule_role, _)| *rule_role == role)
            .map(|(_, patterns)| patterns.as_slice())
    }
}

/// 라우트 접근 정책
///
/// 주입된 테이블에 대해 고정된 우선순위로 규칙을 평가합니다.
/// 먼저 일치하는 규칙이 이기며, 규칙 재평가는 없습니다.
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    table: PolicyTable,
}

impl AccessPolicy {
    /// 주어진 테이블로 정책을 생성합니다.
    pub fn new(table: PolicyTable) -> Self {
        Self { table }
    }

    /// 기본 테이블로 정책을 생성합니다.
    pub fn standard() -> Self {
        Self::new(PolicyTable::standard())
    }

    /// 요청 경로와 신원으로 접근 결정을 계산합니다.
    ///
    /// 평가 순서 (먼저 일치하는 규칙이 승리):
    ///
    /// 1. 공개 라우트는 세션 여부와 무관하게 통과
    ///    (이미 로그인한 사용자도 `/login`에 접근 가능 - 의도된 동작)
    /// 2. 익명 + 보호 경로 → 로그인 페이지로 리다이렉트
    ///    (원래 경로를 `redirect` 쿼리 파라미터로 전달)
    /// 3. 익명 + 그 외 경로 → 통과
    /// 4. 이메일 미인증 + 보호 경로 → 인증 안내 페이지로 리다이렉트
    /// 5. 역할 패턴 일치 → 통과
    /// 6. 보호 경로에서 역할 불일치 → 역할 기본 랜딩 경로로 리다이렉트
    /// 7. 그 외 모든 경로 → 통과
    pub fn evaluate(&self, path: &str, identity: Option<&IdentityClaim>) -> AccessDecision {
        if self.table.is_public(path) {
            return AccessDecision::Allow;
        }

        let claim = match identity {
            Some(claim) => claim,
            None => {
                if self.table.is_protected(path) {
                    return AccessDecision::Redirect(format!(
                        "{}?redirect={}",
                        LOGIN_ROUTE,
                        urlencoding::encode(path)
                    ));
                }
                return AccessDecision::Allow;
            }
        };

        if self.table.is_protected(path) && !claim.email_verified {
            return AccessDecision::Redirect(VERIFY_EMAIL_ROUTE.to_string());
        }

        if let Some(patterns) = self.table.patterns_for(claim.role) {
            if patterns.iter().any(|pattern| pattern.matches(path)) {
                return AccessDecision::Allow;
            }
        }

        if self.table.is_protected(path) {
            return AccessDecision::Redirect(claim.role.home_path().to_string());
        }

        AccessDecision::Allow
    }
}
