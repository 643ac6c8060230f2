//! 터미널 출력 포맷팅 유틸리티
//!
//! 애플리케이션 초기화 과정에서 사용되는 터미널 출력 함수들을 제공합니다.
//! 박스 형태의 제목, 진행 단계 표시, 완료 상태 등을 시각적으로 표현합니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// Unicode 박스 문자를 사용하여 시각적으로 눈에 띄는 제목을 출력합니다.
/// 텍스트는 자동으로 중앙 정렬됩니다.
///
/// # Examples
///
/// ```rust,ignore
/// use crate::utils::display_terminal::print_boxed_title;
///
/// print_boxed_title("Gate Service Started");
/// ```
pub fn print_boxed_title(title: &str) {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);
    println!("╚{}╝", border);
}

/// 진행 단계 시작을 표시합니다
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 표시합니다
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {} complete: {} ({})", step, description, count);
}

/// 하위 작업 상태를 표시합니다
pub fn print_sub_task(name: &str, status: &str) {
    println!("    · {} {}", name, status);
}

/// 이름 캐시 초기화 결과를 표시합니다
pub fn print_cache_initialized(kind: &str, count: usize) {
    println!("  ⚡ {} name cache initialized ({} entries)", kind, count);
}

/// 초기화 최종 요약을 출력합니다
pub fn print_final_summary(repo_count: usize, service_count: usize) {
    println!("──────────────────────────────────────────────────");
    println!(
        "  Registry ready: {} repositories, {} services",
        repo_count, service_count
    );
    println!("──────────────────────────────────────────────────");
}
