//! 터미널 출력 포맷팅 유틸리티
//!
//! 기동 과정(레지스트리 초기화)의 진행 상황을 박스 제목과 단계 표시로 출력합니다.

/// 박스 내부 폭
const BOX_WIDTH: usize = 50;

/// 가운데 정렬된 제목을 감싸는 3줄 박스를 만듭니다.
pub fn boxed_title(title: &str) -> String {
    let border = "═".repeat(BOX_WIDTH);
    format!("╔{border}╗\n║{:^width$}║\n╚{border}╝", title, width = BOX_WIDTH - 1)
}

pub fn print_boxed_title(title: &str) {
    println!("{}", boxed_title(title));
}

pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 레지스트리 초기화 결과 요약
pub fn print_final_summary(repos: usize, services: usize) {
    println!();
    print_boxed_title("🏪 ERP REGISTRY READY");
    println!("   📦 Repositories: {}", repos);
    println!("   🔧 Services: {}", services);
    println!("   🚀 Total Components: {}", repos + services);
    println!();
}

pub fn print_cache_initialized(cache_type: &str, count: usize) {
    println!("   ├─ {} Cache: {} entries loaded", cache_type, count);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_title_has_three_lines() {
        let boxed = boxed_title("PAYROLL");
        let lines: Vec<&str> = boxed.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with('╔'));
        assert!(lines[1].contains("PAYROLL"));
        assert!(lines[2].ends_with('╝'));
    }
}
