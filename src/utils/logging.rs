//! 日志工具模块
//!
//! 提供运行横幅和统计输出的辅助函数

use crate::config::Config;
use crate::orchestrator::RunStats;
use tracing::info;

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 答卷拆分模式");
    info!("📂 输入目录: {}", config.input_path.display());
    info!("📂 输出目录: {}", config.output_path.display());
    info!("📊 最大并发数: {}", config.concurrency());
    if config.isolate_failures {
        info!("🛡️ 隔离模式: 单个答卷失败时跳过");
    }
    info!("{}", "=".repeat(60));
}

/// 记录答卷扫描结果
///
/// # 参数
/// - `total`: 答卷总数
pub fn log_submissions_found(total: usize) {
    info!("✓ 找到 {} 份待处理的答卷", total);
}

/// 打印最终统计信息
pub fn print_final_stats(stats: &RunStats, config: &Config) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 解析成功: {}/{}", stats.parsed, stats.scanned);
    if stats.skipped > 0 {
        info!("⚠️ 跳过: {}", stats.skipped);
    }
    info!("📝 写出文件: {}", stats.files_written);
    info!("{}", "=".repeat(60));
    info!("\n结果已保存至: {}", config.output_path.display());
}

/// 日志里的姓名预览，超过 `max_chars` 个字符时截断并加省略号
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
