// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持英文（默认）和中文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

/// 支持的语言
pub const SUPPORTED_LOCALES: [&str; 2] = ["en", "zh-CN"];

/// 翻译消息（指定语言,不修改全局语言）
///
/// # 示例
/// ```no_run
/// use aqi_sentry::i18n::t_locale;
/// let msg = t_locale("report.summary_ok", "zh-CN");
/// ```
pub fn t_locale(key: &str, locale: &str) -> String {
    let locale = if SUPPORTED_LOCALES.contains(&locale) {
        locale
    } else {
        "en"
    };
    rust_i18n::t!(key, locale = locale).to_string()
}
