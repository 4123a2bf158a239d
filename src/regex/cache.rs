/// Compile a pattern into a static, reused on every subsequent call. The
/// scanner's recognizers run once per line per request, so each pattern is
/// built exactly once for the life of the process.
#[macro_export]
macro_rules! pattern {
    ($text:expr) => {{
        use std::sync::OnceLock;
        static PATTERN: OnceLock<regex::Regex> = OnceLock::new();
        PATTERN.get_or_init(|| regex::Regex::new($text).unwrap_or_else(|e| panic!("{}", e)))
    }};
}
