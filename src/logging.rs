//! ログ初期化
//!
//! 進捗表示はstdoutのprintln、診断ログはtracingでstderrに出す。

use tracing_subscriber::EnvFilter;

/// RUST_LOGがあれば優先、なければ --verbose でdebug、通常はwarn
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    // 複数回呼ばれても2回目以降は無視
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
