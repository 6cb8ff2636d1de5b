use std::io::Write;

use log::info;

fn log_format(buf: &mut env_logger::fmt::Formatter, record: &log::Record<'_>) -> std::io::Result<()> {
    match record.module_path() {
        Some(mod_path) => writeln!(buf, "[{}] {}", mod_path, record.args()),
        None => writeln!(buf, "{}", record.args()),
    }
}

/// Install the logger, filtered by `RUST_LOG` (default `info`).
///
/// Returns false if a logger was already installed, by this crate or by the host.
pub fn init_logging() -> bool {
    let installed = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log::Level::Info.as_str()),
    )
    .format(log_format)
    .try_init()
    .is_ok();
    if installed {
        info!("Init rs logging");
    }
    installed
}
