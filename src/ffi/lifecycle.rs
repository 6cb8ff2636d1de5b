//! Library setup called once by the host after loading.

use crate::logging;

/// Installs the logger.
///
/// # Returns
/// true if this call installed it, false if a logger was already present.
#[no_mangle]
pub extern "C" fn na_init_logging() -> bool {
    logging::init_logging()
}
