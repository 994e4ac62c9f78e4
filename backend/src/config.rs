//! Fixed settings of the static host.

use std::time::Duration;

/// Interface the host binds to.
pub const HOST: &str = "127.0.0.1";

/// Port the host listens on.
pub const PORT: u16 = 8080;

/// Delay before opening the browser, so the server is already accepting.
pub const BROWSER_OPEN_DELAY: Duration = Duration::from_millis(500);

/// Embedded directory holding the site-relative photo assets.
pub const PUBLIC_DIR: &str = "public";

pub fn base_url() -> String {
    format!("http://{}:{}", HOST, PORT)
}
