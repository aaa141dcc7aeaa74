#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    option_env!("BACKEND_URL").unwrap_or("http://localhost:8001")  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    option_env!("BACKEND_URL").unwrap_or("")  // Production URL, same origin
}

pub fn api_url(path: &str) -> String {
    format!("{}/api{}", get_backend_url(), path)
}

/// How long a toast stays on screen before it dismisses itself.
pub const TOAST_DURATION_MS: u32 = 4_000;

/// Number of entries shown under "Your Recent Activity".
pub const RECENT_ACTIVITY_LIMIT: usize = 5;
