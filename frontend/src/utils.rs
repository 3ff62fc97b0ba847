use web_sys::window;

/// Get the backend base URL (e.g., "http://localhost:8001" or "https://salon.example").
///
/// A `BACKEND_URL` environment variable at build time pins the backend to a
/// different origin than the one serving the page; otherwise requests go to
/// the page's own origin.
pub fn backend_base_url() -> String {
    if let Some(url) = option_env!("BACKEND_URL") {
        return url.trim_end_matches('/').to_string();
    }

    let window = window().expect("no global window");
    let location = window.location();

    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location
        .host()
        .unwrap_or_else(|_| "localhost:8001".to_string());

    format!("{}//{}", protocol, host)
}

/// Build a full API URL from a path (e.g., "/api/gallery" -> "http://localhost:8001/api/gallery")
pub fn api_url(path: &str) -> String {
    format!("{}{}", backend_base_url(), path)
}

/// Format an ISO timestamp for display, falling back to the raw string
pub fn format_timestamp(ts: &str) -> String {
    let date = js_sys::Date::new(&ts.into());
    if date.get_time().is_nan() {
        return ts.to_string();
    }
    format!(
        "{}-{:02}-{:02} {:02}:{:02}",
        date.get_full_year(),
        date.get_month() + 1,
        date.get_date(),
        date.get_hours(),
        date.get_minutes()
    )
}
