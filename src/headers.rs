use http_client::Request;

/// Desktop Chrome user agent string sent with every outbound request
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Add common browser headers to a request
pub fn add_common_headers(request: &mut Request) {
    let _ = request.insert_header("User-Agent", USER_AGENT);
    let _ = request.insert_header("Accept-Language", "en-US,en;q=0.9");
    let _ = request.insert_header("Connection", "keep-alive");
}

/// Add headers for HTML page GETs (likes listing and conversion pages)
pub fn add_page_headers(request: &mut Request) {
    add_common_headers(request);
    let _ = request.insert_header(
        "Accept",
        "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
    );
}

/// Add headers for audio file GETs
pub fn add_download_headers(request: &mut Request) {
    add_common_headers(request);
    let _ = request.insert_header("Accept", "*/*");
}
