use soundcloud_backup::parsing::extract_download_link;
use soundcloud_backup::Html;

#[test]
fn test_extracts_link_from_download_element() {
    let html = r#"
        <html><body>
          <div class="result">
            <a class="download-btn" href="https://cdn.example.com/audio/123.mp3">Download MP3</a>
          </div>
        </body></html>
    "#;
    let document = Html::parse_document(html);

    assert_eq!(
        extract_download_link(&document, "a.download-btn"),
        Some("https://cdn.example.com/audio/123.mp3".to_string())
    );
}

#[test]
fn test_each_service_selector_matches_only_its_own_markup() {
    let html = r#"
        <html><body>
          <a class="download-button" href="/files/track.mp3">Get it</a>
        </body></html>
    "#;
    let document = Html::parse_document(html);

    assert_eq!(
        extract_download_link(&document, "a.download-button"),
        Some("/files/track.mp3".to_string())
    );
    assert_eq!(extract_download_link(&document, "a.download-btn"), None);
    assert_eq!(extract_download_link(&document, "a.download-link"), None);
}

#[test]
fn test_missing_element_yields_none() {
    let html = r#"<html><body><p>Conversion failed, try again later.</p></body></html>"#;
    let document = Html::parse_document(html);

    assert_eq!(extract_download_link(&document, "a.download-btn"), None);
}

#[test]
fn test_element_without_href_yields_none() {
    let html = r#"<html><body><a class="download-btn">Download</a></body></html>"#;
    let document = Html::parse_document(html);

    assert_eq!(extract_download_link(&document, "a.download-btn"), None);
}

#[test]
fn test_empty_href_yields_none() {
    let html = r#"<html><body><a class="download-btn" href="   ">Download</a></body></html>"#;
    let document = Html::parse_document(html);

    assert_eq!(extract_download_link(&document, "a.download-btn"), None);
}

#[test]
fn test_first_matching_element_wins() {
    let html = r#"
        <html><body>
          <a class="download-link" href="https://cdn.example.com/first.mp3">First</a>
          <a class="download-link" href="https://cdn.example.com/second.mp3">Second</a>
        </body></html>
    "#;
    let document = Html::parse_document(html);

    assert_eq!(
        extract_download_link(&document, "a.download-link"),
        Some("https://cdn.example.com/first.mp3".to_string())
    );
}
