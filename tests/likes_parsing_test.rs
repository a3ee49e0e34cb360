use soundcloud_backup::{Html, LikesParser};
use std::fs;

#[test]
fn test_likes_page_parsing() {
    // Read the saved HTML from test fixtures
    let html_content = fs::read_to_string("tests/fixtures/likes_page_1.html")
        .expect("Could not read test fixture file");

    let document = Html::parse_document(&html_content);
    let parser = LikesParser::new();

    let page = parser
        .parse_likes_page(&document, 1, "https://soundcloud.com")
        .unwrap();

    println!("Parsed {} tracks from likes page", page.tracks.len());
    for (i, track) in page.tracks.iter().enumerate() {
        println!("{}. {} - {} ({})", i + 1, track.artist, track.title, track.url);
    }

    // The fixture contains 7 rows; two are malformed and must be skipped
    assert_eq!(
        page.tracks.len(),
        5,
        "Malformed rows should be skipped, not abort parsing"
    );
    assert_eq!(page.page_number, 1);
    assert!(page.has_next_page, "Fixture links a next page");
}

#[test]
fn test_track_fields_are_extracted() {
    let html_content = fs::read_to_string("tests/fixtures/likes_page_1.html")
        .expect("Could not read test fixture file");

    let document = Html::parse_document(&html_content);
    let parser = LikesParser::new();

    let tracks = parser
        .extract_tracks_from_document(&document, "https://soundcloud.com")
        .unwrap();

    assert_eq!(tracks[0].title, "My Song");
    assert_eq!(tracks[0].artist, "DJ Test");
    // Relative listing links are resolved against the base URL
    assert_eq!(tracks[0].url, "https://soundcloud.com/dj-test/my-song");

    // Absolute links pass through untouched
    assert_eq!(
        tracks[1].url,
        "https://soundcloud.com/aurora-haze/midnight-drive"
    );

    // Surrounding whitespace in link text is trimmed
    assert_eq!(tracks[4].title, "Neon Rain");
    assert_eq!(tracks[4].artist, "Citylights");
}

#[test]
fn test_last_page_has_no_next_link() {
    let html = r#"
        <html><body>
          <div class="trackItem">
            <a class="trackItem__username" href="/solo">Solo</a>
            <a class="trackItem__trackTitle" href="/solo/only-song">Only Song</a>
          </div>
        </body></html>
    "#;

    let document = Html::parse_document(html);
    let parser = LikesParser::new();

    let page = parser
        .parse_likes_page(&document, 3, "https://soundcloud.com")
        .unwrap();

    assert_eq!(page.tracks.len(), 1);
    assert_eq!(page.page_number, 3);
    assert!(!page.has_next_page);
}

#[test]
fn test_empty_document_yields_no_tracks() {
    let document = Html::parse_document("<html><body><p>Nothing here</p></body></html>");
    let parser = LikesParser::new();

    let page = parser
        .parse_likes_page(&document, 1, "https://soundcloud.com")
        .unwrap();

    assert!(page.tracks.is_empty());
    assert!(!page.has_next_page);
}
