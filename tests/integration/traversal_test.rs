// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{
    landscape_embed_url, landscape_photo, portrait_embed_url, portrait_photo, test_settings,
    ALBUM_URL,
};
use albumrs::browser::scripted::{ScriptedAlbum, ScriptedDriver, ScriptedPage, ScriptedPhoto};
use albumrs::output::CollectSink;
use albumrs::scrape::AlbumScraper;
use albumrs::utils::errors::ScrapeError;

#[tokio::test]
async fn test_scroll_convergence_stops_after_plateau() {
    // Marker count grows for three scroll cycles, then plateaus: the
    // traverser must perform exactly four scroll attempts (three that
    // increase the count plus one that confirms the plateau).
    let album = ScriptedAlbum::new(
        "An Album | Flickr",
        vec![ScriptedPage::new(vec![
            vec![landscape_photo(1)],
            vec![landscape_photo(2)],
            vec![landscape_photo(3)],
            vec![landscape_photo(4)],
        ])],
    );
    let driver = ScriptedDriver::new(album);
    let settings = test_settings();
    let mut sink = CollectSink::new();

    let urls = AlbumScraper::new(&driver, &settings)
        .scrape_album(ALBUM_URL, &mut sink)
        .await
        .unwrap();

    assert_eq!(driver.scroll_count(), 4);
    assert_eq!(urls.len(), 4);
    for n in 1..=4 {
        assert!(urls.contains(&landscape_embed_url(n)));
    }
}

#[tokio::test]
async fn test_pagination_unions_all_pages_without_duplicates() {
    // Photo 2 appears on both pages; the result set and the emitted blocks
    // must both contain it exactly once.
    let album = ScriptedAlbum::new(
        "An Album | Flickr",
        vec![
            ScriptedPage::single(vec![landscape_photo(1), landscape_photo(2)]),
            ScriptedPage::single(vec![landscape_photo(2), portrait_photo(3)]),
            ScriptedPage::single(vec![portrait_photo(4)]),
        ],
    );
    let driver = ScriptedDriver::new(album);
    let settings = test_settings();
    let mut sink = CollectSink::new();

    let urls = AlbumScraper::new(&driver, &settings)
        .scrape_album(ALBUM_URL, &mut sink)
        .await
        .unwrap();

    assert_eq!(urls.len(), 4);
    assert!(urls.contains(&landscape_embed_url(1)));
    assert!(urls.contains(&landscape_embed_url(2)));
    assert!(urls.contains(&portrait_embed_url(3)));
    assert!(urls.contains(&portrait_embed_url(4)));

    // Streamed at-least-once, de-duplicated by embed URL before emission
    assert_eq!(sink.blocks.len(), 4);
}

#[tokio::test]
async fn test_unreachable_page_is_a_navigation_error() {
    let album = ScriptedAlbum::new("Flickr: Oops! There was a Problem", vec![]);
    let driver = ScriptedDriver::new(album);
    let settings = test_settings();
    let mut sink = CollectSink::new();

    let result = AlbumScraper::new(&driver, &settings)
        .scrape_album(ALBUM_URL, &mut sink)
        .await;

    assert!(matches!(result, Err(ScrapeError::Navigation(_))));
    assert!(sink.blocks.is_empty());
}

#[tokio::test]
async fn test_page_without_markers_is_not_an_album() {
    let album = ScriptedAlbum::new(
        "Some Unrelated Page | Flickr",
        vec![ScriptedPage::single(vec![])],
    );
    let driver = ScriptedDriver::new(album);
    let settings = test_settings();
    let mut sink = CollectSink::new();

    let result = AlbumScraper::new(&driver, &settings)
        .scrape_album(ALBUM_URL, &mut sink)
        .await;

    assert!(matches!(result, Err(ScrapeError::NotAnAlbum(_))));
}

#[tokio::test]
async fn test_malformed_hotlink_is_skipped_by_default() {
    let bad = ScriptedPhoto::new(
        "https://www.flickr.com/photos/someone/99/",
        "c1.example.com/1/703/99_554534770b.jpg",
        236,
        157,
        "Photo 99",
    );
    let album = ScriptedAlbum::new(
        "An Album | Flickr",
        vec![ScriptedPage::single(vec![landscape_photo(1), bad])],
    );
    let driver = ScriptedDriver::new(album);
    let settings = test_settings();
    let mut sink = CollectSink::new();

    let urls = AlbumScraper::new(&driver, &settings)
        .scrape_album(ALBUM_URL, &mut sink)
        .await
        .unwrap();

    assert_eq!(urls.len(), 1);
    assert!(urls.contains(&landscape_embed_url(1)));
    assert_eq!(sink.blocks.len(), 1);
}

#[tokio::test]
async fn test_malformed_hotlink_aborts_in_strict_mode() {
    let bad = ScriptedPhoto::new(
        "https://www.flickr.com/photos/someone/99/",
        "c1.example.com/1/703/99_554534770b.jpg",
        236,
        157,
        "Photo 99",
    );
    let album = ScriptedAlbum::new(
        "An Album | Flickr",
        vec![ScriptedPage::single(vec![bad])],
    );
    let driver = ScriptedDriver::new(album);
    let mut settings = test_settings();
    settings.traversal.strict_urls = true;
    let mut sink = CollectSink::new();

    let result = AlbumScraper::new(&driver, &settings)
        .scrape_album(ALBUM_URL, &mut sink)
        .await;

    assert!(matches!(result, Err(ScrapeError::MalformedUrl(_))));
}

#[tokio::test]
async fn test_unparsable_style_is_skipped_by_default() {
    let styleless = ScriptedPhoto::with_style(
        "https://www.flickr.com/photos/someone/98/",
        "transform: translate(0px, 0px);",
        "Photo 98",
    );
    let album = ScriptedAlbum::new(
        "An Album | Flickr",
        vec![ScriptedPage::single(vec![styleless, portrait_photo(2)])],
    );
    let driver = ScriptedDriver::new(album);
    let settings = test_settings();
    let mut sink = CollectSink::new();

    let urls = AlbumScraper::new(&driver, &settings)
        .scrape_album(ALBUM_URL, &mut sink)
        .await
        .unwrap();

    assert_eq!(urls.len(), 1);
    assert!(urls.contains(&portrait_embed_url(2)));
}

#[tokio::test]
async fn test_unparsable_style_aborts_in_strict_mode() {
    let styleless = ScriptedPhoto::with_style(
        "https://www.flickr.com/photos/someone/98/",
        "transform: translate(0px, 0px);",
        "Photo 98",
    );
    let album = ScriptedAlbum::new(
        "An Album | Flickr",
        vec![ScriptedPage::single(vec![styleless])],
    );
    let driver = ScriptedDriver::new(album);
    let mut settings = test_settings();
    settings.traversal.strict_urls = true;
    let mut sink = CollectSink::new();

    let result = AlbumScraper::new(&driver, &settings)
        .scrape_album(ALBUM_URL, &mut sink)
        .await;

    assert!(matches!(result, Err(ScrapeError::Conversion(_))));
}
