mod common;

use std::sync::Arc;

use common::{BASE, FakeSource, person};
use swapi_browser::api::{PeoplePage, StarWarsSource};
use swapi_browser::characters::{PageCursor, PageFetcher};

fn page_url(n: u32) -> String {
    format!("{}/people/?page={}", BASE, n)
}

fn fake_listing() -> Arc<FakeSource> {
    Arc::new(
        FakeSource::new()
            .with_page(
                "default",
                PeoplePage {
                    count: Some(3),
                    next: Some(page_url(2)),
                    previous: None,
                    results: vec![person(1, "Luke Skywalker"), person(2, "C-3PO")],
                },
            )
            .with_page(
                &page_url(2),
                PeoplePage {
                    count: Some(3),
                    next: None,
                    previous: Some(page_url(1)),
                    results: vec![person(3, "R2-D2")],
                },
            ),
    )
}

#[tokio::test]
async fn test_follow_cursors_through_listing() {
    let fake = fake_listing();
    let source: Arc<dyn StarWarsSource> = fake.clone();
    let fetcher = PageFetcher::new(source);

    let mut first = fetcher.fetch(None).await.unwrap();
    assert_eq!(first.characters.len(), 2);
    assert_eq!(first.current_index, 0);
    assert!(first.cursor_url(PageCursor::Previous).is_none());
    first.select_next();
    assert_eq!(first.selected().unwrap().name, "C-3PO");

    let next = first.cursor_url(PageCursor::Next).unwrap();
    let second = fetcher.fetch(next.as_deref()).await.unwrap();
    assert_eq!(second.current_index, 0);
    assert_eq!(second.selected().unwrap().name, "R2-D2");
    assert!(second.next_blocked());

    assert_eq!(fake.requests(), vec!["page:default".to_string(), format!("page:{}", page_url(2))]);
}

#[tokio::test]
async fn test_missing_page_is_an_error() {
    let fake = fake_listing();
    let source: Arc<dyn StarWarsSource> = fake.clone();

    let result = PageFetcher::new(source).fetch(Some(&page_url(9))).await;

    let err = result.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.url(), page_url(9));
}
