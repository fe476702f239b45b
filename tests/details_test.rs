mod common;

use std::sync::Arc;

use common::{FakeSource, person};
use swapi_browser::api::{ReferenceKind, StarWarsSource};
use swapi_browser::characters::{Character, DetailAggregator};

fn film_url(n: u32) -> String {
    format!("{}/films/{}/", common::BASE, n)
}

fn aggregator(fake: &Arc<FakeSource>) -> DetailAggregator {
    let source: Arc<dyn StarWarsSource> = fake.clone();
    DetailAggregator::new(source)
}

#[tokio::test]
async fn test_order_follows_input_not_completion() {
    let urls: Vec<String> = (1..=3).map(film_url).collect();
    let permutations = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];

    for order in permutations {
        let mut fake = FakeSource::new();
        for (position, index) in order.iter().enumerate() {
            let url = &urls[*index];
            fake = fake
                .with_reference(url, &format!("Film {}", index + 1))
                .with_delay(&format!("film:{}", url), (3 - position as u64) * 15);
        }
        let fake = Arc::new(fake);

        let input: Vec<String> = order.iter().map(|i| urls[*i].clone()).collect();
        let names = aggregator(&fake).resolve_list(ReferenceKind::Film, &input).await;

        let expected: Vec<String> = order.iter().map(|i| format!("Film {}", i + 1)).collect();
        assert_eq!(names, expected);
    }
}

#[tokio::test]
async fn test_failed_reference_is_left_out() {
    let urls: Vec<String> = (1..=3).map(film_url).collect();
    let fake = Arc::new(
        FakeSource::new()
            .with_reference(&urls[0], "A New Hope")
            .with_failing_reference(&urls[1])
            .with_reference(&urls[2], "Return of the Jedi"),
    );

    let names = aggregator(&fake).resolve_list(ReferenceKind::Film, &urls).await;

    assert_eq!(names, vec!["A New Hope", "Return of the Jedi"]);
}

#[tokio::test]
async fn test_aggregate_fills_all_three_lists() {
    let vehicle = format!("{}/vehicles/14/", common::BASE);
    let starship = format!("{}/starships/12/", common::BASE);
    let fake = Arc::new(
        FakeSource::new()
            .with_reference(&film_url(1), "A New Hope")
            .with_reference(&vehicle, "Snowspeeder")
            .with_reference(&starship, "X-wing"),
    );

    let mut record = person(1, "Luke Skywalker");
    record.films = vec![film_url(1)];
    record.vehicles = vec![vehicle.clone()];
    record.starships = vec![starship.clone()];
    let character = Character::from_record(record, None).unwrap();

    let details = aggregator(&fake).aggregate(&character).await;

    assert_eq!(details.character_id, character.id);
    assert_eq!(details.films, vec!["A New Hope"]);
    assert_eq!(details.vehicles, vec!["Snowspeeder"]);
    assert_eq!(details.starships, vec!["X-wing"]);
    assert!(fake.requests().contains(&format!("vehicle:{}", vehicle)));
    assert!(fake.requests().contains(&format!("starship:{}", starship)));
}

#[tokio::test]
async fn test_character_without_references_issues_no_request() {
    let fake = Arc::new(FakeSource::new());
    let character = Character::from_record(person(4, "Darth Vader"), None).unwrap();

    let details = aggregator(&fake).aggregate(&character).await;

    assert!(details.films.is_empty());
    assert!(details.vehicles.is_empty());
    assert!(details.starships.is_empty());
    assert!(fake.requests().is_empty());
}
