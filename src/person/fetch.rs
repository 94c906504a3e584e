use async_trait::async_trait;
use futures::future::try_join_all;
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::person::decorate::{decorate, format_units};
use crate::person::sort::{sort_people, Order, SortField};
use crate::person::{Page, Person, Planet, Species};

pub mod http;

/// Source of JSON resources addressed by URL.
#[async_trait]
pub trait Fetch: Sync {
    async fn get(&self, url: &str) -> Result<Value>;
}

pub async fn get_as<T, F>(fetcher: &F, url: &str) -> Result<T>
where
    T: DeserializeOwned,
    F: Fetch + ?Sized,
{
    let value = fetcher.get(url).await?;
    Ok(serde_json::from_value(value)?)
}

/// Follows `next` links from `url` one page at a time and concatenates the
/// results in page order.
pub async fn get_all_pages<T, F>(fetcher: &F, url: &str, max_pages: usize) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    F: Fetch + ?Sized,
{
    let mut results = Vec::new();
    let mut next = Some(url.to_string());
    let mut pages = 0;

    while let Some(page_url) = next.take() {
        if pages == max_pages {
            return Err(Error::PageLimit {
                url: url.to_string(),
                max_pages,
            });
        }

        let page: Page<T> = get_as(fetcher, &page_url).await?;
        pages += 1;
        debug!(
            "Page {} from {} has {} results",
            pages,
            page_url,
            page.results.len()
        );

        results.extend(page.results);
        next = page.next;
    }

    info!("Pages={}  Results={}", pages, results.len());

    Ok(results)
}

pub async fn get_species<F>(fetcher: &F, base_url: &str, max_pages: usize) -> Result<Vec<Species>>
where
    F: Fetch + ?Sized,
{
    let url = format!("{}/species/", base_url.trim_end_matches('/'));
    get_all_pages(fetcher, &url, max_pages).await
}

/// Fetches every person at once; the first failure fails the whole batch.
pub async fn get_people<F>(fetcher: &F, urls: &[String]) -> Result<Vec<Person>>
where
    F: Fetch + ?Sized,
{
    let people = try_join_all(urls.iter().map(|url| async move {
        let person: Person = get_as(fetcher, url).await?;
        Ok::<Person, Error>(decorate(person))
    }))
    .await?;

    info!("People={}", people.len());

    Ok(people)
}

/// Everyone of the species at `species_url`, sorted by last name and with
/// their measurements formatted.
pub async fn populate<F>(fetcher: &F, species_url: &str) -> Result<Vec<Person>>
where
    F: Fetch + ?Sized,
{
    let species: Species = get_as(fetcher, species_url).await?;
    info!("Populating {} from {}", species.name, species_url);

    let mut people = get_people(fetcher, &species.people).await?;
    sort_people(&mut people, SortField::SortBy, Order::Asc);

    for person in people.iter_mut() {
        format_units(person);
    }

    Ok(people)
}

pub async fn get_homeworld<F>(fetcher: &F, person: &Person) -> Result<Planet>
where
    F: Fetch + ?Sized,
{
    get_as(fetcher, &person.homeworld).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockFetcher {
        resources: HashMap<String, Value>,
        requests: Mutex<Vec<String>>,
    }

    impl MockFetcher {
        fn with(mut self, url: &str, value: Value) -> Self {
            self.resources.insert(url.to_string(), value);
            self
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Fetch for MockFetcher {
        async fn get(&self, url: &str) -> Result<Value> {
            self.requests.lock().unwrap().push(url.to_string());
            self.resources
                .get(url)
                .cloned()
                .ok_or_else(|| Error::HttpStatus {
                    url: url.to_string(),
                    status: 404,
                })
        }
    }

    fn person_json(name: &str, height: &str, mass: &str) -> Value {
        json!({
            "name": name,
            "height": height,
            "mass": mass,
            "hair_color": "brown",
            "homeworld": "p/1",
        })
    }

    fn three_pages() -> MockFetcher {
        MockFetcher::default()
            .with(
                "s/",
                json!({ "results": [{ "name": "A" }, { "name": "B" }], "next": "s/2" }),
            )
            .with("s/2", json!({ "results": [{ "name": "B" }], "next": "s/3" }))
            .with("s/3", json!({ "results": [{ "name": "C" }], "next": null }))
    }

    #[tokio::test]
    async fn concatenates_pages_in_order() {
        let fetcher = three_pages();
        let species: Vec<Species> = get_all_pages(&fetcher, "s/", 10).await.unwrap();
        let names: Vec<&str> = species.iter().map(|s| s.name.as_str()).collect();

        assert_eq!(names, vec!["A", "B", "B", "C"]);
        assert_eq!(fetcher.requests(), vec!["s/", "s/2", "s/3"]);
    }

    #[tokio::test]
    async fn failed_page_fails_the_collection() {
        let fetcher = MockFetcher::default().with(
            "s/",
            json!({ "results": [{ "name": "A" }], "next": "s/2" }),
        );

        let result: Result<Vec<Species>> = get_all_pages(&fetcher, "s/", 10).await;

        assert!(matches!(result, Err(Error::HttpStatus { status: 404, .. })));
    }

    #[tokio::test]
    async fn malformed_page_is_an_error() {
        let fetcher = MockFetcher::default().with("s/", json!({ "count": 3 }));

        let result: Result<Vec<Species>> = get_all_pages(&fetcher, "s/", 10).await;

        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[tokio::test]
    async fn stops_at_page_limit() {
        let fetcher = three_pages();

        let result: Result<Vec<Species>> = get_all_pages(&fetcher, "s/", 2).await;

        assert!(matches!(
            result,
            Err(Error::PageLimit { max_pages: 2, .. })
        ));
        assert_eq!(fetcher.requests().len(), 2);
    }

    #[tokio::test]
    async fn species_listing_starts_at_base_url() {
        let fetcher = MockFetcher::default().with(
            "https://swapi.dev/api/species/",
            json!({ "results": [{ "name": "Human" }] }),
        );

        let species = get_species(&fetcher, "https://swapi.dev/api/", 10)
            .await
            .unwrap();

        assert_eq!(species.len(), 1);
    }

    #[tokio::test]
    async fn one_failed_person_fails_the_batch() {
        let fetcher =
            MockFetcher::default().with("p/1", person_json("Luke Skywalker", "172", "77"));
        let urls = vec!["p/1".to_string(), "p/2".to_string()];

        let result = get_people(&fetcher, &urls).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn populates_sorted_and_formatted_people() {
        let fetcher = MockFetcher::default()
            .with(
                "species/1/",
                json!({ "name": "Human", "people": ["p/1", "p/2", "p/3"] }),
            )
            .with("p/1", person_json("Luke Skywalker", "172", "77"))
            .with("p/2", person_json("Beru Whitesun lars", "165", "75"))
            .with("p/3", person_json("Leia Organa", "unknown", "unknown"));

        let people = populate(&fetcher, "species/1/").await.unwrap();
        let names: Vec<&str> = people.iter().map(|p| p.name.as_str()).collect();

        assert_eq!(
            names,
            vec!["Beru Whitesun lars", "Leia Organa", "Luke Skywalker"]
        );
        assert_eq!(people[0].sort_by, "LARS Beru Whitesun lars");
        assert_eq!(people[0].height_formatted, "1.65m");
        assert_eq!(people[1].height_formatted, "unknown");
        assert_eq!(people[2].mass_formatted, "77kg");
    }

    #[tokio::test]
    async fn empty_species_populates_nobody() {
        let fetcher = MockFetcher::default().with(
            "species/9/",
            json!({ "name": "Nobody", "people": [] }),
        );

        let people = populate(&fetcher, "species/9/").await.unwrap();

        assert!(people.is_empty());
    }

    #[tokio::test]
    async fn fetches_homeworld_of_person() {
        let fetcher = MockFetcher::default()
            .with("p/1", person_json("Luke Skywalker", "172", "77"))
            .with("p/1/world", json!({ "name": "Tatooine", "climate": "arid" }));
        let mut luke: Person = get_as(&fetcher, "p/1").await.unwrap();
        luke.homeworld = "p/1/world".to_string();

        let planet = get_homeworld(&fetcher, &luke).await.unwrap();

        assert_eq!(planet.name, "Tatooine");
        assert_eq!(planet.details()[2], "Climate: arid");
    }
}
