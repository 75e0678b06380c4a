use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ============ List query ============

/// Query parameters for the character list endpoint.
///
/// This is the application's Query State: the pair of values that fully
/// determines what the list shows. Pages are 1-indexed. The type doubles as
/// the deep-link format — [`from_query_string`](Self::from_query_string) and
/// [`to_query_string`](Self::to_query_string) round-trip the
/// `search=…&page=…` form the original web UI kept in the address bar.
///
/// # Default
///
/// The default is `page = 1, search = ""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// Page number (1-indexed).
    pub page: u32,
    /// Search term; empty means "no filter".
    pub search: String,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            search: String::new(),
        }
    }
}

impl ListQuery {
    /// Clamp query values to valid ranges (`page >= 1`).
    #[must_use]
    pub fn validated(&self) -> Self {
        Self {
            page: self.page.max(1),
            search: self.search.clone(),
        }
    }

    /// Commit a new search term. Always resets the page to 1.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    /// Advance to the next page, keeping the search term.
    pub fn next_page(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    /// Go back one page, keeping the search term. Saturates at page 1.
    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Parse a query string of the `search=…&page=…` form.
    ///
    /// A leading `?` is tolerated, values are percent-decoded (`+` counts as
    /// a space), unknown keys are ignored, and missing or unparseable values
    /// fall back to the defaults. The result is always validated.
    #[must_use]
    pub fn from_query_string(raw: &str) -> Self {
        let mut query = Self::default();
        let raw = raw.trim_start_matches('?');

        for pair in raw.split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            // application/x-www-form-urlencoded 中空格编码为 '+'
            let value = value.replace('+', " ");
            let Ok(value) = urlencoding::decode(&value) else {
                continue;
            };
            match key {
                "search" => query.search = value.into_owned(),
                "page" => {
                    if let Ok(page) = value.parse::<u32>() {
                        query.page = page;
                    }
                }
                _ => {}
            }
        }

        query.validated()
    }

    /// Serialize back into the `search=…&page=…` form.
    ///
    /// Both keys are always present, matching what the original UI wrote
    /// into the address bar. The search term is percent-encoded. The same
    /// string is the query component of the list request URL.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        format!(
            "search={}&page={}",
            urlencoding::encode(&self.search),
            self.page
        )
    }
}

// ============ List envelope ============

/// One page of results as returned by a list endpoint.
///
/// This is the SWAPI pagination envelope. `next`/`previous` are full URLs or
/// JSON `null`; the presence of `next` is what drives the "Next" control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total number of records across all pages.
    pub count: u64,
    /// URL of the next page, if any.
    pub next: Option<String>,
    /// URL of the previous page, if any.
    pub previous: Option<String>,
    /// Records on this page, in API order.
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Whether a further page exists.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            count: 0,
            next: None,
            previous: None,
            results: Vec::new(),
        }
    }
}

// ============ Records ============

/// One character record as returned by the `people` collection.
///
/// All descriptive attributes are free-form strings — the API reports e.g.
/// `"unknown"` for missing heights, so nothing here is numeric. The four
/// relation arrays hold full URLs of records in other collections; resolving
/// them is the detail aggregation's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub height: String,
    pub mass: String,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub birth_year: String,
    pub gender: String,
    /// URLs of film records this character appears in.
    pub films: Vec<String>,
    /// URLs of species records.
    pub species: Vec<String>,
    /// URLs of vehicle records.
    pub vehicles: Vec<String>,
    /// URLs of starship records.
    pub starships: Vec<String>,
    /// Canonical URL of this record.
    pub url: String,
    pub created: DateTime<Utc>,
    pub edited: DateTime<Utc>,
}

/// A film record. Display field: `title`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    pub title: String,
    pub episode_id: u32,
    pub release_date: NaiveDate,
    pub url: String,
}

/// A vehicle record. Display field: `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub name: String,
    pub model: String,
    pub url: String,
}

/// A species record. Display field: `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Species {
    pub name: String,
    pub classification: String,
    pub url: String,
}

/// A starship record. Display field: `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Starship {
    pub name: String,
    pub model: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- ListQuery ----

    #[test]
    fn default_query() {
        let q = ListQuery::default();
        assert_eq!(q.page, 1);
        assert_eq!(q.search, "");
    }

    #[test]
    fn validated_clamps_page_to_one() {
        let q = ListQuery {
            page: 0,
            search: "luke".to_string(),
        };
        let v = q.validated();
        assert_eq!(v.page, 1);
        assert_eq!(v.search, "luke");
    }

    #[test]
    fn validated_keeps_valid_page() {
        let q = ListQuery {
            page: 7,
            search: String::new(),
        };
        assert_eq!(q.validated().page, 7);
    }

    #[test]
    fn set_search_resets_page() {
        let mut q = ListQuery {
            page: 5,
            search: "old".to_string(),
        };
        q.set_search("sky");
        assert_eq!(q.page, 1);
        assert_eq!(q.search, "sky");
    }

    #[test]
    fn next_page_increments() {
        let mut q = ListQuery::default();
        q.next_page();
        assert_eq!(q.page, 2);
        assert_eq!(q.search, "");
    }

    #[test]
    fn prev_page_saturates_at_one() {
        let mut q = ListQuery {
            page: 2,
            search: "sky".to_string(),
        };
        q.prev_page();
        assert_eq!(q.page, 1);
        q.prev_page();
        assert_eq!(q.page, 1);
        assert_eq!(q.search, "sky");
    }

    #[test]
    fn parse_full_query_string() {
        let q = ListQuery::from_query_string("?search=luke&page=2");
        assert_eq!(q.page, 2);
        assert_eq!(q.search, "luke");
    }

    #[test]
    fn parse_without_question_mark() {
        let q = ListQuery::from_query_string("search=leia&page=3");
        assert_eq!(q.page, 3);
        assert_eq!(q.search, "leia");
    }

    #[test]
    fn parse_empty_string_gives_defaults() {
        assert_eq!(ListQuery::from_query_string(""), ListQuery::default());
    }

    #[test]
    fn parse_invalid_page_falls_back() {
        let q = ListQuery::from_query_string("search=luke&page=abc");
        assert_eq!(q.page, 1);
        assert_eq!(q.search, "luke");
    }

    #[test]
    fn parse_zero_page_clamped() {
        let q = ListQuery::from_query_string("page=0");
        assert_eq!(q.page, 1);
    }

    #[test]
    fn parse_decodes_percent_and_plus() {
        let q = ListQuery::from_query_string("search=luke%20sky&page=1");
        assert_eq!(q.search, "luke sky");

        let q = ListQuery::from_query_string("search=luke+sky");
        assert_eq!(q.search, "luke sky");
    }

    #[test]
    fn parse_ignores_unknown_keys() {
        let q = ListQuery::from_query_string("search=r2&page=2&theme=dark");
        assert_eq!(q.page, 2);
        assert_eq!(q.search, "r2");
    }

    #[test]
    fn query_string_encodes_search() {
        let q = ListQuery {
            page: 2,
            search: "luke sky".to_string(),
        };
        assert_eq!(q.to_query_string(), "search=luke%20sky&page=2");
    }

    #[test]
    fn query_string_round_trip() {
        let q = ListQuery {
            page: 4,
            search: "c-3po & r2".to_string(),
        };
        assert_eq!(ListQuery::from_query_string(&q.to_query_string()), q);
    }

    // ---- Page ----

    #[test]
    fn has_next_follows_next_field() {
        let with_next = Page {
            count: 82,
            next: Some("https://swapi.dev/api/people/?page=3".to_string()),
            previous: None,
            results: vec!["x"],
        };
        assert!(with_next.has_next());

        let last: Page<&str> = Page {
            count: 82,
            next: None,
            previous: Some("https://swapi.dev/api/people/?page=8".to_string()),
            results: vec![],
        };
        assert!(!last.has_next());
    }

    // ---- Wire shapes ----

    #[test]
    fn deserialize_character() {
        let json = r#"{
            "name": "Luke Skywalker",
            "height": "172",
            "mass": "77",
            "hair_color": "blond",
            "skin_color": "fair",
            "eye_color": "blue",
            "birth_year": "19BBY",
            "gender": "male",
            "homeworld": "https://swapi.dev/api/planets/1/",
            "films": ["https://swapi.dev/api/films/1/"],
            "species": [],
            "vehicles": ["https://swapi.dev/api/vehicles/14/"],
            "starships": ["https://swapi.dev/api/starships/12/"],
            "created": "2014-12-09T13:50:51.644000Z",
            "edited": "2014-12-20T21:17:56.891000Z",
            "url": "https://swapi.dev/api/people/1/"
        }"#;

        let c: Character = serde_json::from_str(json).unwrap();
        assert_eq!(c.name, "Luke Skywalker");
        assert_eq!(c.height, "172");
        assert_eq!(c.birth_year, "19BBY");
        assert_eq!(c.films.len(), 1);
        assert!(c.species.is_empty());
        assert_eq!(c.created.timezone(), Utc);
    }

    #[test]
    fn deserialize_page_with_null_next() {
        let json = r#"{
            "count": 1,
            "next": null,
            "previous": "https://swapi.dev/api/people/?page=8",
            "results": []
        }"#;

        let page: Page<Character> = serde_json::from_str(json).unwrap();
        assert!(page.next.is_none());
        assert!(!page.has_next());
        assert_eq!(page.count, 1);
    }

    #[test]
    fn deserialize_film_with_release_date() {
        let json = r#"{
            "title": "A New Hope",
            "episode_id": 4,
            "release_date": "1977-05-25",
            "url": "https://swapi.dev/api/films/1/"
        }"#;

        let film: Film = serde_json::from_str(json).unwrap();
        assert_eq!(film.title, "A New Hope");
        assert_eq!(film.episode_id, 4);
        assert_eq!(film.release_date.to_string(), "1977-05-25");
    }
}
