use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use super::{Product, Review};

/**
    The two shapes list endpoints respond with - either a bare
    array, or a paginated object wrapping the array in `results`.
*/
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum PageRepr<T> {
    List(Vec<T>),
    Paginated {
        results: Vec<T>,
        #[serde(default)]
        count: Option<u64>,
    },
}

/**
    A single page of records from a list endpoint.

    Sorting and filtering happen on the backend, so records
    are kept in exactly the order they were received in.
    Records that fail to parse are skipped, the rest of
    the page is kept.
*/
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub results: Vec<T>,
    pub count: Option<u64>,
}

pub type ReviewPage = Page<Review>;
pub type ProductPage = Page<Product>;

impl<T> Page<T>
where
    T: DeserializeOwned,
{
    #[allow(clippy::missing_errors_doc)]
    pub fn try_from_json(s: &str) -> Result<Self, serde_json::Error> {
        let repr: PageRepr<Value> = serde_json::from_str(s)?;
        let (records, count) = match repr {
            PageRepr::List(results) => (results, None),
            PageRepr::Paginated { results, count } => (results, count),
        };
        Ok(Self {
            results: parse_records(records),
            count,
        })
    }
}

fn parse_records<T: DeserializeOwned>(records: Vec<Value>) -> Vec<T> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping malformed record at index {index}: {e}");
                None
            }
        })
        .collect()
}

impl<T> Page<T> {
    /**
        Total number of records across all pages, if the backend
        reported one, otherwise the number of records on this page.
    */
    #[must_use]
    pub fn total(&self) -> u64 {
        self.count.unwrap_or(self.results.len() as u64)
    }
}
