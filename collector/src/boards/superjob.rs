//! SuperJob vacancy-search client.
//!
//! Unlike HeadHunter there is no page count: every response carries a `more`
//! flag and pagination continues until it goes false. Requests authenticate
//! with the application key in the `X-Api-App-Id` header.

use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::boards::{search_phrase, Continuation, JobBoard, ListingPage};
use crate::error::Result;
use common::predict_salary;

const API_URL: &str = "https://api.superjob.ru/2.0/vacancies/";

const USER_AGENT: &str = "language-salary/0.1";

/// Code SuperJob uses for ruble salaries.
const DOMESTIC_CURRENCY: &str = "rub";

pub struct SuperJob {
    client: Client,
    town: String,
    api_key: String,
}

impl SuperJob {
    pub fn new(town: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            town: town.into(),
            api_key: api_key.into(),
        })
    }
}

/// SuperJob encodes unspecified salary bounds as `0`, not `null`;
/// `predict_salary` discards zero bounds.
#[derive(Debug, Deserialize)]
pub struct SjVacancy {
    #[serde(default)]
    pub payment_from: u64,
    #[serde(default)]
    pub payment_to: u64,
    #[serde(default)]
    pub currency: String,
}

#[derive(Debug, Deserialize)]
struct SjPage {
    objects: Vec<SjVacancy>,
    total: u64,
    more: bool,
}

impl JobBoard for SuperJob {
    type Listing = SjVacancy;

    fn name(&self) -> &'static str {
        "SuperJob"
    }

    fn fetch_page(&self, language: &str, page: u32) -> Result<ListingPage<SjVacancy>> {
        let decoded: SjPage = self
            .client
            .get(API_URL)
            .header("X-Api-App-Id", &self.api_key)
            .query(&[
                ("town", self.town.clone()),
                ("page", page.to_string()),
                // Structured phrase match: srws=1 scopes it to job titles
                ("keywords[0][srws]", "1".to_string()),
                ("keywords[0][skwc]", "and".to_string()),
                ("keywords[0][keys]", search_phrase(language)),
            ])
            .send()?
            .error_for_status()?
            .json()?;

        Ok(ListingPage {
            listings: decoded.objects,
            found: decoded.total,
            page,
            continuation: Continuation::HasMore(decoded.more),
        })
    }

    fn estimate(&self, vacancy: &SjVacancy) -> Option<u64> {
        if vacancy.currency != DOMESTIC_CURRENCY {
            return None;
        }
        predict_salary(Some(vacancy.payment_from), Some(vacancy.payment_to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> SuperJob {
        SuperJob::new("Москва", "test-key").unwrap()
    }

    fn vacancy(json: serde_json::Value) -> SjVacancy {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_estimate_ruble_range() {
        let vacancy = vacancy(serde_json::json!({
            "payment_from": 100_000, "payment_to": 200_000, "currency": "rub"
        }));
        assert_eq!(board().estimate(&vacancy), Some(150_000));
    }

    #[test]
    fn test_estimate_foreign_currency_is_skipped() {
        let vacancy = vacancy(serde_json::json!({
            "payment_from": 100_000, "payment_to": 200_000, "currency": "usd"
        }));
        assert_eq!(board().estimate(&vacancy), None);
    }

    #[test]
    fn test_estimate_zero_bounds_mean_unspecified() {
        let vacancy = vacancy(serde_json::json!({
            "payment_from": 0, "payment_to": 0, "currency": "rub"
        }));
        assert_eq!(board().estimate(&vacancy), None);
    }

    #[test]
    fn test_estimate_ceiling_only() {
        let vacancy = vacancy(serde_json::json!({
            "payment_from": 0, "payment_to": 200_000, "currency": "rub"
        }));
        assert_eq!(board().estimate(&vacancy), Some(160_000));
    }

    #[test]
    fn test_page_decoding() {
        let page: SjPage = serde_json::from_value(serde_json::json!({
            "objects": [
                {"payment_from": 50_000, "payment_to": 0, "currency": "rub", "profession": "Разработчик PHP"}
            ],
            "total": 44,
            "more": true
        }))
        .unwrap();

        assert_eq!(page.objects.len(), 1);
        assert_eq!(page.total, 44);
        assert!(page.more);
    }
}
