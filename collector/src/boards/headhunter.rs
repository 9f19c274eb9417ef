//! HeadHunter vacancy-search client.
//!
//! The API reports the total page count in every response, so pagination
//! walks pages `0..pages`.

use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::boards::{search_phrase, Continuation, JobBoard, ListingPage};
use crate::error::Result;
use common::predict_salary;

const API_URL: &str = "https://api.hh.ru/vacancies";

/// HeadHunter rejects requests without a user agent.
const USER_AGENT: &str = "language-salary/0.1";

/// Code HeadHunter uses for ruble salaries.
const DOMESTIC_CURRENCY: &str = "RUR";

pub struct HeadHunter {
    client: Client,
    /// Region id, see https://api.hh.ru/areas
    area: u32,
}

impl HeadHunter {
    pub fn new(area: u32) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self { client, area })
    }
}

#[derive(Debug, Deserialize)]
pub struct HhVacancy {
    pub salary: Option<HhSalary>,
}

#[derive(Debug, Deserialize)]
pub struct HhSalary {
    pub from: Option<u64>,
    pub to: Option<u64>,
    pub currency: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HhPage {
    items: Vec<HhVacancy>,
    found: u64,
    pages: u32,
}

impl JobBoard for HeadHunter {
    type Listing = HhVacancy;

    fn name(&self) -> &'static str {
        "HeadHunter"
    }

    fn fetch_page(&self, language: &str, page: u32) -> Result<ListingPage<HhVacancy>> {
        let decoded: HhPage = self
            .client
            .get(API_URL)
            .query(&[
                ("area", self.area.to_string()),
                ("text", search_phrase(language)),
                // Match the phrase against job titles only
                ("search_field", "name".to_string()),
                ("page", page.to_string()),
                ("clusters", "true".to_string()),
            ])
            .send()?
            .error_for_status()?
            .json()?;

        Ok(ListingPage {
            listings: decoded.items,
            found: decoded.found,
            page,
            continuation: Continuation::TotalPages(decoded.pages),
        })
    }

    fn estimate(&self, vacancy: &HhVacancy) -> Option<u64> {
        let salary = vacancy.salary.as_ref()?;
        if salary.currency.as_deref() != Some(DOMESTIC_CURRENCY) {
            return None;
        }
        predict_salary(salary.from, salary.to)
    }
}
