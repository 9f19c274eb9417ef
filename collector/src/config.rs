use std::env;

use crate::error::Result;

/// Languages the report covers, in output order.
const LANGUAGES: [&str; 11] = [
    "Java",
    "JavaScript",
    "Python",
    "Ruby",
    "PHP",
    "C++",
    "C#",
    "Swift",
    "TypeScript",
    "Go",
    "Scala",
];

/// HeadHunter region id for Moscow, see https://api.hh.ru/areas
const HH_MOSCOW_AREA: u32 = 1;

const LOCALITY: &str = "Москва";

const SUPERJOB_KEY_VAR: &str = "SUPERJOB_API_SECRET_KEY";

/// Everything a run needs, loaded once at startup and immutable afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub languages: Vec<String>,
    /// Region id HeadHunter filters by.
    pub hh_area: u32,
    pub hh_area_name: String,
    /// Town name SuperJob filters by.
    pub sj_town: String,
    pub superjob_api_key: String,
}

impl Config {
    /// Reads the SuperJob key from the environment, honoring a `.env` file.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let superjob_api_key = env::var(SUPERJOB_KEY_VAR)?;

        Ok(Self {
            languages: LANGUAGES.iter().map(|language| language.to_string()).collect(),
            hh_area: HH_MOSCOW_AREA,
            hh_area_name: LOCALITY.to_string(),
            sj_town: LOCALITY.to_string(),
            superjob_api_key,
        })
    }
}
