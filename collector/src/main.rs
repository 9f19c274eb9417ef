//! Programming-language salary report.
//!
//! Queries HeadHunter and SuperJob for developer vacancies per language,
//! estimates a ruble salary for each listing, and prints one aggregate
//! table per job board.

mod boards;
mod config;
mod error;
mod report;

use std::process;

use boards::{collect_board, HeadHunter, SuperJob};
use config::Config;
use error::Result;

fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("❌ {}", error);
            process::exit(1);
        }
    };

    if let Err(error) = run(&config) {
        eprintln!("Can't get data from server:\n{}", error);
        process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    let languages: Vec<&str> = config.languages.iter().map(String::as_str).collect();

    let headhunter = HeadHunter::new(config.hh_area)?;
    let stats = collect_board(&headhunter, &languages)?;
    report::print_report(&format!("HeadHunter {}", config.hh_area_name), &stats);

    let superjob = SuperJob::new(config.sj_town.as_str(), config.superjob_api_key.as_str())?;
    let stats = collect_board(&superjob, &languages)?;
    report::print_report(&format!("SuperJob {}", config.sj_town), &stats);

    Ok(())
}
