pub mod headhunter;
pub mod superjob;

pub use headhunter::HeadHunter;
pub use superjob::SuperJob;

use crate::error::Result;
use common::{summarize, LanguageStats};

/// Job titles are matched against this prefix plus the language name, biasing
/// results toward developer vacancies rather than incidental mentions.
const SEARCH_PREFIX: &str = "Разработчик";

fn search_phrase(language: &str) -> String {
    format!("{} {}", SEARCH_PREFIX, language)
}

/// How a board signals that more pages follow the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    /// The server reports the total page count up front (HeadHunter).
    TotalPages(u32),
    /// The server flags whether another page exists (SuperJob).
    HasMore(bool),
}

/// One decoded response page from a vacancy-search endpoint.
#[derive(Debug)]
pub struct ListingPage<L> {
    pub listings: Vec<L>,
    /// Server-reported total matches, which may exceed what pagination returns.
    pub found: u64,
    /// Zero-based index of the request that produced this page.
    pub page: u32,
    pub continuation: Continuation,
}

/// The board-specific half of the collection pipeline: one paginated search
/// request per call, one salary estimate per listing.
pub trait JobBoard {
    type Listing;

    fn name(&self) -> &'static str;

    fn fetch_page(&self, language: &str, page: u32) -> Result<ListingPage<Self::Listing>>;

    /// Estimates a single ruble figure for one listing, or `None` when the
    /// salary is missing, partial beyond repair, or in a foreign currency.
    fn estimate(&self, listing: &Self::Listing) -> Option<u64>;

    fn has_more(&self, page: &ListingPage<Self::Listing>) -> bool {
        match page.continuation {
            Continuation::TotalPages(pages) => page.page + 1 < pages,
            Continuation::HasMore(more) => more,
        }
    }
}

/// Pages through one language's search results and reduces them to statistics.
///
/// Any fetch error aborts the whole run; there is no per-language recovery.
pub fn collect_language_stats<B: JobBoard>(board: &B, language: &str) -> Result<LanguageStats> {
    let mut page = board.fetch_page(language, 0)?;
    let vacancies_found = page.found;

    let mut salaries: Vec<Option<u64>> = page
        .listings
        .iter()
        .map(|listing| board.estimate(listing))
        .collect();

    while board.has_more(&page) {
        let next_index = page.page + 1;
        page = board.fetch_page(language, next_index)?;
        salaries.extend(page.listings.iter().map(|listing| board.estimate(listing)));
    }

    Ok(summarize(&salaries, vacancies_found))
}

/// Collects statistics for every language, preserving list order.
pub fn collect_board<B: JobBoard>(
    board: &B,
    languages: &[&str],
) -> Result<Vec<(String, LanguageStats)>> {
    println!("📡 Collecting {} vacancies...", board.name());

    let mut results = Vec::with_capacity(languages.len());
    for language in languages {
        let stats = collect_language_stats(board, language)?;
        println!(
            "📊 {}: {} found, {} processed",
            language, stats.vacancies_found, stats.vacancies_processed
        );
        results.push((language.to_string(), stats));
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// In-memory board: each inner vec is the salary estimates of one page.
    struct FakeBoard {
        pages: Vec<Vec<Option<u64>>>,
        found: u64,
        bounded: bool,
        fetches: RefCell<u32>,
    }

    impl FakeBoard {
        fn bounded(pages: Vec<Vec<Option<u64>>>, found: u64) -> Self {
            Self {
                pages,
                found,
                bounded: true,
                fetches: RefCell::new(0),
            }
        }

        fn more_flagged(pages: Vec<Vec<Option<u64>>>, found: u64) -> Self {
            Self {
                pages,
                found,
                bounded: false,
                fetches: RefCell::new(0),
            }
        }
    }

    impl JobBoard for FakeBoard {
        type Listing = Option<u64>;

        fn name(&self) -> &'static str {
            "FakeBoard"
        }

        fn fetch_page(&self, _language: &str, page: u32) -> Result<ListingPage<Option<u64>>> {
            *self.fetches.borrow_mut() += 1;

            let continuation = if self.bounded {
                Continuation::TotalPages(self.pages.len() as u32)
            } else {
                Continuation::HasMore((page as usize) + 1 < self.pages.len())
            };

            Ok(ListingPage {
                listings: self.pages[page as usize].clone(),
                found: self.found,
                page,
                continuation,
            })
        }

        fn estimate(&self, listing: &Option<u64>) -> Option<u64> {
            *listing
        }
    }

    #[test]
    fn test_search_phrase_has_developer_prefix() {
        assert_eq!(search_phrase("Rust"), "Разработчик Rust");
    }

    #[test]
    fn test_bounded_board_fetches_exactly_pages_times() {
        let board = FakeBoard::bounded(
            vec![vec![Some(100_000)], vec![Some(90_000)], vec![None]],
            3,
        );

        let stats = collect_language_stats(&board, "Python").unwrap();

        assert_eq!(*board.fetches.borrow(), 3);
        assert_eq!(stats.vacancies_processed, 2);
    }

    #[test]
    fn test_more_flagged_board_stops_on_first_false() {
        let board = FakeBoard::more_flagged(
            vec![vec![Some(100_000)], vec![Some(90_000)], vec![Some(80_000)]],
            3,
        );

        let stats = collect_language_stats(&board, "Python").unwrap();

        assert_eq!(*board.fetches.borrow(), 3);
        assert_eq!(stats.vacancies_processed, 3);
    }

    #[test]
    fn test_single_page_board_fetches_once() {
        let board = FakeBoard::more_flagged(vec![vec![Some(100_000)]], 1);

        collect_language_stats(&board, "Python").unwrap();

        assert_eq!(*board.fetches.borrow(), 1);
    }

    #[test]
    fn test_empty_result_set_yields_zeroed_stats() {
        let board = FakeBoard::bounded(vec![vec![]], 0);

        let stats = collect_language_stats(&board, "Scala").unwrap();

        assert_eq!(stats.vacancies_found, 0);
        assert_eq!(stats.vacancies_processed, 0);
        assert_eq!(stats.average_salary, 0);
    }

    #[test]
    fn test_collect_board_preserves_language_order() {
        let board = FakeBoard::bounded(vec![vec![Some(100_000)]], 5);

        let results = collect_board(&board, &["Java", "Go", "C++"]).unwrap();

        let order: Vec<&str> = results.iter().map(|(language, _)| language.as_str()).collect();
        assert_eq!(order, vec!["Java", "Go", "C++"]);
        for (_, stats) in &results {
            assert!(stats.vacancies_processed <= stats.vacancies_found);
        }
    }
}
