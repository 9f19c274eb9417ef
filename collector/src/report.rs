//! Console table rendering. Pure presentation, no business logic.

use comfy_table::presets::ASCII_FULL;
use comfy_table::Table;

use common::LanguageStats;

const COLUMNS: [&str; 4] = [
    "Язык программирования",
    "Вакансий найдено",
    "Вакансий обработано",
    "Средняя зарплата",
];

fn render(stats: &[(String, LanguageStats)]) -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL).set_header(COLUMNS);

    for (language, stat) in stats {
        table.add_row(vec![
            language.clone(),
            stat.vacancies_found.to_string(),
            stat.vacancies_processed.to_string(),
            stat.average_salary.to_string(),
        ]);
    }

    table
}

/// Prints one titled table per job board to stdout.
pub fn print_report(title: &str, stats: &[(String, LanguageStats)]) {
    println!("{}", title);
    println!("{}", render(stats));
}
