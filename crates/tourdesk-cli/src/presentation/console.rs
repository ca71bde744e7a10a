//! Plain-terminal rendering with owo-colors: the tour table, single-card
//! detail, the stats block, and the printable report.

use owo_colors::OwoColorize;

use super::formatters::{group_thousands, truncate_for_display};
use super::view_models::{CardViewModel, StatsViewModel};

pub fn print_tour_table(cards: &[CardViewModel], total: usize) {
    if cards.is_empty() {
        println!("{}", "No tours match.".dimmed());
        return;
    }

    let title_width = column_width(cards.iter().map(|c| c.title.as_str()), 4);
    let location_width = column_width(cards.iter().map(|c| c.location.as_str()), 8);
    let type_width = column_width(cards.iter().map(|c| c.tour_type.as_str()), 4);

    println!(
        "{:>4}  {:<title_width$}  {:<location_width$}  {:>8}  {:<type_width$}  {:>14}",
        "ID".bold(),
        "TOUR".bold(),
        "LOCATION".bold(),
        "DAYS".bold(),
        "TYPE".bold(),
        "PRICE".bold(),
    );

    for card in cards {
        println!(
            "{:>4}  {:<title_width$}  {:<location_width$}  {:>8}  {:<type_width$}  {:>14}",
            card.id.yellow(),
            card.title,
            card.location.cyan(),
            card.duration,
            card.tour_type.green(),
            card.price,
        );
    }

    if cards.len() < total {
        println!(
            "{}",
            format!("{} of {} tours shown", cards.len(), total).dimmed()
        );
    }
}

pub fn print_tour_detail(card: &CardViewModel) {
    println!("{} {}", card.title.bold(), format!("(#{})", card.id).dimmed());
    println!("  {}  {}", "Where:".dimmed(), card.location);
    println!("  {}  {}", "When: ".dimmed(), card.dates);
    println!("  {}  {}, {}", "What: ".dimmed(), card.tour_type, card.duration);
    println!("  {}  {}", "Hotel:".dimmed(), card.hotel);
    println!("  {}  {}", "Group:".dimmed(), card.capacity);
    println!("  {}  {}", "Price:".dimmed(), card.price.bold());
    if !card.description.is_empty() {
        println!("  {}", truncate_for_display(&card.description, 120).italic());
    }
}

pub fn print_stats(stats: &StatsViewModel) {
    for tile in &stats.tiles {
        let value = if tile.suffix.is_empty() {
            group_thousands(tile.value)
        } else {
            format!("{} {}", group_thousands(tile.value), tile.suffix)
        };
        println!("{:<10} {}", format!("{}:", tile.label).dimmed(), value.bold());
    }
}

/// The printable report: stats, the freshest tours, then the whole list.
pub fn print_report(
    stats: &StatsViewModel,
    recent: &[CardViewModel],
    all: &[CardViewModel],
    generated_on: &str,
) {
    println!("{}", "TRAVEL AGENCY OVERVIEW".bold());
    println!("{}", format!("generated {}", generated_on).dimmed());
    println!();

    print_stats(stats);
    println!();

    println!("{}", "Recently added".bold());
    for card in recent {
        println!("  - {} ({}, {})", card.title, card.location, card.price);
    }
    println!();

    println!("{}", "All tours".bold());
    print_tour_table(all, all.len());
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, min: usize) -> usize {
    values.map(|v| v.chars().count()).max().unwrap_or(0).max(min)
}
