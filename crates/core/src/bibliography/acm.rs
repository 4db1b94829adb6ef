//! ACM reference style

use super::BibliographyEntry;

/// `A`, `A and B`, or `A, B, and C`
pub fn format_authors(entry: &BibliographyEntry) -> String {
    let names: Vec<String> = entry.authors.iter().map(|a| a.full_name()).collect();

    match names.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{} and {}", first, second),
        [init @ .., last] => format!("{}, and {}", init.join(", "), last),
    }
}

pub fn format_entry(entry: &BibliographyEntry) -> String {
    let authors = format_authors(entry);

    match &entry.conference {
        None => format!(
            "{}. {}. {}. {}.",
            authors, entry.year, entry.title, entry.venue_name
        ),
        Some(conference) => format!(
            "{}. {}. In Proceedings of {}, {}, {}.",
            authors, entry.title, entry.venue_name, conference.year, conference.location
        ),
    }
}
