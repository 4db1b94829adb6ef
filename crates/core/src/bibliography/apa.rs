//! APA reference style

use super::{BibliographyEntry, EntryAuthor};

/// `Surname, N.` with the upper-cased initial of the given name
fn format_author(author: &EntryAuthor) -> String {
    let initial: String = author
        .name
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default();
    format!("{}, {}.", author.surname, initial)
}

/// `S, N.`, `S1, N1., & S2, N2.` or `S1, N1., S2, N2., & S3, N3.`
pub fn format_authors(entry: &BibliographyEntry) -> String {
    let names: Vec<String> = entry.authors.iter().map(format_author).collect();

    match names.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{}, & {}", init.join(", "), last),
    }
}

pub fn format_entry(entry: &BibliographyEntry) -> String {
    let authors = format_authors(entry);

    match &entry.conference {
        None => format!(
            "{} ({}). {}. {}",
            authors, entry.year, entry.title, entry.venue_name
        ),
        Some(conference) => format!(
            "{} ({}). {}. {}, {}",
            authors, conference.year, entry.title, entry.venue_name, conference.location
        ),
    }
}
