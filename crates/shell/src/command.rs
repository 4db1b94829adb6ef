//! Command grammar
//!
//! One command per line. Patterns must match the whole line and are tried in
//! declaration order; the first match wins.

use citeforge_common::errors::{AppError, Result};
use citeforge_core::{KeywordTarget, Style, VenueKind};
use regex_lite::{Captures, Regex};

const AUTHOR: &str = r"[^;\n,\s]+\s[^;\n,\s]+";
const NAME: &str = r"[^;\n,]+";
const ID: &str = r"[a-zäöüß0-9]+";
const KEYWORD: &str = r"[a-zäöüß]+";
const YEAR: &str = r"\d{1,4}";

/// A parsed command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Mutate(Mutation),
    Query(Query),
    Quit,
}

impl Command {
    /// Metric and log label
    pub fn label(&self) -> &'static str {
        match self {
            Command::Mutate(mutation) => mutation.label(),
            Command::Query(query) => query.label(),
            Command::Quit => "quit",
        }
    }
}

/// Commands that change the knowledge base and print nothing on success
///
/// Years stay raw; range checks belong to validation.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    AddAuthor { name: String, surname: String },
    AddJournal { name: String, publisher: String },
    AddSeries { name: String },
    AddConference { series: String, year: String, location: String },
    AddArticle {
        kind: VenueKind,
        venue: String,
        id: String,
        year: String,
        title: String,
    },
    WrittenBy { id: String, authors: Vec<String> },
    Cites { giver: String, receiver: String },
    AddKeywords { target: KeywordTarget, keywords: Vec<String> },
}

impl Mutation {
    pub fn label(&self) -> &'static str {
        match self {
            Mutation::AddAuthor { .. } => "add_author",
            Mutation::AddJournal { .. } => "add_journal",
            Mutation::AddSeries { .. } => "add_series",
            Mutation::AddConference { .. } => "add_conference",
            Mutation::AddArticle { .. } => "add_article",
            Mutation::WrittenBy { .. } => "written_by",
            Mutation::Cites { .. } => "cites",
            Mutation::AddKeywords { .. } => "add_keywords",
        }
    }
}

/// Read-only commands
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    AllPublications,
    InvalidPublications,
    PublicationsBy { authors: Vec<String> },
    InProceedings { series: String, year: String },
    FindByKeywords { keywords: Vec<String> },
    Jaccard { first: Vec<String>, second: Vec<String> },
    Similarity { first: String, second: String },
    GIndex { author: String },
    CoAuthors { author: String },
    ForeignCitations { author: String },
    PrintBibliography { style: Style, ids: Vec<String> },
}

impl Query {
    pub fn label(&self) -> &'static str {
        match self {
            Query::AllPublications => "all_publications",
            Query::InvalidPublications => "list_invalid_publications",
            Query::PublicationsBy { .. } => "publications_by",
            Query::InProceedings { .. } => "in_proceedings",
            Query::FindByKeywords { .. } => "find_by_keywords",
            Query::Jaccard { .. } => "jaccard",
            Query::Similarity { .. } => "similarity",
            Query::GIndex { .. } => "g_index",
            Query::CoAuthors { .. } => "coauthors_of",
            Query::ForeignCitations { .. } => "foreign_citations_of",
            Query::PrintBibliography { .. } => "print_bibliography",
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Kind {
    AddAuthor,
    AddJournal,
    AddSeries,
    AddConference,
    AddArticle,
    WrittenBy,
    Cites,
    AddKeywords,
    AllPublications,
    InvalidPublications,
    PublicationsBy,
    InProceedings,
    FindByKeywords,
    Jaccard,
    Similarity,
    GIndex,
    CoAuthors,
    ForeignCitations,
    PrintBibliography,
    Quit,
}

/// Compiled command patterns
#[derive(Debug, Clone)]
pub struct CommandParser {
    patterns: Vec<(Kind, Regex)>,
}

impl CommandParser {
    pub fn new() -> std::result::Result<Self, regex_lite::Error> {
        let author_list = format!("{AUTHOR}(?:;{AUTHOR})*");
        let keyword_list = format!("{KEYWORD}(?:;{KEYWORD})*");

        let sources = [
            (Kind::AddAuthor, r"add author ([^;\n,\s]+)\s([^;\n,\s]+)".to_string()),
            (Kind::AddJournal, format!("add journal ({NAME}),({NAME})")),
            (Kind::AddSeries, format!("add series ({NAME})")),
            (Kind::AddConference, format!("add conference ({NAME}),({YEAR}),({NAME})")),
            (
                Kind::AddArticle,
                format!("add article to (series|journal) ({NAME}):({ID}),({YEAR}),({NAME})"),
            ),
            (Kind::WrittenBy, format!("written by ({ID}),({author_list})")),
            (Kind::Cites, format!("cites ({ID}),({ID})")),
            (
                Kind::AddKeywords,
                format!("add keywords to (?:(series|journal)\\s+({NAME})|({ID})):({keyword_list})"),
            ),
            (Kind::AllPublications, "all publications".to_string()),
            (Kind::InvalidPublications, "list invalid publications".to_string()),
            (Kind::PublicationsBy, format!("publications by ({author_list})")),
            (Kind::InProceedings, format!("in proceedings ({NAME}),({YEAR})")),
            (Kind::FindByKeywords, format!("find by keywords ({keyword_list})")),
            (
                Kind::Jaccard,
                format!("jaccard ({keyword_list}|\\s)\\s({keyword_list}|\\s)"),
            ),
            (Kind::Similarity, format!("similarity ({ID}),({ID})")),
            (Kind::GIndex, format!("g-index ({AUTHOR})")),
            (Kind::CoAuthors, format!("coauthors of ({AUTHOR})")),
            (Kind::ForeignCitations, format!("foreign citations of ({AUTHOR})")),
            (
                Kind::PrintBibliography,
                format!("print bibliography (acm|apa):({ID}(?:;{ID})*)"),
            ),
            (Kind::Quit, "quit".to_string()),
        ];

        let patterns = sources
            .into_iter()
            .map(|(kind, source)| Regex::new(&format!("^(?:{source})$")).map(|regex| (kind, regex)))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }

    /// Parse one input line
    pub fn parse(&self, line: &str) -> Result<Command> {
        self.patterns
            .iter()
            .find_map(|(kind, regex)| regex.captures(line).map(|caps| build(*kind, &caps)))
            .unwrap_or_else(|| Err(AppError::InvalidCommand))
    }
}

fn group(caps: &Captures<'_>, index: usize) -> String {
    caps.get(index).map(|m| m.as_str().to_string()).unwrap_or_default()
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

/// `"{name} {surname}"` with the separating whitespace normalised
fn normalize_author(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn author_list(raw: &str) -> Vec<String> {
    split_list(raw).iter().map(|a| normalize_author(a)).collect()
}

fn venue_kind(raw: &str) -> Result<VenueKind> {
    raw.parse().map_err(|_| AppError::InvalidCommand)
}

fn build(kind: Kind, caps: &Captures<'_>) -> Result<Command> {
    let g = |index| group(caps, index);

    let command = match kind {
        Kind::AddAuthor => Command::Mutate(Mutation::AddAuthor {
            name: g(1),
            surname: g(2),
        }),
        Kind::AddJournal => Command::Mutate(Mutation::AddJournal {
            name: g(1),
            publisher: g(2),
        }),
        Kind::AddSeries => Command::Mutate(Mutation::AddSeries { name: g(1) }),
        Kind::AddConference => Command::Mutate(Mutation::AddConference {
            series: g(1),
            year: g(2),
            location: g(3),
        }),
        Kind::AddArticle => Command::Mutate(Mutation::AddArticle {
            kind: venue_kind(&g(1))?,
            venue: g(2),
            id: g(3),
            year: g(4),
            title: g(5),
        }),
        Kind::WrittenBy => Command::Mutate(Mutation::WrittenBy {
            id: g(1),
            authors: author_list(&g(2)),
        }),
        Kind::Cites => Command::Mutate(Mutation::Cites {
            giver: g(1),
            receiver: g(2),
        }),
        Kind::AddKeywords => {
            let target = match caps.get(1) {
                Some(venue) => KeywordTarget::new(Some(venue_kind(venue.as_str())?), g(2)),
                None => KeywordTarget::new(None, g(3)),
            };
            Command::Mutate(Mutation::AddKeywords {
                target,
                keywords: split_list(&g(4)),
            })
        }
        Kind::AllPublications => Command::Query(Query::AllPublications),
        Kind::InvalidPublications => Command::Query(Query::InvalidPublications),
        Kind::PublicationsBy => Command::Query(Query::PublicationsBy {
            authors: author_list(&g(1)),
        }),
        Kind::InProceedings => Command::Query(Query::InProceedings {
            series: g(1),
            year: g(2),
        }),
        Kind::FindByKeywords => Command::Query(Query::FindByKeywords {
            keywords: split_list(&g(1)),
        }),
        // A blank operand is the empty set
        Kind::Jaccard => Command::Query(Query::Jaccard {
            first: split_list(&g(1)),
            second: split_list(&g(2)),
        }),
        Kind::Similarity => Command::Query(Query::Similarity {
            first: g(1),
            second: g(2),
        }),
        Kind::GIndex => Command::Query(Query::GIndex {
            author: normalize_author(&g(1)),
        }),
        Kind::CoAuthors => Command::Query(Query::CoAuthors {
            author: normalize_author(&g(1)),
        }),
        Kind::ForeignCitations => Command::Query(Query::ForeignCitations {
            author: normalize_author(&g(1)),
        }),
        Kind::PrintBibliography => Command::Query(Query::PrintBibliography {
            style: g(1).parse().map_err(|_| AppError::InvalidCommand)?,
            ids: split_list(&g(2)),
        }),
        Kind::Quit => Command::Quit,
    };

    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Command> {
        CommandParser::new().unwrap().parse(line)
    }

    #[test]
    fn test_add_commands() {
        assert_eq!(
            parse("add author Ada Lovelace").unwrap(),
            Command::Mutate(Mutation::AddAuthor {
                name: "Ada".into(),
                surname: "Lovelace".into()
            })
        );
        assert_eq!(
            parse("add journal Journal of the ACM,ACM Press").unwrap(),
            Command::Mutate(Mutation::AddJournal {
                name: "Journal of the ACM".into(),
                publisher: "ACM Press".into()
            })
        );
        assert_eq!(
            parse("add conference ICSE,2019,Montreal").unwrap(),
            Command::Mutate(Mutation::AddConference {
                series: "ICSE".into(),
                year: "2019".into(),
                location: "Montreal".into()
            })
        );
        assert_eq!(
            parse("add article to series ICSE:icse19,2019,Fuzzing at Scale").unwrap(),
            Command::Mutate(Mutation::AddArticle {
                kind: VenueKind::Series,
                venue: "ICSE".into(),
                id: "icse19".into(),
                year: "2019".into(),
                title: "Fuzzing at Scale".into()
            })
        );
    }

    #[test]
    fn test_lists_are_split() {
        assert_eq!(
            parse("written by a1,Ada Lovelace;Alan Turing").unwrap(),
            Command::Mutate(Mutation::WrittenBy {
                id: "a1".into(),
                authors: vec!["Ada Lovelace".into(), "Alan Turing".into()]
            })
        );
        assert_eq!(
            parse("print bibliography acm:a1;b2;a1").unwrap(),
            Command::Query(Query::PrintBibliography {
                style: Style::Acm,
                ids: vec!["a1".into(), "b2".into(), "a1".into()]
            })
        );
    }

    #[test]
    fn test_keyword_targets() {
        assert_eq!(
            parse("add keywords to series Int Conf on SE:testing;fuzzing").unwrap(),
            Command::Mutate(Mutation::AddKeywords {
                target: KeywordTarget::Series("Int Conf on SE".into()),
                keywords: vec!["testing".into(), "fuzzing".into()]
            })
        );
        assert_eq!(
            parse("add keywords to a1:graphs").unwrap(),
            Command::Mutate(Mutation::AddKeywords {
                target: KeywordTarget::Article("a1".into()),
                keywords: vec!["graphs".into()]
            })
        );
    }

    #[test]
    fn test_jaccard_blank_operands() {
        assert_eq!(
            parse("jaccard a;b b;c").unwrap(),
            Command::Query(Query::Jaccard {
                first: vec!["a".into(), "b".into()],
                second: vec!["b".into(), "c".into()]
            })
        );
        assert_eq!(
            parse("jaccard    ").unwrap(),
            Command::Query(Query::Jaccard {
                first: vec![],
                second: vec![]
            })
        );
        assert_eq!(
            parse("jaccard a  ").unwrap(),
            Command::Query(Query::Jaccard {
                first: vec!["a".into()],
                second: vec![]
            })
        );
    }

    #[test]
    fn test_whole_line_must_match() {
        assert!(matches!(parse("quit now"), Err(AppError::InvalidCommand)));
        assert!(matches!(parse("add author Ada"), Err(AppError::InvalidCommand)));
        assert!(matches!(parse("cites A1,b2"), Err(AppError::InvalidCommand)));
        assert!(matches!(parse("add conference S,20201,X"), Err(AppError::InvalidCommand)));
        assert!(matches!(parse(""), Err(AppError::InvalidCommand)));
        assert_eq!(parse("quit").unwrap(), Command::Quit);
    }

    #[test]
    fn test_commands_split_into_mutations_and_queries() {
        let mutations = [
            "add author Ada Lovelace",
            "add journal TSE,IEEE",
            "add series ICSE",
            "add conference ICSE,2019,Montreal",
            "add article to journal TSE:a1,2019,T",
            "written by a1,Ada Lovelace",
            "cites a2,a1",
            "add keywords to journal TSE:graphs",
        ];
        let queries = [
            "all publications",
            "list invalid publications",
            "publications by Ada Lovelace",
            "in proceedings ICSE,2019",
            "find by keywords graphs",
            "jaccard a b",
            "similarity a1,a2",
            "g-index Ada Lovelace",
            "coauthors of Ada Lovelace",
            "foreign citations of Ada Lovelace",
            "print bibliography apa:a1",
        ];

        for line in mutations {
            assert!(matches!(parse(line), Ok(Command::Mutate(_))), "{line}");
        }
        for line in queries {
            assert!(matches!(parse(line), Ok(Command::Query(_))), "{line}");
        }
        assert_eq!(parse("all publications").unwrap().label(), "all_publications");
        assert_eq!(parse("cites a2,a1").unwrap().label(), "cites");
    }

    #[test]
    fn test_umlaut_ids() {
        assert_eq!(
            parse("cites größe1,maß2").unwrap(),
            Command::Mutate(Mutation::Cites {
                giver: "größe1".into(),
                receiver: "maß2".into()
            })
        );
    }
}
