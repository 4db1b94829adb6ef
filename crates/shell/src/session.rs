//! Interactive session
//!
//! Reads one command per line, validates it against the store, then applies the
//! mutation or runs the query. A rejected command prints the error and the
//! session carries on.

use crate::command::{Command, CommandParser, Mutation, Query};
use crate::output::Output;
use citeforge_common::config::ShellConfig;
use citeforge_common::errors::Result;
use citeforge_common::metrics::{record_command, record_command_error};
use citeforge_core::bibliography::{self, Style};
use citeforge_core::query::jaccard;
use citeforge_core::{KnowledgeStore, QueryEngine, Validator};
use std::collections::HashSet;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Shell state: the knowledge base plus presentation settings
pub struct Session {
    store: KnowledgeStore,
    parser: CommandParser,
    config: ShellConfig,
    running: bool,
}

impl Session {
    pub fn new(config: ShellConfig) -> std::result::Result<Self, regex_lite::Error> {
        Ok(Self {
            store: KnowledgeStore::new(),
            parser: CommandParser::new()?,
            config,
            running: true,
        })
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn store(&self) -> &KnowledgeStore {
        &self.store
    }

    /// Process lines until `quit` or end of input; returns the number of lines read
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> io::Result<usize> {
        let mut processed = 0;

        for line in input.lines() {
            let line = line?;
            processed += 1;

            match self.execute(&line) {
                Ok(output) => output.write_to(&mut out, &self.config)?,
                Err(err) => {
                    record_command_error(&err);
                    debug!(
                        code = err.code().as_code(),
                        kind = err.kind().as_str(),
                        error = %err,
                        "Command rejected"
                    );
                    writeln!(out, "{}{}", self.config.error_prefix, err)?;
                }
            }
            out.flush()?;

            if !self.is_running() {
                break;
            }
        }

        Ok(processed)
    }

    /// Parse and execute a single line
    pub fn execute(&mut self, line: &str) -> Result<Output> {
        let command = self.parser.parse(line)?;
        if self.config.echo_commands {
            debug!(command = command.label(), "Command accepted");
        }

        let label = command.label();
        let output = self.dispatch(command)?;
        record_command(label);
        Ok(output)
    }

    fn dispatch(&mut self, command: Command) -> Result<Output> {
        match command {
            Command::Mutate(mutation) => {
                self.apply(mutation)?;
                Ok(Output::Silent)
            }
            Command::Query(query) => self.query(query),
            Command::Quit => {
                self.running = false;
                Ok(Output::Silent)
            }
        }
    }

    fn apply(&mut self, mutation: Mutation) -> Result<()> {
        let validator = Validator::new(&self.store);

        match mutation {
            Mutation::AddAuthor { name, surname } => {
                validator.check_new_author(&format!("{} {}", name, surname))?;
                self.store.add_author(&name, &surname);
            }
            Mutation::AddJournal { name, publisher } => {
                validator.check_new_journal(&name)?;
                self.store.add_journal(&name, &publisher);
            }
            Mutation::AddSeries { name } => {
                validator.check_new_series(&name)?;
                self.store.add_series(&name);
            }
            Mutation::AddConference {
                series,
                year,
                location,
            } => {
                let year = validator.check_new_conference(&series, &year)?;
                self.store.add_conference(&series, year, &location);
            }
            Mutation::AddArticle {
                kind,
                venue,
                id,
                year,
                title,
            } => {
                let year = validator.check_add_article(kind, &venue, &id, &year)?;
                self.store.add_article_to(kind, &venue, &id, year, &title);
            }
            Mutation::WrittenBy { id, authors } => {
                validator.check_written_by(&id, &authors)?;
                self.store.attribute_authors(&id, &authors);
            }
            Mutation::Cites { giver, receiver } => {
                validator.check_citation(&giver, &receiver)?;
                self.store.cite(&giver, &receiver);
            }
            Mutation::AddKeywords { target, keywords } => {
                validator.check_keyword_target(&target)?;
                self.store.add_keywords(&target, &keywords);
            }
        }

        Ok(())
    }

    fn query(&self, query: Query) -> Result<Output> {
        let validator = Validator::new(&self.store);
        let engine = QueryEngine::new(&self.store);

        let output = match query {
            Query::AllPublications => Output::Lines(engine.all_publications()),
            Query::InvalidPublications => Output::Lines(engine.invalid_publications()),
            Query::PublicationsBy { authors } => {
                let authors = validator.check_publications_by(&authors)?;
                Output::Lines(engine.publications_by(&authors))
            }
            Query::InProceedings { series, year } => {
                let (series, year) = validator.check_proceedings(&series, &year)?;
                Output::Lines(engine.in_proceedings(series, year))
            }
            Query::FindByKeywords { keywords } => Output::Lines(engine.find_by_keywords(&keywords)),
            Query::Jaccard { first, second } => {
                let first: HashSet<String> = first.into_iter().collect();
                let second: HashSet<String> = second.into_iter().collect();
                Output::Ratio(jaccard(&first, &second))
            }
            Query::Similarity { first, second } => {
                let (first, second) = validator.check_similarity(&first, &second)?;
                Output::Ratio(engine.similarity(first, second))
            }
            Query::GIndex { author } => {
                let author = validator.require_author(&author)?;
                Output::Count(engine.g_index(author))
            }
            Query::CoAuthors { author } => {
                let author = validator.require_author(&author)?;
                Output::Lines(engine.co_authors(author))
            }
            Query::ForeignCitations { author } => {
                let author = validator.require_author(&author)?;
                Output::Lines(engine.foreign_citations(author))
            }
            Query::PrintBibliography { style, ids } => {
                let articles = validator.check_bibliography(&ids)?;
                let entries = bibliography::resolve(&self.store, &articles);
                let lines = bibliography::render(style, &entries);
                match style {
                    Style::Acm => Output::Numbered(lines),
                    Style::Apa => Output::Lines(lines),
                }
            }
        };

        Ok(output)
    }
}
