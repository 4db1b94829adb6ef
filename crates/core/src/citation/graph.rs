//! Citation graph representation
//!
//! Directed edges from citing (giver) to cited (receiver) article, with both
//! adjacency directions kept in insertion order.

use crate::model::ArticleKey;
use std::collections::{HashMap, HashSet};

/// Edge in the citation graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CitationEdge {
    /// Citing article
    pub giver: ArticleKey,

    /// Cited article
    pub receiver: ArticleKey,
}

/// In-memory citation graph
#[derive(Debug, Clone, Default)]
pub struct CitationGraph {
    /// Adjacency list: article -> articles it cites
    outgoing: HashMap<ArticleKey, Vec<ArticleKey>>,

    /// Reverse adjacency: article -> articles citing it
    incoming: HashMap<ArticleKey, Vec<ArticleKey>>,

    edge_count: usize,
}

impl CitationGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an edge to the graph
    ///
    /// Year ordering and self-citation are not checked here.
    pub fn add_edge(&mut self, edge: CitationEdge) {
        self.outgoing.entry(edge.giver).or_default().push(edge.receiver);
        self.incoming.entry(edge.receiver).or_default().push(edge.giver);
        self.edge_count += 1;
    }

    /// Articles cited by this article (given cites)
    pub fn get_references(&self, article: ArticleKey) -> &[ArticleKey] {
        self.outgoing.get(&article).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Articles citing this article (received cites)
    pub fn get_citations(&self, article: ArticleKey) -> &[ArticleKey] {
        self.incoming.get(&article).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Number of received citations
    pub fn citation_count(&self, article: ArticleKey) -> usize {
        self.incoming.get(&article).map(|v| v.len()).unwrap_or(0)
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Union of the articles citing any of `articles`, first-seen order
    pub fn citing_any(&self, articles: &[ArticleKey]) -> Vec<ArticleKey> {
        let mut seen = HashSet::new();
        let mut result = Vec::new();

        for &article in articles {
            for &citing in self.get_citations(article) {
                if seen.insert(citing) {
                    result.push(citing);
                }
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(giver: usize, receiver: usize) -> CitationEdge {
        CitationEdge {
            giver: ArticleKey(giver),
            receiver: ArticleKey(receiver),
        }
    }

    #[test]
    fn test_graph_construction() {
        let mut graph = CitationGraph::new();

        // A cites B, B cites C
        graph.add_edge(edge(1, 2));
        graph.add_edge(edge(2, 3));

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.get_references(ArticleKey(1)), &[ArticleKey(2)]);
        assert_eq!(graph.get_citations(ArticleKey(2)), &[ArticleKey(1)]);
        assert_eq!(graph.get_references(ArticleKey(2)), &[ArticleKey(3)]);
        assert!(graph.get_citations(ArticleKey(1)).is_empty());
    }

    #[test]
    fn test_citation_counts() {
        let mut graph = CitationGraph::new();

        // Both A and C cite B
        graph.add_edge(edge(1, 2));
        graph.add_edge(edge(3, 2));

        assert_eq!(graph.citation_count(ArticleKey(2)), 2);
        assert_eq!(graph.get_references(ArticleKey(1)).len(), 1);
        assert_eq!(graph.citation_count(ArticleKey(9)), 0);
    }

    #[test]
    fn test_citing_any_deduplicates() {
        let mut graph = CitationGraph::new();

        // D cites both A and B; E cites B
        graph.add_edge(edge(4, 1));
        graph.add_edge(edge(4, 2));
        graph.add_edge(edge(5, 2));

        let citing = graph.citing_any(&[ArticleKey(1), ArticleKey(2)]);
        assert_eq!(citing, vec![ArticleKey(4), ArticleKey(5)]);
    }
}
