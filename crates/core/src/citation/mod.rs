//! Citation graph between articles

mod graph;

pub use graph::{CitationEdge, CitationGraph};
