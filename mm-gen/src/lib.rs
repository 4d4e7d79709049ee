#![deny(
    // Somewhat of a "quality seal": deviations need an inline allow, which
    // makes them visible at the deviation site.
    clippy::nursery,
    clippy::pedantic,
    missing_docs,
    clippy::missing_docs_in_private_items,
)]

//! # mm-gen – Markov traffic-model graph generator
//!
//! mm-gen emits the GraphML configuration artifacts that parameterize a
//! traffic generator's stochastic packet, stream, and flow models. Each
//! artifact is a small attributed directed graph: hidden states wired by
//! weighted transition edges, and weighted, distribution-parameterized
//! emission edges from states to the observation symbols the generator
//! replays (`+`/`-` traffic events, `F` termination).
//!
//! ## Pipeline overview
//! 1. Model catalog ([`catalog`]) – six fixed models (packet, stream, flow
//!    × nonstop/delayed) described as pure data tables and assembled into
//!    [`petgraph::Graph`]s by one generic builder.
//! 2. Serialization ([`graphml`]) – each graph is written as typed GraphML;
//!    a reader is provided so consumers and tests can load the artifacts
//!    back with their declared attribute types intact.
//! 3. Embedding ([`embed`]) – the nonstop artifacts are echoed to stdout as
//!    escaped string literals, ready to paste into a consumer's source.
//!
//! The binary entry point runs these stages in a fixed order; an I/O
//! failure aborts the run and leaves any files already written in place.

use petgraph::graph::DiGraph;

pub mod catalog;
pub mod embed;
pub mod graphml;
pub mod logging;
pub mod model;

pub use catalog::{
    model_graph,
    output_filename,
    write_model_file,
    ModelKind,
    Variant,
};
pub use embed::print_file_as_literals;
pub use graphml::{
    read_graphml_file,
    write_graphml_file,
};
pub use model::{
    Distribution,
    Edge,
    Node,
    Symbol,
};

/// Directed graph describing one traffic model: hidden states wired by
/// transition edges, emitting observation symbols through emission edges.
pub type ModelGraph = DiGraph<Node, Edge>;
