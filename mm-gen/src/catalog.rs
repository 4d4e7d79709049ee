//! The shipped model catalog: six fixed traffic models, described as pure
//! data tables and assembled by one generic builder.
//!
//! Every model shares the same transition topology – a `start` state that
//! hands off (weight 1.0) to a single self-looping state – and differs only
//! in the looping state's label and the emissions attached to it.

use std::path::{
    Path,
    PathBuf,
};

use anyhow::Result;
use tracing::{
    info,
    instrument,
};

use crate::graphml::write_graphml_file;
use crate::model::{
    Distribution,
    Edge,
    Node,
    Symbol,
};
use crate::ModelGraph;

/// Which traffic layer a model parameterizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelKind {
    /// Inter-packet behavior within a stream.
    Packet,
    /// Stream creation behavior within a flow.
    Stream,
    /// Flow creation behavior.
    Flow,
}

impl ModelKind {
    /// All kinds, in generation order.
    pub const ALL: [Self; 3] = [Self::Packet, Self::Stream, Self::Flow];

    /// Label used in the output file name.
    #[must_use]
    pub const fn file_label(self) -> &'static str {
        match self {
            Self::Packet => "packetmodel",
            Self::Stream => "streammodel",
            Self::Flow => "flowmodel",
        }
    }
}

/// Whether a model can terminate generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// No `F` observation: generation runs indefinitely.
    Default,
    /// Includes an `F` observation enabling probabilistic termination.
    Delayed,
}

impl Variant {
    /// Prefix used in the output file name.
    #[must_use]
    pub const fn file_prefix(self) -> &'static str {
        match self {
            Self::Default => "nonstop",
            Self::Delayed => "delayed",
        }
    }
}

/// One emission attached to the looping state.
struct EmissionSpec {
    /// Emitted observation symbol.
    symbol: Symbol,
    /// Emission weight.
    weight: f64,
    /// Timing/size distribution of the emission.
    distribution: Distribution,
}

/// Table describing one model: the looping state's label and its emissions.
struct ModelSpec {
    /// Label of the self-looping state entered from `start`.
    loop_state: &'static str,
    /// Emissions attached to the looping state, in serialization order.
    emissions: &'static [EmissionSpec],
}

/// Packets alternate directions at a high rate and never stop.
static DEFAULT_PACKET: ModelSpec = ModelSpec {
    loop_state: "nonstop",
    emissions: &[
        EmissionSpec {
            symbol: Symbol::ClientToServer,
            weight: 0.5,
            distribution: Distribution::Exponential { rate: 100.0 },
        },
        EmissionSpec {
            symbol: Symbol::ServerToClient,
            weight: 0.5,
            distribution: Distribution::Exponential { rate: 100.0 },
        },
    ],
};

/// Streams are created indefinitely at normally distributed intervals.
static DEFAULT_STREAM: ModelSpec = ModelSpec {
    loop_state: "default",
    emissions: &[EmissionSpec {
        symbol: Symbol::ClientToServer,
        weight: 1.0,
        distribution: Distribution::Normal { location: 10_000_000.0, scale: 4_000_000.0 },
    }],
};

/// Flows are created indefinitely at normally distributed intervals.
static DEFAULT_FLOW: ModelSpec = ModelSpec {
    loop_state: "default",
    emissions: &[EmissionSpec {
        symbol: Symbol::ClientToServer,
        weight: 1.0,
        distribution: Distribution::Normal { location: 60_000_000.0, scale: 15_000_000.0 },
    }],
};

/// Slow packet exchange with a small chance of finishing.
///
/// Reference data: the emission weights total 0.9999, not 1.0, and are
/// reproduced verbatim rather than normalized.
static DELAYED_PACKET: ModelSpec = ModelSpec {
    loop_state: "default",
    emissions: &[
        EmissionSpec {
            symbol: Symbol::ClientToServer,
            weight: 0.4999,
            distribution: Distribution::Exponential { rate: 0.00035 },
        },
        EmissionSpec {
            symbol: Symbol::ServerToClient,
            weight: 0.4999,
            distribution: Distribution::Exponential { rate: 0.00035 },
        },
        EmissionSpec {
            symbol: Symbol::Finish,
            weight: 0.0002,
            distribution: Distribution::Normal { location: 1_000_000.0, scale: 1.0 },
        },
    ],
};

/// Stream creation with a 10% chance of finishing.
static DELAYED_STREAM: ModelSpec = ModelSpec {
    loop_state: "default",
    emissions: &[
        EmissionSpec {
            symbol: Symbol::ClientToServer,
            weight: 0.9,
            distribution: Distribution::Normal { location: 10_000_000.0, scale: 4_000_000.0 },
        },
        EmissionSpec {
            symbol: Symbol::Finish,
            weight: 0.1,
            distribution: Distribution::Normal { location: 1_000_000.0, scale: 1.0 },
        },
    ],
};

/// Flow creation with a 40% chance of finishing.
static DELAYED_FLOW: ModelSpec = ModelSpec {
    loop_state: "default",
    emissions: &[
        EmissionSpec {
            symbol: Symbol::ClientToServer,
            weight: 0.6,
            distribution: Distribution::Normal { location: 30_000_000.0, scale: 10_000_000.0 },
        },
        EmissionSpec {
            symbol: Symbol::Finish,
            weight: 0.4,
            distribution: Distribution::Normal { location: 1_000_000.0, scale: 1.0 },
        },
    ],
};

/// Look up the data table for one model.
fn spec_for(kind: ModelKind, variant: Variant) -> &'static ModelSpec {
    match (variant, kind) {
        (Variant::Default, ModelKind::Packet) => &DEFAULT_PACKET,
        (Variant::Default, ModelKind::Stream) => &DEFAULT_STREAM,
        (Variant::Default, ModelKind::Flow) => &DEFAULT_FLOW,
        (Variant::Delayed, ModelKind::Packet) => &DELAYED_PACKET,
        (Variant::Delayed, ModelKind::Stream) => &DELAYED_STREAM,
        (Variant::Delayed, ModelKind::Flow) => &DELAYED_FLOW,
    }
}

/// File name of one model artifact, e.g. `nonstop.packetmodel.graphml`.
#[must_use]
pub fn output_filename(kind: ModelKind, variant: Variant) -> String {
    format!("{}.{}.graphml", variant.file_prefix(), kind.file_label())
}

/// Build the graph for one model from its data table.
#[must_use]
pub fn model_graph(kind: ModelKind, variant: Variant) -> ModelGraph {
    build(spec_for(kind, variant))
}

/// Wire up the shared topology and attach the table's emissions.
fn build(spec: &ModelSpec) -> ModelGraph {
    let mut graph = ModelGraph::new();

    // every model declares exactly one entry state named 'start'
    let start = graph.add_node(Node::state("start"));
    let looping = graph.add_node(Node::state(spec.loop_state));

    graph.add_edge(start, looping, Edge::Transition { weight: 1.0 });
    graph.add_edge(looping, looping, Edge::Transition { weight: 1.0 });

    for emission in spec.emissions {
        let observation = graph.add_node(Node::observation(emission.symbol.clone()));
        graph.add_edge(
            looping,
            observation,
            Edge::Emission {
                weight: emission.weight,
                distribution: emission.distribution.clone(),
            },
        );
    }

    graph
}

/// Build one model and serialize it into `dir`, returning the file path.
#[instrument(skip(dir))]
pub fn write_model_file(kind: ModelKind, variant: Variant, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(output_filename(kind, variant));
    let graph = model_graph(kind, variant);
    write_graphml_file(&graph, &path)?;

    info!("{:?} {:?} model written to: {}", variant, kind, path.display());
    Ok(path)
}
