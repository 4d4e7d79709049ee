//! Typed node and edge payloads for traffic model graphs.
//!
//! The on-disk format is an attributed graph with stringly-typed attribute
//! bags; in memory every attribute set is a tagged variant instead, so an
//! emission can only ever carry exactly the parameters its distribution
//! requires.

use std::collections::BTreeMap;
use std::fmt;

use anyhow::Result;

/// Observation symbol emitted while the generator walks a model.
///
/// `+`, `-`, and `F` are reserved keywords understood by the traffic
/// generator; any other spelling is passed through untouched for consumers
/// that define their own symbols.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Symbol {
    /// `+` – packet from client to server, or creation of a new stream.
    ClientToServer,
    /// `-` – packet from server to client, or creation of a new stream.
    ServerToClient,
    /// `F` – end the generation process.
    Finish,
    /// A consumer-defined symbol outside the reserved set.
    Other(String),
}

impl Symbol {
    /// The wire spelling of this symbol.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::ClientToServer => "+",
            Self::ServerToClient => "-",
            Self::Finish => "F",
            Self::Other(name) => name,
        }
    }

    /// Whether this symbol is one of the reserved keywords.
    #[must_use]
    pub const fn is_reserved(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        match value {
            "+" => Self::ClientToServer,
            "-" => Self::ServerToClient,
            "F" => Self::Finish,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Statistical distribution attached to an emission edge, governing the
/// timing or size characteristics of the emitted observation.
#[derive(Clone, Debug, PartialEq)]
pub enum Distribution {
    /// Uniform over `[low, high]`.
    Uniform {
        /// Lower bound.
        low: f64,
        /// Upper bound.
        high: f64,
    },
    /// Normal with the given location (mean) and scale (standard deviation).
    Normal {
        /// Mean.
        location: f64,
        /// Standard deviation.
        scale: f64,
    },
    /// Exponential with the given rate.
    Exponential {
        /// Rate (inverse mean).
        rate: f64,
    },
    /// Log-normal with the given location and scale.
    LogNormal {
        /// Location of the underlying normal.
        location: f64,
        /// Scale of the underlying normal.
        scale: f64,
    },
    /// Pareto with the given scale and shape.
    Pareto {
        /// Scale (minimum value).
        scale: f64,
        /// Shape (tail index).
        shape: f64,
    },
}

impl Distribution {
    /// The wire name of this distribution family.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Uniform { .. } => "uniform",
            Self::Normal { .. } => "normal",
            Self::Exponential { .. } => "exponential",
            Self::LogNormal { .. } => "lognormal",
            Self::Pareto { .. } => "pareto",
        }
    }

    /// Parameter attributes in serialization order, as `(attribute, value)`
    /// pairs.
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, f64)> {
        match *self {
            Self::Uniform { low, high } => vec![("param_low", low), ("param_high", high)],
            Self::Normal { location, scale } | Self::LogNormal { location, scale } => {
                vec![("param_location", location), ("param_scale", scale)]
            },
            Self::Exponential { rate } => vec![("param_rate", rate)],
            Self::Pareto { scale, shape } => vec![("param_scale", scale), ("param_shape", shape)],
        }
    }

    /// Reassemble a distribution from its wire name and `param_*` attribute
    /// values.
    ///
    /// The attribute set must match the family's parameter set exactly;
    /// missing or surplus parameters are an error.
    pub fn from_parts(kind: &str, params: &BTreeMap<String, f64>) -> Result<Self> {
        let take = |name: &str| {
            params
                .get(name)
                .copied()
                .ok_or_else(|| anyhow::anyhow!("{kind} distribution is missing {name}"))
        };

        let distribution = match kind {
            "uniform" => Self::Uniform { low: take("param_low")?, high: take("param_high")? },
            "normal" => Self::Normal {
                location: take("param_location")?,
                scale: take("param_scale")?,
            },
            "exponential" => Self::Exponential { rate: take("param_rate")? },
            "lognormal" => Self::LogNormal {
                location: take("param_location")?,
                scale: take("param_scale")?,
            },
            "pareto" => Self::Pareto { scale: take("param_scale")?, shape: take("param_shape")? },
            other => anyhow::bail!("unknown distribution {other:?}"),
        };

        let expected: Vec<&str> = distribution.params().iter().map(|(name, _)| *name).collect();
        if let Some(extra) = params.keys().find(|key| !expected.contains(&key.as_str())) {
            anyhow::bail!("{kind} distribution carries unexpected parameter {extra:?}");
        }

        Ok(distribution)
    }
}

/// Node payload: either a hidden generation state or an observation symbol.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// A hidden generation phase.
    ///
    /// Exactly one state per graph is named `start`; it is the entry point
    /// for the generator. All other state names are free-form labels.
    State {
        /// Free-form label; `start` is reserved for the entry state.
        name: String,
    },
    /// An emitted traffic event.
    Observation {
        /// The emitted symbol.
        symbol: Symbol,
    },
}

impl Node {
    /// Shorthand for a state node.
    pub fn state(name: impl Into<String>) -> Self {
        Self::State { name: name.into() }
    }

    /// Shorthand for an observation node.
    #[must_use]
    pub const fn observation(symbol: Symbol) -> Self {
        Self::Observation { symbol }
    }

    /// Value of the `type` attribute.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::State { .. } => "state",
            Self::Observation { .. } => "observation",
        }
    }

    /// Value of the `name` attribute.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::State { name } => name,
            Self::Observation { symbol } => symbol.as_str(),
        }
    }
}

/// Edge payload: a weighted move between states, or a weighted,
/// distribution-parameterized emission from a state to an observation.
#[derive(Clone, Debug, PartialEq)]
pub enum Edge {
    /// A possible move between hidden states.
    Transition {
        /// Relative likelihood of taking this move.
        weight: f64,
    },
    /// A link from a state to an observation it can emit.
    Emission {
        /// Relative likelihood of this emission. Outgoing emission weights
        /// are interpreted by the consumer as (possibly unnormalized)
        /// probabilities; nothing here forces them to sum to 1.
        weight: f64,
        /// Timing/size characteristics of the emission.
        distribution: Distribution,
    },
}

impl Edge {
    /// Value of the `type` attribute.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Transition { .. } => "transition",
            Self::Emission { .. } => "emission",
        }
    }

    /// Value of the `weight` attribute.
    #[must_use]
    pub const fn weight(&self) -> f64 {
        match self {
            Self::Transition { weight } | Self::Emission { weight, .. } => *weight,
        }
    }
}
