//! GraphML serialization and deserialization of model graphs.
//!
//! The traffic generator consumes attributed GraphML: every node carries
//! `type` and `name`, every edge `type` and `weight`, and emission edges a
//! `distribution` plus its `param_*` values. Attributes are declared as
//! typed `<key>` elements (`string` or `double`) so values survive a round
//! trip with their declared types intact.

use std::collections::BTreeMap;
use std::fs;
use std::fs::File;
use std::io::{
    BufWriter,
    Write,
};
use std::path::Path;

use anyhow::{
    Context,
    Result,
};
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use quick_xml::events::{
    BytesDecl,
    BytesEnd,
    BytesStart,
    BytesText,
    Event,
};
use quick_xml::{
    Reader,
    Writer,
};
use tracing::{
    debug,
    instrument,
};

use crate::model::{
    Distribution,
    Edge,
    Node,
    Symbol,
};
use crate::ModelGraph;

/// XML namespace of the GraphML format.
const GRAPHML_NS: &str = "http://graphml.graphdrawing.org/xmlns";
/// XML Schema instance namespace, referenced from the root element.
const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
/// Schema location hint for validating consumers.
const SCHEMA_LOCATION: &str =
    "http://graphml.graphdrawing.org/xmlns http://graphml.graphdrawing.org/xmlns/1.0/graphml.xsd";

/// A typed attribute value attached to a node or edge.
enum AttrValue {
    /// A GraphML `string` attribute.
    Text(String),
    /// A GraphML `double` attribute.
    Double(f64),
}

impl AttrValue {
    /// GraphML `attr.type` of this value.
    const fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "string",
            Self::Double(_) => "double",
        }
    }

    /// Wire rendering of this value.
    fn render(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Double(value) => format_double(*value),
        }
    }
}

/// Render a double so it always reads back as a float: integral values keep
/// a trailing `.0` instead of collapsing to an integer literal.
fn format_double(value: f64) -> String {
    let rendered = value.to_string();
    if rendered.contains(['.', 'e', 'E']) || value.is_nan() || value.is_infinite() {
        rendered
    } else {
        format!("{rendered}.0")
    }
}

/// Attributes serialized for a node, in declaration order.
fn node_attrs(node: &Node) -> Vec<(&'static str, AttrValue)> {
    vec![
        ("type", AttrValue::Text(node.type_name().to_owned())),
        ("name", AttrValue::Text(node.name().to_owned())),
    ]
}

/// Attributes serialized for an edge, in declaration order.
fn edge_attrs(edge: &Edge) -> Vec<(&'static str, AttrValue)> {
    let mut attrs = vec![
        ("type", AttrValue::Text(edge.type_name().to_owned())),
        ("weight", AttrValue::Double(edge.weight())),
    ];
    if let Edge::Emission { distribution, .. } = edge {
        attrs.push(("distribution", AttrValue::Text(distribution.kind().to_owned())));
        for (name, value) in distribution.params() {
            attrs.push((name, AttrValue::Double(value)));
        }
    }
    attrs
}

/// One `<key>` declaration: a named, typed attribute scoped to nodes or
/// edges.
struct KeyDecl {
    /// `d0`-style identifier referenced from `<data>` elements.
    id: String,
    /// Scope of the attribute (`node` or `edge`).
    domain: &'static str,
    /// Attribute name (`type`, `weight`, `param_rate`, ...).
    name: String,
    /// GraphML attribute type (`string` or `double`).
    attr_type: &'static str,
}

/// Register an attribute in the declaration table if it is new.
fn push_key(keys: &mut Vec<KeyDecl>, domain: &'static str, name: &str, attr_type: &'static str) {
    if !keys.iter().any(|key| key.domain == domain && key.name == name) {
        let id = format!("d{}", keys.len());
        keys.push(KeyDecl { id, domain, name: name.to_owned(), attr_type });
    }
}

/// Collect the `<key>` declarations for a graph: node attributes first,
/// then edge attributes, each in first-encounter order.
fn collect_keys(graph: &ModelGraph) -> Vec<KeyDecl> {
    let mut keys = Vec::new();
    for node in graph.node_weights() {
        for (name, value) in node_attrs(node) {
            push_key(&mut keys, "node", name, value.type_name());
        }
    }
    for edge in graph.edge_weights() {
        for (name, value) in edge_attrs(edge) {
            push_key(&mut keys, "edge", name, value.type_name());
        }
    }
    keys
}

/// Look up the declared id of an attribute.
fn key_id<'a>(keys: &'a [KeyDecl], domain: &str, name: &str) -> &'a str {
    keys.iter()
        .find(|key| key.domain == domain && key.name == name)
        .map(|key| key.id.as_str())
        .expect("attribute missing from the key declaration table")
}

/// Node identifier used in the serialized document. Identifiers only need
/// to be unique; labels live in the `name` attribute.
fn node_id(index: NodeIndex) -> String {
    format!("n{}", index.index())
}

/// Write the `<data>` children for one node or edge.
fn write_data<W: Write>(
    writer: &mut Writer<W>,
    keys: &[KeyDecl],
    domain: &str,
    attrs: &[(&'static str, AttrValue)],
) -> Result<()> {
    for (name, value) in attrs {
        let mut data = BytesStart::new("data");
        data.push_attribute(("key", key_id(keys, domain, name)));
        writer.write_event(Event::Start(data))?;
        let rendered = value.render();
        writer.write_event(Event::Text(BytesText::new(&rendered)))?;
        writer.write_event(Event::End(BytesEnd::new("data")))?;
    }
    Ok(())
}

/// Serialize `graph` as a GraphML document to `out`.
pub fn write_graphml<W: Write>(graph: &ModelGraph, out: W) -> Result<()> {
    let keys = collect_keys(graph);
    let mut writer = Writer::new_with_indent(out, b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let mut root = BytesStart::new("graphml");
    root.push_attribute(("xmlns", GRAPHML_NS));
    root.push_attribute(("xmlns:xsi", XSI_NS));
    root.push_attribute(("xsi:schemaLocation", SCHEMA_LOCATION));
    writer.write_event(Event::Start(root))?;

    for key in &keys {
        let mut elem = BytesStart::new("key");
        elem.push_attribute(("id", key.id.as_str()));
        elem.push_attribute(("for", key.domain));
        elem.push_attribute(("attr.name", key.name.as_str()));
        elem.push_attribute(("attr.type", key.attr_type));
        writer.write_event(Event::Empty(elem))?;
    }

    let mut graph_elem = BytesStart::new("graph");
    graph_elem.push_attribute(("edgedefault", "directed"));
    writer.write_event(Event::Start(graph_elem))?;

    for index in graph.node_indices() {
        let mut node_elem = BytesStart::new("node");
        node_elem.push_attribute(("id", node_id(index).as_str()));
        writer.write_event(Event::Start(node_elem))?;
        write_data(&mut writer, &keys, "node", &node_attrs(&graph[index]))?;
        writer.write_event(Event::End(BytesEnd::new("node")))?;
    }

    for edge in graph.edge_references() {
        let mut edge_elem = BytesStart::new("edge");
        edge_elem.push_attribute(("source", node_id(edge.source()).as_str()));
        edge_elem.push_attribute(("target", node_id(edge.target()).as_str()));
        writer.write_event(Event::Start(edge_elem))?;
        write_data(&mut writer, &keys, "edge", &edge_attrs(edge.weight()))?;
        writer.write_event(Event::End(BytesEnd::new("edge")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("graph")))?;
    writer.write_event(Event::End(BytesEnd::new("graphml")))?;

    let mut out = writer.into_inner();
    out.write_all(b"\n")?;
    Ok(())
}

/// Build the GraphML document for `graph` as a string.
pub fn graphml_string(graph: &ModelGraph) -> Result<String> {
    let mut buf = Vec::new();
    write_graphml(graph, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

/// Serialize `graph` to `path`, creating or truncating the file.
#[instrument(skip(graph))]
pub fn write_graphml_file(graph: &ModelGraph, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write_graphml(graph, &mut out)?;
    out.flush()?;

    debug!("model written to: {}", path.display());
    Ok(())
}

/// Read a previously written model file back into a graph.
#[instrument]
pub fn read_graphml_file(path: &Path) -> Result<ModelGraph> {
    let text = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    parse_graphml(&text).with_context(|| format!("malformed model file {}", path.display()))
}

/// Raw attribute bag captured for a node or edge before typing.
type AttrBag = BTreeMap<String, String>;

/// A `<node>` element as captured from the document.
struct RawNode {
    /// The node's document identifier.
    id: String,
    /// Attribute values, keyed by resolved attribute name.
    data: AttrBag,
}

/// An `<edge>` element as captured from the document.
struct RawEdge {
    /// Identifier of the source node.
    source: String,
    /// Identifier of the target node.
    target: String,
    /// Attribute values, keyed by resolved attribute name.
    data: AttrBag,
}

/// Element currently being captured by the parser.
enum Scope {
    /// Inside a `<node>` element.
    Node(RawNode),
    /// Inside an `<edge>` element.
    Edge(RawEdge),
}

/// Fetch a required attribute from an element, unescaped.
fn required_attr(elem: &BytesStart<'_>, name: &str) -> Result<String> {
    for attr in elem.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == name.as_bytes() {
            return Ok(attr.unescape_value()?.into_owned());
        }
    }
    anyhow::bail!(
        "<{}> is missing the {name:?} attribute",
        String::from_utf8_lossy(elem.name().as_ref())
    )
}

/// Record one `<key>` declaration into the per-domain lookup tables.
fn record_key(
    elem: &BytesStart<'_>,
    node_keys: &mut BTreeMap<String, String>,
    edge_keys: &mut BTreeMap<String, String>,
) -> Result<()> {
    let id = required_attr(elem, "id")?;
    let domain = required_attr(elem, "for")?;
    let name = required_attr(elem, "attr.name")?;
    match domain.as_str() {
        "node" => {
            node_keys.insert(id, name);
        },
        "edge" => {
            edge_keys.insert(id, name);
        },
        "all" => {
            node_keys.insert(id.clone(), name.clone());
            edge_keys.insert(id, name);
        },
        other => anyhow::bail!("unsupported key domain {other:?}"),
    }
    Ok(())
}

/// Require `edgedefault="directed"`; models are directed graphs.
fn check_directed(elem: &BytesStart<'_>) -> Result<()> {
    let default = required_attr(elem, "edgedefault")?;
    if default != "directed" {
        anyhow::bail!("unsupported edgedefault {default:?}");
    }
    Ok(())
}

/// Attach one captured `<data>` value to the node or edge being built.
fn store_data(
    scope: &mut Option<Scope>,
    node_keys: &BTreeMap<String, String>,
    edge_keys: &BTreeMap<String, String>,
    key: &str,
    value: String,
) -> Result<()> {
    let Some(current) = scope.as_mut() else {
        anyhow::bail!("data element outside of a node or edge");
    };
    let (keys, bag) = match current {
        Scope::Node(node) => (node_keys, &mut node.data),
        Scope::Edge(edge) => (edge_keys, &mut edge.data),
    };
    let name = keys
        .get(key)
        .with_context(|| format!("data element references undeclared key {key:?}"))?;
    bag.insert(name.clone(), value);
    Ok(())
}

/// Convert a captured `<node>` into its typed payload.
fn typed_node(raw: &RawNode) -> Result<Node> {
    let node_type = raw
        .data
        .get("type")
        .with_context(|| format!("node {:?} has no type", raw.id))?;
    let name = raw
        .data
        .get("name")
        .with_context(|| format!("node {:?} has no name", raw.id))?;
    match node_type.as_str() {
        "state" => Ok(Node::state(name.clone())),
        "observation" => Ok(Node::observation(Symbol::from(name.as_str()))),
        other => anyhow::bail!("node {:?} has unknown type {other:?}", raw.id),
    }
}

/// Convert a captured `<edge>` into its typed payload.
fn typed_edge(raw: &RawEdge) -> Result<Edge> {
    let label = format!("{} -> {}", raw.source, raw.target);
    let edge_type = raw
        .data
        .get("type")
        .with_context(|| format!("edge {label} has no type"))?;
    let weight: f64 = raw
        .data
        .get("weight")
        .with_context(|| format!("edge {label} has no weight"))?
        .parse()
        .with_context(|| format!("edge {label} has a non-numeric weight"))?;

    let mut params = BTreeMap::new();
    for (key, value) in &raw.data {
        if key.starts_with("param_") {
            let parsed: f64 = value
                .parse()
                .with_context(|| format!("edge {label}: {key} is not numeric"))?;
            params.insert(key.clone(), parsed);
        }
    }

    match edge_type.as_str() {
        "transition" => {
            if raw.data.contains_key("distribution") || !params.is_empty() {
                anyhow::bail!("transition edge {label} carries emission attributes");
            }
            Ok(Edge::Transition { weight })
        },
        "emission" => {
            let kind = raw
                .data
                .get("distribution")
                .with_context(|| format!("emission edge {label} has no distribution"))?;
            let distribution = Distribution::from_parts(kind, &params)
                .with_context(|| format!("emission edge {label}"))?;
            Ok(Edge::Emission { weight, distribution })
        },
        other => anyhow::bail!("edge {label} has unknown type {other:?}"),
    }
}

/// Parse a GraphML document following the model schema into a graph.
///
/// Accepts any unique node id scheme, so documents written by other tools
/// against the same schema load as well.
#[allow(clippy::too_many_lines)] // one flat event loop reads better than split-out halves
pub fn parse_graphml(text: &str) -> Result<ModelGraph> {
    let mut reader = Reader::from_str(text);

    let mut node_keys: BTreeMap<String, String> = BTreeMap::new();
    let mut edge_keys: BTreeMap<String, String> = BTreeMap::new();
    let mut nodes: Vec<RawNode> = Vec::new();
    let mut edges: Vec<RawEdge> = Vec::new();

    let mut scope: Option<Scope> = None;
    let mut data_key: Option<String> = None;
    let mut data_value = String::new();

    loop {
        match reader.read_event().context("invalid XML")? {
            Event::Start(elem) => match elem.name().as_ref() {
                b"graphml" => {},
                b"graph" => check_directed(&elem)?,
                b"key" => record_key(&elem, &mut node_keys, &mut edge_keys)?,
                b"node" => {
                    scope = Some(Scope::Node(RawNode {
                        id: required_attr(&elem, "id")?,
                        data: AttrBag::new(),
                    }));
                },
                b"edge" => {
                    scope = Some(Scope::Edge(RawEdge {
                        source: required_attr(&elem, "source")?,
                        target: required_attr(&elem, "target")?,
                        data: AttrBag::new(),
                    }));
                },
                b"data" => {
                    data_key = Some(required_attr(&elem, "key")?);
                    data_value.clear();
                },
                other => {
                    anyhow::bail!("unexpected element <{}>", String::from_utf8_lossy(other))
                },
            },
            Event::Empty(elem) => match elem.name().as_ref() {
                b"key" => record_key(&elem, &mut node_keys, &mut edge_keys)?,
                b"node" => nodes.push(RawNode {
                    id: required_attr(&elem, "id")?,
                    data: AttrBag::new(),
                }),
                b"data" => {
                    let key = required_attr(&elem, "key")?;
                    store_data(&mut scope, &node_keys, &edge_keys, &key, String::new())?;
                },
                other => {
                    anyhow::bail!("unexpected element <{}/>", String::from_utf8_lossy(other))
                },
            },
            Event::Text(chunk) => {
                if data_key.is_some() {
                    data_value.push_str(&chunk.unescape()?);
                }
            },
            Event::End(elem) => match elem.name().as_ref() {
                b"data" => {
                    let key = data_key.take().context("dangling </data>")?;
                    store_data(&mut scope, &node_keys, &edge_keys, &key, std::mem::take(&mut data_value))?;
                },
                b"node" => {
                    if let Some(Scope::Node(node)) = scope.take() {
                        nodes.push(node);
                    }
                },
                b"edge" => {
                    if let Some(Scope::Edge(edge)) = scope.take() {
                        edges.push(edge);
                    }
                },
                _ => {},
            },
            Event::Eof => break,
            _ => {},
        }
    }

    let mut graph = ModelGraph::new();
    let mut index_by_id: BTreeMap<String, NodeIndex> = BTreeMap::new();
    for raw in &nodes {
        let index = graph.add_node(typed_node(raw)?);
        if index_by_id.insert(raw.id.clone(), index).is_some() {
            anyhow::bail!("duplicate node id {:?}", raw.id);
        }
    }
    for raw in &edges {
        let source = *index_by_id
            .get(&raw.source)
            .with_context(|| format!("edge references unknown node {:?}", raw.source))?;
        let target = *index_by_id
            .get(&raw.target)
            .with_context(|| format!("edge references unknown node {:?}", raw.target))?;
        graph.add_edge(source, target, typed_edge(raw)?);
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use assertables::*;
    use rstest::rstest;

    use super::*;
    use crate::catalog::{
        model_graph,
        ModelKind,
        Variant,
    };

    /// Assert that two graphs carry identical node and edge sequences.
    fn assert_graphs_equal(left: &ModelGraph, right: &ModelGraph) {
        let left_nodes: Vec<_> = left.node_weights().collect();
        let right_nodes: Vec<_> = right.node_weights().collect();
        assert_eq!(left_nodes, right_nodes);

        let left_edges: Vec<_> = left
            .edge_references()
            .map(|edge| (edge.source().index(), edge.target().index(), edge.weight().clone()))
            .collect();
        let right_edges: Vec<_> = right
            .edge_references()
            .map(|edge| (edge.source().index(), edge.target().index(), edge.weight().clone()))
            .collect();
        assert_eq!(left_edges, right_edges);
    }

    #[rstest]
    #[case(ModelKind::Packet, Variant::Default)]
    #[case(ModelKind::Stream, Variant::Default)]
    #[case(ModelKind::Flow, Variant::Default)]
    #[case(ModelKind::Packet, Variant::Delayed)]
    #[case(ModelKind::Stream, Variant::Delayed)]
    #[case(ModelKind::Flow, Variant::Delayed)]
    fn round_trip_preserves_every_model(#[case] kind: ModelKind, #[case] variant: Variant) {
        let graph = model_graph(kind, variant);
        let text = graphml_string(&graph).unwrap();
        let parsed = parse_graphml(&text).unwrap();
        assert_graphs_equal(&graph, &parsed);
    }

    #[test]
    fn round_trip_escapes_xml_significant_names() {
        let mut graph = ModelGraph::new();
        let start = graph.add_node(Node::state("start"));
        let noisy = graph.add_node(Node::state(r#"a<b>&"c"#));
        let observation = graph.add_node(Node::observation(Symbol::Other("<&>".to_owned())));
        graph.add_edge(start, noisy, Edge::Transition { weight: 1.0 });
        graph.add_edge(
            noisy,
            observation,
            Edge::Emission {
                weight: 1.0,
                distribution: Distribution::Uniform { low: 0.0, high: 2.0 },
            },
        );

        let text = graphml_string(&graph).unwrap();
        let parsed = parse_graphml(&text).unwrap();
        assert_graphs_equal(&graph, &parsed);
    }

    #[test]
    fn attribute_keys_are_declared_with_their_types() {
        let graph = model_graph(ModelKind::Packet, Variant::Default);
        let text = graphml_string(&graph).unwrap();

        assert_contains!(text, r#"for="node" attr.name="type" attr.type="string""#);
        assert_contains!(text, r#"for="node" attr.name="name" attr.type="string""#);
        assert_contains!(text, r#"for="edge" attr.name="weight" attr.type="double""#);
        assert_contains!(text, r#"for="edge" attr.name="param_rate" attr.type="double""#);
        assert_contains!(text, r#"<graph edgedefault="directed">"#);
    }

    #[test]
    fn doubles_keep_their_decimal_point() {
        assert_eq!(format_double(100.0), "100.0");
        assert_eq!(format_double(1.0), "1.0");
        assert_eq!(format_double(0.00035), "0.00035");
        assert_eq!(format_double(15_000_000.0), "15000000.0");
    }

    #[test]
    fn parser_accepts_foreign_node_ids() {
        let text = r#"<?xml version="1.0" encoding="utf-8"?>
<graphml xmlns="http://graphml.graphdrawing.org/xmlns">
  <key id="d0" for="node" attr.name="type" attr.type="string"/>
  <key id="d1" for="node" attr.name="name" attr.type="string"/>
  <key id="d2" for="edge" attr.name="type" attr.type="string"/>
  <key id="d3" for="edge" attr.name="weight" attr.type="double"/>
  <graph edgedefault="directed">
    <node id="s0">
      <data key="d0">state</data>
      <data key="d1">start</data>
    </node>
    <node id="s1">
      <data key="d0">state</data>
      <data key="d1">nonstop</data>
    </node>
    <edge source="s0" target="s1">
      <data key="d2">transition</data>
      <data key="d3">1.0</data>
    </edge>
  </graph>
</graphml>
"#;
        let graph = parse_graphml(text).unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph[petgraph::graph::NodeIndex::new(0)], Node::state("start"));
    }

    #[test]
    fn parser_rejects_nodes_without_a_name() {
        let text = r#"<?xml version="1.0" encoding="utf-8"?>
<graphml xmlns="http://graphml.graphdrawing.org/xmlns">
  <key id="d0" for="node" attr.name="type" attr.type="string"/>
  <graph edgedefault="directed">
    <node id="s0">
      <data key="d0">state</data>
    </node>
  </graph>
</graphml>
"#;
        let err = parse_graphml(text).unwrap_err();
        assert_contains!(format!("{err:#}"), "has no name");
    }

    #[test]
    fn parser_rejects_unknown_distributions() {
        let graph = model_graph(ModelKind::Packet, Variant::Default);
        let text = graphml_string(&graph).unwrap().replace("exponential", "gamma");
        let err = parse_graphml(&text).unwrap_err();
        assert_contains!(format!("{err:#}"), "gamma");
    }

    #[test]
    fn parser_rejects_transitions_with_emission_attributes() {
        let text = r#"<?xml version="1.0" encoding="utf-8"?>
<graphml xmlns="http://graphml.graphdrawing.org/xmlns">
  <key id="d0" for="node" attr.name="type" attr.type="string"/>
  <key id="d1" for="node" attr.name="name" attr.type="string"/>
  <key id="d2" for="edge" attr.name="type" attr.type="string"/>
  <key id="d3" for="edge" attr.name="weight" attr.type="double"/>
  <key id="d4" for="edge" attr.name="distribution" attr.type="string"/>
  <graph edgedefault="directed">
    <node id="s0">
      <data key="d0">state</data>
      <data key="d1">start</data>
    </node>
    <edge source="s0" target="s0">
      <data key="d2">transition</data>
      <data key="d3">1.0</data>
      <data key="d4">normal</data>
    </edge>
  </graph>
</graphml>
"#;
        let err = parse_graphml(text).unwrap_err();
        assert_contains!(format!("{err:#}"), "emission attributes");
    }

    #[test]
    fn parser_rejects_edges_to_undeclared_nodes() {
        let text = r#"<?xml version="1.0" encoding="utf-8"?>
<graphml xmlns="http://graphml.graphdrawing.org/xmlns">
  <key id="d0" for="node" attr.name="type" attr.type="string"/>
  <key id="d1" for="node" attr.name="name" attr.type="string"/>
  <key id="d2" for="edge" attr.name="type" attr.type="string"/>
  <key id="d3" for="edge" attr.name="weight" attr.type="double"/>
  <graph edgedefault="directed">
    <node id="s0">
      <data key="d0">state</data>
      <data key="d1">start</data>
    </node>
    <edge source="s0" target="s9">
      <data key="d2">transition</data>
      <data key="d3">1.0</data>
    </edge>
  </graph>
</graphml>
"#;
        let err = parse_graphml(text).unwrap_err();
        assert_contains!(format!("{err:#}"), "unknown node");
    }

    #[test]
    fn files_round_trip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.graphml");
        let graph = model_graph(ModelKind::Flow, Variant::Delayed);

        write_graphml_file(&graph, &path).unwrap();
        let parsed = read_graphml_file(&path).unwrap();
        assert_graphs_equal(&graph, &parsed);
    }

    #[test]
    fn missing_files_are_an_error() {
        let err = read_graphml_file(Path::new("no-such-model.graphml")).unwrap_err();
        assert_contains!(format!("{err:#}"), "no-such-model.graphml");
    }
}
