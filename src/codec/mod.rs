//! Conversion between line-oriented text and [`GraphModel`](crate::graph::GraphModel).

mod edit;
mod error;
mod file;
mod format;

pub use edit::{
	EdgeTriple, EditParse, WEIGHTED_EDGE_DEFAULT, detect_weighted, extract_vertices, parse_edges,
	parse_live, parse_strict, to_edit_text,
};
pub use error::FormatError;
pub use file::{export_report, export_report_to_path, read_graph, read_graph_from_path, to_load_text};
pub use format::{display_weight, format_weight};
