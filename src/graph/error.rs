//! Errors surfaced by editing operations.

use std::path::PathBuf;

use thiserror::Error;

use crate::codec::FormatError;

/// Failures reported to the user by the editing session.
#[derive(Error, Debug)]
pub enum GraphError {
	/// Malformed edge-list or load-format text
	#[error(transparent)]
	Format(#[from] FormatError),

	/// Vertex name already present
	#[error("vertex '{0}' already exists")]
	DuplicateVertex(String),

	/// Unweighted edge already present
	#[error("edge between '{from}' and '{to}' already exists")]
	DuplicateEdge {
		/// First endpoint
		from: String,
		/// Second endpoint
		to: String,
	},

	/// Required vertex name left blank
	#[error("enter a vertex name")]
	EmptyName,

	/// Vertex names are single tokens in every text form
	#[error("vertex name '{0}' cannot contain whitespace")]
	InvalidName(String),

	/// Weight typed into the edge form is not a number
	#[error("weight '{0}' is not a valid number")]
	InvalidWeight(String),

	/// Reading or writing a graph file failed
	#[error("{}: {source}", .path.display())]
	Io {
		/// File involved
		path: PathBuf,
		/// Underlying failure
		#[source]
		source: std::io::Error,
	},
}
