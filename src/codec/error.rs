use thiserror::Error;

/// Malformed edge-list or load-format input. Line numbers are 1-based.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
	/// Edge line with the wrong number of tokens
	#[error("line {line}: expected `u v` or `u v w`, found {found} tokens")]
	EdgeShape {
		/// Offending line
		line: usize,
		/// Token count on that line
		found: usize,
	},

	/// Third token is not a number
	#[error("line {line}: weight '{token}' is not a valid number")]
	InvalidWeight {
		/// Offending line
		line: usize,
		/// Token that failed to parse
		token: String,
	},

	/// Weight given while the graph is unweighted
	#[error("line {line}: the graph is unweighted, remove the weight")]
	UnexpectedWeight {
		/// Offending line
		line: usize,
	},

	/// No vertex or edge at all
	#[error("enter at least one edge or vertex")]
	NoVertices,

	/// Load file without content
	#[error("file is empty")]
	Empty,

	/// Load file without both header lines
	#[error("file needs a vertex count line and a directed flag line")]
	MissingHeader,

	/// First header line is not a non-negative integer
	#[error("line {line}: expected the vertex count as an integer, got '{value}'")]
	VertexCount {
		/// Offending line
		line: usize,
		/// Text found instead
		value: String,
	},

	/// Second header line is not `0` or `1`
	#[error("line {line}: expected 0 (undirected) or 1 (directed), got '{value}'")]
	DirectedFlag {
		/// Offending line
		line: usize,
		/// Text found instead
		value: String,
	},
}

impl FormatError {
	/// Line the error points at, when it comes from line-oriented text.
	pub fn line(&self) -> Option<usize> {
		match self {
			FormatError::EdgeShape { line, .. }
			| FormatError::InvalidWeight { line, .. }
			| FormatError::UnexpectedWeight { line }
			| FormatError::VertexCount { line, .. }
			| FormatError::DirectedFlag { line, .. } => Some(*line),
			FormatError::NoVertices | FormatError::Empty | FormatError::MissingHeader => None,
		}
	}
}
