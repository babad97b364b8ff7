use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    /// A whole data resource could not be read or parsed.
    #[error("data unavailable from `{source_name}`: {reason}")]
    DataUnavailable { source_name: String, reason: String },

    /// One row could not be turned into a typed record.
    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error("degenerate scale domain: [{start}, {end}]")]
    DegenerateScale { start: f64, end: f64 },
}

impl ChartError {
    pub(crate) fn data_unavailable(source_name: impl Into<String>, reason: impl ToString) -> Self {
        Self::DataUnavailable {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn malformed(line: u64, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }
}
