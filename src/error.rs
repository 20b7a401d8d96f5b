use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("cannot write result file '{path}': {source}")]
    ReportWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl BenchError {
    #[inline]
    pub fn is_io(&self) -> bool {
        matches!(self, BenchError::ReportWrite { .. })
    }
}

pub type Result<T> = std::result::Result<T, BenchError>;
