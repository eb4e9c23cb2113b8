use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    #[error("empty input sequence")]
    EmptyInput,

    #[error("sequence length {len} is not a power of two")]
    NotPowerOfTwo { len: usize },

    #[error("non-finite value in input sequence at index {idx}")]
    NonFiniteVec { idx: usize },
}
