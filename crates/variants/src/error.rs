use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VariantError {
    #[error("product would generate {requested} combinations (limit={limit})")]
    TooManyCombinations { limit: usize, requested: u64 },

    #[error("combination count overflows u64 (limit={limit})")]
    CombinationCountOverflow { limit: usize },
}
