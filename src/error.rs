use thiserror::Error;

/// Errors surfaced by drawing and by catalog validation.
///
/// `EmptyPool` is the only draw-time error and marks a broken pack
/// definition, not a retryable condition. The rest come from the opt-in
/// load-time validation path.
#[derive(Debug, Error)]
pub enum PackError {
    /// The sampled tier had no items and neither did the common fallback.
    #[error("pack `{pack}` has no common items to draw from")]
    EmptyPool { pack: String },

    /// Load-time: a pack with no common items cannot honor the fallback.
    #[error("pack `{pack}` defines no common-tier items for the fallback pool")]
    NoCommonItems { pack: String },

    /// Load-time: tier weights must sum to 100.
    #[error("pack `{pack}` tier weights sum to {sum}, expected 100")]
    WeightSum { pack: String, sum: f64 },

    /// Catalog JSON could not be parsed.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}
