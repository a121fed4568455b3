/// Errors raised while configuring or initializing a void field.
///
/// All variants are fatal: no partially placed layout is ever exposed.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum VoidFieldError {
    /// The tanh profile needs a strictly positive interface width.
    #[error("interface width must be strictly positive for the tanh profile")]
    NonPositiveTanhWidth,

    /// A locator ran out of retries for one slot. The requested void count
    /// and spacings are infeasible for this grain structure and domain.
    #[error(
        "exceeded {max_tries} tries placing {population} void {slot}; \
         count/spacing infeasible for this grain structure"
    )]
    GeometrySaturated {
        population: &'static str,
        slot: usize,
        max_tries: usize,
    },

    /// `initialize` was called more than once.
    #[error("void field is already initialized")]
    AlreadyInitialized,
}
