//! Error type shared by the builder, the executor and the scenario runner.
//!
//! Only two things can genuinely fail in this crate: the parity check of
//! `range`, and compilation of a rendered pattern by the `regex` engine. The
//! remaining variants belong to the scenario layer, where script text has to
//! be converted into typed verb arguments.

/// Errors produced by [`Expression`](crate::Expression) and the scenario runner.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `range` was called with an odd number of bounds.
    #[error("range expects an even number of bounds, got {count}")]
    ArgumentCount { count: usize },

    /// A scenario phrase did not resolve to any verb (strict mode only).
    #[error("phrase \"{phrase}\" does not name a known verb")]
    UnresolvedPhrase { phrase: String },

    /// A scenario argument could not be converted to the verb's argument shape.
    #[error("invalid argument for `{verb}`: {reason}")]
    InvalidArgument { verb: &'static str, reason: String },

    /// A modifier letter outside `i`, `m` and `g`.
    #[error("unknown modifier '{0}' (expected one of 'i', 'm', 'g')")]
    UnknownModifier(char),

    /// The matching engine rejected the rendered pattern.
    #[error("pattern `{pattern}` failed to compile: {source}")]
    Engine {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
