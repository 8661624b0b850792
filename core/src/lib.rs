//! Read-only sequences with capability-dispatched queries.
//!
//! Query functions in [`query`] accept any [`ReadOnlySequence`]. Each call
//! checks whether the concrete sequence provides an optimized operator for
//! the requested family ([`FirstOperator`], [`AnyOperator`]) and uses it,
//! otherwise it enumerates the sequence with the [`fallback`] algorithms.
//!
//! [`FrozenSequence`] is the optimized type: fixed length, immutable after
//! construction, scanned by direct index.
//!
//! ```
//! use seqkit_core::{frozen, query};
//!
//! let sequence = frozen![10, 20, 30];
//! assert_eq!(query::first_where(&sequence, |x| *x > 15), Ok(&20));
//!
//! let plain = vec![10, 20, 30];
//! assert_eq!(query::first_where(&plain, |x| *x > 15), Ok(&20));
//! ```

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

// Exports some symbols publicly basically so that macros can always refer to these.
#[doc(hidden)]
pub mod shim {
    pub use alloc::vec;
}

mod error;
mod frozen;
mod macros;
mod sequence;

pub mod fallback;
pub mod operators;
pub mod query;

pub use error::{Result, SequenceError};
pub use frozen::{FrozenSequence, FrozenSequenceBuilder};
pub use operators::{AnyOperator, FirstOperator, Unsupported};
pub use sequence::ReadOnlySequence;

#[cfg(test)]
pub mod test_utils {
    /// Route `tracing` events to the test writer, so the fallback `trace!`
    /// lines show up under `cargo test -- --nocapture`. `RUST_LOG` overrides
    /// the default `trace` filter.
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // A second call within the same test binary is a no-op.
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
            )
            .with_test_writer()
            .try_init();
    }
}
