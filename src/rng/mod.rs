//! Random number generation for key generation.
//!
//! Every generating operation in the crate takes its randomness from an
//! explicit handle implementing [`rand_core::RngCore`] +
//! [`rand_core::CryptoRng`]. Two handles cover the usual cases:
//!
//! - [`OsRng`]: stateless, reads the operating system source on every call,
//!   safe to use from any thread. This is what the argument-less
//!   `generate` functions use.
//! - [`Csprng`]: a ChaCha20 generator seeded once from the OS (or from a
//!   caller seed). It holds expansion state, so one instance belongs to one
//!   worker. It is `Send`; sharing it across threads needs a lock.

mod csprng;

pub use csprng::Csprng;
pub use rand_core::OsRng;
