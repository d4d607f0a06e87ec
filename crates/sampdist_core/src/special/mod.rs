//! Special functions.
//!
//! - [`gamma`]: Γ(z) for real `z` via the Lanczos approximation (g = 7, 9 terms)
//! - [`ln_gamma`]: ln Γ(x) for positive `x`, for forming Gamma ratios without overflow
//!
//! Both are pure functions: no cache, no global state.

mod gamma;

pub use gamma::{gamma, ln_gamma, LANCZOS_G};
