//! Tooling-only workspace root. The library and console live in the member
//! crates under `crates/`.
