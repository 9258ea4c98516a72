//! File-level parser tests.
//!
//! Production-level cases live next to each production under `grammar/`.
