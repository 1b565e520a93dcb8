//! PostgreSQL store tests
//!
//! These need a running PostgreSQL reachable through `DATABASE_URL` and are
//! ignored by default. Run them with `--ignored`.
