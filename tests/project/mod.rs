//! Project loading tests

pub mod tests_loading;
