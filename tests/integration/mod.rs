//! Integration tests for markify
//!
//! These tests run the complete pipeline end-to-end on realistic HTML.

mod edge_cases;
mod feature_combinations;
mod real_world_articles;
