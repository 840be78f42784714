//! Tests for the parser module

mod expressions;
