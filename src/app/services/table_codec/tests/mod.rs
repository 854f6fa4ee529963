//! Tests for the table codec
