//! Tests for the customer service
