//! Unit tests for the tagging module.
//!
//! Tests are organised by layer: domain value and descriptor validation,
//! resolver configuration behaviour, dispatcher fan-out, and vendor payload
//! extraction.
