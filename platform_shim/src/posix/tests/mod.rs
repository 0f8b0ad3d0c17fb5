//! Tests for the POSIX discovery surface.
//!
//! Covers candidate ordering across home, XDG, layer-path and compiled-in
//! prefixes, and the redirection behaviour built on top of it.

mod candidates;
