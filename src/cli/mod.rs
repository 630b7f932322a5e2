//! CLI infrastructure for the oxo game
//!
//! This module provides the command-line interface for playing against the
//! computer, analyzing positions, and running engine selfplay.

pub mod commands;
pub mod output;
