// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! Properties of ring resolution and seed selection that must hold for any
//! inventory.

mod seed_selection;
mod topology_resolution;
