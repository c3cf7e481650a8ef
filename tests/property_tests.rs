// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Entry Point
//!
//! Uses proptest to check membership and seed selection properties over
//! generated inventories.

mod property;
