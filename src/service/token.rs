// Copyright (c) 2025 - Cowboy AI, Inc.
//! Bootstrap tokens

use crate::domain::CassandraInstance;

/// Supplies the initial ring token for an instance
pub trait TokenService: Send + Sync {
    /// `None` lets the node pick its own token
    fn token(&self, instance: &CassandraInstance) -> Option<i128>;
}

/// Hands out whatever token was assigned to the instance
#[derive(Debug, Clone, Copy, Default)]
pub struct AssignedTokenService;

impl TokenService for AssignedTokenService {
    fn token(&self, instance: &CassandraInstance) -> Option<i128> {
        instance.token
    }
}
