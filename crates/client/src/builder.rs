//! Client builder with dependency injection pattern.

use crate::{Client, GameHost};
use anyhow::{Context, Result};
use client_bootstrap::PlatformSetup;

/// Builder for constructing a Client with proper validation.
///
/// # Design Principles
///
/// - **Required fields**: Platform setup and host must be provided
/// - **Fail-fast validation**: Missing required fields cause build() to fail
/// - **Fluent API**: Chainable methods for ergonomic construction
#[derive(Default)]
pub struct ClientBuilder {
    platform: Option<PlatformSetup>,
    host: Option<Box<dyn GameHost>>,
}

impl ClientBuilder {
    /// Create a new ClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the platform services (required).
    ///
    /// Should be constructed via `PlatformBuilder` from the `client-bootstrap` crate.
    pub fn platform(mut self, platform: PlatformSetup) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Set the engine host (required).
    pub fn host(mut self, host: impl GameHost + 'static) -> Self {
        self.host = Some(Box::new(host));
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Platform setup is not set (required)
    /// - Host is not set (required)
    pub fn build(self) -> Result<Client> {
        let platform = self
            .platform
            .context("Platform setup is required. Use .platform() to set it.")?;

        let host = self
            .host
            .context("Host is required. Use .host() to set it.")?;

        Ok(Client { platform, host })
    }
}
