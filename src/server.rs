use std::time::Duration;

use log::trace;

use crate::builder::ServerBuilder;
use crate::error::ConfigError;
use crate::option::ServerOption;
use crate::validate::CheckedOption;

/// Connection cap applied before any option runs.
pub const DEFAULT_MAX_CONNS: usize = 100;

/// A configured server value.
///
/// The bind address is mandatory: every constructor takes it. The other
/// fields are optional and start at their documented defaults, which hold
/// until an option overwrites them. Construction is the only configuration
/// surface; a `Server` handed back to the caller is meant to be read, not
/// reconfigured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Server {
    /// Address the server would bind to, e.g. `":8080"`.
    pub addr: String,
    /// Maximum idle time per connection. `Duration::ZERO` means no timeout.
    pub timeout: Duration,
    /// Cap on simultaneous connections.
    pub max_conns: usize,
    /// Message of the day, shown to clients on connect. Off by default.
    pub motd: Option<String>,
}

impl Server {
    /// Construct with defaults only.
    pub fn new(addr: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),

            // default values
            timeout: Duration::ZERO,
            max_conns: DEFAULT_MAX_CONNS,
            motd: None,
        }
    }

    /// Construct with optional configuration.
    ///
    /// The value is fully defaulted before the first option runs, so no
    /// option ever sees a half-initialized server. Options apply in the
    /// order the caller supplied them and may overwrite any field, the
    /// address included; when two options touch the same field, the later
    /// one wins.
    pub fn with_options<I>(addr: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = ServerOption>,
    {
        let mut server = Self::new(addr);

        // apply the list of options to the server
        for option in options {
            option.apply(&mut server);
        }

        trace!("configured server for {}", server.addr);
        server
    }

    /// Construct with validating options, stopping at the first rejection.
    ///
    /// Same contract as [`Server::with_options`], except each option may
    /// refuse its value. The first error is returned as-is and no later
    /// option is applied.
    pub fn try_with_options<I>(
        addr: impl Into<String>,
        options: I,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = CheckedOption>,
    {
        let mut server = Self::new(addr);

        for option in options {
            option.apply(&mut server)?;
        }

        trace!("configured server for {}", server.addr);
        Ok(server)
    }

    /// Start a chaining builder: the same defaults and override rules,
    /// spelled as named method calls.
    pub fn builder(addr: impl Into<String>) -> ServerBuilder {
        ServerBuilder::new(addr)
    }
}
