use std::time::Duration;

use log::debug;

use crate::error::ConfigError;
use crate::option::ServerOption;
use crate::server::Server;

/// An option that can refuse its value.
///
/// Validation lives inside the option itself: the closure checks its
/// captured parameter and reports the problem instead of silently
/// clamping. [`Server::try_with_options`] applies these in order and
/// returns the first error, leaving later options unapplied.
pub struct CheckedOption(Box<dyn Fn(&mut Server) -> Result<(), ConfigError>>);

impl CheckedOption {
    /// Wrap any conforming fallible closure as a checked option.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut Server) -> Result<(), ConfigError> + 'static,
    {
        Self(Box::new(f))
    }

    /// Apply this option to a server under construction.
    pub(crate) fn apply(&self, server: &mut Server) -> Result<(), ConfigError> {
        (self.0)(server)
    }
}

/// Every infallible option is a checked option that always succeeds, so
/// the two kinds mix freely in one `try_with_options` call.
impl From<ServerOption> for CheckedOption {
    fn from(option: ServerOption) -> Self {
        Self::new(move |server| {
            option.apply(server);
            Ok(())
        })
    }
}

impl std::fmt::Debug for CheckedOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CheckedOption")
    }
}

/// Set the idle timeout, rejecting the zero duration.
///
/// A `Duration` cannot go negative, so zero is the degenerate value worth
/// catching: it already means "no timeout", and asking for it explicitly
/// reads like a caller mistake. The unchecked [`timeout`] factory still
/// accepts it.
///
/// [`timeout`]: crate::option::timeout
pub fn checked_timeout(timeout: Duration) -> CheckedOption {
    CheckedOption::new(move |server| {
        if timeout.is_zero() {
            debug!("rejected zero timeout for {}", server.addr);
            return Err(ConfigError::ZeroTimeout);
        }
        server.timeout = timeout;
        Ok(())
    })
}

/// Rebind to a different address, rejecting an empty one.
pub fn checked_addr(addr: impl Into<String>) -> CheckedOption {
    let addr = addr.into();
    CheckedOption::new(move |server| {
        if addr.trim().is_empty() {
            debug!("rejected empty bind address");
            return Err(ConfigError::EmptyAddr);
        }
        server.addr = addr.clone();
        Ok(())
    })
}

/// Cap the number of simultaneous connections, rejecting a cap of zero.
pub fn checked_max_conns(max: usize) -> CheckedOption {
    CheckedOption::new(move |server| {
        if max == 0 {
            debug!("rejected zero connection cap for {}", server.addr);
            return Err(ConfigError::ZeroMaxConns);
        }
        server.max_conns = max;
        Ok(())
    })
}
