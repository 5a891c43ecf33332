use std::time::Duration;

use crate::server::Server;

/// A deferred configuration step: a closure that mutates a [`Server`]
/// under construction.
///
/// Stored as `Box<dyn Fn(&mut Server)>` because closures have anonymous
/// types, so you can't name them. Boxing erases the type and lets one list
/// hold options produced by different factories. The bound is `Fn`, not
/// `FnMut` or `FnOnce`: an option captures its parameter immutably and may
/// be applied to any number of independently constructed servers, so a
/// caller can build one option list and reuse it.
pub struct ServerOption(Box<dyn Fn(&mut Server)>);

impl ServerOption {
    /// Wrap any conforming closure as an option.
    ///
    /// This is the bare-closure form of the pattern. The named factories
    /// below are the refined form: they give the closure a meaningful name
    /// and keep the captured parameter out of the caller's sight.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&mut Server) + 'static,
    {
        Self(Box::new(f))
    }

    /// Apply this option to a server under construction.
    pub(crate) fn apply(&self, server: &mut Server) {
        (self.0)(server)
    }
}

impl std::fmt::Debug for ServerOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ServerOption")
    }
}

/// Set the maximum idle time per connection.
pub fn timeout(timeout: Duration) -> ServerOption {
    ServerOption::custom(move |server| server.timeout = timeout)
}

/// Cap the number of simultaneous connections.
pub fn max_conns(max: usize) -> ServerOption {
    ServerOption::custom(move |server| server.max_conns = max)
}

/// Set the message of the day.
pub fn motd(motd: impl Into<String>) -> ServerOption {
    let motd = motd.into();
    ServerOption::custom(move |server| server.motd = Some(motd.clone()))
}

/// Rebind to a different address, overriding the mandatory parameter.
pub fn addr(addr: impl Into<String>) -> ServerOption {
    let addr = addr.into();
    ServerOption::custom(move |server| server.addr = addr.clone())
}
