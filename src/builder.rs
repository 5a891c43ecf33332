use std::time::Duration;

use crate::server::Server;

/// Method-chaining construction: the same defaults and override rules as
/// [`Server::with_options`], spelled as named setter calls instead of a
/// list of option values.
///
/// The builder wraps a defaulted [`Server`] and each setter writes straight
/// through to it. Calling a setter twice overwrites, exactly as a later
/// option would.
pub struct ServerBuilder {
    server: Server,
}

impl ServerBuilder {
    pub(crate) fn new(addr: impl Into<String>) -> Self {
        Self {
            server: Server::new(addr),
        }
    }

    /// Rebind to a different address, overriding the mandatory parameter.
    pub fn addr(mut self, addr: impl Into<String>) -> Self {
        self.server.addr = addr.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.server.timeout = timeout;
        self
    }

    pub fn max_conns(mut self, max: usize) -> Self {
        self.server.max_conns = max;
        self
    }

    pub fn motd(mut self, motd: impl Into<String>) -> Self {
        self.server.motd = Some(motd.into());
        self
    }

    pub fn build(self) -> Server {
        self.server
    }
}
