//! Host name and address lookup.

use crate::defs::Error;
use std::io;
use std::net::IpAddr;
use tracing::debug;
use tracing::warn;

/// Address lookup backend.
pub trait Resolver {
    /// Looks up the addresses of `host`. If `numeric` is true `host` must be an IP
    /// address literal and no name service is queried.
    fn lookup(&self, host: &str, numeric: bool) -> io::Result<Vec<IpAddr>>;

    /// Looks up the fully-qualified name registered for `ip`.
    /// Returns `None` if the address has no name.
    fn reverse(&self, ip: &IpAddr) -> Option<String>;
}

/// Resolver backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl Resolver for SystemResolver {
    fn lookup(&self, host: &str, numeric: bool) -> io::Result<Vec<IpAddr>> {
        if numeric {
            let ip: IpAddr = host
                .parse()
                .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "not a numeric host address"))?;
            return Ok(vec![ip]);
        }

        dns_lookup::lookup_host(host)
    }

    fn reverse(&self, ip: &IpAddr) -> Option<String> {
        match dns_lookup::lookup_addr(ip) {
            // a numeric answer means the address has no registered name
            Ok(name) if name.parse::<IpAddr>().is_ok() => None,
            Ok(name) => Some(name),
            Err(err) => {
                debug!(address = %ip, error = %err, "reverse lookup failed");
                None
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Query {
    Name,
    Address,
    Current,
}

/// A network host identified by a name or an address.
///
/// Names and addresses are resolved on first access and cached.
pub struct Host {
    info: Option<String>,
    query: Query,
    resolved: bool,
    names: Vec<String>,
    addresses: Vec<String>,
    resolver: Box<dyn Resolver>,
}

impl core::fmt::Debug for Host {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Host")
            .field("info", &self.info)
            .field("query", &self.query)
            .field("resolved", &self.resolved)
            .field("names", &self.names)
            .field("addresses", &self.addresses)
            .finish()
    }
}

impl Host {
    fn new(info: Option<String>, query: Query) -> Self {
        Host {
            info,
            query,
            resolved: false,
            names: Vec::new(),
            addresses: Vec::new(),
            resolver: Box::new(SystemResolver),
        }
    }

    /// The host the process runs on.
    pub fn current() -> Self {
        Self::new(None, Query::Current)
    }

    /// Host identified by a host name.
    pub fn with_name(name: &str) -> Self {
        Self::new(Some(name.to_string()), Query::Name)
    }

    /// Host identified by a numeric IPv4 or IPv6 address.
    pub fn with_address(address: &str) -> Self {
        Self::new(Some(address.to_string()), Query::Address)
    }

    /// Replaces the lookup backend. Cached results are dropped.
    pub fn with_resolver(mut self, resolver: impl Resolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self.resolved = false;
        self.names.clear();
        self.addresses.clear();
        self
    }

    /// Returns true if names and addresses have been resolved.
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// Resolves the names and addresses of the host.
    /// Once resolution succeeds subsequent calls do nothing.
    ///
    /// ## Errors
    ///
    ///  - Resolution: the lookup failed. The kind of the underlying I/O error is reported.
    ///    A failed resolution can be retried.
    pub fn resolve(&mut self) -> Result<(), Error> {
        if self.resolved {
            return Ok(());
        }

        let info = match (&self.info, self.query) {
            (Some(info), Query::Name) | (Some(info), Query::Address) => info.clone(),
            _ => {
                self.resolved = true;
                return Ok(());
            }
        };

        let numeric = self.query == Query::Address;
        debug!(host = %info, numeric, "resolving host");

        let found = match self.resolver.lookup(&info, numeric) {
            Ok(found) => found,
            Err(err) => {
                warn!(host = %info, error = %err, "host resolution failed");
                return Err(Error::Resolution(err.kind()));
            }
        };

        let mut names = Vec::new();
        let mut addresses = Vec::new();

        for ip in found {
            if let Some(fqdn) = self.resolver.reverse(&ip) {
                let short = fqdn.split('.').next().unwrap_or_default().to_string();
                push_unique(&mut names, fqdn);
                if !short.is_empty() {
                    push_unique(&mut names, short);
                }
            }
            push_unique(&mut addresses, ip.to_string());
        }

        debug!(host = %info, names = names.len(), addresses = addresses.len(), "host resolved");

        self.names = names;
        self.addresses = addresses;
        self.resolved = true;

        Ok(())
    }

    /// Returns all names of the host.
    ///
    /// ## Errors
    ///
    ///  - Resolution: the lookup failed.
    pub fn names(&mut self) -> Result<&[String], Error> {
        self.resolve()?;
        Ok(&self.names)
    }

    /// Returns all addresses of the host in textual form.
    ///
    /// ## Errors
    ///
    ///  - Resolution: the lookup failed.
    pub fn addresses(&mut self) -> Result<&[String], Error> {
        self.resolve()?;
        Ok(&self.addresses)
    }

    /// Returns the first name of the host, if any.
    ///
    /// ## Errors
    ///
    ///  - Resolution: the lookup failed.
    pub fn name(&mut self) -> Result<Option<&str>, Error> {
        self.resolve()?;
        Ok(self.names.first().map(|s| s.as_str()))
    }

    /// Returns the first address of the host, if any.
    ///
    /// ## Errors
    ///
    ///  - Resolution: the lookup failed.
    pub fn address(&mut self) -> Result<Option<&str>, Error> {
        self.resolve()?;
        Ok(self.addresses.first().map(|s| s.as_str()))
    }

    /// Human readable name of the host. Not available.
    pub fn localized_name(&self) -> Option<String> {
        None
    }

    /// Hosts are never considered equal, even to themselves.
    pub fn is_equal(&self, _other: &Host) -> bool {
        false
    }
}

fn push_unique(v: &mut Vec<String>, s: String) {
    if !v.contains(&s) {
        v.push(s);
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use core::cell::Cell;
    use std::net::Ipv4Addr;
    use std::net::Ipv6Addr;
    use std::collections::HashMap;
    use std::rc::Rc;

    struct FakeResolver {
        calls: Rc<Cell<usize>>,
        fail_first: Cell<bool>,
        records: Vec<IpAddr>,
        names: HashMap<IpAddr, String>,
    }

    impl FakeResolver {
        fn new(calls: Rc<Cell<usize>>, records: Vec<IpAddr>) -> Self {
            FakeResolver {
                calls,
                fail_first: Cell::new(false),
                records,
                names: HashMap::new(),
            }
        }

        fn with_name(mut self, ip: IpAddr, name: &str) -> Self {
            self.names.insert(ip, name.to_string());
            self
        }
    }

    impl Resolver for FakeResolver {
        fn lookup(&self, _host: &str, _numeric: bool) -> io::Result<Vec<IpAddr>> {
            self.calls.set(self.calls.get() + 1);
            if self.fail_first.replace(false) {
                return Err(io::Error::new(io::ErrorKind::TimedOut, "timed out"));
            }
            Ok(self.records.clone())
        }

        fn reverse(&self, ip: &IpAddr) -> Option<String> {
            self.names.get(ip).cloned()
        }
    }

    fn v4(a: u8, b: u8, c: u8, d: u8) -> IpAddr {
        IpAddr::V4(Ipv4Addr::new(a, b, c, d))
    }

    #[test]
    fn test_name_lookup() {
        let calls = Rc::new(Cell::new(0));
        let resolver = FakeResolver::new(
            calls.clone(),
            vec![v4(10, 0, 0, 1), v4(10, 0, 0, 2), v4(10, 0, 0, 1), IpAddr::V6(Ipv6Addr::LOCALHOST)],
        )
        .with_name(v4(10, 0, 0, 1), "db.internal.example")
        .with_name(v4(10, 0, 0, 2), "db.internal.example");

        let mut host = Host::with_name("db").with_resolver(resolver);
        assert!(!host.is_resolved());

        assert_eq!(host.names().unwrap(), ["db.internal.example", "db"]);
        assert_eq!(host.addresses().unwrap(), ["10.0.0.1", "10.0.0.2", "::1"]);
        assert_eq!(host.name().unwrap(), Some("db.internal.example"));
        assert_eq!(host.address().unwrap(), Some("10.0.0.1"));
        assert!(host.is_resolved());

        // cached
        assert_eq!(calls.get(), 1);
        host.resolve().unwrap();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_retry_after_failure() {
        let calls = Rc::new(Cell::new(0));
        let resolver = FakeResolver::new(calls.clone(), vec![v4(192, 168, 1, 7)]);
        resolver.fail_first.set(true);

        let mut host = Host::with_address("192.168.1.7").with_resolver(resolver);

        assert_eq!(host.resolve(), Err(Error::Resolution(io::ErrorKind::TimedOut)));
        assert!(!host.is_resolved());

        assert_eq!(host.addresses().unwrap(), ["192.168.1.7"]);
        assert!(host.names().unwrap().is_empty());
        assert_eq!(host.name().unwrap(), None);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_address_lookup() {
        let calls = Rc::new(Cell::new(0));
        let resolver = FakeResolver::new(calls.clone(), vec![v4(10, 0, 0, 5)])
            .with_name(v4(10, 0, 0, 5), "db.internal.example");

        let mut host = Host::with_address("10.0.0.5").with_resolver(resolver);

        assert_eq!(host.names().unwrap(), ["db.internal.example", "db"]);
        assert_eq!(host.name().unwrap(), Some("db.internal.example"));
        assert_eq!(host.addresses().unwrap(), ["10.0.0.5"]);

        // a name without a domain is listed once
        let resolver = FakeResolver::new(calls.clone(), vec![v4(10, 0, 0, 6)]).with_name(v4(10, 0, 0, 6), "gateway");
        let mut host = Host::with_address("10.0.0.6").with_resolver(resolver);
        assert_eq!(host.names().unwrap(), ["gateway"]);
    }

    #[test]
    fn test_current() {
        let mut host = Host::current();
        host.resolve().unwrap();
        assert!(host.is_resolved());
        assert!(host.names().unwrap().is_empty());
        assert_eq!(host.address().unwrap(), None);
        assert_eq!(host.localized_name(), None);
    }

    #[test]
    fn test_is_equal() {
        let h1 = Host::with_address("127.0.0.1");
        let h2 = Host::with_address("127.0.0.1");
        assert!(!h1.is_equal(&h2));
        assert!(!h1.is_equal(&h1));
    }

    #[test]
    fn test_system_resolver() {
        let mut host = Host::with_address("127.0.0.1");
        assert_eq!(host.addresses().unwrap(), ["127.0.0.1"]);

        let mut host = Host::with_address("0:0:0:0:0:0:0:1");
        assert_eq!(host.address().unwrap(), Some("::1"));

        let mut host = Host::with_address("localhost");
        assert_eq!(host.resolve(), Err(Error::Resolution(io::ErrorKind::InvalidInput)));

        let ip = v4(127, 0, 0, 1);
        assert_eq!(SystemResolver.lookup("127.0.0.1", true).unwrap(), [ip]);
        if let Some(name) = SystemResolver.reverse(&ip) {
            assert!(name.parse::<IpAddr>().is_err());
        }
    }
}
