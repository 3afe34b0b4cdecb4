//! Endpoint identity used as the pooling key

use std::fmt;

/// A destination an HTTP client connects to: scheme, host and port.
///
/// Endpoints are immutable value objects. Two endpoints compare equal
/// exactly when all three fields match, so they work as map keys
/// regardless of which instance was used to insert.
///
/// # Examples
///
/// ```
/// use endpoint_pool::Endpoint;
///
/// let a = Endpoint::https("api.example.com", 443);
/// let b = Endpoint::new("https", "api.example.com", 443);
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "https://api.example.com:443");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint {
    scheme: String,
    host: String,
    port: u16,
}

impl Endpoint {
    /// Create an endpoint from its three components
    pub fn new(scheme: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
            port,
        }
    }

    /// Plain-HTTP endpoint
    pub fn http(host: impl Into<String>, port: u16) -> Self {
        Self::new("http", host, port)
    }

    /// HTTPS endpoint
    pub fn https(host: impl Into<String>, port: u16) -> Self {
        Self::new("https", host, port)
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}:{}", self.scheme, self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_equality_is_field_wise() {
        let a = Endpoint::https("example.com", 443);
        let b = Endpoint::new("https", "example.com", 443);
        assert_eq!(a, b);

        assert_ne!(a, Endpoint::https("example.com", 8443));
        assert_ne!(a, Endpoint::https("example.org", 443));
        assert_ne!(a, Endpoint::http("example.com", 443));
    }

    #[test]
    fn test_usable_as_map_key_across_instances() {
        let mut map = HashMap::new();
        map.insert(Endpoint::http("localhost", 8080), 1);

        // A freshly built equal endpoint must hit the same slot.
        assert_eq!(map.get(&Endpoint::http("localhost", 8080)), Some(&1));
        assert_eq!(map.get(&Endpoint::http("localhost", 8081)), None);
    }

    #[test]
    fn test_display_rendering() {
        let endpoint = Endpoint::https("api.example.com", 443);
        assert_eq!(format!("{endpoint}"), "https://api.example.com:443");
    }
}
