//! Authority components: host, port, and userinfo, split from the raw text.

use super::path::decode_component;

/// An authority split into its RFC 3986 pieces, all still percent-encoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthorityParts<'a> {
    pub userinfo: Option<&'a str>,
    /// `host[:port]` exactly as written.
    pub host_port: &'a str,
    /// Host only; IP literals keep their brackets.
    pub host: &'a str,
    pub port: Option<&'a str>,
}

impl<'a> AuthorityParts<'a> {
    pub fn split(authority: &'a str) -> Self {
        let (userinfo, host_port) = match authority.rfind('@') {
            Some(at) => (Some(&authority[..at]), &authority[at + 1..]),
            None => (None, authority),
        };

        // A port can only follow the closing bracket of an IP literal.
        let port_search_start = if host_port.starts_with('[') {
            host_port.find(']').map_or(host_port.len(), |i| i + 1)
        } else {
            0
        };
        let (host, port) = match host_port[port_search_start..].find(':') {
            Some(i) => {
                let colon = port_search_start + i;
                (&host_port[..colon], Some(&host_port[colon + 1..]))
            }
            None => (host_port, None),
        };

        Self {
            userinfo,
            host_port,
            host,
            port,
        }
    }

    /// Host without port; IP-literal brackets removed.
    pub fn hostname(&self) -> &'a str {
        self.host
            .strip_prefix('[')
            .and_then(|h| h.strip_suffix(']'))
            .unwrap_or(self.host)
    }

    /// Percent-decoded user name; empty without userinfo.
    pub fn username(&self) -> String {
        self.userinfo
            .map(|info| decode_component(info.split(':').next().unwrap_or_default()))
            .unwrap_or_default()
    }

    /// `None` when the userinfo carries no `:`; `Some("")` for an explicit empty password.
    pub fn password(&self) -> Option<String> {
        self.userinfo
            .and_then(|info| info.split_once(':'))
            .map(|(_, password)| decode_component(password))
    }
}
