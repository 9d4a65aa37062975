use std::ffi::CString;
use std::fmt::Write;
use std::os::raw::c_int;

use super::object::{Header, Object};
use crate::types::*;

#[repr(C)]
#[derive(Debug)]
pub(crate) struct Address {
    header: Header,
    pub(crate) scheme: CString,
    pub(crate) display_name: Option<CString>,
    pub(crate) username: Option<CString>,
    pub(crate) domain: CString,
    pub(crate) port: c_int,
    pub(crate) transport: LinphoneTransportType,
}

unsafe impl Object for Address {}

impl Address {
    /// Parses `[display-name] <sip:[user@]host[:port][;transport=x]>` or a bare URI.
    pub(crate) fn parse(input: &str) -> Option<Self> {
        let input = input.trim();

        let (display_name, uri) = match (input.find('<'), input.rfind('>')) {
            (Some(open), Some(close)) if open < close && close == input.len() - 1 => {
                let display = input[..open].trim().trim_matches('"').trim();
                let display = (!display.is_empty()).then(|| display.to_string());
                (display, &input[open + 1..close])
            }
            (None, None) => (None, input),
            _ => return None,
        };

        let (scheme, rest) = uri.split_once(':')?;
        let scheme = scheme.to_ascii_lowercase();
        if scheme != "sip" && scheme != "sips" {
            return None;
        }

        let mut parts = rest.split(';');
        let user_host = parts.next()?;

        let mut transport = LinphoneTransportUdp;
        for param in parts {
            if let Some(value) = param.strip_prefix("transport=") {
                transport = parse_transport(value)?;
            }
        }

        let (username, host_port) = match user_host.rsplit_once('@') {
            Some((user, host_port)) if !user.is_empty() => (Some(user.to_string()), host_port),
            Some(_) => return None,
            None => (None, user_host),
        };

        let (domain, port) = match host_port.rsplit_once(':') {
            Some((host, port)) => (host, c_int::from(port.parse::<u16>().ok()?)),
            None => (host_port, 0),
        };

        if domain.is_empty() || domain.contains(char::is_whitespace) {
            return None;
        }

        Some(Self {
            header: Header::new(),
            scheme: CString::new(scheme).ok()?,
            display_name: display_name.and_then(|name| CString::new(name).ok()),
            username: username.and_then(|user| CString::new(user).ok()),
            domain: CString::new(domain).ok()?,
            port,
            transport,
        })
    }

    pub(crate) fn duplicate(&self) -> Self {
        Self {
            header: Header::new(),
            scheme: self.scheme.clone(),
            display_name: self.display_name.clone(),
            username: self.username.clone(),
            domain: self.domain.clone(),
            port: self.port,
            transport: self.transport,
        }
    }

    pub(crate) fn uri_only(&self) -> String {
        let mut uri = format!("{}:", self.scheme.to_string_lossy());
        if let Some(username) = &self.username {
            let _ = write!(uri, "{}@", username.to_string_lossy());
        }
        uri.push_str(&self.domain.to_string_lossy());
        if self.port > 0 {
            let _ = write!(uri, ":{}", self.port);
        }
        if self.transport != LinphoneTransportUdp {
            let _ = write!(uri, ";transport={}", transport_name(self.transport));
        }
        uri
    }

    pub(crate) fn render(&self) -> String {
        match &self.display_name {
            Some(name) => format!("\"{}\" <{}>", name.to_string_lossy(), self.uri_only()),
            None => self.uri_only(),
        }
    }

    pub(crate) fn weak_equal(&self, other: &Self) -> bool {
        self.username == other.username && self.domain == other.domain && self.port == other.port
    }

    pub(crate) fn equal(&self, other: &Self) -> bool {
        self.display_name == other.display_name && self.uri_only() == other.uri_only()
    }
}

pub(crate) fn parse_transport(value: &str) -> Option<LinphoneTransportType> {
    match value.to_ascii_lowercase().as_str() {
        "udp" => Some(LinphoneTransportUdp),
        "tcp" => Some(LinphoneTransportTcp),
        "tls" => Some(LinphoneTransportTls),
        "dtls" => Some(LinphoneTransportDtls),
        _ => None,
    }
}

pub(crate) fn transport_name(transport: LinphoneTransportType) -> &'static str {
    match transport {
        LinphoneTransportUdp => "udp",
        LinphoneTransportTcp => "tcp",
        LinphoneTransportTls => "tls",
        LinphoneTransportDtls => "dtls",
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_address() {
        let address = Address::parse("\"Alice\" <sip:alice@example.org:5070;transport=tcp>").unwrap();
        assert_eq!(address.display_name.as_deref(), Some(c"Alice"));
        assert_eq!(address.username.as_deref(), Some(c"alice"));
        assert_eq!(address.domain.as_c_str(), c"example.org");
        assert_eq!(address.port, 5070);
        assert_eq!(address.transport, LinphoneTransportTcp);
        assert_eq!(
            address.render(),
            "\"Alice\" <sip:alice@example.org:5070;transport=tcp>"
        );
    }

    #[test]
    fn test_parse_bare_uri() {
        let address = Address::parse("sip:bob@example.org").unwrap();
        assert!(address.display_name.is_none());
        assert_eq!(address.port, 0);
        assert_eq!(address.uri_only(), "sip:bob@example.org");
    }

    #[test]
    fn test_parse_rejects_invalid_input() {
        assert!(Address::parse("").is_none());
        assert!(Address::parse("bob@example.org").is_none());
        assert!(Address::parse("http://example.org").is_none());
        assert!(Address::parse("sip:@example.org").is_none());
        assert!(Address::parse("sip:bob@example.org:notaport").is_none());
        assert!(Address::parse("sip:bob@example.org;transport=carrier-pigeon").is_none());
        assert!(Address::parse("Bob <sip:bob@example.org").is_none());
    }
}
