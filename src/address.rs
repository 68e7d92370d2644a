use std::fmt;
use std::str::FromStr;
use crate::error::AddressError;

pub const DEFAULT_PORT: u16 = 25565;

/// Address of a minecraft server as requested by a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    pub host: String,
    pub port: u16,
}

impl Address {
    pub fn new(host: impl Into<String>, port: u16) -> Address {
        Address { host: host.into(), port }
    }

    /// Parse the last segment of a url path as `host[:port]`.
    pub fn from_path(path: &str) -> Result<Address, AddressError> {
        let segment = path.rsplit('/').next().unwrap_or(path);
        segment.parse()
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(address: &str) -> Result<Address, AddressError> {
        let parts: Vec<&str> = address.split(':').collect();
        let (host, port) = match parts.as_slice() {
            [host] => (*host, DEFAULT_PORT),
            [host, port] => (*host, parse_port(port)?),
            _ => return Err(AddressError::InvalidAddress),
        };

        if host.is_empty() {
            return Err(AddressError::InvalidAddress);
        }
        Ok(Address::new(host, port))
    }
}

fn parse_port(port: &str) -> Result<u16, AddressError> {
    if port.is_empty() || !port.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(AddressError::NotANumber);
    }
    match port.parse::<u64>() {
        Ok(port @ 1..=65535) => Ok(port as u16),
        // Only digits are left, so this is out of range or overflowed
        _ => Err(AddressError::InvalidPort),
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_minecraft_port() {
        assert_eq!("host".parse(), Ok(Address::new("host", 25565)));
    }

    #[test]
    fn parses_explicit_port() {
        assert_eq!("host:25566".parse(), Ok(Address::new("host", 25566)));
        assert_eq!("127.0.0.1:1".parse(), Ok(Address::new("127.0.0.1", 1)));
    }

    #[test]
    fn rejects_ports_out_of_range() {
        assert_eq!("host:0".parse::<Address>(), Err(AddressError::InvalidPort));
        assert_eq!("host:70000".parse::<Address>(), Err(AddressError::InvalidPort));
        assert_eq!("host:99999999999999999999999".parse::<Address>(), Err(AddressError::InvalidPort));
    }

    #[test]
    fn rejects_non_numeric_ports() {
        assert_eq!("host:a".parse::<Address>(), Err(AddressError::NotANumber));
        assert_eq!("host:".parse::<Address>(), Err(AddressError::NotANumber));
        assert_eq!("host:-1".parse::<Address>(), Err(AddressError::NotANumber));
    }

    #[test]
    fn rejects_extra_colons() {
        assert_eq!("a:1:2".parse::<Address>(), Err(AddressError::InvalidAddress));
        assert_eq!(":25565".parse::<Address>(), Err(AddressError::InvalidAddress));
    }

    #[test]
    fn uses_last_path_segment() {
        assert_eq!(Address::from_path("/api/mc.example.com:25570"), Ok(Address::new("mc.example.com", 25570)));
        assert_eq!(Address::from_path("mc.example.com"), Ok(Address::new("mc.example.com", 25565)));
    }
}
