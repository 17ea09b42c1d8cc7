use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use std::{
    fmt::Display,
    net::{AddrParseError, IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr},
    ops::Deref,
    str::FromStr,
};

/// An IP address, newtype of [IpAddr].
#[derive(PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize, Debug)]
#[repr(transparent)]
pub struct IpAddress(pub IpAddr);

impl IpAddress {
    pub fn new(ip: IpAddr) -> Self {
        Self(ip)
    }

    /// Builds an address from the 16-byte IPv6 form used by compact seed records.
    /// IPv4-mapped addresses (`::ffff:a.b.c.d`) are unwrapped to plain IPv4.
    pub fn from_ipv6_octets(octets: [u8; 16]) -> Self {
        let ipv6 = Ipv6Addr::from(octets);
        match ipv6.to_ipv4_mapped() {
            Some(ipv4) => Self(IpAddr::V4(ipv4)),
            None => Self(IpAddr::V6(ipv6)),
        }
    }

    /// Returns the 16-byte IPv6 form, mapping IPv4 into `::ffff:0:0/96`
    pub fn to_ipv6_octets(&self) -> [u8; 16] {
        match self.0 {
            IpAddr::V4(ipv4) => ipv4.to_ipv6_mapped().octets(),
            IpAddr::V6(ipv6) => ipv6.octets(),
        }
    }
}

impl From<IpAddr> for IpAddress {
    fn from(ip: IpAddr) -> Self {
        Self(ip)
    }
}
impl From<Ipv4Addr> for IpAddress {
    fn from(value: Ipv4Addr) -> Self {
        Self(value.into())
    }
}
impl From<Ipv6Addr> for IpAddress {
    fn from(value: Ipv6Addr) -> Self {
        Self(value.into())
    }
}
impl From<IpAddress> for IpAddr {
    fn from(value: IpAddress) -> Self {
        value.0
    }
}

impl FromStr for IpAddress {
    type Err = AddrParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IpAddr::from_str(s).map(IpAddress::from)
    }
}

impl Display for IpAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl Deref for IpAddress {
    type Target = IpAddr;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

//
// IpAddr has no Borsh support, so the serializers are written by hand
//

impl BorshSerialize for IpAddress {
    fn serialize<W: std::io::Write>(&self, writer: &mut W) -> ::core::result::Result<(), std::io::Error> {
        match self.0 {
            IpAddr::V4(ip) => {
                writer.write_all(&[0u8])?;
                borsh::BorshSerialize::serialize(&ip.octets(), writer)
            }
            IpAddr::V6(ip) => {
                writer.write_all(&[1u8])?;
                borsh::BorshSerialize::serialize(&ip.octets(), writer)
            }
        }
    }
}

impl BorshDeserialize for IpAddress {
    fn deserialize_reader<R: std::io::Read>(reader: &mut R) -> ::core::result::Result<Self, borsh::io::Error> {
        let variant_idx: u8 = BorshDeserialize::deserialize_reader(reader)?;
        let ip = match variant_idx {
            0u8 => IpAddr::V4(Ipv4Addr::from(<[u8; 4]>::deserialize_reader(reader)?)),
            1u8 => IpAddr::V6(Ipv6Addr::from(<[u8; 16]>::deserialize_reader(reader)?)),
            _ => {
                let msg = format!("Unexpected variant index: {:?}", variant_idx);
                return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, msg));
            }
        };
        Ok(Self(ip))
    }
}

/// A network address, equivalent of a [SocketAddr].
#[derive(PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize, Debug, BorshSerialize, BorshDeserialize)]
pub struct NetAddress {
    pub ip: IpAddress,
    pub port: u16,
}

impl NetAddress {
    pub fn new(ip: IpAddress, port: u16) -> Self {
        Self { ip, port }
    }
}

impl From<SocketAddr> for NetAddress {
    fn from(value: SocketAddr) -> Self {
        Self::new(value.ip().into(), value.port())
    }
}

impl From<NetAddress> for SocketAddr {
    fn from(value: NetAddress) -> Self {
        Self::new(value.ip.0, value.port)
    }
}

impl FromStr for NetAddress {
    type Err = AddrParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SocketAddr::from_str(s).map(NetAddress::from)
    }
}

impl Display for NetAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        SocketAddr::from(*self).fmt(f)
    }
}
