use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(thiserror::Error, PartialEq, Eq, Debug, Clone)]
pub enum NetworkTypeError {
    #[error("Invalid network type: {0}")]
    InvalidNetworkType(String),
}

#[derive(Clone, Copy, Debug, Hash, Serialize, Deserialize, BorshSerialize, BorshDeserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
#[borsh(use_discriminant = true)]
#[repr(u8)]
pub enum NetworkType {
    Mainnet = 0,
    Testnet = 1,
    Regtest = 2,
    /// Embedded network used by test harnesses. It is the only network whose
    /// parameters can be modified after construction.
    Unittest = 3,
}

impl NetworkType {
    pub fn iter() -> impl Iterator<Item = Self> {
        static NETWORK_TYPES: [NetworkType; 4] =
            [NetworkType::Mainnet, NetworkType::Testnet, NetworkType::Regtest, NetworkType::Unittest];
        NETWORK_TYPES.iter().copied()
    }

    /// The short identifier carried by the parameter set ("main", "test", ...)
    pub fn network_id(&self) -> &'static str {
        match self {
            NetworkType::Mainnet => "main",
            NetworkType::Testnet => "test",
            NetworkType::Regtest => "regtest",
            NetworkType::Unittest => "unittest",
        }
    }

    pub fn is_mainnet(&self) -> bool {
        *self == NetworkType::Mainnet
    }
}

impl TryFrom<u8> for NetworkType {
    type Error = NetworkTypeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        NetworkType::iter().find(|net| *net as u8 == value).ok_or_else(|| NetworkTypeError::InvalidNetworkType(value.to_string()))
    }
}

impl FromStr for NetworkType {
    type Err = NetworkTypeError;
    fn from_str(network_type: &str) -> Result<Self, Self::Err> {
        match network_type.to_lowercase().as_str() {
            "mainnet" | "main" => Ok(NetworkType::Mainnet),
            "testnet" | "test" => Ok(NetworkType::Testnet),
            "regtest" => Ok(NetworkType::Regtest),
            "unittest" => Ok(NetworkType::Unittest),
            _ => Err(NetworkTypeError::InvalidNetworkType(network_type.to_string())),
        }
    }
}

impl Display for NetworkType {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            NetworkType::Mainnet => "mainnet",
            NetworkType::Testnet => "testnet",
            NetworkType::Regtest => "regtest",
            NetworkType::Unittest => "unittest",
        };
        f.write_str(s)
    }
}
