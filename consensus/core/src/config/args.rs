use super::selector::select_params;
use crate::network::NetworkType;
use clap::{Arg, ArgAction, Command, arg};
use std::ffi::OsString;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkArgsError {
    #[error("only a single network may be activated, got {0:?}")]
    MultipleNetworks(Vec<NetworkType>),
}

/// Network selection and logging flags shared by the node binaries
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkArgs {
    pub testnet: bool,
    pub regtest: bool,
    pub unittest: bool,
    pub log_level: String,
}

impl Default for NetworkArgs {
    fn default() -> Self {
        Self { testnet: false, regtest: false, unittest: false, log_level: "info".to_string() }
    }
}

pub fn cli() -> Command {
    Command::new("likrd")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("log_level")
                .short('d')
                .long("loglevel")
                .env("LIKRD_LOG_LEVEL")
                .value_name("LEVEL")
                .default_value("info")
                .require_equals(true)
                .help("Logging level for all subsystems {off, error, warn, info, debug, trace}\n-- You may also specify <subsystem>=<level>,<subsystem2>=<level>,... to set the log level for individual subsystems."),
        )
        .arg(arg!(--testnet "Use the test network").env("LIKRD_TESTNET"))
        .arg(arg!(--regtest "Use the regression test network").env("LIKRD_REGTEST"))
        .arg(Arg::new("unittest").long("unittest").action(ArgAction::SetTrue).hide(true).help("Use the unit test network"))
}

impl NetworkArgs {
    pub fn parse<I, T>(itr: I) -> Result<NetworkArgs, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let m = cli().try_get_matches_from(itr)?;
        let defaults = NetworkArgs::default();
        Ok(NetworkArgs {
            testnet: arg_match_unwrap_or::<bool>(&m, "testnet", defaults.testnet),
            regtest: arg_match_unwrap_or::<bool>(&m, "regtest", defaults.regtest),
            unittest: arg_match_unwrap_or::<bool>(&m, "unittest", defaults.unittest),
            log_level: arg_match_unwrap_or::<String>(&m, "log_level", defaults.log_level),
        })
    }

    /// The requested network, mainnet when no network flag is set
    pub fn network(&self) -> Result<NetworkType, NetworkArgsError> {
        match (self.testnet, self.regtest, self.unittest) {
            (false, false, false) => Ok(NetworkType::Mainnet),
            (true, false, false) => Ok(NetworkType::Testnet),
            (false, true, false) => Ok(NetworkType::Regtest),
            (false, false, true) => Ok(NetworkType::Unittest),
            _ => Err(NetworkArgsError::MultipleNetworks(
                [(self.testnet, NetworkType::Testnet), (self.regtest, NetworkType::Regtest), (self.unittest, NetworkType::Unittest)]
                    .into_iter()
                    .filter_map(|(set, net)| set.then_some(net))
                    .collect(),
            )),
        }
    }
}

/// Selects the network requested by `args` in the process-wide registry, which must already
/// be initialized
pub fn select_params_from_args(args: &NetworkArgs) -> Result<NetworkType, NetworkArgsError> {
    let net = args.network()?;
    select_params(net);
    Ok(net)
}

fn arg_match_unwrap_or<T: Clone + Send + Sync + 'static>(m: &clap::ArgMatches, arg_id: &str, default: T) -> T {
    m.get_one::<T>(arg_id).cloned().unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_mainnet() {
        let args = NetworkArgs::parse(["likrd"]).unwrap();
        assert_eq!(args, NetworkArgs::default());
        assert_eq!(args.network(), Ok(NetworkType::Mainnet));
    }

    #[test]
    fn test_single_network_flags() {
        assert_eq!(NetworkArgs::parse(["likrd", "--testnet"]).unwrap().network(), Ok(NetworkType::Testnet));
        assert_eq!(NetworkArgs::parse(["likrd", "--regtest"]).unwrap().network(), Ok(NetworkType::Regtest));
        assert_eq!(NetworkArgs::parse(["likrd", "--unittest"]).unwrap().network(), Ok(NetworkType::Unittest));
    }

    #[test]
    fn test_conflicting_flags() {
        let args = NetworkArgs::parse(["likrd", "--testnet", "--regtest"]).unwrap();
        assert_eq!(args.network(), Err(NetworkArgsError::MultipleNetworks(vec![NetworkType::Testnet, NetworkType::Regtest])));
        let args = NetworkArgs { testnet: true, regtest: true, unittest: true, ..Default::default() };
        assert!(args.network().unwrap_err().to_string().starts_with("only a single network"));
    }

    #[test]
    fn test_log_level() {
        let args = NetworkArgs::parse(["likrd", "--loglevel=debug,likr_consensus_core=trace"]).unwrap();
        assert_eq!(args.log_level, "debug,likr_consensus_core=trace");
    }

    #[test]
    fn test_unknown_flag() {
        assert!(NetworkArgs::parse(["likrd", "--devnet"]).is_err());
    }

    #[test]
    fn test_unittest_flag_hidden() {
        let help = cli().render_help().to_string();
        assert!(help.contains("--testnet"));
        assert!(help.contains("--regtest"));
        assert!(!help.contains("--unittest"));
    }
}
