use std::net::IpAddr;

use anyhow::{Context, bail};

/// Runtime configuration, taken from the three positional CLI arguments.
#[derive(Debug, Clone)]
pub struct Config {
    pub address: IpAddr,
    pub port: u16,
    pub root: String,
}

impl Config {
    /// Parses `<address> <port> <root>` from an argument iterator.
    ///
    /// The first item is the program name and is skipped. Anything other
    /// than exactly three arguments after it is an error, as are an
    /// unparseable address or port.
    pub fn from_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        args.next(); // program name

        let (Some(address), Some(port), Some(root), None) =
            (args.next(), args.next(), args.next(), args.next())
        else {
            bail!("expected exactly three arguments: <address> <port> <root>");
        };

        let address = address
            .parse::<IpAddr>()
            .with_context(|| format!("invalid bind address '{address}'"))?;
        let port = port
            .parse::<u16>()
            .with_context(|| format!("invalid port '{port}'"))?;

        Ok(Self {
            address,
            port,
            root,
        })
    }
}
