use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "horoscope-matcher")]
#[command(about = "Match people by sun, moon and rising signs.")]
pub struct CommandLine {
    /// Start the HTTP server
    #[arg(long)]
    pub gui: bool,

    /// Port to listen on (overrides server.port)
    #[arg(long)]
    pub port: Option<u16>,

    /// Configuration file to load instead of config/default.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Sun sign for a one-off match without the server
    #[arg(long, requires_all = ["moon", "rising"])]
    pub sun: Option<String>,

    /// Moon sign for a one-off match without the server
    #[arg(long, requires_all = ["sun", "rising"])]
    pub moon: Option<String>,

    /// Rising sign for a one-off match without the server
    #[arg(long, requires_all = ["sun", "moon"])]
    pub rising: Option<String>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The sun, moon and rising signs when all three were given
    pub fn chart(&self) -> Option<(&str, &str, &str)> {
        match (&self.sun, &self.moon, &self.rising) {
            (Some(sun), Some(moon), Some(rising)) => {
                Some((sun.as_str(), moon.as_str(), rising.as_str()))
            }
            _ => None,
        }
    }
}
