use std::path::PathBuf;

use clap::Parser;

/// Terminal mockup of a music playlist page with a simulated player bar.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Read settings from this file instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Do not register on the session bus
    #[arg(long)]
    pub no_mpris: bool,

    /// Print the effective settings as TOML and exit
    #[arg(long)]
    pub dump_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_means_defaults() {
        let args = Args::parse_from(["playbar"]);
        assert_eq!(args.config, None);
        assert!(!args.no_mpris);
        assert!(!args.dump_config);
    }

    #[test]
    fn parses_all_flags() {
        let args = Args::parse_from([
            "playbar",
            "--config",
            "/tmp/playbar.toml",
            "--no-mpris",
            "--dump-config",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/playbar.toml")));
        assert!(args.no_mpris);
        assert!(args.dump_config);
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Args::try_parse_from(["playbar", "--volume", "3"]).is_err());
    }
}
