use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP translation server
    Serve {
        /// Address to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Dictionary CSV file (English, Hindi, Gadhwali columns)
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// Translate a single sentence and print the result
    Translate {
        /// Sentence to translate
        #[arg(short, long)]
        text: String,

        /// Source language (en, hi, gadhwali)
        #[arg(short, long, default_value = "en")]
        source: String,

        /// Target language (en, hi, gadhwali)
        #[arg(short = 'g', long, default_value = "gadhwali")]
        target: String,

        /// Dictionary CSV file (English, Hindi, Gadhwali columns)
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Skip the online translation service
        #[arg(long)]
        offline: bool,
    },

    /// Write the default configuration to a TOML file
    InitConfig {
        /// Output file
        #[arg(short, long, default_value = "config.toml")]
        output: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_translate_command() {
        let args = Args::try_parse_from([
            "boli", "--verbose", "translate", "--text", "I am happy", "--target", "hi", "--offline",
        ])
        .unwrap();

        assert!(args.verbose);
        match args.command {
            Commands::Translate { text, source, target, offline, data } => {
                assert_eq!(text, "I am happy");
                assert_eq!(source, "en");
                assert_eq!(target, "hi");
                assert!(offline);
                assert!(data.is_none());
            }
            _ => panic!("expected translate command"),
        }
    }

    #[test]
    fn test_parse_serve_overrides() {
        let args = Args::try_parse_from(["boli", "serve", "--port", "8080", "--data", "phrases.csv"]).unwrap();
        match args.command {
            Commands::Serve { host, port, data } => {
                assert!(host.is_none());
                assert_eq!(port, Some(8080));
                assert_eq!(data, Some(PathBuf::from("phrases.csv")));
            }
            _ => panic!("expected serve command"),
        }
    }
}
