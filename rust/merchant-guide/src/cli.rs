use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::{GuideConfig, PricePolicy};
use crate::source::NoteSource;

#[derive(Debug, Parser)]
#[command(name = "merchant-guide")]
#[command(bin_name = "merchant-guide")]
#[command(about = "Answers questions about the intergalactic commodity markets", long_about = None)]
pub struct GuideCli {
    /// File of notes, one per line; `-` reads standard input
    #[arg(default_value = "-")]
    pub notes: PathBuf,

    /// Keep the first price declared for a commodity
    #[arg(long)]
    pub keep_first_price: bool,

    /// Do not learn new numerals from declarations like `pish glob is XI`
    #[arg(long)]
    pub no_composite_learning: bool,

    /// Print notes that could not be understood after the answers
    #[arg(long)]
    pub show_unknown: bool,

    /// More log output on stderr; repeat for more
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl GuideCli {
    pub fn config(&self) -> GuideConfig {
        let price_policy = if self.keep_first_price {
            PricePolicy::KeepFirst
        } else {
            PricePolicy::Overwrite
        };
        GuideConfig::default()
            .with_price_policy(price_policy)
            .with_composite_learning(!self.no_composite_learning)
    }

    pub fn source(&self) -> NoteSource {
        NoteSource::from_path(&self.notes)
    }

    /// The default log filter for the `-v` count.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use testresult::TestResult;

    #[test]
    fn test_defaults() -> TestResult {
        let cli = GuideCli::try_parse_from(["merchant-guide"])?;
        assert_eq!(cli.source(), NoteSource::Stdin);
        assert_eq!(cli.config(), GuideConfig::default());
        assert_eq!(cli.log_filter(), "warn");
        assert!(!cli.show_unknown);
        Ok(())
    }

    #[test]
    fn test_flags() -> TestResult {
        let cli = GuideCli::try_parse_from([
            "merchant-guide",
            "notes.txt",
            "--keep-first-price",
            "--no-composite-learning",
            "--show-unknown",
            "-vv",
        ])?;
        assert_eq!(cli.source(), NoteSource::File("notes.txt".into()));
        assert_eq!(
            cli.config(),
            GuideConfig {
                price_policy: PricePolicy::KeepFirst,
                learn_from_composites: false,
            }
        );
        assert!(cli.show_unknown);
        assert_eq!(cli.log_filter(), "debug");
        Ok(())
    }
}
