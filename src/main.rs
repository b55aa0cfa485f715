use clap::{ArgAction, Parser};
use std::{
    error::Error,
    io::{self, BufRead, BufWriter, Write},
};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;
use tts_cleaners::CleanerChain;

/// Clean text for speech synthesis, one line per input.
#[derive(Parser, Debug)]
#[command(name = "tts-cleaners")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Comma-separated cleaner names, applied left to right
    #[arg(short, long, default_value = "english_cleaners")]
    cleaners: CleanerChain,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Texts to clean; standard input is read line by line when omitted
    text: Vec<String>,
}

fn setup_logging(verbose: u8) -> Result<(), Box<dyn Error>> {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Writes one cleaned line per entry of `texts`, or per line of `input`
/// when no texts were given.
fn clean_all(
    chain: &CleanerChain,
    texts: &[String],
    input: impl BufRead,
    mut out: impl Write,
) -> io::Result<()> {
    if texts.is_empty() {
        for line in input.lines() {
            writeln!(out, "{}", chain.clean(&line?))?;
        }
    } else {
        for text in texts {
            writeln!(out, "{}", chain.clean(text))?;
        }
    }
    out.flush()
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;
    info!(cleaners = %cli.cleaners, "cleaning");

    let out = BufWriter::new(io::stdout().lock());
    clean_all(&cli.cleaners, &cli.text, io::stdin().lock(), out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tts_cleaners::Cleaner;

    fn cleaned(chain: &CleanerChain, texts: &[&str], input: &str) -> String {
        let texts: Vec<String> = texts.iter().map(|t| t.to_string()).collect();
        let mut out = Vec::new();
        clean_all(chain, &texts, input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn defaults_to_english_cleaners() {
        let cli = Cli::try_parse_from(["tts-cleaners"]).unwrap();
        assert_eq!(cli.cleaners, CleanerChain::default());
        assert_eq!(cli.cleaners.cleaners(), &[Cleaner::English]);
        assert_eq!(cli.verbose, 0);
        assert!(cli.text.is_empty());
    }

    #[test]
    fn parses_cleaner_list_and_verbosity() {
        let cli = Cli::try_parse_from([
            "tts-cleaners",
            "-c",
            "basic_cleaners, expand_numbers",
            "-vvv",
            "first",
            "second",
        ])
        .unwrap();
        assert_eq!(
            cli.cleaners.cleaners(),
            &[Cleaner::Basic, Cleaner::ExpandNumbers]
        );
        assert_eq!(cli.verbose, 3);
        assert_eq!(cli.text, ["first", "second"]);
    }

    #[test]
    fn rejects_unknown_cleaner() {
        assert!(Cli::try_parse_from(["tts-cleaners", "-c", "shout"]).is_err());
        assert!(Cli::try_parse_from(["tts-cleaners", "--cleaners", ","]).is_err());
    }

    #[test]
    fn writes_one_line_per_text() {
        let chain: CleanerChain = "basic_cleaners".parse().unwrap();
        let out = cleaned(&chain, &["HELLO   WORLD", " Two\tWords "], "IGNORED");
        assert_eq!(out, "hello world\n two words \n");
    }

    #[test]
    fn reads_lines_when_no_texts() {
        let chain: CleanerChain = "basic_cleaners,expand_numbers".parse().unwrap();
        let out = cleaned(&chain, &[], "I HAVE 2 CATS\nAND   3 DOGS\n");
        assert_eq!(out, "i have two cats\nand three dogs\n");
        assert_eq!(cleaned(&chain, &[], ""), "");
    }
}
