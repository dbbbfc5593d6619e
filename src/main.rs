//! Wordle A* - CLI
//!
//! Terminal Wordle clone with colorized feedback, plus tools to score guesses,
//! filter word lists and run the best-first word search.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use log::{LevelFilter, debug};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use wordle_astar::{
    commands::{PlayConfig, filter_words, run_explore, run_play, run_search, score_words},
    core::{ScoringRule, Word},
    game::{Difficulty, GameConfig, InvalidGuessPolicy},
    output::{print_explore_result, print_filter_result, print_score, print_search_report},
    solver::Expansion,
    wordlists::{WordSource, load_words},
};

#[derive(Parser, Debug)]
#[command(
    name = "wordle_astar",
    about = "Terminal Wordle with colorized feedback and a best-first word search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty tier; the game asks via a menu when omitted
    #[arg(short, long, global = true, value_enum)]
    difficulty: Option<Difficulty>,

    /// Directory containing WORD_LIST1.txt, WORD_LIST2.txt and WORD_LIST3.txt
    /// (default: built-in lists)
    #[arg(short = 'w', long, global = true)]
    words_dir: Option<PathBuf>,

    /// Seed for secret selection and search start words
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Feedback rule: naive (letter anywhere in the secret) or wordle (count-aware)
    #[arg(long, global = true, value_enum, default_value = "naive")]
    scoring: ScoringArg,

    /// Reject guesses that the word search cannot find in the word list
    #[arg(long, global = true)]
    check_dictionary: bool,

    /// Invalid guesses do not use up an attempt
    #[arg(long, global = true)]
    retry_invalid: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Play a game (default)
    Play {
        /// Use this secret word instead of a random one
        #[arg(long)]
        secret: Option<String>,
    },

    /// Score a guess against a secret word
    Score { guess: String, secret: String },

    /// Filter the word list with a guess and its verdict (e.g. GYBBB)
    Filter { guess: String, verdict: String },

    /// Run the priority search for a target word
    Search {
        /// The word to look for
        target: String,

        /// Pool carried by child nodes
        #[arg(short, long, value_enum, default_value = "filtered")]
        expansion: ExpansionArg,

        /// Start word (default: random word from the list)
        #[arg(long)]
        start: Option<String>,
    },

    /// Run the priority search for every word of the list
    Explore {
        /// Limit number of target words
        #[arg(short, long)]
        limit: Option<usize>,

        #[arg(short, long, value_enum, default_value = "filtered")]
        expansion: ExpansionArg,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ScoringArg {
    Naive,
    Wordle,
}

impl From<ScoringArg> for ScoringRule {
    fn from(arg: ScoringArg) -> Self {
        match arg {
            ScoringArg::Naive => Self::Naive,
            ScoringArg::Wordle => Self::Wordle,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ExpansionArg {
    Filtered,
    Unfiltered,
}

impl From<ExpansionArg> for Expansion {
    fn from(arg: ExpansionArg) -> Self {
        match arg {
            ExpansionArg::Filtered => Self::Filtered,
            ExpansionArg::Unfiltered => Self::Unfiltered,
        }
    }
}

impl Cli {
    fn word_source(&self) -> WordSource {
        self.words_dir
            .clone()
            .map_or(WordSource::Embedded, WordSource::Directory)
    }

    fn game_config(&self) -> GameConfig {
        GameConfig {
            scoring: self.scoring.into(),
            invalid_guess: if self.retry_invalid {
                InvalidGuessPolicy::Retry
            } else {
                InvalidGuessPolicy::Forfeit
            },
            check_dictionary: self.check_dictionary,
            ..GameConfig::default()
        }
    }

    fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64)
    }

    /// Words for the non-interactive commands (Normal when no tier is given)
    fn load_list(&self) -> Result<Vec<Word>> {
        let difficulty = self.difficulty.unwrap_or_default();
        Ok(load_words(difficulty, &self.word_source())?)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn init_terminal(no_color: bool) {
    if no_color {
        colored::control::set_override(false);
    }

    #[cfg(windows)]
    {
        if colored::control::set_virtual_terminal(true).is_err() {
            debug!("Could not enable ANSI colors on this console");
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    init_terminal(cli.no_color);
    debug!("Command line options: {cli:?}");

    let mut rng = cli.rng();

    match cli.command.as_ref().unwrap_or(&Commands::Play { secret: None }) {
        Commands::Play { secret } => run_play_command(&cli, secret.clone(), &mut rng),
        Commands::Score { guess, secret } => {
            let (guess, verdict) = score_words(guess, secret, cli.scoring.into())?;
            print_score(&guess, &Word::new(secret)?, &verdict);
            Ok(())
        }
        Commands::Filter { guess, verdict } => {
            let words = cli.load_list()?;
            let (guess, verdict, remaining) = filter_words(&words, guess, verdict)?;
            print_filter_result(&guess, &verdict, words.len(), &remaining);
            Ok(())
        }
        Commands::Search {
            target,
            expansion,
            start,
        } => {
            let words = cli.load_list()?;
            let report = run_search(&words, target, start.as_deref(), (*expansion).into(), &mut rng)?;
            print_search_report(&report);
            Ok(())
        }
        Commands::Explore { limit, expansion } => {
            let words = cli.load_list()?;
            let result = run_explore(&words, (*expansion).into(), *limit, cli.seed, true);
            print_explore_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(cli: &Cli, secret: Option<String>, rng: &mut StdRng) -> Result<()> {
    let config = PlayConfig {
        difficulty: cli.difficulty,
        source: cli.word_source(),
        game: cli.game_config(),
        secret,
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    let result = run_play(&config, &mut input, &mut out, rng)?;
    debug!("game finished: {result:?}");
    Ok(())
}
