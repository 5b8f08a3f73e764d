use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "focuspot")]
#[command(about = "A terminal focus timer with session history and charts")]
#[command(long_about = "focuspot - A terminal focus timer

Run a countdown, keep a history of your focus sessions, and see how your
week is going.

QUICK START:
  focuspot                  Open the timer (25 minutes by default)
  focuspot timer -d 0:50:00 Open the timer with a 50-minute countdown
  focuspot history          List recorded sessions
  focuspot report           Weekly and daily charts

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  focuspot <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Log debug details to stderr
    ///
    /// Overridden by the FOCUSPOT_LOG environment variable.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive timer
    ///
    /// Keys:
    ///   s / Enter   start (or resume)
    ///   p / Space   pause / resume
    ///   r           reset (records elapsed time)
    ///   e           edit the duration (hh:mm:ss)
    ///   l           edit the label
    ///   c           clear history (asks for confirmation)
    ///   q / Esc     quit (records elapsed time)
    ///
    /// # Examples
    ///
    ///   focuspot timer
    ///   focuspot timer --duration 0:50:00 --label "Deep work"
    Timer(TimerArgs),

    /// List recorded focus sessions, newest first
    ///
    /// # Examples
    ///
    ///   focuspot history
    ///   focuspot history --limit 5
    ///   focuspot history --output json
    History {
        /// Maximum number of sessions to show
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },

    /// Show this week's focus per day and all-time daily totals
    ///
    /// # Examples
    ///
    ///   focuspot report
    ///   focuspot report --output json
    Report,

    /// Delete all recorded sessions
    ///
    /// # Examples
    ///
    ///   focuspot clear --force
    Clear {
        /// Confirm deletion
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   focuspot completions zsh > ~/.zsh/completions/_focuspot
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the interactive timer.
#[derive(Args, Default)]
pub struct TimerArgs {
    /// Countdown length as hh:mm:ss (e.g. 0:25:00, 1:30:00)
    #[arg(long, short = 'd')]
    pub duration: Option<String>,

    /// Label recorded with the session
    #[arg(long, short = 'l')]
    pub label: Option<String>,
}
