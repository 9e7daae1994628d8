//! CLI frontend for the Godroll team and god picker.

mod commands;
mod logging;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};

use commands::Settings;

#[derive(Parser)]
#[command(
    name = "godroll",
    about = "Godroll: random teams and gods for Smite 2 customs",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Roster file
    #[arg(long, global = true, env = "GODROLL_STORE", default_value = "godroll.json")]
    store: PathBuf,

    /// JSON catalog to use instead of the built-in gods
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// RNG seed for reproducible draws
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Skip the rolling animation and print results only
    #[arg(long, global = true)]
    no_animation: bool,

    /// Store assigned gods in the roster file
    #[arg(long, global = true)]
    persist_assignments: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List the god catalog
    Gods {
        /// Only gods with this role (guardian, warrior, mage, hunter, assassin)
        #[arg(short, long)]
        role: Option<String>,

        /// Only gods from this pantheon
        #[arg(short, long)]
        pantheon: Option<String>,
    },

    /// Roll a single random god
    Roll {
        /// Only roll gods with this role
        #[arg(short, long)]
        role: Option<String>,
    },

    /// Manage the player roster
    Players {
        #[command(subcommand)]
        action: PlayerCommand,
    },

    /// Split the roster into two teams and optionally assign gods
    Teams {
        /// Size of Team 1
        #[arg(
            short = 'a',
            long,
            default_value = "5",
            value_parser = clap::value_parser!(u8).range(1..=5)
        )]
        first: u8,

        /// Size of Team 2 (requires --unbalanced)
        #[arg(
            short = 'b',
            long,
            requires = "unbalanced",
            value_parser = clap::value_parser!(u8).range(1..=5)
        )]
        second: Option<u8>,

        /// Allow different team sizes
        #[arg(long)]
        unbalanced: bool,

        /// Assign a god to every team member
        #[arg(long)]
        assign: bool,

        /// Allow two players to get the same god
        #[arg(long)]
        allow_duplicates: bool,

        /// Re-roll a player's god after assignment (name or id, repeatable)
        #[arg(long, value_name = "PLAYER")]
        reroll: Vec<String>,

        /// Record assigned gods on the roster (needs --persist-assignments)
        #[arg(long)]
        keep: bool,
    },
}

#[derive(Subcommand)]
enum PlayerCommand {
    /// Show the roster
    List,

    /// Add one or more players
    Add {
        /// Player names
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Rename a player
    Rename {
        /// Current name or id
        player: String,

        /// New name
        name: String,
    },

    /// Remove a player
    Remove {
        /// Name or id
        player: String,
    },

    /// Remove every player
    Clear,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let settings = Settings {
        store: cli.store,
        catalog: cli.catalog,
        seed: cli.seed,
        animate: !cli.no_animation,
        persist_assignments: cli.persist_assignments,
    };

    let result = match cli.command {
        Commands::Gods { role, pantheon } => {
            commands::gods::run(&settings, role.as_deref(), pantheon.as_deref())
        }
        Commands::Roll { role } => commands::roll::run(&settings, role.as_deref()),
        Commands::Players { action } => match action {
            PlayerCommand::List => commands::players::list(&settings),
            PlayerCommand::Add { names } => commands::players::add(&settings, &names),
            PlayerCommand::Rename { player, name } => {
                commands::players::rename(&settings, &player, &name)
            }
            PlayerCommand::Remove { player } => commands::players::remove(&settings, &player),
            PlayerCommand::Clear => commands::players::clear(&settings),
        },
        Commands::Teams {
            first,
            second,
            unbalanced,
            assign,
            allow_duplicates,
            reroll,
            keep,
        } => {
            let options = commands::teams::TeamOptions {
                first: usize::from(first),
                second: second.map(usize::from),
                unbalanced,
                assign,
                allow_duplicates,
                reroll,
                keep,
            };
            commands::teams::run(&settings, &options)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
