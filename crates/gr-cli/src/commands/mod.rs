pub mod gods;
pub mod players;
pub mod roll;
pub mod teams;

use std::io::Write;
use std::path::PathBuf;

use colored::Colorize;

use gr_core::{Catalog, Role};
use gr_draft::{DraftConfig, DraftEvent, RollTarget, Scheduler, SleepScheduler, VirtualClock};
use gr_roster::{FileStore, RosterConfig, RosterStore};

/// Options shared by every command.
pub struct Settings {
    pub store: PathBuf,
    pub catalog: Option<PathBuf>,
    pub seed: Option<u64>,
    pub animate: bool,
    pub persist_assignments: bool,
}

impl Settings {
    /// Open the roster file. A missing file is an empty roster.
    pub fn roster(&self) -> RosterStore<FileStore> {
        let config = RosterConfig::default().with_persist_assignments(self.persist_assignments);
        RosterStore::load(FileStore::new(&self.store), config)
    }

    /// The built-in catalog, or the one given with `--catalog`.
    pub fn catalog(&self) -> Result<Catalog, String> {
        let Some(path) = &self.catalog else {
            return Ok(Catalog::builtin());
        };
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read catalog {}: {e}", path.display()))?;
        Catalog::from_json(&text).map_err(|e| format!("{}: {e}", path.display()))
    }

    pub fn draft_config(&self, allow_duplicates: bool) -> DraftConfig {
        let mut config = DraftConfig::default().with_allow_duplicates(allow_duplicates);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }

    /// Real sleeps when animating, virtual time otherwise.
    pub fn scheduler(&self) -> Box<dyn Scheduler> {
        if self.animate {
            Box::new(SleepScheduler)
        } else {
            Box::new(VirtualClock::new())
        }
    }
}

/// Observer that renders draft events to stdout.
pub fn renderer(animate: bool) -> impl FnMut(&DraftEvent) {
    move |event| render_event(event, animate)
}

pub fn parse_role(input: &str) -> Result<Role, String> {
    Role::parse(input).ok_or_else(|| {
        let known: Vec<String> = Role::ALL.iter().map(|r| r.to_string().to_lowercase()).collect();
        format!("unknown role '{input}' (expected one of: {})", known.join(", "))
    })
}

const NAME_WIDTH: usize = 16;
const GOD_WIDTH: usize = 16;

fn who(target: Option<&RollTarget>) -> String {
    target.map_or_else(|| "Your god".to_string(), |t| t.name.clone())
}

/// Rolling values overwrite the current line; everything else ends it.
fn render_event(event: &DraftEvent, animate: bool) {
    match event {
        DraftEvent::Rolling {
            target, showing, ..
        } => {
            if animate {
                print!(
                    "\r  {:<NAME_WIDTH$} {}",
                    who(target.as_ref()),
                    format!("{showing:<GOD_WIDTH$}").dimmed()
                );
                let _ = std::io::stdout().flush();
            }
        }
        DraftEvent::Settled { target, god } => {
            println!(
                "\r  {:<NAME_WIDTH$} {}",
                who(target.as_ref()),
                format!("{god:<GOD_WIDTH$}").green().bold()
            );
        }
        DraftEvent::Exhausted { target } => {
            println!(
                "\r  {:<NAME_WIDTH$} {}",
                target.name,
                "no gods left".yellow().bold()
            );
        }
        DraftEvent::Cancelled { target } => {
            println!("\r  {:<NAME_WIDTH$} {}", who(target.as_ref()), "cancelled".dimmed());
        }
        DraftEvent::TeamsGenerated {
            first,
            second,
            benched,
        } => {
            let bench = if *benched > 0 {
                format!(", {benched} on the bench")
            } else {
                String::new()
            };
            println!(
                "  {} {}",
                "Teams".bold(),
                format!("({first}v{second}{bench})").dimmed()
            );
        }
    }
}
