use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use gr_core::PlayerId;
use gr_draft::{Draft, DraftError, DraftEvent, Scheduler, Team, TeamPair, TeamSizes};

use super::Settings;

pub struct TeamOptions {
    pub first: usize,
    pub second: Option<usize>,
    pub unbalanced: bool,
    pub assign: bool,
    pub allow_duplicates: bool,
    pub reroll: Vec<String>,
    pub keep: bool,
}

impl TeamOptions {
    fn sizes(&self) -> TeamSizes {
        let mut sizes = TeamSizes::balanced(self.first);
        if self.unbalanced {
            sizes.set_balanced(false);
            sizes.set_second(self.second.unwrap_or(self.first));
        }
        sizes
    }
}

pub fn run(settings: &Settings, options: &TeamOptions) -> Result<(), String> {
    let mut roster = settings.roster();
    let catalog = settings.catalog()?;

    // Resolve reroll targets before anything is drawn so typos fail early.
    let rerolls = options
        .reroll
        .iter()
        .map(|who| {
            roster
                .resolve(who)
                .map(|p| (p.id.clone(), p.name.clone()))
                .map_err(|e| e.to_string())
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut draft = Draft::new(&catalog, settings.draft_config(options.allow_duplicates));
    let mut render = super::renderer(settings.animate);

    let generated = draft
        .generate_teams(roster.players(), options.sizes())
        .map_err(|e| e.to_string())?;
    render(&generated);
    if options.assign || !rerolls.is_empty() {
        println!();
    }

    let mut scheduler = settings.scheduler();
    let rolled = roll_gods(
        &mut draft,
        options.assign,
        &rerolls,
        scheduler.as_mut(),
        &mut render,
    );

    let Some(teams) = draft.teams() else {
        return Err(DraftError::NoTeams.to_string());
    };
    println!();
    println!("{}", teams_table(teams));

    if options.keep {
        let saved = roster.record_assignments(teams.assignments());
        if settings.persist_assignments {
            println!("  Saved {saved} assignment{}", if saved == 1 { "" } else { "s" });
        } else {
            println!(
                "  {} assignments are not saved without --persist-assignments",
                "note:".yellow().bold()
            );
        }
    }

    // Partial results are shown before the error.
    rolled
}

/// Bulk-assign if asked, then run each reroll in order.
fn roll_gods<F>(
    draft: &mut Draft,
    assign: bool,
    rerolls: &[(PlayerId, String)],
    scheduler: &mut dyn Scheduler,
    render: &mut F,
) -> Result<(), String>
where
    F: FnMut(&DraftEvent),
{
    if assign {
        let bulk = draft.start_bulk().map_err(|e| e.to_string())?;
        draft
            .run(bulk, &mut *scheduler, &mut *render)
            .map_err(|e| e.to_string())?;
    }

    for (id, name) in rerolls {
        let reroll = draft.start_reroll(id).map_err(|e| match e {
            DraftError::PlayerNotInTeams(_) => format!("{name} is not on a team"),
            other => other.to_string(),
        })?;
        draft
            .run(reroll, &mut *scheduler, &mut *render)
            .map_err(|e| e.to_string())?;
    }

    Ok(())
}

fn teams_table(teams: &TeamPair) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        teams.first.label.as_str(),
        "God",
        teams.second.label.as_str(),
        "God",
    ]);

    let rows = teams.first.len().max(teams.second.len());
    let cells = |team: &Team, i: usize| match team.members.get(i) {
        Some(m) => [m.name.clone(), m.god.clone().unwrap_or_else(|| "—".to_string())],
        None => [String::new(), String::new()],
    };
    for i in 0..rows {
        let [a, a_god] = cells(&teams.first, i);
        let [b, b_god] = cells(&teams.second, i);
        table.add_row(vec![a, a_god, b, b_god]);
    }
    table
}
