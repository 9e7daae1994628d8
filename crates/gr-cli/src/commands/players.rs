use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use super::Settings;

pub fn list(settings: &Settings) -> Result<(), String> {
    let roster = settings.roster();

    if roster.is_empty() {
        println!("  No players yet. Add some with `godroll players add <name>`.");
        return Ok(());
    }

    let show_gods = roster.players().iter().any(|p| p.god.is_some());

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    let mut header = vec!["#", "Name", "Id"];
    if show_gods {
        header.push("God");
    }
    table.set_header(header);

    for (i, player) in roster.players().iter().enumerate() {
        let mut row = vec![
            (i + 1).to_string(),
            player.name.clone(),
            player.id.short().to_string(),
        ];
        if show_gods {
            row.push(player.god.clone().unwrap_or_else(|| "—".to_string()));
        }
        table.add_row(row);
    }

    println!("{table}");
    println!();
    println!(
        "  {} player{}",
        roster.len(),
        if roster.len() == 1 { "" } else { "s" }
    );

    Ok(())
}

pub fn add(settings: &Settings, names: &[String]) -> Result<(), String> {
    let mut roster = settings.roster();
    for name in names {
        let player = roster.add(name).map_err(|e| e.to_string())?;
        println!("  {} {}", "Added".green().bold(), player.name);
    }
    Ok(())
}

pub fn rename(settings: &Settings, who: &str, new_name: &str) -> Result<(), String> {
    let mut roster = settings.roster();
    let (id, old) = {
        let player = roster.resolve(who).map_err(|e| e.to_string())?;
        (player.id.clone(), player.name.clone())
    };
    let player = roster.update(&id, new_name).map_err(|e| e.to_string())?;
    println!("  {} {} -> {}", "Renamed".green().bold(), old, player.name);
    Ok(())
}

pub fn remove(settings: &Settings, who: &str) -> Result<(), String> {
    let mut roster = settings.roster();
    let id = roster.resolve(who).map_err(|e| e.to_string())?.id.clone();
    if let Some(player) = roster.remove(&id) {
        println!("  {} {}", "Removed".yellow().bold(), player.name);
    }
    Ok(())
}

pub fn clear(settings: &Settings) -> Result<(), String> {
    let mut roster = settings.roster();
    let count = roster.len();
    roster.clear();
    println!(
        "  {} ({count} player{} removed)",
        "Roster cleared".yellow().bold(),
        if count == 1 { "" } else { "s" }
    );
    Ok(())
}
