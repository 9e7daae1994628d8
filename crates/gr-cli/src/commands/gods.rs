use comfy_table::{ContentArrangement, Table};

use super::Settings;

pub fn run(settings: &Settings, role: Option<&str>, pantheon: Option<&str>) -> Result<(), String> {
    let catalog = settings.catalog()?;
    let role = role.map(super::parse_role).transpose()?;
    let pantheon = pantheon.map(|p| p.trim().to_lowercase());

    let gods: Vec<_> = catalog
        .all()
        .iter()
        .filter(|c| role.is_none_or(|r| c.role == r))
        .filter(|c| {
            pantheon
                .as_deref()
                .is_none_or(|p| c.pantheon.to_lowercase() == p)
        })
        .collect();

    if gods.is_empty() {
        println!("  No gods found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Role", "Pantheon"]);
    for god in &gods {
        table.add_row(vec![god.name.clone(), god.role.to_string(), god.pantheon.clone()]);
    }

    println!("{table}");
    println!();
    println!("  {} of {} gods", gods.len(), catalog.len());

    Ok(())
}
