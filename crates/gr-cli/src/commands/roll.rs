use colored::Colorize;

use gr_draft::Draft;

use super::Settings;

pub fn run(settings: &Settings, role: Option<&str>) -> Result<(), String> {
    let mut catalog = settings.catalog()?;
    if let Some(role) = role {
        let role = super::parse_role(role)?;
        catalog = catalog
            .filter_role(role)
            .map_err(|_| format!("no {role} gods in the catalog"))?;
    }

    let mut draft = Draft::new(&catalog, settings.draft_config(false));
    let roll = draft.start_roll().map_err(|e| e.to_string())?;
    let mut scheduler = settings.scheduler();

    let god = draft
        .run(roll, scheduler.as_mut(), super::renderer(settings.animate))
        .map_err(|e| e.to_string())?
        .completed()
        .ok_or("roll cancelled")?;

    if let Some(character) = catalog.find(&god) {
        println!(
            "  {}",
            format!("{}, {}", character.role, character.pantheon).dimmed()
        );
    }

    Ok(())
}
