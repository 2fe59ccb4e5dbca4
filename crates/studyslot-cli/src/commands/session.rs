//! Login and logout commands for CLI.

use super::{load_config, open_planner, CmdResult};

pub fn login(id: &str) -> CmdResult {
    let mut config = load_config()?;
    let planner = open_planner(&config, config.scheduler_config()?)?;
    let student = planner
        .lookup_student(id)
        .cloned()
        .ok_or_else(|| format!("student id not found: {id}"))?;

    config.set("session.owner_id", &student.id)?;
    config.save()?;
    println!("Logged in as {} ({})", student.name, student.id);
    Ok(())
}

pub fn logout() -> CmdResult {
    let mut config = load_config()?;
    config.session.owner_id.clear();
    config.save()?;
    println!("Logged out");
    Ok(())
}
