use std::path::Path;

use super::read_json;
use crate::error::Result;
use crate::schedule::Roster;

/// Load the class-grid reference data.
///
/// With no path the built-in demo roster is used. A configured file that
/// does not exist is an empty roster.
pub fn load_roster(path: Option<&Path>) -> Result<Roster> {
    let Some(path) = path else {
        return Ok(Roster::demo());
    };
    let roster: Roster = read_json(path)?;
    roster.validate()?;
    tracing::debug!(path = %path.display(), students = roster.len(), "roster loaded");
    Ok(roster)
}
