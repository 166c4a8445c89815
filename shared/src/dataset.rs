use tracing::error;
use crate::error::{Error, Result};
use crate::models::Booth;

/// Booth list shipped with the app; the starting point before any local edits.
pub const BUNDLED_BOOTHS: &str = include_str!("../data/booths.json");

pub fn default_booths() -> Vec<Booth> {
    serde_json::from_str(BUNDLED_BOOTHS).unwrap_or_else(|e| {
        error!("Bundled booth dataset is malformed: {}", e);
        Vec::new()
    })
}

pub fn find_booth(booths: &[Booth], id: u32) -> Option<&Booth> {
    booths.iter().find(|b| b.id == id)
}

pub fn replace_booth(booths: &mut [Booth], booth: Booth) -> Result<()> {
    let slot = booths.iter_mut()
        .find(|b| b.id == booth.id)
        .ok_or_else(|| Error::booth_not_found(booth.id))?;
    *slot = booth;
    Ok(())
}
