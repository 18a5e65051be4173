use crate::models::entry::Entry;

/// Write the entries as pretty-printed JSON.
pub fn write_json(path: &str, entries: &[Entry]) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(entries)
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    std::fs::write(path, json)
}
