use tessera_types::DataMap;

/// Data key holding the per-row data sets of a table.
pub const ROWS_KEY: &str = "rows";

/// Returns the row contexts a table section is expanded against.
///
/// When `data["rows"]` is a list, each map entry is one row (other entries
/// are skipped). Otherwise `data` itself is the single implicit row.
pub fn extract_rows(data: &DataMap) -> Vec<&DataMap> {
    match data.get(ROWS_KEY).and_then(|rows| rows.as_list()) {
        Some(rows) => {
            let maps: Vec<&DataMap> = rows.iter().filter_map(|row| row.as_map()).collect();
            if maps.len() != rows.len() {
                log::debug!(
                    "Dropped {} non-map entries from '{}'",
                    rows.len() - maps.len(),
                    ROWS_KEY
                );
            }
            maps
        }
        None => vec![data],
    }
}
