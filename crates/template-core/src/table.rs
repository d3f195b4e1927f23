use std::borrow::Cow;
use tessera_types::{DataMap, TableSection};

/// Resolves one body row of `table` against `row`.
///
/// Always yields exactly `table.width()` cells: headers without a column
/// template produce empty cells and surplus column templates are ignored.
pub fn resolve_cells<F>(table: &TableSection, row: &DataMap, escape: F) -> Vec<String>
where
    F: Fn(&str) -> Cow<'_, str>,
{
    (0..table.width())
        .map(|i| crate::resolve_with(table.column(i), row, &escape))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::escape::{escape_html, identity};
    use tessera_types::Value;

    fn row(pairs: &[(&str, &str)]) -> DataMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), Value::from(*v)))
            .collect()
    }

    #[test]
    fn resolves_each_column() {
        let table = TableSection::new(["Name", "City"], ["{{name}}", "{{city}}"]);
        let cells = resolve_cells(&table, &row(&[("name", "Alice"), ("city", "Paris")]), identity);
        assert_eq!(cells, vec!["Alice", "Paris"]);
    }

    #[test]
    fn pads_missing_columns_with_empty_cells() {
        let table = TableSection::new(["a", "b", "c"], ["{{a}}"]);
        let cells = resolve_cells(&table, &row(&[("a", "1")]), identity);
        assert_eq!(cells, vec!["1", "", ""]);
    }

    #[test]
    fn ignores_surplus_columns() {
        let table = TableSection::new(["a"], ["{{a}}", "{{b}}"]);
        let cells = resolve_cells(&table, &row(&[("a", "1"), ("b", "2")]), identity);
        assert_eq!(cells, vec!["1"]);
    }

    #[test]
    fn applies_escaper_to_values() {
        let table = TableSection::new(["v"], ["<i>{{v}}</i>"]);
        let cells = resolve_cells(&table, &row(&[("v", "a&b")]), escape_html);
        assert_eq!(cells, vec!["<i>a&amp;b</i>"]);
    }
}
