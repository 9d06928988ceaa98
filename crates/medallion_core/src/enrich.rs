use crate::regions::region_for_country;
use crate::table::{Table, TableError};

pub const COUNTRY_COLUMN: &str = "Country";
pub const REGION_COLUMN: &str = "Region";

/// Bronze to silver transform: appends a `Region` column derived from each
/// row's `Country` value. Original columns, row count, and row order are
/// preserved. A table without a `Country` column fails fast; individual
/// country values outside the lookup table resolve to `Others`.
pub fn enrich(table: &Table) -> Result<Table, TableError> {
    let country_index = table.column(COUNTRY_COLUMN)?;

    let mut headers = table.headers().to_vec();
    headers.push(REGION_COLUMN.to_string());

    let mut enriched = Table::new(headers);
    for row in table.rows() {
        let mut out = row.clone();
        out.push(region_for_country(&row[country_index]).to_string());
        enriched.push_row(out);
    }

    Ok(enriched)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer_table(rows: &[(&str, &str)]) -> Table {
        let mut table = Table::new(vec!["Customer Id".to_string(), COUNTRY_COLUMN.to_string()]);
        for (id, country) in rows {
            table.push_row(vec![id.to_string(), country.to_string()]);
        }
        table
    }

    #[test]
    fn assigns_mapped_region_and_others_fallback() {
        let input = customer_table(&[("1", "Chile"), ("2", "Atlantis")]);
        let enriched = enrich(&input).expect("enrich should pass");

        assert_eq!(enriched.headers(), &["Customer Id", "Country", "Region"]);
        assert_eq!(enriched.rows()[0], vec!["1", "Chile", "South America"]);
        assert_eq!(enriched.rows()[1], vec!["2", "Atlantis", "Others"]);
    }

    #[test]
    fn preserves_row_count_and_order() {
        let input = customer_table(&[("3", "Denmark"), ("1", "Vietnam"), ("2", "Denmark")]);
        let enriched = enrich(&input).expect("enrich should pass");

        assert_eq!(enriched.row_count(), input.row_count());
        let ids: Vec<&str> = enriched.rows().iter().map(|row| row[0].as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn preserves_extra_columns() {
        let mut input = Table::new(vec![
            "Customer Id".to_string(),
            "First Name".to_string(),
            COUNTRY_COLUMN.to_string(),
        ]);
        input.push_row(vec!["1".to_string(), "Ada".to_string(), "Malta".to_string()]);

        let enriched = enrich(&input).expect("enrich should pass");
        assert_eq!(enriched.rows()[0], vec!["1", "Ada", "Malta", "Europe"]);
    }

    #[test]
    fn missing_country_column_fails() {
        let table = Table::from_csv(b"Customer Id,Nation\n1,Chile\n").expect("csv should parse");
        let error = enrich(&table).expect_err("enrich should fail");
        assert_eq!(error, TableError::MissingColumn(COUNTRY_COLUMN.to_string()));
    }

    #[test]
    fn enriching_an_empty_table_keeps_it_empty() {
        let input = customer_table(&[]);
        let enriched = enrich(&input).expect("enrich should pass");

        assert_eq!(enriched.headers(), &["Customer Id", "Country", "Region"]);
        assert_eq!(enriched.row_count(), 0);
    }
}
