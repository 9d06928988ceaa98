use std::collections::HashMap;
use std::sync::OnceLock;

/// Region assigned to any country absent from the lookup table.
pub const UNMAPPED_REGION: &str = "Others";

// Country names match the raw customer exports exactly, case-sensitive.
const COUNTRY_REGIONS: &[(&str, &str)] = &[
    ("Chile", "South America"),
    ("Djibouti", "Africa"),
    ("Antigua and Barbuda", "Caribbean"),
    ("Dominican Republic", "Caribbean"),
    ("Slovakia (Slovak Republic)", "Europe"),
    ("Bosnia and Herzegovina", "Europe"),
    ("Pitcairn Islands", "Oceania"),
    ("Bulgaria", "Europe"),
    ("Cyprus", "Europe"),
    ("Timor-Leste", "Asia"),
    ("Guernsey", "Europe"),
    ("Vietnam", "Asia"),
    ("Sri Lanka", "Asia"),
    ("Singapore", "Asia"),
    ("Oman", "Asia"),
    ("Western Sahara", "Africa"),
    ("Mozambique", "Africa"),
    ("South Georgia and the South Sandwich Islands", "Antarctica"),
    ("French Polynesia", "Oceania"),
    ("Malta", "Europe"),
    ("Netherlands", "Europe"),
    ("Paraguay", "South America"),
    ("Lao People's Democratic Republic", "Asia"),
    ("Albania", "Europe"),
    ("Panama", "North America"),
    ("Belarus", "Europe"),
    ("Switzerland", "Europe"),
    ("Saint Vincent and the Grenadines", "Caribbean"),
    ("Tanzania", "Africa"),
    ("Zimbabwe", "Africa"),
    ("Denmark", "Europe"),
    ("Liechtenstein", "Europe"),
    ("United States of America", "North America"),
    ("Bahamas", "Caribbean"),
    ("Others", "Others"),
];

fn mapping() -> &'static HashMap<&'static str, &'static str> {
    static MAPPING: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    MAPPING.get_or_init(|| COUNTRY_REGIONS.iter().copied().collect())
}

/// Resolves a country name to its region, falling back to
/// [`UNMAPPED_REGION`] for anything outside the table.
pub fn region_for_country(country: &str) -> &'static str {
    mapping().get(country).copied().unwrap_or(UNMAPPED_REGION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_countries() {
        assert_eq!(region_for_country("Chile"), "South America");
        assert_eq!(region_for_country("Timor-Leste"), "Asia");
        assert_eq!(region_for_country("United States of America"), "North America");
        assert_eq!(region_for_country("South Georgia and the South Sandwich Islands"), "Antarctica");
    }

    #[test]
    fn unknown_countries_resolve_to_others() {
        assert_eq!(region_for_country("Atlantis"), UNMAPPED_REGION);
        assert_eq!(region_for_country(""), UNMAPPED_REGION);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(region_for_country("chile"), UNMAPPED_REGION);
    }

    #[test]
    fn others_maps_to_itself() {
        assert_eq!(region_for_country("Others"), "Others");
    }
}
