use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Look up the display name for a region code.
///
/// Covers the two countries whose region codes the tries encode directly:
/// US states (plus DC) and Canadian provinces.
pub fn region_name_by_code(country: &str, region: &str) -> Option<&'static str> {
    if region.is_empty() {
        return None;
    }
    let composite = format!("{country}{region}");
    REGION_NAMES.get(composite.as_str()).copied()
}

static REGION_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("USAL", "Alabama"),
        ("USAK", "Alaska"),
        ("USAZ", "Arizona"),
        ("USAR", "Arkansas"),
        ("USCA", "California"),
        ("USCO", "Colorado"),
        ("USCT", "Connecticut"),
        ("USDC", "District of Columbia"),
        ("USDE", "Delaware"),
        ("USFL", "Florida"),
        ("USGA", "Georgia"),
        ("USHI", "Hawaii"),
        ("USID", "Idaho"),
        ("USIL", "Illinois"),
        ("USIN", "Indiana"),
        ("USIA", "Iowa"),
        ("USKS", "Kansas"),
        ("USKY", "Kentucky"),
        ("USLA", "Louisiana"),
        ("USME", "Maine"),
        ("USMD", "Maryland"),
        ("USMA", "Massachusetts"),
        ("USMI", "Michigan"),
        ("USMN", "Minnesota"),
        ("USMS", "Mississippi"),
        ("USMO", "Missouri"),
        ("USMT", "Montana"),
        ("USNE", "Nebraska"),
        ("USNV", "Nevada"),
        ("USNH", "New Hampshire"),
        ("USNJ", "New Jersey"),
        ("USNM", "New Mexico"),
        ("USNY", "New York"),
        ("USNC", "North Carolina"),
        ("USND", "North Dakota"),
        ("USOH", "Ohio"),
        ("USOK", "Oklahoma"),
        ("USOR", "Oregon"),
        ("USPA", "Pennsylvania"),
        ("USRI", "Rhode Island"),
        ("USSC", "South Carolina"),
        ("USSD", "South Dakota"),
        ("USTN", "Tennessee"),
        ("USTX", "Texas"),
        ("USUT", "Utah"),
        ("USVT", "Vermont"),
        ("USVA", "Virginia"),
        ("USWA", "Washington"),
        ("USWV", "West Virginia"),
        ("USWI", "Wisconsin"),
        ("USWY", "Wyoming"),
        ("CAAB", "Alberta"),
        ("CABC", "British Columbia"),
        ("CAMB", "Manitoba"),
        ("CANB", "New Brunswick"),
        ("CANL", "Newfoundland and Labrador"),
        ("CANS", "Nova Scotia"),
        ("CANT", "Northwest Territories"),
        ("CANU", "Nunavut"),
        ("CAON", "Ontario"),
        ("CAPE", "Prince Edward Island"),
        ("CAQC", "Quebec"),
        ("CASK", "Saskatchewan"),
        ("CAYT", "Yukon"),
    ])
});
