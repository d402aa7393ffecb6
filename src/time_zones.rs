use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Look up the IANA time zone for a country and region code.
///
/// The composite `iso2 + region_code` entry wins when one exists (US
/// states and Canadian provinces), otherwise the country-level entry is
/// used. Countries without an entry yield `None`.
pub fn time_zone_by_country(country: &str, region: &str) -> Option<&'static str> {
    if !region.is_empty() {
        let composite = format!("{country}{region}");
        if let Some(zone) = TIME_ZONES.get(composite.as_str()) {
            return Some(zone);
        }
    }
    TIME_ZONES.get(country).copied()
}

static TIME_ZONES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // United States, keyed by state
        ("USAL", "America/Chicago"),
        ("USAK", "America/Anchorage"),
        ("USAZ", "America/Phoenix"),
        ("USAR", "America/Chicago"),
        ("USCA", "America/Los_Angeles"),
        ("USCO", "America/Denver"),
        ("USCT", "America/New_York"),
        ("USDC", "America/New_York"),
        ("USDE", "America/New_York"),
        ("USFL", "America/New_York"),
        ("USGA", "America/New_York"),
        ("USHI", "Pacific/Honolulu"),
        ("USID", "America/Denver"),
        ("USIL", "America/Chicago"),
        ("USIN", "America/Indianapolis"),
        ("USIA", "America/Chicago"),
        ("USKS", "America/Chicago"),
        ("USKY", "America/New_York"),
        ("USLA", "America/Chicago"),
        ("USME", "America/New_York"),
        ("USMD", "America/New_York"),
        ("USMA", "America/New_York"),
        ("USMI", "America/New_York"),
        ("USMN", "America/Chicago"),
        ("USMS", "America/Chicago"),
        ("USMO", "America/Chicago"),
        ("USMT", "America/Denver"),
        ("USNE", "America/Chicago"),
        ("USNV", "America/Los_Angeles"),
        ("USNH", "America/New_York"),
        ("USNJ", "America/New_York"),
        ("USNM", "America/Denver"),
        ("USNY", "America/New_York"),
        ("USNC", "America/New_York"),
        ("USND", "America/Chicago"),
        ("USOH", "America/New_York"),
        ("USOK", "America/Chicago"),
        ("USOR", "America/Los_Angeles"),
        ("USPA", "America/New_York"),
        ("USRI", "America/New_York"),
        ("USSC", "America/New_York"),
        ("USSD", "America/Chicago"),
        ("USTN", "America/Chicago"),
        ("USTX", "America/Chicago"),
        ("USUT", "America/Denver"),
        ("USVT", "America/New_York"),
        ("USVA", "America/New_York"),
        ("USWA", "America/Los_Angeles"),
        ("USWV", "America/New_York"),
        ("USWI", "America/Chicago"),
        ("USWY", "America/Denver"),
        // Canada, keyed by province
        ("CAAB", "America/Edmonton"),
        ("CABC", "America/Vancouver"),
        ("CAMB", "America/Winnipeg"),
        ("CANB", "America/Halifax"),
        ("CANL", "America/St_Johns"),
        ("CANS", "America/Halifax"),
        ("CANT", "America/Yellowknife"),
        ("CANU", "America/Rankin_Inlet"),
        ("CAON", "America/Toronto"),
        ("CAPE", "America/Halifax"),
        ("CAQC", "America/Montreal"),
        ("CASK", "America/Regina"),
        ("CAYT", "America/Whitehorse"),
        // Country-level zones
        ("AD", "Europe/Andorra"),
        ("AE", "Asia/Dubai"),
        ("AF", "Asia/Kabul"),
        ("AG", "America/Antigua"),
        ("AI", "America/Anguilla"),
        ("AL", "Europe/Tirane"),
        ("AM", "Asia/Yerevan"),
        ("AN", "America/Curacao"),
        ("AO", "Africa/Luanda"),
        ("AR", "America/Buenos_Aires"),
        ("AS", "Pacific/Pago_Pago"),
        ("AT", "Europe/Vienna"),
        ("AU", "Australia/Sydney"),
        ("AW", "America/Aruba"),
        ("AX", "Europe/Mariehamn"),
        ("AZ", "Asia/Baku"),
        ("BA", "Europe/Sarajevo"),
        ("BB", "America/Barbados"),
        ("BD", "Asia/Dhaka"),
        ("BE", "Europe/Brussels"),
        ("BF", "Africa/Ouagadougou"),
        ("BG", "Europe/Sofia"),
        ("BH", "Asia/Bahrain"),
        ("BI", "Africa/Bujumbura"),
        ("BJ", "Africa/Porto-Novo"),
        ("BL", "America/St_Barthelemy"),
        ("BM", "Atlantic/Bermuda"),
        ("BN", "Asia/Brunei"),
        ("BO", "America/La_Paz"),
        ("BQ", "America/Kralendijk"),
        ("BR", "America/Sao_Paulo"),
        ("BS", "America/Nassau"),
        ("BT", "Asia/Thimphu"),
        ("BW", "Africa/Gaborone"),
        ("BY", "Europe/Minsk"),
        ("BZ", "America/Belize"),
        ("CD", "Africa/Kinshasa"),
        ("CF", "Africa/Bangui"),
        ("CG", "Africa/Brazzaville"),
        ("CH", "Europe/Zurich"),
        ("CI", "Africa/Abidjan"),
        ("CK", "Pacific/Rarotonga"),
        ("CL", "America/Santiago"),
        ("CM", "Africa/Douala"),
        ("CN", "Asia/Shanghai"),
        ("CO", "America/Bogota"),
        ("CR", "America/Costa_Rica"),
        ("CU", "America/Havana"),
        ("CV", "Atlantic/Cape_Verde"),
        ("CX", "Indian/Christmas"),
        ("CY", "Asia/Nicosia"),
        ("CZ", "Europe/Prague"),
        ("DE", "Europe/Berlin"),
        ("DJ", "Africa/Djibouti"),
        ("DK", "Europe/Copenhagen"),
        ("DM", "America/Dominica"),
        ("DO", "America/Santo_Domingo"),
        ("DZ", "Africa/Algiers"),
        ("EC", "America/Guayaquil"),
        ("EE", "Europe/Tallinn"),
        ("EG", "Africa/Cairo"),
        ("ER", "Africa/Asmara"),
        ("ES", "Europe/Madrid"),
        ("ET", "Africa/Addis_Ababa"),
        ("FI", "Europe/Helsinki"),
        ("FJ", "Pacific/Fiji"),
        ("FK", "Atlantic/Stanley"),
        ("FO", "Atlantic/Faroe"),
        ("FR", "Europe/Paris"),
        ("GA", "Africa/Libreville"),
        ("GB", "Europe/London"),
        ("GD", "America/Grenada"),
        ("GE", "Asia/Tbilisi"),
        ("GF", "America/Cayenne"),
        ("GG", "Europe/Guernsey"),
        ("GH", "Africa/Accra"),
        ("GI", "Europe/Gibraltar"),
        ("GL", "America/Godthab"),
        ("GM", "Africa/Banjul"),
        ("GN", "Africa/Conakry"),
        ("GP", "America/Guadeloupe"),
        ("GQ", "Africa/Malabo"),
        ("GR", "Europe/Athens"),
        ("GT", "America/Guatemala"),
        ("GU", "Pacific/Guam"),
        ("GW", "Africa/Bissau"),
        ("GY", "America/Guyana"),
        ("HK", "Asia/Hong_Kong"),
        ("HN", "America/Tegucigalpa"),
        ("HR", "Europe/Zagreb"),
        ("HT", "America/Port-au-Prince"),
        ("HU", "Europe/Budapest"),
        ("ID", "Asia/Jakarta"),
        ("IE", "Europe/Dublin"),
        ("IL", "Asia/Jerusalem"),
        ("IM", "Europe/Isle_of_Man"),
        ("IN", "Asia/Calcutta"),
        ("IO", "Indian/Chagos"),
        ("IQ", "Asia/Baghdad"),
        ("IR", "Asia/Tehran"),
        ("IS", "Atlantic/Reykjavik"),
        ("IT", "Europe/Rome"),
        ("JE", "Europe/Jersey"),
        ("JM", "America/Jamaica"),
        ("JO", "Asia/Amman"),
        ("JP", "Asia/Tokyo"),
        ("KE", "Africa/Nairobi"),
        ("KG", "Asia/Bishkek"),
        ("KH", "Asia/Phnom_Penh"),
        ("KI", "Pacific/Tarawa"),
        ("KM", "Indian/Comoro"),
        ("KN", "America/St_Kitts"),
        ("KP", "Asia/Pyongyang"),
        ("KR", "Asia/Seoul"),
        ("KW", "Asia/Kuwait"),
        ("KY", "America/Cayman"),
        ("LA", "Asia/Vientiane"),
        ("LB", "Asia/Beirut"),
        ("LC", "America/St_Lucia"),
        ("LI", "Europe/Vaduz"),
        ("LK", "Asia/Colombo"),
        ("LR", "Africa/Monrovia"),
        ("LS", "Africa/Maseru"),
        ("LT", "Europe/Vilnius"),
        ("LU", "Europe/Luxembourg"),
        ("LV", "Europe/Riga"),
        ("LY", "Africa/Tripoli"),
        ("MA", "Africa/Casablanca"),
        ("MC", "Europe/Monaco"),
        ("MD", "Europe/Chisinau"),
        ("ME", "Europe/Podgorica"),
        ("MF", "America/Marigot"),
        ("MG", "Indian/Antananarivo"),
        ("MH", "Pacific/Majuro"),
        ("MK", "Europe/Skopje"),
        ("ML", "Africa/Bamako"),
        ("MM", "Asia/Rangoon"),
        ("MN", "Asia/Ulaanbaatar"),
        ("MO", "Asia/Macau"),
        ("MP", "Pacific/Saipan"),
        ("MQ", "America/Martinique"),
        ("MR", "Africa/Nouakchott"),
        ("MS", "America/Montserrat"),
        ("MT", "Europe/Malta"),
        ("MU", "Indian/Mauritius"),
        ("MV", "Indian/Maldives"),
        ("MW", "Africa/Blantyre"),
        ("MX", "America/Mexico_City"),
        ("MY", "Asia/Kuala_Lumpur"),
        ("MZ", "Africa/Maputo"),
        ("NA", "Africa/Windhoek"),
        ("NC", "Pacific/Noumea"),
        ("NE", "Africa/Niamey"),
        ("NF", "Pacific/Norfolk"),
        ("NG", "Africa/Lagos"),
        ("NI", "America/Managua"),
        ("NL", "Europe/Amsterdam"),
        ("NO", "Europe/Oslo"),
        ("NP", "Asia/Katmandu"),
        ("NR", "Pacific/Nauru"),
        ("NU", "Pacific/Niue"),
        ("NZ", "Pacific/Auckland"),
        ("OM", "Asia/Muscat"),
        ("PA", "America/Panama"),
        ("PE", "America/Lima"),
        ("PF", "Pacific/Tahiti"),
        ("PG", "Pacific/Port_Moresby"),
        ("PH", "Asia/Manila"),
        ("PK", "Asia/Karachi"),
        ("PL", "Europe/Warsaw"),
        ("PM", "America/Miquelon"),
        ("PN", "Pacific/Pitcairn"),
        ("PR", "America/Puerto_Rico"),
        ("PS", "Asia/Gaza"),
        ("PT", "Europe/Lisbon"),
        ("PW", "Pacific/Palau"),
        ("PY", "America/Asuncion"),
        ("QA", "Asia/Qatar"),
        ("RE", "Indian/Reunion"),
        ("RO", "Europe/Bucharest"),
        ("RS", "Europe/Belgrade"),
        ("RU", "Europe/Moscow"),
        ("RW", "Africa/Kigali"),
        ("SA", "Asia/Riyadh"),
        ("SB", "Pacific/Guadalcanal"),
        ("SC", "Indian/Mahe"),
        ("SD", "Africa/Khartoum"),
        ("SE", "Europe/Stockholm"),
        ("SG", "Asia/Singapore"),
        ("SH", "Atlantic/St_Helena"),
        ("SI", "Europe/Ljubljana"),
        ("SJ", "Arctic/Longyearbyen"),
        ("SK", "Europe/Bratislava"),
        ("SL", "Africa/Freetown"),
        ("SM", "Europe/San_Marino"),
        ("SN", "Africa/Dakar"),
        ("SO", "Africa/Mogadishu"),
        ("SR", "America/Paramaribo"),
        ("SS", "Africa/Juba"),
        ("ST", "Africa/Sao_Tome"),
        ("SV", "America/El_Salvador"),
        ("SY", "Asia/Damascus"),
        ("SZ", "Africa/Mbabane"),
        ("TC", "America/Grand_Turk"),
        ("TD", "Africa/Ndjamena"),
        ("TG", "Africa/Lome"),
        ("TH", "Asia/Bangkok"),
        ("TJ", "Asia/Dushanbe"),
        ("TK", "Pacific/Fakaofo"),
        ("TL", "Asia/Dili"),
        ("TM", "Asia/Ashgabat"),
        ("TN", "Africa/Tunis"),
        ("TO", "Pacific/Tongatapu"),
        ("TR", "Europe/Istanbul"),
        ("TT", "America/Port_of_Spain"),
        ("TV", "Pacific/Funafuti"),
        ("TW", "Asia/Taipei"),
        ("TZ", "Africa/Dar_es_Salaam"),
        ("UA", "Europe/Kiev"),
        ("UG", "Africa/Kampala"),
        ("UY", "America/Montevideo"),
        ("UZ", "Asia/Tashkent"),
        ("VA", "Europe/Vatican"),
        ("VC", "America/St_Vincent"),
        ("VE", "America/Caracas"),
        ("VG", "America/Tortola"),
        ("VI", "America/St_Thomas"),
        ("VN", "Asia/Saigon"),
        ("VU", "Pacific/Efate"),
        ("WF", "Pacific/Wallis"),
        ("WS", "Pacific/Apia"),
        ("YE", "Asia/Aden"),
        ("YT", "Indian/Mayotte"),
        ("ZA", "Africa/Johannesburg"),
        ("ZM", "Africa/Lusaka"),
        ("ZW", "Africa/Harare"),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_entry_wins() {
        assert_eq!(
            time_zone_by_country("US", "CA"),
            Some("America/Los_Angeles")
        );
        assert_eq!(time_zone_by_country("CA", "ON"), Some("America/Toronto"));
    }

    #[test]
    fn test_country_fallback() {
        assert_eq!(time_zone_by_country("SK", ""), Some("Europe/Bratislava"));
        assert_eq!(time_zone_by_country("SA", "01"), Some("Asia/Riyadh"));
    }

    #[test]
    fn test_unknown_country() {
        assert_eq!(time_zone_by_country("--", ""), None);
        assert_eq!(time_zone_by_country("US", ""), None);
    }
}
