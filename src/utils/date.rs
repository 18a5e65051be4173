use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub fn parse_optional_date(input: Option<&String>) -> Result<Option<NaiveDate>, String> {
    match input {
        Some(s) => parse_date(s).map(Some).ok_or_else(|| s.clone()),
        None => Ok(None),
    }
}
