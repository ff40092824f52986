use regex::Regex;

pub mod contact_dto;

lazy_static! {
    pub static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}
