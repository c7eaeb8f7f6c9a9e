use log::Level;

pub const BRAND: &str = "Tuabi";

macro_rules! contact_email {
    () => {
        "officialtuabi@gmail.com"
    };
}

pub const CONTACT_EMAIL: &str = contact_email!();
pub const CONTACT_MAILTO: &str = concat!("mailto:", contact_email!());
pub const CONTACT_PHONE_DISPLAY: &str = "+233 (24) 528-9983";
pub const WHATSAPP_URL: &str = "https://wa.me/233245289983";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/bliss-armah-nwanwah/";
pub const X_URL: &str = "https://x.com/BlissAbrantie";

/// How the contact form acknowledges a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AckPolicy {
    /// Report success as soon as local validation passes; the collaborator's
    /// answer is only logged.
    Optimistic,
    /// Wait for the collaborator and report success or failure.
    Confirmed,
}

impl AckPolicy {
    pub fn from_setting(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("confirmed") => AckPolicy::Confirmed,
            _ => AckPolicy::Optimistic,
        }
    }
}

pub fn ack_policy() -> AckPolicy {
    AckPolicy::from_setting(option_env!("TUABI_CONTACT_ACK"))
}

#[cfg(debug_assertions)]
fn default_form_endpoint() -> &'static str {
    "http://localhost:3001/api/contact"  // Local mock when running with trunk serve
}

#[cfg(not(debug_assertions))]
fn default_form_endpoint() -> &'static str {
    "https://formspree.io/f/xqabvwkp"
}

pub fn get_form_endpoint() -> &'static str {
    option_env!("TUABI_FORM_ENDPOINT").unwrap_or_else(default_form_endpoint)
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ack_policy_defaults_to_optimistic() {
        assert_eq!(AckPolicy::from_setting(None), AckPolicy::Optimistic);
        assert_eq!(AckPolicy::from_setting(Some("")), AckPolicy::Optimistic);
        assert_eq!(AckPolicy::from_setting(Some("always")), AckPolicy::Optimistic);
    }

    #[test]
    fn ack_policy_accepts_confirmed_in_any_case() {
        assert_eq!(AckPolicy::from_setting(Some("confirmed")), AckPolicy::Confirmed);
        assert_eq!(AckPolicy::from_setting(Some(" Confirmed ")), AckPolicy::Confirmed);
    }

    #[test]
    fn mailto_wraps_contact_email() {
        assert_eq!(CONTACT_MAILTO.strip_prefix("mailto:"), Some(CONTACT_EMAIL));
    }

    #[test]
    fn form_endpoint_is_never_empty() {
        assert!(!get_form_endpoint().is_empty());
    }
}
