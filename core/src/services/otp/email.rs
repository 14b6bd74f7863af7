//! Passcode email rendering

use chrono::Duration;

use crate::domain::value_objects::OtpCode;

const SUBJECT: &str = "Your LawVriksh login code";

/// A rendered passcode email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpEmail {
    pub subject: String,
    pub body: String,
}

impl OtpEmail {
    /// Render the message for `code`, valid for `validity`
    pub fn render(code: &OtpCode, validity: Duration) -> Self {
        let body = format!(
            "Your LawVriksh login code is {}.\n\n\
             It expires in {}. If you did not try to sign in, you can ignore this email.",
            code.expose(),
            describe_window(validity)
        );

        Self {
            subject: SUBJECT.to_string(),
            body,
        }
    }
}

fn describe_window(validity: Duration) -> String {
    let minutes = validity.num_minutes();
    if minutes >= 1 && validity == Duration::minutes(minutes) {
        return plural(minutes, "minute");
    }
    plural(validity.num_seconds().max(1), "second")
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", n, unit)
    }
}
