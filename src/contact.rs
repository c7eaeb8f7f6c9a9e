use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::config::{self, AckPolicy};

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in your {0}.")]
    MissingField(&'static str),
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("could not encode submission: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("form service rejected the message ({status}): {reason}")]
    Rejected { status: u16, reason: String },
}

/// What the visitor typed. Sent as-is and dropped afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(ContactError::MissingField("email"));
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingField("message"));
        }
        Ok(())
    }
}

/// Roughly what `<input type="email">` accepts: something@host.tld, no spaces.
pub fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

// Formspree answers with `errors`, other form backends with `error`.
#[derive(Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    errors: Vec<ErrorDetail>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

impl ErrorResponse {
    fn reason(self) -> Option<String> {
        self.errors
            .into_iter()
            .map(|detail| detail.message)
            .find(|message| !message.is_empty())
            .or(self.error.filter(|message| !message.is_empty()))
    }
}

pub fn rejection(status: u16, body: &str) -> ContactError {
    let reason = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(ErrorResponse::reason)
        .unwrap_or_else(|| format!("HTTP {}", status));
    ContactError::Rejected { status, reason }
}

/// POST the submission to the form collaborator.
pub async fn forward(submission: &ContactSubmission) -> Result<(), ContactError> {
    let response = Request::post(config::get_form_endpoint())
        .header("Accept", "application/json")
        .json(submission)
        .map_err(|e| ContactError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ContactError::Network(e.to_string()))?;

    if response.ok() {
        return Ok(());
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(rejection(status, &body))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Acknowledgement {
    Sent,
    Failed(String),
    Invalid(String),
}

impl Acknowledgement {
    pub fn message(&self) -> String {
        match self {
            Acknowledgement::Sent => {
                "Thank you for your message! We'll get back to you soon.".to_string()
            }
            Acknowledgement::Failed(reason) => format!(
                "Sorry, your message could not be sent ({}). Please try again or reach us on WhatsApp.",
                reason
            ),
            Acknowledgement::Invalid(reason) => reason.clone(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Acknowledgement::Sent)
    }
}

/// Form submission lifecycle. `seq` numbers each shown acknowledgement so a
/// repeated identical one still re-renders once. A dismiss timer only clears
/// the acknowledgement it was armed for, see `dismissable_by`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Pending,
    Done { ack: Acknowledgement, seq: u32 },
}

impl Default for SubmitStatus {
    fn default() -> Self {
        SubmitStatus::Idle
    }
}

/// What the form should do with a submit click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitPlan {
    /// A submission is already in flight.
    Ignore,
    /// Show the acknowledgement, forward nothing.
    Reject(SubmitStatus),
    /// Move to `status` and forward the submission.
    Forward(SubmitStatus),
}

impl SubmitStatus {
    pub fn seq(&self) -> u32 {
        match self {
            SubmitStatus::Done { seq, .. } => *seq,
            _ => 0,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, SubmitStatus::Pending)
    }

    /// Whether a dismiss timer armed for acknowledgement `armed_seq` may
    /// reset this status to `Idle`. Never true for `Pending` or for a newer
    /// acknowledgement.
    pub fn dismissable_by(&self, armed_seq: u32) -> bool {
        matches!(self, SubmitStatus::Done { seq, .. } if *seq == armed_seq)
    }

    pub fn acknowledgement(&self) -> Option<&Acknowledgement> {
        match self {
            SubmitStatus::Done { ack, .. } => Some(ack),
            _ => None,
        }
    }

    fn acknowledge(&self, ack: Acknowledgement, last_seq: u32) -> SubmitStatus {
        SubmitStatus::Done {
            ack,
            seq: last_seq.max(self.seq()).wrapping_add(1),
        }
    }

    /// Decide how to handle a submit click. `last_seq` is the highest
    /// sequence shown so far.
    pub fn plan(
        &self,
        submission: &ContactSubmission,
        policy: AckPolicy,
        last_seq: u32,
    ) -> SubmitPlan {
        if self.is_pending() {
            return SubmitPlan::Ignore;
        }
        if let Err(e) = submission.validate() {
            return SubmitPlan::Reject(self.acknowledge(Acknowledgement::Invalid(e.to_string()), last_seq));
        }
        match policy {
            AckPolicy::Optimistic => {
                SubmitPlan::Forward(self.acknowledge(Acknowledgement::Sent, last_seq))
            }
            AckPolicy::Confirmed => SubmitPlan::Forward(SubmitStatus::Pending),
        }
    }

    /// Status once the collaborator answers. Under the optimistic policy the
    /// answer never changes what the visitor sees.
    pub fn settle(
        &self,
        result: &Result<(), ContactError>,
        policy: AckPolicy,
        last_seq: u32,
    ) -> Option<SubmitStatus> {
        match policy {
            AckPolicy::Optimistic => None,
            AckPolicy::Confirmed => {
                let ack = match result {
                    Ok(()) => Acknowledgement::Sent,
                    Err(e) => Acknowledgement::Failed(e.to_string()),
                };
                Some(self.acknowledge(ack, last_seq))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filled() -> ContactSubmission {
        ContactSubmission {
            name: "Ama Mensah".to_string(),
            email: "ama@example.com".to_string(),
            message: "How do reminders work?".to_string(),
        }
    }

    #[test]
    fn submission_serializes_three_fields_verbatim() {
        let body = serde_json::to_value(filled()).unwrap();
        assert_eq!(
            body,
            json!({
                "name": "Ama Mensah",
                "email": "ama@example.com",
                "message": "How do reminders work?",
            })
        );
    }

    #[test]
    fn validation_requires_every_field() {
        assert_eq!(filled().validate(), Ok(()));

        let mut s = filled();
        s.name = "  ".to_string();
        assert_eq!(s.validate(), Err(ContactError::MissingField("name")));

        let mut s = filled();
        s.email.clear();
        assert_eq!(s.validate(), Err(ContactError::MissingField("email")));

        let mut s = filled();
        s.message = "\n".to_string();
        assert_eq!(s.validate(), Err(ContactError::MissingField("message")));
    }

    #[test]
    fn email_shape() {
        for ok in ["a@b.co", "first.last@mail.example.com", "x+tag@d.gh"] {
            assert!(looks_like_email(ok), "{}", ok);
        }
        for bad in ["plain", "@b.co", "a@", "a@b", "a@b.", "a@.co", "a b@c.co", "a@b@c.co"] {
            assert!(!looks_like_email(bad), "{}", bad);
        }
    }

    #[test]
    fn rejection_prefers_formspree_message() {
        let body = r#"{"errors":[{"code":"TYPE_EMAIL","message":"should be an email"}]}"#;
        assert_eq!(
            rejection(422, body),
            ContactError::Rejected { status: 422, reason: "should be an email".to_string() }
        );
        assert_eq!(
            rejection(400, r#"{"error":"form not found"}"#),
            ContactError::Rejected { status: 400, reason: "form not found".to_string() }
        );
        assert_eq!(
            rejection(502, "<html>bad gateway</html>"),
            ContactError::Rejected { status: 502, reason: "HTTP 502".to_string() }
        );
    }

    #[test]
    fn optimistic_submit_acknowledges_once_per_click() {
        let status = SubmitStatus::Idle;
        let first = match status.plan(&filled(), AckPolicy::Optimistic, 0) {
            SubmitPlan::Forward(next) => next,
            other => panic!("unexpected plan {:?}", other),
        };
        assert_eq!(first.acknowledgement(), Some(&Acknowledgement::Sent));
        assert_eq!(first.seq(), 1);

        // Same click again: one acknowledgement, replacing the first.
        let second = match first.plan(&filled(), AckPolicy::Optimistic, first.seq()) {
            SubmitPlan::Forward(next) => next,
            other => panic!("unexpected plan {:?}", other),
        };
        assert_eq!(second.acknowledgement(), Some(&Acknowledgement::Sent));
        assert_eq!(second.seq(), 2);
    }

    #[test]
    fn optimistic_policy_ignores_collaborator_failure() {
        let shown = SubmitStatus::Done { ack: Acknowledgement::Sent, seq: 1 };
        let failed = Err(ContactError::Network("offline".to_string()));
        assert_eq!(shown.settle(&failed, AckPolicy::Optimistic, 1), None);
    }

    #[test]
    fn confirmed_policy_waits_and_reports_failure() {
        let plan = SubmitStatus::Idle.plan(&filled(), AckPolicy::Confirmed, 3);
        assert_eq!(plan, SubmitPlan::Forward(SubmitStatus::Pending));

        let pending = SubmitStatus::Pending;
        assert_eq!(pending.plan(&filled(), AckPolicy::Confirmed, 3), SubmitPlan::Ignore);

        let failed = Err(ContactError::Rejected { status: 500, reason: "HTTP 500".to_string() });
        let settled = pending.settle(&failed, AckPolicy::Confirmed, 3).unwrap();
        assert_eq!(settled.seq(), 4);
        let ack = settled.acknowledgement().unwrap();
        assert!(!ack.is_success());
        assert!(ack.message().contains("HTTP 500"));

        let settled = pending.settle(&Ok(()), AckPolicy::Confirmed, 4).unwrap();
        assert_eq!(settled.acknowledgement(), Some(&Acknowledgement::Sent));
    }

    #[test]
    fn dismiss_timer_only_clears_its_own_acknowledgement() {
        let shown = SubmitStatus::Done { ack: Acknowledgement::Sent, seq: 3 };
        assert!(shown.dismissable_by(3));
        assert!(!SubmitStatus::Idle.dismissable_by(3));
        assert!(!SubmitStatus::Pending.dismissable_by(3));

        let newer = SubmitStatus::Done { ack: Acknowledgement::Sent, seq: 4 };
        assert!(!newer.dismissable_by(3));
    }

    #[test]
    fn resubmit_during_acknowledgement_stays_pending_until_settled() {
        // Confirmed policy: a click while the previous banner is still up
        // goes pending, and the old banner's timer must not release it.
        let shown = SubmitStatus::Done { ack: Acknowledgement::Sent, seq: 1 };
        let pending = match shown.plan(&filled(), AckPolicy::Confirmed, 1) {
            SubmitPlan::Forward(next) => next,
            other => panic!("unexpected plan {:?}", other),
        };
        assert!(pending.is_pending());
        assert!(!pending.dismissable_by(shown.seq()));
        assert_eq!(pending.plan(&filled(), AckPolicy::Confirmed, 1), SubmitPlan::Ignore);
    }

    #[test]
    fn invalid_submission_is_not_forwarded() {
        let mut s = filled();
        s.email = "not-an-email".to_string();
        match SubmitStatus::Idle.plan(&s, AckPolicy::Optimistic, 0) {
            SubmitPlan::Reject(status) => assert_eq!(
                status.acknowledgement(),
                Some(&Acknowledgement::Invalid("Please enter a valid email address.".to_string()))
            ),
            other => panic!("unexpected plan {:?}", other),
        }
    }
}
