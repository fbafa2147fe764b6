//! Contact inquiry and the messaging deep link built from it.
//!
//! Submitting the contact form never talks to a server: the inquiry is folded
//! into a multi-line message, percent-encoded the way `encodeURIComponent` does
//! it, and appended as `?text=` to `<messaging_base_url>/<destination_number>`.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::config::ContactConfig;

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )` gets encoded.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Practice areas offered in the contact form and listed on the services section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LawArea {
    Civil,
    Criminal,
    Family,
    Property,
    Business,
    Labor,
    Other,
}

impl LawArea {
    pub const ALL: [LawArea; 7] = [
        LawArea::Civil,
        LawArea::Criminal,
        LawArea::Family,
        LawArea::Property,
        LawArea::Business,
        LawArea::Labor,
        LawArea::Other,
    ];

    /// Stored form value.
    pub fn code(self) -> &'static str {
        match self {
            LawArea::Civil => "civil",
            LawArea::Criminal => "criminal",
            LawArea::Family => "family",
            LawArea::Property => "property",
            LawArea::Business => "business",
            LawArea::Labor => "labor",
            LawArea::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LawArea::Civil => "Civil Law",
            LawArea::Criminal => "Criminal Law",
            LawArea::Family => "Family Law",
            LawArea::Property => "Property Law",
            LawArea::Business => "Business Law",
            LawArea::Labor => "Labor Law",
            LawArea::Other => "Other",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            LawArea::Civil => "Suits, recovery, injunctions and appeals before civil courts.",
            LawArea::Criminal => "Bail, trial defence and appeals at every stage of proceedings.",
            LawArea::Family => "Divorce, khula, custody, guardianship and maintenance matters.",
            LawArea::Property => "Title verification, transfers, tenancy and possession disputes.",
            LawArea::Business => "Company formation, contracts, compliance and commercial disputes.",
            LawArea::Labor => "Employment disputes, service matters and labour court representation.",
            LawArea::Other => "Advice on any other legal question, in confidence.",
        }
    }

    pub fn from_code(code: &str) -> Option<LawArea> {
        LawArea::ALL.into_iter().find(|area| area.code() == code)
    }
}

/// Contact form contents. `case_type` holds the raw `<select>` value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub case_type: String,
}

/// Field of the contact form, used to route edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Subject,
    Message,
    CaseType,
}

impl ContactInquiry {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
            ContactField::CaseType => self.case_type = value,
        }
    }

    /// Display text for the selected area; unknown codes pass through verbatim.
    pub fn area_label(&self) -> Option<String> {
        if self.case_type.is_empty() {
            return None;
        }
        Some(
            LawArea::from_code(&self.case_type)
                .map(|area| area.label().to_string())
                .unwrap_or_else(|| self.case_type.clone()),
        )
    }

    /// The plain multi-line message, before encoding. Empty lines are never emitted.
    pub fn compose_message(&self) -> String {
        let mut lines = vec![
            "*New Legal Inquiry*".to_string(),
            format!("*Name:* {}", self.name),
            format!("*Email:* {}", self.email),
            format!("*Phone:* {}", self.phone),
        ];
        if let Some(label) = self.area_label() {
            lines.push(format!("*Area of Law:* {}", label));
        }
        lines.push(format!("*Subject:* {}", self.subject));
        lines.push("*Message:*".to_string());
        if !self.message.is_empty() {
            lines.push(self.message.clone());
        }
        lines.join("\n")
    }

    /// Full deep link that opens the messaging app with the message pre-filled.
    pub fn deep_link(&self, config: &ContactConfig) -> String {
        format!(
            "{}/{}?text={}",
            config.messaging_base_url.trim_end_matches('/'),
            config.destination_number.trim().trim_start_matches('+'),
            encode_uri_component(&self.compose_message())
        )
    }
}

/// Identifies one confirmation period so an older timer cannot end a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmationTicket(u64);

/// Contact form state: the inquiry being edited and the post-submit confirmation.
///
/// The confirmation only means the deep link was opened; nothing reports whether
/// the messaging app actually delivered the message.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    inquiry: ContactInquiry,
    submitted: bool,
    generation: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inquiry(&self) -> &ContactInquiry {
        &self.inquiry
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn edit(&mut self, field: ContactField, value: String) {
        self.inquiry.set(field, value);
    }

    /// Builds the deep link and starts the confirmation period. Returns `None`
    /// while a previous confirmation is still showing.
    pub fn submit(&mut self, config: &ContactConfig) -> Option<(String, ConfirmationTicket)> {
        if self.submitted {
            return None;
        }
        self.submitted = true;
        self.generation = self.generation.wrapping_add(1);
        Some((self.inquiry.deep_link(config), ConfirmationTicket(self.generation)))
    }

    pub fn clear_submitted(&mut self, ticket: ConfirmationTicket) -> bool {
        if self.submitted && ticket.0 == self.generation {
            self.submitted = false;
            true
        } else {
            false
        }
    }
}

pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inquiry(case_type: &str) -> ContactInquiry {
        ContactInquiry {
            name: "Sana Iqbal".into(),
            email: "sana@example.com".into(),
            phone: "+92 300 1234567".into(),
            subject: "Recovery suit".into(),
            message: "Need advice on a pending recovery suit.".into(),
            case_type: case_type.into(),
        }
    }

    #[test]
    fn civil_code_is_rendered_as_label() {
        let message = inquiry("civil").compose_message();
        assert!(message.lines().any(|l| l == "*Area of Law:* Civil Law"));
        assert!(!message.contains("civil"));
    }

    #[test]
    fn message_lines_follow_fixed_order() {
        let message = inquiry("family").compose_message();
        let lines: Vec<&str> = message.lines().collect();
        assert_eq!(
            lines,
            vec![
                "*New Legal Inquiry*",
                "*Name:* Sana Iqbal",
                "*Email:* sana@example.com",
                "*Phone:* +92 300 1234567",
                "*Area of Law:* Family Law",
                "*Subject:* Recovery suit",
                "*Message:*",
                "Need advice on a pending recovery suit.",
            ]
        );
    }

    #[test]
    fn area_line_is_omitted_without_selection() {
        let message = inquiry("").compose_message();
        assert!(!message.contains("Area of Law"));
    }

    #[test]
    fn unknown_area_code_passes_through() {
        assert_eq!(inquiry("tax").area_label().as_deref(), Some("tax"));
    }

    #[test]
    fn deep_link_targets_destination_with_encoded_text() {
        let link = inquiry("civil").deep_link(&ContactConfig::default());
        assert!(link.starts_with("https://wa.me/923052692482?text="));
        assert!(link.contains("*New%20Legal%20Inquiry*%0A*Name%3A*%20Sana%20Iqbal"));
        assert!(link.contains("*Area%20of%20Law%3A*%20Civil%20Law"));
        assert!(!link.contains(' '));
        assert!(!link.contains('\n'));
    }

    #[test]
    fn leading_plus_in_destination_is_stripped() {
        let config = ContactConfig {
            messaging_base_url: "https://wa.me/".into(),
            destination_number: "+923052692482".into(),
        };
        assert!(inquiry("").deep_link(&config).starts_with("https://wa.me/923052692482?text="));
    }

    #[test]
    fn encoding_matches_uri_component_rules() {
        assert_eq!(encode_uri_component("a-b_c.d!e~f*g'h(i)j"), "a-b_c.d!e~f*g'h(i)j");
        assert_eq!(encode_uri_component("a b&c=d/e?+"), "a%20b%26c%3Dd%2Fe%3F%2B");
        assert_eq!(encode_uri_component("é"), "%C3%A9");
    }

    #[test]
    fn form_submission_is_locked_until_confirmation_clears() {
        let mut form = ContactForm::new();
        form.edit(ContactField::Name, "Sana Iqbal".into());
        form.edit(ContactField::CaseType, "civil".into());

        let (link, ticket) = form.submit(&ContactConfig::default()).unwrap();
        assert!(link.contains("Civil%20Law"));
        assert!(form.is_submitted());
        assert!(form.submit(&ContactConfig::default()).is_none());

        assert!(form.clear_submitted(ticket));
        assert!(!form.is_submitted());
        assert!(!form.clear_submitted(ticket));
        assert_eq!(form.inquiry().name, "Sana Iqbal");
    }

    #[test]
    fn every_area_round_trips_through_its_code() {
        for area in LawArea::ALL {
            assert_eq!(LawArea::from_code(area.code()), Some(area));
        }
    }
}
