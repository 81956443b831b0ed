//! Contact form state and the delivery seam.
//!
//! Submission never transmits anything: the form validates its required
//! fields, hands the submission to a [`ContactDelivery`] implementation, and
//! resets itself. The shipped delivery only logs; a real mail API would plug
//! in behind the same trait.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    pub fn all() -> &'static [Field] {
        &[Field::Name, Field::Email, Field::Message]
    }

    pub fn next(&self) -> Field {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Message,
            Field::Message => Field::Name,
        }
    }

    pub fn previous(&self) -> Field {
        match self {
            Field::Name => Field::Message,
            Field::Email => Field::Name,
            Field::Message => Field::Email,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{} is required", .0.label())]
    Missing(Field),
}

/// A validated, complete submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// External collaborator boundary for submitted messages.
pub trait ContactDelivery {
    fn deliver(&self, submission: &ContactSubmission);
}

/// Delivery stub: records the submission in the log and drops it.
#[derive(Debug, Default)]
pub struct NullDelivery;

impl ContactDelivery for NullDelivery {
    fn deliver(&self, submission: &ContactSubmission) {
        tracing::info!(
            name = %submission.name,
            email = %submission.email,
            "contact form submitted, no delivery configured"
        );
    }
}

/// The three required inputs of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    /// The first required field that is empty (whitespace counts as empty),
    /// checked in display order.
    fn first_missing(&self) -> Option<Field> {
        Field::all()
            .iter()
            .copied()
            .find(|f| self.value(*f).trim().is_empty())
    }

    /// Submit the form. With every field populated this hands the trimmed
    /// submission to `delivery`, resets all fields, and returns the
    /// submission; otherwise nothing changes and the missing field is
    /// reported.
    pub fn submit(
        &mut self,
        delivery: &dyn ContactDelivery,
    ) -> Result<ContactSubmission, FormError> {
        if let Some(field) = self.first_missing() {
            return Err(FormError::Missing(field));
        }
        let submission = ContactSubmission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        };
        delivery.deliver(&submission);
        *self = Self::default();
        Ok(submission)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Test delivery that records everything it receives.
    #[derive(Default)]
    struct RecordingDelivery {
        received: RefCell<Vec<ContactSubmission>>,
    }

    impl ContactDelivery for RecordingDelivery {
        fn deliver(&self, submission: &ContactSubmission) {
            self.received.borrow_mut().push(submission.clone());
        }
    }

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn test_submit_clears_fields_and_delivers_once() {
        let mut form = filled_form();
        let delivery = RecordingDelivery::default();

        let submission = form.submit(&delivery).unwrap();

        assert!(form.is_empty());
        assert_eq!(delivery.received.borrow().len(), 1);
        assert_eq!(delivery.received.borrow()[0], submission);
        assert_eq!(submission.name, "Ada");
    }

    #[test]
    fn test_submit_trims_whitespace() {
        let mut form = filled_form();
        form.name = "  Ada  ".to_string();
        let submission = form.submit(&NullDelivery).unwrap();
        assert_eq!(submission.name, "Ada");
    }

    #[test]
    fn test_missing_name_blocks_submission() {
        let mut form = filled_form();
        form.name.clear();
        let delivery = RecordingDelivery::default();

        let err = form.submit(&delivery).unwrap_err();

        assert_eq!(err, FormError::Missing(Field::Name));
        assert!(delivery.received.borrow().is_empty());
        // Populated fields are untouched.
        assert_eq!(form.email, "ada@example.com");
    }

    #[test]
    fn test_whitespace_only_field_counts_as_missing() {
        let mut form = filled_form();
        form.message = "   ".to_string();
        assert_eq!(
            form.submit(&NullDelivery).unwrap_err(),
            FormError::Missing(Field::Message)
        );
    }

    #[test]
    fn test_missing_fields_reported_in_display_order() {
        let mut form = ContactForm::new();
        form.message = "only a message".to_string();
        assert_eq!(
            form.submit(&NullDelivery).unwrap_err(),
            FormError::Missing(Field::Name)
        );
    }

    #[test]
    fn test_field_cycle_covers_all_fields() {
        let mut field = Field::Name;
        for _ in 0..Field::all().len() {
            field = field.next();
        }
        assert_eq!(field, Field::Name);
        assert_eq!(Field::Name.previous(), Field::Message);
    }

    #[test]
    fn test_error_message_names_the_field() {
        assert_eq!(
            FormError::Missing(Field::Email).to_string(),
            "Email is required"
        );
    }
}
