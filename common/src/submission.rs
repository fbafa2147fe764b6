//! Testimonial submission: form state plus the duplicate-checked submit flow.
//!
//! The flow is split in three so a UI can drive it without holding state across
//! an await point:
//!
//! 1. `SubmissionForm::begin_submit` validates locally and, when the draft is
//!    complete, flips `is_submitting` and hands back a trimmed candidate.
//! 2. `submit_testimonial` runs the repository calls: existence check, insert,
//!    then a fresh `list_all`.
//! 3. `SubmissionForm::finish_submit` folds the outcome back into the form and
//!    returns the refreshed list for the carousel when the insert went through.
//!
//! The existence check and the insert are two separate store calls with nothing
//! tying them together, so two visitors racing the same `(name, role)` can both
//! get through. Uniqueness here is best effort; a hard guarantee needs a unique
//! constraint in the store itself.

use crate::model::testimonial::{DraftField, NewTestimonial, Testimonial, TestimonialDraft};
use crate::repository::{RepositoryError, TestimonialRepository};

pub const MSG_REQUIRED_FIELDS: &str = "Please fill in all fields.";
pub const MSG_VERIFY_FAILED: &str = "Unable to verify existing testimonials. Please try again later.";
pub const MSG_DUPLICATE: &str = "A testimonial has already been submitted with this name and role. Multiple submissions are not allowed.";
pub const MSG_UNEXPECTED: &str = "An unexpected error occurred.";
pub const MSG_THANK_YOU: &str = "Thank you for submitting your testimonial!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The existence check itself failed; nothing was inserted.
    VerifyFailed(RepositoryError),
    /// A record with the same trimmed name and role is already stored.
    Duplicate,
    InsertFailed(RepositoryError),
    Accepted {
        created: Testimonial,
        refreshed: Result<Vec<Testimonial>, RepositoryError>,
    },
}

/// Runs the store side of a submission for an already validated candidate.
pub async fn submit_testimonial<R>(repository: &R, candidate: &NewTestimonial) -> SubmitOutcome
where
    R: TestimonialRepository,
{
    match repository
        .exists_by_name_and_role(&candidate.name, &candidate.role)
        .await
    {
        Err(error) => return SubmitOutcome::VerifyFailed(error),
        Ok(true) => return SubmitOutcome::Duplicate,
        Ok(false) => {}
    }

    let created = match repository.insert(candidate).await {
        Ok(created) => created,
        Err(error) => return SubmitOutcome::InsertFailed(error),
    };

    let refreshed = repository.list_all().await;
    SubmitOutcome::Accepted { created, refreshed }
}

/// Identifies one "thank you" banner so an older timer cannot hide a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuccessTicket(u64);

/// What the caller has to act on after an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedSubmission {
    pub created: Testimonial,
    pub refreshed: Result<Vec<Testimonial>, RepositoryError>,
    pub success_ticket: SuccessTicket,
}

#[derive(Debug, Clone, Default)]
pub struct SubmissionForm {
    draft: TestimonialDraft,
    visible: bool,
    is_submitting: bool,
    error: Option<String>,
    success: bool,
    success_generation: u64,
}

impl SubmissionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &TestimonialDraft {
        &self.draft
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn toggle_visibility(&mut self) {
        self.visible = !self.visible;
    }

    /// Any edit clears the previous feedback.
    pub fn edit(&mut self, field: DraftField, value: String) {
        self.draft.set(field, value);
        self.error = None;
        self.success = false;
    }

    /// Local validation. Returns the trimmed candidate to submit, or `None` when
    /// the store must not be contacted (blank field, or a submit already running).
    pub fn begin_submit(&mut self) -> Option<NewTestimonial> {
        if self.is_submitting {
            return None;
        }
        match self.draft.to_candidate() {
            Some(candidate) => {
                self.error = None;
                self.is_submitting = true;
                Some(candidate)
            }
            None => {
                self.error = Some(MSG_REQUIRED_FIELDS.to_string());
                None
            }
        }
    }

    /// Applies the outcome. On failure the draft is kept so nothing has to be retyped.
    pub fn finish_submit(&mut self, outcome: SubmitOutcome) -> Option<AcceptedSubmission> {
        self.is_submitting = false;
        match outcome {
            SubmitOutcome::VerifyFailed(_) => {
                self.error = Some(MSG_VERIFY_FAILED.to_string());
                None
            }
            SubmitOutcome::Duplicate => {
                self.error = Some(MSG_DUPLICATE.to_string());
                None
            }
            SubmitOutcome::InsertFailed(error) => {
                self.error = Some(insert_failure_message(&error));
                None
            }
            SubmitOutcome::Accepted { created, refreshed } => {
                self.draft = TestimonialDraft::default();
                self.visible = false;
                self.error = None;
                self.success = true;
                self.success_generation = self.success_generation.wrapping_add(1);
                Some(AcceptedSubmission {
                    created,
                    refreshed,
                    success_ticket: SuccessTicket(self.success_generation),
                })
            }
        }
    }

    /// Called when the banner timer fires. Returns whether anything changed.
    pub fn clear_success(&mut self, ticket: SuccessTicket) -> bool {
        if self.success && ticket.0 == self.success_generation {
            self.success = false;
            true
        } else {
            false
        }
    }
}

fn insert_failure_message(error: &RepositoryError) -> String {
    let message = error.to_string();
    if message.trim().is_empty() {
        MSG_UNEXPECTED.to_string()
    } else {
        format!("An error occurred: {}", message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::{CarouselDisplay, CarouselState};
    use crate::repository::MemoryRepository;

    fn fill(form: &mut SubmissionForm, name: &str, role: &str, review: &str) {
        form.edit(DraftField::Name, name.to_string());
        form.edit(DraftField::Role, role.to_string());
        form.edit(DraftField::Review, review.to_string());
    }

    /// Drives one submission the way the page does, feeding the refresh into the carousel.
    async fn submit(
        form: &mut SubmissionForm,
        carousel: &mut CarouselState,
        repository: &MemoryRepository,
    ) -> Option<AcceptedSubmission> {
        let candidate = form.begin_submit()?;
        assert!(form.is_submitting());
        let outcome = submit_testimonial(repository, &candidate).await;
        let accepted = form.finish_submit(outcome)?;
        carousel.on_refresh(accepted.refreshed.clone());
        Some(accepted)
    }

    async fn mounted(repository: &MemoryRepository) -> CarouselState {
        let mut carousel = CarouselState::new();
        carousel.activate();
        let ticket = carousel.on_fetch_start();
        carousel.on_fetch_result(ticket, repository.list_all().await);
        carousel
    }

    #[tokio::test]
    async fn blank_fields_never_reach_the_store() {
        let repository = MemoryRepository::new();
        let mut carousel = mounted(&repository).await;

        for (name, role, review) in [
            ("", "Client", "Great"),
            ("Ali", "   ", "Great"),
            ("Ali", "Client", "\n\t"),
        ] {
            let mut form = SubmissionForm::new();
            fill(&mut form, name, role, review);
            assert!(submit(&mut form, &mut carousel, &repository).await.is_none());
            assert_eq!(form.error(), Some(MSG_REQUIRED_FIELDS));
            assert!(!form.is_submitting());
        }

        assert_eq!(repository.exists_calls(), 0);
        assert_eq!(repository.insert_calls(), 0);
    }

    #[tokio::test]
    async fn first_submission_into_empty_store_is_displayed() {
        let repository = MemoryRepository::new();
        let mut carousel = mounted(&repository).await;
        assert_eq!(carousel.display(), CarouselDisplay::Placeholder);

        let mut form = SubmissionForm::new();
        form.toggle_visibility();
        fill(&mut form, "Ali Raza", "Property Law Client", "Excellent service.");

        let accepted = submit(&mut form, &mut carousel, &repository).await.unwrap();
        assert_eq!(accepted.created.review, "Excellent service.");

        assert_eq!(carousel.items().len(), 1);
        assert_eq!(carousel.current(), 0);
        match carousel.display() {
            CarouselDisplay::Showing(t) => assert_eq!(t.review, "Excellent service."),
            CarouselDisplay::Placeholder => panic!("expected the new testimonial to show"),
        }

        assert!(form.success());
        assert!(!form.is_visible());
        assert!(!form.is_submitting());
        assert_eq!(form.draft(), &TestimonialDraft::default());
    }

    #[tokio::test]
    async fn second_submission_of_same_pair_is_rejected() {
        let repository = MemoryRepository::new();
        let mut carousel = mounted(&repository).await;

        let mut form = SubmissionForm::new();
        fill(&mut form, "Ali Raza", "Property Law Client", "Excellent service.");
        assert!(submit(&mut form, &mut carousel, &repository).await.is_some());

        fill(&mut form, " Ali Raza ", "Property Law Client ", "Still excellent.");
        assert!(submit(&mut form, &mut carousel, &repository).await.is_none());

        let error = form.error().unwrap();
        assert!(error.contains("already been submitted"));
        assert_eq!(repository.insert_calls(), 1);
        assert_eq!(repository.count_matching("Ali Raza", "Property Law Client"), 1);
        assert_eq!(form.draft().review, "Still excellent.");
    }

    #[tokio::test]
    async fn same_name_with_other_role_is_accepted() {
        let repository = MemoryRepository::new();
        let mut carousel = mounted(&repository).await;
        let mut form = SubmissionForm::new();

        fill(&mut form, "Ali Raza", "Property Law Client", "Excellent service.");
        submit(&mut form, &mut carousel, &repository).await.unwrap();
        fill(&mut form, "Ali Raza", "Family Law Client", "Handled with care.");
        submit(&mut form, &mut carousel, &repository).await.unwrap();

        assert_eq!(carousel.items().len(), 2);
    }

    #[tokio::test]
    async fn verify_failure_aborts_without_insert() {
        let repository = MemoryRepository::new();
        repository.fail_exists_with(Some(RepositoryError::Timeout(10_000)));
        let mut carousel = mounted(&repository).await;
        let mut form = SubmissionForm::new();

        fill(&mut form, "Ali Raza", "Client", "Good");
        assert!(submit(&mut form, &mut carousel, &repository).await.is_none());

        assert_eq!(form.error(), Some(MSG_VERIFY_FAILED));
        assert_ne!(form.error(), Some(MSG_DUPLICATE));
        assert_eq!(repository.insert_calls(), 0);
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn insert_failure_keeps_the_draft() {
        let repository = MemoryRepository::new();
        repository.fail_insert_with(Some(RepositoryError::Store {
            status: 403,
            message: "permission denied for table client_testimonials".into(),
        }));
        let mut carousel = mounted(&repository).await;
        let mut form = SubmissionForm::new();
        form.toggle_visibility();

        fill(&mut form, "Ali Raza", "Client", "Good");
        assert!(submit(&mut form, &mut carousel, &repository).await.is_none());

        assert_eq!(
            form.error(),
            Some("An error occurred: permission denied for table client_testimonials")
        );
        assert_eq!(form.draft().name, "Ali Raza");
        assert!(form.is_visible());
        assert!(!form.success());
    }

    #[test]
    fn empty_insert_error_uses_generic_message() {
        let mut form = SubmissionForm::new();
        fill(&mut form, "A", "B", "C");
        form.begin_submit();
        form.finish_submit(SubmitOutcome::InsertFailed(RepositoryError::Store {
            status: 500,
            message: String::new(),
        }));
        assert_eq!(form.error(), Some(MSG_UNEXPECTED));
    }

    #[test]
    fn second_begin_while_submitting_is_ignored() {
        let mut form = SubmissionForm::new();
        fill(&mut form, "A", "B", "C");
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());
        assert_eq!(form.error(), None);
    }

    #[test]
    fn editing_clears_feedback() {
        let mut form = SubmissionForm::new();
        form.begin_submit();
        assert!(form.error().is_some());
        form.edit(DraftField::Name, "A".into());
        assert_eq!(form.error(), None);
    }

    #[tokio::test]
    async fn stale_success_timer_does_not_hide_new_banner() {
        let repository = MemoryRepository::new();
        let mut carousel = mounted(&repository).await;
        let mut form = SubmissionForm::new();

        fill(&mut form, "A", "Client", "One");
        let first = submit(&mut form, &mut carousel, &repository).await.unwrap();
        fill(&mut form, "B", "Client", "Two");
        let second = submit(&mut form, &mut carousel, &repository).await.unwrap();

        assert!(!form.clear_success(first.success_ticket));
        assert!(form.success());
        assert!(form.clear_success(second.success_ticket));
        assert!(!form.success());
    }

    #[tokio::test]
    async fn failed_refresh_after_insert_shows_placeholder() {
        let repository = MemoryRepository::new();
        let mut carousel = mounted(&repository).await;
        repository.fail_list_with(Some(RepositoryError::Transport("offline".into())));
        let mut form = SubmissionForm::new();

        fill(&mut form, "A", "Client", "One");
        assert!(submit(&mut form, &mut carousel, &repository).await.is_some());

        assert!(form.success());
        assert_eq!(carousel.display(), CarouselDisplay::Placeholder);
        assert!(carousel.load_error().is_some());
        assert_eq!(repository.records().len(), 1);
    }
}
