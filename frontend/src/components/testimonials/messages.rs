use common::carousel::FetchTicket;
use common::model::testimonial::{DraftField, Testimonial};
use common::repository::RepositoryError;
use common::submission::{SubmitOutcome, SuccessTicket};

pub enum Msg {
    FetchCompleted(FetchTicket, Result<Vec<Testimonial>, RepositoryError>),
    Previous,
    Next,
    Select(usize),
    Key(String),
    ToggleForm,
    Edit(DraftField, String),
    Submit,
    SubmitFinished(SubmitOutcome),
    ClearSuccess(SuccessTicket),
}
