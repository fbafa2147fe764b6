//! Component state for the testimonials section.
//!
//! The section owns two independent state machines from `common`: the carousel
//! (cached list, current index, loading flag) and the submission form. Both are
//! pure; this struct only pairs them with the injected repository.

use std::rc::Rc;

use common::carousel::CarouselState;
use common::submission::SubmissionForm;

use crate::repository::HttpTestimonialRepository;

pub struct TestimonialsSection {
    pub repository: Rc<HttpTestimonialRepository>,
    pub carousel: CarouselState,
    pub form: SubmissionForm,
}

impl TestimonialsSection {
    pub fn new(repository: Rc<HttpTestimonialRepository>) -> Self {
        let mut carousel = CarouselState::new();
        carousel.activate();
        Self {
            repository,
            carousel,
            form: SubmissionForm::new(),
        }
    }
}
