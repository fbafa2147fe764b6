//! Properties for `TestimonialsSection`.

use std::rc::Rc;

use yew::prelude::*;

use crate::repository::HttpTestimonialRepository;

/// The repository is injected by the page shell; the section never builds its own.
#[derive(Properties, Clone)]
pub struct TestimonialsProps {
    pub repository: Rc<HttpTestimonialRepository>,
}

impl PartialEq for TestimonialsProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.repository, &other.repository)
    }
}
