pub mod contact;
pub mod testimonial;
