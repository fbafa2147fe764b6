pub mod contact;
pub mod statics;
pub mod testimonials;
