//! Custom widget components

pub mod detail_form;
mod footer;
mod header;

pub use detail_form::DetailForm;
pub use footer::Footer;
pub use header::MainHeader;
