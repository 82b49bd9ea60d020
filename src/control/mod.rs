pub mod catalog;
pub mod clock;
pub mod environment;
pub mod falling_body;
