pub mod generate_handlers;
pub mod invite_handlers;
