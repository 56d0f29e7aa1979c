pub mod ip;
pub mod user_agent;
