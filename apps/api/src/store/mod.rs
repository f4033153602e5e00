pub mod attachments;
pub mod candidates;
