mod query;

pub use query::{PostWithAuthor, ProjectSummary, Query, UserProfile};

pub use sea_orm;
