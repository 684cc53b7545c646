mod analytics;
mod auth;
mod builder;
mod dashboard;
mod landing;
mod pricing;
mod public_form;

pub use analytics::Analytics;
pub use auth::Auth;
pub use builder::{Create, Edit};
pub use dashboard::Dashboard;
pub use landing::Landing;
pub use pricing::Pricing;
pub use public_form::PublicForm;
