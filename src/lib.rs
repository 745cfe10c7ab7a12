pub mod answer_utils;
pub mod app;
pub mod data;
pub mod model;
pub mod session;
pub mod source;
pub mod ui;
pub mod view_models;

pub use app::TriviaApp;
pub use session::TriviaSession;
