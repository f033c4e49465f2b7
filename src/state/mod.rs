mod manager;
mod persistence;

pub use manager::{VisitLog, FUZZY_THRESHOLD};
pub use persistence::{load_visits, save_visits};
