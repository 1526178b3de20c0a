mod manager;
mod persistence;

pub use manager::CostingSession;
pub use persistence::{import_catalog_csv, load_session, save_session, SessionFile};
