pub mod reconcile;
pub mod record;
pub mod render;
pub mod tribunal;

pub use reconcile::{ND, reconcile};
pub use record::{LawsuitEntry, Movement, ProcessRecord, lawsuit_entries};
pub use render::{render_lawsuit_list, render_process_summary};
pub use tribunal::{DEFAULT_PRIORITY, Tribunal, search_order};
