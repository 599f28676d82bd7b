pub mod datajud;
pub mod error;
pub mod fallback;
pub mod jusbrasil;
pub mod number;

pub use datajud::{DatajudClient, first_hit};
pub use error::{CaseNotFound, FallbackError, LookupError};
pub use fallback::{TribunalLookup, search_with_fallback};
pub use jusbrasil::JusbrasilClient;
