pub mod combined;
pub mod idf;
pub mod tf;

pub use combined::CombinedScheme;
pub use idf::IdfScheme;
pub use tf::{TfScheme, DOUBLE_NORM_K};
