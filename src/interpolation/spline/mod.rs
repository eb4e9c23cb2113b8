pub mod cubic;
pub(crate) mod helpers;
