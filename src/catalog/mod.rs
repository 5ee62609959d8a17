//! Homogeneous collections over heterogeneous documents and software entries.

pub mod documents;
pub mod registry;
pub mod software;

pub use documents::DocumentCollection;
pub use registry::FreeSoftwareRegistry;
pub use software::{SoftwareCatalog, UsabilityStatus};
