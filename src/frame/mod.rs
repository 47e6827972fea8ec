mod header;
pub use header::*;

mod label_set;
pub use label_set::*;

mod data_frame;
pub use data_frame::*;
