mod record;
mod tree;

pub use record::{
    flatten,
    FlatRecord,
};
pub use tree::{
    JobNode,
    RunNode,
};
