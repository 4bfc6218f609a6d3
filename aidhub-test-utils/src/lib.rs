pub mod builder;
pub mod constant;
pub mod fixtures;

pub use builder::TestBuilder;

pub mod prelude {
    pub use crate::{fixtures::factory, TestBuilder};
}
