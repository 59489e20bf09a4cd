pub use serde_with;

pub mod history;
pub mod journey;
pub mod place;
pub mod poi;
pub mod route;
pub mod story;

pub trait ExampleData {
    fn example_data() -> Self;
}
