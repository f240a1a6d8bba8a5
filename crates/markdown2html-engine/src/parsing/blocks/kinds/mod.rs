pub mod heading;
pub mod list;
pub mod paragraph;

pub use heading::Heading;
pub use list::{ListItem, OrderedList, UnorderedList};
pub use paragraph::Paragraph;
