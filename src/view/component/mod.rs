pub mod flash;
pub mod header;
pub mod layout;
pub mod project_card;

pub use flash::FlashList;
pub use header::Header;
pub use layout::Layout;
pub use project_card::ProjectCard;
