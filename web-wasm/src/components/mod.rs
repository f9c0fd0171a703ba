pub mod header;
pub mod hero;
pub mod search_box;
pub mod sort_controls;
pub mod rankings;
