/// Listing parsing, placement, and file input.
pub mod program_loading;
