pub mod lending;
pub mod planning;
pub mod returns;
pub mod savings;
pub mod tax;
pub mod withdrawal;
