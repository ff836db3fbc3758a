pub mod swp;
