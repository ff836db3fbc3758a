pub mod fd;
pub mod lumpsum;
pub mod nps;
pub mod ppf;
pub mod rd;
pub mod sip;
pub mod step_up_sip;
