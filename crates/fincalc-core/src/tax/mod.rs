pub mod gst;
pub mod income_tax;
