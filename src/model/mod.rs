pub mod employee;
pub mod mode;
pub mod scan_event;
