pub mod idm;
pub mod mode;
pub mod polling;
pub mod status;
