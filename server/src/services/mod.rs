pub mod print_dispatch;
pub mod remote;
