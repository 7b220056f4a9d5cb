pub mod deletion_filter;
pub mod primary_flag;
