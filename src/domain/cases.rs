pub mod case_parser;
pub mod diagnostics;
pub mod entities;
pub mod layout;
pub mod percentage;
pub mod rewards_table;
