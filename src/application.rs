pub mod case_config_routine;
