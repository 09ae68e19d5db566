// Default A1 ranges of the case spreadsheet, overridable through `[export]` in the config file

pub mod cases {
    pub const RO_CASES: &str = "Кейсы!A:N";
}

pub mod rewards {
    pub const RO_REWARDS: &str = "Таблица Наград!A:I";
}
