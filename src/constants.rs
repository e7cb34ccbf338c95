pub const DEFAULT_DATA_FILE: &str = "data/products.json";

pub mod pricing {

    pub const LOW_CEILING: f64 = 500.0;

    pub const MID_CEILING: f64 = 1000.0;

    pub const HIGH_CEILING: f64 = 5000.0;

    pub const CURRENCY_SYMBOL: &str = "₹";
}

pub mod session {

    pub const DEFAULT_SESSION_HOURS: u32 = 24;
}

pub mod enquiry {

    pub const WHATSAPP_BASE_URL: &str = "https://wa.me";
}
