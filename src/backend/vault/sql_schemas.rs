pub const CREATE_USER: &str = "
CREATE TABLE IF NOT EXISTS user (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT UNIQUE NOT NULL,
    password_hash TEXT NOT NULL
)
";

pub const CREATE_CUSTOMER: &str = "
CREATE TABLE IF NOT EXISTS customer (
    customer_id INTEGER PRIMARY KEY AUTOINCREMENT,
    contact_no TEXT NOT NULL,
    purchase_hist TEXT,
    ticket_hist TEXT,
    payment_type TEXT NOT NULL
)
";

pub const CREATE_PRODUCT: &str = "
CREATE TABLE IF NOT EXISTS product (
    product_id INTEGER PRIMARY KEY AUTOINCREMENT,
    product_type TEXT NOT NULL,
    product_date TEXT,
    product_rating TEXT
)
";

pub const CREATE_SUPPORT: &str = "
CREATE TABLE IF NOT EXISTS support (
    support_id INTEGER PRIMARY KEY AUTOINCREMENT,
    ticket_manager TEXT NOT NULL,
    ticket_date TEXT,
    ticket_status TEXT
)
";

pub const CREATE_TICKET: &str = "
CREATE TABLE IF NOT EXISTS ticket (
    ticket_id INTEGER PRIMARY KEY AUTOINCREMENT,
    ticket_reason TEXT NOT NULL,
    ticket_date TEXT,
    ticket_status TEXT
)
";
