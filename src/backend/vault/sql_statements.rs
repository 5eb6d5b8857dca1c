// No `ORDER BY` anywhere: rows come back in SQLite's default (rowid) order.

pub const SELECT_USER_PASSWORD_HASH: &str = "
    SELECT password_hash
    FROM user
    WHERE
        username = ?1
";

pub const INSERT_USER: &str = "
    INSERT INTO user (
        username,
        password_hash
    )
    VALUES (?1, ?2)
";

pub const SELECT_ALL_CUSTOMERS: &str = "
    SELECT
        customer_id,
        contact_no,
        purchase_hist,
        ticket_hist,
        payment_type
    FROM customer
";

pub const SELECT_CUSTOMERS_BY_PAYMENT_TYPE: &str = "
    SELECT
        customer_id,
        contact_no,
        purchase_hist,
        ticket_hist,
        payment_type
    FROM customer
    WHERE
        payment_type = ?1
";

pub const INSERT_CUSTOMER: &str = "
    INSERT INTO customer (
        contact_no,
        purchase_hist,
        ticket_hist,
        payment_type
    )
    VALUES (?1, ?2, ?3, ?4)
";

pub const SELECT_ALL_PRODUCTS: &str = "
    SELECT
        product_id,
        product_type,
        product_date,
        product_rating
    FROM product
";

pub const INSERT_PRODUCT: &str = "
    INSERT INTO product (
        product_type,
        product_date,
        product_rating
    )
    VALUES (?1, ?2, ?3)
";

pub const SELECT_ALL_SUPPORT: &str = "
    SELECT
        support_id,
        ticket_manager,
        ticket_date,
        ticket_status
    FROM support
";

pub const INSERT_SUPPORT: &str = "
    INSERT INTO support (
        ticket_manager,
        ticket_date,
        ticket_status
    )
    VALUES (?1, ?2, ?3)
";

pub const SELECT_ALL_TICKETS: &str = "
    SELECT
        ticket_id,
        ticket_reason,
        ticket_date,
        ticket_status
    FROM ticket
";

pub const INSERT_TICKET: &str = "
    INSERT INTO ticket (
        ticket_reason,
        ticket_date,
        ticket_status
    )
    VALUES (?1, ?2, ?3)
";

pub const SELECT_TABLE_NAMES: &str = "
    SELECT name
    FROM sqlite_master
    WHERE
        type = 'table'
        AND name NOT LIKE 'sqlite_%'
";
