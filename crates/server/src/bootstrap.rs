use anyhow::{Context, Result};
use shared::{abstract_trait::DynHashing, config::ConnectionPool};
use tracing::info;

/// Schema the storefront has always bootstrapped itself, `CREATE TABLE IF
/// NOT EXISTS` on every boot. Ordered so foreign keys resolve.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS sellers (
        id BIGINT AUTO_INCREMENT PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        email VARCHAR(100) UNIQUE NOT NULL,
        password VARCHAR(255) NOT NULL,
        restaurant_name VARCHAR(100) NOT NULL,
        phone VARCHAR(15) NOT NULL,
        address TEXT NOT NULL,
        status ENUM('pending', 'approved', 'rejected') NOT NULL DEFAULT 'pending',
        created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS food_items (
        id BIGINT AUTO_INCREMENT PRIMARY KEY,
        seller_id BIGINT NOT NULL,
        name VARCHAR(100) NOT NULL,
        description TEXT NOT NULL,
        price BIGINT NOT NULL,
        category ENUM('veg', 'non-veg', 'tiffins', 'sandwich', 'soup', 'others') NOT NULL,
        image_url VARCHAR(255) NOT NULL DEFAULT '',
        is_available BOOLEAN NOT NULL DEFAULT TRUE,
        preparation_time INT NOT NULL DEFAULT 30,
        rating FLOAT NOT NULL DEFAULT 0,
        created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
        FOREIGN KEY (seller_id) REFERENCES sellers(id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS carts (
        id CHAR(36) PRIMARY KEY,
        created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS cart_items (
        id BIGINT AUTO_INCREMENT PRIMARY KEY,
        cart_id CHAR(36) NOT NULL,
        food_item_id BIGINT NOT NULL,
        seller_id BIGINT NOT NULL,
        name VARCHAR(100) NOT NULL,
        price BIGINT NOT NULL,
        quantity INT NOT NULL,
        image_url VARCHAR(255) NOT NULL DEFAULT '',
        category ENUM('veg', 'non-veg', 'tiffins', 'sandwich', 'soup', 'others') NOT NULL,
        UNIQUE KEY uq_cart_line (cart_id, food_item_id),
        FOREIGN KEY (cart_id) REFERENCES carts(id) ON DELETE CASCADE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS orders (
        id BIGINT AUTO_INCREMENT PRIMARY KEY,
        customer_name VARCHAR(100) NOT NULL,
        customer_email VARCHAR(100) NOT NULL,
        customer_phone VARCHAR(15) NOT NULL,
        total_amount BIGINT NOT NULL,
        status ENUM('pending', 'preparing', 'ready', 'completed', 'cancelled')
            NOT NULL DEFAULT 'pending',
        seller_id BIGINT NULL,
        created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP,
        FOREIGN KEY (seller_id) REFERENCES sellers(id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS order_items (
        id BIGINT AUTO_INCREMENT PRIMARY KEY,
        order_id BIGINT NOT NULL,
        food_item_id BIGINT NOT NULL,
        name VARCHAR(100) NOT NULL,
        price BIGINT NOT NULL,
        quantity INT NOT NULL,
        FOREIGN KEY (order_id) REFERENCES orders(id) ON DELETE CASCADE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS notifications (
        id BIGINT AUTO_INCREMENT PRIMARY KEY,
        seller_id BIGINT NOT NULL,
        kind ENUM('new_order', 'status_update', 'system') NOT NULL,
        message TEXT NOT NULL,
        order_id BIGINT NULL,
        is_read BOOLEAN NOT NULL DEFAULT FALSE,
        created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
        FOREIGN KEY (seller_id) REFERENCES sellers(id)
    )
    "#,
];

pub async fn create_schema(db: &ConnectionPool) -> Result<()> {
    for ddl in SCHEMA {
        sqlx::query(ddl)
            .execute(db)
            .await
            .context("Failed to create schema")?;
    }

    info!("✅ Database schema ready");
    Ok(())
}

/// Demo data on an empty database: two approved restaurants and their menus.
pub async fn seed_sample_data(db: &ConnectionPool, hashing: &DynHashing) -> Result<()> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sellers")
        .fetch_one(db)
        .await
        .context("Failed to count sellers")?;

    if count > 0 {
        return Ok(());
    }

    info!("📝 Inserting sample data...");

    let sellers = [
        (
            "Rajesh Kumar",
            "rajesh@example.com",
            "Spice Garden",
            "9876543210",
            "MG Road, Hyderabad",
        ),
        (
            "Priya Sharma",
            "priya@example.com",
            "Delicious Bites",
            "9876543211",
            "Banjara Hills, Hyderabad",
        ),
    ];

    let mut seller_ids = Vec::with_capacity(sellers.len());
    for (name, email, restaurant_name, phone, address) in sellers {
        let password_hash = hashing
            .hash_password("password123")
            .await
            .map_err(|e| anyhow::anyhow!("Failed to hash sample password: {e}"))?;

        let result = sqlx::query(
            r#"
            INSERT INTO sellers (name, email, password, restaurant_name, phone, address, status)
            VALUES (?, ?, ?, ?, ?, ?, 'approved')
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(restaurant_name)
        .bind(phone)
        .bind(address)
        .execute(db)
        .await
        .context("Failed to insert sample seller")?;

        seller_ids.push(result.last_insert_id() as i64);
    }

    let food_items = [
        (0, "Veg Biryani", "Flavorful vegetable biryani with aromatic spices", 250_i64, "veg", 30),
        (0, "Butter Chicken", "Creamy and rich butter chicken", 320, "non-veg", 25),
        (1, "Masala Dosa", "Crispy dosa with potato filling", 80, "tiffins", 15),
        (1, "Veg Sandwich", "Fresh vegetable sandwich with chutney", 60, "sandwich", 10),
        (0, "Chicken Curry", "Spicy chicken curry with herbs", 280, "non-veg", 20),
        (1, "Tomato Soup", "Hot and creamy tomato soup", 90, "soup", 5),
    ];

    for (seller_idx, name, description, price, category, preparation_time) in food_items {
        sqlx::query(
            r#"
            INSERT INTO food_items (seller_id, name, description, price, category, preparation_time)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(seller_ids[seller_idx])
        .bind(name)
        .bind(description)
        .bind(price)
        .bind(category)
        .bind(preparation_time)
        .execute(db)
        .await
        .context("Failed to insert sample food item")?;
    }

    info!("✅ Sample data inserted");
    Ok(())
}
