use ledger_models::{CustomerId, CustomerSeed, InvoiceSeed, RevenueSeed, UserId, UserSeed};
use sqlx::PgPool;
use uuid::Uuid;

pub fn test_user(name: &str, email: &str, password: &str) -> UserSeed {
    UserSeed {
        id: UserId::from_uuid(Uuid::new_v4()),
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[allow(dead_code)]
pub fn test_customer(name: &str) -> CustomerSeed {
    CustomerSeed {
        id: CustomerId::from_uuid(Uuid::new_v4()),
        name: name.to_string(),
        email: format!("{}@test.com", name.to_lowercase()),
        image_url: format!("/customers/{}.png", name.to_lowercase()),
    }
}

#[allow(dead_code)]
pub fn test_invoice(customer_id: CustomerId, amount: i32) -> InvoiceSeed {
    InvoiceSeed {
        customer_id,
        amount,
        status: "pending".to_string(),
        date: chrono::NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
    }
}

#[allow(dead_code)]
pub fn test_revenue(month: &str, revenue: i32) -> RevenueSeed {
    RevenueSeed {
        month: month.to_string(),
        revenue,
    }
}

pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .unwrap()
}

#[allow(dead_code)]
pub async fn table_exists(pool: &PgPool, table: &str) -> bool {
    sqlx::query_scalar("SELECT to_regclass($1) IS NOT NULL")
        .bind(format!("public.{}", table))
        .fetch_one(pool)
        .await
        .unwrap()
}
