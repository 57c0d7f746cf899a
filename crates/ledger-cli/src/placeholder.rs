//! Built-in placeholder data for the dashboard demo.
//!
//! One login account, six customers, thirteen invoices spread across those
//! customers, and a year of monthly revenue.

use chrono::NaiveDate;
use ledger_models::{
    CustomerId, CustomerSeed, Datasets, InvoiceSeed, RevenueSeed, UserId, UserSeed,
};

struct Customer {
    id: CustomerId,
    name: &'static str,
    email: &'static str,
    image_url: &'static str,
}

const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid placeholder date"),
    }
}

const USER_ID: UserId = UserId::from_u128(0x410544b2_4001_4271_9855_fec4b6a6442a);

const CUSTOMERS: [Customer; 6] = [
    Customer {
        id: CustomerId::from_u128(0xd6e15727_9fe1_4961_8c5b_ea44a9bd81aa),
        name: "Evil Rabbit",
        email: "evil@rabbit.com",
        image_url: "/customers/evil-rabbit.png",
    },
    Customer {
        id: CustomerId::from_u128(0x3958dc9e_712f_4377_85e9_fec4b6a6442a),
        name: "Delba de Oliveira",
        email: "delba@oliveira.com",
        image_url: "/customers/delba-de-oliveira.png",
    },
    Customer {
        id: CustomerId::from_u128(0x3958dc9e_742f_4377_85e9_fec4b6a6442a),
        name: "Lee Robinson",
        email: "lee@robinson.com",
        image_url: "/customers/lee-robinson.png",
    },
    Customer {
        id: CustomerId::from_u128(0x76d65c26_f784_44a2_ac19_586678f7c2f2),
        name: "Michael Novotny",
        email: "michael@novotny.com",
        image_url: "/customers/michael-novotny.png",
    },
    Customer {
        id: CustomerId::from_u128(0xcc27c14a_0acf_4f4a_a6c9_d45682c144b9),
        name: "Amy Burns",
        email: "amy@burns.com",
        image_url: "/customers/amy-burns.png",
    },
    Customer {
        id: CustomerId::from_u128(0x13d07535_c59e_4157_a011_f8d2ef4e0cbb),
        name: "Balazs Orban",
        email: "balazs@orban.com",
        image_url: "/customers/balazs-orban.png",
    },
];

// (index into CUSTOMERS, amount in cents, status, date)
const INVOICES: [(usize, i32, &str, NaiveDate); 13] = [
    (0, 15795, "pending", date(2022, 12, 6)),
    (1, 20348, "pending", date(2022, 11, 14)),
    (4, 3040, "paid", date(2022, 10, 29)),
    (3, 44800, "paid", date(2023, 9, 10)),
    (5, 34577, "pending", date(2023, 8, 5)),
    (2, 54246, "pending", date(2023, 7, 16)),
    (0, 666, "pending", date(2023, 6, 27)),
    (3, 32545, "paid", date(2023, 6, 9)),
    (4, 1250, "paid", date(2023, 6, 17)),
    (5, 8546, "paid", date(2023, 6, 7)),
    (1, 500, "paid", date(2023, 8, 19)),
    (5, 8945, "paid", date(2023, 6, 3)),
    (2, 1000, "paid", date(2022, 6, 5)),
];

const REVENUE: [(&str, i32); 12] = [
    ("Jan", 2000),
    ("Feb", 1800),
    ("Mar", 2200),
    ("Apr", 2500),
    ("May", 2300),
    ("Jun", 3200),
    ("Jul", 3500),
    ("Aug", 3700),
    ("Sep", 2500),
    ("Oct", 2800),
    ("Nov", 3000),
    ("Dec", 4800),
];

pub fn users() -> Vec<UserSeed> {
    vec![UserSeed {
        id: USER_ID,
        name: "User".to_string(),
        email: "user@nextmail.com".to_string(),
        password: "123456".to_string(),
    }]
}

pub fn customers() -> Vec<CustomerSeed> {
    CUSTOMERS
        .iter()
        .map(|c| CustomerSeed {
            id: c.id,
            name: c.name.to_string(),
            email: c.email.to_string(),
            image_url: c.image_url.to_string(),
        })
        .collect()
}

pub fn invoices() -> Vec<InvoiceSeed> {
    INVOICES
        .iter()
        .map(|&(customer, amount, status, date)| InvoiceSeed {
            customer_id: CUSTOMERS[customer].id,
            amount,
            status: status.to_string(),
            date,
        })
        .collect()
}

pub fn revenue() -> Vec<RevenueSeed> {
    REVENUE
        .iter()
        .map(|&(month, revenue)| RevenueSeed {
            month: month.to_string(),
            revenue,
        })
        .collect()
}

/// All four placeholder datasets.
pub fn datasets() -> Datasets {
    Datasets {
        users: users(),
        customers: customers(),
        invoices: invoices(),
        revenue: revenue(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_dataset_sizes() {
        let data = datasets();

        assert_eq!(data.users.len(), 1);
        assert_eq!(data.customers.len(), 6);
        assert_eq!(data.invoices.len(), 13);
        assert_eq!(data.revenue.len(), 12);
    }

    #[test]
    fn test_every_invoice_references_a_customer() {
        let data = datasets();
        let customer_ids: HashSet<_> = data.customers.iter().map(|c| c.id).collect();

        assert!(
            data.invoices
                .iter()
                .all(|inv| customer_ids.contains(&inv.customer_id))
        );
    }

    #[test]
    fn test_keys_are_unique() {
        let data = datasets();

        let user_emails: HashSet<_> = data.users.iter().map(|u| &u.email).collect();
        let customer_ids: HashSet<_> = data.customers.iter().map(|c| c.id).collect();
        let months: HashSet<_> = data.revenue.iter().map(|r| &r.month).collect();

        assert_eq!(user_emails.len(), data.users.len());
        assert_eq!(customer_ids.len(), data.customers.len());
        assert_eq!(months.len(), data.revenue.len());
    }

    #[test]
    fn test_month_codes_fit_column() {
        // revenue.month is VARCHAR(4)
        assert!(revenue().iter().all(|r| r.month.len() <= 4));
    }

    #[test]
    fn test_user_id_matches_dashboard_fixture() {
        assert_eq!(
            users()[0].id.to_string(),
            "410544b2-4001-4271-9855-fec4b6a6442a"
        );
    }
}
