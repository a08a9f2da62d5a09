//! Fixture accounts for tests and demos
//!
//! A fixed set of ten accounts covering positive, negative and zero
//! balances, two sexes and five email domains:
//! - ids 0-5: positive balances, id 3 is the richest
//! - ids 6-8: negative balances, id 7 is the least negative
//! - id 9: zero balance
//!
//! Plus [`conflicting_account`], which ties with id 3 on balance.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::{Account, Sex};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture dates are valid")
}

#[allow(clippy::too_many_arguments)]
fn fixture(
    id: i64,
    first_name: &str,
    last_name: &str,
    email: &str,
    birthday: NaiveDate,
    sex: Sex,
    creation_date: NaiveDate,
    balance: Decimal,
) -> Account {
    Account {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        birthday,
        sex,
        creation_date,
        balance,
    }
}

/// Generate the ten fixture accounts, ordered by id
pub fn sample_accounts() -> Vec<Account> {
    vec![
        fixture(
            0,
            "Emmanuel",
            "Macron",
            "emmanuel.macron@gmail.com",
            date(1977, 12, 21),
            Sex::Male,
            date(2018, 5, 12),
            Decimal::new(52000075, 2), // 520,000.75
        ),
        fixture(
            1,
            "Angela",
            "Merkel",
            "angela.merkel@icloud.com",
            date(1954, 7, 17),
            Sex::Female,
            date(2013, 11, 19),
            Decimal::new(61000000, 2), // 610,000.00
        ),
        fixture(
            2,
            "Boris",
            "Johnson",
            "boris.johnson@yahoo.com",
            date(1964, 6, 19),
            Sex::Male,
            date(2020, 1, 22),
            Decimal::new(45000025, 2), // 450,000.25
        ),
        fixture(
            3,
            "Pedro",
            "Sánchez",
            "pedro.sanchez@outlook.com",
            date(1972, 2, 29),
            Sex::Male,
            date(2015, 8, 30),
            Decimal::new(70000030, 2), // 700,000.30
        ),
        fixture(
            4,
            "Mateusz",
            "Morawiecki",
            "mateusz.morawiecki@hotmail.com",
            date(1968, 6, 20),
            Sex::Male,
            date(2014, 7, 15),
            Decimal::new(33000085, 2), // 330,000.85
        ),
        fixture(
            5,
            "Giuseppe",
            "Conte",
            "giuseppe.conte@gmail.com",
            date(1964, 8, 8),
            Sex::Male,
            date(2019, 3, 5),
            Decimal::new(58000090, 2), // 580,000.90
        ),
        fixture(
            6,
            "Sebastian",
            "Kurz",
            "sebastian.kurz@hotmail.com",
            date(1986, 8, 27),
            Sex::Male,
            date(2021, 6, 22),
            Decimal::new(-64000015, 2), // -640,000.15
        ),
        fixture(
            7,
            "Ursula",
            "von der Leyen",
            "ursula.von@gmail.com",
            date(1958, 10, 8),
            Sex::Female,
            date(2012, 2, 19),
            Decimal::new(-7000050, 2), // -70,000.50
        ),
        fixture(
            8,
            "Sanna",
            "Marin",
            "sanna.marin@icloud.com",
            date(1985, 11, 16),
            Sex::Female,
            date(2020, 11, 3),
            Decimal::new(-49500075, 2), // -495,000.75
        ),
        fixture(
            9,
            "Angel",
            "Johnson",
            "angel@gmail.com",
            date(1977, 6, 18),
            Sex::Female,
            date(2016, 4, 28),
            Decimal::ZERO,
        ),
    ]
}

/// An account sharing id 3 and the top balance with the richest fixture
pub fn conflicting_account() -> Account {
    fixture(
        3,
        "Pedro",
        "Ránchez",
        "pedro.ranchez@outlook.com",
        date(1972, 2, 29),
        Sex::Male,
        date(2015, 8, 29),
        Decimal::new(70000030, 2), // 700,000.30
    )
}
