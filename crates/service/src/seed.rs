//! Sample records loaded at startup so every endpoint has something to
//! return out of the box.

use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};
use models::resource::new_token;
use models::{
    Card, CustomField, License, OfferCode, Product, Purchase, RecurrencePrice, Sale, Subscriber,
    User, VariantCategory, VariantOption,
};

pub const SAMPLE_LICENSE_KEY: &str = "85DB562A-C11D4B06-A2335A6B-8C079166";
pub const SAMPLE_SALE_ID: &str = "B28UKN-E54A8SJ9-2NF6GK1E";
pub const SAMPLE_SUBSCRIBER_ID: &str = "P5ppE6H8Y2TNxrtKHbWd3g==";

fn ppp(us: i64, india: i64, ecuador: i64) -> BTreeMap<String, i64> {
    BTreeMap::from([
        ("US".to_string(), us),
        ("IN".to_string(), india),
        ("EC".to_string(), ecuador),
    ])
}

pub fn tier_category() -> VariantCategory {
    VariantCategory {
        id: new_token(),
        product_id: "1".into(),
        title: "Tier".into(),
        options: vec![VariantOption {
            name: "First Tier".into(),
            price_difference: 0,
            purchasing_power_parity_prices: ppp(200, 100, 50),
            is_pay_what_you_want: false,
            recurrence_prices: BTreeMap::from([(
                "monthly".to_string(),
                RecurrencePrice {
                    price_cents: 300,
                    suggested_price_cents: None,
                    purchasing_power_parity_prices: ppp(400, 200, 100),
                },
            )]),
        }],
    }
}

pub fn sample_product(tier: VariantCategory) -> Product {
    Product {
        id: 1,
        name: "Basic Plan".into(),
        description: "Basic subscription plan".into(),
        price: 9.99,
        published: true,
        url: "http://example.com/basic".into(),
        currency: "usd".into(),
        thumbnail_url: Some("http://example.com/basic-thumbnail.png".into()),
        tags: vec!["basic".into(), "plan".into()],
        formatted_price: "$9.99".into(),
        sales_count: 0,
        sales_usd_cents: 0,
        is_tiered_membership: true,
        recurrences: vec!["monthly".into()],
        variant_categories: vec![tier],
        offer_codes: vec![OfferCode {
            id: new_token(),
            name: "DISCOUNT10".into(),
            amount_cents: Some(1000),
            percent_off: None,
            max_purchase_count: None,
            universal: false,
            times_used: 0,
        }],
        custom_fields: vec![CustomField { name: "phone number".into(), required: false }],
    }
}

fn sample_card() -> Card {
    Card { visual: Some("**** **** **** 4242".into()), kind: Some("visa".into()) }
}

pub fn sample_license() -> License {
    License {
        product_id: "1".into(),
        license_key: SAMPLE_LICENSE_KEY.into(),
        uses: 0,
        enabled: true,
        purchase: Purchase {
            seller_id: "kL0psVL2admJSYRNs-OCMg==".into(),
            product_id: "1".into(),
            product_name: "Basic Plan".into(),
            permalink: "basic".into(),
            product_permalink: "http://example.com/basic".into(),
            email: "customer@example.com".into(),
            price: 999,
            gumroad_fee: 129,
            currency: "usd".into(),
            quantity: 1,
            discover_fee_charged: false,
            can_contact: true,
            referrer: "direct".into(),
            card: sample_card(),
            order_number: 524459935,
            sale_id: SAMPLE_SALE_ID.into(),
            sale_timestamp: Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).single(),
            purchaser_id: "5550321502811".into(),
            subscription_id: None,
            variants: "(First Tier)".into(),
            license_key: SAMPLE_LICENSE_KEY.into(),
            is_multiseat_license: false,
            ip_country: "United States".into(),
            recurrence: Some("monthly".into()),
            ..Default::default()
        },
    }
}

pub fn sample_sale() -> Sale {
    Sale {
        id: SAMPLE_SALE_ID.into(),
        email: "customer@example.com".into(),
        seller_id: "kL0psVL2admJSYRNs-OCMg==".into(),
        created_at: Utc
            .with_ymd_and_hms(2024, 1, 15, 9, 30, 0)
            .single()
            .unwrap_or_default(),
        product_name: "Basic Plan".into(),
        price: 999,
        gumroad_fee: 129,
        formatted_display_price: "$9.99".into(),
        formatted_total_price: "$9.99".into(),
        currency_symbol: "$".into(),
        amount_refundable_in_currency: "9.99".into(),
        product_id: "1".into(),
        product_permalink: "http://example.com/basic".into(),
        purchase_email: "customer@example.com".into(),
        paid: true,
        order_id: 524459935,
        purchaser_id: "5550321502811".into(),
        is_recurring_billing: true,
        can_contact: true,
        referrer: "direct".into(),
        card: sample_card(),
        license_key: Some(SAMPLE_LICENSE_KEY.into()),
        quantity: 1,
        ..Default::default()
    }
}

pub fn sample_subscriber() -> Subscriber {
    Subscriber {
        id: SAMPLE_SUBSCRIBER_ID.into(),
        product_id: "1".into(),
        product_name: "Basic Plan".into(),
        user_id: "3523953790232".into(),
        user_email: "customer@example.com".into(),
        purchase_ids: vec![SAMPLE_SALE_ID.into()],
        created_at: Utc
            .with_ymd_and_hms(2024, 1, 15, 9, 30, 0)
            .single()
            .unwrap_or_default(),
        charge_occurrence_count: None,
        recurrence: "monthly".into(),
        license_key: Some(SAMPLE_LICENSE_KEY.into()),
        status: "alive".into(),
        ..Default::default()
    }
}

pub fn sample_user() -> User {
    User {
        bio: Some("a sailor, a tailor".into()),
        name: "John Smith".into(),
        twitter_handle: None,
        user_id: "G_-mnBf9b1j9A7a4ub4nFQ==".into(),
        email: "johnsmith@gumroad.com".into(),
        url: "https://gumroad.com/sailorjohn".into(),
    }
}
