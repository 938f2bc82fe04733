// src/services/formatter.rs
//
// Mapeamentos puros registro -> campos de apresentação.

use rust_decimal::Decimal;

use crate::{
    common::format::{format_currency, format_date, format_percent, MonthTable},
    models::{
        catalog::icon_for,
        category::{Category, CategoryRow},
        customer::{Customer, CustomerRow, CustomerTier},
        order::{Order, OrderRow, OrderStatus},
        product::{Product, ProductRow, StockStatus},
    },
};

pub fn format_order(order: Order, months: MonthTable) -> OrderRow {
    let status = OrderStatus::parse(&order.status);
    let code = order.id.simple().to_string()[..8].to_ascii_uppercase();

    OrderRow {
        id: order.id,
        code: format!("#{code}"),
        customer_name: order.customer_name,
        date_label: format_date(&order.order_date, months),
        total_label: format_currency(order.total),
        status_label: status.label().to_string(),
        badge: status.badge(),
        status,
    }
}

/// Preço com o desconto percentual aplicado.
pub fn discounted_price(price: Decimal, discount: Decimal) -> Decimal {
    let discount = discount.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
    price - price * discount / Decimal::ONE_HUNDRED
}

pub fn format_product(product: Product) -> ProductRow {
    let stock_status = StockStatus::from_stock(product.stock);
    let discount_label = (product.discount > Decimal::ZERO).then(|| format_percent(product.discount));

    ProductRow {
        id: product.id,
        category: product
            .category_name
            .unwrap_or_else(|| "Sin categoría".to_string()),
        stock: product.stock,
        stock_label: stock_status.label().to_string(),
        badge: stock_status.badge(),
        stock_status,
        price_label: format_currency(product.price),
        discount_label,
        final_price_label: format_currency(discounted_price(product.price, product.discount)),
        thumbnail: product.images.into_iter().next(),
        name: product.name,
    }
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

pub fn format_customer(customer: Customer, months: MonthTable) -> CustomerRow {
    let tier = CustomerTier::parse(&customer.tier);
    let contact = customer
        .email
        .clone()
        .or_else(|| customer.phone.clone())
        .unwrap_or_else(|| "—".to_string());

    CustomerRow {
        id: customer.id,
        initials: initials(&customer.name),
        name: customer.name,
        contact,
        tier_label: tier.label().to_string(),
        badge: tier.badge(),
        tier,
        registered_label: format_date(&customer.registered_at, months),
        order_count: customer.order_count,
        total_spent_label: format_currency(customer.total_spent),
    }
}

pub fn format_category(category: Category) -> CategoryRow {
    CategoryRow {
        id: category.id,
        icon: icon_for(category.icon.as_deref()).to_string(),
        name: category.name,
        description: category.description.unwrap_or_default(),
        display_order: category.display_order,
        active: category.active,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::format::MONTHS_ES;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn product(stock: i32, discount: Decimal) -> Product {
        Product {
            id: Uuid::new_v4(),
            name: "Polera básica".into(),
            description: None,
            category_id: None,
            category_name: None,
            stock,
            price: Decimal::new(10000, 2),
            discount,
            images: vec!["a.png".into(), "b.png".into()],
        }
    }

    #[test]
    fn order_row_has_short_code_and_labels() {
        let id = Uuid::parse_str("a1b2c3d4-0000-0000-0000-000000000000").unwrap();
        let order = Order {
            id,
            customer_id: None,
            customer_name: "María Quispe".into(),
            order_date: Utc.with_ymd_and_hms(2026, 3, 5, 10, 0, 0).unwrap(),
            total: Decimal::new(15050, 2),
            status: "shipped".into(),
        };

        let row = format_order(order, MONTHS_ES);
        assert_eq!(row.code, "#A1B2C3D4");
        assert_eq!(row.date_label, "5 mar, 2026");
        assert_eq!(row.total_label, "Bs. 150.50");
        assert_eq!(row.status, OrderStatus::Shipped);
        assert_eq!(row.status_label, "Enviado");
    }

    #[test]
    fn unrecognized_order_status_is_not_an_error() {
        let order = Order {
            id: Uuid::new_v4(),
            customer_id: None,
            customer_name: "X".into(),
            order_date: Utc::now(),
            total: Decimal::ZERO,
            status: "on_hold".into(),
        };
        let row = format_order(order, MONTHS_ES);
        assert_eq!(row.status, OrderStatus::Unknown);
        assert_eq!(row.badge, crate::models::BadgeStyle::default());
    }

    #[test]
    fn product_row_applies_discount_and_stock_label() {
        let row = format_product(product(4, Decimal::new(10, 0)));
        assert_eq!(row.stock_label, "Low Stock");
        assert_eq!(row.price_label, "Bs. 100.00");
        assert_eq!(row.discount_label.as_deref(), Some("10%"));
        assert_eq!(row.final_price_label, "Bs. 90.00");
        assert_eq!(row.thumbnail.as_deref(), Some("a.png"));
        assert_eq!(row.category, "Sin categoría");

        let no_discount = format_product(product(0, Decimal::ZERO));
        assert_eq!(no_discount.discount_label, None);
        assert_eq!(no_discount.stock_label, "Out of Stock");
    }

    #[test]
    fn customer_contact_falls_back_to_phone() {
        let customer = Customer {
            id: Uuid::new_v4(),
            name: "juan carlos mamani".into(),
            email: None,
            phone: Some("+591 70000000".into()),
            tier: "vip".into(),
            registered_at: Utc.with_ymd_and_hms(2025, 12, 1, 0, 0, 0).unwrap(),
            order_count: 7,
            total_spent: Decimal::new(245000, 2),
        };
        let row = format_customer(customer, MONTHS_ES);
        assert_eq!(row.initials, "JC");
        assert_eq!(row.contact, "+591 70000000");
        assert_eq!(row.tier, CustomerTier::Vip);
        assert_eq!(row.registered_label, "1 dic, 2025");
        assert_eq!(row.total_spent_label, "Bs. 2450.00");
    }

    #[test]
    fn category_icon_uses_default() {
        let row = format_category(Category {
            id: Uuid::new_v4(),
            name: "Varios".into(),
            description: None,
            icon: Some("unknown-key".into()),
            display_order: 3,
            active: true,
        });
        assert_eq!(row.icon, "tag");
        assert_eq!(row.description, "");
    }
}
