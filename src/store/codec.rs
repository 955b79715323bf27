//! Line format of the data files.
//!
//! `menu.txt` holds `<id>,<name>,<price>` and `customers.txt` holds
//! `<id>,<name>`. There is no header and no escaping, so a name containing a
//! comma cannot be read back; such a line fails with
//! [`RecordError::FieldCount`].

use super::RecordError;
use crate::model::{Customer, MenuItem};

const DELIMITER: char = ',';

pub fn encode_menu_item(item: &MenuItem) -> String {
    format!("{}{DELIMITER}{}{DELIMITER}{}", item.id, item.name, item.price)
}

pub fn decode_menu_item(line: &str) -> Result<MenuItem, RecordError> {
    let [id, name, price] = split_fields::<3>(line)?;
    Ok(MenuItem::new(parse_id(id)?, name, parse_price(price)?))
}

pub fn encode_customer(customer: &Customer) -> String {
    format!("{}{DELIMITER}{}", customer.id, customer.name)
}

pub fn decode_customer(line: &str) -> Result<Customer, RecordError> {
    let [id, name] = split_fields::<2>(line)?;
    Ok(Customer::new(parse_id(id)?, name))
}

fn split_fields<const N: usize>(line: &str) -> Result<[&str; N], RecordError> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    let found = fields.len();
    fields
        .try_into()
        .map_err(|_| RecordError::FieldCount { expected: N, found })
}

fn parse_id(field: &str) -> Result<i32, RecordError> {
    field
        .trim()
        .parse()
        .map_err(|_| RecordError::InvalidId(field.to_string()))
}

fn parse_price(field: &str) -> Result<f64, RecordError> {
    match field.trim().parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        _ => Err(RecordError::InvalidPrice(field.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_line_accepts_java_style_prices() {
        let item = decode_menu_item("7,Masala Dosa,120.0").expect("valid line");
        assert_eq!(item, MenuItem::new(7, "Masala Dosa", 120.0));
        assert_eq!(encode_menu_item(&item), "7,Masala Dosa,120");
    }

    #[test]
    fn menu_line_rejections() {
        assert_eq!(
            decode_menu_item("1,Tea"),
            Err(RecordError::FieldCount { expected: 3, found: 2 })
        );
        assert_eq!(
            decode_menu_item("1,Tea, with milk,10"),
            Err(RecordError::FieldCount { expected: 3, found: 4 })
        );
        assert_eq!(
            decode_menu_item("x,Tea,10"),
            Err(RecordError::InvalidId("x".to_string()))
        );
        assert_eq!(
            decode_menu_item("1,Tea,ten"),
            Err(RecordError::InvalidPrice("ten".to_string()))
        );
        assert_eq!(
            decode_menu_item("1,Tea,-2"),
            Err(RecordError::InvalidPrice("-2".to_string()))
        );
        assert!(decode_menu_item("1,Tea,NaN").is_err());
    }

    #[test]
    fn customer_line() {
        assert_eq!(
            decode_customer(" 4 ,Meera").expect("valid line"),
            Customer::new(4, "Meera")
        );
        assert_eq!(encode_customer(&Customer::new(4, "Meera")), "4,Meera");
        assert_eq!(
            decode_customer("4"),
            Err(RecordError::FieldCount { expected: 2, found: 1 })
        );
    }
}
