use crate::constants::{PRICE_NOT_NUMBER, STOCK_NOT_NUMBER};
use crate::errors::Failure;
use crate::handlers::Command;
use crate::interchange::http::{Product, ProductPayload};
use crate::session::{is_admin, Session};
use crate::view::{Card, CardActions, ProductForm};

pub fn price_label(price: f64) -> String {
  format!("${}", price)
}

pub fn stock_label(stock: i64) -> String {
  format!("Stock: {}", stock)
}

fn card(product: &Product, admin: bool) -> Card {
  let actions = if admin {
    Some(CardActions {
      edit: Command::EditProduct { id: product.id },
      delete: Command::DeleteProduct { id: product.id },
    })
  } else {
    None
  };

  Card {
    id: product.id,
    name: product.name.clone(),
    description: product.description.clone(),
    price: price_label(product.price),
    stock: stock_label(product.stock),
    updated: product.updated_at.or(product.created_at),
    actions,
  }
}

// One card per product, in the order the backend returned them.
pub fn render(products: &[Product], session: Option<&Session>) -> Vec<Card> {
  let admin = is_admin(session);
  products.iter().map(|product| card(product, admin)).collect()
}

impl ProductForm {
  pub fn payload(&self) -> Result<ProductPayload, Failure> {
    let price = self
      .price
      .trim()
      .parse::<f64>()
      .map_err(|_| Failure::validation(PRICE_NOT_NUMBER))?;

    let stock = self
      .stock
      .trim()
      .parse::<i64>()
      .map_err(|_| Failure::validation(STOCK_NOT_NUMBER))?;

    Ok(ProductPayload {
      name: self.name.clone(),
      description: self.description.clone(),
      price,
      stock,
    })
  }
}

impl From<&Product> for ProductForm {
  fn from(product: &Product) -> Self {
    ProductForm {
      id: Some(product.id),
      name: product.name.clone(),
      description: product.description.clone(),
      price: format!("{}", product.price),
      stock: format!("{}", product.stock),
    }
  }
}

#[cfg(test)]
mod test {
  use super::{price_label, render};
  use crate::errors::Failure;
  use crate::handlers::Command;
  use crate::session::Session;
  use crate::test_helpers::product;
  use crate::view::ProductForm;

  #[test]
  fn price_labels_drop_trailing_zeros() {
    assert_eq!(price_label(12.5), "$12.5");
    assert_eq!(price_label(10.0), "$10");
  }

  #[test]
  fn guest_cards_have_no_actions() {
    let products = vec![product(1, "mug"), product(2, "cup"), product(3, "plate")];
    let cards = render(&products, None);
    assert_eq!(cards.len(), 3);
    assert!(cards.iter().all(|card| card.actions.is_none()));
  }

  #[test]
  fn customer_cards_have_no_actions() {
    let session = Session {
      email: "c@d.com".into(),
      token: "T2".into(),
      is_admin: false,
    };
    let cards = render(&[product(1, "mug")], Some(&session));
    assert!(cards[0].actions.is_none());
  }

  #[test]
  fn admin_cards_bind_actions_to_ids() {
    let session = Session {
      email: "a@b.com".into(),
      token: "T1".into(),
      is_admin: true,
    };
    let cards = render(&[product(4, "mug"), product(9, "cup")], Some(&session));
    let ids = cards
      .iter()
      .map(|card| card.actions.clone().map(|actions| (actions.edit, actions.delete)))
      .collect::<Vec<_>>();
    assert_eq!(
      ids,
      vec![
        Some((Command::EditProduct { id: 4 }, Command::DeleteProduct { id: 4 })),
        Some((Command::EditProduct { id: 9 }, Command::DeleteProduct { id: 9 })),
      ]
    );
  }

  #[test]
  fn keeps_backend_order() {
    let cards = render(&[product(9, "z"), product(1, "a")], None);
    assert_eq!(cards.iter().map(|c| c.id).collect::<Vec<_>>(), vec![9, 1]);
  }

  #[test]
  fn form_payload_parses_numbers() {
    let form = ProductForm {
      id: None,
      name: "mug".into(),
      description: "blue".into(),
      price: " 12.50 ".into(),
      stock: "3".into(),
    };
    let payload = form.payload().expect("unable to parse");
    assert_eq!(payload.price, 12.5);
    assert_eq!(payload.stock, 3);
  }

  #[test]
  fn form_payload_rejects_bad_numbers() {
    let form = ProductForm {
      price: "cheap".into(),
      stock: "3".into(),
      ..ProductForm::default()
    };
    assert_eq!(
      form.payload(),
      Err(Failure::Validation("Price must be a number".into()))
    );

    let form = ProductForm {
      price: "1".into(),
      stock: "2.5".into(),
      ..ProductForm::default()
    };
    assert_eq!(
      form.payload(),
      Err(Failure::Validation("Stock must be a whole number".into()))
    );
  }

  #[test]
  fn form_from_product() {
    let form = ProductForm::from(&product(5, "mug"));
    assert_eq!(form.id, Some(5));
    assert_eq!(form.name, "mug");
    assert_eq!(form.price, "9.5");
    assert_eq!(form.stock, "4");
  }
}
