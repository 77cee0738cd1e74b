//! Positional, tab-separated rendering of a [`Model`].
//!
//! ```
//! use bysquare::{tabbed, Model};
//! let model = Model {
//!     currency_code: Some("EUR".into()),
//!     ..Model::default()
//! };
//! let tabbed = tabbed::serialize(&model);
//! assert_eq!(tabbed.split('\t').count(), bysquare::field::SLOT_COUNT);
//! assert_eq!(tabbed::deserialize(&tabbed).unwrap(), model);
//! ```

use crate::error::{Error, Result};
use crate::field::{Field, SLOT_COUNT};
use crate::model::Model;

pub const SEPARATOR: char = '\t';

/// Renders every slot of `model` in order, leaving unset slots empty.
///
/// Text values are written verbatim; a value containing a tab produces a
/// string that [`deserialize`] will reject.
#[must_use]
pub fn serialize(model: &Model) -> String {
    let mut slots = vec![String::new(); SLOT_COUNT];
    for (field, value) in model.values() {
        slots[field.slot()] = value.to_string();
    }
    slots.join("\t")
}

/// Rebuilds a [`Model`] from its tabbed form.
///
/// # Errors
///
/// Fails with [`Error::FieldCount`] unless the string has exactly one token
/// per slot, and with [`Error::InvalidValue`] if a numeric slot doesn't hold
/// a number.
pub fn deserialize(tabbed: &str) -> Result<Model> {
    let found = tabbed.split(SEPARATOR).count();
    if found != SLOT_COUNT {
        return Err(Error::FieldCount {
            expected: SLOT_COUNT,
            found,
        });
    }

    let mut model = Model::default();
    for (field, token) in Field::ALL.into_iter().zip(tabbed.split(SEPARATOR)) {
        if !token.is_empty() {
            model.assign(field, token)?;
        }
    }
    Ok(model)
}

#[cfg(test)]
pub(crate) mod test_utils {
    use crate::model::Model;

    #[must_use]
    pub fn reference_model() -> Model {
        Model {
            iban: Some("SK9611000000002918599669".into()),
            amount: Some(100.0),
            currency_code: Some("EUR".into()),
            variable_symbol: Some("123".into()),
            payments: Some(1),
            payment_options: Some(1),
            bank_accounts: Some(1),
            ..Model::default()
        }
    }

    #[must_use]
    pub fn reference_tabbed() -> String {
        let mut tabbed = String::from("\t1\t1\t100\tEUR\t\t123\t\t\t\t\t1\tSK9611000000002918599669");
        tabbed.push_str(&"\t".repeat(20));
        tabbed
    }
}
