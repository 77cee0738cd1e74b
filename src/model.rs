use crate::error::{Error, Result};
use crate::field::{Field, Kind};

/// A PAY by square payment order. Every attribute is optional; absent
/// attributes occupy an empty slot in the serialized payload.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "PascalCase", default)
)]
pub struct Model {
    #[cfg_attr(feature = "serde", serde(rename = "InvoiceID"))]
    pub invoice_id: Option<String>,
    pub payments: Option<u32>,
    pub payment_options: Option<u32>,
    pub amount: Option<f64>,
    pub currency_code: Option<String>,
    /// `YYYYMMDD`
    pub payment_due_date: Option<String>,
    pub variable_symbol: Option<String>,
    pub constant_symbol: Option<String>,
    pub specific_symbol: Option<String>,
    pub originators_reference_information: Option<String>,
    pub payment_note: Option<String>,
    pub bank_accounts: Option<u32>,
    #[cfg_attr(feature = "serde", serde(rename = "IBAN"))]
    pub iban: Option<String>,
    #[cfg_attr(feature = "serde", serde(rename = "BIC"))]
    pub bic: Option<String>,
    pub standing_order_ext: Option<u32>,
    pub day: Option<u32>,
    pub month: Option<u32>,
    pub periodicity: Option<String>,
    pub last_date: Option<String>,
    pub direct_debit_ext: Option<u32>,
    pub direct_debit_scheme: Option<u32>,
    pub direct_debit_type: Option<u32>,
    pub direct_debit_variable_symbol: Option<String>,
    pub direct_debit_specific_symbol: Option<String>,
    pub direct_debit_originators_reference_information: Option<String>,
    #[cfg_attr(feature = "serde", serde(rename = "MandateID"))]
    pub mandate_id: Option<String>,
    #[cfg_attr(feature = "serde", serde(rename = "CreditorID"))]
    pub creditor_id: Option<String>,
    #[cfg_attr(feature = "serde", serde(rename = "ContractID"))]
    pub contract_id: Option<String>,
    pub max_amount: Option<f64>,
    pub valid_till_date: Option<String>,
    pub beneficiary_name: Option<String>,
    pub beneficiary_address_line1: Option<String>,
    pub beneficiary_address_line2: Option<String>,
}

/// The typed content of a single slot.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Integer(u32),
    Decimal(f64),
}

impl Value {
    /// Interprets `token` according to `kind`. Decimals must be finite.
    #[must_use]
    pub fn parse(kind: Kind, token: &str) -> Option<Self> {
        match kind {
            Kind::Text => Some(Self::Text(token.to_owned())),
            Kind::Integer => token.parse().ok().map(Self::Integer),
            Kind::Decimal => token
                .parse::<f64>()
                .ok()
                .filter(|d| d.is_finite())
                .map(Self::Decimal),
        }
    }
}

// `f64` renders the shortest text that parses back to the same value, so
// `100.0` becomes `100`.
impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Integer(integer) => write!(f, "{integer}"),
            Self::Decimal(decimal) => write!(f, "{decimal}"),
        }
    }
}

enum Slot<'a> {
    Text(&'a Option<String>),
    Integer(&'a Option<u32>),
    Decimal(&'a Option<f64>),
}

enum SlotMut<'a> {
    Text(&'a mut Option<String>),
    Integer(&'a mut Option<u32>),
    Decimal(&'a mut Option<f64>),
}

impl Model {
    /// Returns the value stored for `field`, if any.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<Value> {
        match self.slot(field) {
            Slot::Text(text) => text.clone().map(Value::Text),
            Slot::Integer(integer) => integer.map(Value::Integer),
            Slot::Decimal(decimal) => decimal.map(Value::Decimal),
        }
    }

    /// Parses `token` according to the kind of `field` and stores it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] if a numeric field receives text that
    /// isn't a number of that kind.
    pub fn assign(&mut self, field: Field, token: &str) -> Result<()> {
        let invalid = || Error::InvalidValue {
            field,
            value: token.to_owned(),
        };
        match (self.slot_mut(field), Value::parse(field.kind(), token)) {
            (SlotMut::Text(slot), Some(Value::Text(text))) => *slot = Some(text),
            (SlotMut::Integer(slot), Some(Value::Integer(integer))) => *slot = Some(integer),
            (SlotMut::Decimal(slot), Some(Value::Decimal(decimal))) => *slot = Some(decimal),
            _ => return Err(invalid()),
        }
        Ok(())
    }

    /// Iterates over the populated fields in slot order.
    pub fn values(&self) -> impl Iterator<Item = (Field, Value)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|value| (field, value)))
    }

    fn slot(&self, field: Field) -> Slot<'_> {
        match field {
            Field::InvoiceId => Slot::Text(&self.invoice_id),
            Field::Payments => Slot::Integer(&self.payments),
            Field::PaymentOptions => Slot::Integer(&self.payment_options),
            Field::Amount => Slot::Decimal(&self.amount),
            Field::CurrencyCode => Slot::Text(&self.currency_code),
            Field::PaymentDueDate => Slot::Text(&self.payment_due_date),
            Field::VariableSymbol => Slot::Text(&self.variable_symbol),
            Field::ConstantSymbol => Slot::Text(&self.constant_symbol),
            Field::SpecificSymbol => Slot::Text(&self.specific_symbol),
            Field::OriginatorsReferenceInformation => {
                Slot::Text(&self.originators_reference_information)
            }
            Field::PaymentNote => Slot::Text(&self.payment_note),
            Field::BankAccounts => Slot::Integer(&self.bank_accounts),
            Field::Iban => Slot::Text(&self.iban),
            Field::Bic => Slot::Text(&self.bic),
            Field::StandingOrderExt => Slot::Integer(&self.standing_order_ext),
            Field::Day => Slot::Integer(&self.day),
            Field::Month => Slot::Integer(&self.month),
            Field::Periodicity => Slot::Text(&self.periodicity),
            Field::LastDate => Slot::Text(&self.last_date),
            Field::DirectDebitExt => Slot::Integer(&self.direct_debit_ext),
            Field::DirectDebitScheme => Slot::Integer(&self.direct_debit_scheme),
            Field::DirectDebitType => Slot::Integer(&self.direct_debit_type),
            Field::DirectDebitVariableSymbol => Slot::Text(&self.direct_debit_variable_symbol),
            Field::DirectDebitSpecificSymbol => Slot::Text(&self.direct_debit_specific_symbol),
            Field::DirectDebitOriginatorsReferenceInformation => {
                Slot::Text(&self.direct_debit_originators_reference_information)
            }
            Field::MandateId => Slot::Text(&self.mandate_id),
            Field::CreditorId => Slot::Text(&self.creditor_id),
            Field::ContractId => Slot::Text(&self.contract_id),
            Field::MaxAmount => Slot::Decimal(&self.max_amount),
            Field::ValidTillDate => Slot::Text(&self.valid_till_date),
            Field::BeneficiaryName => Slot::Text(&self.beneficiary_name),
            Field::BeneficiaryAddressLine1 => Slot::Text(&self.beneficiary_address_line1),
            Field::BeneficiaryAddressLine2 => Slot::Text(&self.beneficiary_address_line2),
        }
    }

    fn slot_mut(&mut self, field: Field) -> SlotMut<'_> {
        match field {
            Field::InvoiceId => SlotMut::Text(&mut self.invoice_id),
            Field::Payments => SlotMut::Integer(&mut self.payments),
            Field::PaymentOptions => SlotMut::Integer(&mut self.payment_options),
            Field::Amount => SlotMut::Decimal(&mut self.amount),
            Field::CurrencyCode => SlotMut::Text(&mut self.currency_code),
            Field::PaymentDueDate => SlotMut::Text(&mut self.payment_due_date),
            Field::VariableSymbol => SlotMut::Text(&mut self.variable_symbol),
            Field::ConstantSymbol => SlotMut::Text(&mut self.constant_symbol),
            Field::SpecificSymbol => SlotMut::Text(&mut self.specific_symbol),
            Field::OriginatorsReferenceInformation => {
                SlotMut::Text(&mut self.originators_reference_information)
            }
            Field::PaymentNote => SlotMut::Text(&mut self.payment_note),
            Field::BankAccounts => SlotMut::Integer(&mut self.bank_accounts),
            Field::Iban => SlotMut::Text(&mut self.iban),
            Field::Bic => SlotMut::Text(&mut self.bic),
            Field::StandingOrderExt => SlotMut::Integer(&mut self.standing_order_ext),
            Field::Day => SlotMut::Integer(&mut self.day),
            Field::Month => SlotMut::Integer(&mut self.month),
            Field::Periodicity => SlotMut::Text(&mut self.periodicity),
            Field::LastDate => SlotMut::Text(&mut self.last_date),
            Field::DirectDebitExt => SlotMut::Integer(&mut self.direct_debit_ext),
            Field::DirectDebitScheme => SlotMut::Integer(&mut self.direct_debit_scheme),
            Field::DirectDebitType => SlotMut::Integer(&mut self.direct_debit_type),
            Field::DirectDebitVariableSymbol => {
                SlotMut::Text(&mut self.direct_debit_variable_symbol)
            }
            Field::DirectDebitSpecificSymbol => {
                SlotMut::Text(&mut self.direct_debit_specific_symbol)
            }
            Field::DirectDebitOriginatorsReferenceInformation => {
                SlotMut::Text(&mut self.direct_debit_originators_reference_information)
            }
            Field::MandateId => SlotMut::Text(&mut self.mandate_id),
            Field::CreditorId => SlotMut::Text(&mut self.creditor_id),
            Field::ContractId => SlotMut::Text(&mut self.contract_id),
            Field::MaxAmount => SlotMut::Decimal(&mut self.max_amount),
            Field::ValidTillDate => SlotMut::Text(&mut self.valid_till_date),
            Field::BeneficiaryName => SlotMut::Text(&mut self.beneficiary_name),
            Field::BeneficiaryAddressLine1 => SlotMut::Text(&mut self.beneficiary_address_line1),
            Field::BeneficiaryAddressLine2 => SlotMut::Text(&mut self.beneficiary_address_line2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_matches_kind() {
        let model = Model::default();
        for field in Field::ALL {
            let kind = match model.slot(field) {
                Slot::Text(_) => Kind::Text,
                Slot::Integer(_) => Kind::Integer,
                Slot::Decimal(_) => Kind::Decimal,
            };
            assert_eq!(kind, field.kind(), "{field}");
        }
    }

    #[test]
    fn test_assign() {
        let mut model = Model::default();
        model.assign(Field::Amount, "100").unwrap();
        model.assign(Field::Payments, "1").unwrap();
        model.assign(Field::VariableSymbol, "0123").unwrap();
        assert_eq!(model.amount, Some(100.0));
        assert_eq!(model.payments, Some(1));
        assert_eq!(model.variable_symbol.as_deref(), Some("0123"));
        assert_eq!(model.get(Field::Amount), Some(Value::Decimal(100.0)));
        assert_eq!(model.get(Field::Iban), None);
    }

    #[test]
    fn test_assign_rejects_non_numeric() {
        let mut model = Model::default();
        for (field, token) in [
            (Field::Amount, "abc"),
            (Field::Amount, "NaN"),
            (Field::Amount, "inf"),
            (Field::Payments, "1.5"),
            (Field::Day, "-1"),
        ] {
            match model.assign(field, token).unwrap_err() {
                Error::InvalidValue { field: f, value } => {
                    assert_eq!(f, field);
                    assert_eq!(value, token);
                }
                e => panic!("unexpected error {e:?}"),
            }
        }
        assert_eq!(model, Model::default());
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Decimal(100.0).to_string(), "100");
        assert_eq!(Value::Decimal(12.5).to_string(), "12.5");
        assert_eq!(Value::Decimal(0.1).to_string(), "0.1");
        assert_eq!(Value::Integer(7).to_string(), "7");
        assert_eq!(Value::Text("EUR".into()).to_string(), "EUR");
    }

    #[test]
    fn test_values_in_slot_order() {
        let model = Model {
            iban: Some("SK9611000000002918599669".into()),
            amount: Some(1.5),
            payments: Some(1),
            ..Model::default()
        };
        let fields: Vec<Field> = model.values().map(|(field, _)| field).collect();
        assert_eq!(fields, vec![Field::Payments, Field::Amount, Field::Iban]);
    }
}
