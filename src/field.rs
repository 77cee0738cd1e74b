//! The fixed slot layout of a PAY by square document.
//!
//! Every field of a [`Model`](crate::Model) owns exactly one slot of the
//! tab-separated payload. Slot indices never change.
//!
//! ```
//! use bysquare::{Field, field::Kind};
//! let field: Field = "IBAN".parse().unwrap();
//! assert_eq!(field, Field::Iban);
//! assert_eq!(field.slot(), 12);
//! assert_eq!(Field::from_slot(3), Some(Field::Amount));
//! assert_eq!(Field::Amount.kind(), Kind::Decimal);
//! ```

/// Number of tab-separated slots in a serialized document.
pub const SLOT_COUNT: usize = 33;

/// How the text of a slot is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Text,
    Integer,
    Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    InvoiceId,
    Payments,
    PaymentOptions,
    Amount,
    CurrencyCode,
    PaymentDueDate,
    VariableSymbol,
    ConstantSymbol,
    SpecificSymbol,
    OriginatorsReferenceInformation,
    PaymentNote,
    BankAccounts,
    Iban,
    Bic,
    StandingOrderExt,
    Day,
    Month,
    Periodicity,
    LastDate,
    DirectDebitExt,
    DirectDebitScheme,
    DirectDebitType,
    DirectDebitVariableSymbol,
    DirectDebitSpecificSymbol,
    DirectDebitOriginatorsReferenceInformation,
    MandateId,
    CreditorId,
    ContractId,
    MaxAmount,
    ValidTillDate,
    BeneficiaryName,
    BeneficiaryAddressLine1,
    BeneficiaryAddressLine2,
}

/// Name and kind of every field, indexed by slot.
const TABLE: [(Field, &str, Kind); SLOT_COUNT] = [
    (Field::InvoiceId, "InvoiceID", Kind::Text),
    (Field::Payments, "Payments", Kind::Integer),
    (Field::PaymentOptions, "PaymentOptions", Kind::Integer),
    (Field::Amount, "Amount", Kind::Decimal),
    (Field::CurrencyCode, "CurrencyCode", Kind::Text),
    (Field::PaymentDueDate, "PaymentDueDate", Kind::Text),
    (Field::VariableSymbol, "VariableSymbol", Kind::Text),
    (Field::ConstantSymbol, "ConstantSymbol", Kind::Text),
    (Field::SpecificSymbol, "SpecificSymbol", Kind::Text),
    (
        Field::OriginatorsReferenceInformation,
        "OriginatorsReferenceInformation",
        Kind::Text,
    ),
    (Field::PaymentNote, "PaymentNote", Kind::Text),
    (Field::BankAccounts, "BankAccounts", Kind::Integer),
    (Field::Iban, "IBAN", Kind::Text),
    (Field::Bic, "BIC", Kind::Text),
    (Field::StandingOrderExt, "StandingOrderExt", Kind::Integer),
    (Field::Day, "Day", Kind::Integer),
    (Field::Month, "Month", Kind::Integer),
    (Field::Periodicity, "Periodicity", Kind::Text),
    (Field::LastDate, "LastDate", Kind::Text),
    (Field::DirectDebitExt, "DirectDebitExt", Kind::Integer),
    (Field::DirectDebitScheme, "DirectDebitScheme", Kind::Integer),
    (Field::DirectDebitType, "DirectDebitType", Kind::Integer),
    (
        Field::DirectDebitVariableSymbol,
        "DirectDebitVariableSymbol",
        Kind::Text,
    ),
    (
        Field::DirectDebitSpecificSymbol,
        "DirectDebitSpecificSymbol",
        Kind::Text,
    ),
    (
        Field::DirectDebitOriginatorsReferenceInformation,
        "DirectDebitOriginatorsReferenceInformation",
        Kind::Text,
    ),
    (Field::MandateId, "MandateID", Kind::Text),
    (Field::CreditorId, "CreditorID", Kind::Text),
    (Field::ContractId, "ContractID", Kind::Text),
    (Field::MaxAmount, "MaxAmount", Kind::Decimal),
    (Field::ValidTillDate, "ValidTillDate", Kind::Text),
    (Field::BeneficiaryName, "BeneficiaryName", Kind::Text),
    (
        Field::BeneficiaryAddressLine1,
        "BeneficiaryAddressLine1",
        Kind::Text,
    ),
    (
        Field::BeneficiaryAddressLine2,
        "BeneficiaryAddressLine2",
        Kind::Text,
    ),
];

static NAMES: phf::Map<&'static str, Field> = phf::phf_map! {
    "InvoiceID" => Field::InvoiceId,
    "Payments" => Field::Payments,
    "PaymentOptions" => Field::PaymentOptions,
    "Amount" => Field::Amount,
    "CurrencyCode" => Field::CurrencyCode,
    "PaymentDueDate" => Field::PaymentDueDate,
    "VariableSymbol" => Field::VariableSymbol,
    "ConstantSymbol" => Field::ConstantSymbol,
    "SpecificSymbol" => Field::SpecificSymbol,
    "OriginatorsReferenceInformation" => Field::OriginatorsReferenceInformation,
    "PaymentNote" => Field::PaymentNote,
    "BankAccounts" => Field::BankAccounts,
    "IBAN" => Field::Iban,
    "BIC" => Field::Bic,
    "StandingOrderExt" => Field::StandingOrderExt,
    "Day" => Field::Day,
    "Month" => Field::Month,
    "Periodicity" => Field::Periodicity,
    "LastDate" => Field::LastDate,
    "DirectDebitExt" => Field::DirectDebitExt,
    "DirectDebitScheme" => Field::DirectDebitScheme,
    "DirectDebitType" => Field::DirectDebitType,
    "DirectDebitVariableSymbol" => Field::DirectDebitVariableSymbol,
    "DirectDebitSpecificSymbol" => Field::DirectDebitSpecificSymbol,
    "DirectDebitOriginatorsReferenceInformation" => Field::DirectDebitOriginatorsReferenceInformation,
    "MandateID" => Field::MandateId,
    "CreditorID" => Field::CreditorId,
    "ContractID" => Field::ContractId,
    "MaxAmount" => Field::MaxAmount,
    "ValidTillDate" => Field::ValidTillDate,
    "BeneficiaryName" => Field::BeneficiaryName,
    "BeneficiaryAddressLine1" => Field::BeneficiaryAddressLine1,
    "BeneficiaryAddressLine2" => Field::BeneficiaryAddressLine2,
};

impl Field {
    /// All fields in slot order.
    pub const ALL: [Self; SLOT_COUNT] = {
        let mut all = [Self::InvoiceId; SLOT_COUNT];
        let mut i = 0;
        while i < SLOT_COUNT {
            all[i] = TABLE[i].0;
            i += 1;
        }
        all
    };

    #[must_use]
    pub const fn slot(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn kind(self) -> Kind {
        TABLE[self.slot()].2
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        TABLE[self.slot()].1
    }

    #[must_use]
    pub const fn from_slot(slot: usize) -> Option<Self> {
        if slot < SLOT_COUNT {
            Some(TABLE[slot].0)
        } else {
            None
        }
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing a name that isn't a field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field {0:?}")]
pub struct UnknownField(pub String);

impl core::str::FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NAMES
            .get(s)
            .copied()
            .ok_or_else(|| UnknownField(s.to_owned()))
    }
}
