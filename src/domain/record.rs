use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Cents, MAX_CENTS, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Work done for a customer
    Service,
    /// Money spent by the shop
    Expense,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Service => "service",
            EntryKind::Expense => "expense",
        }
    }

    /// Column label used in exported sheets.
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::Service => "Service",
            EntryKind::Expense => "Expense",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "service" => Some(EntryKind::Service),
            "expense" => Some(EntryKind::Expense),
            _ => None,
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The closed set of services the shop offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCategory {
    Passport,
    NationalId,
    TaxId,
    VoterId,
    DrivingLicence,
    BirthCertificate,
    DeathCertificate,
    IncomeCertificate,
    ResidenceCertificate,
    Other,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 10] = [
        ServiceCategory::Passport,
        ServiceCategory::NationalId,
        ServiceCategory::TaxId,
        ServiceCategory::VoterId,
        ServiceCategory::DrivingLicence,
        ServiceCategory::BirthCertificate,
        ServiceCategory::DeathCertificate,
        ServiceCategory::IncomeCertificate,
        ServiceCategory::ResidenceCertificate,
        ServiceCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCategory::Passport => "passport",
            ServiceCategory::NationalId => "national_id",
            ServiceCategory::TaxId => "tax_id",
            ServiceCategory::VoterId => "voter_id",
            ServiceCategory::DrivingLicence => "driving_licence",
            ServiceCategory::BirthCertificate => "birth_certificate",
            ServiceCategory::DeathCertificate => "death_certificate",
            ServiceCategory::IncomeCertificate => "income_certificate",
            ServiceCategory::ResidenceCertificate => "residence_certificate",
            ServiceCategory::Other => "other",
        }
    }

    /// Human-readable name, as shown on forms and in exported sheets.
    pub fn label(&self) -> &'static str {
        match self {
            ServiceCategory::Passport => "Passport",
            ServiceCategory::NationalId => "National ID Card",
            ServiceCategory::TaxId => "Tax ID Card",
            ServiceCategory::VoterId => "Voter ID",
            ServiceCategory::DrivingLicence => "Driving Licence",
            ServiceCategory::BirthCertificate => "Birth Certificate",
            ServiceCategory::DeathCertificate => "Death Certificate",
            ServiceCategory::IncomeCertificate => "Income Certificate",
            ServiceCategory::ResidenceCertificate => "Residence Certificate",
            ServiceCategory::Other => "Other",
        }
    }

    /// Accepts either the storage key (`national_id`) or the label
    /// (`National ID Card`), case-insensitively.
    pub fn from_str(s: &str) -> Option<Self> {
        let needle = s.trim();
        Self::ALL.into_iter().find(|category| {
            category.as_str().eq_ignore_ascii_case(needle)
                || category.label().eq_ignore_ascii_case(needle)
        })
    }
}

impl std::fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Partial,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Pending => "pending",
            PaymentStatus::Partial => "partial",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Partial => "Partial",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "paid" => Some(PaymentStatus::Paid),
            "pending" => Some(PaymentStatus::Pending),
            "partial" => Some(PaymentStatus::Partial),
            _ => None,
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How the amounts on a draft relate to its application count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountBasis {
    /// Amounts are totals for the whole entry
    #[default]
    Total,
    /// Amounts are per application and get multiplied by the count
    PerApplication,
}

/// One line of the ledger.
///
/// Profit and pending amount are never stored on the record; they are
/// derived from income, expense and received on every access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub date: NaiveDate,
    pub kind: EntryKind,
    pub customer: Option<String>,
    pub service: Option<ServiceCategory>,
    #[serde(default = "default_application_count")]
    pub application_count: u32,
    pub expense_cents: Cents,
    pub income_cents: Cents,
    pub payment_status: PaymentStatus,
    pub received_cents: Cents,
    #[serde(default)]
    pub remarks: String,
}

pub fn default_application_count() -> u32 {
    1
}

impl TransactionRecord {
    pub fn profit(&self) -> Cents {
        self.income_cents - self.expense_cents
    }

    pub fn pending_cents(&self) -> Cents {
        self.income_cents - self.received_cents
    }

    /// Cash that actually moved for this entry: money in minus money out.
    pub fn net_cash(&self) -> Cents {
        self.received_cents - self.expense_cents
    }

    /// Check the invariants every stored record must satisfy.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, amount) in [
            ("Expense", self.expense_cents),
            ("Income", self.income_cents),
            ("Amount received", self.received_cents),
        ] {
            if amount < 0 {
                return Err(ValidationError::NegativeAmount { field, amount });
            }
            if amount > MAX_CENTS {
                return Err(ValidationError::AmountTooLarge { field });
            }
        }
        if self.application_count == 0 {
            return Err(ValidationError::ZeroApplications);
        }
        if self.received_cents > self.income_cents {
            return Err(ValidationError::ReceivedExceedsIncome {
                received: self.received_cents,
                income: self.income_cents,
            });
        }

        let status_holds = match self.payment_status {
            PaymentStatus::Paid => self.received_cents == self.income_cents,
            PaymentStatus::Pending => self.received_cents == 0,
            PaymentStatus::Partial => true,
        };
        if !status_holds {
            return Err(ValidationError::ReceivedDoesNotMatchStatus {
                status: self.payment_status,
                received: self.received_cents,
                income: self.income_cents,
            });
        }
        Ok(())
    }
}

/// Raw values from the entry form, before status rules and validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub date: NaiveDate,
    pub kind: EntryKind,
    pub customer: Option<String>,
    pub service: Option<ServiceCategory>,
    pub application_count: u32,
    pub basis: AmountBasis,
    pub expense_cents: Cents,
    pub income_cents: Cents,
    pub payment_status: PaymentStatus,
    /// Only consulted for partial payments
    pub received_cents: Cents,
    pub remarks: String,
}

impl EntryDraft {
    /// Start a service entry. Defaults to a single paid application.
    pub fn service(date: NaiveDate, service: ServiceCategory) -> Self {
        Self {
            date,
            kind: EntryKind::Service,
            customer: None,
            service: Some(service),
            application_count: 1,
            basis: AmountBasis::Total,
            expense_cents: 0,
            income_cents: 0,
            payment_status: PaymentStatus::Paid,
            received_cents: 0,
            remarks: String::new(),
        }
    }

    /// Start an expense entry: no income, nothing to collect.
    pub fn expense(date: NaiveDate, amount_cents: Cents) -> Self {
        Self {
            date,
            kind: EntryKind::Expense,
            customer: None,
            service: None,
            application_count: 1,
            basis: AmountBasis::Total,
            expense_cents: amount_cents,
            income_cents: 0,
            payment_status: PaymentStatus::Paid,
            received_cents: 0,
            remarks: String::new(),
        }
    }

    pub fn with_customer(mut self, customer: impl Into<String>) -> Self {
        self.customer = Some(customer.into());
        self
    }

    pub fn with_applications(mut self, count: u32) -> Self {
        self.application_count = count;
        self
    }

    pub fn per_application(mut self) -> Self {
        self.basis = AmountBasis::PerApplication;
        self
    }

    pub fn with_expense(mut self, cents: Cents) -> Self {
        self.expense_cents = cents;
        self
    }

    pub fn with_income(mut self, cents: Cents) -> Self {
        self.income_cents = cents;
        self
    }

    pub fn with_payment(mut self, status: PaymentStatus, received_cents: Cents) -> Self {
        self.payment_status = status;
        self.received_cents = received_cents;
        self
    }

    pub fn with_remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = remarks.into();
        self
    }

    /// Apply amount scaling and payment rules, then validate.
    ///
    /// Paid entries receive their full income and pending entries receive
    /// nothing, whatever was typed into the received field.
    pub fn build(self) -> Result<TransactionRecord, ValidationError> {
        if self.application_count == 0 {
            return Err(ValidationError::ZeroApplications);
        }

        let (expense_cents, income_cents) = match self.basis {
            AmountBasis::Total => (self.expense_cents, self.income_cents),
            AmountBasis::PerApplication => {
                let count = Cents::from(self.application_count);
                let expense = self
                    .expense_cents
                    .checked_mul(count)
                    .ok_or(ValidationError::AmountTooLarge { field: "Expense" })?;
                let income = self
                    .income_cents
                    .checked_mul(count)
                    .ok_or(ValidationError::AmountTooLarge { field: "Income" })?;
                (expense, income)
            }
        };

        let received_cents = match self.payment_status {
            PaymentStatus::Paid => income_cents,
            PaymentStatus::Pending => 0,
            PaymentStatus::Partial => self.received_cents,
        };

        let record = TransactionRecord {
            date: self.date,
            kind: self.kind,
            customer: self
                .customer
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
            service: self.service,
            application_count: self.application_count,
            expense_cents,
            income_cents,
            payment_status: self.payment_status,
            received_cents,
            remarks: self.remarks.trim().to_string(),
        };
        record.validate()?;
        Ok(record)
    }
}
