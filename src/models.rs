use serde::{Deserialize, Serialize};

// ============ Stored Records ============

/// Moderation status of an account-interest submission.
///
/// No endpoint transitions this today; every record is created `pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterestStatus {
    Pending,
}

/// Handling status of a contact message. Fixed at `new` on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    New,
}

/// A stored account-opening interest submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInterestRecord {
    /// Unique id within the category (milliseconds-since-epoch shaped).
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    /// Primary identity document the applicant intends to present.
    pub primary_doc: String,
    /// ISO-8601 submission timestamp (client-supplied, server-filled if absent).
    pub timestamp: String,
    pub status: InterestStatus,
}

/// A stored contact-form message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub query_type: String,
    pub message: String,
    pub timestamp: String,
    pub status: ContactStatus,
}

// ============ Request Payloads ============

/// Raw POST /api/account-interest body. All fields optional at the wire so
/// presence can be validated explicitly instead of failing deserialization.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountInterestPayload {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub primary_doc: Option<String>,
    pub timestamp: Option<String>,
}

impl AccountInterestPayload {
    /// Returns the validated submission, or `None` if any required field is
    /// missing or blank. `timestamp` is optional.
    pub fn validate(self) -> Option<NewAccountInterest> {
        Some(NewAccountInterest {
            full_name: non_blank(self.full_name)?,
            email: non_blank(self.email)?,
            phone: non_blank(self.phone)?,
            primary_doc: non_blank(self.primary_doc)?,
            timestamp: non_blank(self.timestamp),
        })
    }
}

/// Raw POST /api/contact body.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub query_type: Option<String>,
    pub message: Option<String>,
    pub timestamp: Option<String>,
}

impl ContactPayload {
    pub fn validate(self) -> Option<NewContact> {
        Some(NewContact {
            name: non_blank(self.name)?,
            email: non_blank(self.email)?,
            phone: non_blank(self.phone)?,
            query_type: non_blank(self.query_type)?,
            message: non_blank(self.message)?,
            timestamp: non_blank(self.timestamp),
        })
    }
}

/// A validated account-interest submission, ready for the store.
#[derive(Debug, Clone)]
pub struct NewAccountInterest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub primary_doc: String,
    pub timestamp: Option<String>,
}

/// A validated contact submission, ready for the store.
#[derive(Debug, Clone)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub query_type: String,
    pub message: String,
    pub timestamp: Option<String>,
}

/// Blank and whitespace-only values count as absent.
fn non_blank(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.trim().is_empty())
}

// ============ Banking Reference Data ============

/// The fixed banking reference document served by GET /api/banking-info.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankingInfo {
    pub rules: BankingRules,
    pub account_opening: AccountOpening,
    pub loans: LoanInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankingRules {
    pub title: String,
    pub authority: String,
    pub requirements: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountOpening {
    pub documents: Vec<String>,
    pub requirements: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanInfo {
    pub eligibility: LoanEligibility,
    pub products: Vec<LoanProduct>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanEligibility {
    pub age_min: u32,
    pub age_max_salaried: u32,
    pub age_max_self_employed: u32,
    pub min_income: String,
    pub credit_score: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanProduct {
    pub name: String,
    pub rate: String,
}

impl BankingInfo {
    /// The current reference document. Pure function of no input.
    pub fn current() -> Self {
        BankingInfo {
            rules: BankingRules {
                title: "Indian Banking Rules".to_string(),
                authority: "RBI and Banking Regulation Act, 1949".to_string(),
                requirements: vec![
                    "Customer protection policies".to_string(),
                    "Fair practices code".to_string(),
                    "Legal risk management".to_string(),
                    "Anti-money laundering (AML)".to_string(),
                    "Know Your Customer (KYC)".to_string(),
                ],
            },
            account_opening: AccountOpening {
                documents: vec![
                    "Passport".to_string(),
                    "PAN Card".to_string(),
                    "Voter's ID".to_string(),
                    "Aadhaar".to_string(),
                    "Driving License".to_string(),
                    "Ration Card".to_string(),
                    "Latest Electricity/Telephone Bill".to_string(),
                ],
                requirements: vec![
                    "KYC verification mandatory".to_string(),
                    "Address verification required".to_string(),
                    "Government-issued ID".to_string(),
                    "Recent address proof".to_string(),
                ],
            },
            loans: LoanInfo {
                eligibility: LoanEligibility {
                    age_min: 21,
                    age_max_salaried: 60,
                    age_max_self_employed: 65,
                    min_income: "₹15,000 - ₹25,000/month".to_string(),
                    credit_score: "700+".to_string(),
                },
                products: vec![
                    LoanProduct {
                        name: "Home Loans".to_string(),
                        rate: "~8.6% p.a.".to_string(),
                    },
                    LoanProduct {
                        name: "Personal Loans".to_string(),
                        rate: "9% onwards".to_string(),
                    },
                    LoanProduct {
                        name: "Pensioner Schemes".to_string(),
                        rate: "Special Rates".to_string(),
                    },
                    LoanProduct {
                        name: "Auto Loans".to_string(),
                        rate: "Competitive Rates".to_string(),
                    },
                ],
            },
        }
    }
}
