mod business;
mod income;
mod macros;
mod tax_bracket;
mod tax_type;
mod taxpayer;
mod transaction;

pub use business::{NppnBusinessType, SectorBusiness};
pub use income::{CrossBorderIncomeType, FinalIncomeType, ServiceIncomeType};
pub use tax_bracket::{STANDARD_BRACKETS, TaxBracket};
pub use tax_type::{TaxType, TaxpayerKind};
pub use taxpayer::{MAX_PTKP_DEPENDENTS, TaxpayerProfile, clamp_dependents};
pub use transaction::{ImportType, LuxuryCategory, ProcurementCategory, VatTransactionType};
