//! Records exchanged with the Cartel backend.
//!
//! Field names follow the backend's camelCase JSON. Search structs list every
//! filter an endpoint accepts; unset filters are left out of the query string.

pub use auth::{LoginRequest, LoginResponse};
pub use books::{Book, BookFormat, BookSearch, ExchangeStatus, Isbn};
pub use common::{Contributor, Page, Pagination, Publisher, Timestamp};
pub use copies::{CopyId, CopySearch, ItemCopy};
pub use factures::{Facture, FactureCopy, FactureDraft, FactureId, FactureItem, FactureRecord};
pub use games::{Barcode, Game, GameCategory, GameSearch};
pub use items::{Item, ItemSearch, Langue};
pub use loans::{Loan, LoanDirection, LoanId, LoanSearch};
pub use persons::{Person, PersonDraft, PersonId, PersonSearch};
pub use suggestions::{Suggestion, SuggestionDraft, SuggestionId, SuggestionType};

mod auth;
mod books;
mod common;
mod copies;
mod factures;
mod games;
mod items;
mod loans;
mod persons;
mod suggestions;
