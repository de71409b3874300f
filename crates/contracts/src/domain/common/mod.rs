pub mod account;

pub use account::{AccountDocument, AccountDocuments, AccountImage, VerificationUpdate};
