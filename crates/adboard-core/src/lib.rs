pub mod admin;
pub mod ads;
pub mod error;
pub mod gate;
pub mod models;
pub mod password;
pub mod token;
pub mod traits;


pub use admin::AdminService;
pub use ads::AdService;
pub use error::AppError;
pub use gate::{AuthenticatedAdmin, GateRejection, TokenVerifier, authorize};
pub use models::{Ad, AdminAccount, NewAd};
pub use password::PasswordHasher;
pub use token::{IssuedToken, TokenIssuer};
pub use traits::{AdStore, CredentialStore};
