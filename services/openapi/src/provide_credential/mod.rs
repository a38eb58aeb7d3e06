mod env;
pub use env::EnvCredentialProvider;

mod authorization;
pub use authorization::AuthorizationCredentialProvider;

mod r#static;
pub use r#static::StaticCredentialProvider;

mod default;
pub use default::DefaultCredentialProvider;
