pub mod todos;
pub mod user_credentials;
pub mod users;

pub use todos::Entity as Todos;
pub use todos::Model as Todo;
pub use user_credentials::Entity as UserCredentials;
pub use user_credentials::Model as UserCredential;
pub use users::Entity as Users;
pub use users::Model as User;
