//! Entity models and DTOs.

pub mod game;
pub mod notification;
pub mod subscription_type;
pub mod user;

pub use game::{CreateGame, Game};
pub use notification::{CreateNotification, Notification};
pub use subscription_type::{CreateSubscriptionType, SubscriptionType};
pub use user::{CreateUser, User, UserResponse};
