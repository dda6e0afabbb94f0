pub mod courses;
pub mod references;
pub mod users;

pub use self::courses::model::Course;
pub use self::users::model::User;
