//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod actor_repo;
pub mod country_repo;
pub mod director_repo;
pub mod favorite_repo;
pub mod genre_repo;
pub mod history_repo;
pub mod moment_repo;
pub mod movie_language_repo;
pub mod movie_repo;
pub mod rating_repo;
pub mod session_repo;
pub mod user_repo;

pub use actor_repo::ActorRepo;
pub use country_repo::CountryRepo;
pub use director_repo::DirectorRepo;
pub use favorite_repo::FavoriteRepo;
pub use genre_repo::GenreRepo;
pub use history_repo::HistoryRepo;
pub use moment_repo::MomentRepo;
pub use movie_language_repo::MovieLanguageRepo;
pub use movie_repo::MovieRepo;
pub use rating_repo::RatingRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
